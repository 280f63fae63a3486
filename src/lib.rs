//! An in-memory bank ledger.
//!
//! The [`ledger`] module holds the core: a [`ledger::store::LedgerStore`]
//! owning the balances, wrapped by a [`ledger::service::AccountService`]
//! which enforces the business rules (minimum transaction amount, overdraft
//! prevention) and classifies every operation's outcome.
//!
//! [`input`], [`output`] and [`run`] wire that core to CSV batches: a stream
//! of operations in, the final account balances out.

pub mod input;
pub mod ledger;
pub mod output;
pub mod run;
