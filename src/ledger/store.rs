use super::{AccountNumber, Amount};

use rust_decimal::Decimal;
use std::collections::HashMap;
use thiserror::Error;

/// The error message embeds the account number verbatim: callers match on the
/// message text, so its exact wording is part of the contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Customer account number '{0}' does not exist!")]
    AccountNotFound(AccountNumber),

    #[error("Customer account number '{0}' already exists!")]
    AccountAlreadyExists(AccountNumber),

    /// Adding more money to a balance would overflow the decimal type.
    #[error("balance arithmetic overflowed")]
    BalanceOverflow,
}

/// Storage capability behind the account service.
///
/// The store is a dumb key-value mutator: it holds balances and nothing else.
/// It trusts its caller for policy, so calling `withdraw` directly can drive
/// a balance negative. All validation lives in the service.
///
/// It is a trait rather than a concrete type so the service can be reused
/// over a future persistent implementation.
pub trait LedgerStore {
    /// Insert a new account with a zero balance.
    fn create_account(&mut self, account_number: AccountNumber) -> Result<(), LedgerError>;

    /// Pure lookup, no side effects.
    fn account_exists(&self, account_number: AccountNumber) -> bool;

    fn balance(&self, account_number: AccountNumber) -> Result<Amount, LedgerError>;

    /// Add `amount` to the stored balance. No validation of the amount.
    fn deposit(
        &mut self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Subtract `amount` from the stored balance. No validation of the amount.
    fn withdraw(
        &mut self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Sum of all account balances. O(n) in the number of accounts.
    fn total_balance(&self) -> Amount;

    /// Snapshot of every account, sorted by account number.
    fn accounts(&self) -> Vec<(AccountNumber, Amount)>;
}

/// The ledger of all customer accounts, held in memory.
#[derive(Default)]
pub struct InMemoryLedger {
    balances: HashMap<AccountNumber, Amount>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn balance_mut(&mut self, account_number: AccountNumber) -> Result<&mut Amount, LedgerError> {
        self.balances
            .get_mut(&account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))
    }
}

impl LedgerStore for InMemoryLedger {
    fn create_account(&mut self, account_number: AccountNumber) -> Result<(), LedgerError> {
        if self.balances.contains_key(&account_number) {
            return Err(LedgerError::AccountAlreadyExists(account_number));
        }

        self.balances.insert(account_number, Decimal::ZERO);
        Ok(())
    }

    fn account_exists(&self, account_number: AccountNumber) -> bool {
        self.balances.contains_key(&account_number)
    }

    fn balance(&self, account_number: AccountNumber) -> Result<Amount, LedgerError> {
        self.balances
            .get(&account_number)
            .copied()
            .ok_or(LedgerError::AccountNotFound(account_number))
    }

    fn deposit(
        &mut self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let balance = self.balance_mut(account_number)?;
        *balance = balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        Ok(())
    }

    fn withdraw(
        &mut self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let balance = self.balance_mut(account_number)?;
        *balance = balance
            .checked_sub(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        Ok(())
    }

    fn total_balance(&self) -> Amount {
        self.balances.values().sum()
    }

    fn accounts(&self) -> Vec<(AccountNumber, Amount)> {
        let mut accounts: Vec<(AccountNumber, Amount)> =
            self.balances.iter().map(|(&n, &b)| (n, b)).collect();
        accounts.sort_unstable_by_key(|&(n, _)| n);

        accounts
    }
}
