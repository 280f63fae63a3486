use super::{
    AccountService, TransactionOutcome, TransactionResult, MINIMUM_TRANSACTION_AMOUNT,
};
use crate::ledger::store::{LedgerError, LedgerStore};
use crate::ledger::{AccountNumber, Amount};

impl<S: LedgerStore> AccountService<S> {
    /// Deposit `amount` into an account.
    ///
    /// Amounts below [`MINIMUM_TRANSACTION_AMOUNT`] are rejected with
    /// [`TransactionOutcome::BelowMinimumAmount`] and leave the balance
    /// untouched; exactly 0.01 is accepted.
    pub fn deposit(
        &mut self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<TransactionResult, LedgerError> {
        self.ensure_account_exists(account_number)?;

        if amount < MINIMUM_TRANSACTION_AMOUNT {
            tracing::debug!(account_number, %amount, "deposit below the minimum amount");
            return Ok(TransactionResult {
                balance: self.store.balance(account_number)?,
                outcome: TransactionOutcome::BelowMinimumAmount,
            });
        }

        self.store.deposit(account_number, amount)?;

        Ok(TransactionResult {
            balance: self.store.balance(account_number)?,
            outcome: TransactionOutcome::Success,
        })
    }
}
