use super::{
    AccountService, TransactionOutcome, TransactionResult, MINIMUM_ACCOUNT_BALANCE,
    MINIMUM_TRANSACTION_AMOUNT,
};
use crate::ledger::store::{LedgerError, LedgerStore};
use crate::ledger::{AccountNumber, Amount};

impl<S: LedgerStore> AccountService<S> {
    /// Withdraw `amount` from an account.
    ///
    /// Below-minimum amounts are rejected like deposits. A withdrawal that
    /// would leave the balance under [`MINIMUM_ACCOUNT_BALANCE`] is rejected
    /// with [`TransactionOutcome::OverdrawPrevented`]; draining the account
    /// to exactly 0.00 is allowed.
    pub fn withdraw(
        &mut self,
        account_number: AccountNumber,
        amount: Amount,
    ) -> Result<TransactionResult, LedgerError> {
        self.ensure_account_exists(account_number)?;

        if amount < MINIMUM_TRANSACTION_AMOUNT {
            tracing::debug!(account_number, %amount, "withdrawal below the minimum amount");
            return Ok(TransactionResult {
                balance: self.store.balance(account_number)?,
                outcome: TransactionOutcome::BelowMinimumAmount,
            });
        }

        let balance_before_withdrawal = self.store.balance(account_number)?;
        if balance_before_withdrawal - amount < MINIMUM_ACCOUNT_BALANCE {
            tracing::debug!(account_number, %amount, "withdrawal would overdraw the account");
            return Ok(TransactionResult {
                balance: balance_before_withdrawal,
                outcome: TransactionOutcome::OverdrawPrevented,
            });
        }

        self.store.withdraw(account_number, amount)?;

        Ok(TransactionResult {
            balance: self.store.balance(account_number)?,
            outcome: TransactionOutcome::Success,
        })
    }
}
