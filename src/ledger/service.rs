mod deposit;
mod withdraw;

use super::store::{LedgerError, LedgerStore};
use super::{AccountNumber, Amount};

use rust_decimal::Decimal;

/// Smallest amount accepted for a deposit or a withdrawal: 0.01.
pub const MINIMUM_TRANSACTION_AMOUNT: Amount = Decimal::from_parts(1, 0, 0, false, 2);

/// Balances are never allowed to drop below this: 0.00.
pub const MINIMUM_ACCOUNT_BALANCE: Amount = Decimal::ZERO;

/// Every new account starts with this balance.
pub const STARTING_BALANCE: Amount = Decimal::ZERO;

/// How a deposit or withdrawal attempt ended, when it didn't hit a
/// precondition error.
///
/// This is a closed set: a rejected transaction is a successful call that
/// reports a non-success outcome and leaves the ledger unchanged. Callers
/// only need error handling for true precondition violations (an unknown
/// account), never for ordinary business-rule rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome {
    /// The ledger was mutated as requested.
    Success,

    /// The amount was zero, negative, or below one cent. Nothing changed.
    BelowMinimumAmount,

    /// The withdrawal would have overdrawn the account. Nothing changed.
    OverdrawPrevented,
}

/// The resulting balance of an operation, paired with its outcome.
/// Produced fresh per call, owned solely by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionResult {
    pub balance: Amount,
    pub outcome: TransactionOutcome,
}

/// Wraps a [`LedgerStore`] with validation. The only place policy lives:
/// the store blindly mutates balances, the service decides whether it may.
pub struct AccountService<S> {
    store: S,
}

impl<S: LedgerStore> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Open a new account with a starting balance of 0.00.
    pub fn create_account(&mut self, account_number: AccountNumber) -> Result<(), LedgerError> {
        self.store.create_account(account_number)
    }

    /// Current balance of a single account. No mutation.
    pub fn balance(&self, account_number: AccountNumber) -> Result<TransactionResult, LedgerError> {
        self.ensure_account_exists(account_number)?;

        Ok(TransactionResult {
            balance: self.store.balance(account_number)?,
            outcome: TransactionOutcome::Success,
        })
    }

    /// Sum of every customer balance held by the bank.
    pub fn bank_total_balance(&self) -> Amount {
        self.store.total_balance()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn ensure_account_exists(&self, account_number: AccountNumber) -> Result<(), LedgerError> {
        if !self.store.account_exists(account_number) {
            return Err(LedgerError::AccountNotFound(account_number));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountService, TransactionOutcome, TransactionResult, STARTING_BALANCE};
    use crate::ledger::store::{InMemoryLedger, LedgerError};
    use rust_decimal_macros::dec;

    fn service_with_accounts(account_numbers: Vec<u32>) -> AccountService<InMemoryLedger> {
        let mut service = AccountService::new(InMemoryLedger::new());
        for account_number in account_numbers {
            service
                .create_account(account_number)
                .expect("should create the account");
        }

        service
    }

    #[test]
    fn test_new_account_starts_empty() {
        let service = service_with_accounts(vec![1]);

        let got = service.balance(1).expect("account exists");
        assert_eq!(STARTING_BALANCE, got.balance);
        assert_eq!(TransactionOutcome::Success, got.outcome);
    }

    #[test]
    fn test_create_account_twice_is_rejected() {
        let mut service = service_with_accounts(vec![1]);

        let got = service.create_account(1);
        assert_eq!(Err(LedgerError::AccountAlreadyExists(1)), got);
    }

    #[test]
    fn test_balance_unknown_account() {
        let service = service_with_accounts(vec![1]);

        let got = service.balance(2);
        assert_eq!(Err(LedgerError::AccountNotFound(2)), got);
        assert_eq!(
            "Customer account number '2' does not exist!",
            got.unwrap_err().to_string()
        );
    }

    #[test]
    fn test_balance_reports_success_without_mutating() {
        let mut service = service_with_accounts(vec![1]);
        service.deposit(1, dec!(12.34)).expect("account exists");

        for _ in 0..3 {
            let want = TransactionResult {
                balance: dec!(12.34),
                outcome: TransactionOutcome::Success,
            };
            assert_eq!(Ok(want), service.balance(1));
        }
    }

    #[test]
    // Alice deposits 30.00 then withdraws 20.00: her balance and the bank
    // total are both 10.00, and an 11.00 withdrawal changes nothing.
    fn test_deposit_withdraw_combo() {
        let mut service = service_with_accounts(vec![1]);

        let got = service.deposit(1, dec!(30.00)).expect("account exists");
        assert_eq!(dec!(30.00), got.balance);
        assert_eq!(TransactionOutcome::Success, got.outcome);

        let got = service.withdraw(1, dec!(20.00)).expect("account exists");
        assert_eq!(dec!(10.00), got.balance);
        assert_eq!(TransactionOutcome::Success, got.outcome);
        assert_eq!(dec!(10.00), service.bank_total_balance());

        let got = service.withdraw(1, dec!(11.00)).expect("account exists");
        assert_eq!(dec!(10.00), got.balance);
        assert_eq!(TransactionOutcome::OverdrawPrevented, got.outcome);
        assert_eq!(dec!(10.00), service.bank_total_balance());
    }

    #[test]
    // One cent into each of two accounts: the bank holds exactly 0.02.
    fn test_bank_total_over_multiple_accounts() {
        let mut service = service_with_accounts(vec![1, 2]);

        for account_number in vec![1, 2] {
            let got = service
                .deposit(account_number, dec!(0.01))
                .expect("account exists");
            assert_eq!(dec!(0.01), got.balance);
            assert_eq!(TransactionOutcome::Success, got.outcome);
        }

        assert_eq!(dec!(0.02), service.bank_total_balance());
    }

    #[test]
    // The bank total always equals the sum of the individual balances.
    fn test_bank_total_matches_sum_of_balances() {
        let mut service = service_with_accounts(vec![1, 2, 3]);

        service.deposit(1, dec!(10.00)).expect("account exists");
        service.deposit(2, dec!(0.01)).expect("account exists");
        service.deposit(3, dec!(7.50)).expect("account exists");
        service.withdraw(1, dec!(2.49)).expect("account exists");
        service.withdraw(3, dec!(7.50)).expect("account exists");
        // Rejected operations must not show up in the total either.
        service.withdraw(2, dec!(5.00)).expect("account exists");
        service.deposit(3, dec!(-1.00)).expect("account exists");

        let sum: crate::ledger::Amount = vec![1, 2, 3]
            .into_iter()
            .map(|n| service.balance(n).expect("account exists").balance)
            .sum();

        assert_eq!(sum, service.bank_total_balance());
        assert_eq!(dec!(7.52), sum);
    }

    #[test]
    // Depositing then withdrawing the same amount returns the balance to its
    // starting point.
    fn test_deposit_withdraw_round_trip() {
        let mut service = service_with_accounts(vec![1]);
        service.deposit(1, dec!(3.33)).expect("account exists");

        service.deposit(1, dec!(41.67)).expect("account exists");
        let got = service.withdraw(1, dec!(41.67)).expect("account exists");

        assert_eq!(dec!(3.33), got.balance);
        assert_eq!(TransactionOutcome::Success, got.outcome);
    }
}
