use super::{AccountNumber, Amount};

#[derive(Debug, PartialEq)]
pub enum Kind {
    Create,           // Open the account with a zero balance.
    Deposit(Amount),  // Add money to the account.
    Withdraw(Amount), // Take money out of the account.
}

/// One instruction for the account service, as read from a batch.
#[derive(Debug, PartialEq)]
pub struct Operation {
    pub(crate) kind: Kind,
    pub(crate) account_number: AccountNumber,
}

impl Operation {
    // The new() function rounds amounts to whole cents, so the service never
    // sees anything finer than its own minimum transaction amount.
    pub fn new(kind: Kind, account_number: AccountNumber) -> Self {
        let kind = match kind {
            Kind::Deposit(amount) => Kind::Deposit(amount.round_dp(super::DECIMAL_PRECISION)),
            Kind::Withdraw(amount) => Kind::Withdraw(amount.round_dp(super::DECIMAL_PRECISION)),
            Kind::Create => Kind::Create,
        };

        Self {
            kind,
            account_number,
        }
    }
}

#[test]
// Amounts are rounded to 2 decimal places on the way in.
fn test_operation_decimal_precision() {
    use rust_decimal_macros::dec;

    for (raw_amount, want_amount) in vec![
        (dec!(1.0), dec!(1.0)),
        (dec!(0.999), dec!(1.00)),
        (dec!(1.001), dec!(1.00)),
        (dec!(1.23), dec!(1.23)),
        (dec!(1.239), dec!(1.24)),
    ] {
        let operation = Operation::new(Kind::Deposit(raw_amount), 1);
        assert_eq!(Kind::Deposit(want_amount), operation.kind);
    }
}
