use crate::ledger::{AccountNumber, Amount, DECIMAL_PRECISION};

use serde::Serialize;

#[derive(Serialize)]
struct BalanceRecord {
    #[serde(rename = "account")]
    account_number: AccountNumber,

    balance: Amount,
}

impl BalanceRecord {
    fn new(account_number: AccountNumber, balance: Amount) -> Self {
        // Rescale so every balance prints with exactly two decimal places,
        // 0 included ("0.00", not "0").
        let mut balance = balance;
        balance.rescale(DECIMAL_PRECISION);

        Self {
            account_number,
            balance,
        }
    }
}

/// Writes the account balances to the given stream, one record per account.
pub fn write(
    output_stream: impl std::io::Write,
    accounts: Vec<(AccountNumber, Amount)>,
) -> Result<(), std::io::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for (account_number, balance) in accounts {
        let record = BalanceRecord::new(account_number, balance);
        writer.serialize(record)?;
    }

    Ok(())
}
