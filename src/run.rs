use crate::input;
use crate::ledger::operation::{Kind, Operation};
use crate::ledger::service::{AccountService, TransactionOutcome};
use crate::ledger::store::{InMemoryLedger, LedgerStore};
use crate::output;

/// Reads a batch of operations from `input_stream`, applies them to a fresh
/// in-memory ledger, and writes the final balances to `output_stream`.
///
/// Bad rows and rejected operations are reported as tracing events and never
/// stop the batch: the ledger is left exactly as if those rows were absent.
pub fn run(
    input_stream: (impl std::io::Read + Send + 'static),
    output_stream: impl std::io::Write,
) -> Result<(), std::io::Error> {
    let (operations, errors) = input::parse(input_stream);

    let error_reporter = std::thread::spawn(move || {
        for err in errors {
            tracing::warn!("failed to read operation: {:?}", err);
        }
    });

    // The service itself stays on this thread: operations apply one at a
    // time, in the order they were read.
    let mut service = AccountService::new(InMemoryLedger::new());
    for operation in operations {
        apply(&mut service, operation);
    }

    error_reporter
        .join()
        .expect("the error reporting thread should never panic");

    tracing::info!(total = %service.bank_total_balance(), "processed batch");
    output::write(output_stream, service.store().accounts())
}

fn apply<S: LedgerStore>(service: &mut AccountService<S>, operation: Operation) {
    let account_number = operation.account_number;

    let result = match operation.kind {
        Kind::Create => service.create_account(account_number).map(|()| None),
        Kind::Deposit(amount) => service.deposit(account_number, amount).map(Some),
        Kind::Withdraw(amount) => service.withdraw(account_number, amount).map(Some),
    };

    match result {
        Ok(Some(result)) if result.outcome != TransactionOutcome::Success => {
            tracing::warn!(account_number, outcome = ?result.outcome, "operation rejected");
        }
        Ok(_) => {}
        Err(err) => tracing::warn!(account_number, %err, "operation failed"),
    }
}

#[cfg(test)]
mod run_tests {
    use super::run;

    #[test]
    fn test_run_full_batch() {
        let data = r#"op,account,amount
create,2,
create,1,
deposit,1,30.00
withdraw,1,20.00
deposit,2,0.01
withdraw,1,11.00
deposit,2,-1.00"#;
        let mut output_stream = Vec::new();

        run(std::io::Cursor::new(data), &mut output_stream).unwrap();

        // The 11.00 withdrawal (overdraw) and the -1.00 deposit (below
        // minimum) must leave no trace in the balances.
        let want = r#"account,balance
1,10.00
2,0.01
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    // Operations on accounts that were never created are reported and
    // skipped, like any other bad row.
    fn test_run_skips_unknown_accounts_and_bad_rows() {
        let data = r#"op,account,amount
create,1,
this row is not even close to valid
deposit,7,10.00
deposit,1,2.50"#;
        let mut output_stream = Vec::new();

        run(std::io::Cursor::new(data), &mut output_stream).unwrap();

        let want = r#"account,balance
1,2.50
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_run_empty_batch() {
        let data = "op,account,amount\n";
        let mut output_stream = Vec::new();

        run(std::io::Cursor::new(data), &mut output_stream).unwrap();

        assert_eq!("", String::from_utf8(output_stream).unwrap());
    }
}
