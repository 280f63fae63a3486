use crate::ledger::operation::{Kind, Operation};
use crate::ledger::AccountNumber;

use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, PartialEq)]
pub enum Error {
    Csv(String),    // CSV is malformed
    Format(String), // Data format is incorrect
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<<OperationRecord as TryInto<Operation>>::Error> for Error {
    fn from(err: <OperationRecord as TryInto<Operation>>::Error) -> Self {
        Self::Format(err.to_string())
    }
}

// A bad row never aborts the batch: the row's error is streamed on its own
// channel and the remaining operations keep flowing. Whoever consumes the
// errors decides what to do with them.
pub fn parse(
    input_stream: (impl std::io::Read + Send + 'static),
) -> (Receiver<Operation>, Receiver<Error>) {
    let (operation_tx, operation_rx): (Sender<Operation>, Receiver<Operation>) = mpsc::channel();
    let (error_tx, error_rx): (Sender<Error>, Receiver<Error>) = mpsc::channel();

    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    // Moving to a new thread so we can start applying the operations immediately.
    std::thread::spawn(move || {
        for record in reader.deserialize::<OperationRecord>() {
            match convert(record) {
                Ok(operation) => operation_tx.send(operation).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
                Err(err) => error_tx.send(err).unwrap(), // Would only fail if the rx is disconnected, which should not happen here.
            };
        }
    });

    (operation_rx, error_rx)
}

// Convert from a csv deserialise result into an operation result.
fn convert(record: Result<OperationRecord, csv::Error>) -> Result<Operation, Error> {
    Ok(record?.try_into()?)
}

#[test]
// Parsing well-formed data should stream one Operation per row.
fn test_parse_ok() {
    let data = r#"op,account,amount
create,1,
deposit,1,30.00
withdraw,1,20.00
create,2,"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(4, operations.iter().count());
    assert_eq!(0, errors.iter().count());
}

#[test]
fn test_parse_ok_with_whitespace() {
    let data = r#"op,     account,     amount
create, 1,
deposit , 1 , 30.00
    withdraw ,1,20.00
        create                  ,2,"#;
    let reader = std::io::Cursor::new(data);
    let (operations, errors) = parse(reader);

    assert_eq!(4, operations.iter().count());
    assert_eq!(0, errors.iter().count());
}

#[test]
// Parsing incorrectly formatted data should return an Err.
fn test_parse_invalid_format() {
    for (data, err_contains) in vec![
        (
            r#"op,account,amount
some_unknown_op,1,1.0"#,
            "unknown variant `some_unknown_op`",
        ),
        (
            r#"op,account,amount
deposit,,1.00"#, // missing account
            "cannot parse integer from empty string",
        ),
        (
            r#"op,account,amount
create,1"#,
            "found record with 2 fields, but the previous record has 3 fields",
        ),
        (
            r#"op,account,amount
create,1,,,"#,
            "found record with 5 fields, but the previous record has 3 fields",
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (operations, errors) = parse(reader);

        assert_eq!(0, operations.iter().count());

        let errs: Vec<Error> = errors.iter().collect();
        assert_eq!(1, errs.len());

        match &errs[0] {
            Error::Csv(msg) => assert!(msg.contains(err_contains), "{:?}", msg),
            _ => panic!("unexpected error"),
        }
    }
}

#[test]
// Deposits or withdrawals without an amount should fail to convert into an
// Operation.
fn test_parse_invalid_data() {
    for (data, want_err) in vec![
        (
            r#"op,account,amount
deposit,1,"#,
            Error::Format("missing amount for deposit".to_string()),
        ),
        (
            r#"op,account,amount
withdraw,1,"#,
            Error::Format("missing amount for withdraw".to_string()),
        ),
    ] {
        let reader = std::io::Cursor::new(data);
        let (operations, errors) = parse(reader);

        assert_eq!(0, operations.iter().count());

        let errs: Vec<Error> = errors.iter().collect();
        assert_eq!(vec![want_err], errs);
    }
}

// I have an OperationRecord type because I can't directly deserialise into my
// "domain" type, i.e. Operation.
// See https://github.com/BurntSushi/rust-csv/issues/211.
//
// The internal Operation type makes no assumption on how operations are
// actually formatted, so both domain logic and parsing are easier to maintain.
#[derive(Debug, Deserialize)]
pub struct OperationRecord {
    #[serde(rename = "op")]
    kind: OperationRecordKind,

    #[serde(rename = "account")]
    account_number: AccountNumber,

    amount: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationRecordKind {
    Create,
    Deposit,
    Withdraw,
}

impl TryFrom<OperationRecord> for Operation {
    type Error = &'static str;
    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        let account_number = record.account_number;
        let kind = match record.kind {
            OperationRecordKind::Create => Kind::Create,
            OperationRecordKind::Deposit => Kind::Deposit(match record.amount {
                Some(amount) => amount,
                None => return Err("missing amount for deposit"),
            }),
            OperationRecordKind::Withdraw => Kind::Withdraw(match record.amount {
                Some(amount) => amount,
                None => return Err("missing amount for withdraw"),
            }),
        };

        Ok(Self::new(kind, account_number))
    }
}

#[test]
// When the records are well formed, they should be correctly converted into
// Operation.
fn test_operation_record_into_operation_well_formed() {
    let test_cases: Vec<(OperationRecord, Operation)> = vec![
        (
            OperationRecord {
                kind: OperationRecordKind::Create,
                account_number: 1,
                amount: None,
            },
            Operation::new(Kind::Create, 1),
        ),
        (
            OperationRecord {
                kind: OperationRecordKind::Deposit,
                account_number: 2,
                amount: Some(Decimal::new(2100, 2)),
            },
            Operation::new(Kind::Deposit(Decimal::new(2100, 2)), 2),
        ),
        (
            OperationRecord {
                kind: OperationRecordKind::Withdraw,
                account_number: 33,
                amount: Some(Decimal::new(12, 1)),
            },
            Operation::new(Kind::Withdraw(Decimal::new(12, 1)), 33),
        ),
    ];

    for (record, operation) in test_cases {
        assert_eq!(operation, record.try_into().unwrap());
    }
}

#[test]
// When the records are malformed, they should return an Err.
fn test_operation_record_into_operation_invalid_data() {
    let record = OperationRecord {
        kind: OperationRecordKind::Withdraw,
        account_number: 1,
        amount: None,
    };

    let got = Operation::try_from(record);
    assert_eq!(Err("missing amount for withdraw"), got);
}
