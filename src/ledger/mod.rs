pub mod operation;
pub mod service;
pub mod store;

// Named types don't give us any compiler help, but they make signatures much
// easier to read: `HashMap<AccountNumber, Amount>` explains itself, while
// `HashMap<u32, Decimal>` needs a comment. They also make changing the
// underlying integer type a one-line affair.
//
// Account numbers are unsigned on purpose: negative numbers are invalid, and
// making them unrepresentable beats validating them.
pub type AccountNumber = u32;

// Money is a decimal type, never a binary float: summing 0.01 three times
// must give exactly 0.03.
pub type Amount = rust_decimal::Decimal;

/// Monetary amounts carry two fractional digits (whole cents).
pub const DECIMAL_PRECISION: u32 = 2;
