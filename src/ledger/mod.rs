pub mod account;
pub mod ledger;

pub use account::{Account, AccountError};
pub use ledger::{Ledger, LedgerError};

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the accounts HashMap:
// (1) accounts: HashMap<u32, Account>
// (2) accounts: HashMap<AccountNumber, Account>
// Implementation (1) would most likely need comments, and could be confusing.
// Implementation (2) is self-explanatory.
pub type AccountNumber = u32;

// I decided to use a decimal library instead of the built-in f64 type, to be
// safer when dealing with money, and making the decimal precision easier to
// deal with.
pub type Amount = rust_decimal::Decimal;
const DECIMAL_PRECISION: u32 = 2;

// Three accounts are pre-seeded, leaving room for seven more.
const MAX_ACCOUNTS: usize = 10;
