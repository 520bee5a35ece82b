pub mod account;
mod deposit;
mod withdrawal;

pub use account::{Account, AccountError};
