use crate::ledger::{AccountNumber, Amount, DECIMAL_PRECISION};

use rust_decimal_macros::dec;
use std::fmt;

/// Note: I chose to keep errors simple here.
/// In a real-world scenario, we would most likely need some debugging info
/// (e.g. `account_number`, `amount` and some info about the current state).
#[derive(Debug, PartialEq)]
pub enum AccountError {
    /// A deposit or withdrawal amount is zero or negative.
    InvalidAmount,

    /// Funds in the account are unsufficient for a withdrawal.
    InsufficientFunds,

    /// Adding more money to the balance would overflow.
    Overflow,
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidAmount => "amount must be positive",
            Self::InsufficientFunds => "insufficient balance",
            Self::Overflow => "balance overflow",
        };
        write!(f, "{}", msg)
    }
}

/// A single holder's balance, credentials and transaction history.
///
/// Every mutation goes through [`Account::deposit`] or [`Account::withdraw`],
/// and each successful one appends exactly one entry to the transaction log.
/// The log only ever grows; its first entry is the creation record.
pub struct Account {
    account_number: AccountNumber,
    holder_name: String,
    pub(super) balance: Amount,

    // Stored but never applied to the balance: there is no accrual.
    interest_rate: Amount,

    password: String,

    pub(super) transactions: Vec<String>,
}

impl Account {
    pub fn new(
        account_number: AccountNumber,
        holder_name: &str,
        initial_balance: Amount,
        password: &str,
    ) -> Self {
        let balance = initial_balance.round_dp(DECIMAL_PRECISION);

        Self {
            account_number,
            holder_name: holder_name.to_string(),
            balance,
            interest_rate: dec!(0.03),
            password: password.to_string(),
            transactions: vec![format!("Account created with balance: ${:.2}", balance)],
        }
    }

    /// Pure equality check against the stored credential, no side effect.
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn interest_rate(&self) -> Amount {
        self.interest_rate
    }

    /// Returns a copy of the transaction log, oldest entry first.
    /// Callers get their own Vec: mutating it can't touch the account.
    pub fn transactions(&self) -> Vec<String> {
        self.transactions.clone()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account Holder: {}", self.holder_name)?;
        writeln!(f, "Account Number: {}", self.account_number)?;
        writeln!(f, "Interest Rate: {}%", self.interest_rate * dec!(100))?;
        write!(f, "Balance: ${:.2}", self.balance)
    }
}
