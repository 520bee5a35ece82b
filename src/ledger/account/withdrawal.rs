use crate::ledger::{Amount, DECIMAL_PRECISION};

use super::account::{Account, AccountError};

impl Account {
    /// Take money out of the account.
    ///
    /// The balance can never go negative: a withdrawal larger than the
    /// current balance fails and leaves the account untouched.
    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        let amount = amount.round_dp(DECIMAL_PRECISION);
        if amount <= Amount::ZERO {
            return Err(AccountError::InvalidAmount);
        }

        if amount > self.balance {
            return Err(AccountError::InsufficientFunds);
        }

        self.balance -= amount;

        self.transactions.push(format!(
            "Withdrew: ${:.2}. New balance: ${:.2}",
            amount, self.balance
        ));

        Ok(())
    }
}
