use crate::ledger::{Amount, DECIMAL_PRECISION};

use super::account::{Account, AccountError};

impl Account {
    /// Add money to the account.
    ///
    /// The amount is rounded to the minor-unit precision before anything
    /// else, so a sub-cent deposit is rejected as invalid rather than
    /// silently applied as zero. There is no upper bound on the amount,
    /// short of overflowing the balance.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        let amount = amount.round_dp(DECIMAL_PRECISION);
        if amount <= Amount::ZERO {
            return Err(AccountError::InvalidAmount);
        }

        // The balance and the log move together: nothing is appended unless
        // the addition succeeded.
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::Overflow)?;

        self.transactions.push(format!(
            "Deposited: ${:.2}. New balance: ${:.2}",
            amount, self.balance
        ));

        Ok(())
    }
}

#[cfg(test)]
mod deposit_tests {
    use super::{Account, AccountError};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deposit_ok() {
        let mut acc = Account::new(100, "Neel", dec!(400.00), "neelpassword");

        let got = acc.deposit(dec!(100));
        assert_eq!(Ok(()), got);
        assert_eq!(dec!(500.00), acc.balance());
        assert_eq!(
            Some(&"Deposited: $100.00. New balance: $500.00".to_string()),
            acc.transactions().last()
        );
    }

    #[test]
    fn test_deposit_rounds_the_amount() {
        let mut acc = Account::new(100, "Neel", dec!(400.00), "neelpassword");

        acc.deposit(dec!(0.999)).expect("should apply a deposit");
        assert_eq!(dec!(401.00), acc.balance());
    }

    #[test]
    fn test_deposit_non_positive_amount() {
        for amount in vec![dec!(0), dec!(-1), dec!(-400.55), dec!(0.001)] {
            let mut acc = Account::new(100, "Neel", dec!(400.00), "neelpassword");

            let got = acc.deposit(amount);
            assert_eq!(Err(AccountError::InvalidAmount), got, "{:?}", amount);
            assert_eq!(dec!(400.00), acc.balance());
            assert_eq!(1, acc.transactions().len());
        }
    }

    #[test]
    fn test_deposit_overflow() {
        let mut acc = Account::new(100, "Neel", Decimal::MAX, "neelpassword");

        let got = acc.deposit(dec!(1));
        assert_eq!(Err(AccountError::Overflow), got);
        assert_eq!(Decimal::MAX, acc.balance());
        assert_eq!(1, acc.transactions().len());
    }
}
