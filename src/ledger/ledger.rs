use super::account::Account;
use super::{AccountNumber, Amount, MAX_ACCOUNTS};

use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum LedgerError {
    /// Either the account number doesn't exist, or the password doesn't
    /// match. The two cases are collapsed on purpose: callers must not be
    /// able to probe which account numbers are in use.
    AuthenticationFailed,

    /// The ledger already holds the maximum number of accounts.
    CapacityExceeded,
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::AuthenticationFailed => "invalid account number or password",
            Self::CapacityExceeded => "maximum number of accounts reached",
        };
        write!(f, "{}", msg)
    }
}

/// The owning collection of all accounts, plus the account-number
/// allocation policy: numbers are handed out sequentially and never
/// reused, even though no removal operation exists today.
pub struct Ledger {
    accounts: HashMap<AccountNumber, Account>,
    next_account_number: AccountNumber,
}

impl Ledger {
    /// Build a ledger pre-seeded with the three demo accounts.
    pub fn new() -> Self {
        let accounts = HashMap::from([
            (100, Account::new(100, "Neel", dec!(400.00), "neelpassword")),
            (101, Account::new(101, "Gautam", dec!(1200.00), "gautampassword")),
            (102, Account::new(102, "Ruchi", dec!(850.00), "ruchipassword")),
        ]);

        Self {
            accounts,
            next_account_number: 103,
        }
    }

    /// Open a new account under the next sequential account number.
    ///
    /// The initial balance is expected to be non-negative; validating raw
    /// user input is the caller's job.
    pub fn create_account(
        &mut self,
        holder_name: &str,
        initial_balance: Amount,
        password: &str,
    ) -> Result<&Account, LedgerError> {
        if self.accounts.len() >= MAX_ACCOUNTS {
            return Err(LedgerError::CapacityExceeded);
        }

        let account_number = self.next_account_number;
        self.next_account_number += 1;

        let account = Account::new(account_number, holder_name, initial_balance, password);
        Ok(self.accounts.entry(account_number).or_insert(account))
    }

    /// Authenticate and fetch an account.
    ///
    /// Authentication is a stateless per-call check: there is no session,
    /// and the returned handle is the live ledger-owned account, so
    /// deposits and withdrawals through it stick.
    pub fn get_account(
        &mut self,
        account_number: AccountNumber,
        password: &str,
    ) -> Result<&mut Account, LedgerError> {
        match self.accounts.get_mut(&account_number) {
            Some(account) if account.verify_password(password) => Ok(account),
            _ => Err(LedgerError::AuthenticationFailed),
        }
    }

    /// How many more accounts can be opened before the ledger is full.
    pub fn available_slots(&self) -> usize {
        MAX_ACCOUNTS - self.accounts.len()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Ledger, LedgerError};
    use rust_decimal_macros::dec;

    #[test]
    fn test_seed_accounts() {
        let mut ledger = Ledger::new();

        for (number, holder_name, balance, password) in vec![
            (100, "Neel", dec!(400.00), "neelpassword"),
            (101, "Gautam", dec!(1200.00), "gautampassword"),
            (102, "Ruchi", dec!(850.00), "ruchipassword"),
        ] {
            let acc = ledger
                .get_account(number, password)
                .expect("seed account should authenticate");
            assert_eq!(number, acc.account_number());
            assert_eq!(holder_name, acc.holder_name());
            assert_eq!(balance, acc.balance());
        }

        assert_eq!(7, ledger.available_slots());
    }

    #[test]
    fn test_create_account_assigns_sequential_numbers() {
        let mut ledger = Ledger::new();

        let acc = ledger
            .create_account("Amit", dec!(500), "pw")
            .expect("should create an account");
        assert_eq!(103, acc.account_number());
        assert_eq!(dec!(500), acc.balance());
        assert_eq!(6, ledger.available_slots());

        let acc = ledger
            .create_account("Priya", dec!(0), "pw2")
            .expect("should create a second account");
        assert_eq!(104, acc.account_number());
    }

    #[test]
    fn test_create_account_capacity_exceeded() {
        let mut ledger = Ledger::new();

        for i in 0..7 {
            ledger
                .create_account(&format!("Holder {}", i), dec!(10), "pw")
                .expect("should fill the ledger");
        }
        assert_eq!(0, ledger.available_slots());

        let got = ledger.create_account("One Too Many", dec!(10), "pw");
        assert_eq!(LedgerError::CapacityExceeded, got.err().unwrap());
        assert_eq!(0, ledger.available_slots());
    }

    #[test]
    // Wrong password and unknown account number must be indistinguishable.
    fn test_get_account_authentication_failed() {
        let mut ledger = Ledger::new();

        let wrong_password = ledger.get_account(100, "not the password").err().unwrap();
        let unknown_number = ledger.get_account(999, "neelpassword").err().unwrap();

        assert_eq!(LedgerError::AuthenticationFailed, wrong_password);
        assert_eq!(wrong_password, unknown_number);
    }

    #[test]
    // The handle returned by get_account is the ledger-owned account, not a
    // copy: mutations through it survive across calls.
    fn test_get_account_returns_a_live_handle() {
        let mut ledger = Ledger::new();

        let acc = ledger
            .get_account(100, "neelpassword")
            .expect("should authenticate");
        acc.deposit(dec!(100)).expect("should apply a deposit");

        let acc = ledger
            .get_account(100, "neelpassword")
            .expect("should authenticate again");
        assert_eq!(dec!(500.00), acc.balance());
        assert_eq!(2, acc.transactions().len());
    }

    #[test]
    fn test_created_account_is_reachable_with_its_password() {
        let mut ledger = Ledger::new();

        ledger
            .create_account("Amit", dec!(500), "amitpassword")
            .expect("should create an account");

        let acc = ledger
            .get_account(103, "amitpassword")
            .expect("should authenticate the new account");
        assert_eq!("Amit", acc.holder_name());

        assert_eq!(
            LedgerError::AuthenticationFailed,
            ledger.get_account(103, "wrong").err().unwrap()
        );
    }
}
