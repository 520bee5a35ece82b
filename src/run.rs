//! The interactive console loop.
//!
//! All raw-text concerns live here: prompting, parsing user input into
//! numbers, and rendering core errors as messages. The core never sees a
//! raw string. Streams are generic so tests and benchmarks can drive a
//! whole session from an in-memory cursor.

use crate::ledger::{AccountNumber, Amount, Ledger};

use std::io::{self, BufRead, Write};

/// Run an interactive session against a fresh ledger until the user exits
/// or the input stream runs dry.
///
/// Core errors (wrong password, full ledger, overdrafts...) are reported
/// and the session keeps going; only I/O errors on the streams abort.
pub fn run(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let mut ledger = Ledger::new();

    writeln!(output, "Welcome to the ATM!")?;

    loop {
        writeln!(output, "Choose an option:")?;
        writeln!(output, "1. Create a new account")?;
        writeln!(output, "2. Login to an existing account")?;
        writeln!(output, "3. Exit")?;

        let choice = match prompt(&mut input, &mut output, "Your choice: ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        match choice.as_str() {
            "1" => create_account(&mut ledger, &mut input, &mut output)?,
            "2" => login(&mut ledger, &mut input, &mut output)?,
            "3" => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Please try again.")?,
        }
    }
}

// Write the prompt text, then read one trimmed line.
// None means the input stream is exhausted, i.e. the user is gone.
fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn create_account(
    ledger: &mut Ledger,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Creating a new account...")?;

    let name = match prompt(input, output, "Enter your name: ")? {
        Some(line) => line,
        None => return Ok(()),
    };

    let raw_amount = match prompt(input, output, "Enter an initial deposit amount: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    // The core trusts its callers on this one: negative starting balances
    // are rejected here, at the parsing boundary.
    let initial_balance = match raw_amount.parse::<Amount>() {
        Ok(amount) if amount >= Amount::ZERO => amount,
        _ => {
            writeln!(output, "Invalid amount.")?;
            return Ok(());
        }
    };

    let password = match prompt(input, output, "Set a password: ")? {
        Some(line) => line,
        None => return Ok(()),
    };

    match ledger.create_account(&name, initial_balance, &password) {
        Ok(account) => {
            writeln!(output, "Account created successfully!")?;
            writeln!(output, "{}", account)?;
        }
        Err(err) => writeln!(output, "Error: {}", err)?,
    }

    Ok(())
}

fn login(
    ledger: &mut Ledger,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Logging into an account...")?;

    let raw_number = match prompt(input, output, "Enter your account number: ")? {
        Some(line) => line,
        None => return Ok(()),
    };
    let account_number = match raw_number.parse::<AccountNumber>() {
        Ok(number) => number,
        Err(_) => {
            writeln!(output, "Invalid account number.")?;
            return Ok(());
        }
    };

    let password = match prompt(input, output, "Enter your password: ")? {
        Some(line) => line,
        None => return Ok(()),
    };

    let account = match ledger.get_account(account_number, &password) {
        Ok(account) => account,
        Err(err) => {
            writeln!(output, "Error: {}", err)?;
            return Ok(());
        }
    };

    writeln!(output, "Login successful!")?;
    writeln!(output, "{}", account)?;

    loop {
        writeln!(output, "Choose an option:")?;
        writeln!(output, "1. Deposit")?;
        writeln!(output, "2. Withdraw")?;
        writeln!(output, "3. Show Transaction Summary")?;
        writeln!(output, "4. Logout")?;

        let action = match prompt(input, output, "Your choice: ")? {
            Some(line) => line,
            None => return Ok(()),
        };

        match action.as_str() {
            "1" => {
                let amount = match prompt_amount(input, output, "Enter amount to deposit: ")? {
                    Some(amount) => amount,
                    None => continue,
                };
                match account.deposit(amount) {
                    Ok(()) => writeln!(
                        output,
                        "Deposit successful. New balance: ${:.2}",
                        account.balance()
                    )?,
                    Err(err) => writeln!(output, "Error: {}", err)?,
                }
            }
            "2" => {
                let amount = match prompt_amount(input, output, "Enter amount to withdraw: ")? {
                    Some(amount) => amount,
                    None => continue,
                };
                match account.withdraw(amount) {
                    Ok(()) => writeln!(
                        output,
                        "Withdrawal successful. New balance: ${:.2}",
                        account.balance()
                    )?,
                    Err(err) => writeln!(output, "Error: {}", err)?,
                }
            }
            "3" => {
                writeln!(output, "Transaction Summary:")?;
                for transaction in account.transactions() {
                    writeln!(output, "{}", transaction)?;
                }
            }
            "4" => {
                writeln!(output, "Logging out...")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Please try again.")?,
        }
    }
}

// Prompt for a monetary amount. None covers both EOF and unparsable input;
// in the latter case the "Invalid amount." complaint has already been
// written, and the session menu comes around again.
fn prompt_amount(
    input: &mut impl BufRead,
    output: &mut impl Write,
    text: &str,
) -> io::Result<Option<Amount>> {
    let raw = match prompt(input, output, text)? {
        Some(line) => line,
        None => return Ok(None),
    };

    match raw.parse::<Amount>() {
        Ok(amount) => Ok(Some(amount)),
        Err(_) => {
            writeln!(output, "Invalid amount.")?;
            Ok(None)
        }
    }
}
