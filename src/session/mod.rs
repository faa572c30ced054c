//! Interactive ledger session
//!
//! The session is split in two layers:
//!
//! - `Prompter` turns raw input into validated values, re-prompting on bad
//!   input.
//! - `Session` executes validated `Action`s and never touches the input
//!   stream.
//!
//! [`run`] wires them together into the menu loop.

pub mod command;
pub mod controller;
pub mod prompt;

use std::io::{BufRead, Write};

use tracing::{info, warn};

pub use command::{Action, Command};
pub use controller::{Outcome, Session, SessionOptions};
pub use prompt::Prompter;

use crate::display;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Money};

/// Limit value that means "no limit" when typed at the limit prompt
pub const NO_LIMIT_INPUT: Money = Money::from_cents(-100);

/// How the spending limit is chosen at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitChoice {
    /// Ask the user
    Prompt,
    /// No limit
    Disabled,
    /// Use this limit
    Set(Money),
}

/// Build the session ledger, prompting for anything not supplied
pub fn start_ledger<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    capacity_hint: usize,
    starting_balance: Option<Money>,
    limit: LimitChoice,
) -> LedgerResult<Ledger> {
    let balance = match starting_balance {
        Some(balance) => balance,
        None => prompter.prompt_money(
            "Enter starting balance for ledger: ",
            "Please enter a valid balance.",
        )?,
    };

    let limit = match limit {
        LimitChoice::Set(limit) => Some(limit),
        LimitChoice::Disabled => None,
        LimitChoice::Prompt => {
            if prompter.prompt_yes_no("Would you like to set a limit? (y or n) ")? {
                let limit = prompter.prompt_money("Enter limit: ", "Enter valid limit.")?;
                (limit != NO_LIMIT_INPUT).then_some(limit)
            } else {
                None
            }
        }
    };

    info!(
        balance = %balance,
        limit = ?limit.map(|l| l.to_decimal_string()),
        "ledger started"
    );
    Ok(Ledger::with_capacity(capacity_hint, balance, limit))
}

/// Gather the inputs a menu command needs
///
/// Returns `None` when there is nothing to do for the command.
pub fn read_action<R: BufRead, W: Write>(
    command: Command,
    prompter: &mut Prompter<R, W>,
    ledger: &Ledger,
) -> LedgerResult<Option<Action>> {
    let action = match command {
        Command::Display => Action::Display,
        Command::AddExpense | Command::AddCredit => {
            let amount = prompter.prompt_amount("Enter amount: ", "Please input a valid amount.")?;
            let date = prompter.prompt_token("Enter date: ")?;
            let category = prompter.prompt_token("Enter category: ")?;
            Action::AddEntry {
                amount,
                is_expense: command == Command::AddExpense,
                date,
                category,
            }
        }
        Command::Remove => {
            if ledger.is_empty() {
                writeln!(prompter.output(), "No entries to remove.")?;
                return Ok(None);
            }
            let number = prompter.prompt_position(
                "Enter entry number to remove: ",
                "Please enter an entry number from the listing.",
            )?;
            Action::Remove {
                position: number - 1,
            }
        }
        Command::Export => Action::Export,
        Command::Help => Action::Help,
        Command::Quit => Action::Quit,
    };

    Ok(Some(action))
}

/// Run the menu loop until quit or end of input
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    prompter: &mut Prompter<R, W>,
) -> LedgerResult<()> {
    loop {
        write!(prompter.output(), "{}", display::format_help())?;

        let token = match prompter.next_token() {
            Ok(token) => token,
            Err(LedgerError::InputClosed) => break,
            Err(e) => return Err(e),
        };

        let Some(command) = Command::parse(&token) else {
            continue;
        };

        let action = match read_action(command, prompter, session.ledger()) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(LedgerError::InputClosed) => break,
            Err(e) => return Err(e),
        };

        match session.execute(action, prompter.output()) {
            Ok(Outcome::Quit) => return Ok(()),
            Ok(Outcome::Continue) => {}
            Err(e @ LedgerError::Io(_)) => return Err(e),
            Err(e) => {
                warn!(error = %e, "command failed");
                writeln!(prompter.output(), "{}", e)?;
            }
        }

        if let Some(warning) = display::format_limit_warning(session.ledger()) {
            write!(prompter.output(), "{}", warning)?;
        }
    }

    info!("input closed, ending session");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn prompter(input: &str) -> TestPrompter {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn run_script(ledger: Ledger, input: &str) -> (Session, String, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut session = Session::new(
            ledger,
            SessionOptions {
                export_path: temp_dir.path().join("expenses.csv"),
                ..SessionOptions::default()
            },
        );
        let mut p = prompter(input);
        run(&mut session, &mut p).unwrap();
        let output = String::from_utf8(p.into_output()).unwrap();
        (session, output, temp_dir)
    }

    #[test]
    fn test_start_ledger_prompts() {
        let mut p = prompter("abc 500\ny\nxyz 100\n");
        let ledger = start_ledger(&mut p, 10, None, LimitChoice::Prompt).unwrap();

        assert_eq!(ledger.balance(), Money::from_cents(50000));
        assert_eq!(ledger.limit(), Some(Money::from_cents(10000)));

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains("Please enter a valid balance."));
        assert!(output.contains("Enter valid limit."));
    }

    #[test]
    fn test_start_ledger_without_limit() {
        let mut p = prompter("250 n\n");
        let ledger = start_ledger(&mut p, 10, None, LimitChoice::Prompt).unwrap();
        assert_eq!(ledger.limit(), None);
    }

    #[test]
    fn test_start_ledger_minus_one_limit_disables() {
        let mut p = prompter("0 y -1\n");
        let ledger = start_ledger(&mut p, 10, None, LimitChoice::Prompt).unwrap();
        assert_eq!(ledger.limit(), None);
    }

    #[test]
    fn test_start_ledger_limit_with_extra_decimals_reprompts() {
        let mut p = prompter("0 y -1.009 250\n");
        let ledger = start_ledger(&mut p, 10, None, LimitChoice::Prompt).unwrap();
        assert_eq!(ledger.limit(), Some(Money::from_cents(25000)));

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains("Enter valid limit."));
    }

    #[test]
    fn test_start_ledger_from_flags_reads_nothing() {
        let mut p = prompter("");
        let ledger = start_ledger(
            &mut p,
            10,
            Some(Money::from_cents(100)),
            LimitChoice::Set(Money::from_cents(5000)),
        )
        .unwrap();
        assert_eq!(ledger.limit(), Some(Money::from_cents(5000)));
        assert!(p.into_output().is_empty());
    }

    #[test]
    fn test_run_scenario() {
        let ledger = Ledger::with_capacity(10, Money::from_cents(50000), None);
        let (session, output, _temp) =
            run_script(ledger, "e 50 2024-01-01 food\nc 20 2024-01-02 refund\nd\nq\n");

        assert_eq!(session.ledger().balance(), Money::from_cents(47000));
        assert_eq!(session.ledger().total_expense(), Money::from_cents(3000));
        assert!(output.contains("Balance: 470.00"));
        assert!(!output.contains("WARNING"));
    }

    #[test]
    fn test_run_limit_warning() {
        let ledger = Ledger::with_capacity(10, Money::zero(), Some(Money::from_cents(10000)));
        let (_session, output, _temp) = run_script(ledger, "e 150 2024-01-01 rent\nq\n");

        assert!(output.contains("WARNING: You have surpassed your set expense limit."));
        assert!(output.contains("Total expenses: 150.00 | Expense limit: 100.00"));
    }

    #[test]
    fn test_run_survives_balance_overflow() {
        let ledger = Ledger::with_capacity(10, Money::zero(), Some(Money::from_cents(10000)));
        let (session, output, _temp) = run_script(
            ledger,
            "e 50000000000000000 d c\ne 50000000000000000 d c\nd\nq\n",
        );

        assert!(output.contains("would overflow the balance"));
        assert!(output.contains("Current Ledger"));
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(
            session.ledger().balance(),
            Money::parse("-50000000000000000").unwrap()
        );
    }

    #[test]
    fn test_run_no_warning_after_quit() {
        let ledger = Ledger::new();
        let (_session, output, _temp) = run_script(ledger, "q\n");
        assert!(!output.contains("WARNING"));
    }

    #[test]
    fn test_run_ignores_unknown_and_stops_at_eof() {
        let ledger = Ledger::with_capacity(10, Money::zero(), None);
        let (session, output, _temp) = run_script(ledger, "x z e 5 d1\n");

        // input ran out before the category was read
        assert!(session.ledger().is_empty());
        assert_eq!(output.matches("Press Q to quit").count(), 3);
    }

    #[test]
    fn test_run_remove_reports_out_of_range() {
        let ledger = Ledger::with_capacity(10, Money::zero(), None);
        let (session, output, _temp) =
            run_script(ledger, "e 5 d1 a\nc 7 d2 b\nr 3\nr 1\nq\n");

        assert!(output.contains("Position 2 is out of range for a ledger of 2 entries"));
        assert_eq!(session.ledger().len(), 1);
        assert_eq!(session.ledger().get(0).unwrap().date(), "d2");
        // balance keeps both adds
        assert_eq!(session.ledger().balance(), Money::from_cents(200));
    }

    #[test]
    fn test_run_remove_on_empty_ledger() {
        let ledger = Ledger::with_capacity(10, Money::zero(), None);
        let (_session, output, _temp) = run_script(ledger, "r\nq\n");
        assert!(output.contains("No entries to remove."));
    }

    #[test]
    fn test_run_export() {
        let ledger = Ledger::with_capacity(10, Money::zero(), None);
        let (session, output, _temp) =
            run_script(ledger, "e 25 2024-01-01 food\nc 100 2024-01-02 salary\np\nq\n");

        assert!(output.contains("CSV export written to"));
        let contents = std::fs::read_to_string(session.export_path()).unwrap();
        assert_eq!(
            contents,
            "Amount,Expense,Date,Category\n25.00,true,2024-01-01,food\n100.00,false,2024-01-02,salary\n"
        );
    }
}
