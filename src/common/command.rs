use crate::common::money::Money;
use chrono::NaiveDate;
use std::str::FromStr;

/// A validated form submission, sent from the session input to the worker for dispatch.
#[derive(Debug, PartialEq)]
pub enum Command {
    Add {
        amount: Money,
        category: String,
        date: NaiveDate,
    },
    List,
    Total,
    Filter { category: String },
    Categories,
    Quit,
}

/// Parses and validates one non-blank session line.
///
/// Grammar: `add <amount> <category...> [date]`, `list`, `total`,
/// `filter <category...>`, `categories`, `quit`/`exit`. The command word is
/// case-insensitive. For `add`, the trailing token is taken as a `YYYY-MM-DD`
/// date when one follows the category; omitted dates default to `today`.
///
/// All input validation happens here, before the ledger is touched: the
/// amount must parse and be greater than zero, and the category must be
/// non-empty after trimming. Errors are user-facing warning messages.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use spending_log::common::command::{parse_submission, Command};
///
/// let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
/// let cmd = parse_submission("add 12.50 Food", today).unwrap();
/// assert!(matches!(cmd, Command::Add { .. }));
/// assert_eq!(parse_submission("quit", today).unwrap(), Command::Quit);
/// ```
pub fn parse_submission(line: &str, today: NaiveDate) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let keyword = tokens
        .first()
        .ok_or_else(|| "empty submission".to_string())?
        .to_ascii_lowercase();

    match keyword.as_str() {
        "add" => parse_add(&tokens[1..], today),
        "list" => Ok(Command::List),
        "total" => Ok(Command::Total),
        "filter" => {
            let category = tokens[1..].join(" ");
            if category.trim().is_empty() {
                return Err("please enter a category to filter by".to_string());
            }
            Ok(Command::Filter { category })
        }
        "categories" => Ok(Command::Categories),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!(
            "unknown command: {other}. try add, list, total, filter, categories or quit"
        )),
    }
}

fn parse_add(args: &[&str], today: NaiveDate) -> Result<Command, String> {
    let amount_str = args
        .first()
        .ok_or_else(|| "usage: add <amount> <category> [YYYY-MM-DD]".to_string())?;
    let amount =
        Money::from_str(amount_str).map_err(|_| format!("invalid amount: {amount_str}"))?;
    if !amount.is_positive() {
        return Err(format!("amount must be greater than zero: {amount_str}"));
    }

    let mut rest = &args[1..];
    let mut date = today;
    // The trailing token is a date only when a category token still precedes it.
    if rest.len() >= 2 {
        let last = rest[rest.len() - 1];
        if looks_like_date(last) {
            date = NaiveDate::parse_from_str(last, "%Y-%m-%d")
                .map_err(|_| format!("invalid date: {last}, expected YYYY-MM-DD"))?;
            rest = &rest[..rest.len() - 1];
        }
    }

    let category = rest.join(" ");
    if category.trim().is_empty() {
        return Err("please enter a valid category".to_string());
    }

    Ok(Command::Add {
        amount,
        category,
        date,
    })
}

fn looks_like_date(token: &str) -> bool {
    token.contains('-') && token.chars().all(|c| c.is_ascii_digit() || c == '-')
}
