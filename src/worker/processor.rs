use std::io::Write;
use std::path::PathBuf;

use crate::{
    common::{command::Command, error::AppError},
    domain::{expense::ExpenseRecord, ledger::Ledger},
    io::writer,
};

/// Dispatches validated commands against the ledger and renders the result.
///
/// When a store path is wired in, every newly added record is also handed to
/// the append-only store; without one the session is purely in-memory.
#[derive(Debug, Default)]
pub struct Processor {
    store: Option<PathBuf>,
}

impl Processor {
    pub fn new(store: Option<PathBuf>) -> Self {
        Self { store }
    }

    pub fn process<W: Write>(
        &mut self,
        ledger: &mut Ledger,
        command: Command,
        out: &mut W,
    ) -> Result<(), AppError> {
        match command {
            Command::Add {
                amount,
                category,
                date,
            } => {
                let record = ledger.add(amount, &category, date);
                if let Some(path) = &self.store {
                    writer::append_record(path, record)?;
                }
                writeln!(out, "Expense added.")?;
            }
            Command::List => {
                write_records(out, ledger.all().iter())?;
                writeln!(out, "Total spent: {}", Ledger::total(ledger.all()))?;
            }
            Command::Total => {
                writeln!(out, "Total spent: {}", Ledger::total(ledger.all()))?;
            }
            Command::Filter { category } => {
                let matched = Ledger::filter_by_category(ledger.all(), &category);
                writeln!(out, "Expenses in '{}':", category.trim())?;
                write_records(out, matched.iter().copied())?;
                writeln!(
                    out,
                    "Total in '{}': {}",
                    category.trim(),
                    Ledger::total(matched)
                )?;
            }
            Command::Categories => {
                for category in Ledger::unique_categories(ledger.all()) {
                    writeln!(out, "{category}")?;
                }
            }
            // Quit ends the session loop before dispatch reaches here.
            Command::Quit => {}
        }
        Ok(())
    }
}

fn write_records<'a, W: Write>(
    out: &mut W,
    records: impl Iterator<Item = &'a ExpenseRecord>,
) -> Result<(), AppError> {
    for (idx, record) in records.enumerate() {
        writeln!(
            out,
            "{}. Amount: {} | Category: {} | Date: {}",
            idx + 1,
            record.amount,
            record.category,
            record.date
        )?;
    }
    Ok(())
}
