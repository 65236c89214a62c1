use std::{fs::OpenOptions, path::Path};

use crate::common::error::AppError;
use crate::domain::expense::ExpenseRecord;
use chrono::NaiveDate;

#[derive(serde::Serialize)]
/// Internal CSV output row representation matching the store headers.
///
/// Headers written (in this order): `amount,category,date`. The amount is
/// formatted to 2 decimal places as a string.
struct StoreRow<'a> {
    amount: String,
    category: &'a str,
    date: NaiveDate,
}

/// Appends one record to the store at `path`.
///
/// The store is append-only and never rewritten: the file is opened in
/// append mode, created on first use, and the header row is written exactly
/// once, when the store is new or empty. The writer is flushed before
/// returning, so a crash can lose at most the entry being appended.
///
/// # Errors
///
/// Returns `AppError::Io` if the store cannot be opened and `AppError::Csv`
/// if serializing the row fails.
pub fn append_record(path: &Path, record: &ExpenseRecord) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let is_empty = file.metadata()?.len() == 0;

    // Each append opens a fresh csv writer, so the header toggle has to
    // come from the file state, not the writer default.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(is_empty)
        .from_writer(file);

    wtr.serialize(StoreRow {
        amount: record.amount.to_string_2dp(),
        category: &record.category,
        date: record.date,
    })?;
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;
    use std::str::FromStr;

    fn record(amount: &str, category: &str, date: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            Money::from_str(amount).unwrap(),
            category,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    #[test]
    fn writes_header_once_then_rows_in_append_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");

        append_record(&path, &record("12.50", "Food", "2026-08-01")).unwrap();
        append_record(&path, &record("3.00", "food", "2026-08-02")).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3, "expected header + 2 rows");
        assert_eq!(lines[0], "amount,category,date");
        assert_eq!(lines[1], "12.50,Food,2026-08-01");
        assert_eq!(lines[2], "3.00,food,2026-08-02");
    }

    #[test]
    fn round_trips_through_the_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");

        let first = record("12.50", "Food", "2026-08-01");
        let second = record("3.00", "food", "2026-08-02");
        append_record(&path, &first).unwrap();
        append_record(&path, &second).unwrap();

        let records = crate::io::reader::load_store(&path).unwrap();
        assert_eq!(records, vec![first, second]);
    }

    #[test]
    fn quotes_categories_containing_the_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.csv");

        let rec = record("7.00", "Food, drink", "2026-08-03");
        append_record(&path, &rec).unwrap();

        let records = crate::io::reader::load_store(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Food, drink");
    }
}
