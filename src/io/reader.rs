use crate::common::{error::AppError, money::Money};
use crate::domain::expense::ExpenseRecord;
use chrono::NaiveDate;
use std::{io::Read, path::Path, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the store headers
/// `amount,category,date`.
struct StoreRow {
    amount: String,
    category: String,
    date: NaiveDate,
}

/// Reads and validates expense rows from a CSV reader.
///
/// Supported headers: `amount,category,date`. Records come back in file
/// order, which is the order they were appended; amount parse failures carry
/// the offending category and date for context.
///
/// # Examples
///
/// ```
/// use spending_log::io::reader::read_expenses;
/// use csv::ReaderBuilder;
///
/// let data = "amount,category,date\n\
/// 12.50,Food,2026-08-01\n\
/// 3.00,food,2026-08-02\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let records: Vec<_> = read_expenses(&mut rdr).collect::<Result<_, _>>().unwrap();
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].category, "Food");
/// ```
pub fn read_expenses<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<ExpenseRecord, String>> + '_ {
    rdr.deserialize::<StoreRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let amount = Money::from_str(&row.amount).map_err(|_| {
            format!(
                "bad stored amount {} for category {} on {}",
                row.amount, row.category, row.date
            )
        })?;
        Ok(ExpenseRecord::new(amount, &row.category, row.date))
    })
}

/// Hydrates the ledger contents from the store at `path`.
///
/// An absent store is not an error: the ledger simply starts empty. Any
/// malformed row is, since a corrupt store cannot safely be appended to.
pub fn load_store(path: &Path) -> Result<Vec<ExpenseRecord>, AppError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    read_expenses(&mut rdr)
        .collect::<Result<Vec<_>, String>>()
        .map_err(AppError::Parse)
}
