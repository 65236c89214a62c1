use std::collections::BTreeSet;

use crate::common::money::Money;
use crate::domain::expense::ExpenseRecord;
use chrono::NaiveDate;

/// The ordered collection of expense records; insertion order is the
/// canonical display order. Open for appends from creation to disposal,
/// no edit or delete exists.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Rebuilds the ledger from previously persisted records, keeping their
    /// original order.
    pub fn hydrate(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// Appends a record in place and returns a reference to the stored,
    /// normalized record so the caller can forward it to a durable store.
    ///
    /// Preconditions (enforced by the input layer, not re-checked here):
    /// `amount > 0` and `category` non-empty after trimming.
    pub fn add(&mut self, amount: Money, category: &str, date: NaiveDate) -> &ExpenseRecord {
        self.records.push(ExpenseRecord::new(amount, category, date));
        self.records.last().expect("record just pushed")
    }

    /// The full ledger in insertion order. Read-only view.
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Sum of amounts over any record sequence, zero for an empty one.
    /// Cents accumulate as integers, so the sum is exact.
    pub fn total<'a, I>(records: I) -> Money
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        records.into_iter().map(|rec| rec.amount).sum()
    }

    /// The subsequence matching `category` case-insensitively, in original
    /// relative order. An unmatched category yields an empty sequence.
    pub fn filter_by_category<'a>(
        records: &'a [ExpenseRecord],
        category: &str,
    ) -> Vec<&'a ExpenseRecord> {
        records
            .iter()
            .filter(|rec| rec.matches_category(category))
            .collect()
    }

    /// Distinct categories as stored (case-sensitive), sorted ascending.
    /// Feeds the filter selector.
    pub fn unique_categories(records: &[ExpenseRecord]) -> Vec<String> {
        records
            .iter()
            .map(|rec| rec.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
