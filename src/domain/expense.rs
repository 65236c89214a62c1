use crate::common::money::Money;
use chrono::NaiveDate;

/// One logged expenditure.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Strictly positive amount, validated by the input layer.
    pub amount: Money,
    /// Label as entered, surrounding whitespace removed.
    pub category: String,
    /// Calendar date of the expense; backdating and postdating are both fine.
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn new(amount: Money, category: &str, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.trim().to_string(),
            date,
        }
    }

    /// Case-insensitive category match used for filtering; the stored casing
    /// is preserved for display.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_category_and_preserves_casing() {
        let rec = ExpenseRecord::new(
            Money::new(1250),
            "  Food ",
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
        );
        assert_eq!(rec.category, "Food");
    }

    #[test]
    fn matches_category_ignores_case() {
        let rec = ExpenseRecord::new(
            Money::new(100),
            "Food",
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
        );
        assert!(rec.matches_category("FOOD"));
        assert!(rec.matches_category("food"));
        assert!(!rec.matches_category("Transport"));
    }
}
