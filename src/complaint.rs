use regex::Regex;
use serde::Deserialize;

use std::sync::LazyLock;

use crate::error::{Error, Result};

static DATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Returns `true` if `date` has the shape `yyyy-mm-dd`.
///
/// Only the shape is checked, not whether the date exists.
///
/// # Examples
///
/// ```
/// # use complaints::is_valid_date;
/// assert!(is_valid_date("2019-09-24"));
/// assert!(!is_valid_date("2019/09/24"));
/// assert!(!is_valid_date("19-09-24"));
/// ```
#[must_use]
pub fn is_valid_date(date: &str) -> bool {
    DATE_FORMAT.is_match(date)
}

/// Defines the CSV format for complaint data.
///
/// Any columns other than these three are ignored.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Complaint {
    #[serde(rename = "Date received")]
    pub date_received: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Company")]
    pub company: String,
}

impl Complaint {
    #[must_use]
    pub fn new(date_received: &str, product: &str, company: &str) -> Self {
        Self {
            date_received: date_received.to_string(),
            product: product.to_string(),
            company: company.to_string(),
        }
    }

    /// Returns the year the complaint was received: the first four
    /// characters of `date_received`.
    ///
    /// If the date is shorter than that, the whole date is returned.
    #[must_use]
    pub fn year(&self) -> &str {
        self.date_received
            .get(..4)
            .unwrap_or(self.date_received.as_str())
    }

    /// Returns the key this complaint is sorted and grouped by.
    #[must_use]
    pub fn sort_key(&self) -> SortKey {
        SortKey {
            year: self.year().to_string(),
            product: self.product.to_lowercase(),
        }
    }
}

/// Orders complaints by year, then by case-insensitive product name.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct SortKey {
    pub year: String,
    pub product: String,
}

/// A non-empty list of complaints, sorted by [`SortKey`].
///
/// The sort is stable: complaints with equal keys keep the order they were
/// given in.
#[derive(Clone, Debug)]
pub struct Complaints(Vec<Complaint>);

impl Complaints {
    /// Sorts `complaints` into key order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if `complaints` is empty.
    pub fn new(mut complaints: Vec<Complaint>) -> Result<Self> {
        if complaints.is_empty() {
            return Err(Error::EmptyInput);
        }
        complaints.sort_by_cached_key(Complaint::sort_key);
        Ok(Self(complaints))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complaint> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Complaints {
    type Item = &'a Complaint;
    type IntoIter = std::slice::Iter<'a, Complaint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_valid_date_fn_accepts_only_yyyy_mm_dd() {
        assert!(is_valid_date("2019-09-24"));
        assert!(!is_valid_date("2019/09/24"));
        assert!(!is_valid_date("19-09-24"));
        assert!(!is_valid_date("2019-09-24 "));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn year_fn_returns_first_four_characters() {
        assert_eq!(Complaint::new("2019-09-24", "Mortgage", "Acme").year(), "2019");
        assert_eq!(Complaint::new("19-09-24", "Mortgage", "Acme").year(), "19-0");
        assert_eq!(Complaint::new("19", "Mortgage", "Acme").year(), "19");
    }

    #[test]
    fn sort_key_fn_lowercases_product() {
        let key = Complaint::new("2020-01-01", "Debt Collection", "Acme").sort_key();
        assert_eq!(key.year, "2020");
        assert_eq!(key.product, "debt collection");
    }

    #[test]
    fn new_fn_returns_error_for_no_complaints() {
        assert!(matches!(Complaints::new(Vec::new()), Err(Error::EmptyInput)));
    }

    #[test]
    fn new_fn_sorts_by_year_then_product() {
        let complaints = Complaints::new(vec![
            Complaint::new("2020-01-01", "Mortgage", "A"),
            Complaint::new("2019-05-01", "mortgage", "B"),
            Complaint::new("2019-02-01", "Credit card", "C"),
        ])
        .unwrap();
        let companies: Vec<_> = complaints.iter().map(|c| c.company.as_str()).collect();
        assert_eq!(companies, vec!["C", "B", "A"]);
    }

    #[test]
    fn new_fn_keeps_input_order_for_equal_keys() {
        let complaints = Complaints::new(vec![
            Complaint::new("2019-12-31", "Mortgage", "First"),
            Complaint::new("2018-06-01", "Mortgage", "Earlier"),
            Complaint::new("2019-01-01", "MORTGAGE", "Second"),
            Complaint::new("2019-06-15", "mortgage", "Third"),
        ])
        .unwrap();
        let companies: Vec<_> = complaints.iter().map(|c| c.company.as_str()).collect();
        assert_eq!(companies, vec!["Earlier", "First", "Second", "Third"]);
    }
}
