use serde::Serialize;
use tracing::debug;

use std::collections::HashMap;

use crate::{
    complaint::{Complaint, Complaints, SortKey},
    error::{Error, Result},
    percent::Percent,
};

/// Holds the summary for one product in one year.
///
/// Serializes to a CSV row in field order: product, year, complaints,
/// companies, max share.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Summary {
    /// Product name, as spelled by the first complaint in the group.
    pub product: String,
    pub year: String,
    /// Total number of complaints.
    pub complaints: usize,
    /// Number of distinct companies with at least one complaint.
    pub companies: usize,
    /// The largest share of the complaints received by any one company.
    pub max_share: Percent,
}

/// Accumulates one run of complaints sharing a [`SortKey`].
#[derive(Debug)]
struct Group<'a> {
    key: SortKey,
    product: &'a str,
    year: &'a str,
    complaints: usize,
    companies: HashMap<&'a str, usize>,
}

impl<'a> Group<'a> {
    fn open(key: SortKey, first: &'a Complaint) -> Self {
        let mut group = Self {
            key,
            product: &first.product,
            year: first.year(),
            complaints: 0,
            companies: HashMap::new(),
        };
        group.add(first);
        group
    }

    fn add(&mut self, complaint: &'a Complaint) {
        self.complaints += 1;
        *self.companies.entry(&complaint.company).or_default() += 1;
    }

    fn close(self) -> Summary {
        let max_share = self
            .companies
            .values()
            .map(|&n| Percent::share(n, self.complaints))
            .max()
            .unwrap_or_default();
        debug!(
            product = self.product,
            year = self.year,
            complaints = self.complaints,
            companies = self.companies.len(),
            %max_share,
            "closed group"
        );
        Summary {
            product: self.product.to_string(),
            year: self.year.to_string(),
            complaints: self.complaints,
            companies: self.companies.len(),
            max_share,
        }
    }
}

enum Scan<'a> {
    NoGroupOpen,
    GroupOpen(Group<'a>),
}

/// Summarizes `complaints` by year and product.
///
/// Each maximal run of complaints with the same year and (case-insensitive)
/// product becomes one [`Summary`]. The summaries are returned sorted by
/// product name; rows for the same product stay in year order.
///
/// # Examples
///
/// ```
/// # use complaints::{summarize, Complaint, Complaints};
/// let complaints = Complaints::new(vec![
///     Complaint::new("2019-01-05", "Debt collection", "Acme"),
///     Complaint::new("2019-03-10", "Debt collection", "Acme"),
///     Complaint::new("2019-05-01", "Debt collection", "Beta"),
/// ])
/// .unwrap();
/// let summaries = summarize(&complaints).unwrap();
/// assert_eq!(summaries.len(), 1);
/// assert_eq!(summaries[0].complaints, 3);
/// assert_eq!(summaries[0].companies, 2);
/// assert_eq!(summaries[0].max_share.value(), 67);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if there are no complaints.
pub fn summarize(complaints: &Complaints) -> Result<Vec<Summary>> {
    let mut summaries = Vec::new();
    let mut scan = Scan::NoGroupOpen;
    for complaint in complaints {
        let key = complaint.sort_key();
        scan = match scan {
            Scan::GroupOpen(mut group) if group.key == key => {
                group.add(complaint);
                Scan::GroupOpen(group)
            }
            Scan::GroupOpen(group) => {
                summaries.push(group.close());
                Scan::GroupOpen(Group::open(key, complaint))
            }
            Scan::NoGroupOpen => Scan::GroupOpen(Group::open(key, complaint)),
        };
    }
    match scan {
        Scan::GroupOpen(group) => summaries.push(group.close()),
        Scan::NoGroupOpen => return Err(Error::EmptyInput),
    }
    summaries.sort_by(|a, b| a.product.cmp(&b.product));
    Ok(summaries)
}
