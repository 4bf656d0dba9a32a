use csv::StringRecord;
use tracing::{debug, info};

use std::{fs::File, io::Read, path::Path};

use crate::{
    complaint::{is_valid_date, Complaint, Complaints},
    error::{Error, Result},
    groups::Groups,
};

/// Columns that every complaint export must have.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Date received", "Product", "Company"];

/// Reads complaint data from CSV.
///
/// By default every `Date received` value is checked for the `yyyy-mm-dd`
/// shape, and product names are used as they appear. Use
/// [`Loader::with_groups`] to merge product names, and
/// [`Loader::skip_date_check`] to accept any date.
#[derive(Debug, Default)]
pub struct Loader {
    groups: Groups,
    skip_date_check: bool,
}

impl Loader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_groups(mut self, groups: Groups) -> Self {
        self.groups = groups;
        self
    }

    #[must_use]
    pub fn skip_date_check(mut self, skip: bool) -> Self {
        self.skip_date_check = skip;
        self
    }

    /// Reads complaints from the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns any errors from opening the file, plus those of
    /// [`Loader::read`].
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<Complaints> {
        let file = File::open(path)?;
        self.read(file)
    }

    /// Reads complaints from CSV data with a header row, and sorts them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use complaints::Loader;
    /// let data = "Date received,Product,Company\n2019-01-05,Mortgage,Acme\n";
    /// let complaints = Loader::new().read(data.as_bytes()).unwrap();
    /// assert_eq!(complaints.len(), 1);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns:
    /// * [`Error::MissingField`] if a required column is not in the header
    /// * [`Error::MalformedDate`] if a date is not `yyyy-mm-dd` (unless the
    ///   check is skipped)
    /// * [`Error::EmptyInput`] if there are no data rows
    /// * [`Error::Csv`] for any CSV parsing error
    pub fn read(&self, rdr: impl Read) -> Result<Complaints> {
        let mut rdr = csv::Reader::from_reader(rdr);
        let headers = rdr.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|&&col| !headers.iter().any(|h| h == col))
        {
            return Err(Error::MissingField((*missing).to_string()));
        }
        let mut complaints = Vec::new();
        let mut record = StringRecord::new();
        while rdr.read_record(&mut record)? {
            let mut complaint: Complaint = record.deserialize(Some(&headers))?;
            if !self.skip_date_check && !is_valid_date(&complaint.date_received) {
                return Err(Error::MalformedDate {
                    value: complaint.date_received,
                    line: record.position().map_or(0, csv::Position::line),
                });
            }
            if let Some(name) = self.groups.product_group(&complaint.product) {
                if name != complaint.product {
                    debug!(product = %complaint.product, group = name, "grouped product");
                    complaint.product = name.to_string();
                }
            }
            complaints.push(complaint);
        }
        info!(complaints = complaints.len(), "read complaint data");
        Complaints::new(complaints)
    }
}
