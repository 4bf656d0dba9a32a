use tracing::info;

use std::{
    fmt::Display,
    fs::File,
    io::Write,
    path::Path,
};

use crate::{
    aggregate::{summarize, Summary},
    complaint::Complaints,
    error::Result,
    loader::Loader,
};

/// Holds a summarized complaint report.
///
/// To create a `Report` from a CSV file, use [`Report::from_path`]. To
/// create one from complaints already loaded, use
/// [`Report::from_complaints`].
///
/// To save the report as CSV, use [`Report::write_csv`]. To get a printable
/// table, use its [`Display`] implementation.
#[derive(Debug)]
pub struct Report {
    summaries: Vec<Summary>,
}

impl Report {
    /// Reads the complaint data at `path` with `loader`, and summarizes it.
    ///
    /// # Errors
    ///
    /// Returns any errors from [`Loader::read_path`].
    pub fn from_path(path: impl AsRef<Path>, loader: &Loader) -> Result<Self> {
        let complaints = loader.read_path(path)?;
        Self::from_complaints(&complaints)
    }

    /// Summarizes `complaints` by year and product.
    ///
    /// # Errors
    ///
    /// Returns any errors from [`summarize`].
    pub fn from_complaints(complaints: &Complaints) -> Result<Self> {
        let summaries = summarize(complaints)?;
        info!(rows = summaries.len(), "summarized complaints");
        Ok(Self { summaries })
    }

    /// Returns the summary rows, in report order.
    #[must_use]
    pub fn summaries(&self) -> &[Summary] {
        &self.summaries
    }

    /// Returns the number of complaints covered by the report.
    #[must_use]
    pub fn total_complaints(&self) -> usize {
        self.summaries.iter().map(|s| s.complaints).sum()
    }

    /// Writes the report as CSV to a new file at `path`, replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns any errors from creating or writing the file.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        self.write(file)
    }

    /// Writes the report as CSV, one row per summary and no header row.
    ///
    /// The columns are product, year, number of complaints, number of
    /// companies, and the highest percentage of complaints against a single
    /// company.
    ///
    /// # Errors
    ///
    /// Returns any errors from writing to `wtr`.
    pub fn write(&self, wtr: impl Write) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(wtr);
        for summary in &self.summaries {
            wtr.serialize(summary)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .summaries
            .iter()
            .map(|s| s.product.len())
            .chain(std::iter::once("Product".len()))
            .max()
            .unwrap_or_default();
        writeln!(
            f,
            "{:width$} {:>4} {:>10} {:>9} {:>9}",
            "Product", "Year", "Complaints", "Companies", "Max share"
        )?;
        let length = width + 36;
        writeln!(f, "{:-<length$}", "")?;
        for s in &self.summaries {
            writeln!(
                f,
                "{:width$} {:>4} {:>10} {:>9} {:>8}%",
                s.product, s.year, s.complaints, s.companies, s.max_share
            )?;
        }
        writeln!(f, "{:-<length$}", "")?;
        writeln!(f, "{:width$} {:>4} {:>10}", "Total", "", self.total_complaints())?;
        Ok(())
    }
}
