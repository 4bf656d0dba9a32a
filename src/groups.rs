use anyhow::{bail, Context, Result};
use regex::Regex;

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

#[derive(Debug)]
struct Group {
    name: String,
    regex: Regex,
}

/// Product group configuration.
///
/// Complaint exports often file the same kind of product under several
/// names (for example, after a category is renamed). A product group maps
/// every product name matching a regular expression to a single name, so
/// those complaints are summarized together.
#[derive(Debug, Default)]
pub struct Groups(Vec<Group>);

impl Groups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads product group configuration from `path`.
    ///
    /// The file holds one group per line, in the format:
    ///
    /// ```txt
    /// GROUP_NAME | GROUP_REGEX
    /// ```
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// * The file cannot be opened or read
    /// * There is a line with an invalid format (no ` | ` separator)
    /// * `GROUP_REGEX` is an invalid regular expression
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut groups = Self::new();
        let file = BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        );
        for (number, line) in file.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, regex_str)) = line.split_once(" | ") else {
                bail!(
                    "reading {}: line {}: bad line format (missing |): {line}",
                    path.display(),
                    number + 1,
                );
            };
            groups
                .add(name, regex_str)
                .with_context(|| format!("reading {}: line {}", path.display(), number + 1))?;
        }
        Ok(groups)
    }

    /// Adds a group: products matching `regex_str` are reported as `name`.
    ///
    /// # Errors
    ///
    /// Returns any errors from compiling `regex_str` with [`Regex::new`].
    pub fn add(&mut self, name: &str, regex_str: &str) -> Result<()> {
        self.0.push(Group {
            name: name.to_string(),
            regex: Regex::new(regex_str)?,
        });
        Ok(())
    }

    /// Returns the name of the first group whose regex matches `product`,
    /// if any.
    ///
    /// # Examples
    ///
    /// ```
    /// # use complaints::Groups;
    /// let mut groups = Groups::new();
    /// groups.add("Credit reporting", "^Credit reporting").unwrap();
    /// assert_eq!(
    ///     groups.product_group("Credit reporting, credit repair services"),
    ///     Some("Credit reporting")
    /// );
    /// assert_eq!(groups.product_group("Mortgage"), None);
    /// ```
    #[must_use]
    pub fn product_group(&self, product: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|g| g.regex.is_match(product))
            .map(|g| g.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_file_fn_correctly_parses_groups_config_file() {
        let groups = Groups::from_file("testdata/groups").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups
                .product_group("Credit reporting, credit repair services, or other personal consumer reports")
                .unwrap(),
            "Credit reporting"
        );
        assert_eq!(
            groups.product_group("Payday loan, title loan, or personal loan").unwrap(),
            "Consumer loan"
        );
        assert_eq!(groups.product_group("Consumer Loan").unwrap(), "Consumer loan");
        assert_eq!(groups.product_group("Mortgage"), None);
    }

    #[test]
    fn from_file_fn_returns_error_for_bad_line_format() {
        let err = Groups::from_file("testdata/groups.bad").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn from_file_fn_returns_error_for_missing_file() {
        assert!(Groups::from_file("testdata/bogus").is_err());
    }

    #[test]
    fn add_fn_returns_error_for_invalid_regex() {
        let mut groups = Groups::new();
        assert!(groups.add("Foo", "(unclosed").is_err());
        assert!(groups.is_empty());
    }

    #[test]
    fn product_group_fn_returns_first_matching_group() {
        let mut groups = Groups::new();
        groups.add("Loans", "loan").unwrap();
        groups.add("Student loans", "Student loan").unwrap();
        assert_eq!(groups.product_group("Student loan"), Some("Loans"));
    }
}
