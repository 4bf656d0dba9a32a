use serde_with::SerializeDisplay;

use std::fmt::{Debug, Display};

/// Represents a whole-number percentage, from 0 to 100.
///
/// The [`Display`] implementation (and therefore serialization) writes the
/// bare number, without a `%` sign.
#[derive(Clone, Copy, Default, SerializeDisplay, Eq, PartialEq, Ord, PartialOrd)]
pub struct Percent(u8);

impl Percent {
    /// Returns `part` as a percentage of `whole`, rounded to the nearest
    /// whole number.
    ///
    /// Exact halves round up, so 1 out of 200 (0.5%) is 1%, and 99 out of
    /// 200 (49.5%) is 50%. A `whole` of zero gives 0%.
    ///
    /// # Examples
    ///
    /// ```
    /// # use complaints::Percent;
    /// assert_eq!(Percent::share(2, 3).value(), 67);
    /// assert_eq!(Percent::share(1, 3).value(), 33);
    /// assert_eq!(Percent::share(1, 200).value(), 1);
    /// ```
    #[must_use]
    pub fn share(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self(0);
        }
        let part = part.min(whole);
        // floor(part * 100 / whole + 1/2), in integers
        let rounded = (200 * part + whole) / (2 * whole);
        Self(u8::try_from(rounded).unwrap_or(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Percent> for u8 {
    fn from(p: Percent) -> Self {
        p.0
    }
}
