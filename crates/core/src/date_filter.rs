//! Inclusive date-range filter for the caisse and report views.
//!
//! The end bound can never precede the start bound: the UI constrains the
//! minimum of the end picker, and [`DateRangeFilter::set_end`] enforces the
//! same rule. The explicit clear control resets both bounds at once.

use chrono::NaiveDate;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeFilter {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRangeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Whether any bound is active.
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Set the start bound.
    ///
    /// Rejected when it would move past an existing end bound.
    pub fn set_start(&mut self, start: NaiveDate) -> Result<(), CoreError> {
        if let Some(end) = self.end {
            if start > end {
                return Err(CoreError::Validation(
                    "La date de début doit précéder la date de fin".to_string(),
                ));
            }
        }
        self.start = Some(start);
        Ok(())
    }

    /// Set the end bound.
    ///
    /// Rejected when it precedes an existing start bound.
    pub fn set_end(&mut self, end: NaiveDate) -> Result<(), CoreError> {
        if let Some(start) = self.start {
            if end < start {
                return Err(CoreError::Validation(
                    "La date de fin doit suivre la date de début".to_string(),
                ));
            }
        }
        self.end = Some(end);
        Ok(())
    }

    /// The explicit clear control: back to "no filter".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a date falls inside the (inclusive) range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut filter = DateRangeFilter::new();
        filter.set_start(date("2026-03-10")).unwrap();
        assert_matches!(
            filter.set_end(date("2026-03-01")),
            Err(CoreError::Validation(_))
        );
        // The failed set leaves the filter untouched.
        assert_eq!(filter.end(), None);
    }

    #[test]
    fn start_after_end_is_rejected() {
        let mut filter = DateRangeFilter::new();
        filter.set_end(date("2026-03-10")).unwrap();
        assert_matches!(
            filter.set_start(date("2026-03-20")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn clear_resets_to_no_filter() {
        let mut filter = DateRangeFilter::new();
        filter.set_start(date("2026-03-01")).unwrap();
        filter.set_end(date("2026-03-31")).unwrap();
        assert!(filter.is_active());

        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter, DateRangeFilter::default());
    }

    #[test]
    fn no_filter_contains_everything() {
        let filter = DateRangeFilter::new();
        assert!(filter.contains(date("1999-01-01")));
        assert!(filter.contains(date("2050-12-31")));
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut filter = DateRangeFilter::new();
        filter.set_start(date("2026-03-01")).unwrap();
        filter.set_end(date("2026-03-31")).unwrap();

        assert!(filter.contains(date("2026-03-01")));
        assert!(filter.contains(date("2026-03-31")));
        assert!(!filter.contains(date("2026-02-28")));
        assert!(!filter.contains(date("2026-04-01")));
    }
}
