use crate::core::search::{keep_in_year, neighbouring_years, shift_days};
use crate::domain::ports::AnchorFunction;
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Resolves holidays defined as a day offset from a per-year anchor date.
pub struct AnchorOffsetResolver<A: AnchorFunction> {
    anchor: A,
}

impl<A: AnchorFunction> AnchorOffsetResolver<A> {
    pub fn new(anchor: A) -> Self {
        Self { anchor }
    }

    /// Dates in `year` equal to `anchor(year + k) + offset_days` for k in -1..=1.
    pub fn resolve(&self, year: i32, offset_days: i64) -> Result<BTreeSet<NaiveDate>> {
        let mut candidates = Vec::with_capacity(3);
        for anchor_year in neighbouring_years(year) {
            let anchor = self.anchor.anchor(anchor_year)?;
            candidates.push(shift_days(anchor, offset_days)?);
        }

        let dates = keep_in_year(year, candidates);
        tracing::trace!(
            "{} {:+} days in {}: {:?}",
            self.anchor.name(),
            offset_days,
            year,
            dates
        );
        Ok(dates)
    }
}
