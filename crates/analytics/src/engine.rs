use crate::error::AnalyticsError;
use chrono::{DateTime, Datelike, Months, Utc};
use core_types::{DatedRecord, Percent};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// A stateless calculator for year-over-year percentage changes over a
/// sparse series of priced records.
///
/// The rounding configuration is engine-local; there is no process-wide
/// arithmetic context to mutate.
#[derive(Debug, Clone)]
pub struct YoyEngine {
    /// Scale of every computed percentage, in decimal places.
    scale: u32,
    /// Rounding applied at that scale, and to the baseline when checking the
    /// zero-guard. Half-away-from-zero matches the half-up default of the
    /// upstream data pipeline.
    rounding: RoundingStrategy,
}

impl Default for YoyEngine {
    fn default() -> Self {
        Self {
            scale: 2,
            rounding: RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

impl YoyEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new vector with `records` sorted by date descending (most
    /// recent first). The input slice is never mutated.
    ///
    /// The sort is stable: records sharing a date keep their input order.
    pub fn order_by_date(&self, records: &[DatedRecord]) -> Vec<DatedRecord> {
        let mut ordered = records.to_vec();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered
    }

    /// Finds the candidate closest to `target` in absolute time, measured in
    /// milliseconds since the epoch rather than calendar units.
    ///
    /// The running best is only replaced on a strictly smaller distance, so
    /// the first candidate encountered wins exact ties. Returns `None` only
    /// when `candidates` is empty.
    pub fn find_closest<'a>(
        &self,
        candidates: &'a [DatedRecord],
        target: DateTime<Utc>,
    ) -> Option<&'a DatedRecord> {
        let target_millis = target.timestamp_millis();
        let mut closest: Option<&DatedRecord> = None;
        let mut closest_diff = i64::MAX;

        for candidate in candidates {
            let diff = (candidate.date.timestamp_millis() - target_millis).abs();
            if diff < closest_diff {
                closest_diff = diff;
                closest = Some(candidate);
            }
        }

        closest
    }

    /// Computes the signed percentage change from `before` to `recent`,
    /// rounded to the engine's scale. Returns `None` when no baseline exists.
    ///
    /// Zero-guard: when `before` rounds to zero at scale 0, the change is the
    /// fixed sentinel `100` instead of a division by zero. Callers should be
    /// aware that this conflates "growth from nothing" with an exact
    /// doubling; it is kept for compatibility with historically computed
    /// values.
    pub fn percent_change(&self, recent: Decimal, before: Option<Decimal>) -> Option<Percent> {
        let before = before?;

        let change = if before.round_dp_with_strategy(0, self.rounding).is_zero() {
            Decimal::ONE_HUNDRED
        } else {
            ((recent - before) / before * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(self.scale, self.rounding)
        };

        Some(Percent::new(change))
    }

    /// Computes the year-over-year change for `group`.
    ///
    /// The comparison point is looked up in the calendar month one year
    /// before the most recent record (the supplied override, or the latest
    /// record in `group`): an exact day-of-month anniversary if one exists,
    /// otherwise the sample closest to the anchor date. `Ok(None)` means no
    /// comparable data, which is an expected outcome, not a fault.
    ///
    /// Leap years: the anchor is derived with calendar-aware subtraction
    /// that clamps Feb 29 to Feb 28 of the prior year.
    pub fn calculate_yoy(
        &self,
        group: &[DatedRecord],
        most_recent: Option<&DatedRecord>,
    ) -> Result<Option<Percent>, AnalyticsError> {
        if group.is_empty() {
            return Ok(None);
        }

        let ordered = self.order_by_date(group);
        let most_recent = most_recent.cloned().unwrap_or_else(|| ordered[0].clone());

        let anchor = most_recent
            .date
            .checked_sub_months(Months::new(12))
            .ok_or(AnalyticsError::DateOutOfRange(most_recent.date))?;
        debug!(%anchor, "derived year-over-year anchor");

        let same_month_last_year: Vec<DatedRecord> = ordered
            .into_iter()
            .filter(|record| {
                record.date.year() == anchor.year() && record.date.month() == anchor.month()
            })
            .collect();

        if same_month_last_year.is_empty() {
            debug!("no candidates in the anchor month");
            return Ok(None);
        }

        if let Some(same_day) = same_month_last_year
            .iter()
            .find(|record| record.date.day() == most_recent.date.day())
        {
            debug!(date = %same_day.date, "exact anniversary match");
            return Ok(self.percent_change(most_recent.value, Some(same_day.value)));
        }

        // Unreachable None: the filtered set is non-empty at this point.
        let Some(fallback) = self.find_closest(&same_month_last_year, anchor) else {
            return Ok(None);
        };
        debug!(date = %fallback.date, "falling back to nearest sample");

        Ok(self.percent_change(most_recent.value, Some(fallback.value)))
    }
}
