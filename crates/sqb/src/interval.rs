//! Interval values for date arithmetic.
//!
//! Any combination of components can be accumulated except `weeks` and
//! `quarters`, which must be used on their own.

use crate::error::{BuildError, BuildResult};

/// A calendar/time interval, built one component at a time.
///
/// # Example
/// ```
/// use sqb::Interval;
///
/// let iv = Interval::new().years(1)?.months(6)?;
/// # Ok::<(), sqb::BuildError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interval {
    years: Option<i64>,
    quarters: Option<i64>,
    months: Option<i64>,
    weeks: Option<i64>,
    days: Option<i64>,
    hours: Option<i64>,
    minutes: Option<i64>,
    seconds: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Years,
    Quarters,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Slot {
    const ALL: [Slot; 8] = [
        Slot::Years,
        Slot::Quarters,
        Slot::Months,
        Slot::Weeks,
        Slot::Days,
        Slot::Hours,
        Slot::Minutes,
        Slot::Seconds,
    ];

    fn name(self) -> &'static str {
        match self {
            Slot::Years => "years",
            Slot::Quarters => "quarters",
            Slot::Months => "months",
            Slot::Weeks => "weeks",
            Slot::Days => "days",
            Slot::Hours => "hours",
            Slot::Minutes => "minutes",
            Slot::Seconds => "seconds",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            Slot::Years => "YEAR",
            Slot::Quarters => "QUARTER",
            Slot::Months => "MONTH",
            Slot::Weeks => "WEEK",
            Slot::Days => "DAY",
            Slot::Hours => "HOUR",
            Slot::Minutes => "MINUTE",
            Slot::Seconds => "SECOND",
        }
    }
}

impl Interval {
    /// Create an empty interval.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the years component.
    pub fn years(self, n: i64) -> BuildResult<Self> {
        self.set(Slot::Years, n)
    }

    /// Set the quarters component (exclusive with all others).
    pub fn quarters(self, n: i64) -> BuildResult<Self> {
        self.set(Slot::Quarters, n)
    }

    /// Set the months component.
    pub fn months(self, n: i64) -> BuildResult<Self> {
        self.set(Slot::Months, n)
    }

    /// Set the weeks component (exclusive with all others).
    pub fn weeks(self, n: i64) -> BuildResult<Self> {
        self.set(Slot::Weeks, n)
    }

    /// Set the days component.
    pub fn days(self, n: i64) -> BuildResult<Self> {
        self.set(Slot::Days, n)
    }

    /// Set the hours component.
    pub fn hours(self, n: i64) -> BuildResult<Self> {
        self.set(Slot::Hours, n)
    }

    /// Set the minutes component.
    pub fn minutes(self, n: i64) -> BuildResult<Self> {
        self.set(Slot::Minutes, n)
    }

    /// Set the seconds component.
    pub fn seconds(self, n: i64) -> BuildResult<Self> {
        self.set(Slot::Seconds, n)
    }

    fn set(mut self, slot: Slot, n: i64) -> BuildResult<Self> {
        let exclusive = matches!(slot, Slot::Weeks | Slot::Quarters);
        if exclusive && self.has_other_than(slot) {
            return Err(BuildError::interval(format!(
                "{} cannot be combined with other interval components",
                slot.name()
            )));
        }
        if !exclusive && (self.weeks.is_some() || self.quarters.is_some()) {
            let held = if self.weeks.is_some() { "weeks" } else { "quarters" };
            return Err(BuildError::interval(format!(
                "{held} cannot be combined with other interval components"
            )));
        }
        *self.slot_mut(slot) = Some(n);
        Ok(self)
    }

    fn has_other_than(&self, slot: Slot) -> bool {
        Slot::ALL
            .iter()
            .any(|&s| s != slot && self.get(s).is_some())
    }

    fn get(&self, slot: Slot) -> Option<i64> {
        match slot {
            Slot::Years => self.years,
            Slot::Quarters => self.quarters,
            Slot::Months => self.months,
            Slot::Weeks => self.weeks,
            Slot::Days => self.days,
            Slot::Hours => self.hours,
            Slot::Minutes => self.minutes,
            Slot::Seconds => self.seconds,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<i64> {
        match slot {
            Slot::Years => &mut self.years,
            Slot::Quarters => &mut self.quarters,
            Slot::Months => &mut self.months,
            Slot::Weeks => &mut self.weeks,
            Slot::Days => &mut self.days,
            Slot::Hours => &mut self.hours,
            Slot::Minutes => &mut self.minutes,
            Slot::Seconds => &mut self.seconds,
        }
    }

    /// The set components as `(value, UNIT)` pairs, in fixed
    /// years-to-seconds order.
    pub(crate) fn components(&self) -> Vec<(i64, &'static str)> {
        Slot::ALL
            .iter()
            .filter_map(|&s| self.get(s).map(|n| (n, s.unit())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_components_combine() {
        let iv = Interval::new().years(1).unwrap().months(6).unwrap();
        assert_eq!(iv.components(), vec![(1, "YEAR"), (6, "MONTH")]);
    }

    #[test]
    fn component_order_is_fixed() {
        let iv = Interval::new()
            .seconds(3)
            .unwrap()
            .days(2)
            .unwrap()
            .hours(4)
            .unwrap();
        assert_eq!(iv.components(), vec![(2, "DAY"), (4, "HOUR"), (3, "SECOND")]);
    }

    #[test]
    fn weeks_rejects_other_components() {
        let err = Interval::new().weeks(2).unwrap().months(1).unwrap_err();
        assert!(matches!(err, BuildError::Interval(_)));
        let err = Interval::new().months(1).unwrap().weeks(2).unwrap_err();
        assert!(matches!(err, BuildError::Interval(_)));
    }

    #[test]
    fn quarters_rejects_other_components() {
        let err = Interval::new().quarters(1).unwrap().days(1).unwrap_err();
        assert!(matches!(err, BuildError::Interval(_)));
        assert!(Interval::new().quarters(1).unwrap().weeks(1).is_err());
    }

    #[test]
    fn same_component_can_be_reset() {
        let iv = Interval::new().weeks(1).unwrap().weeks(3).unwrap();
        assert_eq!(iv.components(), vec![(3, "WEEK")]);
    }
}
