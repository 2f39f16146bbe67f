/// Relative time formatting ("Now", "3 Days ago", "In 2 Years")
///
/// Unit lengths are fixed: a month is 30 days and a year is 365 days.
/// No calendar arithmetic is involved.
use chrono::{ DateTime, Utc };
use std::fmt;
use strum::{ EnumIter, IntoEnumIterator };

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = MS_PER_SECOND * 60;
const MS_PER_HOUR: u64 = MS_PER_MINUTE * 60;
const MS_PER_DAY: u64 = MS_PER_HOUR * 24;
const MS_PER_MONTH: u64 = MS_PER_DAY * 30;
const MS_PER_YEAR: u64 = MS_PER_DAY * 365;

/// Anything below this many whole seconds is reported as "Now"
const NOW_THRESHOLD_SECONDS: u64 = 59;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    /// Length of one unit in milliseconds
    pub fn millis(self) -> u64 {
        match self {
            TimeUnit::Second => MS_PER_SECOND,
            TimeUnit::Minute => MS_PER_MINUTE,
            TimeUnit::Hour => MS_PER_HOUR,
            TimeUnit::Day => MS_PER_DAY,
            TimeUnit::Month => MS_PER_MONTH,
            TimeUnit::Year => MS_PER_YEAR,
        }
    }

    pub fn plural_label(self) -> &'static str {
        match self {
            TimeUnit::Second => "Seconds",
            TimeUnit::Minute => "Minutes",
            TimeUnit::Hour => "Hours",
            TimeUnit::Day => "Days",
            TimeUnit::Month => "Months",
            TimeUnit::Year => "Years",
        }
    }

    /// Label for `count` units. A count of exactly one drops the trailing "s".
    pub fn label(self, count: u64) -> &'static str {
        let plural = self.plural_label();
        if count == 1 { &plural[..plural.len() - 1] } else { plural }
    }

    /// Whole number of this unit contained in `millis`
    pub fn count_in(self, millis: u64) -> u64 {
        millis / self.millis()
    }

    /// Units from largest to smallest, the order used to pick a description
    pub fn descending() -> impl Iterator<Item = TimeUnit> {
        TimeUnit::iter().rev()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Past,
    Future,
    Now,
}

/// The relative distance between two instants, expressed in its largest whole unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeDescription {
    pub magnitude: u64,
    pub unit: TimeUnit,
    pub direction: Direction,
}

impl RelativeDescription {
    /// Describes `target` as seen from `reference`
    pub fn between(target: DateTime<Utc>, reference: DateTime<Utc>) -> Self {
        let delta = (target - reference).num_milliseconds().unsigned_abs();

        let seconds = TimeUnit::Second.count_in(delta);
        if seconds <= NOW_THRESHOLD_SECONDS {
            return Self {
                magnitude: seconds,
                unit: TimeUnit::Second,
                direction: Direction::Now,
            };
        }

        // delta is at least one minute here, so a unit always matches
        let (unit, magnitude) = TimeUnit::descending()
            .map(|unit| (unit, unit.count_in(delta)))
            .find(|(_, count)| *count > 0)
            .unwrap_or((TimeUnit::Second, seconds));

        let direction = if target > reference { Direction::Future } else { Direction::Past };

        Self { magnitude, unit, direction }
    }

    pub fn is_now(&self) -> bool {
        self.direction == Direction::Now
    }
}

impl fmt::Display for RelativeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.unit.label(self.magnitude);
        match self.direction {
            Direction::Now => write!(f, "Now"),
            Direction::Future => write!(f, "In {} {}", self.magnitude, label),
            Direction::Past => write!(f, "{} {} ago", self.magnitude, label),
        }
    }
}

/// Formats `target` relative to `reference`
/// Examples: "Now", "1 Minute ago", "In 3 Days", "2 Years ago"
pub fn format_relative_time_from(target: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    RelativeDescription::between(target, reference).to_string()
}

/// Formats `target` relative to the current wall-clock time
pub fn format_relative_time(target: DateTime<Utc>) -> String {
    format_relative_time_from(target, Utc::now())
}
