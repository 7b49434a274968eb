use std::{borrow::Borrow, fmt::Display, str::FromStr};
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

/// The number of milliseconds a night shifts an instant by.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A UTC instant with millisecond precision.
///
/// Check-in and checkout dates are both represented by this type. Anything
/// finer than a millisecond is dropped on construction, rounding towards the
/// past, so every value is a whole number of milliseconds from the epoch. On
/// input,
/// either an RFC3339 datetime or a bare calendar date (`YYYY-MM-DD`) is
/// accepted; the latter is interpreted as midnight UTC. On output, the value
/// is always rendered as RFC3339.
///
/// # Examples
///
/// ```
/// # use ubs_core::models::DateTime;
/// let check_in: DateTime = "2024-03-01".parse().unwrap();
/// assert_eq!(check_in.add_days(2).to_string(), "2024-03-03T00:00:00Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DateTimeDto", into = "DateTimeDto")
)]
pub struct DateTime(PrimitiveDateTime);

impl DateTime {
    fn truncated(value: PrimitiveDateTime) -> Self {
        let excess = value.nanosecond() % 1_000_000;
        Self(value.saturating_sub(time::Duration::nanoseconds(i64::from(excess))))
    }

    /// Shift this instant by exactly `days * 86_400_000` milliseconds.
    ///
    /// There is no calendar awareness here: a day is always the same number
    /// of milliseconds. The result saturates at the representable bounds, so
    /// this never fails.
    pub fn add_days(self, days: i64) -> Self {
        let shift = time::Duration::milliseconds(days.saturating_mul(MILLIS_PER_DAY));
        Self::truncated(self.0.saturating_add(shift))
    }

    /// Like [`DateTime::add_days`], but `None` instead of saturating.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let shift = time::Duration::milliseconds(days.checked_mul(MILLIS_PER_DAY)?);
        self.0.checked_add(shift).map(Self::truncated)
    }

    /// Milliseconds since the unix epoch.
    pub fn unix_millis(&self) -> i64 {
        self.0.assume_utc().unix_timestamp_nanos().div_euclid(1_000_000) as i64
    }

    /// Reconstruct an instant from milliseconds since the unix epoch.
    pub fn from_unix_millis(millis: i64) -> Result<Self, DateTimeError> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .map(Self::from)
            .map_err(|_| DateTimeError::OutOfRange(millis))
    }
}

impl Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0.assume_utc();
        write!(f, "{}", value.format(&Rfc3339).map_err(|_| std::fmt::Error)?)
    }
}

impl FromStr for DateTime {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = OffsetDateTime::parse(s, &Rfc3339) {
            return Ok(value.into());
        }
        Date::parse(s, CALENDAR_DATE)
            .map(|date| Self::truncated(date.midnight()))
            .map_err(|_| DateTimeError::Unparseable(s.to_owned()))
    }
}

impl<T: Borrow<OffsetDateTime>> From<T> for DateTime {
    fn from(value: T) -> Self {
        let utc = value.borrow().to_offset(UtcOffset::UTC);
        Self::truncated(PrimitiveDateTime::new(utc.date(), utc.time()))
    }
}

impl From<DateTime> for OffsetDateTime {
    fn from(value: DateTime) -> Self {
        value.0.assume_utc()
    }
}

/// The ways a datetime may fail to be constructed.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DateTimeError {
    /// Neither an RFC3339 datetime nor a `YYYY-MM-DD` date
    #[error("expected an RFC3339 datetime or a YYYY-MM-DD date, got {0:?}")]
    Unparseable(String),
    /// The timestamp cannot be represented
    #[error("timestamp {0}ms is out of range")]
    OutOfRange(i64),
}

// This is a helper type that routes (de)serialization through the string forms
// above, so that both dates and datetimes are accepted on input.

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
struct DateTimeDto(String);

#[cfg(feature = "serde")]
impl TryFrom<DateTimeDto> for DateTime {
    type Error = DateTimeError;

    fn try_from(value: DateTimeDto) -> Result<Self, Self::Error> {
        value.0.parse()
    }
}

#[cfg(feature = "serde")]
impl From<DateTime> for DateTimeDto {
    fn from(value: DateTime) -> Self {
        DateTimeDto(value.to_string())
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for DateTime {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> std::borrow::Cow<'static, str> {
        "DateTime".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "description": "An RFC3339 datetime, or a YYYY-MM-DD date meaning midnight UTC",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::macros::datetime;

    #[test]
    fn test_calendar_date_is_midnight_utc() {
        let value: DateTime = "2024-02-28".parse().unwrap();
        assert_eq!(DateTime::from(datetime!(2024-02-28 0:00 UTC)), value);
    }

    #[test]
    fn test_rfc3339_is_normalized_to_utc() {
        let value: DateTime = "2024-02-28T10:00:00+02:00".parse().unwrap();
        assert_eq!(value.to_string(), "2024-02-28T08:00:00Z");
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(
            "next tuesday".parse::<DateTime>().unwrap_err(),
            DateTimeError::Unparseable("next tuesday".to_string())
        );
    }

    #[rstest]
    #[case(0, "2024-02-28T12:30:00Z")]
    #[case(1, "2024-02-29T12:30:00Z")]
    #[case(2, "2024-03-01T12:30:00Z")]
    #[case(-28, "2024-01-31T12:30:00Z")]
    #[case(366, "2025-02-28T12:30:00Z")]
    fn test_add_days(#[case] days: i64, #[case] expected: &str) {
        let start: DateTime = "2024-02-28T12:30:00Z".parse().unwrap();
        assert_eq!(start.add_days(days).to_string(), expected);
    }

    #[test]
    fn test_add_days_is_exact_milliseconds() {
        let start: DateTime = "2024-03-30T23:59:59.250Z".parse().unwrap();
        let shifted = start.add_days(3);
        assert_eq!(
            shifted.unix_millis() - start.unix_millis(),
            3 * MILLIS_PER_DAY
        );
    }

    #[test]
    fn test_add_days_saturates() {
        let start: DateTime = "2024-03-30".parse().unwrap();
        assert!(start.add_days(i64::MAX) > start);
        assert!(start.add_days(i64::MIN) < start);
    }

    #[test]
    fn test_checked_add_days() {
        let start: DateTime = "2024-03-30".parse().unwrap();
        assert_eq!(start.checked_add_days(2), Some(start.add_days(2)));
        assert_eq!(start.checked_add_days(10_000 * 366), None);
    }

    #[rstest]
    #[case("2024-03-01T00:00:00.0005Z", "2024-03-01T00:00:00Z", 1_709_251_200_000)]
    #[case("2024-03-01T00:00:00.001999Z", "2024-03-01T00:00:00.001Z", 1_709_251_200_001)]
    #[case("1969-12-31T23:59:59.9995Z", "1969-12-31T23:59:59.999Z", -1)]
    fn test_sub_millisecond_part_is_dropped(
        #[case] input: &str,
        #[case] expected: &str,
        #[case] millis: i64,
    ) {
        let value: DateTime = input.parse().unwrap();
        assert_eq!(value.to_string(), expected);
        assert_eq!(value.unix_millis(), millis);
        assert_eq!(DateTime::from_unix_millis(millis).unwrap(), value);
    }

    #[test]
    fn test_unix_millis_roundtrip() {
        let start: DateTime = "2024-03-30T01:02:03.004Z".parse().unwrap();
        let millis = start.unix_millis();
        assert_eq!(DateTime::from_unix_millis(millis).unwrap(), start);
    }

    #[test]
    fn test_serde_accepts_dates_and_emits_rfc3339() {
        let value: DateTime = serde_json::from_str("\"2024-05-06\"").unwrap();
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            "\"2024-05-06T00:00:00Z\""
        );
        assert!(serde_json::from_str::<DateTime>("\"06/05/2024\"").is_err());
    }
}
