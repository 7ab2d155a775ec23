// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use time::format_description::well_known::Rfc3339;

/// A point in time, independent of any time zone or calendar.
///
/// # Examples
/// ```
/// # use dialogflow_cx_wkt::{Timestamp, TimestampError};
/// let ts = Timestamp::try_from("2025-05-16T09:46:12.500Z")?;
/// assert_eq!(ts.seconds(), 1747388772);
/// assert_eq!(ts.nanos(), 500_000_000);
/// assert_eq!(String::from(ts), "2025-05-16T09:46:12.5Z");
/// # Ok::<(), TimestampError>(())
/// ```
///
/// The value is a count of seconds and nanoseconds relative to the Unix epoch.
/// The range is from 0001-01-01T00:00:00Z to 9999-12-31T23:59:59.999999999Z,
/// which guarantees the value can always be formatted as an
/// [RFC 3339](https://www.ietf.org/rfc/rfc3339.txt) string.
///
/// # JSON Mapping
///
/// Encoded as an RFC 3339 string with a `Z` suffix, for example
/// `"2017-01-15T01:30:15.01Z"`. Fractional seconds are optional and have up to
/// nine digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Failures creating or parsing a [Timestamp].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The input is not a valid RFC 3339 timestamp.
    #[error("cannot deserialize timestamp, source={0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = TimestampError;

const NS: i128 = 1_000_000_000;

impl Timestamp {
    const NS: i32 = 1_000_000_000;

    /// The minimum value for the `seconds` component. Corresponds to '0001-01-01T00:00:00Z'.
    pub const MIN_SECONDS: i64 = -62135596800;

    /// The maximum value for the `seconds` component. Corresponds to '9999-12-31T23:59:59Z'.
    pub const MAX_SECONDS: i64 = 253402300799;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = 0;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// Creates a new [Timestamp], failing if either component is out of range.
    ///
    /// # Examples
    /// ```
    /// # use dialogflow_cx_wkt::{Timestamp, TimestampError};
    /// let ts = Timestamp::new(1747388772, 0)?;
    /// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
    ///
    /// let ts = Timestamp::new(1747388772, 2_000_000_000);
    /// assert!(matches!(ts, Err(TimestampError::OutOfRange)));
    /// # Ok::<(), TimestampError>(())
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { seconds, nanos })
    }

    /// Creates a normalized [Timestamp], saturating at the valid range.
    ///
    /// Nanoseconds outside `[0, 999_999_999]` carry into the seconds.
    ///
    /// ```
    /// # use dialogflow_cx_wkt::Timestamp;
    /// let ts = Timestamp::clamp(1747388772, 2_000_000_000);
    /// assert_eq!(String::from(ts), "2025-05-16T09:46:14Z");
    /// ```
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let seconds = seconds.saturating_add(nanos.div_euclid(Self::NS) as i64);
        let nanos = nanos.rem_euclid(Self::NS);
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        }
        if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// Seconds of UTC time since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Non-negative fractions of a second at nanosecond resolution.
    ///
    /// Negative second values with fractions still have non-negative nanos
    /// values that count forward in time.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    fn to_offset_date_time(self) -> time::OffsetDateTime {
        // The range checks in `new()` and `clamp()` make this infallible.
        time::OffsetDateTime::from_unix_timestamp_nanos(self.seconds as i128 * NS + self.nanos as i128)
            .unwrap_or(time::OffsetDateTime::UNIX_EPOCH)
    }
}

impl serde::ser::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        use serde::ser::Error as _;
        let formatted = self
            .to_offset_date_time()
            .format(&Rfc3339)
            .map_err(S::Error::custom)?;
        formatted.serialize(serializer)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a timestamp in RFC 3339 format")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Timestamp::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

/// Formats a [Timestamp] using RFC 3339.
impl From<Timestamp> for String {
    fn from(timestamp: Timestamp) -> Self {
        timestamp
            .to_offset_date_time()
            .format(&Rfc3339)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from(*self))
    }
}

/// Parses an RFC 3339 string.
impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let odt = time::OffsetDateTime::parse(value, &Rfc3339)
            .map_err(|e| TimestampError::Deserialize(e.into()))?;
        Timestamp::try_from(odt)
    }
}

impl TryFrom<&String> for Timestamp {
    type Error = TimestampError;
    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Timestamp::try_from(value.as_str())
    }
}

/// Converts from [time::OffsetDateTime], failing if the value is out of range.
///
/// ```
/// # use dialogflow_cx_wkt::Timestamp;
/// use time::macros::datetime;
/// let ts = Timestamp::try_from(datetime!(2025-05-16 09:46:12 UTC))?;
/// assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
/// # Ok::<(), anyhow::Error>(())
/// ```
impl TryFrom<time::OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: time::OffsetDateTime) -> Result<Self, Self::Error> {
        let nanos_since_epoch = value.unix_timestamp_nanos();
        let seconds = nanos_since_epoch.div_euclid(NS);
        let nanos = nanos_since_epoch.rem_euclid(NS);
        let seconds = i64::try_from(seconds).map_err(|_| Error::OutOfRange)?;
        Timestamp::new(seconds, nanos as i32)
    }
}

impl From<Timestamp> for time::OffsetDateTime {
    fn from(value: Timestamp) -> Self {
        value.to_offset_date_time()
    }
}

/// Converts from [chrono::DateTime], failing if the value is out of range.
#[cfg(feature = "chrono")]
impl TryFrom<chrono::DateTime<chrono::Utc>> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: chrono::DateTime<chrono::Utc>) -> Result<Self, Self::Error> {
        Timestamp::new(value.timestamp(), value.timestamp_subsec_nanos() as i32)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Timestamp> for chrono::DateTime<chrono::Utc> {
    type Error = TimestampError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        chrono::DateTime::from_timestamp(value.seconds, value.nanos as u32)
            .ok_or(TimestampError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn unix_epoch() -> Result {
        let proto = Timestamp::default();
        let json = serde_json::to_value(proto)?;
        assert_eq!(json, json!("1970-01-01T00:00:00Z"));
        let roundtrip = serde_json::from_value::<Timestamp>(json)?;
        assert_eq!(proto, roundtrip);
        Ok(())
    }

    #[test_case("0001-01-01T00:00:00Z")]
    #[test_case("9999-12-31T23:59:59.999999999Z")]
    #[test_case("2024-10-19T12:34:56.789Z")]
    #[test_case("2024-10-19T12:34:56.789123456Z")]
    #[test_case("1969-12-31T23:59:59.5Z")]
    fn roundtrip(input: &str) -> Result {
        let json = serde_json::Value::String(input.to_string());
        let timestamp = serde_json::from_value::<Timestamp>(json)?;
        let roundtrip = serde_json::to_string(&timestamp)?;
        assert_eq!(format!("\"{input}\""), roundtrip, "input={input}");
        Ok(())
    }

    #[test]
    fn before_epoch_has_positive_nanos() -> Result {
        let ts = Timestamp::try_from("1969-12-31T23:59:59.5Z")?;
        assert_eq!(ts.seconds(), -1);
        assert_eq!(ts.nanos(), 500_000_000);
        Ok(())
    }

    #[test]
    fn with_offset() -> Result {
        let ts = Timestamp::try_from("2025-05-16T11:46:12+02:00")?;
        assert_eq!(String::from(ts), "2025-05-16T09:46:12Z");
        Ok(())
    }

    #[test_case(Timestamp::MIN_SECONDS - 1, 0)]
    #[test_case(Timestamp::MAX_SECONDS + 1, 0)]
    #[test_case(0, -1)]
    #[test_case(0, 1_000_000_000)]
    fn new_out_of_range(seconds: i64, nanos: i32) {
        let got = Timestamp::new(seconds, nanos);
        assert!(matches!(got, Err(TimestampError::OutOfRange)), "{got:?}");
    }

    #[test_case(0, 0, 0, 0)]
    #[test_case(1, 1_500_000_000, 2, 500_000_000)]
    #[test_case(1, -1, 0, 999_999_999)]
    #[test_case(10, -1_000_000_000, 9, 0)]
    #[test_case(10, -2_000_000_000, 8, 0)]
    #[test_case(10, -1_500_000_000, 8, 500_000_000)]
    #[test_case(Timestamp::MAX_SECONDS, 2_000_000_000, Timestamp::MAX_SECONDS, 0)]
    #[test_case(Timestamp::MIN_SECONDS, -1, Timestamp::MIN_SECONDS, 0)]
    fn clamp(seconds: i64, nanos: i32, want_seconds: i64, want_nanos: i32) {
        let got = Timestamp::clamp(seconds, nanos);
        assert_eq!(got.seconds(), want_seconds, "{got:?}");
        assert_eq!(got.nanos(), want_nanos, "{got:?}");
        let roundtrip = Timestamp::try_from(String::from(got).as_str());
        assert!(matches!(&roundtrip, Ok(t) if *t == got), "{got:?} {roundtrip:?}");
    }

    #[test_case("invalid")]
    #[test_case("2025-05-16")]
    #[test_case("2025-05-16T09:46:12")]
    fn parse_errors(input: &str) {
        let got = Timestamp::try_from(input);
        assert!(matches!(got, Err(TimestampError::Deserialize(_))), "{got:?}");
    }

    #[test]
    fn deserialize_unexpected_type() {
        let got = serde_json::from_value::<Timestamp>(json!(123));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn time_conversions() -> Result {
        let dt = time::macros::datetime!(2025-05-16 09:46:12.25 UTC);
        let ts = Timestamp::try_from(dt)?;
        assert_eq!(ts.seconds(), 1747388772);
        assert_eq!(ts.nanos(), 250_000_000);
        assert_eq!(time::OffsetDateTime::from(ts), dt);
        Ok(())
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_conversions() -> Result {
        use chrono::TimeZone;
        let dt = chrono::Utc.with_ymd_and_hms(2025, 5, 16, 9, 46, 12).single();
        let dt = dt.ok_or("bad date")?;
        let ts = Timestamp::try_from(dt)?;
        assert_eq!(ts.seconds(), 1747388772);
        let back = chrono::DateTime::<chrono::Utc>::try_from(ts)?;
        assert_eq!(back, dt);
        Ok(())
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Helper {
        create_time: Option<Timestamp>,
    }

    #[test]
    fn in_struct() -> Result {
        let json = serde_json::to_value(Helper::default())?;
        assert_eq!(json, json!({}));

        let input = Helper {
            create_time: Some(Timestamp::new(12, 345_678_000)?),
        };
        let json = serde_json::to_value(&input)?;
        assert_eq!(json, json!({ "createTime": "1970-01-01T00:00:12.345678Z" }));
        let got = serde_json::from_value::<Helper>(json)?;
        assert_eq!(got, input);
        Ok(())
    }
}
