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

/// A signed, fixed-length span of time.
///
/// Dialogflow CX uses durations for webhook timeouts, experiment lengths, and
/// rollout steps.
///
/// # Examples
/// ```
/// # use dialogflow_cx_wkt::{Duration, DurationError};
/// let d = Duration::try_from("12.34s")?;
/// assert_eq!(d.seconds(), 12);
/// assert_eq!(d.nanos(), 340_000_000);
/// assert_eq!(String::from(d), "12.34s");
/// # Ok::<(), DurationError>(())
/// ```
///
/// # JSON Mapping
///
/// Encoded as a string with an `s` suffix. Fractional seconds drop trailing
/// zeros: three seconds is `"3s"`, three seconds and one microsecond is
/// `"3.000001s"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Duration {
    // In the [-315_576_000_000, 315_576_000_000] range, about 10,000 years.
    seconds: i64,
    // Same sign as `seconds` when both are non-zero.
    nanos: i32,
}

/// Failures creating or parsing a [Duration].
///
/// ```
/// # use dialogflow_cx_wkt::{Duration, DurationError};
/// let d = Duration::new(0, 1_500_000_000);
/// assert!(matches!(d, Err(DurationError::OutOfRange)));
/// let d = Duration::new(120, -500_000_000);
/// assert!(matches!(d, Err(DurationError::MismatchedSigns)));
/// let d = Duration::try_from("invalid");
/// assert!(matches!(d, Err(DurationError::Deserialize(_))));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DurationError {
    /// One of the components (seconds and/or nanoseconds) was out of range.
    #[error("seconds and/or nanoseconds out of range")]
    OutOfRange,

    /// The seconds and nanoseconds have different signs.
    #[error("if seconds and nanoseconds are not zero, they must have the same sign")]
    MismatchedSigns,

    /// The input is not a valid duration string.
    #[error("cannot deserialize the duration: {0}")]
    Deserialize(#[source] BoxedError),
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = DurationError;

impl Duration {
    const NS: i32 = 1_000_000_000;

    /// The maximum value for the `seconds` component.
    pub const MAX_SECONDS: i64 = 315_576_000_000;

    /// The minimum value for the `seconds` component.
    pub const MIN_SECONDS: i64 = -Self::MAX_SECONDS;

    /// The maximum value for the `nanos` component.
    pub const MAX_NANOS: i32 = Self::NS - 1;

    /// The minimum value for the `nanos` component.
    pub const MIN_NANOS: i32 = -Self::MAX_NANOS;

    /// Creates a [Duration], validating the range and signs of both components.
    ///
    /// ```
    /// # use dialogflow_cx_wkt::{Duration, DurationError};
    /// let d = Duration::new(-12, -340_000_000)?;
    /// assert_eq!(String::from(d), "-12.34s");
    /// # Ok::<(), DurationError>(())
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, Error> {
        if !(Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds) {
            return Err(Error::OutOfRange);
        }
        if !(Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos) {
            return Err(Error::OutOfRange);
        }
        if seconds != 0 && nanos != 0 && (seconds < 0) != (nanos < 0) {
            return Err(Error::MismatchedSigns);
        }
        Ok(Self { seconds, nanos })
    }

    /// Creates a normalized [Duration], saturating at the valid range.
    ///
    /// The nanoseconds are added to the seconds with carry.
    ///
    /// ```
    /// # use dialogflow_cx_wkt::Duration;
    /// let d = Duration::clamp(10, 2_000_000_000);
    /// assert_eq!(String::from(d), "12s");
    /// ```
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let mut seconds = seconds.saturating_add((nanos / Self::NS) as i64);
        let mut nanos = nanos % Self::NS;
        if seconds > 0 && nanos < 0 {
            seconds -= 1;
            nanos += Self::NS;
        } else if seconds < 0 && nanos > 0 {
            seconds += 1;
            nanos -= Self::NS;
        }
        if seconds > Self::MAX_SECONDS {
            return Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            };
        }
        if seconds < Self::MIN_SECONDS {
            return Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            };
        }
        Self { seconds, nanos }
    }

    /// The whole seconds in the duration.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The sub-second part of the duration, with the same sign as [seconds][Duration::seconds].
    pub fn nanos(&self) -> i32 {
        self.nanos
    }
}

impl From<Duration> for String {
    fn from(duration: Duration) -> String {
        let sign = if duration.seconds < 0 || duration.nanos < 0 {
            "-"
        } else {
            ""
        };
        let seconds = duration.seconds.unsigned_abs();
        if duration.nanos == 0 {
            return format!("{sign}{seconds}s");
        }
        let fraction = format!("{:09}", duration.nanos.unsigned_abs());
        format!("{sign}{seconds}.{}s", fraction.trim_end_matches('0'))
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from(*self))
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let digits = value
            .strip_suffix('s')
            .ok_or_else(|| Error::Deserialize("missing trailing 's'".into()))?;
        let (sign, digits) = match digits.strip_prefix('-') {
            Some(rest) => (-1_i64, rest),
            None => (1_i64, digits),
        };
        let (whole, fraction) = match digits.split_once('.') {
            Some((w, f)) => (w, Some(f)),
            None => (digits, None),
        };
        if whole.is_empty() || !whole.bytes().all(|c| c.is_ascii_digit()) {
            return Err(Error::Deserialize(
                format!("invalid seconds in {value:?}").into(),
            ));
        }
        let seconds = whole
            .parse::<i64>()
            .map_err(|e| Error::Deserialize(e.into()))?;
        let nanos = match fraction {
            None => 0,
            Some(f) if f.is_empty() || f.len() > 9 || !f.bytes().all(|c| c.is_ascii_digit()) => {
                return Err(Error::Deserialize(
                    format!("invalid fractional seconds in {value:?}").into(),
                ));
            }
            Some(f) => format!("{f:0<9}")
                .parse::<i32>()
                .map_err(|e| Error::Deserialize(e.into()))?,
        };
        Duration::new(sign * seconds, sign as i32 * nanos)
    }
}

impl TryFrom<&String> for Duration {
    type Error = DurationError;
    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Duration::try_from(value.as_str())
    }
}

/// Converts from [std::time::Duration], failing if the value is out of range.
impl TryFrom<std::time::Duration> for Duration {
    type Error = DurationError;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        let seconds = i64::try_from(value.as_secs()).map_err(|_| Error::OutOfRange)?;
        Self::new(seconds, value.subsec_nanos() as i32)
    }
}

/// Converts to [std::time::Duration], failing for negative durations.
///
/// ```
/// # use dialogflow_cx_wkt::Duration;
/// let d = std::time::Duration::try_from(Duration::clamp(5, 0))?;
/// assert_eq!(d, std::time::Duration::from_secs(5));
/// # Ok::<(), anyhow::Error>(())
/// ```
impl TryFrom<Duration> for std::time::Duration {
    type Error = DurationError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        if value.seconds < 0 || value.nanos < 0 {
            return Err(Error::OutOfRange);
        }
        Ok(Self::new(value.seconds as u64, value.nanos as u32))
    }
}

impl TryFrom<time::Duration> for Duration {
    type Error = DurationError;

    fn try_from(value: time::Duration) -> Result<Self, Self::Error> {
        Self::new(value.whole_seconds(), value.subsec_nanoseconds())
    }
}

impl From<Duration> for time::Duration {
    fn from(value: Duration) -> Self {
        Self::new(value.seconds(), value.nanos())
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::Duration> for Duration {
    type Error = DurationError;

    fn try_from(value: chrono::Duration) -> Result<Self, Self::Error> {
        Self::new(value.num_seconds(), value.subsec_nanos())
    }
}

#[cfg(feature = "chrono")]
impl From<Duration> for chrono::Duration {
    fn from(value: Duration) -> Self {
        Self::seconds(value.seconds) + Self::nanoseconds(value.nanos as i64)
    }
}

impl serde::ser::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        String::from(*self).serialize(serializer)
    }
}

struct DurationVisitor;

impl serde::de::Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with a duration in Google format ([sign]{seconds}.{nanos}s)")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Duration::try_from(value).map_err(E::custom)
    }
}

impl<'de> serde::de::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(DurationVisitor)
    }
}
