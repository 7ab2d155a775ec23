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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// Represents an error in a [CredentialsProvider].
///
/// Credentials providers may fail to produce the authentication headers. For
/// example, a provider that refreshes access tokens may be unable to reach the
/// token endpoint. Some of these failures are transient, and a future attempt
/// may succeed.
///
/// Applications implementing their own [CredentialsProvider] create instances
/// of this type. Most applications only observe it as the
/// [source][std::error::Error::source] of an [Error][crate::error::Error]
/// where [is_authentication()][crate::error::Error::is_authentication] is true.
///
/// # Example
/// ```
/// # use dialogflow_cx_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(true, "token endpoint unavailable");
/// assert!(err.is_transient());
/// assert!(err.to_string().contains("token endpoint unavailable"));
/// ```
///
/// [CredentialsProvider]: crate::credentials::CredentialsProvider
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    message: Option<String>,
    source: Option<Arc<dyn Error + Send + Sync>>,
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping `source`.
    ///
    /// # Parameters
    /// * `is_transient` - if true, a future attempt may succeed.
    /// * `source` - the underlying cause.
    pub fn from_source<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        CredentialsError {
            is_transient,
            message: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` with a message and no source.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        CredentialsError {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates a new `CredentialsError` with a message and a source.
    pub fn new<M, T>(is_transient: bool, message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Error + Send + Sync + 'static,
    {
        CredentialsError {
            is_transient,
            message: Some(message.into()),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns true if a future attempt may succeed.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|arc| arc.as_ref() as &(dyn Error + 'static))
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        match (&self.message, &self.source) {
            (Some(m), Some(s)) => write!(f, "{m}, {msg}, source: {s}"),
            (Some(m), None) => write!(f, "{m}, {msg}"),
            (None, Some(s)) => write!(f, "cannot create auth headers, {msg}, source: {s}"),
            (None, None) => write!(f, "cannot create auth headers, {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true)]
    #[test_case(false)]
    fn from_source(transient: bool) {
        let source = std::io::Error::other("test-only");
        let got = CredentialsError::from_source(transient, source);
        assert_eq!(got.is_transient(), transient, "{got}");
        assert!(got.source().is_some(), "{got}");
        assert!(got.to_string().contains("test-only"), "{got}");
    }

    #[test_case(true)]
    #[test_case(false)]
    fn from_msg(transient: bool) {
        let got = CredentialsError::from_msg(transient, "test-only");
        assert_eq!(got.is_transient(), transient, "{got}");
        assert!(got.source().is_none(), "{got}");
        assert!(got.to_string().contains("test-only"), "{got}");
    }

    #[test]
    fn new() {
        let got = CredentialsError::new(false, "outer", std::io::Error::other("inner"));
        let msg = got.to_string();
        assert!(msg.contains("outer"), "{msg}");
        assert!(msg.contains("inner"), "{msg}");
        assert!(msg.contains(PERMANENT_MSG), "{msg}");
    }

    #[test]
    fn fmt() {
        let e = CredentialsError::from_msg(true, "test-only-err-123");
        let got = e.to_string();
        assert!(got.contains("test-only-err-123"), "{got}");
        assert!(got.contains(TRANSIENT_MSG), "{got}");

        let e = CredentialsError::from_msg(false, "test-only-err-123");
        let got = e.to_string();
        assert!(got.contains(PERMANENT_MSG), "{got}");
    }
}
