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

//! Convert between the in-memory and wire shapes of the model types.
//!
//! The client applies these conversions automatically. Applications use them
//! when they handle the JSON themselves, for example, in a webhook handler or
//! when loading test fixtures.
//!
//! # Example
//! ```
//! # use dialogflow_cx_v3::model::AudioInput;
//! # use dialogflow_cx_v3::wire;
//! let input = AudioInput::new().set_audio(bytes::Bytes::from_static(&[1, 2, 3]));
//! let value = wire::serialize(&input)?;
//! assert_eq!(value, serde_json::json!({"audio": "AQID"}));
//! let back = wire::deserialize::<AudioInput>(value)?;
//! assert_eq!(back, input);
//! # gax::Result::<()>::Ok(())
//! ```

use gax::Result;
use gax::error::Error;

/// Returns the wire shape of `value`.
///
/// Bytes become base64 text, timestamps RFC 3339 text, and durations
/// `"{seconds}s"` text. Absent fields are omitted.
pub fn serialize<T>(value: &T) -> Result<serde_json::Value>
where
    T: serde::ser::Serialize,
{
    serde_json::to_value(value).map_err(Error::ser)
}

/// Parses the wire shape back into `T`.
pub fn deserialize<T>(value: serde_json::Value) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value).map_err(Error::deser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Agent, ExportAgentResponse};
    use serde_json::json;

    #[test]
    fn bad_bytes() {
        let got = deserialize::<ExportAgentResponse>(json!({"agentContent": "not base64!"}));
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn wrong_type() {
        let got = deserialize::<Agent>(json!({"displayName": 42}));
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn unknown_fields() -> anyhow::Result<()> {
        let got = deserialize::<Agent>(json!({"displayName": "a", "notAField": true}))?;
        assert_eq!(got, Agent::new().set_display_name("a"));
        Ok(())
    }
}
