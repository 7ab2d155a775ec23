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

//! Implementation details used by the generated model types.
//!
//! These types are intended for developers of the Dialogflow CX client
//! library. They are undocumented and may change at any time.

/// Field-level transform for `bytes` fields, for use with `serde_as`.
///
/// Serializes [bytes::Bytes] as standard base64 text and parses it back with
/// [crate::codec].
pub struct Base64;

impl serde_with::SerializeAs<bytes::Bytes> for Base64 {
    fn serialize_as<S>(source: &bytes::Bytes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&crate::codec::encode(source))
    }
}

impl<'de> serde_with::DeserializeAs<'de, bytes::Bytes> for Base64 {
    fn deserialize_as<D>(deserializer: D) -> Result<bytes::Bytes, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_str(Base64Visitor)
    }
}

struct Base64Visitor;

impl serde::de::Visitor<'_> for Base64Visitor {
    type Value = bytes::Bytes;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with standard base64 encoded bytes")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        crate::codec::decode(value).map_err(E::custom)
    }
}
