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

/// A set of symbolic field paths.
///
/// Update operations use a field mask to name the fields of the resource that
/// should change. Paths use the lowerCamel JSON names, and nested fields are
/// separated by a period, for example `webhookConfig.webhookOverrides`.
///
/// If an update operation receives no mask the service applies the update to
/// all fields.
///
/// # Example
/// ```
/// # use dialogflow_cx_wkt::FieldMask;
/// let mask = FieldMask::default().set_paths(["displayName", "description"]);
/// assert_eq!(String::from(mask), "displayName,description");
/// ```
///
/// # JSON Mapping
///
/// A single string with the paths separated by commas.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Sets the paths.
    pub fn set_paths<T, V>(mut self, paths: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = paths.into_iter().map(Into::into).collect();
        self
    }
}

impl From<FieldMask> for String {
    fn from(value: FieldMask) -> Self {
        value.paths.join(",")
    }
}

impl From<&FieldMask> for String {
    fn from(value: &FieldMask) -> Self {
        value.paths.join(",")
    }
}

impl From<&str> for FieldMask {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            return Self::default();
        }
        Self::default().set_paths(value.split(','))
    }
}

impl serde::ser::Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&String::from(self))
    }
}

struct PathVisitor;

impl serde::de::Visitor<'_> for PathVisitor {
    type Value = FieldMask;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with comma-separated field mask paths")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(FieldMask::from(value))
    }
}

impl<'de> serde::de::Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(PathVisitor)
    }
}
