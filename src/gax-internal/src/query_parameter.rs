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

//! Defines traits and helpers to serialize query parameters.
//!
//! Each RPC accepts a different set of optional query parameters. The client
//! library represents them as an "options" struct with one optional field per
//! parameter. Serializing that struct to JSON produces an object with one key
//! per parameter that is present, using the parameter name expected by the
//! service. Fields that are absent are not serialized, and therefore never
//! appear in the query string.
//!
//! The helpers in this module turn such an object into query parameters.

use gax::error::Error;

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for serde_json::Value {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            Self::Object(object) => object.into_iter().fold(builder, |builder, (k, v)| {
                v.add(builder, format!("{name}.{k}").as_str())
            }),
            Self::Array(array) => array
                .into_iter()
                .fold(builder, |builder, v| v.add(builder, name)),
            Self::Null => builder,
            Self::String(s) => builder.query(&[(name, s)]),
            Self::Number(n) => builder.query(&[(name, format!("{n}"))]),
            Self::Bool(b) => builder.query(&[(name, b)]),
        }
    }
}

/// Adds every field in `options` as a query parameter.
///
/// `options` must serialize to a JSON object (or `null`). Each key in the
/// object becomes a query parameter, nested objects use `.` to separate the
/// field names, and arrays repeat the parameter.
pub fn add_options<T>(
    builder: reqwest::RequestBuilder,
    options: &T,
) -> gax::Result<reqwest::RequestBuilder>
where
    T: serde::Serialize,
{
    let value = serde_json::to_value(options).map_err(Error::ser)?;
    match value {
        serde_json::Value::Object(object) => Ok(object
            .into_iter()
            .fold(builder, |builder, (k, v)| v.add(builder, k.as_str()))),
        serde_json::Value::Null => Ok(builder),
        v => Err(Error::ser(format!("query parameters must be an object, got {v}"))),
    }
}
