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

use gax::client_builder::Error as BuilderError;
use http::Uri;
use std::str::FromStr;

/// Calculate the origin used to build request URLs.
///
/// The origin is the configured endpoint, or the default endpoint if none is
/// configured, without any trailing `/`. Endpoints without a host are
/// rejected. Regional agents use locational endpoints, such as
/// `https://us-central1-dialogflow.googleapis.com`, those are used as-is.
pub(crate) fn origin(
    endpoint: Option<&str>,
    default_endpoint: &str,
) -> gax::client_builder::Result<String> {
    let endpoint = endpoint.unwrap_or(default_endpoint);
    let uri = Uri::from_str(endpoint).map_err(BuilderError::transport)?;
    if uri.scheme().is_none() {
        return Err(BuilderError::transport(format!(
            "missing scheme in endpoint {endpoint}"
        )));
    }
    if uri.authority().is_none() {
        return Err(BuilderError::transport(format!(
            "missing authority in endpoint {endpoint}"
        )));
    }
    Ok(endpoint.trim_end_matches('/').to_string())
}
