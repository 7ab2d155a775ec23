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

use std::collections::HashMap;

/// A resource that represents a Google Cloud location.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Location {
    /// Resource name for the location, e.g.
    /// `projects/example-project/locations/us-east1`.
    pub name: Option<String>,

    /// The canonical id for this location, e.g. `us-east1`.
    pub location_id: Option<String>,

    /// The friendly name for this location, typically a nearby city name.
    pub display_name: Option<String>,

    /// Cross-service attributes for the location.
    pub labels: Option<HashMap<String, String>>,

    /// Service-specific metadata, e.g. the available capacity.
    pub metadata: Option<wkt::Struct>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The response of [Locations::list_locations][crate::client::Locations::list_locations].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListLocationsResponse {
    pub locations: Option<Vec<Location>>,
    pub next_page_token: Option<String>,
}
