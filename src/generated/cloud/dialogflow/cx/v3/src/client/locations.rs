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

use crate::model;
use crate::transport::Transport;
use gax::Result;
use std::sync::Arc;

/// Provides information about the locations where agents can be created.
#[derive(Clone, Debug)]
pub struct Locations {
    inner: Arc<Transport>,
}

impl Locations {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Gets information about a location.
    ///
    /// `name` is the location, e.g. `projects/my-project/locations/global`.
    pub async fn get_location(&self, name: &str) -> Result<model::Location> {
        self.inner.get(name, &()).await
    }

    /// Lists information about the supported locations for this service.
    ///
    /// `name` is the project, e.g. `projects/my-project`.
    pub async fn list_locations(
        &self,
        name: &str,
        options: model::FilteredListOptions,
    ) -> Result<model::ListLocationsResponse> {
        self.inner
            .get(&format!("{name}/locations"), &options)
            .await
    }
}
