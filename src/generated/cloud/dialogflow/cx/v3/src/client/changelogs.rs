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

/// Reads the [Changelog][model::Changelog] of an agent.
#[derive(Clone, Debug)]
pub struct Changelogs {
    inner: Arc<Transport>,
}

impl Changelogs {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of changelogs.
    ///
    /// The filter supports expressions like
    /// `action = "Update" AND resource_type = "Flow"`.
    pub async fn list_changelogs(
        &self,
        parent: &str,
        options: model::FilteredListOptions,
    ) -> Result<model::ListChangelogsResponse> {
        self.inner
            .get(&format!("{parent}/changelogs"), &options)
            .await
    }

    /// Retrieves the specified changelog.
    pub async fn get_changelog(&self, name: &str) -> Result<model::Changelog> {
        self.inner.get(name, &()).await
    }
}
