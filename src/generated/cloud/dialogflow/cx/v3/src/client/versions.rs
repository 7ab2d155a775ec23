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

/// Manages [Version][model::Version] resources, snapshots of a flow.
#[derive(Clone, Debug)]
pub struct Versions {
    inner: Arc<Transport>,
}

impl Versions {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all versions in the specified flow.
    pub async fn list_versions(
        &self,
        parent: &str,
        options: model::ListOptions,
    ) -> Result<model::ListVersionsResponse> {
        self.inner
            .get(&format!("{parent}/versions"), &options)
            .await
    }

    /// Retrieves the specified version.
    pub async fn get_version(&self, name: &str) -> Result<model::Version> {
        self.inner.get(name, &()).await
    }

    /// Creates a version in the specified flow.
    ///
    /// The operation metadata is a
    /// [CreateVersionOperationMetadata][model::CreateVersionOperationMetadata],
    /// the response on completion is the new [Version][model::Version].
    pub async fn create_version(
        &self,
        parent: &str,
        version: model::Version,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/versions"), version)
            .await
    }

    /// Updates the specified version.
    pub async fn update_version(
        &self,
        name: &str,
        version: model::Version,
        options: model::UpdateOptions,
    ) -> Result<model::Version> {
        self.inner.patch(name, &options, version).await
    }

    /// Deletes the specified version.
    pub async fn delete_version(&self, name: &str) -> Result<wkt::Empty> {
        self.inner.delete(name, &()).await
    }

    /// Loads resources in the specified version to the draft flow.
    pub async fn load_version(
        &self,
        name: &str,
        request: model::LoadVersionRequest,
    ) -> Result<model::Operation> {
        self.inner.post(&format!("{name}:load"), request).await
    }

    /// Compares the specified base version with target version.
    pub async fn compare_versions(
        &self,
        base_version: &str,
        request: model::CompareVersionsRequest,
    ) -> Result<model::CompareVersionsResponse> {
        self.inner
            .post(&format!("{base_version}:compareVersions"), request)
            .await
    }
}
