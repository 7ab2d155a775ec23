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

/// Manages [SecuritySettings][model::SecuritySettings] resources.
#[derive(Clone, Debug)]
pub struct SecuritySettingsService {
    inner: Arc<Transport>,
}

impl SecuritySettingsService {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all security settings in the specified location.
    pub async fn list_security_settings(
        &self,
        parent: &str,
        options: model::ListOptions,
    ) -> Result<model::ListSecuritySettingsResponse> {
        self.inner
            .get(&format!("{parent}/securitySettings"), &options)
            .await
    }

    /// Retrieves the specified security settings.
    pub async fn get_security_settings(&self, name: &str) -> Result<model::SecuritySettings> {
        self.inner.get(name, &()).await
    }

    /// Create security settings in the specified location.
    pub async fn create_security_settings(
        &self,
        parent: &str,
        settings: model::SecuritySettings,
    ) -> Result<model::SecuritySettings> {
        self.inner
            .post(&format!("{parent}/securitySettings"), settings)
            .await
    }

    /// Updates the specified security settings.
    pub async fn update_security_settings(
        &self,
        name: &str,
        settings: model::SecuritySettings,
        options: model::UpdateOptions,
    ) -> Result<model::SecuritySettings> {
        self.inner.patch(name, &options, settings).await
    }

    /// Deletes the specified security settings.
    pub async fn delete_security_settings(&self, name: &str) -> Result<wkt::Empty> {
        self.inner.delete(name, &()).await
    }
}
