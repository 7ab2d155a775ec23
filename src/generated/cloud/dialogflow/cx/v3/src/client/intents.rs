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

/// Manages [Intent][model::Intent] resources.
#[derive(Clone, Debug)]
pub struct Intents {
    inner: Arc<Transport>,
}

impl Intents {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all intents in the specified agent.
    ///
    /// Use [intent_view][model::ListIntentsOptions::intent_view] to include
    /// the training phrases in the response.
    pub async fn list_intents(
        &self,
        parent: &str,
        options: model::ListIntentsOptions,
    ) -> Result<model::ListIntentsResponse> {
        self.inner.get(&format!("{parent}/intents"), &options).await
    }

    /// Retrieves the specified intent.
    pub async fn get_intent(
        &self,
        name: &str,
        options: model::LanguageOptions,
    ) -> Result<model::Intent> {
        self.inner.get(name, &options).await
    }

    /// Creates an intent in the specified agent.
    pub async fn create_intent(
        &self,
        parent: &str,
        intent: model::Intent,
        options: model::LanguageOptions,
    ) -> Result<model::Intent> {
        self.inner
            .post_with_options(&format!("{parent}/intents"), &options, intent)
            .await
    }

    /// Updates the specified intent.
    pub async fn update_intent(
        &self,
        name: &str,
        intent: model::Intent,
        options: model::LocalizedUpdateOptions,
    ) -> Result<model::Intent> {
        self.inner.patch(name, &options, intent).await
    }

    /// Deletes the specified intent.
    pub async fn delete_intent(&self, name: &str) -> Result<wkt::Empty> {
        self.inner.delete(name, &()).await
    }

    /// Imports the specified intents into the agent.
    ///
    /// On completion the operation response is an
    /// [ImportIntentsResponse][model::ImportIntentsResponse].
    pub async fn import_intents(
        &self,
        parent: &str,
        request: model::ImportIntentsRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/intents:import"), request)
            .await
    }

    /// Exports the selected intents.
    ///
    /// On completion the operation response is an
    /// [ExportIntentsResponse][model::ExportIntentsResponse].
    pub async fn export_intents(
        &self,
        parent: &str,
        request: model::ExportIntentsRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/intents:export"), request)
            .await
    }
}
