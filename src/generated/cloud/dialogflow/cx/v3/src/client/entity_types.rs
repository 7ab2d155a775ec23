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

/// Manages [EntityType][model::EntityType] resources.
#[derive(Clone, Debug)]
pub struct EntityTypes {
    inner: Arc<Transport>,
}

impl EntityTypes {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all entity types in the specified agent.
    pub async fn list_entity_types(
        &self,
        parent: &str,
        options: model::LocalizedListOptions,
    ) -> Result<model::ListEntityTypesResponse> {
        self.inner
            .get(&format!("{parent}/entityTypes"), &options)
            .await
    }

    /// Retrieves the specified entity type.
    pub async fn get_entity_type(
        &self,
        name: &str,
        options: model::LanguageOptions,
    ) -> Result<model::EntityType> {
        self.inner.get(name, &options).await
    }

    /// Creates an entity type in the specified agent.
    pub async fn create_entity_type(
        &self,
        parent: &str,
        entity_type: model::EntityType,
        options: model::LanguageOptions,
    ) -> Result<model::EntityType> {
        self.inner
            .post_with_options(&format!("{parent}/entityTypes"), &options, entity_type)
            .await
    }

    /// Updates the specified entity type.
    pub async fn update_entity_type(
        &self,
        name: &str,
        entity_type: model::EntityType,
        options: model::LocalizedUpdateOptions,
    ) -> Result<model::EntityType> {
        self.inner.patch(name, &options, entity_type).await
    }

    /// Deletes the specified entity type.
    ///
    /// Set [force][model::DeleteOptions::force] to delete an entity type
    /// that is still referenced by intents or pages.
    pub async fn delete_entity_type(
        &self,
        name: &str,
        options: model::DeleteOptions,
    ) -> Result<wkt::Empty> {
        self.inner.delete(name, &options).await
    }

    /// Exports the selected entity types.
    ///
    /// On completion the operation response is an
    /// [ExportEntityTypesResponse][model::ExportEntityTypesResponse].
    pub async fn export_entity_types(
        &self,
        parent: &str,
        request: model::ExportEntityTypesRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/entityTypes:export"), request)
            .await
    }

    /// Imports the specified entity types into the agent.
    ///
    /// On completion the operation response is an
    /// [ImportEntityTypesResponse][model::ImportEntityTypesResponse].
    pub async fn import_entity_types(
        &self,
        parent: &str,
        request: model::ImportEntityTypesRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/entityTypes:import"), request)
            .await
    }
}
