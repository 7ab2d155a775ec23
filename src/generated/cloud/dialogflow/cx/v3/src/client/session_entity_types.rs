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

/// Manages [SessionEntityType][model::SessionEntityType] resources.
///
/// Session entity types extend or replace the entities of an agent entity
/// type for the lifetime of a session.
#[derive(Clone, Debug)]
pub struct SessionEntityTypes {
    inner: Arc<Transport>,
}

impl SessionEntityTypes {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all session entity types in the specified
    /// session.
    pub async fn list_session_entity_types(
        &self,
        parent: &str,
        options: model::ListOptions,
    ) -> Result<model::ListSessionEntityTypesResponse> {
        self.inner
            .get(&format!("{parent}/entityTypes"), &options)
            .await
    }

    /// Retrieves the specified session entity type.
    pub async fn get_session_entity_type(&self, name: &str) -> Result<model::SessionEntityType> {
        self.inner.get(name, &()).await
    }

    /// Creates a session entity type.
    pub async fn create_session_entity_type(
        &self,
        parent: &str,
        session_entity_type: model::SessionEntityType,
    ) -> Result<model::SessionEntityType> {
        self.inner
            .post(&format!("{parent}/entityTypes"), session_entity_type)
            .await
    }

    /// Updates the specified session entity type.
    pub async fn update_session_entity_type(
        &self,
        name: &str,
        session_entity_type: model::SessionEntityType,
        options: model::UpdateOptions,
    ) -> Result<model::SessionEntityType> {
        self.inner.patch(name, &options, session_entity_type).await
    }

    /// Deletes the specified session entity type.
    pub async fn delete_session_entity_type(&self, name: &str) -> Result<wkt::Empty> {
        self.inner.delete(name, &()).await
    }
}
