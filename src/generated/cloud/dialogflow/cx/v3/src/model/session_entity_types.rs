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

use crate::model::entity_type::Entity;

/// Session entity types are referred to as **User** entity types and are
/// entities that are built for an individual user such as favorites,
/// preferences, playlists, and so on.
///
/// You can redefine a session entity type at the session level to extend or
/// replace a custom entity type at the user session level.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SessionEntityType {
    /// Required. The unique identifier of the session entity type, in the
    /// `projects/{p}/locations/{l}/agents/{a}/sessions/{s}/entityTypes/{e}`
    /// format.
    pub name: Option<String>,

    /// Required. Indicates whether the additional data should override or
    /// supplement the custom entity type definition, e.g.
    /// `ENTITY_OVERRIDE_MODE_SUPPLEMENT`.
    pub entity_override_mode: Option<String>,

    /// Required. The collection of entities to override or supplement the
    /// custom entity type.
    pub entities: Option<Vec<Entity>>,
}

impl SessionEntityType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][SessionEntityType::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [entity_override_mode][SessionEntityType::entity_override_mode].
    pub fn set_entity_override_mode<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_override_mode = Some(v.into());
        self
    }

    /// Sets the value of [entities][SessionEntityType::entities].
    pub fn set_entities<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Entity>,
    {
        self.entities = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The response of
/// [SessionEntityTypes::list_session_entity_types][crate::client::SessionEntityTypes::list_session_entity_types].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSessionEntityTypesResponse {
    pub session_entity_types: Option<Vec<SessionEntityType>>,
    pub next_page_token: Option<String>,
}
