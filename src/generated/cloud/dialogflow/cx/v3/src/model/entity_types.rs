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

use crate::model::{InlineDestination, InlineSource};

/// Entities are extracted from user input and represent parameters that are
/// meaningful to your application.
///
/// For example, a date range, a proper name such as a geographic location
/// or landmark, and so on.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityType {
    /// The unique identifier of the entity type, in the
    /// `projects/{p}/locations/{l}/agents/{a}/entityTypes/{e}` format.
    pub name: Option<String>,

    /// Required. The human-readable name of the entity type, unique within
    /// the agent.
    pub display_name: Option<String>,

    /// Required. Indicates the kind of entity type, e.g. `KIND_MAP`.
    pub kind: Option<String>,

    /// Indicates whether the entity type can be automatically expanded.
    pub auto_expansion_mode: Option<String>,

    /// The collection of entity entries associated with the entity type.
    pub entities: Option<Vec<entity_type::Entity>>,

    /// Collection of exceptional words and phrases that shouldn't be matched.
    pub excluded_phrases: Option<Vec<entity_type::ExcludedPhrase>>,

    /// Enables fuzzy entity extraction during classification.
    pub enable_fuzzy_extraction: Option<bool>,

    /// Indicates whether parameters of the entity type should be redacted in
    /// log.
    pub redact: Option<bool>,
}

impl EntityType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][EntityType::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][EntityType::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [kind][EntityType::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [entities][EntityType::entities].
    pub fn set_entities<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<entity_type::Entity>,
    {
        self.entities = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [enable_fuzzy_extraction][EntityType::enable_fuzzy_extraction].
    pub fn set_enable_fuzzy_extraction<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_fuzzy_extraction = Some(v.into());
        self
    }

    /// Sets the value of [redact][EntityType::redact].
    pub fn set_redact<T: Into<bool>>(mut self, v: T) -> Self {
        self.redact = Some(v.into());
        self
    }
}

/// Defines additional types related to [EntityType].
pub mod entity_type {
    /// An **entity entry** for an associated entity type.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Entity {
        /// Required. The primary value associated with this entity entry.
        pub value: Option<String>,

        /// Required. A collection of value synonyms.
        pub synonyms: Option<Vec<String>>,
    }

    impl Entity {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [value][Entity::value].
        pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
            self.value = Some(v.into());
            self
        }

        /// Sets the value of [synonyms][Entity::synonyms].
        pub fn set_synonyms<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.synonyms = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }
    }

    /// An excluded entity phrase that should not be matched.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ExcludedPhrase {
        /// Required. The word or phrase to be excluded.
        pub value: Option<String>,
    }
}

/// The response of [EntityTypes::list_entity_types][crate::client::EntityTypes::list_entity_types].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListEntityTypesResponse {
    pub entity_types: Option<Vec<EntityType>>,
    pub next_page_token: Option<String>,
}

/// The request body for
/// [EntityTypes::export_entity_types][crate::client::EntityTypes::export_entity_types].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportEntityTypesRequest {
    /// Required. The name of the entity types to export.
    pub entity_types: Option<Vec<String>>,

    /// The Google Cloud Storage URI to export the entity types to.
    pub entity_types_uri: Option<String>,

    /// The option to return the serialized entity types inline.
    pub entity_types_content_inline: Option<bool>,

    /// Optional. The data format of the exported entity types, e.g. `BLOB`.
    pub data_format: Option<String>,

    /// Optional. The language to retrieve the entity type for.
    pub language_code: Option<String>,
}

impl ExportEntityTypesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [entity_types][ExportEntityTypesRequest::entity_types].
    pub fn set_entity_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.entity_types = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [entity_types_uri][ExportEntityTypesRequest::entity_types_uri].
    pub fn set_entity_types_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_types_uri = Some(v.into());
        self
    }

    /// Sets the value of [entity_types_content_inline][ExportEntityTypesRequest::entity_types_content_inline].
    pub fn set_entity_types_content_inline<T: Into<bool>>(mut self, v: T) -> Self {
        self.entity_types_content_inline = Some(v.into());
        self
    }
}

/// The response message for an entity types export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportEntityTypesResponse {
    /// The URI to a file containing the exported entity types.
    pub entity_types_uri: Option<String>,

    /// Uncompressed byte content for entity types.
    pub entity_types_content: Option<InlineDestination>,
}

/// The request body for
/// [EntityTypes::import_entity_types][crate::client::EntityTypes::import_entity_types].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportEntityTypesRequest {
    /// The Google Cloud Storage URI to import entity types from.
    pub entity_types_uri: Option<String>,

    /// Uncompressed byte content of entity types.
    pub entity_types_content: Option<InlineSource>,

    /// Required. Merge option for importing entity types, e.g. `REPLACE`.
    pub merge_option: Option<String>,

    /// Optional. The target entity type to import into.
    pub target_entity_type: Option<String>,
}

impl ImportEntityTypesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [entity_types_uri][ImportEntityTypesRequest::entity_types_uri].
    pub fn set_entity_types_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_types_uri = Some(v.into());
        self
    }

    /// Sets the value of [entity_types_content][ImportEntityTypesRequest::entity_types_content].
    pub fn set_entity_types_content<T: Into<InlineSource>>(mut self, v: T) -> Self {
        self.entity_types_content = Some(v.into());
        self
    }

    /// Sets the value of [merge_option][ImportEntityTypesRequest::merge_option].
    pub fn set_merge_option<T: Into<String>>(mut self, v: T) -> Self {
        self.merge_option = Some(v.into());
        self
    }
}

/// The response message for an entity types import.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportEntityTypesResponse {
    /// The unique identifier of the imported entity types.
    pub entity_types: Option<Vec<String>>,

    /// Info which resources have conflicts when `REPORT_CONFLICT` merge
    /// option is set.
    pub conflicting_resources: Option<import_entity_types_response::ConflictingResources>,
}

/// Defines additional types related to [ImportEntityTypesResponse].
pub mod import_entity_types_response {
    /// Conflicting resources detected during the import process.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ConflictingResources {
        pub entity_type_display_names: Option<Vec<String>>,
        pub entity_display_names: Option<Vec<String>>,
    }
}
