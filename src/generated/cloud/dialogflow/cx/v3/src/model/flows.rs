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

use crate::model::{
    AdvancedSettings, EventHandler, KnowledgeConnectorSettings, TransitionRoute,
    ValidationMessage,
};

/// Settings related to NLU.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NluSettings {
    /// Indicates the type of NLU model, e.g. `MODEL_TYPE_ADVANCED`.
    pub model_type: Option<String>,

    /// To filter out false positive results and still get variety in
    /// matched natural language inputs for your agent, you can tune the
    /// machine learning classification threshold.
    pub classification_threshold: Option<f32>,

    /// Indicates NLU model training mode, e.g. `MODEL_TRAINING_MODE_MANUAL`.
    pub model_training_mode: Option<String>,
}

impl NluSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [model_type][NluSettings::model_type].
    pub fn set_model_type<T: Into<String>>(mut self, v: T) -> Self {
        self.model_type = Some(v.into());
        self
    }

    /// Sets the value of [classification_threshold][NluSettings::classification_threshold].
    pub fn set_classification_threshold<T: Into<f32>>(mut self, v: T) -> Self {
        self.classification_threshold = Some(v.into());
        self
    }

    /// Sets the value of [model_training_mode][NluSettings::model_training_mode].
    pub fn set_model_training_mode<T: Into<String>>(mut self, v: T) -> Self {
        self.model_training_mode = Some(v.into());
        self
    }
}

/// Flows represents the conversation flows when you build your chatbot
/// agent.
///
/// A flow consists of many pages connected by the transition routes.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Flow {
    /// The unique identifier of the flow, in the
    /// `projects/{p}/locations/{l}/agents/{a}/flows/{f}` format.
    pub name: Option<String>,

    /// Required. The human-readable name of the flow.
    pub display_name: Option<String>,

    /// The description of the flow.
    pub description: Option<String>,

    /// A flow's transition routes serve two purposes: they are responsible
    /// for matching the user's first utterances in the flow, and for
    /// matching any user input while the flow is active.
    pub transition_routes: Option<Vec<TransitionRoute>>,

    /// A flow's event handlers serve two purposes: they are responsible for
    /// handling events that may occur in the flow's start page, and for
    /// handling events that may occur in any page in the flow.
    pub event_handlers: Option<Vec<EventHandler>>,

    /// A flow's transition route group serve two purposes, like its
    /// transition routes.
    pub transition_route_groups: Option<Vec<String>>,

    /// NLU related settings of the flow.
    pub nlu_settings: Option<NluSettings>,

    pub advanced_settings: Option<AdvancedSettings>,

    /// Optional. Knowledge connector configuration.
    pub knowledge_connector_settings: Option<KnowledgeConnectorSettings>,

    /// Optional. Multi-lingual agent settings for this flow.
    pub multi_language_settings: Option<flow::MultiLanguageSettings>,

    /// Indicates whether the flow is locked for changes.
    pub locked: Option<bool>,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Flow::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Flow::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [description][Flow::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [transition_routes][Flow::transition_routes].
    pub fn set_transition_routes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TransitionRoute>,
    {
        self.transition_routes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [event_handlers][Flow::event_handlers].
    pub fn set_event_handlers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<EventHandler>,
    {
        self.event_handlers = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [nlu_settings][Flow::nlu_settings].
    pub fn set_nlu_settings<T: Into<NluSettings>>(mut self, v: T) -> Self {
        self.nlu_settings = Some(v.into());
        self
    }
}

/// Defines additional types related to [Flow].
pub mod flow {
    /// Settings for multi-lingual agents.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct MultiLanguageSettings {
        /// Optional. Enable multi-language detection for this flow.
        pub enable_multi_language_detection: Option<bool>,
        /// Optional. Agent will respond in the detected language if the
        /// detected language code is in the supported resolved languages
        /// for this flow.
        pub supported_response_language_codes: Option<Vec<String>>,
    }
}

/// The response of [Flows::list_flows][crate::client::Flows::list_flows].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListFlowsResponse {
    pub flows: Option<Vec<Flow>>,
    pub next_page_token: Option<String>,
}

/// The request body for [Flows::validate_flow][crate::client::Flows::validate_flow].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValidateFlowRequest {
    /// If not specified, the agent's default language is used.
    pub language_code: Option<String>,
}

impl ValidateFlowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language_code][ValidateFlowRequest::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }
}

/// The response message for
/// [Flows::get_flow_validation_result][crate::client::Flows::get_flow_validation_result].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FlowValidationResult {
    /// The unique identifier of the flow validation result.
    pub name: Option<String>,
    /// Contains all validation messages.
    pub validation_messages: Option<Vec<ValidationMessage>>,
    /// Last time the flow was validated.
    pub update_time: Option<wkt::Timestamp>,
}

/// The request body for [Flows::import_flow][crate::client::Flows::import_flow].
///
/// Set one of `flow_uri` or `flow_content`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportFlowRequest {
    /// The Google Cloud Storage URI to import flow from.
    pub flow_uri: Option<String>,

    /// Uncompressed raw byte content for flow.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub flow_content: Option<bytes::Bytes>,

    /// Flow import mode, e.g. `KEEP` or `FALLBACK`.
    pub import_option: Option<String>,

    /// Optional. Specifies the import strategy used when resolving resource
    /// conflicts.
    pub flow_import_strategy: Option<FlowImportStrategy>,
}

impl ImportFlowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [flow_uri][ImportFlowRequest::flow_uri].
    pub fn set_flow_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.flow_uri = Some(v.into());
        self
    }

    /// Sets the value of [flow_content][ImportFlowRequest::flow_content].
    pub fn set_flow_content<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.flow_content = Some(v.into());
        self
    }

    /// Sets the value of [import_option][ImportFlowRequest::import_option].
    pub fn set_import_option<T: Into<String>>(mut self, v: T) -> Self {
        self.import_option = Some(v.into());
        self
    }
}

/// The flow import strategy used for resource conflict resolution
/// associated with an [ImportFlowRequest].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FlowImportStrategy {
    /// Optional. Import strategy for resource conflict resolution, applied
    /// globally to throughout the flow, e.g. `IMPORT_STRATEGY_MERGE`.
    pub global_import_strategy: Option<String>,
}

/// The response message for a flow import.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportFlowResponse {
    /// The unique identifier of the new flow.
    pub flow: Option<String>,
}

/// The request body for [Flows::export_flow][crate::client::Flows::export_flow].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportFlowRequest {
    /// Optional. The Google Cloud Storage URI to export the flow to. If left
    /// unspecified, the flow is returned inline.
    pub flow_uri: Option<String>,

    /// Optional. Whether to export flows referenced by the specified flow.
    pub include_referenced_flows: Option<bool>,
}

impl ExportFlowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [flow_uri][ExportFlowRequest::flow_uri].
    pub fn set_flow_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.flow_uri = Some(v.into());
        self
    }

    /// Sets the value of [include_referenced_flows][ExportFlowRequest::include_referenced_flows].
    pub fn set_include_referenced_flows<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_referenced_flows = Some(v.into());
        self
    }
}

/// The response message for a flow export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportFlowResponse {
    /// The URI to a file containing the exported flow.
    pub flow_uri: Option<String>,

    /// Uncompressed raw byte content for flow.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub flow_content: Option<bytes::Bytes>,
}
