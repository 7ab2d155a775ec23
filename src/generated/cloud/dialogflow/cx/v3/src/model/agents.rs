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
    AdvancedSettings, FlowValidationResult, LlmModelSettings, TextToSpeechSettings,
};

/// Agents are best described as Natural Language Understanding (NLU)
/// modules that transform user requests into actionable data.
///
/// After you create an agent, you can add intents, entity types, flows,
/// fulfillments, webhooks, and more to manage the conversation flows.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Agent {
    /// The unique identifier of the agent, in the
    /// `projects/{p}/locations/{l}/agents/{a}` format. Ignored on create.
    pub name: Option<String>,

    /// Required. The human-readable name of the agent, unique within the
    /// location.
    pub display_name: Option<String>,

    /// Required. Immutable. The default language of the agent as a language
    /// tag.
    pub default_language_code: Option<String>,

    /// The list of all languages supported by the agent (except for the
    /// `default_language_code`).
    pub supported_language_codes: Option<Vec<String>>,

    /// Required. The time zone of the agent from the time zone database,
    /// e.g., `America/New_York`.
    pub time_zone: Option<String>,

    /// The description of the agent.
    pub description: Option<String>,

    /// The URI of the agent's avatar.
    pub avatar_uri: Option<String>,

    /// Speech recognition related settings.
    pub speech_to_text_settings: Option<SpeechToTextSettings>,

    /// Immutable. Name of the start flow in this agent.
    pub start_flow: Option<String>,

    /// Name of the start playbook in this agent.
    pub start_playbook: Option<String>,

    /// Name of the SecuritySettings reference for the agent.
    pub security_settings: Option<String>,

    /// Indicates if stackdriver logging is enabled for the agent. Prefer
    /// the logging settings in `advanced_settings`.
    pub enable_stackdriver_logging: Option<bool>,

    /// Indicates if automatic spell correction is enabled in detect intent
    /// requests.
    pub enable_spell_correction: Option<bool>,

    /// Enable training multi-lingual models for this agent.
    pub enable_multi_language_training: Option<bool>,

    /// Indicates whether the agent is locked for changes.
    pub locked: Option<bool>,

    pub advanced_settings: Option<AdvancedSettings>,

    /// Git integration settings for this agent.
    pub git_integration_settings: Option<agent::GitIntegrationSettings>,

    /// Settings on instructing the speech synthesizer on how to generate the
    /// output audio content.
    pub text_to_speech_settings: Option<TextToSpeechSettings>,

    /// Gen App Builder-related agent-level settings.
    pub gen_app_builder_settings: Option<agent::GenAppBuilderSettings>,

    /// Optional. Answer feedback collection settings.
    pub answer_feedback_settings: Option<agent::AnswerFeedbackSettings>,

    /// Optional. Settings for end user personalization.
    pub personalization_settings: Option<agent::PersonalizationSettings>,

    /// Optional. Settings for custom client certificates.
    pub client_certificate_settings: Option<agent::ClientCertificateSettings>,

    /// Optional. Output only. A read only boolean field reflecting Zone
    /// Separation status of the agent.
    pub satisfies_pzs: Option<bool>,

    /// Optional. Output only. A read only boolean field reflecting Zone
    /// Isolation status of the agent.
    pub satisfies_pzi: Option<bool>,
}

impl Agent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Agent::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Agent::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [default_language_code][Agent::default_language_code].
    pub fn set_default_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.default_language_code = Some(v.into());
        self
    }

    /// Sets the value of [supported_language_codes][Agent::supported_language_codes].
    pub fn set_supported_language_codes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.supported_language_codes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [time_zone][Agent::time_zone].
    pub fn set_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.time_zone = Some(v.into());
        self
    }

    /// Sets the value of [description][Agent::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [start_flow][Agent::start_flow].
    pub fn set_start_flow<T: Into<String>>(mut self, v: T) -> Self {
        self.start_flow = Some(v.into());
        self
    }

    /// Sets the value of [security_settings][Agent::security_settings].
    pub fn set_security_settings<T: Into<String>>(mut self, v: T) -> Self {
        self.security_settings = Some(v.into());
        self
    }

    /// Sets the value of [enable_spell_correction][Agent::enable_spell_correction].
    pub fn set_enable_spell_correction<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_spell_correction = Some(v.into());
        self
    }

    /// Sets the value of [locked][Agent::locked].
    pub fn set_locked<T: Into<bool>>(mut self, v: T) -> Self {
        self.locked = Some(v.into());
        self
    }

    /// Sets the value of [advanced_settings][Agent::advanced_settings].
    pub fn set_advanced_settings<T: Into<AdvancedSettings>>(mut self, v: T) -> Self {
        self.advanced_settings = Some(v.into());
        self
    }
}

/// Defines additional types related to [Agent].
pub mod agent {
    /// Settings for connecting to Git repository for an agent.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct GitIntegrationSettings {
        /// GitHub settings.
        pub github_settings: Option<git_integration_settings::GithubSettings>,
    }

    /// Defines additional types related to [GitIntegrationSettings].
    pub mod git_integration_settings {
        /// Settings of integration with GitHub.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct GithubSettings {
            /// The unique repository display name for the GitHub repository.
            pub display_name: Option<String>,
            /// The GitHub repository URI related to the agent.
            pub repository_uri: Option<String>,
            /// The branch of the GitHub repository tracked for this agent.
            pub tracking_branch: Option<String>,
            /// The access token used to authenticate the access to the
            /// GitHub repository.
            pub access_token: Option<String>,
            /// A list of branches configured to be used from Dialogflow.
            pub branches: Option<Vec<String>>,
        }
    }

    /// Settings for Gen App Builder.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct GenAppBuilderSettings {
        /// Required. The full name of the Gen App Builder engine related to
        /// this agent if there is one.
        pub engine: Option<String>,
    }

    /// Settings for answer feedback collection.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct AnswerFeedbackSettings {
        pub enable_answer_feedback: Option<bool>,
    }

    /// Settings for end user personalization.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct PersonalizationSettings {
        /// Optional. Default end user metadata, used when querying the agent.
        pub default_end_user_metadata: Option<wkt::Struct>,
    }

    /// Settings for custom client certificates.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ClientCertificateSettings {
        /// Required. The ssl certificate encoded in PEM format.
        pub ssl_certificate: Option<String>,
        /// Required. The name of the SecretManager secret version resource
        /// storing the private key encoded in PEM format.
        pub private_key: Option<String>,
        /// Optional. The name of the SecretManager secret version resource
        /// storing the passphrase.
        pub passphrase: Option<String>,
    }
}

/// Settings related to speech recognition.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpeechToTextSettings {
    /// Whether to use speech adaptation for speech recognition.
    pub enable_speech_adaptation: Option<bool>,
}

/// The response of [Agents::list_agents][crate::client::Agents::list_agents].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAgentsResponse {
    /// The list of agents. There will be a maximum number of items returned
    /// based on the page_size field in the request.
    pub agents: Option<Vec<Agent>>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: Option<String>,
}

/// The request body for [Agents::export_agent][crate::client::Agents::export_agent].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportAgentRequest {
    /// Optional. The Google Cloud Storage URI to export the agent to. If
    /// left unspecified, the serialized agent is returned inline.
    pub agent_uri: Option<String>,

    /// Optional. The data format of the exported agent, e.g. `BLOB` or
    /// `JSON_PACKAGE`.
    pub data_format: Option<String>,

    /// Optional. Environment name. If not set, the draft environment is
    /// assumed.
    pub environment: Option<String>,

    /// Optional. The Git branch to export the agent to.
    pub git_destination: Option<export_agent_request::GitDestination>,

    /// Optional. Whether to include BigQuery Export setting.
    pub include_bigquery_export_settings: Option<bool>,
}

impl ExportAgentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [agent_uri][ExportAgentRequest::agent_uri].
    pub fn set_agent_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.agent_uri = Some(v.into());
        self
    }

    /// Sets the value of [data_format][ExportAgentRequest::data_format].
    pub fn set_data_format<T: Into<String>>(mut self, v: T) -> Self {
        self.data_format = Some(v.into());
        self
    }

    /// Sets the value of [environment][ExportAgentRequest::environment].
    pub fn set_environment<T: Into<String>>(mut self, v: T) -> Self {
        self.environment = Some(v.into());
        self
    }
}

/// Defines additional types related to [ExportAgentRequest].
pub mod export_agent_request {
    /// Settings for exporting to a git branch.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct GitDestination {
        /// Tracking branch for the git push.
        pub tracking_branch: Option<String>,
        /// Commit message for the git push.
        pub commit_message: Option<String>,
    }
}

/// The response message for an agent export.
///
/// Found in the [response][crate::model::Operation::response] of the
/// operation returned by [Agents::export_agent][crate::client::Agents::export_agent].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportAgentResponse {
    /// The URI to a file containing the exported agent.
    pub agent_uri: Option<String>,

    /// Uncompressed raw byte content for agent.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub agent_content: Option<bytes::Bytes>,

    /// Commit SHA of the git push.
    pub commit_sha: Option<String>,
}

/// The request body for [Agents::restore_agent][crate::client::Agents::restore_agent].
///
/// Set exactly one of `agent_uri`, `agent_content`, or `git_source`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RestoreAgentRequest {
    /// The Google Cloud Storage URI to restore the agent from.
    pub agent_uri: Option<String>,

    /// Uncompressed raw byte content for agent.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub agent_content: Option<bytes::Bytes>,

    /// Setting for restoring from a git branch.
    pub git_source: Option<restore_agent_request::GitSource>,

    /// Agent restore mode, e.g. `KEEP` or `FALLBACK`.
    pub restore_option: Option<String>,
}

impl RestoreAgentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [agent_uri][RestoreAgentRequest::agent_uri].
    pub fn set_agent_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.agent_uri = Some(v.into());
        self
    }

    /// Sets the value of [agent_content][RestoreAgentRequest::agent_content].
    pub fn set_agent_content<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.agent_content = Some(v.into());
        self
    }

    /// Sets the value of [restore_option][RestoreAgentRequest::restore_option].
    pub fn set_restore_option<T: Into<String>>(mut self, v: T) -> Self {
        self.restore_option = Some(v.into());
        self
    }
}

/// Defines additional types related to [RestoreAgentRequest].
pub mod restore_agent_request {
    /// Settings for restoring from a git branch.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct GitSource {
        /// tracking branch for the git pull
        pub tracking_branch: Option<String>,
    }
}

/// The request body for [Agents::validate_agent][crate::client::Agents::validate_agent].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValidateAgentRequest {
    /// If not specified, the agent's default language is used.
    pub language_code: Option<String>,
}

impl ValidateAgentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language_code][ValidateAgentRequest::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }
}

/// The response message for
/// [Agents::get_agent_validation_result][crate::client::Agents::get_agent_validation_result].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AgentValidationResult {
    /// The unique identifier of the agent validation result.
    pub name: Option<String>,
    /// Contains all flow validation results.
    pub flow_validation_results: Option<Vec<FlowValidationResult>>,
}

/// Settings for Generative AI.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GenerativeSettings {
    /// Format: `projects/{p}/locations/{l}/agents/{a}/generativeSettings`.
    pub name: Option<String>,

    /// Settings for Generative Fallback.
    pub fallback_settings: Option<generative_settings::FallbackSettings>,

    /// Settings for Generative Safety.
    pub generative_safety_settings: Option<SafetySettings>,

    /// Settings for knowledge connector.
    pub knowledge_connector_settings: Option<generative_settings::KnowledgeConnectorSettings>,

    /// Language for this settings.
    pub language_code: Option<String>,

    /// LLM model settings.
    pub llm_model_settings: Option<LlmModelSettings>,
}

impl GenerativeSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GenerativeSettings::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [language_code][GenerativeSettings::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }

    /// Sets the value of [fallback_settings][GenerativeSettings::fallback_settings].
    pub fn set_fallback_settings<T: Into<generative_settings::FallbackSettings>>(
        mut self,
        v: T,
    ) -> Self {
        self.fallback_settings = Some(v.into());
        self
    }
}

/// Defines additional types related to [GenerativeSettings].
pub mod generative_settings {
    /// Settings for Generative Fallback.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct FallbackSettings {
        /// Display name of the selected prompt.
        pub selected_prompt: Option<String>,
        /// Stored prompts that can be selected.
        pub prompt_templates: Option<Vec<fallback_settings::PromptTemplate>>,
    }

    /// Defines additional types related to [FallbackSettings].
    pub mod fallback_settings {
        /// Prompt template.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct PromptTemplate {
            pub display_name: Option<String>,
            pub prompt_text: Option<String>,
            /// If the flag is true, the prompt is frozen and cannot be
            /// modified by users.
            pub frozen: Option<bool>,
        }
    }

    /// Settings for knowledge connector.
    ///
    /// These parameters are used for LLM prompt like "You are
    /// `agent`. You are a helpful and verbose `agent_identity` at
    /// `business`, your task is to help humans on `agent_scope`."
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct KnowledgeConnectorSettings {
        pub business: Option<String>,
        pub agent: Option<String>,
        pub agent_identity: Option<String>,
        pub business_description: Option<String>,
        pub agent_scope: Option<String>,
        /// Whether to disable fallback to Data Store search results (in case
        /// the LLM couldn't pick a proper answer).
        pub disable_data_store_fallback: Option<bool>,
    }
}

/// Settings for Generative Safety.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SafetySettings {
    /// Optional. Default phrase match strategy for banned phrases.
    pub default_banned_phrase_match_strategy: Option<String>,
    /// Banned phrases for generated text.
    pub banned_phrases: Option<Vec<safety_settings::Phrase>>,
}

/// Defines additional types related to [SafetySettings].
pub mod safety_settings {
    /// Text input which can be used for prompt or banned phrases.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Phrase {
        /// Required. Text input which can be used for prompt or banned
        /// phrases.
        pub text: Option<String>,
        /// Required. Language code of the phrase.
        pub language_code: Option<String>,
    }
}
