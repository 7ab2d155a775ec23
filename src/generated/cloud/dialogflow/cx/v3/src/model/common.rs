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

use std::collections::HashMap;

/// Inline source for a Dialogflow operation that reads or imports objects
/// (e.g. intents) into Dialogflow.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InlineSource {
    /// The uncompressed byte content for the objects.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub data: Option<bytes::Bytes>,
}

impl InlineSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [data][InlineSource::data].
    pub fn set_data<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.data = Some(v.into());
        self
    }
}

/// Inline destination for a Dialogflow operation that writes or exports
/// objects (e.g. intents) outside of Dialogflow.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InlineDestination {
    /// The uncompressed byte content for the objects. Only populated in
    /// responses.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub content: Option<bytes::Bytes>,
}

/// Google Cloud Storage location for a Dialogflow operation that writes or
/// exports objects (e.g. exported agent or transcripts) outside of
/// Dialogflow.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsDestination {
    /// The Google Cloud Storage URI for the exported objects, in the
    /// `gs://bucket/object-name-or-prefix` format.
    pub uri: Option<String>,
}

impl GcsDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [uri][GcsDestination::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = Some(v.into());
        self
    }
}

/// Hierarchical advanced settings for agent, flow, page, fulfillment and
/// parameter.
///
/// Settings exposed at a lower level override the settings exposed at a
/// higher level.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AdvancedSettings {
    /// If present, incoming audio is exported to this location.
    pub audio_export_gcs_destination: Option<GcsDestination>,
    pub speech_settings: Option<SpeechSettings>,
    /// Settings for DTMF.
    pub dtmf_settings: Option<DtmfSettings>,
    pub logging_settings: Option<LoggingSettings>,
}

impl AdvancedSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [audio_export_gcs_destination][AdvancedSettings::audio_export_gcs_destination].
    pub fn set_audio_export_gcs_destination<T: Into<GcsDestination>>(mut self, v: T) -> Self {
        self.audio_export_gcs_destination = Some(v.into());
        self
    }

    /// Sets the value of [speech_settings][AdvancedSettings::speech_settings].
    pub fn set_speech_settings<T: Into<SpeechSettings>>(mut self, v: T) -> Self {
        self.speech_settings = Some(v.into());
        self
    }

    /// Sets the value of [dtmf_settings][AdvancedSettings::dtmf_settings].
    pub fn set_dtmf_settings<T: Into<DtmfSettings>>(mut self, v: T) -> Self {
        self.dtmf_settings = Some(v.into());
        self
    }

    /// Sets the value of [logging_settings][AdvancedSettings::logging_settings].
    pub fn set_logging_settings<T: Into<LoggingSettings>>(mut self, v: T) -> Self {
        self.logging_settings = Some(v.into());
        self
    }
}

/// Define behaviors of speech to text detection.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpeechSettings {
    /// Sensitivity of the speech model that detects the end of speech, in
    /// the `[0, 100]` range.
    pub endpointer_sensitivity: Option<i32>,

    /// Timeout before detecting no speech.
    pub no_speech_timeout: Option<wkt::Duration>,

    /// Use timeout based endpointing, interpreting the endpointer sensitivity
    /// as seconds of timeout value.
    pub use_timeout_based_endpointing: Option<bool>,

    /// Mapping from language to Speech-to-Text model.
    pub models: Option<HashMap<String, String>>,
}

impl SpeechSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [no_speech_timeout][SpeechSettings::no_speech_timeout].
    pub fn set_no_speech_timeout<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.no_speech_timeout = Some(v.into());
        self
    }

    /// Sets the value of [endpointer_sensitivity][SpeechSettings::endpointer_sensitivity].
    pub fn set_endpointer_sensitivity<T: Into<i32>>(mut self, v: T) -> Self {
        self.endpointer_sensitivity = Some(v.into());
        self
    }
}

/// Define behaviors for DTMF (dual tone multi frequency).
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DtmfSettings {
    /// If true, incoming audio is processed for DTMF (dual tone multi
    /// frequency) events.
    pub enabled: Option<bool>,

    /// Max length of DTMF digits.
    pub max_digits: Option<i32>,

    /// The digit that terminates a DTMF digit sequence.
    pub finish_digit: Option<String>,

    /// Interdigit timeout setting for matching dtmf input to regex.
    pub interdigit_timeout_duration: Option<wkt::Duration>,

    /// Endpoint timeout setting for matching dtmf input to regex.
    pub endpointing_timeout_duration: Option<wkt::Duration>,
}

impl DtmfSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [enabled][DtmfSettings::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = Some(v.into());
        self
    }

    /// Sets the value of [interdigit_timeout_duration][DtmfSettings::interdigit_timeout_duration].
    pub fn set_interdigit_timeout_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.interdigit_timeout_duration = Some(v.into());
        self
    }

    /// Sets the value of [endpointing_timeout_duration][DtmfSettings::endpointing_timeout_duration].
    pub fn set_endpointing_timeout_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.endpointing_timeout_duration = Some(v.into());
        self
    }
}

/// Define behaviors on logging.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LoggingSettings {
    pub enable_stackdriver_logging: Option<bool>,
    pub enable_interaction_logging: Option<bool>,
    pub enable_consent_based_redaction: Option<bool>,
}

/// Represents a resource name.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceName {
    pub name: Option<String>,
    pub display_name: Option<String>,
}

/// Agent/flow validation message.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValidationMessage {
    /// The type of the resources where the message is found, e.g. `PAGE`.
    pub resource_type: Option<String>,

    /// The names of the resources where the message is found.
    pub resources: Option<Vec<String>>,

    /// The resource names of the resources where the message is found.
    pub resource_names: Option<Vec<ResourceName>>,

    /// Indicates the severity of the message, e.g. `WARNING`.
    pub severity: Option<String>,

    /// The message detail.
    pub detail: Option<String>,
}

/// Configuration of how speech should be synthesized.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SynthesizeSpeechConfig {
    /// Speaking rate/speed, in the `[0.25, 4.0]` range.
    pub speaking_rate: Option<f64>,

    /// Speaking pitch, in the `[-20.0, 20.0]` range.
    pub pitch: Option<f64>,

    /// Volume gain (in dB) of the normal native volume supported by the
    /// specific voice.
    pub volume_gain_db: Option<f64>,

    /// An identifier which selects 'audio effects' profiles that are applied
    /// on (post synthesized) text to speech.
    pub effects_profile_id: Option<Vec<String>>,

    /// The desired voice of the synthesized audio.
    pub voice: Option<VoiceSelectionParams>,
}

impl SynthesizeSpeechConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [speaking_rate][SynthesizeSpeechConfig::speaking_rate].
    pub fn set_speaking_rate<T: Into<f64>>(mut self, v: T) -> Self {
        self.speaking_rate = Some(v.into());
        self
    }

    /// Sets the value of [voice][SynthesizeSpeechConfig::voice].
    pub fn set_voice<T: Into<VoiceSelectionParams>>(mut self, v: T) -> Self {
        self.voice = Some(v.into());
        self
    }
}

/// Description of which voice to use for speech synthesis.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VoiceSelectionParams {
    pub name: Option<String>,
    /// The preferred gender of the voice, e.g. `SSML_VOICE_GENDER_FEMALE`.
    pub ssml_gender: Option<String>,
}

impl VoiceSelectionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][VoiceSelectionParams::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Settings related to speech synthesizing.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextToSpeechSettings {
    /// Configuration of how speech should be synthesized, mapping from
    /// language to the configuration.
    pub synthesize_speech_configs: Option<HashMap<String, SynthesizeSpeechConfig>>,
}

/// Settings for LLM models.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LlmModelSettings {
    /// The selected LLM model.
    pub model: Option<String>,
    /// The custom prompt to use.
    pub prompt_text: Option<String>,
}

/// The Knowledge Connector settings for this page or flow.
///
/// This includes information such as the attached Knowledge Bases, and the
/// way to execute fulfillment.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct KnowledgeConnectorSettings {
    /// Whether Knowledge Connector is enabled or not.
    pub enabled: Option<bool>,
    /// The fulfillment to be triggered.
    pub trigger_fulfillment: Option<crate::model::Fulfillment>,
    pub target_page: Option<String>,
    pub target_flow: Option<String>,
    /// Optional. List of related data store connections.
    pub data_store_connections: Option<Vec<DataStoreConnection>>,
}

/// A data store connection.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataStoreConnection {
    /// The type of the connected data store, e.g. `UNSTRUCTURED`.
    pub data_store_type: Option<String>,
    /// The full name of the referenced data store.
    pub data_store: Option<String>,
    pub document_processing_mode: Option<String>,
}
