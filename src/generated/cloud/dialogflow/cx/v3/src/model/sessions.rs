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
    AdvancedSettings, Flow, Intent, LlmModelSettings, Page, ResponseMessage, SessionEntityType,
    SynthesizeSpeechConfig,
};
use std::collections::HashMap;

/// The request body for [Sessions::detect_intent][crate::client::Sessions::detect_intent].
///
/// # Example
/// ```
/// # use dialogflow_cx_v3::model::{DetectIntentRequest, QueryInput, TextInput};
/// let request = DetectIntentRequest::new().set_query_input(
///     QueryInput::new()
///         .set_language_code("en")
///         .set_text(TextInput::new().set_text("hello")),
/// );
/// let json = serde_json::to_value(&request)?;
/// assert_eq!(json, serde_json::json!({
///     "queryInput": {"text": {"text": "hello"}, "languageCode": "en"}
/// }));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DetectIntentRequest {
    /// The parameters of this query.
    pub query_params: Option<QueryParameters>,

    /// Required. The input specification.
    pub query_input: Option<QueryInput>,

    /// Instructs the speech synthesizer how to generate the output audio.
    pub output_audio_config: Option<OutputAudioConfig>,
}

impl DetectIntentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [query_params][DetectIntentRequest::query_params].
    pub fn set_query_params<T: Into<QueryParameters>>(mut self, v: T) -> Self {
        self.query_params = Some(v.into());
        self
    }

    /// Sets the value of [query_input][DetectIntentRequest::query_input].
    pub fn set_query_input<T: Into<QueryInput>>(mut self, v: T) -> Self {
        self.query_input = Some(v.into());
        self
    }

    /// Sets the value of [output_audio_config][DetectIntentRequest::output_audio_config].
    pub fn set_output_audio_config<T: Into<OutputAudioConfig>>(mut self, v: T) -> Self {
        self.output_audio_config = Some(v.into());
        self
    }
}

/// The message returned from the DetectIntent method.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DetectIntentResponse {
    /// Output only. The unique identifier of the response. It can be used to
    /// locate a response in the training example set or for reporting issues.
    pub response_id: Option<String>,

    /// The result of the conversational query.
    pub query_result: Option<QueryResult>,

    /// The audio data bytes encoded as specified in the request.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub output_audio: Option<bytes::Bytes>,

    /// The config used by the speech synthesizer to generate the output
    /// audio.
    pub output_audio_config: Option<OutputAudioConfig>,

    /// Response type, e.g. `PARTIAL` or `FINAL`.
    pub response_type: Option<String>,

    /// Indicates whether the partial response can be cancelled when a later
    /// response arrives.
    pub allow_cancellation: Option<bool>,
}

/// Represents the parameters of a conversational query.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryParameters {
    /// The time zone of this conversational query from the
    /// [time zone database](https://www.iana.org/time-zones), e.g.,
    /// America/New_York, Europe/Paris.
    pub time_zone: Option<String>,

    /// The geo location of this conversational query.
    pub geo_location: Option<LatLng>,

    /// Additional session entity types to replace or extend developer entity
    /// types with.
    pub session_entity_types: Option<Vec<SessionEntityType>>,

    /// This field can be used to pass custom data into the webhook associated
    /// with the agent.
    pub payload: Option<wkt::Struct>,

    /// Additional parameters to be put into session parameters.
    pub parameters: Option<wkt::Struct>,

    /// The unique identifier of the page to override the current page in the
    /// session.
    pub current_page: Option<String>,

    /// Whether to disable webhook calls for this request.
    pub disable_webhook: Option<bool>,

    /// Configures whether sentiment analysis should be performed.
    pub analyze_query_text_sentiment: Option<bool>,

    /// This field can be used to pass HTTP headers for a webhook call.
    pub webhook_headers: Option<HashMap<String, String>>,

    /// A list of flow versions to override for the request.
    pub flow_versions: Option<Vec<String>>,

    /// The unique identifier of the playbook to start or continue the
    /// session with.
    pub current_playbook: Option<String>,

    /// Use the specified LLM model settings for processing the request.
    pub llm_model_settings: Option<LlmModelSettings>,

    /// The channel which this query is for.
    pub channel: Option<String>,

    /// Sets Dialogflow session life time.
    pub session_ttl: Option<wkt::Duration>,

    /// Information about the end-user to improve the relevance and accuracy
    /// of generative answers.
    pub end_user_metadata: Option<wkt::Struct>,

    /// If set to true and data stores are involved in serving the request
    /// then the response includes the data store connection signals.
    pub populate_data_store_connection_signals: Option<bool>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [time_zone][QueryParameters::time_zone].
    pub fn set_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.time_zone = Some(v.into());
        self
    }

    /// Sets the value of [geo_location][QueryParameters::geo_location].
    pub fn set_geo_location<T: Into<LatLng>>(mut self, v: T) -> Self {
        self.geo_location = Some(v.into());
        self
    }

    /// Sets the value of [session_entity_types][QueryParameters::session_entity_types].
    pub fn set_session_entity_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SessionEntityType>,
    {
        self.session_entity_types = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [payload][QueryParameters::payload].
    pub fn set_payload<T: Into<wkt::Struct>>(mut self, v: T) -> Self {
        self.payload = Some(v.into());
        self
    }

    /// Sets the value of [parameters][QueryParameters::parameters].
    pub fn set_parameters<T: Into<wkt::Struct>>(mut self, v: T) -> Self {
        self.parameters = Some(v.into());
        self
    }

    /// Sets the value of [current_page][QueryParameters::current_page].
    pub fn set_current_page<T: Into<String>>(mut self, v: T) -> Self {
        self.current_page = Some(v.into());
        self
    }

    /// Sets the value of [disable_webhook][QueryParameters::disable_webhook].
    pub fn set_disable_webhook<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_webhook = Some(v.into());
        self
    }

    /// Sets the value of [webhook_headers][QueryParameters::webhook_headers].
    pub fn set_webhook_headers<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.webhook_headers = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [flow_versions][QueryParameters::flow_versions].
    pub fn set_flow_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.flow_versions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [channel][QueryParameters::channel].
    pub fn set_channel<T: Into<String>>(mut self, v: T) -> Self {
        self.channel = Some(v.into());
        self
    }

    /// Sets the value of [session_ttl][QueryParameters::session_ttl].
    pub fn set_session_ttl<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.session_ttl = Some(v.into());
        self
    }
}

/// An object that represents a latitude/longitude pair.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LatLng {
    /// The latitude in degrees. It must be in the range [-90.0, +90.0].
    pub latitude: Option<f64>,
    /// The longitude in degrees. It must be in the range [-180.0, +180.0].
    pub longitude: Option<f64>,
}

impl LatLng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [latitude][LatLng::latitude].
    pub fn set_latitude<T: Into<f64>>(mut self, v: T) -> Self {
        self.latitude = Some(v.into());
        self
    }

    /// Sets the value of [longitude][LatLng::longitude].
    pub fn set_longitude<T: Into<f64>>(mut self, v: T) -> Self {
        self.longitude = Some(v.into());
        self
    }
}

/// Represents the query input. It can contain one of:
///
/// 1. A conversational query in the form of text.
/// 1. An intent query that specifies which intent to trigger.
/// 1. Natural language speech audio to be processed.
/// 1. An event to be triggered.
/// 1. DTMF digits to invoke an intent and fill in parameter value.
///
/// The service rejects requests that set more than one input.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryInput {
    /// The natural language text to be processed.
    pub text: Option<TextInput>,

    /// The intent to be triggered.
    pub intent: Option<IntentInput>,

    /// The natural language speech audio to be processed.
    pub audio: Option<AudioInput>,

    /// The event to be triggered.
    pub event: Option<EventInput>,

    /// The DTMF event to be handled.
    pub dtmf: Option<DtmfInput>,

    /// Required. The language of the input.
    pub language_code: Option<String>,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][QueryInput::text].
    pub fn set_text<T: Into<TextInput>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [intent][QueryInput::intent].
    pub fn set_intent<T: Into<IntentInput>>(mut self, v: T) -> Self {
        self.intent = Some(v.into());
        self
    }

    /// Sets the value of [audio][QueryInput::audio].
    pub fn set_audio<T: Into<AudioInput>>(mut self, v: T) -> Self {
        self.audio = Some(v.into());
        self
    }

    /// Sets the value of [event][QueryInput::event].
    pub fn set_event<T: Into<EventInput>>(mut self, v: T) -> Self {
        self.event = Some(v.into());
        self
    }

    /// Sets the value of [dtmf][QueryInput::dtmf].
    pub fn set_dtmf<T: Into<DtmfInput>>(mut self, v: T) -> Self {
        self.dtmf = Some(v.into());
        self
    }

    /// Sets the value of [language_code][QueryInput::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }
}

/// Represents the natural language text to be processed.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextInput {
    /// Required. The UTF-8 encoded natural language text to be processed.
    pub text: Option<String>,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][TextInput::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }
}

/// Represents the intent to trigger programmatically rather than as a
/// result of natural language processing.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IntentInput {
    /// Required. The unique identifier of the intent.
    pub intent: Option<String>,
}

impl IntentInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [intent][IntentInput::intent].
    pub fn set_intent<T: Into<String>>(mut self, v: T) -> Self {
        self.intent = Some(v.into());
        self
    }
}

/// Represents the natural speech audio to be processed.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AudioInput {
    /// Required. Instructs the speech recognizer how to process the speech
    /// audio.
    pub config: Option<InputAudioConfig>,

    /// The natural language speech audio to be processed.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub audio: Option<bytes::Bytes>,
}

impl AudioInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [config][AudioInput::config].
    pub fn set_config<T: Into<InputAudioConfig>>(mut self, v: T) -> Self {
        self.config = Some(v.into());
        self
    }

    /// Sets the value of [audio][AudioInput::audio].
    pub fn set_audio<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.audio = Some(v.into());
        self
    }
}

/// Instructs the speech recognizer on how to process the audio content.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InputAudioConfig {
    /// Required. Audio encoding of the audio content to process, e.g.
    /// `AUDIO_ENCODING_LINEAR_16`.
    pub audio_encoding: Option<String>,

    /// Sample rate (in Hertz) of the audio content sent in the query.
    pub sample_rate_hertz: Option<i32>,

    /// If `true`, Dialogflow returns speech recognition results with time
    /// offsets for each word.
    pub enable_word_info: Option<bool>,

    /// A list of strings containing words and phrases that the speech
    /// recognizer should recognize with higher likelihood.
    pub phrase_hints: Option<Vec<String>>,

    /// Which Speech model to select for the given request.
    pub model: Option<String>,

    /// Which variant of the Speech model to use.
    pub model_variant: Option<String>,

    /// If `false` (default), recognition does not cease until the client
    /// closes the stream.
    pub single_utterance: Option<bool>,

    /// Configuration of barge-in behavior during the streaming of input
    /// audio.
    pub barge_in_config: Option<BargeInConfig>,

    /// If `true`, the request will opt out for STT conformer model
    /// migration.
    pub opt_out_conformer_model_migration: Option<bool>,
}

impl InputAudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [audio_encoding][InputAudioConfig::audio_encoding].
    pub fn set_audio_encoding<T: Into<String>>(mut self, v: T) -> Self {
        self.audio_encoding = Some(v.into());
        self
    }

    /// Sets the value of [sample_rate_hertz][InputAudioConfig::sample_rate_hertz].
    pub fn set_sample_rate_hertz<T: Into<i32>>(mut self, v: T) -> Self {
        self.sample_rate_hertz = Some(v.into());
        self
    }

    /// Sets the value of [phrase_hints][InputAudioConfig::phrase_hints].
    pub fn set_phrase_hints<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.phrase_hints = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [barge_in_config][InputAudioConfig::barge_in_config].
    pub fn set_barge_in_config<T: Into<BargeInConfig>>(mut self, v: T) -> Self {
        self.barge_in_config = Some(v.into());
        self
    }
}

/// Configuration of the barge-in behavior.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BargeInConfig {
    /// Duration that is not eligible for barge-in at the beginning of the
    /// input audio.
    pub no_barge_in_duration: Option<wkt::Duration>,

    /// Total duration for the playback at the beginning of the input audio.
    pub total_duration: Option<wkt::Duration>,
}

impl BargeInConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [no_barge_in_duration][BargeInConfig::no_barge_in_duration].
    pub fn set_no_barge_in_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.no_barge_in_duration = Some(v.into());
        self
    }

    /// Sets the value of [total_duration][BargeInConfig::total_duration].
    pub fn set_total_duration<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.total_duration = Some(v.into());
        self
    }
}

/// Represents the event to trigger.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventInput {
    /// Name of the event.
    pub event: Option<String>,
}

impl EventInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [event][EventInput::event].
    pub fn set_event<T: Into<String>>(mut self, v: T) -> Self {
        self.event = Some(v.into());
        self
    }
}

/// Represents the input for dtmf event.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DtmfInput {
    /// The dtmf digits.
    pub digits: Option<String>,
    /// The finish digit (if any).
    pub finish_digit: Option<String>,
}

impl DtmfInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [digits][DtmfInput::digits].
    pub fn set_digits<T: Into<String>>(mut self, v: T) -> Self {
        self.digits = Some(v.into());
        self
    }

    /// Sets the value of [finish_digit][DtmfInput::finish_digit].
    pub fn set_finish_digit<T: Into<String>>(mut self, v: T) -> Self {
        self.finish_digit = Some(v.into());
        self
    }
}

/// Instructs the speech synthesizer how to generate the output audio
/// content.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OutputAudioConfig {
    /// Required. Audio encoding of the synthesized audio content, e.g.
    /// `OUTPUT_AUDIO_ENCODING_MP3`.
    pub audio_encoding: Option<String>,

    /// The synthesis sample rate (in hertz) for this audio.
    pub sample_rate_hertz: Option<i32>,

    /// Configuration of how speech should be synthesized.
    pub synthesize_speech_config: Option<SynthesizeSpeechConfig>,
}

impl OutputAudioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [audio_encoding][OutputAudioConfig::audio_encoding].
    pub fn set_audio_encoding<T: Into<String>>(mut self, v: T) -> Self {
        self.audio_encoding = Some(v.into());
        self
    }

    /// Sets the value of [sample_rate_hertz][OutputAudioConfig::sample_rate_hertz].
    pub fn set_sample_rate_hertz<T: Into<i32>>(mut self, v: T) -> Self {
        self.sample_rate_hertz = Some(v.into());
        self
    }

    /// Sets the value of [synthesize_speech_config][OutputAudioConfig::synthesize_speech_config].
    pub fn set_synthesize_speech_config<T: Into<SynthesizeSpeechConfig>>(mut self, v: T) -> Self {
        self.synthesize_speech_config = Some(v.into());
        self
    }
}

/// Represents the result of a conversational query.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryResult {
    /// If natural language text was provided as input, this field contains a
    /// copy of the text.
    pub text: Option<String>,

    /// If an intent was provided as input, this field contains a copy of the
    /// intent identifier.
    pub trigger_intent: Option<String>,

    /// If natural language speech audio was provided as input, this field
    /// contains the transcript for the audio.
    pub transcript: Option<String>,

    /// If an event was provided as input, this field contains the name of
    /// the event.
    pub trigger_event: Option<String>,

    /// If a DTMF was provided as input, this field contains a copy of the
    /// DtmfInput.
    pub dtmf: Option<DtmfInput>,

    /// The language that was triggered during intent detection.
    pub language_code: Option<String>,

    /// The collected session parameters.
    pub parameters: Option<wkt::Struct>,

    /// The list of rich messages returned to the client.
    pub response_messages: Option<Vec<ResponseMessage>>,

    /// The list of webhook ids in the order of call sequence.
    pub webhook_ids: Option<Vec<String>>,

    /// The list of webhook display names in the order of call sequence.
    pub webhook_display_names: Option<Vec<String>>,

    /// The list of webhook latencies in the order of call sequence.
    pub webhook_latencies: Option<Vec<wkt::Duration>>,

    /// The list of webhook tags in the order of call sequence.
    pub webhook_tags: Option<Vec<String>>,

    /// The list of webhook call status in the order of call sequence.
    pub webhook_statuses: Option<Vec<gax::error::rpc::Status>>,

    /// The list of webhook payload in WebhookResponse, in the order of call
    /// sequence.
    pub webhook_payloads: Option<Vec<wkt::Struct>>,

    /// The current page.
    pub current_page: Option<Page>,

    /// The current flow.
    pub current_flow: Option<Flow>,

    /// The intent that matched the conversational query.
    pub intent: Option<Intent>,

    /// The intent detection confidence.
    pub intent_detection_confidence: Option<f32>,

    /// Intent match result, could be an intent or an event.
    pub r#match: Option<Match>,

    /// The free-form diagnostic info.
    pub diagnostic_info: Option<wkt::Struct>,

    /// The sentiment analysis result, which depends on
    /// `analyze_query_text_sentiment`.
    pub sentiment_analysis_result: Option<SentimentAnalysisResult>,

    /// Returns the current advanced settings including IVR settings.
    pub advanced_settings: Option<AdvancedSettings>,

    /// Indicates whether the Thumbs up/Thumbs down rating controls are need
    /// to be shown for the response.
    pub allow_answer_feedback: Option<bool>,
}

/// The result of sentiment analysis.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SentimentAnalysisResult {
    /// Sentiment score between -1.0 (negative sentiment) and 1.0 (positive
    /// sentiment).
    pub score: Option<f32>,
    /// A non-negative number in the [0, +inf) range.
    pub magnitude: Option<f32>,
}

/// Represents one match result of MatchIntent.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Match {
    /// The Intent that matched the query.
    pub intent: Option<Intent>,

    /// The event that matched the query.
    pub event: Option<String>,

    /// The collection of parameters extracted from the query.
    pub parameters: Option<wkt::Struct>,

    /// Final text input which was matched during MatchIntent.
    pub resolved_input: Option<String>,

    /// Type of this match, e.g. `INTENT`, `DIRECT_INTENT` or
    /// `NO_MATCH`.
    pub match_type: Option<String>,

    /// The confidence of this match. Values range from 0.0 (completely
    /// uncertain) to 1.0 (completely certain).
    pub confidence: Option<f32>,
}

/// The request body for [Sessions::match_intent][crate::client::Sessions::match_intent].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MatchIntentRequest {
    /// The parameters of this query.
    pub query_params: Option<QueryParameters>,

    /// Required. The input specification.
    pub query_input: Option<QueryInput>,

    /// Persist session parameter changes from `query_params`.
    pub persist_parameter_changes: Option<bool>,
}

impl MatchIntentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [query_params][MatchIntentRequest::query_params].
    pub fn set_query_params<T: Into<QueryParameters>>(mut self, v: T) -> Self {
        self.query_params = Some(v.into());
        self
    }

    /// Sets the value of [query_input][MatchIntentRequest::query_input].
    pub fn set_query_input<T: Into<QueryInput>>(mut self, v: T) -> Self {
        self.query_input = Some(v.into());
        self
    }

    /// Sets the value of [persist_parameter_changes][MatchIntentRequest::persist_parameter_changes].
    pub fn set_persist_parameter_changes<T: Into<bool>>(mut self, v: T) -> Self {
        self.persist_parameter_changes = Some(v.into());
        self
    }
}

/// Response of [Sessions::match_intent][crate::client::Sessions::match_intent].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MatchIntentResponse {
    /// If natural language text was provided as input, this field contains a
    /// copy of the text.
    pub text: Option<String>,
    pub trigger_intent: Option<String>,
    pub transcript: Option<String>,
    pub trigger_event: Option<String>,

    /// Match results, if more than one, ordered descendingly by the
    /// confidence we have that the particular intent matches the query.
    pub matches: Option<Vec<Match>>,

    /// The current page.
    pub current_page: Option<Page>,
}

/// The request body for [Sessions::fulfill_intent][crate::client::Sessions::fulfill_intent].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FulfillIntentRequest {
    /// Must be same as the corresponding MatchIntent request, otherwise the
    /// behavior is undefined.
    pub match_intent_request: Option<MatchIntentRequest>,

    /// The matched intent/event to fulfill.
    pub r#match: Option<Match>,

    /// Instructs the speech synthesizer how to generate output audio.
    pub output_audio_config: Option<OutputAudioConfig>,
}

impl FulfillIntentRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [match_intent_request][FulfillIntentRequest::match_intent_request].
    pub fn set_match_intent_request<T: Into<MatchIntentRequest>>(mut self, v: T) -> Self {
        self.match_intent_request = Some(v.into());
        self
    }

    /// Sets the value of [r#match][FulfillIntentRequest::match].
    pub fn set_match<T: Into<Match>>(mut self, v: T) -> Self {
        self.r#match = Some(v.into());
        self
    }

    /// Sets the value of [output_audio_config][FulfillIntentRequest::output_audio_config].
    pub fn set_output_audio_config<T: Into<OutputAudioConfig>>(mut self, v: T) -> Self {
        self.output_audio_config = Some(v.into());
        self
    }
}

/// Response of [Sessions::fulfill_intent][crate::client::Sessions::fulfill_intent].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FulfillIntentResponse {
    /// Output only. The unique identifier of the response.
    pub response_id: Option<String>,

    /// The result of the conversational query.
    pub query_result: Option<QueryResult>,

    /// The audio data bytes encoded as specified in the request.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub output_audio: Option<bytes::Bytes>,

    /// The config used by the speech synthesizer to generate the output
    /// audio.
    pub output_audio_config: Option<OutputAudioConfig>,
}

/// The request body for
/// [Sessions::submit_answer_feedback][crate::client::Sessions::submit_answer_feedback].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubmitAnswerFeedbackRequest {
    /// Required. ID of the response to submit feedback for.
    pub response_id: Option<String>,

    /// Required. Feedback provided for a bot answer.
    pub answer_feedback: Option<AnswerFeedback>,

    /// The mask to control which fields to update. If the mask is not
    /// present, all fields will be updated.
    pub update_mask: Option<wkt::FieldMask>,
}

impl SubmitAnswerFeedbackRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [response_id][SubmitAnswerFeedbackRequest::response_id].
    pub fn set_response_id<T: Into<String>>(mut self, v: T) -> Self {
        self.response_id = Some(v.into());
        self
    }

    /// Sets the value of [answer_feedback][SubmitAnswerFeedbackRequest::answer_feedback].
    pub fn set_answer_feedback<T: Into<AnswerFeedback>>(mut self, v: T) -> Self {
        self.answer_feedback = Some(v.into());
        self
    }

    /// Sets the value of [update_mask][SubmitAnswerFeedbackRequest::update_mask].
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }
}

/// Stores information about feedback provided by users about a response.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnswerFeedback {
    /// Rating from user for the specific Dialogflow response, e.g.
    /// `THUMBS_UP`.
    pub rating: Option<String>,

    /// In case of thumbs down rating provided, users can optionally provide
    /// context about the rating.
    pub rating_reason: Option<answer_feedback::RatingReason>,

    /// Optional. Custom rating from the user about the provided answer.
    pub custom_rating: Option<String>,
}

impl AnswerFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [rating][AnswerFeedback::rating].
    pub fn set_rating<T: Into<String>>(mut self, v: T) -> Self {
        self.rating = Some(v.into());
        self
    }

    /// Sets the value of [rating_reason][AnswerFeedback::rating_reason].
    pub fn set_rating_reason<T: Into<answer_feedback::RatingReason>>(mut self, v: T) -> Self {
        self.rating_reason = Some(v.into());
        self
    }

    /// Sets the value of [custom_rating][AnswerFeedback::custom_rating].
    pub fn set_custom_rating<T: Into<String>>(mut self, v: T) -> Self {
        self.custom_rating = Some(v.into());
        self
    }
}

/// Defines additional types related to [AnswerFeedback].
pub mod answer_feedback {
    /// Stores extra information about why users provided thumbs down rating.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct RatingReason {
        /// Optional. Custom reason labels for thumbs down rating provided by
        /// the user.
        pub reason_labels: Option<Vec<String>>,

        /// Optional. Additional feedback about the rating.
        pub feedback: Option<String>,
    }

    impl RatingReason {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [reason_labels][RatingReason::reason_labels].
        pub fn set_reason_labels<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.reason_labels = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }

        /// Sets the value of [feedback][RatingReason::feedback].
        pub fn set_feedback<T: Into<String>>(mut self, v: T) -> Self {
            self.feedback = Some(v.into());
            self
        }
    }
}
