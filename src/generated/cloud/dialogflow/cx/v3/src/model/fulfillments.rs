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

use crate::model::AdvancedSettings;
use std::collections::HashMap;

/// A fulfillment can do one or more of the following actions at the same
/// time:
///
/// * Generate rich message responses.
/// * Set parameter values.
/// * Call the webhook.
///
/// Fulfillments can be called at various stages in the Page or Form
/// lifecycle.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Fulfillment {
    /// The list of rich message responses to present to the user.
    pub messages: Option<Vec<ResponseMessage>>,

    /// The webhook to call, in the
    /// `projects/{p}/locations/{l}/agents/{a}/webhooks/{w}` format.
    pub webhook: Option<String>,

    /// Whether Dialogflow should return currently queued fulfillment
    /// response messages in streaming APIs.
    pub return_partial_responses: Option<bool>,

    /// The value of this field is populated in the webhook request.
    pub tag: Option<String>,

    /// Set parameter values before executing the webhook.
    pub set_parameter_actions: Option<Vec<fulfillment::SetParameterAction>>,

    /// Conditional cases for this fulfillment.
    pub conditional_cases: Option<Vec<fulfillment::ConditionalCases>>,

    pub advanced_settings: Option<AdvancedSettings>,

    /// If the flag is true, the agent uses LLM to generate a fallback
    /// response when no other response is available.
    pub enable_generative_fallback: Option<bool>,

    /// A list of Generators to be called during this fulfillment.
    pub generators: Option<Vec<fulfillment::GeneratorSettings>>,
}

impl Fulfillment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [messages][Fulfillment::messages].
    pub fn set_messages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ResponseMessage>,
    {
        self.messages = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [webhook][Fulfillment::webhook].
    pub fn set_webhook<T: Into<String>>(mut self, v: T) -> Self {
        self.webhook = Some(v.into());
        self
    }

    /// Sets the value of [tag][Fulfillment::tag].
    pub fn set_tag<T: Into<String>>(mut self, v: T) -> Self {
        self.tag = Some(v.into());
        self
    }

    /// Sets the value of [set_parameter_actions][Fulfillment::set_parameter_actions].
    pub fn set_set_parameter_actions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<fulfillment::SetParameterAction>,
    {
        self.set_parameter_actions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Defines additional types related to [Fulfillment].
pub mod fulfillment {
    use super::*;

    /// Setting a parameter value.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct SetParameterAction {
        /// Display name of the parameter.
        pub parameter: Option<String>,
        /// The new value of the parameter. A null value clears the parameter.
        pub value: Option<wkt::Value>,
    }

    impl SetParameterAction {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [parameter][SetParameterAction::parameter].
        pub fn set_parameter<T: Into<String>>(mut self, v: T) -> Self {
            self.parameter = Some(v.into());
            self
        }

        /// Sets the value of [value][SetParameterAction::value].
        pub fn set_value<T: Into<wkt::Value>>(mut self, v: T) -> Self {
            self.value = Some(v.into());
            self
        }
    }

    /// A list of cascading if-else conditions. Cases are mutually exclusive.
    /// The first one with a matching condition is selected, all the rest
    /// ignored.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ConditionalCases {
        pub cases: Option<Vec<conditional_cases::Case>>,
    }

    /// Defines additional types related to [ConditionalCases].
    pub mod conditional_cases {
        /// Each case has a Boolean condition. When it is evaluated to be
        /// true, the corresponding messages are selected and evaluated
        /// recursively.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Case {
            /// The condition to activate and select this case. Empty means
            /// the condition is always true.
            pub condition: Option<String>,
            /// A list of case content.
            pub case_content: Option<Vec<case::CaseContent>>,
        }

        /// Defines additional types related to [Case].
        pub mod case {
            /// The list of messages or conditional cases to activate for
            /// this case.
            #[serde_with::serde_as]
            #[serde_with::skip_serializing_none]
            #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
            #[serde(default, rename_all = "camelCase")]
            #[non_exhaustive]
            pub struct CaseContent {
                /// Returned message.
                pub message: Option<crate::model::ResponseMessage>,
                /// Additional cases to be evaluated.
                pub additional_cases: Option<Box<crate::model::fulfillment::ConditionalCases>>,
            }
        }
    }

    /// Generator settings used by the LLM to generate a text response.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct GeneratorSettings {
        /// The generator to call.
        pub generator: Option<String>,
        /// Map from placeholder parameter in the generator to corresponding
        /// session parameters.
        pub input_parameters: Option<HashMap<String, String>>,
        /// Output parameter which should contain the generator response.
        pub output_parameter: Option<String>,
    }
}

/// Represents a response message that can be returned by a conversational
/// agent.
///
/// Only one of the message kinds is set in each message.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResponseMessage {
    /// Returns a text response.
    pub text: Option<response_message::Text>,

    /// Returns a response containing a custom, platform-specific payload.
    pub payload: Option<wkt::Struct>,

    /// Indicates that the conversation succeeded.
    pub conversation_success: Option<response_message::ConversationSuccess>,

    /// A text or ssml response that is preferentially used for TTS output
    /// audio synthesis.
    pub output_audio_text: Option<response_message::OutputAudioText>,

    /// Hands off conversation to a human agent.
    pub live_agent_handoff: Option<response_message::LiveAgentHandoff>,

    /// Output only. A signal that indicates the interaction with the
    /// Dialogflow agent has ended.
    pub end_interaction: Option<response_message::EndInteraction>,

    /// Signal that the client should play an audio clip hosted at a
    /// client-specific URI.
    pub play_audio: Option<response_message::PlayAudio>,

    /// Output only. An audio response message composed of both the
    /// synthesized Dialogflow agent responses and responses defined via
    /// `play_audio`.
    pub mixed_audio: Option<response_message::MixedAudio>,

    /// A signal that the client should transfer the phone call connected to
    /// this agent to a third-party endpoint.
    pub telephony_transfer_call: Option<response_message::TelephonyTransferCall>,

    /// Represents info card for knowledge answers.
    pub knowledge_info_card: Option<response_message::KnowledgeInfoCard>,

    /// Response type, e.g. `ENTRY_PROMPT`.
    pub response_type: Option<String>,

    /// The channel which the response is associated with.
    pub channel: Option<String>,
}

impl ResponseMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][ResponseMessage::text].
    pub fn set_text<T: Into<response_message::Text>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets the value of [payload][ResponseMessage::payload].
    pub fn set_payload<T: Into<wkt::Struct>>(mut self, v: T) -> Self {
        self.payload = Some(v.into());
        self
    }

    /// Sets the value of [play_audio][ResponseMessage::play_audio].
    pub fn set_play_audio<T: Into<response_message::PlayAudio>>(mut self, v: T) -> Self {
        self.play_audio = Some(v.into());
        self
    }

    /// Sets the value of [channel][ResponseMessage::channel].
    pub fn set_channel<T: Into<String>>(mut self, v: T) -> Self {
        self.channel = Some(v.into());
        self
    }
}

/// Defines additional types related to [ResponseMessage].
pub mod response_message {
    /// The text response message.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Text {
        /// A collection of text response variants. If multiple variants are
        /// defined, only one text response variant is returned at runtime.
        pub text: Option<Vec<String>>,

        /// Output only. Whether the playback of this message can be
        /// interrupted by the end user's speech.
        pub allow_playback_interruption: Option<bool>,
    }

    impl Text {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [text][Text::text].
        pub fn set_text<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.text = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }
    }

    /// Indicates that the conversation succeeded.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ConversationSuccess {
        /// Custom metadata. Dialogflow doesn't impose any structure on this.
        pub metadata: Option<wkt::Struct>,
    }

    /// Indicates that the conversation should be handed off to a live agent.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct LiveAgentHandoff {
        /// Custom metadata for your handoff procedure.
        pub metadata: Option<wkt::Struct>,
    }

    /// Indicates that interaction with the Dialogflow agent has ended.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct EndInteraction {}

    /// Represents an info card response.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct KnowledgeInfoCard {}

    /// A text or ssml response that is preferentially used for TTS output
    /// audio synthesis.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct OutputAudioText {
        /// The raw text to be synthesized.
        pub text: Option<String>,
        /// The SSML text to be synthesized.
        pub ssml: Option<String>,
        pub allow_playback_interruption: Option<bool>,
    }

    /// Specifies an audio clip to be played by the client as part of the
    /// response.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct PlayAudio {
        /// URI of the audio clip. Dialogflow does not impose any validation
        /// on this value.
        pub audio_uri: Option<String>,
        pub allow_playback_interruption: Option<bool>,
    }

    impl PlayAudio {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [audio_uri][PlayAudio::audio_uri].
        pub fn set_audio_uri<T: Into<String>>(mut self, v: T) -> Self {
            self.audio_uri = Some(v.into());
            self
        }
    }

    /// Represents an audio message that is composed of both segments
    /// synthesized from the Dialogflow agent prompts and ones hosted
    /// externally at the specified URIs.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct MixedAudio {
        /// Segments this audio response is composed of.
        pub segments: Option<Vec<mixed_audio::Segment>>,
    }

    /// Defines additional types related to [MixedAudio].
    pub mod mixed_audio {
        /// Represents one segment of audio.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Segment {
            /// Raw audio synthesized from the Dialogflow agent's response.
            #[serde_as(as = "Option<wkt::internal::Base64>")]
            pub audio: Option<bytes::Bytes>,

            /// Client-specific URI that points to an audio clip accessible
            /// to the client.
            pub uri: Option<String>,

            pub allow_playback_interruption: Option<bool>,
        }
    }

    /// Represents the signal that tells the client to transfer the phone
    /// call connected to the agent to a third-party endpoint.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct TelephonyTransferCall {
        /// Transfer the call to a phone number in E.164 format.
        pub phone_number: Option<String>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_conditional_cases() -> anyhow::Result<()> {
        let input = json!({
            "conditionalCases": [{
                "cases": [{
                    "condition": "$session.params.size > 2",
                    "caseContent": [
                        {"message": {"text": {"text": ["That is a big party"]}}},
                        {"additionalCases": {"cases": [{"caseContent": [
                            {"message": {"text": {"text": ["Nested"]}}}
                        ]}]}},
                    ],
                }],
            }],
        });
        let got = serde_json::from_value::<Fulfillment>(input.clone())?;
        let cases = got
            .conditional_cases
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.cases.as_ref())
            .and_then(|c| c.first())
            .and_then(|c| c.case_content.as_ref())
            .ok_or_else(|| anyhow::anyhow!("missing case content"))?;
        assert_eq!(cases.len(), 2);
        assert!(cases[1].additional_cases.is_some(), "{cases:?}");
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn mixed_audio() -> anyhow::Result<()> {
        let input = json!({"mixedAudio": {"segments": [
            {"audio": "AQID"},
            {"uri": "gs://bucket/clip.wav"},
        ]}});
        let got = serde_json::from_value::<ResponseMessage>(input.clone())?;
        let segments = got
            .mixed_audio
            .as_ref()
            .and_then(|m| m.segments.as_ref())
            .ok_or_else(|| anyhow::anyhow!("missing segments"))?;
        assert_eq!(segments[0].audio, Some(bytes::Bytes::from_static(&[1, 2, 3])));
        assert_eq!(segments[1].audio, None);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }
}
