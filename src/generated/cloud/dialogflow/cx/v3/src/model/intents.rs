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
use std::collections::HashMap;

/// An intent represents a user's intent to interact with a conversational
/// agent.
///
/// You can provide information for the Dialogflow API to use to match user
/// input to an intent by adding training phrases (i.e., examples of user
/// input) to your intent.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Intent {
    /// The unique identifier of the intent, in the
    /// `projects/{p}/locations/{l}/agents/{a}/intents/{i}` format.
    pub name: Option<String>,

    /// Required. The human-readable name of the intent, unique within the
    /// agent.
    pub display_name: Option<String>,

    /// The collection of training phrases the agent is trained on to
    /// identify the intent.
    pub training_phrases: Option<Vec<intent::TrainingPhrase>>,

    /// The collection of parameters associated with the intent.
    pub parameters: Option<Vec<intent::Parameter>>,

    /// The priority of this intent. Higher numbers represent higher
    /// priorities. Negative numbers mean that the intent is disabled.
    pub priority: Option<i32>,

    /// Indicates whether this is a fallback intent.
    pub is_fallback: Option<bool>,

    /// The key/value metadata to label an intent.
    pub labels: Option<HashMap<String, String>>,

    /// Human readable description for better understanding an intent like
    /// its scope, content, result etc.
    pub description: Option<String>,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Intent::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Intent::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [training_phrases][Intent::training_phrases].
    ///
    /// # Example
    /// ```
    /// # use dialogflow_cx_v3::model::Intent;
    /// # use dialogflow_cx_v3::model::intent::{TrainingPhrase, training_phrase::Part};
    /// let intent = Intent::new()
    ///     .set_display_name("order.pizza")
    ///     .set_training_phrases([
    ///         TrainingPhrase::new().set_parts([Part::new().set_text("I want a pizza")]),
    ///     ]);
    /// # let _ = intent;
    /// ```
    pub fn set_training_phrases<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<intent::TrainingPhrase>,
    {
        self.training_phrases = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [parameters][Intent::parameters].
    pub fn set_parameters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<intent::Parameter>,
    {
        self.parameters = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [priority][Intent::priority].
    pub fn set_priority<T: Into<i32>>(mut self, v: T) -> Self {
        self.priority = Some(v.into());
        self
    }

    /// Sets the value of [is_fallback][Intent::is_fallback].
    pub fn set_is_fallback<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_fallback = Some(v.into());
        self
    }

    /// Sets the value of [labels][Intent::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [description][Intent::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// Defines additional types related to [Intent].
pub mod intent {
    /// Represents an example that the agent is trained on to identify the
    /// intent.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct TrainingPhrase {
        /// Output only. The unique identifier of the training phrase.
        pub id: Option<String>,

        /// Required. The ordered list of training phrase parts.
        pub parts: Option<Vec<training_phrase::Part>>,

        /// Indicates how many times this example was added to the intent.
        pub repeat_count: Option<i32>,
    }

    impl TrainingPhrase {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [parts][TrainingPhrase::parts].
        pub fn set_parts<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<training_phrase::Part>,
        {
            self.parts = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }

        /// Sets the value of [repeat_count][TrainingPhrase::repeat_count].
        pub fn set_repeat_count<T: Into<i32>>(mut self, v: T) -> Self {
            self.repeat_count = Some(v.into());
            self
        }
    }

    /// Defines additional types related to [TrainingPhrase].
    pub mod training_phrase {
        /// Represents a part of a training phrase.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Part {
            /// Required. The text for this part.
            pub text: Option<String>,

            /// The parameter used to annotate this part of the training
            /// phrase.
            pub parameter_id: Option<String>,
        }

        impl Part {
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [text][Part::text].
            pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
                self.text = Some(v.into());
                self
            }

            /// Sets the value of [parameter_id][Part::parameter_id].
            pub fn set_parameter_id<T: Into<String>>(mut self, v: T) -> Self {
                self.parameter_id = Some(v.into());
                self
            }
        }
    }

    /// Represents an intent parameter.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Parameter {
        /// Required. The unique identifier of the parameter.
        pub id: Option<String>,
        /// Required. The entity type of the parameter.
        pub entity_type: Option<String>,
        /// Indicates whether the parameter represents a list of values.
        pub is_list: Option<bool>,
        /// Indicates whether the parameter content should be redacted in
        /// log.
        pub redact: Option<bool>,
    }

    impl Parameter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [id][Parameter::id].
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.id = Some(v.into());
            self
        }

        /// Sets the value of [entity_type][Parameter::entity_type].
        pub fn set_entity_type<T: Into<String>>(mut self, v: T) -> Self {
            self.entity_type = Some(v.into());
            self
        }
    }
}

/// The response of [Intents::list_intents][crate::client::Intents::list_intents].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListIntentsResponse {
    pub intents: Option<Vec<Intent>>,
    pub next_page_token: Option<String>,
}

/// The request body for [Intents::import_intents][crate::client::Intents::import_intents].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportIntentsRequest {
    /// The Google Cloud Storage URI to import intents from.
    pub intents_uri: Option<String>,

    /// Uncompressed byte content of intents.
    pub intents_content: Option<InlineSource>,

    /// Merge option for importing intents, e.g. `REPLACE` or `MERGE`.
    pub merge_option: Option<String>,
}

impl ImportIntentsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [intents_uri][ImportIntentsRequest::intents_uri].
    pub fn set_intents_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.intents_uri = Some(v.into());
        self
    }

    /// Sets the value of [intents_content][ImportIntentsRequest::intents_content].
    pub fn set_intents_content<T: Into<InlineSource>>(mut self, v: T) -> Self {
        self.intents_content = Some(v.into());
        self
    }

    /// Sets the value of [merge_option][ImportIntentsRequest::merge_option].
    pub fn set_merge_option<T: Into<String>>(mut self, v: T) -> Self {
        self.merge_option = Some(v.into());
        self
    }
}

/// The response message for an intents import.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportIntentsResponse {
    /// The unique identifier of the imported intents.
    pub intents: Option<Vec<String>>,

    /// Info which resources have conflicts when `REPORT_CONFLICT` merge
    /// option is set.
    pub conflicting_resources: Option<import_intents_response::ConflictingResources>,
}

/// Defines additional types related to [ImportIntentsResponse].
pub mod import_intents_response {
    /// Conflicting resources detected during the import process.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ConflictingResources {
        pub intent_display_names: Option<Vec<String>>,
        pub entity_display_names: Option<Vec<String>>,
    }
}

/// The request body for [Intents::export_intents][crate::client::Intents::export_intents].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportIntentsRequest {
    /// Required. The name of the intents to export.
    pub intents: Option<Vec<String>>,

    /// The Google Cloud Storage URI to export the intents to.
    pub intents_uri: Option<String>,

    /// The option to return the serialized intents inline.
    pub intents_content_inline: Option<bool>,

    /// Optional. The data format of the exported intents, e.g. `BLOB` or
    /// `CSV`.
    pub data_format: Option<String>,
}

impl ExportIntentsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [intents][ExportIntentsRequest::intents].
    pub fn set_intents<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.intents = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [intents_uri][ExportIntentsRequest::intents_uri].
    pub fn set_intents_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.intents_uri = Some(v.into());
        self
    }

    /// Sets the value of [intents_content_inline][ExportIntentsRequest::intents_content_inline].
    pub fn set_intents_content_inline<T: Into<bool>>(mut self, v: T) -> Self {
        self.intents_content_inline = Some(v.into());
        self
    }

    /// Sets the value of [data_format][ExportIntentsRequest::data_format].
    pub fn set_data_format<T: Into<String>>(mut self, v: T) -> Self {
        self.data_format = Some(v.into());
        self
    }
}

/// The response message for an intents export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportIntentsResponse {
    /// The URI to a file containing the exported intents.
    pub intents_uri: Option<String>,
    /// Uncompressed byte content for intents.
    pub intents_content: Option<InlineDestination>,
}
