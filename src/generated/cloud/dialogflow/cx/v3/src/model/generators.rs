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

use crate::model::LlmModelSettings;

/// Generators contain prompt to be sent to the LLM model to generate text.
///
/// The prompt can contain parameters which will be resolved before calling
/// the model. It can optionally contain banned phrases to ensure the model
/// responses are safe.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Generator {
    /// The unique identifier of the generator, in the
    /// `projects/{p}/locations/{l}/agents/{a}/generators/{g}` format.
    pub name: Option<String>,

    /// Required. The human-readable name of the generator, unique within
    /// the agent.
    pub display_name: Option<String>,

    /// Required. Prompt for the LLM model.
    pub prompt_text: Option<Phrase>,

    /// Optional. List of custom placeholders in the prompt text.
    pub placeholders: Option<Vec<generator::Placeholder>>,

    /// The LLM model settings.
    pub llm_model_settings: Option<LlmModelSettings>,

    /// Parameters passed to the LLM to configure its behavior.
    pub model_parameter: Option<generator::ModelParameter>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Generator::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Generator::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [prompt_text][Generator::prompt_text].
    pub fn set_prompt_text<T: Into<Phrase>>(mut self, v: T) -> Self {
        self.prompt_text = Some(v.into());
        self
    }

    /// Sets the value of [placeholders][Generator::placeholders].
    pub fn set_placeholders<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<generator::Placeholder>,
    {
        self.placeholders = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Defines additional types related to [Generator].
pub mod generator {
    /// Represents a custom placeholder in the prompt text.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Placeholder {
        /// Unique ID used to map custom placeholder to parameters in
        /// fulfillment.
        pub id: Option<String>,
        /// Custom placeholder value in the prompt text.
        pub name: Option<String>,
    }

    impl Placeholder {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [id][Placeholder::id].
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.id = Some(v.into());
            self
        }

        /// Sets the value of [name][Placeholder::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.name = Some(v.into());
            self
        }
    }

    /// Parameters to be passed to the LLM.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ModelParameter {
        /// The temperature used for sampling.
        pub temperature: Option<f32>,
        /// The maximum number of tokens to generate.
        pub max_decode_steps: Option<i32>,
        /// If set, only the tokens comprising the top `top_p` probability
        /// mass are considered.
        pub top_p: Option<f32>,
        /// If set, the sampling process in each step is limited to the
        /// `top_k` tokens with highest probabilities.
        pub top_k: Option<i32>,
    }
}

/// Text input which can be used for prompt or banned phrases.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Phrase {
    /// Required. Text input which can be used for prompt or banned phrases.
    pub text: Option<String>,
}

impl Phrase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [text][Phrase::text].
    pub fn set_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }
}

/// The response of [Generators::list_generators][crate::client::Generators::list_generators].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListGeneratorsResponse {
    pub generators: Option<Vec<Generator>>,
    pub next_page_token: Option<String>,
}
