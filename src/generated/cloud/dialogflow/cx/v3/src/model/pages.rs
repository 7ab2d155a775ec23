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

use crate::model::{AdvancedSettings, Fulfillment, KnowledgeConnectorSettings};

/// A Dialogflow CX conversation (session) can be described and visualized as
/// a state machine. The states of a CX session are represented by pages.
///
/// For each flow, you define many pages, where your combined pages can
/// handle a complete conversation on the topics the flow is designed for.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Page {
    /// The unique identifier of the page, in the
    /// `projects/{p}/locations/{l}/agents/{a}/flows/{f}/pages/{page}`
    /// format. Ignored on create.
    pub name: Option<String>,

    /// Required. The human-readable name of the page, unique within the
    /// flow.
    pub display_name: Option<String>,

    pub description: Option<String>,

    /// The fulfillment to call when the session is entering the page.
    pub entry_fulfillment: Option<Fulfillment>,

    /// The form associated with the page, used for collecting parameters
    /// relevant to the page.
    pub form: Option<Form>,

    /// Ordered list of transition route groups referenced by the page.
    pub transition_route_groups: Option<Vec<String>>,

    /// A list of transitions for the transition rules of this page.
    pub transition_routes: Option<Vec<TransitionRoute>>,

    /// Handlers associated with the page to handle events such as webhook
    /// errors, no match or no input.
    pub event_handlers: Option<Vec<EventHandler>>,

    pub advanced_settings: Option<AdvancedSettings>,

    /// Optional. Knowledge connector configuration.
    pub knowledge_connector_settings: Option<KnowledgeConnectorSettings>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Page::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Page::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [description][Page::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [entry_fulfillment][Page::entry_fulfillment].
    pub fn set_entry_fulfillment<T: Into<Fulfillment>>(mut self, v: T) -> Self {
        self.entry_fulfillment = Some(v.into());
        self
    }

    /// Sets the value of [form][Page::form].
    pub fn set_form<T: Into<Form>>(mut self, v: T) -> Self {
        self.form = Some(v.into());
        self
    }

    /// Sets the value of [transition_routes][Page::transition_routes].
    pub fn set_transition_routes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TransitionRoute>,
    {
        self.transition_routes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [event_handlers][Page::event_handlers].
    pub fn set_event_handlers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<EventHandler>,
    {
        self.event_handlers = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// A form is a data model that groups related parameters that can be
/// collected from the user.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Form {
    /// Parameters to collect from the user.
    pub parameters: Option<Vec<form::Parameter>>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [parameters][Form::parameters].
    pub fn set_parameters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<form::Parameter>,
    {
        self.parameters = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Defines additional types related to [Form].
pub mod form {
    use crate::model::{AdvancedSettings, EventHandler, Fulfillment};

    /// Represents a form parameter.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Parameter {
        /// Required. The human-readable name of the parameter, unique within
        /// the form.
        pub display_name: Option<String>,

        /// Indicates whether the parameter is required.
        pub required: Option<bool>,

        /// Required. The entity type of the parameter.
        pub entity_type: Option<String>,

        /// Indicates whether the parameter represents a list of values.
        pub is_list: Option<bool>,

        /// Required. Defines fill behavior for the parameter.
        pub fill_behavior: Option<parameter::FillBehavior>,

        /// The default value of an optional parameter.
        pub default_value: Option<wkt::Value>,

        /// Indicates whether the parameter content should be redacted in log.
        pub redact: Option<bool>,

        pub advanced_settings: Option<AdvancedSettings>,
    }

    impl Parameter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [display_name][Parameter::display_name].
        pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
            self.display_name = Some(v.into());
            self
        }

        /// Sets the value of [required][Parameter::required].
        pub fn set_required<T: Into<bool>>(mut self, v: T) -> Self {
            self.required = Some(v.into());
            self
        }

        /// Sets the value of [entity_type][Parameter::entity_type].
        pub fn set_entity_type<T: Into<String>>(mut self, v: T) -> Self {
            self.entity_type = Some(v.into());
            self
        }

        /// Sets the value of [fill_behavior][Parameter::fill_behavior].
        pub fn set_fill_behavior<T: Into<parameter::FillBehavior>>(mut self, v: T) -> Self {
            self.fill_behavior = Some(v.into());
            self
        }
    }

    /// Defines additional types related to [Parameter].
    pub mod parameter {
        use super::{EventHandler, Fulfillment};

        /// Configuration for how the filling of a parameter should be
        /// handled.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct FillBehavior {
            /// Required. The fulfillment to provide the initial prompt that
            /// the agent can present to the user in order to fill the
            /// parameter.
            pub initial_prompt_fulfillment: Option<Fulfillment>,

            /// The handlers for parameter-level events, used to provide
            /// reprompt for the parameter or transition to a different
            /// page/flow.
            pub reprompt_event_handlers: Option<Vec<EventHandler>>,
        }

        impl FillBehavior {
            pub fn new() -> Self {
                Self::default()
            }

            /// Sets the value of [initial_prompt_fulfillment][FillBehavior::initial_prompt_fulfillment].
            pub fn set_initial_prompt_fulfillment<T: Into<Fulfillment>>(mut self, v: T) -> Self {
                self.initial_prompt_fulfillment = Some(v.into());
                self
            }
        }
    }
}

/// An event handler specifies an event that can be handled during a
/// session.
///
/// When the specified event happens, the following actions are taken in
/// order:
///
/// * If there is a `trigger_fulfillment` associated with the event, it is
///   called.
/// * If there is a `target_page` associated with the event, the session
///   transitions into the specified page.
/// * If there is a `target_flow` associated with the event, the session
///   transitions into the specified flow.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventHandler {
    /// Output only. The unique identifier of this event handler.
    pub name: Option<String>,
    /// Required. The name of the event to handle.
    pub event: Option<String>,
    pub trigger_fulfillment: Option<Fulfillment>,
    pub target_page: Option<String>,
    pub target_flow: Option<String>,
    pub target_playbook: Option<String>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [event][EventHandler::event].
    pub fn set_event<T: Into<String>>(mut self, v: T) -> Self {
        self.event = Some(v.into());
        self
    }

    /// Sets the value of [trigger_fulfillment][EventHandler::trigger_fulfillment].
    pub fn set_trigger_fulfillment<T: Into<Fulfillment>>(mut self, v: T) -> Self {
        self.trigger_fulfillment = Some(v.into());
        self
    }

    /// Sets the value of [target_page][EventHandler::target_page].
    pub fn set_target_page<T: Into<String>>(mut self, v: T) -> Self {
        self.target_page = Some(v.into());
        self
    }
}

/// A transition route specifies an intent that can be matched and/or a data
/// condition that can be evaluated during a session.
///
/// When a specified transition is matched, the following actions are taken
/// in order: call the `trigger_fulfillment`, then transition into the
/// `target_page` or `target_flow`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TransitionRoute {
    /// Output only. The unique identifier of this transition route.
    pub name: Option<String>,

    /// Optional. The description of the transition route.
    pub description: Option<String>,

    /// The unique identifier of an Intent.
    pub intent: Option<String>,

    /// The condition to evaluate against form parameters or session
    /// parameters.
    pub condition: Option<String>,

    pub trigger_fulfillment: Option<Fulfillment>,
    pub target_page: Option<String>,
    pub target_flow: Option<String>,
}

impl TransitionRoute {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [intent][TransitionRoute::intent].
    pub fn set_intent<T: Into<String>>(mut self, v: T) -> Self {
        self.intent = Some(v.into());
        self
    }

    /// Sets the value of [condition][TransitionRoute::condition].
    pub fn set_condition<T: Into<String>>(mut self, v: T) -> Self {
        self.condition = Some(v.into());
        self
    }

    /// Sets the value of [trigger_fulfillment][TransitionRoute::trigger_fulfillment].
    pub fn set_trigger_fulfillment<T: Into<Fulfillment>>(mut self, v: T) -> Self {
        self.trigger_fulfillment = Some(v.into());
        self
    }

    /// Sets the value of [target_page][TransitionRoute::target_page].
    pub fn set_target_page<T: Into<String>>(mut self, v: T) -> Self {
        self.target_page = Some(v.into());
        self
    }

    /// Sets the value of [target_flow][TransitionRoute::target_flow].
    pub fn set_target_flow<T: Into<String>>(mut self, v: T) -> Self {
        self.target_flow = Some(v.into());
        self
    }
}

/// The response of [Pages::list_pages][crate::client::Pages::list_pages].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListPagesResponse {
    pub pages: Option<Vec<Page>>,
    pub next_page_token: Option<String>,
}
