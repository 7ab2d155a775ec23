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

/// Represents a test case.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestCase {
    /// The unique identifier of the test case, in the
    /// `projects/{p}/locations/{l}/agents/{a}/testCases/{t}` format.
    pub name: Option<String>,

    /// Tags are short descriptions that users may apply to test cases for
    /// organizational and filtering purposes. Each tag should start with "#".
    pub tags: Option<Vec<String>>,

    /// Required. The human-readable name of the test case, unique within the
    /// agent.
    pub display_name: Option<String>,

    /// Additional freeform notes about the test case.
    pub notes: Option<String>,

    /// Config for the test case.
    pub test_config: Option<TestConfig>,

    /// The conversation turns uttered when the test case was created, in
    /// chronological order.
    pub test_case_conversation_turns: Option<Vec<ConversationTurn>>,

    /// Output only. When the test was created.
    pub creation_time: Option<wkt::Timestamp>,

    /// The latest test result.
    pub last_test_result: Option<TestCaseResult>,
}

impl TestCase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][TestCase::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [tags][TestCase::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [display_name][TestCase::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [notes][TestCase::notes].
    pub fn set_notes<T: Into<String>>(mut self, v: T) -> Self {
        self.notes = Some(v.into());
        self
    }

    /// Sets the value of [test_config][TestCase::test_config].
    pub fn set_test_config<T: Into<TestConfig>>(mut self, v: T) -> Self {
        self.test_config = Some(v.into());
        self
    }

    /// Sets the value of [test_case_conversation_turns][TestCase::test_case_conversation_turns].
    pub fn set_test_case_conversation_turns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ConversationTurn>,
    {
        self.test_case_conversation_turns = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Represents a result from running a test case in an agent environment.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestCaseResult {
    /// The resource name for the test case result.
    pub name: Option<String>,

    /// Environment where the test was run. If not set, it indicates the
    /// draft environment.
    pub environment: Option<String>,

    /// The conversation turns uttered during the test case replay in
    /// chronological order.
    pub conversation_turns: Option<Vec<ConversationTurn>>,

    /// Whether the test case passed in the agent environment, e.g.
    /// `PASSED` or `FAILED`.
    pub test_result: Option<String>,

    /// The time that the test was run.
    pub test_time: Option<wkt::Timestamp>,
}

/// Represents configurations for a test case.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestConfig {
    /// Session parameters to be compared when calculating differences.
    pub tracking_parameters: Option<Vec<String>>,

    /// Flow name to start the test case with.
    pub flow: Option<String>,

    /// The page to start the test case with.
    pub page: Option<String>,
}

impl TestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [tracking_parameters][TestConfig::tracking_parameters].
    pub fn set_tracking_parameters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tracking_parameters = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [flow][TestConfig::flow].
    pub fn set_flow<T: Into<String>>(mut self, v: T) -> Self {
        self.flow = Some(v.into());
        self
    }

    /// Sets the value of [page][TestConfig::page].
    pub fn set_page<T: Into<String>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }
}

/// One interaction between a human and virtual agent. The human provides
/// some input and the virtual agent provides a response.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConversationTurn {
    /// The user input.
    pub user_input: Option<conversation_turn::UserInput>,

    /// The virtual agent output.
    pub virtual_agent_output: Option<conversation_turn::VirtualAgentOutput>,
}

impl ConversationTurn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [user_input][ConversationTurn::user_input].
    pub fn set_user_input<T: Into<conversation_turn::UserInput>>(mut self, v: T) -> Self {
        self.user_input = Some(v.into());
        self
    }

    /// Sets the value of [virtual_agent_output][ConversationTurn::virtual_agent_output].
    pub fn set_virtual_agent_output<T: Into<conversation_turn::VirtualAgentOutput>>(
        mut self,
        v: T,
    ) -> Self {
        self.virtual_agent_output = Some(v.into());
        self
    }
}

/// Defines additional types related to [ConversationTurn].
pub mod conversation_turn {
    use crate::model::response_message;
    use crate::model::{Intent, Page, QueryInput};

    /// The input from the human user.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct UserInput {
        /// Supports text input, event input, dtmf input in the test
        /// framework.
        pub input: Option<QueryInput>,

        /// Parameters that need to be injected into the conversation during
        /// intent detection.
        pub injected_parameters: Option<wkt::Struct>,

        /// If webhooks should be allowed to trigger in response to the user
        /// utterance.
        pub is_webhook_enabled: Option<bool>,

        /// Whether sentiment analysis is enabled.
        pub enable_sentiment_analysis: Option<bool>,
    }

    impl UserInput {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [input][UserInput::input].
        pub fn set_input<T: Into<QueryInput>>(mut self, v: T) -> Self {
            self.input = Some(v.into());
            self
        }

        /// Sets the value of [injected_parameters][UserInput::injected_parameters].
        pub fn set_injected_parameters<T: Into<wkt::Struct>>(mut self, v: T) -> Self {
            self.injected_parameters = Some(v.into());
            self
        }

        /// Sets the value of [is_webhook_enabled][UserInput::is_webhook_enabled].
        pub fn set_is_webhook_enabled<T: Into<bool>>(mut self, v: T) -> Self {
            self.is_webhook_enabled = Some(v.into());
            self
        }
    }

    /// The output from the virtual agent.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct VirtualAgentOutput {
        /// The session parameters available to the bot at this point.
        pub session_parameters: Option<wkt::Struct>,

        /// Output only. If this is part of a result conversation turn, the
        /// list of differences between the original run and the replay.
        pub differences: Option<Vec<crate::model::TestRunDifference>>,

        /// Required. Input only. The diagnostic info output for the turn.
        pub diagnostic_info: Option<wkt::Struct>,

        /// The Intent that triggered the response.
        pub triggered_intent: Option<Intent>,

        /// The Page on which the utterance was spoken.
        pub current_page: Option<Page>,

        /// The text responses from the agent for the turn.
        pub text_responses: Option<Vec<response_message::Text>>,

        /// Response error from fulfillment.
        pub status: Option<gax::error::rpc::Status>,
    }

    impl VirtualAgentOutput {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [session_parameters][VirtualAgentOutput::session_parameters].
        pub fn set_session_parameters<T: Into<wkt::Struct>>(mut self, v: T) -> Self {
            self.session_parameters = Some(v.into());
            self
        }

        /// Sets the value of [triggered_intent][VirtualAgentOutput::triggered_intent].
        pub fn set_triggered_intent<T: Into<Intent>>(mut self, v: T) -> Self {
            self.triggered_intent = Some(v.into());
            self
        }

        /// Sets the value of [current_page][VirtualAgentOutput::current_page].
        pub fn set_current_page<T: Into<Page>>(mut self, v: T) -> Self {
            self.current_page = Some(v.into());
            self
        }

        /// Sets the value of [text_responses][VirtualAgentOutput::text_responses].
        pub fn set_text_responses<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<response_message::Text>,
        {
            self.text_responses = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }
    }
}

/// The description of differences between original and replayed agent
/// output.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestRunDifference {
    /// The type of diff, e.g. `INTENT` or `PAGE`.
    pub r#type: Option<String>,

    /// A human readable description of the diff, showing the actual output
    /// vs expected output.
    pub description: Option<String>,
}

/// The request body for
/// [TestCases::batch_delete_test_cases][crate::client::TestCases::batch_delete_test_cases].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchDeleteTestCasesRequest {
    /// Required. Format of test case names:
    /// `projects/{p}/locations/{l}/agents/{a}/testCases/{t}`.
    pub names: Option<Vec<String>>,
}

impl BatchDeleteTestCasesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [names][BatchDeleteTestCasesRequest::names].
    pub fn set_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.names = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The request body for [TestCases::run_test_case][crate::client::TestCases::run_test_case].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunTestCaseRequest {
    /// Optional. Environment name. If not set, draft environment is assumed.
    pub environment: Option<String>,
}

impl RunTestCaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [environment][RunTestCaseRequest::environment].
    pub fn set_environment<T: Into<String>>(mut self, v: T) -> Self {
        self.environment = Some(v.into());
        self
    }
}

/// The response message for a test case run, found in the operation
/// response.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunTestCaseResponse {
    /// The result.
    pub result: Option<TestCaseResult>,
}

/// The request body for
/// [TestCases::batch_run_test_cases][crate::client::TestCases::batch_run_test_cases].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchRunTestCasesRequest {
    /// Optional. If not set, draft environment is assumed.
    pub environment: Option<String>,

    /// Required. Format:
    /// `projects/{p}/locations/{l}/agents/{a}/testCases/{t}`.
    pub test_cases: Option<Vec<String>>,
}

impl BatchRunTestCasesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [environment][BatchRunTestCasesRequest::environment].
    pub fn set_environment<T: Into<String>>(mut self, v: T) -> Self {
        self.environment = Some(v.into());
        self
    }

    /// Sets the value of [test_cases][BatchRunTestCasesRequest::test_cases].
    pub fn set_test_cases<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.test_cases = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The response message for a batch test case run.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchRunTestCasesResponse {
    /// The test case results. The detailed conversation turns are empty in
    /// this response.
    pub results: Option<Vec<TestCaseResult>>,
}

/// The response message for
/// [TestCases::calculate_coverage][crate::client::TestCases::calculate_coverage].
///
/// The coverage fields use a loose JSON representation, their shape depends
/// on the requested coverage type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CalculateCoverageResponse {
    /// The agent to calculate coverage for.
    pub agent: Option<String>,

    /// Intent coverage.
    pub intent_coverage: Option<wkt::Struct>,

    /// Transition (between pages) coverage.
    pub transition_coverage: Option<wkt::Struct>,

    /// Transition route group coverage.
    pub route_group_coverage: Option<wkt::Struct>,
}

/// The request body for
/// [TestCases::import_test_cases][crate::client::TestCases::import_test_cases].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportTestCasesRequest {
    /// The Google Cloud Storage URI to import test cases from.
    pub gcs_uri: Option<String>,

    /// Uncompressed raw byte content for test cases.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub content: Option<bytes::Bytes>,
}

impl ImportTestCasesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [gcs_uri][ImportTestCasesRequest::gcs_uri].
    pub fn set_gcs_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_uri = Some(v.into());
        self
    }

    /// Sets the value of [content][ImportTestCasesRequest::content].
    pub fn set_content<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.content = Some(v.into());
        self
    }
}

/// The response message for a test cases import.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportTestCasesResponse {
    /// The unique identifiers of the new test cases.
    pub names: Option<Vec<String>>,
}

/// The request body for
/// [TestCases::export_test_cases][crate::client::TestCases::export_test_cases].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportTestCasesRequest {
    /// The Google Cloud Storage URI to export the test cases to.
    pub gcs_uri: Option<String>,

    /// The data format of the exported test cases, e.g. `BLOB` or
    /// `JSON`.
    pub data_format: Option<String>,

    /// The filter expression used to filter exported test cases.
    pub filter: Option<String>,
}

impl ExportTestCasesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [gcs_uri][ExportTestCasesRequest::gcs_uri].
    pub fn set_gcs_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_uri = Some(v.into());
        self
    }

    /// Sets the value of [data_format][ExportTestCasesRequest::data_format].
    pub fn set_data_format<T: Into<String>>(mut self, v: T) -> Self {
        self.data_format = Some(v.into());
        self
    }

    /// Sets the value of [filter][ExportTestCasesRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }
}

/// The response message for a test cases export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportTestCasesResponse {
    /// The exported test cases, in a Google Cloud Storage object.
    pub gcs_uri: Option<String>,

    /// Uncompressed raw byte content for test cases.
    #[serde_as(as = "Option<wkt::internal::Base64>")]
    pub content: Option<bytes::Bytes>,
}

/// The response of [TestCases::list_test_cases][crate::client::TestCases::list_test_cases].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTestCasesResponse {
    pub test_cases: Option<Vec<TestCase>>,
    pub next_page_token: Option<String>,
}

/// The response of
/// [TestCases::list_test_case_results][crate::client::TestCases::list_test_case_results].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTestCaseResultsResponse {
    pub test_case_results: Option<Vec<TestCaseResult>>,
    pub next_page_token: Option<String>,
}
