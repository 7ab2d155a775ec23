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

use crate::model::Webhook;

/// Represents an environment for an agent.
///
/// You can create multiple versions of your agent and publish them to
/// separate environments. When you edit an agent, you are editing the draft
/// agent. At any point, you can save the draft agent as an agent version,
/// which is an immutable snapshot of your agent.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Environment {
    /// The name of the environment, in the
    /// `projects/{p}/locations/{l}/agents/{a}/environments/{e}` format.
    pub name: Option<String>,

    /// Required. The human-readable name of the environment, unique within
    /// the agent.
    pub display_name: Option<String>,

    /// The human-readable description of the environment.
    pub description: Option<String>,

    /// A list of configurations for flow versions. You should include
    /// version configs for all flows that are reachable from the agent's
    /// start flow.
    pub version_configs: Option<Vec<environment::VersionConfig>>,

    /// Output only. Update time of this environment.
    pub update_time: Option<wkt::Timestamp>,

    /// The test cases config for continuous tests of this environment.
    pub test_cases_config: Option<environment::TestCasesConfig>,

    /// The webhook configuration for this environment.
    pub webhook_config: Option<environment::WebhookConfig>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Environment::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Environment::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [description][Environment::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [version_configs][Environment::version_configs].
    pub fn set_version_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<environment::VersionConfig>,
    {
        self.version_configs = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [update_time][Environment::update_time].
    pub fn set_update_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [test_cases_config][Environment::test_cases_config].
    pub fn set_test_cases_config<T: Into<environment::TestCasesConfig>>(mut self, v: T) -> Self {
        self.test_cases_config = Some(v.into());
        self
    }

    /// Sets the value of [webhook_config][Environment::webhook_config].
    pub fn set_webhook_config<T: Into<environment::WebhookConfig>>(mut self, v: T) -> Self {
        self.webhook_config = Some(v.into());
        self
    }
}

/// Defines additional types related to [Environment].
pub mod environment {
    use super::*;

    /// Configuration for the version.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct VersionConfig {
        /// Required. Both flow and playbook versions are supported.
        pub version: Option<String>,
    }

    impl VersionConfig {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [version][VersionConfig::version].
        pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
            self.version = Some(v.into());
            self
        }
    }

    /// The configuration for continuous tests.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct TestCasesConfig {
        /// A list of test case names to run.
        pub test_cases: Option<Vec<String>>,

        /// Whether to run test cases in
        /// [TestCasesConfig.test_cases][TestCasesConfig::test_cases]
        /// periodically. Default false.
        pub enable_continuous_run: Option<bool>,

        /// Whether to run test cases before deploying a flow version to the
        /// environment. Default false.
        pub enable_predeployment_run: Option<bool>,
    }

    impl TestCasesConfig {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [test_cases][TestCasesConfig::test_cases].
        pub fn set_test_cases<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.test_cases = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }

        /// Sets the value of [enable_continuous_run][TestCasesConfig::enable_continuous_run].
        pub fn set_enable_continuous_run<T: Into<bool>>(mut self, v: T) -> Self {
            self.enable_continuous_run = Some(v.into());
            self
        }
    }

    /// Configuration for webhooks.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct WebhookConfig {
        /// The list of webhooks to override for the agent environment. The
        /// webhook must exist in the agent. You can override fields in
        /// `generic_web_service` and `service_directory`.
        pub webhook_overrides: Option<Vec<Webhook>>,
    }

    impl WebhookConfig {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [webhook_overrides][WebhookConfig::webhook_overrides].
        pub fn set_webhook_overrides<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<Webhook>,
        {
            self.webhook_overrides = Some(v.into_iter().map(|i| i.into()).collect());
            self
        }
    }
}

/// The response of
/// [Environments::list_environments][crate::client::Environments::list_environments].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListEnvironmentsResponse {
    pub environments: Option<Vec<Environment>>,
    pub next_page_token: Option<String>,
}

/// The response of
/// [Environments::lookup_environment_history][crate::client::Environments::lookup_environment_history].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LookupEnvironmentHistoryResponse {
    /// Represents a list of snapshots for an environment. Time of the
    /// snapshots is stored in `update_time`.
    pub environments: Option<Vec<Environment>>,
    pub next_page_token: Option<String>,
}

/// Represents a result from running a test case in an agent environment.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContinuousTestResult {
    /// The resource name for the continuous test result.
    pub name: Option<String>,
    /// The result of this continuous test run, e.g. `PASSED`.
    pub result: Option<String>,
    /// A list of individual test case results names in this continuous test
    /// run.
    pub test_case_results: Option<Vec<String>>,
    /// Time when the continuous testing run starts.
    pub run_time: Option<wkt::Timestamp>,
}

/// The request body for
/// [Environments::run_continuous_test][crate::client::Environments::run_continuous_test].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunContinuousTestRequest {}

impl RunContinuousTestRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The response message for a continuous test run.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunContinuousTestResponse {
    /// The result for a continuous test run.
    pub continuous_test_result: Option<ContinuousTestResult>,
}

/// The response of
/// [Environments::list_continuous_test_results][crate::client::Environments::list_continuous_test_results].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListContinuousTestResultsResponse {
    pub continuous_test_results: Option<Vec<ContinuousTestResult>>,
    pub next_page_token: Option<String>,
}

/// The request body for [Environments::deploy_flow][crate::client::Environments::deploy_flow].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeployFlowRequest {
    /// Required. The flow version to deploy, in the
    /// `projects/{p}/locations/{l}/agents/{a}/flows/{f}/versions/{v}`
    /// format.
    pub flow_version: Option<String>,
}

impl DeployFlowRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [flow_version][DeployFlowRequest::flow_version].
    pub fn set_flow_version<T: Into<String>>(mut self, v: T) -> Self {
        self.flow_version = Some(v.into());
        self
    }
}

/// The response message for a flow deployment.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeployFlowResponse {
    /// The updated environment where the flow is deployed.
    pub environment: Option<Environment>,
    /// The name of the flow version deployment.
    pub deployment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::webhook::GenericWebService;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn webhook_overrides() -> TestResult {
        let input = Environment::new()
            .set_display_name("staging")
            .set_webhook_config(environment::WebhookConfig::new().set_webhook_overrides([
                Webhook::new().set_name("w1").set_generic_web_service(
                    GenericWebService::new()
                        .set_uri("https://example.com/a")
                        .set_allowed_ca_certs([
                            bytes::Bytes::from_static(&[1, 2, 3]),
                            bytes::Bytes::from_static(b"f"),
                        ]),
                ),
                Webhook::new().set_name("w2"),
            ]));
        let got = serde_json::to_value(&input)?;
        let want = json!({
            "displayName": "staging",
            "webhookConfig": {"webhookOverrides": [
                {"name": "w1", "genericWebService": {
                    "uri": "https://example.com/a",
                    "allowedCaCerts": ["AQID", "Zg=="],
                }},
                {"name": "w2"},
            ]},
        });
        assert_eq!(got, want);
        let roundtrip = serde_json::from_value::<Environment>(got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test]
    fn absent_fields() -> TestResult {
        let input = json!({"name": "e", "versionConfigs": []});
        let got = serde_json::from_value::<Environment>(input.clone())?;
        assert_eq!(got.version_configs, Some(Vec::new()));
        assert!(got.webhook_config.is_none(), "{got:?}");
        assert!(got.update_time.is_none(), "{got:?}");
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn deploy_flow_response() -> TestResult {
        let input = json!({
            "environment": {"name": "e", "updateTime": "2025-01-01T00:00:00Z"},
            "deployment": "d",
        });
        let got = serde_json::from_value::<DeployFlowResponse>(input)?;
        let environment = got.environment.unwrap_or_default();
        assert_eq!(
            environment.update_time,
            Some(wkt::Timestamp::clamp(1735689600, 0))
        );
        assert_eq!(got.deployment.as_deref(), Some("d"));
        Ok(())
    }
}
