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

/// Represents a deployment in an environment.
///
/// A deployment happens when a flow version configured to be active in the
/// environment. You can configure running pre-deployment steps, e.g.
/// running validation test cases, experiment auto-rollout, etc.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Deployment {
    /// The name of the deployment.
    pub name: Option<String>,
    /// The name of the flow version for this deployment.
    pub flow_version: Option<String>,
    /// The current state of the deployment, e.g. `RUNNING`.
    pub state: Option<String>,
    /// Result of the deployment.
    pub result: Option<deployment::Result>,
    /// Start time of this deployment.
    pub start_time: Option<wkt::Timestamp>,
    /// End time of this deployment.
    pub end_time: Option<wkt::Timestamp>,
}

/// Defines additional types related to [Deployment].
pub mod deployment {
    /// Result of the deployment.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Result {
        /// Results of test cases running before the deployment.
        pub deployment_test_results: Option<Vec<String>>,
        /// The name of the experiment triggered by this deployment.
        pub experiment: Option<String>,
    }
}

/// The response of [Deployments::list_deployments][crate::client::Deployments::list_deployments].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDeploymentsResponse {
    pub deployments: Option<Vec<Deployment>>,
    pub next_page_token: Option<String>,
}
