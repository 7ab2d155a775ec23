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

/// Represents an experiment in an environment.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Experiment {
    /// The name of the experiment, in the
    /// `projects/{p}/locations/{l}/agents/{a}/environments/{e}/experiments/{x}`
    /// format.
    pub name: Option<String>,

    /// Required. The human-readable name of the experiment, unique within
    /// the environment.
    pub display_name: Option<String>,

    /// The human-readable description of the experiment.
    pub description: Option<String>,

    /// The current state of the experiment, e.g. `DRAFT` or `RUNNING`.
    pub state: Option<String>,

    /// The definition of the experiment.
    pub definition: Option<experiment::Definition>,

    /// The configuration for auto rollout.
    pub rollout_config: Option<RolloutConfig>,

    /// State of the auto rollout process.
    pub rollout_state: Option<RolloutState>,

    /// The reason why rollout has failed.
    pub rollout_failure_reason: Option<String>,

    /// Inference result of the experiment.
    pub result: Option<experiment::Result>,

    /// Creation time of this experiment.
    pub create_time: Option<wkt::Timestamp>,

    /// Start time of this experiment.
    pub start_time: Option<wkt::Timestamp>,

    /// End time of this experiment.
    pub end_time: Option<wkt::Timestamp>,

    /// Last update time of this experiment.
    pub last_update_time: Option<wkt::Timestamp>,

    /// Maximum number of days to run the experiment/rollout.
    pub experiment_length: Option<wkt::Duration>,

    /// The history of updates to the experiment variants.
    pub variants_history: Option<Vec<VariantsHistory>>,
}

impl Experiment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Experiment::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Experiment::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [description][Experiment::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [definition][Experiment::definition].
    pub fn set_definition<T: Into<experiment::Definition>>(mut self, v: T) -> Self {
        self.definition = Some(v.into());
        self
    }

    /// Sets the value of [rollout_config][Experiment::rollout_config].
    pub fn set_rollout_config<T: Into<RolloutConfig>>(mut self, v: T) -> Self {
        self.rollout_config = Some(v.into());
        self
    }

    /// Sets the value of [experiment_length][Experiment::experiment_length].
    pub fn set_experiment_length<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.experiment_length = Some(v.into());
        self
    }
}

/// Defines additional types related to [Experiment].
pub mod experiment {
    use crate::model::VersionVariants;

    /// Definition of the experiment.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Definition {
        /// The condition defines which subset of sessions are selected for
        /// this experiment.
        pub condition: Option<String>,

        /// The flow versions as the variants of this experiment.
        pub version_variants: Option<VersionVariants>,
    }

    impl Definition {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [condition][Definition::condition].
        pub fn set_condition<T: Into<String>>(mut self, v: T) -> Self {
            self.condition = Some(v.into());
            self
        }

        /// Sets the value of [version_variants][Definition::version_variants].
        pub fn set_version_variants<T: Into<VersionVariants>>(mut self, v: T) -> Self {
            self.version_variants = Some(v.into());
            self
        }
    }

    /// The inference result which includes an objective metric to optimize
    /// and the confidence interval.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Result {
        /// Version variants and metrics.
        pub version_metrics: Option<Vec<result::VersionMetrics>>,

        /// The last time the experiment's stats data was updated.
        pub last_update_time: Option<wkt::Timestamp>,
    }

    /// Defines additional types related to [Result].
    pub mod result {
        /// Version variant and associated metrics.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct VersionMetrics {
            /// The name of the flow Version.
            pub version: Option<String>,
            /// The metrics and corresponding confidence intervals in the
            /// inference result.
            pub metrics: Option<Vec<Metric>>,
            /// Number of sessions that were allocated to this version.
            pub session_count: Option<i32>,
        }

        /// Metric and corresponding confidence intervals.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct Metric {
            /// Ratio-based metric type, e.g. `CONTAINED_SESSION_NO_CALLBACK_RATE`.
            pub r#type: Option<String>,
            /// Count-based metric type, e.g. `TOTAL_NO_MATCH_COUNT`.
            pub count_type: Option<String>,
            /// Ratio value of a metric.
            pub ratio: Option<f64>,
            /// Count value of a metric.
            pub count: Option<f64>,
            /// The probability that the treatment is better than all other
            /// treatments in the experiment.
            pub confidence_interval: Option<ConfidenceInterval>,
        }

        /// A confidence interval is a range of possible values for the
        /// experiment objective you are trying to measure.
        #[serde_with::serde_as]
        #[serde_with::skip_serializing_none]
        #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default, rename_all = "camelCase")]
        #[non_exhaustive]
        pub struct ConfidenceInterval {
            /// The confidence level used to construct the interval, i.e.
            /// there is X% chance that the true value is within this
            /// interval.
            pub confidence_level: Option<f64>,
            /// The percent change between an experiment metric's value and
            /// the value for its control.
            pub ratio: Option<f64>,
            /// Lower bound of the interval.
            pub lower_bound: Option<f64>,
            /// Upper bound of the interval.
            pub upper_bound: Option<f64>,
        }
    }
}

/// A list of flow version variants.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VersionVariants {
    /// A list of flow version variants.
    pub variants: Option<Vec<version_variants::Variant>>,
}

impl VersionVariants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [variants][VersionVariants::variants].
    pub fn set_variants<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<version_variants::Variant>,
    {
        self.variants = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Defines additional types related to [VersionVariants].
pub mod version_variants {
    /// A single flow version with specified traffic allocation.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Variant {
        /// The name of the flow version.
        pub version: Option<String>,
        /// Percentage of the traffic which should be routed to this version
        /// of flow. Traffic allocation for a single flow must sum up to 1.0.
        pub traffic_allocation: Option<f32>,
        /// Whether the variant is for the control group.
        pub is_control_group: Option<bool>,
    }

    impl Variant {
        pub fn new() -> Self {
            Self::default()
        }

        /// Sets the value of [version][Variant::version].
        pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
            self.version = Some(v.into());
            self
        }

        /// Sets the value of [traffic_allocation][Variant::traffic_allocation].
        pub fn set_traffic_allocation<T: Into<f32>>(mut self, v: T) -> Self {
            self.traffic_allocation = Some(v.into());
            self
        }

        /// Sets the value of [is_control_group][Variant::is_control_group].
        pub fn set_is_control_group<T: Into<bool>>(mut self, v: T) -> Self {
            self.is_control_group = Some(v.into());
            self
        }
    }
}

/// The configuration for auto rollout.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RolloutConfig {
    /// Steps to roll out a flow version. Steps should be sorted by
    /// percentage in ascending order.
    pub rollout_steps: Option<Vec<rollout_config::RolloutStep>>,

    /// The conditions that are used to evaluate the success of a rollout
    /// step.
    pub rollout_condition: Option<String>,

    /// The conditions that are used to evaluate the failure of a rollout
    /// step.
    pub failure_condition: Option<String>,
}

/// Defines additional types related to [RolloutConfig].
pub mod rollout_config {
    /// A single rollout step with specified traffic allocation.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct RolloutStep {
        /// The name of the rollout step.
        pub display_name: Option<String>,
        /// The percentage of traffic allocated to the flow version of this
        /// rollout step, in the `(0, 100]` range.
        pub traffic_percent: Option<i32>,
        /// The minimum time that this step should last.
        pub min_duration: Option<wkt::Duration>,
    }
}

/// State of the auto-rollout process.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RolloutState {
    /// Display name of the current auto rollout step.
    pub step: Option<String>,
    /// Index of the current step in the auto rollout steps list.
    pub step_index: Option<i32>,
    /// Start time of the current step.
    pub start_time: Option<wkt::Timestamp>,
}

/// The history of variants update.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VariantsHistory {
    /// The flow versions as the variants.
    pub version_variants: Option<VersionVariants>,
    /// Update time of the variants.
    pub update_time: Option<wkt::Timestamp>,
}

/// The response of [Experiments::list_experiments][crate::client::Experiments::list_experiments].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListExperimentsResponse {
    pub experiments: Option<Vec<Experiment>>,
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test_case(json!({"name": "x"}); "absent")]
    #[test_case(json!({"name": "x", "variantsHistory": []}); "empty array")]
    #[test_case(json!({
        "name": "x",
        "state": "RUNNING",
        "definition": {
            "condition": "true",
            "versionVariants": {"variants": [
                {"version": "v1", "trafficAllocation": 0.5, "isControlGroup": true},
                {"version": "v2", "trafficAllocation": 0.5},
            ]},
        },
        "rolloutConfig": {"rolloutSteps": [
            {"displayName": "s1", "trafficPercent": 10, "minDuration": "3600s"},
            {"displayName": "s2", "trafficPercent": 50, "minDuration": "0.5s"},
        ]},
        "rolloutState": {"step": "s1", "stepIndex": 0, "startTime": "2025-01-01T00:00:00Z"},
        "result": {
            "versionMetrics": [{
                "version": "v1",
                "sessionCount": 12,
                "metrics": [{
                    "type": "CONTAINED_SESSION_NO_CALLBACK_RATE",
                    "ratio": 0.25,
                    "confidenceInterval": {"confidenceLevel": 0.95, "lowerBound": 0.125, "upperBound": 0.375},
                }],
            }],
            "lastUpdateTime": "2025-01-02T03:04:05Z",
        },
        "createTime": "2024-12-31T00:00:00Z",
        "startTime": "2025-01-01T00:00:00Z",
        "endTime": "2025-01-15T00:00:00Z",
        "lastUpdateTime": "2025-01-02T03:04:05Z",
        "experimentLength": "1209600s",
        "variantsHistory": [{
            "versionVariants": {"variants": []},
            "updateTime": "2025-01-01T00:00:00Z",
        }],
    }); "full")]
    fn experiment(input: Value) -> TestResult {
        let got = serde_json::from_value::<Experiment>(input.clone())?;
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn nested_times() -> TestResult {
        let input = json!({
            "rolloutConfig": {"rolloutSteps": [{"minDuration": "90.5s"}]},
            "result": {"lastUpdateTime": "2025-01-01T00:00:00Z"},
        });
        let got = serde_json::from_value::<Experiment>(input)?;
        let steps = got
            .rollout_config
            .and_then(|c| c.rollout_steps)
            .unwrap_or_default();
        assert_eq!(steps.len(), 1, "{steps:?}");
        assert_eq!(steps[0].min_duration, Some(wkt::Duration::clamp(90, 500_000_000)));
        let result = got.result.unwrap_or_default();
        assert_eq!(result.last_update_time, Some(wkt::Timestamp::clamp(1735689600, 0)));
        assert!(got.last_update_time.is_none());
        Ok(())
    }
}
