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

use crate::model::NluSettings;

/// Represents a version of a flow.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Version {
    /// Format: `projects/{p}/locations/{l}/agents/{a}/flows/{f}/versions/{v}`.
    /// Version ID is a self-increasing number generated by Dialogflow upon
    /// version creation.
    pub name: Option<String>,

    /// Required. The human-readable name of the version. Limit of 64
    /// characters.
    pub display_name: Option<String>,

    /// The description of the version.
    pub description: Option<String>,

    /// Output only. The NLU settings of the flow at version creation.
    pub nlu_settings: Option<NluSettings>,

    /// Output only. Create time of the version.
    pub create_time: Option<wkt::Timestamp>,

    /// Output only. The state of this version, e.g. `SUCCEEDED`.
    pub state: Option<String>,
}

impl Version {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Version::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][Version::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [description][Version::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// Metadata associated with the long running operation for
/// [Versions::create_version][crate::client::Versions::create_version].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateVersionOperationMetadata {
    /// Name of the created version.
    pub version: Option<String>,
}

/// The response of [Versions::list_versions][crate::client::Versions::list_versions].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListVersionsResponse {
    pub versions: Option<Vec<Version>>,
    pub next_page_token: Option<String>,
}

/// The request body for [Versions::load_version][crate::client::Versions::load_version].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LoadVersionRequest {
    /// This field is used to prevent accidental overwrite of other agent
    /// resources, which can potentially impact other flow's behavior.
    pub allow_override_agent_resources: Option<bool>,
}

impl LoadVersionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [allow_override_agent_resources][LoadVersionRequest::allow_override_agent_resources].
    pub fn set_allow_override_agent_resources<T: Into<bool>>(mut self, v: T) -> Self {
        self.allow_override_agent_resources = Some(v.into());
        self
    }
}

/// The request body for [Versions::compare_versions][crate::client::Versions::compare_versions].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CompareVersionsRequest {
    /// Required. Name of the target flow version to compare with the base
    /// version.
    pub target_version: Option<String>,

    /// The language to compare the flow versions for.
    pub language_code: Option<String>,
}

impl CompareVersionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [target_version][CompareVersionsRequest::target_version].
    pub fn set_target_version<T: Into<String>>(mut self, v: T) -> Self {
        self.target_version = Some(v.into());
        self
    }

    /// Sets the value of [language_code][CompareVersionsRequest::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }
}

/// The response message for
/// [Versions::compare_versions][crate::client::Versions::compare_versions].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CompareVersionsResponse {
    /// JSON representation of the base version content.
    pub base_version_content_json: Option<String>,
    /// JSON representation of the target version content.
    pub target_version_content_json: Option<String>,
    /// The timestamp when the two version compares.
    pub compare_time: Option<wkt::Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test_case(json!({"name": "v"}); "absent")]
    #[test_case(json!({
        "name": "v",
        "displayName": "release",
        "nluSettings": {"modelType": "MODEL_TYPE_STANDARD"},
        "createTime": "2025-05-06T07:08:09Z",
        "state": "SUCCEEDED",
    }); "present")]
    fn version(input: Value) -> TestResult {
        let got = serde_json::from_value::<Version>(input.clone())?;
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test_case(json!({}); "absent")]
    #[test_case(json!({"versions": []}); "empty array")]
    #[test_case(json!({"versions": [{"name": "v1", "createTime": "2025-01-01T00:00:00Z"}], "nextPageToken": "t"}); "present")]
    fn list_versions(input: Value) -> TestResult {
        let got = serde_json::from_value::<ListVersionsResponse>(input.clone())?;
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test_case(json!({}), None; "absent")]
    #[test_case(
        json!({"baseVersionContentJson": "{}", "targetVersionContentJson": "{\"a\":1}", "compareTime": "2025-01-01T00:00:00Z"}),
        Some(wkt::Timestamp::clamp(1735689600, 0));
        "present"
    )]
    fn compare_versions_response(input: Value, want: Option<wkt::Timestamp>) -> TestResult {
        let got = serde_json::from_value::<CompareVersionsResponse>(input.clone())?;
        assert_eq!(got.compare_time, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }
}
