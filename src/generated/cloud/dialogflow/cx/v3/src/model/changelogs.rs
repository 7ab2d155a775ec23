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

/// Changelogs represents a change made to a given agent.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Changelog {
    /// The unique identifier of the changelog.
    pub name: Option<String>,
    /// Email address of the authenticated user.
    pub user_email: Option<String>,
    /// The affected resource display name of the change.
    pub display_name: Option<String>,
    /// The action of the change.
    pub action: Option<String>,
    /// The affected resource type.
    pub r#type: Option<String>,
    /// The affected resource name of the change.
    pub resource: Option<String>,
    /// The timestamp of the change.
    pub create_time: Option<wkt::Timestamp>,
    /// The affected language code of the change.
    pub language_code: Option<String>,
}

/// The response of [Changelogs::list_changelogs][crate::client::Changelogs::list_changelogs].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListChangelogsResponse {
    pub changelogs: Option<Vec<Changelog>>,
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test_case(json!({}); "absent")]
    #[test_case(json!({"changelogs": []}); "empty array")]
    #[test_case(json!({
        "changelogs": [{
            "name": "c",
            "userEmail": "user@example.com",
            "action": "update",
            "type": "Intent",
            "resource": "projects/p/locations/l/agents/a/intents/i",
            "createTime": "2025-02-03T04:05:06Z",
            "languageCode": "en",
        }],
        "nextPageToken": "t",
    }); "present")]
    fn list_changelogs(input: Value) -> TestResult {
        let got = serde_json::from_value::<ListChangelogsResponse>(input.clone())?;
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn changelog_fields() -> TestResult {
        let input = json!({"type": "Flow", "createTime": "2025-01-01T00:00:00Z"});
        let got = serde_json::from_value::<Changelog>(input)?;
        assert_eq!(got.r#type.as_deref(), Some("Flow"));
        assert_eq!(got.create_time, Some(wkt::Timestamp::clamp(1735689600, 0)));
        Ok(())
    }
}
