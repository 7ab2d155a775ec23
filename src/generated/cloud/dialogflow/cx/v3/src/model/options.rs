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

//! Optional query parameters.
//!
//! Each method accepts the options bag with the parameters the service
//! supports for it. Only the parameters set by the application are sent.

/// Options for list methods that only paginate.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOptions {
    /// The maximum number of items to return in a single page.
    pub page_size: Option<i32>,

    /// The `next_page_token` value returned from a previous list request.
    pub page_token: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [page_size][ListOptions::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][ListOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

/// Options for list methods that paginate and filter.
///
/// # Example
/// ```
/// # use dialogflow_cx_v3::model::FilteredListOptions;
/// let options = FilteredListOptions::new()
///     .set_filter("action=\"update\"")
///     .set_page_size(50)
///     .set_page_token("next-page");
/// assert_eq!(options.page_size, Some(50));
/// ```
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilteredListOptions {
    /// A filter expression, the syntax depends on the method.
    pub filter: Option<String>,
    /// The maximum number of items to return in a single page.
    pub page_size: Option<i32>,
    /// The `next_page_token` value returned from a previous list request.
    pub page_token: Option<String>,
}

impl FilteredListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [filter][FilteredListOptions::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [page_size][FilteredListOptions::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][FilteredListOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

/// Options for list methods over localized resources.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocalizedListOptions {
    /// The language of the returned fields. The agent's default language is
    /// used when not set.
    pub language_code: Option<String>,
    /// The maximum number of items to return in a single page.
    pub page_size: Option<i32>,
    /// The `next_page_token` value returned from a previous list request.
    pub page_token: Option<String>,
}

impl LocalizedListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language_code][LocalizedListOptions::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }

    /// Sets the value of [page_size][LocalizedListOptions::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][LocalizedListOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

/// Options for [Intents::list_intents][crate::client::Intents::list_intents].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListIntentsOptions {
    /// The language of the returned fields. The agent's default language is
    /// used when not set.
    pub language_code: Option<String>,
    /// How much of each intent to return.
    pub intent_view: Option<IntentView>,
    /// The maximum number of items to return in a single page.
    pub page_size: Option<i32>,
    /// The `next_page_token` value returned from a previous list request.
    pub page_token: Option<String>,
}

impl ListIntentsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language_code][ListIntentsOptions::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }

    /// Sets the value of [intent_view][ListIntentsOptions::intent_view].
    pub fn set_intent_view<T: Into<IntentView>>(mut self, v: T) -> Self {
        self.intent_view = Some(v.into());
        self
    }

    /// Sets the value of [page_size][ListIntentsOptions::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][ListIntentsOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

/// Options for [TestCases::list_test_cases][crate::client::TestCases::list_test_cases].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTestCasesOptions {
    /// The maximum number of items to return in a single page.
    pub page_size: Option<i32>,
    /// The `next_page_token` value returned from a previous list request.
    pub page_token: Option<String>,
    /// How much of each test case to return.
    pub view: Option<TestCaseView>,
}

impl ListTestCasesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [page_size][ListTestCasesOptions::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][ListTestCasesOptions::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sets the value of [view][ListTestCasesOptions::view].
    pub fn set_view<T: Into<TestCaseView>>(mut self, v: T) -> Self {
        self.view = Some(v.into());
        self
    }
}

/// Options for methods on localized resources.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LanguageOptions {
    /// The language of the localized fields, in the request or in the
    /// response. The agent's default language is used when not set.
    pub language_code: Option<String>,
}

impl LanguageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language_code][LanguageOptions::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }
}

/// Options for update methods.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateOptions {
    /// The fields to update. Some methods update all fields when not set.
    pub update_mask: Option<wkt::FieldMask>,
}

impl UpdateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [update_mask][UpdateOptions::update_mask].
    ///
    /// # Example
    /// ```
    /// # use dialogflow_cx_v3::model::UpdateOptions;
    /// let options = UpdateOptions::new()
    ///     .set_update_mask(wkt::FieldMask::default().set_paths(["displayName"]));
    /// # let _ = options;
    /// ```
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }
}

/// Options for update methods on localized resources.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocalizedUpdateOptions {
    /// The language of the localized fields in the request. The agent's
    /// default language is used when not set.
    pub language_code: Option<String>,
    pub update_mask: Option<wkt::FieldMask>,
}

impl LocalizedUpdateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [language_code][LocalizedUpdateOptions::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }

    /// Sets the value of [update_mask][LocalizedUpdateOptions::update_mask].
    pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }
}

/// Options for delete methods.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteOptions {
    /// Also delete, or update, the resources that reference this one.
    ///
    /// Without it, the service rejects deleting resources that are still in
    /// use.
    pub force: Option<bool>,
}

impl DeleteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [force][DeleteOptions::force].
    pub fn set_force<T: Into<bool>>(mut self, v: T) -> Self {
        self.force = Some(v.into());
        self
    }
}

/// Options for [TestCases::calculate_coverage][crate::client::TestCases::calculate_coverage].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CalculateCoverageOptions {
    /// The type of coverage requested.
    pub r#type: Option<CoverageType>,
}

impl CalculateCoverageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [r#type][CalculateCoverageOptions::r#type].
    pub fn set_type<T: Into<CoverageType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }
}

/// Represents the options for views of an intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum IntentView {
    /// Not specified, the service treats it as [IntentView::Full].
    #[default]
    #[serde(rename = "INTENT_VIEW_UNSPECIFIED")]
    Unspecified,
    /// Training phrases field is not populated in the response.
    #[serde(rename = "INTENT_VIEW_PARTIAL")]
    Partial,
    /// All fields are populated.
    #[serde(rename = "INTENT_VIEW_FULL")]
    Full,
}

/// Specifies how much test case information to include in the response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum TestCaseView {
    /// The default, the service treats it as [TestCaseView::Basic].
    #[default]
    #[serde(rename = "TEST_CASE_VIEW_UNSPECIFIED")]
    Unspecified,
    /// Include basic metadata about the test case, but not the conversation
    /// turns.
    #[serde(rename = "BASIC")]
    Basic,
    /// Include everything.
    #[serde(rename = "FULL")]
    Full,
}

/// The type of coverage computed by
/// [calculate_coverage][crate::client::TestCases::calculate_coverage].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum CoverageType {
    /// Not specified, the service rejects the request.
    #[default]
    #[serde(rename = "COVERAGE_TYPE_UNSPECIFIED")]
    Unspecified,
    /// Intent coverage.
    #[serde(rename = "INTENT")]
    Intent,
    /// Page transition coverage.
    #[serde(rename = "PAGE_TRANSITION")]
    PageTransition,
    /// Transition route group coverage.
    #[serde(rename = "TRANSITION_ROUTE_GROUP")]
    TransitionRouteGroup,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn empty_options() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_value(ListOptions::new())?, json!({}));
        assert_eq!(serde_json::to_value(DeleteOptions::new())?, json!({}));
        assert_eq!(serde_json::to_value(UpdateOptions::new())?, json!({}));
        Ok(())
    }

    #[test]
    fn list_intents() -> anyhow::Result<()> {
        let options = ListIntentsOptions::new()
            .set_language_code("fr")
            .set_intent_view(IntentView::Partial)
            .set_page_size(25)
            .set_page_token("abc");
        let got = serde_json::to_value(options)?;
        let want = json!({
            "languageCode": "fr",
            "intentView": "INTENT_VIEW_PARTIAL",
            "pageSize": 25,
            "pageToken": "abc",
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(FilteredListOptions::new(), json!({}); "filtered empty")]
    #[test_case(FilteredListOptions::new().set_filter("labels.env=prod").set_page_size(10), json!({"filter": "labels.env=prod", "pageSize": 10}); "filtered")]
    #[test_case(FilteredListOptions::new().set_page_token("abc"), json!({"pageToken": "abc"}); "filtered token")]
    fn filtered_list(input: FilteredListOptions, want: serde_json::Value) -> anyhow::Result<()> {
        assert_eq!(serde_json::to_value(input)?, want);
        Ok(())
    }

    #[test_case(LocalizedListOptions::new(), json!({}); "localized empty")]
    #[test_case(LocalizedListOptions::new().set_language_code("de").set_page_size(5), json!({"languageCode": "de", "pageSize": 5}); "localized")]
    #[test_case(LocalizedListOptions::new().set_page_token("abc"), json!({"pageToken": "abc"}); "localized token")]
    fn localized_list(input: LocalizedListOptions, want: serde_json::Value) -> anyhow::Result<()> {
        assert_eq!(serde_json::to_value(input)?, want);
        Ok(())
    }

    #[test]
    fn language() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_value(LanguageOptions::new())?, json!({}));
        let got = serde_json::to_value(LanguageOptions::new().set_language_code("es"))?;
        assert_eq!(got, json!({"languageCode": "es"}));
        Ok(())
    }

    #[test]
    fn update_mask() -> anyhow::Result<()> {
        let options = LocalizedUpdateOptions::new()
            .set_update_mask(wkt::FieldMask::default().set_paths(["displayName", "description"]));
        let got = serde_json::to_value(options)?;
        assert_eq!(got, json!({"updateMask": "displayName,description"}));
        Ok(())
    }

    #[test_case(CoverageType::Intent, "INTENT")]
    #[test_case(CoverageType::PageTransition, "PAGE_TRANSITION")]
    #[test_case(CoverageType::TransitionRouteGroup, "TRANSITION_ROUTE_GROUP")]
    fn coverage_type(input: CoverageType, want: &str) -> anyhow::Result<()> {
        let got = serde_json::to_value(CalculateCoverageOptions::new().set_type(input))?;
        assert_eq!(got, json!({"type": want}));
        Ok(())
    }

    #[test_case(TestCaseView::Basic, "BASIC")]
    #[test_case(TestCaseView::Full, "FULL")]
    #[test_case(TestCaseView::Unspecified, "TEST_CASE_VIEW_UNSPECIFIED")]
    fn test_case_view(input: TestCaseView, want: &str) -> anyhow::Result<()> {
        let got = serde_json::to_value(ListTestCasesOptions::new().set_view(input))?;
        assert_eq!(got, json!({"view": want}));
        Ok(())
    }
}
