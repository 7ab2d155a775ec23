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

/// Represents the settings related to security issues, such as data
/// redaction and data retention.
///
/// It may take hours for updates on the settings to propagate to all the
/// related components and take effect.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SecuritySettings {
    /// Resource name of the settings, in the
    /// `projects/{p}/locations/{l}/securitySettings/{s}` format.
    pub name: Option<String>,

    /// Required. The human-readable name of the security settings, unique
    /// within the location.
    pub display_name: Option<String>,

    /// Strategy that defines how we do redaction, e.g.
    /// `REDACT_WITH_SERVICE`.
    pub redaction_strategy: Option<String>,

    /// Defines the data for which Dialogflow applies redaction, e.g.
    /// `REDACT_DISK_STORAGE`.
    pub redaction_scope: Option<String>,

    /// [DLP](https://cloud.google.com/dlp/docs) inspect template name.
    pub inspect_template: Option<String>,

    /// [DLP](https://cloud.google.com/dlp/docs) deidentify template name.
    pub deidentify_template: Option<String>,

    /// Retains the data for the specified number of days. Only valid when
    /// `retention_strategy` is not set.
    pub retention_window_days: Option<i32>,

    /// Specifies the retention behavior defined by
    /// `RetentionStrategy`, e.g. `REMOVE_AFTER_CONVERSATION`.
    pub retention_strategy: Option<String>,

    /// List of types of data to remove when retention settings triggers
    /// purge, e.g. `DIALOGFLOW_HISTORY`.
    pub purge_data_types: Option<Vec<String>>,

    /// Controls audio export settings for post-conversation analytics when
    /// ingesting audio to conversations via Dialogflow.
    pub audio_export_settings: Option<security_settings::AudioExportSettings>,

    /// Controls conversation exporting settings to Insights after
    /// conversation is completed.
    pub insights_export_settings: Option<security_settings::InsightsExportSettings>,
}

impl SecuritySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][SecuritySettings::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][SecuritySettings::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [redaction_strategy][SecuritySettings::redaction_strategy].
    pub fn set_redaction_strategy<T: Into<String>>(mut self, v: T) -> Self {
        self.redaction_strategy = Some(v.into());
        self
    }

    /// Sets the value of [redaction_scope][SecuritySettings::redaction_scope].
    pub fn set_redaction_scope<T: Into<String>>(mut self, v: T) -> Self {
        self.redaction_scope = Some(v.into());
        self
    }

    /// Sets the value of [retention_window_days][SecuritySettings::retention_window_days].
    pub fn set_retention_window_days<T: Into<i32>>(mut self, v: T) -> Self {
        self.retention_window_days = Some(v.into());
        self
    }

    /// Sets the value of [purge_data_types][SecuritySettings::purge_data_types].
    pub fn set_purge_data_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.purge_data_types = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Defines additional types related to [SecuritySettings].
pub mod security_settings {
    /// Settings for exporting audio.
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct AudioExportSettings {
        /// Cloud Storage bucket to export audio record to.
        pub gcs_bucket: Option<String>,
        /// Filename pattern for exported audio.
        pub audio_export_pattern: Option<String>,
        /// Enable audio redaction if it is true.
        pub enable_audio_redaction: Option<bool>,
        /// File format for exported audio file, e.g. `MULAW`.
        pub audio_format: Option<String>,
        /// Whether to store TTS audio. By default, TTS audio is not stored.
        pub store_tts_audio: Option<bool>,
    }

    /// Settings for exporting conversations to
    /// [Insights](https://cloud.google.com/contact-center/insights/docs).
    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct InsightsExportSettings {
        /// If enabled, we will automatically exports conversations to
        /// Insights.
        pub enable_insights_export: Option<bool>,
    }
}

/// The response of
/// [SecuritySettingsService::list_security_settings][crate::client::SecuritySettingsService::list_security_settings].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSecuritySettingsResponse {
    pub security_settings: Option<Vec<SecuritySettings>>,
    pub next_page_token: Option<String>,
}
