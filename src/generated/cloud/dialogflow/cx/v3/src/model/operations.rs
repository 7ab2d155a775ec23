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

use gax::error::Error;
use gax::error::rpc::Status;

/// A long-running operation.
///
/// The client returns operations as sent by the service and never polls
/// them. Applications can poll with
/// [Operations::get_operation][crate::client::Operations::get_operation].
///
/// # Example
/// ```
/// # use dialogflow_cx_v3::model::{ExportAgentResponse, Operation};
/// let operation: Operation = serde_json::from_value(serde_json::json!({
///     "name": "projects/p/locations/global/operations/op-1",
///     "done": true,
///     "response": {
///         "@type": "type.googleapis.com/google.cloud.dialogflow.cx.v3.ExportAgentResponse",
///         "agentUri": "gs://my-bucket/agent.blob"
///     }
/// }))?;
/// let response = operation.response_as::<ExportAgentResponse>().transpose()?;
/// assert_eq!(
///     response.and_then(|r| r.agent_uri).as_deref(),
///     Some("gs://my-bucket/agent.blob")
/// );
/// # anyhow::Ok(())
/// ```
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, unique within the service.
    pub name: Option<String>,

    /// Service-specific metadata, with an `@type` field naming its type.
    pub metadata: Option<wkt::Struct>,

    /// If true, the operation completed, and either `error` or `response`
    /// is set.
    pub done: Option<bool>,

    /// The error result of the operation in case of failure or cancellation.
    pub error: Option<Status>,

    /// The result of a successful operation, with an `@type` field naming its
    /// type.
    pub response: Option<wkt::Struct>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the operation completed.
    pub fn is_done(&self) -> bool {
        self.done.unwrap_or(false)
    }

    /// Parses the metadata as `T`, if present.
    pub fn metadata_as<T>(&self) -> Option<gax::Result<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        self.metadata.as_ref().map(parse)
    }

    /// Parses the response as `T`, if present.
    pub fn response_as<T>(&self) -> Option<gax::Result<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        self.response.as_ref().map(parse)
    }
}

fn parse<T>(value: &wkt::Struct) -> gax::Result<T>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(serde_json::Value::Object(value.clone())).map_err(Error::deser)
}

/// The response of [Operations::list_operations][crate::client::Operations::list_operations].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsResponse {
    pub operations: Option<Vec<Operation>>,
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExportFlowResponse, Version};
    use gax::error::rpc::Code;
    use serde_json::json;

    #[test]
    fn pending() -> anyhow::Result<()> {
        let operation: Operation = serde_json::from_value(json!({
            "name": "projects/p/locations/global/operations/op-1",
        }))?;
        assert!(!operation.is_done(), "{operation:?}");
        assert!(operation.metadata_as::<Version>().is_none());
        assert!(operation.response_as::<Version>().is_none());
        Ok(())
    }

    #[test]
    fn with_response() -> anyhow::Result<()> {
        let operation: Operation = serde_json::from_value(json!({
            "name": "projects/p/locations/global/operations/op-1",
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.cloud.dialogflow.cx.v3.ExportFlowResponse",
                "flowContent": "AQID",
            },
        }))?;
        assert!(operation.is_done(), "{operation:?}");
        let response = operation
            .response_as::<ExportFlowResponse>()
            .transpose()?
            .ok_or_else(|| anyhow::anyhow!("missing response"))?;
        assert_eq!(
            response.flow_content,
            Some(bytes::Bytes::from_static(&[1, 2, 3]))
        );
        Ok(())
    }

    #[test]
    fn with_error() -> anyhow::Result<()> {
        let operation: Operation = serde_json::from_value(json!({
            "name": "projects/p/locations/global/operations/op-1",
            "done": true,
            "error": {"code": 9, "message": "flow is locked"},
        }))?;
        let status = operation
            .error
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("missing error"))?;
        assert_eq!(status.code, Code::FailedPrecondition);
        assert_eq!(status.message, "flow is locked");
        Ok(())
    }

    #[test]
    fn bad_metadata() -> anyhow::Result<()> {
        let operation: Operation = serde_json::from_value(json!({
            "metadata": {"createTime": "not a timestamp"},
        }))?;
        let got = operation
            .metadata_as::<Version>()
            .ok_or_else(|| anyhow::anyhow!("missing metadata"))?;
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
        Ok(())
    }
}
