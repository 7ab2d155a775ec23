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

use crate::model;
use crate::transport::Transport;
use gax::Result;
use reqwest::Method;
use std::sync::Arc;

/// Queries and cancels the long-running operations started by other views.
///
/// The client never polls operations on its own. Applications call
/// [get_operation][Operations::get_operation] until
/// [is_done()][model::Operation::is_done] returns `true`.
#[derive(Clone, Debug)]
pub struct Operations {
    inner: Arc<Transport>,
}

impl Operations {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Gets the latest state of a long-running operation.
    pub async fn get_operation(&self, name: &str) -> Result<model::Operation> {
        self.inner.get(name, &()).await
    }

    /// Lists operations that match the specified filter in the request.
    ///
    /// `name` is the parent of the operation collection, e.g.
    /// `projects/my-project/locations/global`.
    pub async fn list_operations(
        &self,
        name: &str,
        options: model::FilteredListOptions,
    ) -> Result<model::ListOperationsResponse> {
        self.inner
            .get(&format!("{name}/operations"), &options)
            .await
    }

    /// Starts asynchronous cancellation on a long-running operation.
    ///
    /// The server makes a best effort to cancel the operation, but success is
    /// not guaranteed.
    pub async fn cancel_operation(&self, name: &str) -> Result<wkt::Empty> {
        self.inner
            .call(
                Method::POST,
                &format!("{name}:cancel"),
                &(),
                None::<gaxi::http::NoBody>,
            )
            .await
    }
}
