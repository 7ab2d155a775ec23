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
use std::sync::Arc;

/// Manages [Webhook][model::Webhook] resources.
#[derive(Clone, Debug)]
pub struct Webhooks {
    inner: Arc<Transport>,
}

impl Webhooks {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all webhooks in the specified agent.
    pub async fn list_webhooks(
        &self,
        parent: &str,
        options: model::ListOptions,
    ) -> Result<model::ListWebhooksResponse> {
        self.inner
            .get(&format!("{parent}/webhooks"), &options)
            .await
    }

    /// Retrieves the specified webhook.
    pub async fn get_webhook(&self, name: &str) -> Result<model::Webhook> {
        self.inner.get(name, &()).await
    }

    /// Creates a webhook in the specified agent.
    pub async fn create_webhook(
        &self,
        parent: &str,
        webhook: model::Webhook,
    ) -> Result<model::Webhook> {
        self.inner
            .post(&format!("{parent}/webhooks"), webhook)
            .await
    }

    /// Updates the specified webhook.
    pub async fn update_webhook(
        &self,
        name: &str,
        webhook: model::Webhook,
        options: model::UpdateOptions,
    ) -> Result<model::Webhook> {
        self.inner.patch(name, &options, webhook).await
    }

    /// Deletes the specified webhook.
    ///
    /// Without [force][model::DeleteOptions::force] the request fails if
    /// the webhook is still referenced by a fulfillment.
    pub async fn delete_webhook(
        &self,
        name: &str,
        options: model::DeleteOptions,
    ) -> Result<wkt::Empty> {
        self.inner.delete(name, &options).await
    }
}
