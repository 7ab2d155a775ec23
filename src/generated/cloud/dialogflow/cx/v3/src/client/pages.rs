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

/// Manages [Page][model::Page] resources.
#[derive(Clone, Debug)]
pub struct Pages {
    inner: Arc<Transport>,
}

impl Pages {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all pages in the specified flow.
    pub async fn list_pages(
        &self,
        parent: &str,
        options: model::LocalizedListOptions,
    ) -> Result<model::ListPagesResponse> {
        self.inner.get(&format!("{parent}/pages"), &options).await
    }

    /// Retrieves the specified page.
    pub async fn get_page(&self, name: &str, options: model::LanguageOptions) -> Result<model::Page> {
        self.inner.get(name, &options).await
    }

    /// Creates a page in the specified flow.
    pub async fn create_page(
        &self,
        parent: &str,
        page: model::Page,
        options: model::LanguageOptions,
    ) -> Result<model::Page> {
        self.inner
            .post_with_options(&format!("{parent}/pages"), &options, page)
            .await
    }

    /// Updates the specified page.
    pub async fn update_page(
        &self,
        name: &str,
        page: model::Page,
        options: model::LocalizedUpdateOptions,
    ) -> Result<model::Page> {
        self.inner.patch(name, &options, page).await
    }

    /// Deletes the specified page.
    pub async fn delete_page(&self, name: &str, options: model::DeleteOptions) -> Result<wkt::Empty> {
        self.inner.delete(name, &options).await
    }
}
