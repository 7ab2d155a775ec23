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

/// Manages [Generator][model::Generator] resources.
#[derive(Clone, Debug)]
pub struct Generators {
    inner: Arc<Transport>,
}

impl Generators {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all generators in the specified agent.
    pub async fn list_generators(
        &self,
        parent: &str,
        options: model::LocalizedListOptions,
    ) -> Result<model::ListGeneratorsResponse> {
        self.inner
            .get(&format!("{parent}/generators"), &options)
            .await
    }

    /// Retrieves the specified generator.
    pub async fn get_generator(
        &self,
        name: &str,
        options: model::LanguageOptions,
    ) -> Result<model::Generator> {
        self.inner.get(name, &options).await
    }

    /// Creates a generator in the specified agent.
    pub async fn create_generator(
        &self,
        parent: &str,
        generator: model::Generator,
        options: model::LanguageOptions,
    ) -> Result<model::Generator> {
        self.inner
            .post_with_options(&format!("{parent}/generators"), &options, generator)
            .await
    }

    /// Update the specified generator.
    pub async fn update_generator(
        &self,
        name: &str,
        generator: model::Generator,
        options: model::LocalizedUpdateOptions,
    ) -> Result<model::Generator> {
        self.inner.patch(name, &options, generator).await
    }

    /// Deletes the specified generators.
    pub async fn delete_generator(
        &self,
        name: &str,
        options: model::DeleteOptions,
    ) -> Result<wkt::Empty> {
        self.inner.delete(name, &options).await
    }
}
