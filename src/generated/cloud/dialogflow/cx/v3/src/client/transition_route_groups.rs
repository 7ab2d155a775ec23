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

/// Manages [TransitionRouteGroup][model::TransitionRouteGroup] resources.
///
/// Route groups can belong to a flow, using
/// `projects/{p}/locations/{l}/agents/{a}/flows/{f}` as the parent, or to
/// the agent itself, using `projects/{p}/locations/{l}/agents/{a}`.
#[derive(Clone, Debug)]
pub struct TransitionRouteGroups {
    inner: Arc<Transport>,
}

impl TransitionRouteGroups {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Returns the list of all transition route groups in the specified
    /// flow or agent.
    pub async fn list_transition_route_groups(
        &self,
        parent: &str,
        options: model::LocalizedListOptions,
    ) -> Result<model::ListTransitionRouteGroupsResponse> {
        self.inner
            .get(&format!("{parent}/transitionRouteGroups"), &options)
            .await
    }

    /// Retrieves the specified transition route group.
    pub async fn get_transition_route_group(
        &self,
        name: &str,
        options: model::LanguageOptions,
    ) -> Result<model::TransitionRouteGroup> {
        self.inner.get(name, &options).await
    }

    /// Creates a transition route group in the specified flow or agent.
    pub async fn create_transition_route_group(
        &self,
        parent: &str,
        group: model::TransitionRouteGroup,
        options: model::LanguageOptions,
    ) -> Result<model::TransitionRouteGroup> {
        self.inner
            .post_with_options(&format!("{parent}/transitionRouteGroups"), &options, group)
            .await
    }

    /// Updates the specified transition route group.
    pub async fn update_transition_route_group(
        &self,
        name: &str,
        group: model::TransitionRouteGroup,
        options: model::LocalizedUpdateOptions,
    ) -> Result<model::TransitionRouteGroup> {
        self.inner.patch(name, &options, group).await
    }

    /// Deletes the specified transition route group.
    pub async fn delete_transition_route_group(
        &self,
        name: &str,
        options: model::DeleteOptions,
    ) -> Result<wkt::Empty> {
        self.inner.delete(name, &options).await
    }
}
