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

use crate::model::TransitionRoute;

/// A TransitionRouteGroup represents a group of [TransitionRoute]s to be
/// used by a [Page][crate::model::Page].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TransitionRouteGroup {
    /// The unique identifier of the transition route group, in the
    /// `projects/{p}/locations/{l}/agents/{a}/flows/{f}/transitionRouteGroups/{g}`
    /// or `projects/{p}/locations/{l}/agents/{a}/transitionRouteGroups/{g}`
    /// format.
    pub name: Option<String>,

    /// Required. The human-readable name of the transition route group,
    /// unique within the flow.
    pub display_name: Option<String>,

    /// Transition routes associated with the group.
    pub transition_routes: Option<Vec<TransitionRoute>>,
}

impl TransitionRouteGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][TransitionRouteGroup::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][TransitionRouteGroup::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [transition_routes][TransitionRouteGroup::transition_routes].
    pub fn set_transition_routes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TransitionRoute>,
    {
        self.transition_routes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The response of
/// [TransitionRouteGroups::list_transition_route_groups][crate::client::TransitionRouteGroups::list_transition_route_groups].
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTransitionRouteGroupsResponse {
    pub transition_route_groups: Option<Vec<TransitionRouteGroup>>,
    pub next_page_token: Option<String>,
}
