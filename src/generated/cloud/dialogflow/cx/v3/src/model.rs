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

//! Each file groups a resource, the messages used by its methods, and the
//! types nested in those messages. Nested types live in a module named after
//! the enclosing message, e.g. [agent::GitIntegrationSettings].

mod agents;
mod changelogs;
mod common;
mod deployments;
mod entity_types;
mod environments;
mod experiments;
mod flows;
mod fulfillments;
mod generators;
mod intents;
mod locations;
mod operations;
mod options;
mod pages;
mod security;
mod session_entity_types;
mod sessions;
mod test_cases;
mod transition_route_groups;
mod versions;
mod webhooks;

pub use agents::*;
pub use changelogs::*;
pub use common::*;
pub use deployments::*;
pub use entity_types::*;
pub use environments::*;
pub use experiments::*;
pub use flows::*;
pub use fulfillments::*;
pub use generators::*;
pub use intents::*;
pub use locations::*;
pub use operations::*;
pub use options::*;
pub use pages::*;
pub use security::*;
pub use session_entity_types::*;
pub use sessions::*;
pub use test_cases::*;
pub use transition_route_groups::*;
pub use versions::*;
pub use webhooks::*;
