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

//! Common types for the Dialogflow CX client library.
//!
//! This crate contains the error types returned by every RPC, the credentials
//! seam used to authenticate requests, the client configuration, and the
//! response wrapper. Most applications only need [Result] and
//! [error::Error]. Applications configuring a client use
//! [client_builder::ClientBuilder] and [credentials::Credentials].

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client library.
pub mod error;

pub mod client_builder;
pub mod credentials;
pub mod options;
pub mod response;
