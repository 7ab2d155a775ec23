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

//! Well-known-types for the Dialogflow CX client library.
//!
//! The Dialogflow CX REST API uses a number of well-known types. These have
//! custom JSON encodings: timestamps travel as RFC 3339 strings, durations as
//! `"{seconds}.{fraction}s"` strings, field masks as comma-separated paths,
//! and byte payloads as standard base64 text.
//!
//! This crate defines the in-memory representation of those types, their
//! [serde] implementations, and conversions to and from commonly used Rust
//! types.

pub mod codec;
mod duration;
pub use crate::duration::*;
mod empty;
pub use crate::empty::*;
mod field_mask;
pub use crate::field_mask::*;
mod rstruct;
pub use crate::rstruct::*;
mod timestamp;
pub use crate::timestamp::*;

#[doc(hidden)]
pub mod internal;
