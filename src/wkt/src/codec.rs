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

//! Binary payloads in JSON.
//!
//! JSON cannot carry raw bytes. The Dialogflow CX API sends audio, exported
//! agents, flows, and test cases as text using the *standard* base64 alphabet
//! (`A-Z`, `a-z`, `0-9`, `+`, `/`) with `=` padding, as described in
//! [RFC 4648 section 4](https://datatracker.ietf.org/doc/html/rfc4648#section-4).
//!
//! # Example
//! ```
//! # use dialogflow_cx_wkt::codec;
//! let text = codec::encode([1_u8, 2, 3]);
//! assert_eq!(text, "AQID");
//! let bytes = codec::decode(&text)?;
//! assert_eq!(bytes.as_ref(), &[1_u8, 2, 3]);
//! # Ok::<(), codec::CodecError>(())
//! ```

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

/// The error returned by [decode].
///
/// Malformed input is rejected: invalid characters, a bad final quantum, or
/// missing padding all produce an error. The decoder never tries to repair the
/// input.
#[derive(thiserror::Error, Debug)]
#[error("cannot decode base64 payload: {0}")]
pub struct CodecError(#[source] base64::DecodeError);

/// Encodes `bytes` as standard, padded base64 text.
///
/// The output length is always a multiple of 4. Empty input produces an empty
/// string.
pub fn encode<T: AsRef<[u8]>>(bytes: T) -> String {
    BASE64_STANDARD.encode(bytes)
}

/// Decodes standard, padded base64 text.
///
/// Returns exactly the bytes that [encode] consumed to produce `text`.
pub fn decode<T: AsRef<[u8]>>(text: T) -> Result<bytes::Bytes, CodecError> {
    BASE64_STANDARD
        .decode(text)
        .map(bytes::Bytes::from)
        .map_err(CodecError)
}
