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

/// Runs conversations with an agent.
///
/// A session represents an interaction with a user. `session` arguments use
/// the `projects/{p}/locations/{l}/agents/{a}/sessions/{s}` format, or
/// `projects/{p}/locations/{l}/agents/{a}/environments/{e}/sessions/{s}`
/// to talk to a specific environment. The session ID is chosen by the
/// caller, e.g. a hashed user identifier.
#[derive(Clone, Debug)]
pub struct Sessions {
    inner: Arc<Transport>,
}

impl Sessions {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Processes a natural language query and returns structured, actionable
    /// data as a result.
    ///
    /// This method is not idempotent, because it may cause session entity
    /// types to be updated, which in turn might affect results of future
    /// queries.
    pub async fn detect_intent(
        &self,
        session: &str,
        request: model::DetectIntentRequest,
    ) -> Result<model::DetectIntentResponse> {
        self.inner
            .post(&format!("{session}:detectIntent"), request)
            .await
    }

    /// Returns preliminary intent match results, doesn't change the session
    /// status.
    pub async fn match_intent(
        &self,
        session: &str,
        request: model::MatchIntentRequest,
    ) -> Result<model::MatchIntentResponse> {
        self.inner
            .post(&format!("{session}:matchIntent"), request)
            .await
    }

    /// Fulfills a matched intent returned by
    /// [match_intent][Sessions::match_intent].
    ///
    /// Must be called after `match_intent`, with input from the
    /// `MatchIntentResponse`. Otherwise, the behavior is undefined.
    pub async fn fulfill_intent(
        &self,
        session: &str,
        request: model::FulfillIntentRequest,
    ) -> Result<model::FulfillIntentResponse> {
        self.inner
            .post(&format!("{session}:fulfillIntent"), request)
            .await
    }

    /// Updates the feedback received from the user for a single turn of the
    /// bot response.
    pub async fn submit_answer_feedback(
        &self,
        session: &str,
        request: model::SubmitAnswerFeedbackRequest,
    ) -> Result<model::AnswerFeedback> {
        self.inner
            .post(&format!("{session}:submitAnswerFeedback"), request)
            .await
    }
}
