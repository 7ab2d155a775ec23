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

/// Manages [TestCase][model::TestCase] resources and their
/// [results][model::TestCaseResult].
#[derive(Clone, Debug)]
pub struct TestCases {
    inner: Arc<Transport>,
}

impl TestCases {
    pub(crate) fn new(inner: Arc<Transport>) -> Self {
        Self { inner }
    }

    /// Fetches a list of test cases for a given agent.
    pub async fn list_test_cases(
        &self,
        parent: &str,
        options: model::ListTestCasesOptions,
    ) -> Result<model::ListTestCasesResponse> {
        self.inner
            .get(&format!("{parent}/testCases"), &options)
            .await
    }

    /// Gets a test case.
    pub async fn get_test_case(&self, name: &str) -> Result<model::TestCase> {
        self.inner.get(name, &()).await
    }

    /// Creates a test case for the given agent.
    pub async fn create_test_case(
        &self,
        parent: &str,
        test_case: model::TestCase,
    ) -> Result<model::TestCase> {
        self.inner
            .post(&format!("{parent}/testCases"), test_case)
            .await
    }

    /// Updates the specified test case.
    pub async fn update_test_case(
        &self,
        name: &str,
        test_case: model::TestCase,
        options: model::UpdateOptions,
    ) -> Result<model::TestCase> {
        self.inner.patch(name, &options, test_case).await
    }

    /// Batch deletes test cases.
    pub async fn batch_delete_test_cases(
        &self,
        parent: &str,
        request: model::BatchDeleteTestCasesRequest,
    ) -> Result<wkt::Empty> {
        self.inner
            .post(&format!("{parent}/testCases:batchDelete"), request)
            .await
    }

    /// Kicks off a test case run.
    ///
    /// On completion the operation response is a
    /// [RunTestCaseResponse][model::RunTestCaseResponse].
    pub async fn run_test_case(
        &self,
        name: &str,
        request: model::RunTestCaseRequest,
    ) -> Result<model::Operation> {
        self.inner.post(&format!("{name}:run"), request).await
    }

    /// Kicks off a batch run of test cases.
    ///
    /// On completion the operation response is a
    /// [BatchRunTestCasesResponse][model::BatchRunTestCasesResponse].
    pub async fn batch_run_test_cases(
        &self,
        parent: &str,
        request: model::BatchRunTestCasesRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/testCases:batchRun"), request)
            .await
    }

    /// Calculates the test coverage for an agent.
    pub async fn calculate_coverage(
        &self,
        agent: &str,
        options: model::CalculateCoverageOptions,
    ) -> Result<model::CalculateCoverageResponse> {
        self.inner
            .get(&format!("{agent}/testCases:calculateCoverage"), &options)
            .await
    }

    /// Imports the test cases from a Cloud Storage bucket or a local file.
    ///
    /// It always creates new test cases and won't overwrite any existing
    /// ones. On completion the operation response is an
    /// [ImportTestCasesResponse][model::ImportTestCasesResponse].
    pub async fn import_test_cases(
        &self,
        parent: &str,
        request: model::ImportTestCasesRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/testCases:import"), request)
            .await
    }

    /// Exports the test cases under the agent to a Cloud Storage bucket or a
    /// local file.
    ///
    /// On completion the operation response is an
    /// [ExportTestCasesResponse][model::ExportTestCasesResponse].
    pub async fn export_test_cases(
        &self,
        parent: &str,
        request: model::ExportTestCasesRequest,
    ) -> Result<model::Operation> {
        self.inner
            .post(&format!("{parent}/testCases:export"), request)
            .await
    }

    /// Fetches the list of run results for a given test case.
    ///
    /// `parent` is a test case, use `-` as the test case ID to list
    /// results across all the test cases of the agent.
    pub async fn list_test_case_results(
        &self,
        parent: &str,
        options: model::FilteredListOptions,
    ) -> Result<model::ListTestCaseResultsResponse> {
        self.inner
            .get(&format!("{parent}/results"), &options)
            .await
    }

    /// Gets a test case result.
    pub async fn get_test_case_result(&self, name: &str) -> Result<model::TestCaseResult> {
        self.inner.get(name, &()).await
    }
}
