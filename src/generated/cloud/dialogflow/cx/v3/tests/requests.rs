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

//! Verify each view sends the expected HTTP request and parses the
//! response.
//!
//! The tests use a local HTTP server. Each expectation checks the method,
//! the path, the query parameters and the body of the request.

#[cfg(test)]
mod tests {
    use dialogflow_cx_v3::client::Dialogflow;
    use dialogflow_cx_v3::model;
    use gax::credentials::AnonymousCredentials;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    const AGENT: &str = "projects/p/locations/global/agents/a";

    async fn test_client(server: &Server) -> anyhow::Result<Dialogflow> {
        let client = Dialogflow::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(AnonymousCredentials::new())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn telemetry_header() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}")),
                request::headers(contains(key("x-goog-api-client"))),
                request::headers(contains((
                    "x-goog-api-client",
                    matches("gccl/[0-9]+\\.[0-9]+\\.[0-9]+"),
                ))),
            ])
            .respond_with(json_encoded(json!({"name": AGENT}))),
        );
        let client = test_client(&server).await?;
        let agent = client.agents().get_agent(AGENT).await?;
        assert_eq!(agent.name.as_deref(), Some(AGENT));
        Ok(())
    }

    #[tokio::test]
    async fn user_agent_replaces_default() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}")),
                request::headers(contains(("user-agent", "my-app/1.0"))),
                request::headers(not(contains(("user-agent", not("my-app/1.0"))))),
                request::headers(contains(key("x-goog-api-client"))),
            ])
            .respond_with(json_encoded(json!({"name": AGENT}))),
        );
        let client = Dialogflow::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(AnonymousCredentials::new())
            .with_user_agent("my-app/1.0")
            .build()
            .await?;
        let agent = client.agents().get_agent(AGENT).await?;
        assert_eq!(agent.name.as_deref(), Some(AGENT));
        Ok(())
    }

    #[tokio::test]
    async fn locations() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/projects/p/locations"),
                request::query(url_decoded(contains(("filter", "labels.env=prod")))),
                request::query(url_decoded(not(contains(key("pageSize"))))),
            ])
            .respond_with(json_encoded(json!({
                "locations": [
                    {"name": "projects/p/locations/global", "locationId": "global"},
                    {"name": "projects/p/locations/us-central1", "locationId": "us-central1"},
                ],
                "nextPageToken": "abc",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/projects/p/locations/global"),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({"locationId": "global"}))),
        );

        let client = test_client(&server).await?;
        let response = client
            .locations()
            .list_locations(
                "projects/p",
                model::FilteredListOptions::new().set_filter("labels.env=prod"),
            )
            .await?;
        let ids = response
            .locations
            .unwrap_or_default()
            .into_iter()
            .filter_map(|l| l.location_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["global", "us-central1"]);
        assert_eq!(response.next_page_token.as_deref(), Some("abc"));

        let location = client
            .locations()
            .get_location("projects/p/locations/global")
            .await?;
        assert_eq!(location.location_id.as_deref(), Some("global"));
        Ok(())
    }

    #[tokio::test]
    async fn operations() -> Result {
        let name = "projects/p/locations/global/operations/op-1";
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{name}")),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({"name": name, "done": true, "response": {
                "@type": "type.googleapis.com/google.cloud.dialogflow.cx.v3.ExportAgentResponse",
                "agentContent": "AQID",
            }}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/projects/p/locations/global/operations"),
                request::query(url_decoded(contains(("pageSize", "5")))),
                request::query(url_decoded(contains(("pageToken", "t1")))),
            ])
            .respond_with(json_encoded(json!({"operations": [{"name": name}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{name}:cancel")),
                request::query(url_decoded(len(eq(0)))),
                request::body(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        let operation = client.operations().get_operation(name).await?;
        assert!(operation.is_done(), "{operation:?}");
        let response = operation
            .response_as::<model::ExportAgentResponse>()
            .transpose()?
            .and_then(|r| r.agent_content);
        assert_eq!(response, Some(bytes::Bytes::from_static(&[1, 2, 3])));

        let list = client
            .operations()
            .list_operations(
                "projects/p/locations/global",
                model::FilteredListOptions::new()
                    .set_page_size(5)
                    .set_page_token("t1"),
            )
            .await?;
        assert_eq!(list.operations.map(|v| v.len()), Some(1));

        let empty = client.operations().cancel_operation(name).await?;
        assert_eq!(empty, wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn agents_crud() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/projects/p/locations/global/agents"),
                request::query(url_decoded(contains(("pageSize", "10")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({"agents": [{"name": AGENT, "displayName": "a"}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v3/projects/p/locations/global/agents"),
                request::query(url_decoded(len(eq(0)))),
                request::body(json_decoded(eq(json!({
                    "displayName": "My Agent",
                    "defaultLanguageCode": "en",
                    "timeZone": "America/New_York",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": AGENT, "displayName": "My Agent"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("/v3/{AGENT}")),
                request::query(url_decoded(contains(("updateMask", "displayName,description")))),
                request::query(url_decoded(len(eq(1)))),
                request::body(json_decoded(eq(json!({
                    "name": AGENT,
                    "displayName": "renamed",
                    "description": "",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": AGENT, "displayName": "renamed"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", format!("/v3/{AGENT}")),
                request::query(url_decoded(len(eq(0)))),
                request::body(url_decoded(len(eq(0)))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let agents = client.agents();
        let list = agents
            .list_agents(
                "projects/p/locations/global",
                model::ListOptions::new().set_page_size(10),
            )
            .await?;
        assert_eq!(
            list.agents,
            Some(vec![
                model::Agent::new().set_name(AGENT).set_display_name("a")
            ])
        );
        assert!(list.next_page_token.is_none(), "{list:?}");

        let created = agents
            .create_agent(
                "projects/p/locations/global",
                model::Agent::new()
                    .set_display_name("My Agent")
                    .set_default_language_code("en")
                    .set_time_zone("America/New_York"),
            )
            .await?;
        assert_eq!(created.name.as_deref(), Some(AGENT));

        let updated = agents
            .update_agent(
                AGENT,
                model::Agent::new()
                    .set_name(AGENT)
                    .set_display_name("renamed")
                    .set_description(""),
                model::UpdateOptions::new().set_update_mask(
                    wkt::FieldMask::default().set_paths(["displayName", "description"]),
                ),
            )
            .await?;
        assert_eq!(updated.display_name.as_deref(), Some("renamed"));

        let deleted = agents.delete_agent(AGENT).await?;
        assert_eq!(deleted, wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn agents_export_restore() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}:export")),
                request::body(json_decoded(eq(json!({
                    "agentUri": "gs://bucket/agent.blob",
                    "dataFormat": "BLOB",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/export-1"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}:restore")),
                request::body(json_decoded(eq(json!({
                    "agentContent": "AAEC/w==",
                    "restoreOption": "FALLBACK",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/restore-1", "done": false}))),
        );

        let client = test_client(&server).await?;
        let operation = client
            .agents()
            .export_agent(
                AGENT,
                model::ExportAgentRequest::new()
                    .set_agent_uri("gs://bucket/agent.blob")
                    .set_data_format("BLOB"),
            )
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operations/export-1"));
        assert!(!operation.is_done(), "{operation:?}");

        let operation = client
            .agents()
            .restore_agent(
                AGENT,
                model::RestoreAgentRequest::new()
                    .set_agent_content(bytes::Bytes::from_static(&[0, 1, 2, 255]))
                    .set_restore_option("FALLBACK"),
            )
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operations/restore-1"));
        Ok(())
    }

    #[tokio::test]
    async fn agents_validation_and_generative_settings() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}:validate")),
                request::body(json_decoded(eq(json!({"languageCode": "fr"})))),
            ])
            .respond_with(json_encoded(json!({"name": format!("{AGENT}/validationResult")}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}/validationResult")),
                request::query(url_decoded(contains(("languageCode", "fr")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({"flowValidationResults": [{"name": "f"}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}/generativeSettings")),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({"languageCode": "en"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("/v3/{AGENT}/generativeSettings")),
                request::query(url_decoded(len(eq(0)))),
                request::body(json_decoded(eq(json!({"languageCode": "en"})))),
            ])
            .respond_with(json_encoded(json!({"languageCode": "en"}))),
        );

        let client = test_client(&server).await?;
        let agents = client.agents();
        let result = agents
            .validate_agent(AGENT, model::ValidateAgentRequest::new().set_language_code("fr"))
            .await?;
        assert!(result.name.is_some(), "{result:?}");
        let result = agents
            .get_agent_validation_result(
                &format!("{AGENT}/validationResult"),
                model::LanguageOptions::new().set_language_code("fr"),
            )
            .await?;
        assert_eq!(result.flow_validation_results.map(|v| v.len()), Some(1));

        let name = format!("{AGENT}/generativeSettings");
        let settings = agents
            .get_generative_settings(&name, model::LanguageOptions::new())
            .await?;
        assert_eq!(settings.language_code.as_deref(), Some("en"));
        let settings = agents
            .update_generative_settings(&name, settings, model::UpdateOptions::new())
            .await?;
        assert_eq!(settings.language_code.as_deref(), Some("en"));
        Ok(())
    }

    #[tokio::test]
    async fn changelogs_and_deployments() -> Result {
        let env = format!("{AGENT}/environments/e");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}/changelogs")),
                request::query(url_decoded(contains(("filter", "action = \"Update\"")))),
            ])
            .respond_with(json_encoded(json!({"changelogs": [
                {"name": "c1", "type": "Flow", "createTime": "2025-03-04T05:06:07.500Z"},
            ]}))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("/v3/{AGENT}/changelogs/c1"),
            ))
            .respond_with(json_encoded(json!({"name": "c1"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{env}/deployments")),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({"deployments": []}))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("/v3/{env}/deployments/d1"),
            ))
            .respond_with(json_encoded(json!({"name": "d1", "state": "SUCCEEDED"}))),
        );

        let client = test_client(&server).await?;
        let list = client
            .changelogs()
            .list_changelogs(
                AGENT,
                model::FilteredListOptions::new().set_filter("action = \"Update\""),
            )
            .await?;
        let changelog = list
            .changelogs
            .and_then(|v| v.into_iter().next())
            .ok_or_else(|| anyhow::anyhow!("missing changelog"))?;
        assert_eq!(changelog.r#type.as_deref(), Some("Flow"));
        assert_eq!(
            changelog.create_time,
            Some(wkt::Timestamp::clamp(1741064767, 500_000_000))
        );
        let changelog = client
            .changelogs()
            .get_changelog(&format!("{AGENT}/changelogs/c1"))
            .await?;
        assert_eq!(changelog.name.as_deref(), Some("c1"));

        let list = client
            .deployments()
            .list_deployments(&env, model::ListOptions::new())
            .await?;
        assert_eq!(list.deployments, Some(Vec::new()));
        let deployment = client
            .deployments()
            .get_deployment(&format!("{env}/deployments/d1"))
            .await?;
        assert_eq!(deployment.state.as_deref(), Some("SUCCEEDED"));
        Ok(())
    }

    #[tokio::test]
    async fn entity_types() -> Result {
        let name = format!("{AGENT}/entityTypes/size");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}/entityTypes")),
                request::query(url_decoded(contains(("languageCode", "de")))),
                request::query(url_decoded(contains(("pageSize", "100")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({"entityTypes": [{"name": name}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/entityTypes")),
                request::query(url_decoded(contains(("languageCode", "de")))),
                request::query(url_decoded(len(eq(1)))),
                request::body(json_decoded(eq(json!({
                    "displayName": "size",
                    "kind": "KIND_MAP",
                    "entities": [
                        {"value": "small", "synonyms": ["small", "klein"]},
                        {"value": "large", "synonyms": []},
                    ],
                })))),
            ])
            .respond_with(json_encoded(json!({"name": name, "displayName": "size"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", format!("/v3/{name}")),
                request::query(url_decoded(contains(("force", "true")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/entityTypes:export")),
                request::body(json_decoded(eq(json!({
                    "entityTypes": [name.clone()],
                    "entityTypesContentInline": true,
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/e1"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/entityTypes:import")),
                request::body(json_decoded(eq(json!({
                    "entityTypesContent": {"data": "e30="},
                    "mergeOption": "MERGE",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/i1"}))),
        );

        let client = test_client(&server).await?;
        let entity_types = client.entity_types();
        let list = entity_types
            .list_entity_types(
                AGENT,
                model::LocalizedListOptions::new()
                    .set_language_code("de")
                    .set_page_size(100),
            )
            .await?;
        assert_eq!(list.entity_types.map(|v| v.len()), Some(1));

        use model::entity_type::Entity;
        let created = entity_types
            .create_entity_type(
                AGENT,
                model::EntityType::new()
                    .set_display_name("size")
                    .set_kind("KIND_MAP")
                    .set_entities([
                        Entity::new().set_value("small").set_synonyms(["small", "klein"]),
                        Entity::new().set_value("large").set_synonyms(Vec::<String>::new()),
                    ]),
                model::LanguageOptions::new().set_language_code("de"),
            )
            .await?;
        assert_eq!(created.name.as_deref(), Some(name.as_str()));

        entity_types
            .delete_entity_type(&name, model::DeleteOptions::new().set_force(true))
            .await?;

        let operation = entity_types
            .export_entity_types(
                AGENT,
                model::ExportEntityTypesRequest::new()
                    .set_entity_types([name.clone()])
                    .set_entity_types_content_inline(true),
            )
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operations/e1"));

        let operation = entity_types
            .import_entity_types(
                AGENT,
                model::ImportEntityTypesRequest::new()
                    .set_entity_types_content(
                        model::InlineSource::new().set_data(bytes::Bytes::from_static(b"{}")),
                    )
                    .set_merge_option("MERGE"),
            )
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operations/i1"));
        Ok(())
    }

    #[tokio::test]
    async fn environments() -> Result {
        let env = format!("{AGENT}/environments/e");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/environments")),
                request::body(json_decoded(eq(json!({
                    "displayName": "prod",
                    "versionConfigs": [{"version": "v1"}, {"version": "v2"}],
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/c1"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("/v3/{env}")),
                request::query(url_decoded(contains(("updateMask", "description")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/u1"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{env}:lookupEnvironmentHistory")),
                request::query(url_decoded(contains(("pageToken", "next")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({"environments": [{"name": env}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{env}:runContinuousTest")),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/t1"}))),
        );
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                format!("/v3/{env}/continuousTestResults"),
            ))
            .respond_with(json_encoded(json!({"continuousTestResults": [
                {"result": "PASSED", "testCaseResults": ["r1", "r2"]},
            ]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{env}:deployFlow")),
                request::body(json_decoded(eq(json!({
                    "flowVersion": format!("{AGENT}/flows/f/versions/1"),
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/d1"}))),
        );

        let client = test_client(&server).await?;
        let environments = client.environments();
        use model::environment::VersionConfig;
        let operation = environments
            .create_environment(
                AGENT,
                model::Environment::new()
                    .set_display_name("prod")
                    .set_version_configs([
                        VersionConfig::new().set_version("v1"),
                        VersionConfig::new().set_version("v2"),
                    ]),
            )
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operations/c1"));

        let operation = environments
            .update_environment(
                &env,
                model::Environment::new().set_description("updated"),
                model::UpdateOptions::new()
                    .set_update_mask(wkt::FieldMask::default().set_paths(["description"])),
            )
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operations/u1"));

        let history = environments
            .lookup_environment_history(&env, model::ListOptions::new().set_page_token("next"))
            .await?;
        assert_eq!(history.environments.map(|v| v.len()), Some(1));

        let operation = environments
            .run_continuous_test(&env, model::RunContinuousTestRequest::new())
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operations/t1"));

        let results = environments
            .list_continuous_test_results(&env, model::ListOptions::new())
            .await?;
        let result = results
            .continuous_test_results
            .and_then(|v| v.into_iter().next())
            .ok_or_else(|| anyhow::anyhow!("missing result"))?;
        assert_eq!(result.result.as_deref(), Some("PASSED"));
        assert_eq!(
            result.test_case_results,
            Some(vec!["r1".to_string(), "r2".to_string()])
        );

        let operation = environments
            .deploy_flow(
                &env,
                model::DeployFlowRequest::new()
                    .set_flow_version(format!("{AGENT}/flows/f/versions/1")),
            )
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operations/d1"));
        Ok(())
    }

    #[tokio::test]
    async fn experiments() -> Result {
        let env = format!("{AGENT}/environments/e");
        let name = format!("{env}/experiments/x");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{name}:start")),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"name": name, "state": "RUNNING"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{name}:stop")),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"name": name, "state": "DONE"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{env}/experiments")),
                request::body(json_decoded(eq(json!({
                    "displayName": "x",
                    "experimentLength": "86400s",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": name}))),
        );

        let client = test_client(&server).await?;
        let experiments = client.experiments();
        let created = experiments
            .create_experiment(
                &env,
                model::Experiment::new()
                    .set_display_name("x")
                    .set_experiment_length(wkt::Duration::clamp(86400, 0)),
            )
            .await?;
        assert_eq!(created.name.as_deref(), Some(name.as_str()));
        let started = experiments.start_experiment(&name).await?;
        assert_eq!(started.state.as_deref(), Some("RUNNING"));
        let stopped = experiments.stop_experiment(&name).await?;
        assert_eq!(stopped.state.as_deref(), Some("DONE"));
        Ok(())
    }

    #[tokio::test]
    async fn flows() -> Result {
        let flow = format!("{AGENT}/flows/f");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{flow}")),
                request::query(url_decoded(contains(("languageCode", "es")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({"name": flow, "nluSettings": {
                "modelType": "MODEL_TYPE_ADVANCED",
                "classificationThreshold": 0.25,
            }}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("/v3/{flow}")),
                request::query(url_decoded(contains(("languageCode", "es")))),
                request::query(url_decoded(contains(("updateMask", "nluSettings")))),
            ])
            .respond_with(json_encoded(json!({"name": flow}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{flow}:train")),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/train"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{flow}/validationResult")),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({"validationMessages": [
                {"resourceType": "PAGE", "severity": "WARNING", "detail": "first"},
                {"resourceType": "FLOW", "severity": "ERROR", "detail": "second"},
            ]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/flows:import")),
                request::body(json_decoded(eq(json!({
                    "flowContent": "AQID",
                    "importOption": "KEEP",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/import"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{flow}:export")),
                request::body(json_decoded(eq(json!({"includeReferencedFlows": true})))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/export", "done": true, "response": {
                "flowContent": "AQID",
            }}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", format!("/v3/{flow}")),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(status_code(200).body("{}")),
        );

        let client = test_client(&server).await?;
        let flows = client.flows();
        let got = flows
            .get_flow(&flow, model::LanguageOptions::new().set_language_code("es"))
            .await?;
        let nlu = got.nlu_settings.clone().unwrap_or_default();
        assert_eq!(nlu.model_type.as_deref(), Some("MODEL_TYPE_ADVANCED"));
        assert_eq!(nlu.classification_threshold, Some(0.25));

        flows
            .update_flow(
                &flow,
                got,
                model::LocalizedUpdateOptions::new()
                    .set_language_code("es")
                    .set_update_mask(wkt::FieldMask::default().set_paths(["nluSettings"])),
            )
            .await?;

        let operation = flows.train_flow(&flow).await?;
        assert_eq!(operation.name.as_deref(), Some("operations/train"));

        let result = flows
            .get_flow_validation_result(
                &format!("{flow}/validationResult"),
                model::LanguageOptions::new(),
            )
            .await?;
        let details = result
            .validation_messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| m.detail)
            .collect::<Vec<_>>();
        assert_eq!(details, vec!["first", "second"]);

        let operation = flows
            .import_flow(
                AGENT,
                model::ImportFlowRequest::new()
                    .set_flow_content(bytes::Bytes::from_static(&[1, 2, 3]))
                    .set_import_option("KEEP"),
            )
            .await?;
        assert_eq!(operation.name.as_deref(), Some("operations/import"));

        let operation = flows
            .export_flow(
                &flow,
                model::ExportFlowRequest::new().set_include_referenced_flows(true),
            )
            .await?;
        let response = operation
            .response_as::<model::ExportFlowResponse>()
            .transpose()?
            .unwrap_or_default();
        assert_eq!(
            response.flow_content,
            Some(bytes::Bytes::from_static(&[1, 2, 3]))
        );

        flows.delete_flow(&flow, model::DeleteOptions::new()).await?;
        Ok(())
    }

    #[tokio::test]
    async fn pages_and_route_groups() -> Result {
        let flow = format!("{AGENT}/flows/f");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{flow}/pages")),
                request::query(url_decoded(len(eq(0)))),
                request::body(json_decoded(eq(json!({
                    "displayName": "Order",
                    "transitionRoutes": [
                        {"intent": "i1", "targetPage": "p1"},
                        {"condition": "true", "targetFlow": "f2"},
                    ],
                })))),
            ])
            .respond_with(json_encoded(json!({"name": format!("{flow}/pages/p")}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{flow}/transitionRouteGroups")),
                request::query(url_decoded(contains(("languageCode", "en")))),
            ])
            .respond_with(json_encoded(json!({"transitionRouteGroups": [{"displayName": "g"}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", format!("/v3/{flow}/transitionRouteGroups/g")),
                request::query(url_decoded(contains(("force", "false")))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let page = client
            .pages()
            .create_page(
                &flow,
                model::Page::new()
                    .set_display_name("Order")
                    .set_transition_routes([
                        model::TransitionRoute::new()
                            .set_intent("i1")
                            .set_target_page("p1"),
                        model::TransitionRoute::new()
                            .set_condition("true")
                            .set_target_flow("f2"),
                    ]),
                model::LanguageOptions::new(),
            )
            .await?;
        assert_eq!(page.name, Some(format!("{flow}/pages/p")));

        let groups = client
            .transition_route_groups()
            .list_transition_route_groups(
                &flow,
                model::LocalizedListOptions::new().set_language_code("en"),
            )
            .await?;
        assert_eq!(groups.transition_route_groups.map(|v| v.len()), Some(1));

        client
            .transition_route_groups()
            .delete_transition_route_group(
                &format!("{flow}/transitionRouteGroups/g"),
                model::DeleteOptions::new().set_force(false),
            )
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn versions() -> Result {
        let flow = format!("{AGENT}/flows/f");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{flow}/versions")),
                request::body(json_decoded(eq(json!({"displayName": "v1"})))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/v", "metadata": {
                "version": format!("{flow}/versions/1"),
            }}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{flow}/versions/1:load")),
                request::body(json_decoded(eq(json!({"allowOverrideAgentResources": true})))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/l"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{flow}/versions/1:compareVersions")),
                request::body(json_decoded(eq(json!({
                    "targetVersion": format!("{flow}/versions/2"),
                })))),
            ])
            .respond_with(json_encoded(json!({
                "baseVersionContentJson": "{}",
                "targetVersionContentJson": "{\"a\":1}",
                "compareTime": "2025-01-01T00:00:00Z",
            }))),
        );

        let client = test_client(&server).await?;
        let versions = client.versions();
        let operation = versions
            .create_version(&flow, model::Version::new().set_display_name("v1"))
            .await?;
        let metadata = operation
            .metadata_as::<model::CreateVersionOperationMetadata>()
            .transpose()?
            .and_then(|m| m.version);
        assert_eq!(metadata, Some(format!("{flow}/versions/1")));

        versions
            .load_version(
                &format!("{flow}/versions/1"),
                model::LoadVersionRequest::new().set_allow_override_agent_resources(true),
            )
            .await?;
        let diff = versions
            .compare_versions(
                &format!("{flow}/versions/1"),
                model::CompareVersionsRequest::new().set_target_version(format!("{flow}/versions/2")),
            )
            .await?;
        assert_eq!(diff.compare_time, Some(wkt::Timestamp::clamp(1735689600, 0)));
        Ok(())
    }

    #[tokio::test]
    async fn generators_and_intents() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("/v3/{AGENT}/generators/g")),
                request::query(url_decoded(contains(("languageCode", "en")))),
                request::body(json_decoded(eq(json!({"promptText": {"text": "Summarize $conversation"}})))),
            ])
            .respond_with(json_encoded(json!({"name": "g"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}/intents")),
                request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
                request::query(url_decoded(contains(("languageCode", "en")))),
            ])
            .respond_with(json_encoded(json!({"intents": [{
                "displayName": "order.pizza",
                "trainingPhrases": [{"parts": [{"text": "I want "}, {"text": "pizza", "parameterId": "food"}], "repeatCount": 1}],
            }]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/intents:export")),
                request::body(json_decoded(eq(json!({
                    "intents": ["i1", "i2"],
                    "intentsContentInline": true,
                    "dataFormat": "CSV",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/x", "done": true, "response": {
                "intentsContent": {"content": "aGk="},
            }}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", format!("/v3/{AGENT}/intents/i1")),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        client
            .generators()
            .update_generator(
                &format!("{AGENT}/generators/g"),
                model::Generator::new()
                    .set_prompt_text(model::Phrase::new().set_text("Summarize $conversation")),
                model::LocalizedUpdateOptions::new().set_language_code("en"),
            )
            .await?;

        let list = client
            .intents()
            .list_intents(
                AGENT,
                model::ListIntentsOptions::new()
                    .set_language_code("en")
                    .set_intent_view(model::IntentView::Full),
            )
            .await?;
        let intent = list
            .intents
            .and_then(|v| v.into_iter().next())
            .ok_or_else(|| anyhow::anyhow!("missing intent"))?;
        let parts = intent
            .training_phrases
            .unwrap_or_default()
            .into_iter()
            .flat_map(|p| p.parts.unwrap_or_default())
            .map(|p| (p.text.unwrap_or_default(), p.parameter_id))
            .collect::<Vec<_>>();
        assert_eq!(
            parts,
            vec![
                ("I want ".to_string(), None),
                ("pizza".to_string(), Some("food".to_string()))
            ]
        );

        let operation = client
            .intents()
            .export_intents(
                AGENT,
                model::ExportIntentsRequest::new()
                    .set_intents(["i1", "i2"])
                    .set_intents_content_inline(true)
                    .set_data_format("CSV"),
            )
            .await?;
        let content = operation
            .response_as::<model::ExportIntentsResponse>()
            .transpose()?
            .and_then(|r| r.intents_content)
            .and_then(|c| c.content);
        assert_eq!(content, Some(bytes::Bytes::from_static(b"hi")));

        client
            .intents()
            .delete_intent(&format!("{AGENT}/intents/i1"))
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn sessions() -> Result {
        let session = format!("{AGENT}/environments/draft/sessions/s-123");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{session}:detectIntent")),
                request::query(url_decoded(len(eq(0)))),
                request::body(json_decoded(eq(json!({
                    "queryParams": {"timeZone": "Europe/Paris", "parameters": {"size": "large"}},
                    "queryInput": {"text": {"text": "a large pizza"}, "languageCode": "en"},
                })))),
            ])
            .respond_with(json_encoded(json!({
                "responseId": "r1",
                "queryResult": {
                    "text": "a large pizza",
                    "responseMessages": [{"text": {"text": ["One large pizza coming up"]}}],
                    "parameters": {"size": "large"},
                },
                "outputAudio": "AQID",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{session}:matchIntent")),
                request::body(json_decoded(eq(json!({
                    "queryInput": {"event": {"event": "welcome"}, "languageCode": "en"},
                })))),
            ])
            .respond_with(json_encoded(json!({"matches": [
                {"matchType": "EVENT", "event": "welcome", "confidence": 1.0},
            ]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{session}:fulfillIntent")),
                request::body(json_decoded(eq(json!({
                    "match": {"matchType": "EVENT", "event": "welcome", "confidence": 1.0},
                })))),
            ])
            .respond_with(json_encoded(json!({"responseId": "r2"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{session}:submitAnswerFeedback")),
                request::body(json_decoded(eq(json!({
                    "responseId": "r1",
                    "answerFeedback": {"rating": "THUMBS_UP"},
                })))),
            ])
            .respond_with(json_encoded(json!({"rating": "THUMBS_UP"}))),
        );

        let client = test_client(&server).await?;
        let sessions = client.sessions();
        let mut parameters = serde_json::Map::new();
        parameters.insert("size".to_string(), json!("large"));
        let response = sessions
            .detect_intent(
                &session,
                model::DetectIntentRequest::new()
                    .set_query_params(
                        model::QueryParameters::new()
                            .set_time_zone("Europe/Paris")
                            .set_parameters(parameters.clone()),
                    )
                    .set_query_input(
                        model::QueryInput::new()
                            .set_language_code("en")
                            .set_text(model::TextInput::new().set_text("a large pizza")),
                    ),
            )
            .await?;
        assert_eq!(response.response_id.as_deref(), Some("r1"));
        assert_eq!(
            response.output_audio,
            Some(bytes::Bytes::from_static(&[1, 2, 3]))
        );
        let result = response.query_result.unwrap_or_default();
        assert_eq!(result.parameters, Some(parameters));
        let texts = result
            .response_messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| m.text)
            .flat_map(|t| t.text.unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["One large pizza coming up"]);

        let matches = sessions
            .match_intent(
                &session,
                model::MatchIntentRequest::new().set_query_input(
                    model::QueryInput::new()
                        .set_language_code("en")
                        .set_event(model::EventInput::new().set_event("welcome")),
                ),
            )
            .await?;
        let best = matches
            .matches
            .and_then(|v| v.into_iter().next())
            .ok_or_else(|| anyhow::anyhow!("missing match"))?;

        let fulfilled = sessions
            .fulfill_intent(&session, model::FulfillIntentRequest::new().set_match(best))
            .await?;
        assert_eq!(fulfilled.response_id.as_deref(), Some("r2"));

        let feedback = sessions
            .submit_answer_feedback(
                &session,
                model::SubmitAnswerFeedbackRequest::new()
                    .set_response_id("r1")
                    .set_answer_feedback(model::AnswerFeedback::new().set_rating("THUMBS_UP")),
            )
            .await?;
        assert_eq!(feedback.rating.as_deref(), Some("THUMBS_UP"));
        Ok(())
    }

    #[tokio::test]
    async fn session_entity_types() -> Result {
        let session = format!("{AGENT}/sessions/s-123");
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{session}/entityTypes")),
                request::body(json_decoded(eq(json!({
                    "name": format!("{session}/entityTypes/size"),
                    "entityOverrideMode": "ENTITY_OVERRIDE_MODE_SUPPLEMENT",
                    "entities": [{"value": "huge", "synonyms": ["huge", "xl"]}],
                })))),
            ])
            .respond_with(json_encoded(json!({"name": format!("{session}/entityTypes/size")}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{session}/entityTypes")),
                request::query(url_decoded(contains(("pageSize", "1")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({"nextPageToken": "more"}))),
        );

        let client = test_client(&server).await?;
        let created = client
            .session_entity_types()
            .create_session_entity_type(
                &session,
                model::SessionEntityType::new()
                    .set_name(format!("{session}/entityTypes/size"))
                    .set_entity_override_mode("ENTITY_OVERRIDE_MODE_SUPPLEMENT")
                    .set_entities([model::entity_type::Entity::new()
                        .set_value("huge")
                        .set_synonyms(["huge", "xl"])]),
            )
            .await?;
        assert!(created.name.is_some(), "{created:?}");

        let list = client
            .session_entity_types()
            .list_session_entity_types(&session, model::ListOptions::new().set_page_size(1))
            .await?;
        assert!(list.session_entity_types.is_none(), "{list:?}");
        assert_eq!(list.next_page_token.as_deref(), Some("more"));
        Ok(())
    }

    #[tokio::test]
    async fn test_cases() -> Result {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}/testCases")),
                request::query(url_decoded(contains(("view", "FULL")))),
            ])
            .respond_with(json_encoded(json!({"testCases": [{"displayName": "t"}]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/testCases:batchDelete")),
                request::body(json_decoded(eq(json!({"names": ["t1", "t2"]})))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/testCases/t1:run")),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/run"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/testCases:batchRun")),
                request::body(json_decoded(eq(json!({
                    "environment": format!("{AGENT}/environments/e"),
                    "testCases": ["t1"],
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/batch"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}/testCases:calculateCoverage")),
                request::query(url_decoded(contains(("type", "PAGE_TRANSITION")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(json_encoded(json!({"agent": AGENT, "transitionCoverage": {"coverageScore": 0.5}}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/testCases:import")),
                request::body(json_decoded(eq(json!({"content": "AQID"})))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/import"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/testCases:export")),
                request::body(json_decoded(eq(json!({
                    "gcsUri": "gs://bucket/tests",
                    "dataFormat": "JSON",
                    "filter": "display_name = \"t\"",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/export"}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{AGENT}/testCases/-/results")),
                request::query(url_decoded(contains(("filter", "environment=draft")))),
            ])
            .respond_with(json_encoded(json!({"testCaseResults": [
                {"name": "r1", "testResult": "PASSED", "testTime": "2025-01-01T00:00:00Z"},
            ]}))),
        );

        let client = test_client(&server).await?;
        let test_cases = client.test_cases();
        let list = test_cases
            .list_test_cases(
                AGENT,
                model::ListTestCasesOptions::new().set_view(model::TestCaseView::Full),
            )
            .await?;
        assert_eq!(list.test_cases.map(|v| v.len()), Some(1));

        let empty = test_cases
            .batch_delete_test_cases(
                AGENT,
                model::BatchDeleteTestCasesRequest::new().set_names(["t1", "t2"]),
            )
            .await?;
        assert_eq!(empty, wkt::Empty::default());

        test_cases
            .run_test_case(
                &format!("{AGENT}/testCases/t1"),
                model::RunTestCaseRequest::new(),
            )
            .await?;
        test_cases
            .batch_run_test_cases(
                AGENT,
                model::BatchRunTestCasesRequest::new()
                    .set_environment(format!("{AGENT}/environments/e"))
                    .set_test_cases(["t1"]),
            )
            .await?;

        let coverage = test_cases
            .calculate_coverage(
                AGENT,
                model::CalculateCoverageOptions::new().set_type(model::CoverageType::PageTransition),
            )
            .await?;
        assert!(coverage.transition_coverage.is_some(), "{coverage:?}");
        assert!(coverage.intent_coverage.is_none(), "{coverage:?}");

        test_cases
            .import_test_cases(
                AGENT,
                model::ImportTestCasesRequest::new()
                    .set_content(bytes::Bytes::from_static(&[1, 2, 3])),
            )
            .await?;
        test_cases
            .export_test_cases(
                AGENT,
                model::ExportTestCasesRequest::new()
                    .set_gcs_uri("gs://bucket/tests")
                    .set_data_format("JSON")
                    .set_filter("display_name = \"t\""),
            )
            .await?;

        let results = test_cases
            .list_test_case_results(
                &format!("{AGENT}/testCases/-"),
                model::FilteredListOptions::new().set_filter("environment=draft"),
            )
            .await?;
        let result = results
            .test_case_results
            .and_then(|v| v.into_iter().next())
            .ok_or_else(|| anyhow::anyhow!("missing result"))?;
        assert_eq!(result.test_result.as_deref(), Some("PASSED"));
        assert_eq!(result.test_time, Some(wkt::Timestamp::clamp(1735689600, 0)));
        Ok(())
    }

    #[tokio::test]
    async fn webhooks_and_security_settings() -> Result {
        let location = "projects/p/locations/global";
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", format!("/v3/{AGENT}/webhooks")),
                request::body(json_decoded(eq(json!({
                    "displayName": "fulfillment",
                    "genericWebService": {
                        "uri": "https://example.com/hook",
                        "allowedCaCerts": ["MII=", "AQID"],
                    },
                    "timeout": "5s",
                })))),
            ])
            .respond_with(json_encoded(json!({"name": format!("{AGENT}/webhooks/w")}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", format!("/v3/{AGENT}/webhooks/w")),
                request::query(url_decoded(contains(("force", "true")))),
                request::query(url_decoded(len(eq(1)))),
            ])
            .respond_with(status_code(204)),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", format!("/v3/{location}/securitySettings")),
                request::query(url_decoded(len(eq(0)))),
            ])
            .respond_with(json_encoded(json!({"securitySettings": [{
                "displayName": "strict",
                "retentionWindowDays": 30,
                "purgeDataTypes": ["DIALOGFLOW_HISTORY"],
            }]}))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", format!("/v3/{location}/securitySettings/s")),
                request::query(url_decoded(contains(("updateMask", "retentionWindowDays")))),
                request::body(json_decoded(eq(json!({"retentionWindowDays": 7})))),
            ])
            .respond_with(json_encoded(json!({"retentionWindowDays": 7}))),
        );

        let client = test_client(&server).await?;
        let webhook = client
            .webhooks()
            .create_webhook(
                AGENT,
                model::Webhook::new()
                    .set_display_name("fulfillment")
                    .set_generic_web_service(
                        model::webhook::GenericWebService::new()
                            .set_uri("https://example.com/hook")
                            .set_allowed_ca_certs([
                                bytes::Bytes::from_static(&[0x30, 0x82]),
                                bytes::Bytes::from_static(&[1, 2, 3]),
                            ]),
                    )
                    .set_timeout(wkt::Duration::clamp(5, 0)),
            )
            .await?;
        let name = webhook.name.unwrap_or_default();
        client
            .webhooks()
            .delete_webhook(&name, model::DeleteOptions::new().set_force(true))
            .await?;

        let list = client
            .security_settings()
            .list_security_settings(location, model::ListOptions::new())
            .await?;
        let settings = list
            .security_settings
            .and_then(|v| v.into_iter().next())
            .ok_or_else(|| anyhow::anyhow!("missing settings"))?;
        assert_eq!(settings.retention_window_days, Some(30));
        assert_eq!(
            settings.purge_data_types,
            Some(vec!["DIALOGFLOW_HISTORY".to_string()])
        );

        let updated = client
            .security_settings()
            .update_security_settings(
                &format!("{location}/securitySettings/s"),
                model::SecuritySettings::new().set_retention_window_days(7),
                model::UpdateOptions::new().set_update_mask(
                    wkt::FieldMask::default().set_paths(["retentionWindowDays"]),
                ),
            )
            .await?;
        assert_eq!(updated.retention_window_days, Some(7));
        Ok(())
    }
}
