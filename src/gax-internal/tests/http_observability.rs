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

//! Verify `ReqwestClient` emits tracing spans and events only when tracing
//! is enabled.

#[cfg(test)]
mod tests {
    use dialogflow_cx_gax_internal::http::{NoBody, ReqwestClient};
    use dialogflow_cx_gax_internal::options::{ClientConfig, InstrumentationClientInfo};
    use gax::credentials::{AnonymousCredentials, Credentials};
    use gax::error::CredentialsError;
    use gax::options::LOGGING_VAR;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use scoped_env::ScopedEnv;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type Result<T> = anyhow::Result<T>;

    static INSTRUMENTATION: InstrumentationClientInfo = InstrumentationClientInfo {
        service_name: "dialogflow",
        client_version: "1.2.3",
        client_artifact: "dialogflow-cx-v3",
        default_host: "dialogflow.googleapis.com",
    };

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            let buffer = self.0.lock().expect("capture buffer is never poisoned");
            String::from_utf8_lossy(&buffer).to_string()
        }
    }

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let mut buffer = self.0.lock().expect("capture buffer is never poisoned");
            buffer.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_subscriber() -> (Capture, impl tracing::Subscriber + Send + Sync) {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        (capture, subscriber)
    }

    #[derive(Debug)]
    struct FailingCredentials;

    #[async_trait::async_trait]
    impl gax::credentials::CredentialsProvider for FailingCredentials {
        async fn headers(&self) -> std::result::Result<http::HeaderMap, CredentialsError> {
            Err(CredentialsError::from_msg(false, "simulated failure"))
        }
    }

    fn test_config() -> ClientConfig {
        ClientConfig::default().set_credential(Credentials::from(AnonymousCredentials::new()))
    }

    async fn send(config: ClientConfig, server: &Server, path: &str) -> Result<()> {
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(config, &endpoint)
            .await?
            .with_instrumentation(&INSTRUMENTATION);
        let builder = client.builder(reqwest::Method::GET, path.to_string());
        let _ = client
            .execute::<NoBody, serde_json::Value>(builder, None)
            .await;
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn tracing_enabled_success() -> Result<()> {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/projects/p/agents"))
                .respond_with(json_encoded(json!({}))),
        );
        let (capture, subscriber) = capture_subscriber();
        let _guard = tracing::subscriber::set_default(subscriber);

        send(test_config().enable_tracing(), &server, "/v3/projects/p/agents").await?;

        let got = capture.contents();
        assert!(got.contains("http_request"), "{got}");
        assert!(got.contains("request succeeded"), "{got}");
        assert!(got.contains("/v3/projects/p/agents"), "{got}");
        assert!(got.contains("dialogflow-cx-v3"), "{got}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn tracing_enabled_error() -> Result<()> {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/missing"))
                .respond_with(status_code(404).body("not found")),
        );
        let (capture, subscriber) = capture_subscriber();
        let _guard = tracing::subscriber::set_default(subscriber);

        send(test_config().enable_tracing(), &server, "/v3/missing").await?;

        let got = capture.contents();
        assert!(got.contains("request failed"), "{got}");
        assert!(got.contains("WARN"), "{got}");
        assert!(got.contains("404"), "{got}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn tracing_enabled_auth_error() -> Result<()> {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        // No expectations, the request must not reach the server.
        let server = Server::run();
        let (capture, subscriber) = capture_subscriber();
        let _guard = tracing::subscriber::set_default(subscriber);

        let config = ClientConfig::default()
            .set_credential(Credentials::from(FailingCredentials))
            .enable_tracing();
        send(config, &server, "/v3/projects/p/agents").await?;

        let got = capture.contents();
        assert!(got.contains("http_request"), "{got}");
        assert!(got.contains("request failed"), "{got}");
        assert!(got.contains("CLIENT_AUTHENTICATION_ERROR"), "{got}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn tracing_enabled_by_environment() -> Result<()> {
        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/env"))
                .respond_with(json_encoded(json!({}))),
        );
        let (capture, subscriber) = capture_subscriber();
        let _guard = tracing::subscriber::set_default(subscriber);

        send(test_config(), &server, "/v3/env").await?;

        let got = capture.contents();
        assert!(got.contains("request succeeded"), "{got}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn tracing_disabled() -> Result<()> {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v3/quiet"))
                .respond_with(json_encoded(json!({}))),
        );
        let (capture, subscriber) = capture_subscriber();
        let _guard = tracing::subscriber::set_default(subscriber);

        send(test_config(), &server, "/v3/quiet").await?;

        let got = capture.contents();
        assert!(!got.contains("http_request"), "{got}");
        assert!(!got.contains("request succeeded"), "{got}");
        Ok(())
    }
}
