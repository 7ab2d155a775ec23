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

//! Provide types for client construction.
//!
//! Applications configure clients with a generic builder. Use it to set the
//! credentials (always required), to override the endpoint, or to enable
//! tracing.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client for a regional agent
//!
//! ```
//! # use dialogflow_cx_gax::client_builder::examples;
//! # use dialogflow_cx_gax::client_builder::Result;
//! # use dialogflow_cx_gax::credentials::AccessTokenCredentials;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://us-central1-dialogflow.googleapis.com")
//!     .with_credentials(AccessTokenCredentials::new("ya29.test-only"))
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::credentials::Credentials;

/// The result type for client construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```
/// # use dialogflow_cx_gax::client_builder::examples;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// match Client::builder().build().await {
///     Ok(_) => { /* use the client */ },
///     Err(e) if e.is_credentials() => { println!("missing credentials: {e:?}") },
///     Err(e) => { println!("some other problem: {e:?}") },
/// }
/// # });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not be created because the credentials are
    /// missing or invalid.
    pub fn is_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::Credentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Credentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("missing or invalid credentials")]
    Credentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// This type holds the [ClientConfig][crate::options::ClientConfig] and a
/// factory that creates the client from it.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F> {
    config: crate::options::ClientConfig,
    factory: F,
}

impl<F> ClientBuilder<F> {
    /// Creates a new client.
    ///
    /// ```
    /// # use dialogflow_cx_gax::client_builder::examples;
    /// # use dialogflow_cx_gax::credentials::AnonymousCredentials;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_credentials(AnonymousCredentials::new())
    ///     .build().await?;
    /// # dialogflow_cx_gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// Agents in a region other than `global` must use the matching regional
    /// endpoint, e.g. `https://europe-west1-dialogflow.googleapis.com`.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client emits [tracing] spans and events for each request. The
    /// application must install a subscriber to consume them.
    ///
    /// [tracing]: https://docs.rs/tracing
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configures the authentication credentials.
    ///
    /// ```
    /// # use dialogflow_cx_gax::client_builder::examples;
    /// # use dialogflow_cx_gax::credentials::AccessTokenCredentials;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_credentials(AccessTokenCredentials::new("ya29.test-only"))
    ///     .build().await?;
    /// # dialogflow_cx_gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn with_credentials<T: Into<Credentials>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Sets the value of the `user-agent` header.
    ///
    /// The value replaces the default `user-agent` header. The
    /// `x-goog-api-client` header is sent regardless.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }

    /// Sets the maximum time for each request.
    ///
    /// Requests that take longer fail with an error where
    /// [is_timeout()][crate::error::Error::is_timeout] is true.
    pub fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.config.attempt_timeout = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;
    use crate::options::ClientConfig;

    pub trait ClientFactory {
        type Client;
        fn build(self, config: ClientConfig) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, C>(factory: F) -> super::ClientBuilder<F>
    where
        F: ClientFactory<Client = C>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! Helper types used in the rustdoc examples.

    use super::{Error, Result};
    use crate::options::ClientConfig;

    #[allow(dead_code)]
    pub struct Client(ClientConfig);
    impl Client {
        pub fn builder() -> super::ClientBuilder<Factory> {
            super::internal::new_builder(Factory)
        }
    }

    pub struct Factory;
    impl super::internal::ClientFactory for Factory {
        type Client = Client;
        async fn build(self, config: ClientConfig) -> Result<Self::Client> {
            if config.cred.is_none() {
                return Err(Error::cred("no credentials configured"));
            }
            Ok(Client(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::AnonymousCredentials;
    use crate::options::ClientConfig;
    use std::time::Duration;

    #[derive(Debug)]
    struct TestClient {
        config: ClientConfig,
    }

    struct TestFactory;
    impl internal::ClientFactory for TestFactory {
        type Client = TestClient;
        async fn build(self, config: ClientConfig) -> Result<Self::Client> {
            Ok(TestClient { config })
        }
    }

    #[tokio::test]
    async fn defaults() -> anyhow::Result<()> {
        let client = internal::new_builder(TestFactory).build().await?;
        assert!(client.config.endpoint.is_none(), "{client:?}");
        assert!(client.config.cred.is_none(), "{client:?}");
        assert!(!client.config.tracing, "{client:?}");
        assert!(client.config.user_agent.is_none(), "{client:?}");
        assert!(client.config.attempt_timeout.is_none(), "{client:?}");
        Ok(())
    }

    #[tokio::test]
    async fn setters() -> anyhow::Result<()> {
        let client = internal::new_builder(TestFactory)
            .with_endpoint("http://localhost:8080")
            .with_credentials(AnonymousCredentials::new())
            .with_tracing()
            .with_user_agent("test-agent")
            .with_attempt_timeout(Duration::from_secs(5))
            .build()
            .await?;
        assert_eq!(
            client.config.endpoint.as_deref(),
            Some("http://localhost:8080")
        );
        assert!(client.config.cred.is_some(), "{client:?}");
        assert!(client.config.tracing, "{client:?}");
        assert_eq!(client.config.user_agent.as_deref(), Some("test-agent"));
        assert_eq!(client.config.attempt_timeout, Some(Duration::from_secs(5)));
        Ok(())
    }

    #[test]
    fn errors() {
        let e = Error::cred("simulated");
        assert!(e.is_credentials(), "{e:?}");
        assert!(!e.is_transport(), "{e:?}");
        let e = Error::transport("simulated");
        assert!(e.is_transport(), "{e:?}");
        assert!(!e.is_credentials(), "{e:?}");
    }

    #[tokio::test]
    async fn examples_require_credentials() {
        let got = examples::Client::builder().build().await;
        assert!(matches!(&got, Err(e) if e.is_credentials()), "missing credentials");
    }
}
