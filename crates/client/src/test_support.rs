//! Test helpers: a wiremock-backed server plus pre-configured entity
//! services, so HTTP-level tests never hit a real backend.

#![cfg(test)]

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::ClientConfig;
use crate::resource::{EntityService, RestResource};

pub struct TestApi {
    pub server: MockServer,
}

impl TestApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.server.uri())
    }

    pub fn service<T: RestResource>(&self) -> EntityService<T> {
        EntityService::new(self.config()).expect("client must build")
    }

    pub fn strict_service<T: RestResource>(&self) -> EntityService<T> {
        EntityService::new(self.config().with_strict_envelopes(true)).expect("client must build")
    }

    pub fn authed_service<T: RestResource>(&self, token: &str) -> EntityService<T> {
        EntityService::new(self.config().with_bearer_token(token)).expect("client must build")
    }

    /// Mount a 200 GET responder for `endpoint` with the given body.
    pub async fn mock_get_json(&self, endpoint: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}
