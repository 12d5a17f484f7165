use super::{ListingElement, ListingError};
use crate::config::ApiConfig;
use reqwest::Client;

/// Fetches the listing from the configured endpoint.
///
/// One GET per call: no retries, no timeout, no cancellation. Overlap is
/// prevented one level up by [`super::ListingState::begin_fetch`].
#[derive(Debug, Clone)]
pub struct ListingClient {
    http_client: Client,
    url: String,
}

impl ListingClient {
    pub fn new(url: impl Into<String>) -> Self {
        ListingClient {
            http_client: Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch_elements(&self) -> Result<Vec<ListingElement>, ListingError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(ListingError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .json::<Vec<ListingElement>>()
            .await
            .map_err(ListingError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingState;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> MockServer {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        MockServer::start().await
    }

    fn client_for(server: &MockServer) -> ListingClient {
        ListingClient::new(format!("{}/elements", server.uri()))
    }

    #[tokio::test]
    async fn fetches_and_decodes_elements() {
        let server = setup().await;
        Mock::given(method("GET"))
            .and(path("/elements"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "name": "Ann", "createdAt": "2025-01-30T10:00:00.000Z"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let elements = client_for(&server).fetch_elements().await.unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name, "Ann");
        assert_eq!(
            elements[0].created_at.as_deref(),
            Some("2025-01-30T10:00:00.000Z")
        );
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_code() {
        let server = setup().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_elements().await.unwrap_err();

        assert!(matches!(err, ListingError::Status { code: 500, .. }));
        assert_eq!(err.user_message(), "Error 500: Internal Server Error");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = setup().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_elements().await.unwrap_err();

        assert!(matches!(err, ListingError::Decode(_)));
        assert!(!err.user_message().is_empty());
    }

    #[tokio::test]
    async fn empty_url_fails_without_panicking() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let client = ListingClient::new("");

        let err = client.fetch_elements().await.unwrap_err();

        assert!(matches!(err, ListingError::Request(_)));
        assert!(!err.user_message().is_empty());
    }

    #[tokio::test]
    async fn refresh_failure_keeps_loaded_elements() {
        let server = setup().await;
        let client = client_for(&server);
        let mut state = ListingState::new();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "1", "name": "Ann"}
            ])))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(state.begin_fetch());
        state.finish(client.fetch_elements().await);
        assert_eq!(state.elements().len(), 1);

        assert!(state.begin_fetch());
        state.finish(client.fetch_elements().await);

        assert!(!state.loading());
        assert!(state.error().unwrap().contains("500"));
        assert_eq!(state.elements()[0].name, "Ann");
    }

    #[tokio::test]
    async fn empty_array_loads_without_error() {
        let server = setup().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;
        let mut state = ListingState::new();

        state.begin_fetch();
        state.finish(client_for(&server).fetch_elements().await);

        assert!(state.is_empty());
        assert!(state.error().is_none());
    }
}
