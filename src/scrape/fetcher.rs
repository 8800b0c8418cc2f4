use std::time::Duration;

use reqwest::Client;

use crate::USER_AGENT;
use crate::error::{Error, FetchError};

/// The reference upstream has no request deadline; a bounded timeout keeps a
/// hung page from wedging a refresh cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP retrieval for one source page at a time. Every request carries the
/// fixed identification header; upstream sources reject unidentified clients.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::HttpClientError(e.to_string()))?;
        Ok(Fetcher { client })
    }

    /// GET one source page. Transport failures and non-success statuses are
    /// classified separately; neither is retried.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_page_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/commodities/gold"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gold</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let body = fetcher
            .fetch(&format!("{}/commodities/gold", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>gold</html>");
    }

    #[tokio::test]
    async fn non_success_status_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new().unwrap();
        let err = fetcher.fetch(&server.uri()).await.unwrap_err();
        assert_eq!(err, FetchError::Status(503));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let fetcher = Fetcher::new().unwrap();
        // port 9 (discard) refuses connections on loopback
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
