use crate::api::query::PackageQuery;
use crate::api::transport::{CatalogResponse, CatalogTransport};
use crate::config::{DEFAULT_API_BASE_URL, DiscoConfig};
use crate::error::{DiscoError, Result};
use crate::user_agent;
use attohttpc::Session;
use log::{debug, trace};
use std::time::Duration;

pub const API_VERSION: &str = "v3.0";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(20);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// attohttpc-backed transport for the foojay disco API.
///
/// Requests are sent once; a failed request is reported, not retried.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) session: Session,
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::api_client());
        session.header("Accept", "application/json");
        session.connect_timeout(CONNECT_TIMEOUT);
        session.read_timeout(DEFAULT_READ_TIMEOUT);
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    pub fn from_config(config: &DiscoConfig) -> Self {
        Self::new()
            .with_base_url(config.api.base_url.clone())
            .with_timeout(config.api_timeout())
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the read timeout. The connect timeout stays fixed.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session.read_timeout(timeout);
        self
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{API_VERSION}/{endpoint}", self.base_url)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogTransport for ApiClient {
    fn get(&self, endpoint: &str, query: &PackageQuery) -> Result<CatalogResponse> {
        let url = self.endpoint_url(endpoint);
        if query.is_empty() {
            debug!("API Request: {url}");
        } else {
            debug!("API Request: {url}?{query}");
        }

        let mut request = self.session.get(&url);
        for (key, value) in query.params() {
            request = request.param(key, value);
        }

        let response = request.send().map_err(|e| {
            DiscoError::Transport(format!(
                "Network error connecting to foojay.io API {API_VERSION}: {e}. Please check your internet connection and try again."
            ))
        })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| {
            DiscoError::Transport(format!("Failed to read response body: {e}"))
        })?;

        debug!("API Response: {status} from {url}");
        trace!("Response body: {body}");

        Ok(CatalogResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[test]
    fn test_api_client_creation() {
        let client = ApiClient::new();
        assert_eq!(client.base_url, "https://api.foojay.io/disco");
        assert_eq!(
            client.endpoint_url("packages"),
            "https://api.foojay.io/disco/v3.0/packages"
        );
    }

    #[test]
    fn test_api_client_with_custom_base_url() {
        let client = ApiClient::new().with_base_url("https://test.example.com/".to_string());
        assert_eq!(client.base_url, "https://test.example.com");
        assert_eq!(client.endpoint_url("ids/abc"), "https://test.example.com/v3.0/ids/abc");
    }

    #[test]
    fn test_get_sends_parameters_and_headers() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/v3.0/packages")
            .match_header("accept", "application/json")
            .match_header("user-agent", Matcher::Regex("^discocli/api/".to_string()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("distro".into(), "zulu".into()),
                Matcher::UrlEncoded("latest".into(), "available".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"result":[]}"#)
            .create();

        let client = ApiClient::new().with_base_url(server.url());
        let query = PackageQuery::new()
            .param("distro", "zulu")
            .param("latest", "available");

        let response = client.get("packages", &query).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"result":[]}"#);
        mock.assert();
    }

    #[test]
    fn test_get_reports_error_status_as_response() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/v3.0/ids/missing")
            .with_status(404)
            .with_body("not found")
            .expect(1)
            .create();

        let client = ApiClient::new().with_base_url(server.url());
        let response = client.get("ids/missing", &PackageQuery::new()).unwrap();

        assert_eq!(response.status, 404);
        // no retry
        mock.assert();
    }

    #[test]
    fn test_get_without_server_is_transport_error() {
        let client = ApiClient::new()
            .with_base_url("http://127.0.0.1:1".to_string())
            .with_timeout(Duration::from_millis(200));

        let err = client.get("packages", &PackageQuery::new()).unwrap_err();
        assert!(matches!(err, DiscoError::Transport(_)));
    }
}
