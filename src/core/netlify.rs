//! Netlify forms API: fetch the submissions of a form.

use reqwest::StatusCode;

use crate::core::app;
use crate::core::submission::Submission;

/// Why the submissions could not be retrieved.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("response is not a JSON array of submissions: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Minimal client for the forms endpoints. The access token travels as a query parameter.
pub struct NetlifyClient {
    http: reqwest::Client,
    api_base: String,
    access_token: String,
}

impl NetlifyClient {
    pub fn new(api_base: &str, access_token: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("{}/{}", app::NAME, app::VERSION))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    /// Submissions endpoint for a form, without the token.
    pub fn submissions_url(&self, form_id: &str) -> String {
        format!("{}/forms/{}/submissions/", self.api_base, form_id)
    }

    /// Single GET, no paging. Anything but 200 is a failure.
    pub async fn fetch_submissions(&self, form_id: &str) -> Result<Vec<Submission>, FetchError> {
        let url = self.submissions_url(form_id);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .await
            // The URL carries the token; keep it out of logs.
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;
        log::trace!("{} bytes from {}", body.len(), url);
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn submissions_url_embeds_form_id() {
        let client = NetlifyClient::new("https://api.netlify.com/api/v1/", "tok").unwrap();
        assert_eq!(
            client.submissions_url("abc123"),
            "https://api.netlify.com/api/v1/forms/abc123/submissions/"
        );
    }

    #[tokio::test]
    async fn fetches_submissions_with_token_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/forms/form-1/submissions/")
                    .query_param("access_token", "secret");
                then.status(200).json_body(json!([
                    {"id": "1", "data": {"path": "/a", "comment": "first"}},
                    {"id": "2", "data": {"path": "/b", "comment": "second"}}
                ]));
            })
            .await;

        let client = NetlifyClient::new(&server.base_url(), "secret").unwrap();
        let submissions = client.fetch_submissions("form-1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[1].data.comment, Some(json!("second")));
    }

    #[tokio::test]
    async fn non_200_is_a_status_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/forms/form-1/submissions/");
                then.status(401).body("unauthorized");
            })
            .await;

        let client = NetlifyClient::new(&server.base_url(), "bad").unwrap();
        match client.fetch_submissions("form-1").await {
            Err(FetchError::Status(status)) => assert_eq!(status, StatusCode::UNAUTHORIZED),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_array_body_is_a_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/forms/form-1/submissions/");
                then.status(200).json_body(json!({"message": "not a list"}));
            })
            .await;

        let client = NetlifyClient::new(&server.base_url(), "tok").unwrap();
        let err = client.fetch_submissions("form-1").await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn transport_error_does_not_leak_token() {
        // Nothing listens on port 1.
        let client = NetlifyClient::new("http://127.0.0.1:1", "very-secret-token").unwrap();
        let err = client.fetch_submissions("form-1").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
        assert!(!err.to_string().contains("very-secret-token"));
    }
}
