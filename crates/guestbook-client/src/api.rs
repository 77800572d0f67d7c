use reqwest::Client;
use tracing::debug;

use guestbook_types::{Comment, CommentQuery, SessionStatus};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Thin typed wrapper over the four backend endpoints. Stateless; all
/// session and pagination state lives in the controller.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /data — one page of comments matching the query. The body is
    /// decoded separately from the transport so a malformed payload is
    /// reported as a decode failure, not a network one.
    pub async fn fetch_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>, ClientError> {
        debug!(max_results = query.max_results, cursor = ?query.cursor, "fetching comments");
        let body = self
            .http
            .get(self.url("/data"))
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// GET /login-status — the backend answers with a bare link, a logout
    /// link while a session is active and a login link otherwise.
    pub async fn login_status(&self) -> Result<SessionStatus, ClientError> {
        let body = self
            .http
            .get(self.url("/login-status"))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(SessionStatus::from_link(&body))
    }

    /// POST /delete-data — returns the server's confirmation message.
    pub async fn delete_comment(&self, id: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.url("/delete-data"))
            .form(&[("id", id)])
            .send()
            .await?;

        let status = response.status();
        let message = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::ServerRejection { status, message });
        }
        Ok(message.trim().to_string())
    }

    /// GET /blob-url — a single-use upload URL for the attachment form.
    pub async fn blob_upload_url(&self) -> Result<String, ClientError> {
        let response = self.http.get(self.url("/blob-url")).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ClientError::ServerRejection { status, message: body });
        }
        Ok(body.trim().to_string())
    }
}
