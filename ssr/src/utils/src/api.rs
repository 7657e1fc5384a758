use consts::API_BASE_URL;
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::feed::{decode::decode_page, Page};
use crate::types::SessionUser;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Invalid endpoint: {0}")]
    Endpoint(String),
}

impl ApiError {
    /// The response body is the message when there is one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("Request failed with status {status}")
        } else {
            body.to_string()
        };
        Self::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// Thin client over the backend's JSON API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: Url,
    client: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE_URL.clone())
    }
}

impl ApiClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Endpoint(format!("{path}: {e}")))
    }

    /// `GET <resource>?cursor=<cursor>`, decoded through the listing shim.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        cursor: Option<&str>,
        item_keys: &[&str],
    ) -> Result<Page<T>, ApiError> {
        let url = listing_url(self.endpoint(resource)?, cursor);
        log::debug!("GET {url}");

        let res = send(self.client.get(url)).await?;
        let res = error_for_status(res).await?;
        let body: Value = res
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(decode_page(body, item_keys))
    }

    /// `POST <resource>/<id>/like`. Any 2xx confirms; the body is ignored.
    pub async fn like(&self, resource: &str, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&like_path(resource, id))?;
        log::debug!("POST {url}");

        let res = send(self.client.post(url)).await?;
        error_for_status(res).await?;
        Ok(())
    }

    /// The signed-in user, or `None` for anonymous viewers.
    pub async fn session(&self, resource: &str) -> Result<Option<SessionUser>, ApiError> {
        let res = send(self.client.get(self.endpoint(resource)?)).await?;
        if matches!(res.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Ok(None);
        }
        let res = error_for_status(res).await?;
        let body: Option<SessionUser> = res
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body)
    }
}

async fn send(req: RequestBuilder) -> Result<Response, ApiError> {
    // session cookies live on the API origin
    #[cfg(target_arch = "wasm32")]
    let req = req.fetch_credentials_include();

    Ok(req.send().await?)
}

async fn error_for_status(res: Response) -> Result<Response, ApiError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ApiError::from_status(status.as_u16(), &body))
}

fn listing_url(mut url: Url, cursor: Option<&str>) -> Url {
    if let Some(cursor) = cursor {
        url.query_pairs_mut().append_pair("cursor", cursor);
    }
    url
}

fn like_path(resource: &str, id: &str) -> String {
    format!(
        "{}/{}/like",
        resource.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Url::parse("https://api.example.com/v1/").unwrap())
    }

    #[test]
    fn status_error_prefers_body_text() {
        let e = ApiError::from_status(502, "  upstream down \n");
        assert_eq!(e.to_string(), "upstream down");
        assert_eq!(e.status(), Some(502));
    }

    #[test]
    fn status_error_without_body_names_the_code() {
        let e = ApiError::from_status(500, "");
        assert_eq!(e.to_string(), "Request failed with status 500");
    }

    #[test]
    fn listing_url_appends_cursor_only_when_present() {
        let base = client().endpoint("reels").unwrap();
        assert_eq!(
            listing_url(base.clone(), None).as_str(),
            "https://api.example.com/v1/reels"
        );
        assert_eq!(
            listing_url(base, Some("a b&c")).as_str(),
            "https://api.example.com/v1/reels?cursor=a+b%26c"
        );
    }

    #[test]
    fn like_endpoint_escapes_id() {
        let url = client().endpoint(&like_path("posts/", "x/y")).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/posts/x%2Fy/like");
    }
}
