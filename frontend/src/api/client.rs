use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{header::HeaderMap, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config, state::session::Session};

const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// The order backend reads a raw `token` header, the user backend a
    /// bearer token; both are sent.
    pub(crate) fn auth_headers(session: &Session) -> Result<HeaderMap, ApiError> {
        let token = session
            .token
            .as_deref()
            .ok_or_else(|| ApiError::unauthorized("No token"))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        headers.insert(
            "token",
            token
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            log::error!("request failed: {}", e);
            ApiError::request_failed(format!("Request failed: {}", e))
        })
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        mock::dispatch(&request)
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.ok();
        let error = ApiError::from_status(status, body);
        log::warn!("request rejected ({}): {}", status, error);
        error
    }
}

pub(crate) fn encode_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock::{register_mock, MockResponse, TestResponder};
