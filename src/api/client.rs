//! HTTP client for the `/api/admin` endpoints.

use std::rc::Rc;

use admin_wire::{AdminUser, ErrorDetail, OtpRequest, RunRecord, TokenResponse};
use async_trait::async_trait;
use reqwest::{multipart, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::{AdminApi, ApiError, ME_PATH, OTP_PATH, RUNS_PATH, TOKEN_PATH};
use crate::config::{AppConfig, MAX_RUNS_PAGE_SIZE};
use crate::session::SessionStore;

/// Talks to one configured API origin. Bearer auth for protected calls is
/// read from the shared session store on every request.
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    config: AppConfig,
    session: Rc<dyn SessionStore>,
}

impl AdminClient {
    /// Create the client. `config` already guarantees an API origin.
    pub fn new(config: AppConfig, session: Rc<dyn SessionStore>) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn bearer_token(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::NoToken)
    }

    /// Send `request` and decode the JSON body into `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorDetail>(&body)
                .ok()
                .map(|e| e.message())
                .filter(|m| !m.is_empty());
            warn!(path, status = status.as_u16(), ?detail, "Admin API request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        debug!(path, status = status.as_u16(), bytes = body.len(), "Admin API response");

        // An empty 2xx body decodes as JSON null
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    async fn get_authorized<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let token = self.bearer_token()?;
        debug!(path, "GET");
        let request = self
            .client
            .get(self.config.endpoint(path))
            .query(query)
            .bearer_auth(token);
        self.execute(path, request).await
    }
}

#[async_trait(?Send)]
impl AdminApi for AdminClient {
    async fn request_otp(&self, phone_number: &str) -> Result<Value, ApiError> {
        debug!(path = OTP_PATH, "Requesting OTP");
        let request = self
            .client
            .post(self.config.endpoint(OTP_PATH))
            .json(&OtpRequest::new(phone_number));
        self.execute(OTP_PATH, request).await
    }

    async fn verify_otp(&self, phone_number: &str, otp: &str) -> Result<TokenResponse, ApiError> {
        debug!(path = TOKEN_PATH, "Verifying OTP");
        let form = multipart::Form::new()
            .text("username", phone_number.to_string())
            .text("password", otp.to_string());
        let request = self
            .client
            .post(self.config.endpoint(TOKEN_PATH))
            .multipart(form);
        self.execute(TOKEN_PATH, request).await
    }

    async fn list_runs(&self) -> Result<Vec<RunRecord>, ApiError> {
        self.get_authorized(RUNS_PATH, &[]).await
    }

    async fn list_runs_page(&self, page_size: u8) -> Result<Vec<RunRecord>, ApiError> {
        if page_size == 0 || page_size > MAX_RUNS_PAGE_SIZE {
            return Err(ApiError::InvalidPageSize(page_size));
        }
        self.get_authorized(RUNS_PATH, &[("page_size", page_size.to_string())])
            .await
    }

    async fn current_user(&self) -> Result<AdminUser, ApiError> {
        self.get_authorized(ME_PATH, &[]).await
    }
}
