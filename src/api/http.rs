//! reqwest-backed [`PostApi`] talking to the image-sharing service.
//!
//! Both endpoints take and return JSON:
//!
//! ```text
//! POST {base}/api/v1/dalle   {"prompt"}              → {"photo": <base64>}
//! POST {base}/api/v1/post    {"name","prompt","photo"} → any JSON
//! ```

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::api::client::{ApiError, PostApi};
use crate::api::types::{CreatePostRequest, GenerateImageRequest, GenerateImageResponse};
use crate::core::draft::PostDraft;
use crate::core::photo;

const GENERATE_PATH: &str = "/api/v1/dalle";
const CREATE_POST_PATH: &str = "/api/v1/post";

pub struct HttpPostApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPostApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POSTs `body` as JSON and parses the reply as `T`.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("POST {} -> {}", url, status);

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("POST {} failed: {} - {}", url, status, text);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait]
impl PostApi for HttpPostApi {
    async fn generate_image(&self, prompt: &str) -> Result<String, ApiError> {
        info!("Requesting image: prompt_len={}", prompt.len());
        let response: GenerateImageResponse = self
            .post_json(GENERATE_PATH, &GenerateImageRequest { prompt })
            .await?;
        if response.photo.is_empty() {
            return Err(ApiError::Parse("response contained an empty photo".to_string()));
        }
        photo::validate_payload(&response.photo).map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(response.photo)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<(), ApiError> {
        info!(
            "Creating post: name={:?}, prompt_len={}",
            draft.name,
            draft.prompt.len()
        );
        let _ack: serde_json::Value = self
            .post_json(CREATE_POST_PATH, &CreatePostRequest::from_draft(draft))
            .await?;
        Ok(())
    }
}
