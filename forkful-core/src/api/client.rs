//! HTTP implementation of the catalog API.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{CreateRecipeRequest, Recipe};

use super::RecipeApi;

const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";
const DEFAULT_IMAGES_BASE: &str = "http://localhost:8080/images";

/// Configuration for ApiClient.
#[derive(Clone)]
pub struct ApiClientBuilder {
    base_url: String,
    images_base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            images_base_url: DEFAULT_IMAGES_BASE.to_string(),
            user_agent: "forkful/0.1".to_string(),
            // Requests carry no timeout unless one is set explicitly.
            timeout: None,
        }
    }

    /// Set the API base URL (trailing slashes are stripped).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the base URL image paths are resolved against.
    pub fn images_base_url(mut self, url: impl Into<String>) -> Self {
        self.images_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the ApiClient.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build()?;
        Ok(ApiClient {
            inner,
            base_url: self.base_url,
            images_base_url: self.images_base_url,
        })
    }
}

/// Production API client over reqwest.
///
/// No retries, no caching, no in-flight cancellation: a request either
/// resolves or surfaces its transport error to the caller.
pub struct ApiClient {
    inner: reqwest::Client,
    base_url: String,
    images_base_url: String,
}

impl ApiClient {
    /// Create a new ApiClient with default configuration.
    pub fn new() -> Result<Self, ApiError> {
        ApiClientBuilder::new().build()
    }

    /// Get a builder for custom configuration.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Resolve a recipe's relative image path against the images base URL.
    pub fn image_url(&self, image: &str) -> String {
        format!("{}/{}", self.images_base_url, image)
    }

    fn check_status(url: &str, response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = %status, "request failed");
            return Err(ApiError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl RecipeApi for ApiClient {
    async fn list_recipes(&self, query: &str) -> Result<Vec<Recipe>, ApiError> {
        let url = format!("{}/recipes", self.base_url);
        tracing::debug!(url = %url, query, "listing recipes");
        let response = self
            .inner
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;
        let response = Self::check_status(&url, response)?;
        response
            .json::<Vec<Recipe>>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        let url = format!("{}/recipe/{}", self.base_url, id);
        tracing::debug!(url = %url, "fetching recipe");
        let response = self.inner.get(&url).send().await?;
        let response = Self::check_status(&url, response)?;
        response
            .json::<Recipe>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    async fn create_recipe(&self, recipe: &CreateRecipeRequest) -> Result<String, ApiError> {
        let url = format!("{}/recipe", self.base_url);
        tracing::debug!(url = %url, title = %recipe.title, "creating recipe");
        let response = self.inner.post(&url).json(recipe).send().await?;
        let response = Self::check_status(&url, response)?;
        // The server answers 201 Created with the new id as a JSON string.
        response
            .json::<String>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
}
