//! Catalog API: trait, HTTP implementation, and test mock.

mod client;

pub use client::{ApiClient, ApiClientBuilder};

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{CreateRecipeRequest, Recipe};

/// Trait for the catalog API, enabling mockability in tests.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Fetch the catalog: `GET /recipes?query={query}`.
    async fn list_recipes(&self, query: &str) -> Result<Vec<Recipe>, ApiError>;

    /// Fetch a single recipe: `GET /recipe/{id}`.
    async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError>;

    /// Create a recipe: `POST /recipe`. Returns the id the server assigned.
    async fn create_recipe(&self, recipe: &CreateRecipeRequest) -> Result<String, ApiError>;
}

/// Mock API for testing: canned recipe list, configurable create outcome,
/// and a record of every payload received.
pub struct MockApi {
    recipes: Vec<Recipe>,
    create_failure: Option<u16>,
    created: Mutex<Vec<CreateRecipeRequest>>,
}

impl MockApi {
    /// Create a new empty mock API.
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
            create_failure: None,
            created: Mutex::new(Vec::new()),
        }
    }

    /// Set the recipes returned by `list_recipes` and `get_recipe`.
    pub fn with_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = recipes;
        self
    }

    /// Make `create_recipe` fail with the given HTTP status.
    pub fn with_create_failure(mut self, status: u16) -> Self {
        self.create_failure = Some(status);
        self
    }

    /// Payloads received by `create_recipe`, in order.
    pub fn created(&self) -> Vec<CreateRecipeRequest> {
        self.created.lock().expect("created lock poisoned").clone()
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeApi for MockApi {
    async fn list_recipes(&self, _query: &str) -> Result<Vec<Recipe>, ApiError> {
        Ok(self.recipes.clone())
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or_else(|| ApiError::UnexpectedStatus {
                url: format!("mock:/recipe/{}", id),
                status: 404,
            })
    }

    async fn create_recipe(&self, recipe: &CreateRecipeRequest) -> Result<String, ApiError> {
        let mut created = self.created.lock().expect("created lock poisoned");
        created.push(recipe.clone());
        match self.create_failure {
            Some(status) => Err(ApiError::UnexpectedStatus {
                url: "mock:/recipe".to_string(),
                status,
            }),
            None => Ok(format!("mock-{}", created.len())),
        }
    }
}
