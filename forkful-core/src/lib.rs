pub mod api;
pub mod error;
pub mod form;
pub mod format;
pub mod image;
pub mod search;
pub mod submit;
pub mod types;

pub use api::{ApiClient, ApiClientBuilder, MockApi, RecipeApi};
pub use error::{ApiError, FormError, SubmitError};
pub use form::{parse_int_loose, time_to_minutes, RecipeForm};
pub use format::{cost_label, stars, time_label};
pub use image::{validate_image, ALLOWED_FORMATS, MAX_FILE_SIZE};
pub use search::{fuzzy_score, search_recipes};
pub use submit::submit_recipe;
pub use types::{CreateRecipeRequest, Recipe};
