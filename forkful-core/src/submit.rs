//! The recipe submission pipeline.
//!
//! Gathers draft form state, optionally reads and encodes an image file,
//! and issues exactly one POST per call. Returning to the catalog after a
//! successful create is the caller's job.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::api::RecipeApi;
use crate::error::SubmitError;
use crate::form::RecipeForm;
use crate::image::{validate_image, MAX_FILE_SIZE};

/// Read an image file and encode it for the `image_blob` payload field.
async fn encode_image(path: &Path) -> Result<String, SubmitError> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| SubmitError::ImageRead {
            path: path.to_path_buf(),
            source,
        })?;
    if data.len() > MAX_FILE_SIZE {
        return Err(SubmitError::InvalidImage(format!(
            "Image too large: {} bytes (max {})",
            data.len(),
            MAX_FILE_SIZE
        )));
    }
    validate_image(&data).map_err(SubmitError::InvalidImage)?;
    Ok(STANDARD.encode(&data))
}

/// Submit a draft recipe, returning the id the server assigned.
///
/// When `image` is `None` the `image_blob` field is omitted from the
/// payload entirely. A non-success response surfaces as
/// [`SubmitError::Api`]; nothing is retried.
pub async fn submit_recipe<A: RecipeApi>(
    api: &A,
    form: &RecipeForm,
    image: Option<&Path>,
) -> Result<String, SubmitError> {
    let image_blob = match image {
        Some(path) => Some(encode_image(path).await?),
        None => None,
    };
    let request = form.to_request(image_blob)?;
    let id = api.create_recipe(&request).await?;
    tracing::info!(id = %id, title = %request.title, "recipe created");
    Ok(id)
}
