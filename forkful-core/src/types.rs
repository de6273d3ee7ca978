use serde::{Deserialize, Serialize};

/// A recipe as returned by the catalog API.
///
/// The client never mutates a fetched recipe; drafts are built separately
/// by [`crate::form::RecipeForm`] and submitted as [`CreateRecipeRequest`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Star rating, 0-5.
    pub rating: i32,
    /// Total required time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i32>,
    /// Cost in euros.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f32>,
    /// Image path relative to the images base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Request body for `POST /recipe`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: String,
    /// Star rating, 1-5.
    pub rating: i32,
    /// Total required time in minutes.
    pub time: i64,
    /// Cost in whole euros.
    pub cost: i64,
    /// Most recently added ingredient first.
    pub ingredients: Vec<String>,
    /// Base64-encoded image bytes; omitted entirely when no image was
    /// selected, not serialized as null.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_blob: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "abc",
            "title": "Lasagna",
            "description": "Baked noodles",
            "rating": 3
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.title, "Lasagna");
        assert_eq!(recipe.time, None);
        assert_eq!(recipe.cost, None);
        assert_eq!(recipe.image, None);
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn recipe_accepts_null_image() {
        let json = r#"{
            "id": "abc",
            "title": "Lasagna",
            "description": "Baked noodles",
            "rating": 3,
            "time": 200,
            "cost": 3.5,
            "image": null,
            "ingredients": ["3 tomatoes"]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.time, Some(200));
        assert_eq!(recipe.image, None);
        assert_eq!(recipe.ingredients, vec!["3 tomatoes"]);
    }

    #[test]
    fn create_request_omits_absent_image_blob() {
        let request = CreateRecipeRequest {
            title: "Lasagna".to_string(),
            description: "Baked noodles".to_string(),
            rating: 5,
            time: 90,
            cost: 12,
            ingredients: vec!["3 tomatoes".to_string()],
            image_blob: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("image_blob").is_none());

        let with_image = CreateRecipeRequest {
            image_blob: Some("aGVsbG8=".to_string()),
            ..request
        };
        let value = serde_json::to_value(&with_image).unwrap();
        assert_eq!(value["image_blob"], "aGVsbG8=");
    }
}
