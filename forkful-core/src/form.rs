//! Draft-recipe form state and validation.
//!
//! Validity is derived from plain field state on demand, never stored.
//! A form is created with defaults, filled in, and discarded after a
//! successful submit; fetched recipes are never edited through it.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FormError;
use crate::types::CreateRecipeRequest;

/// Exactly two digits, a colon, two digits. No magnitude check on either
/// group, so "99:99" is a valid time string.
static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d\d:\d\d$").expect("Invalid time regex"));

/// Parse a leading integer the way JavaScript's `parseInt` does: skip
/// surrounding whitespace, take an optional sign and the digits that
/// follow, ignore any trailing garbage. `None` when no digits are found.
pub fn parse_int_loose(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|v| sign * v)
}

/// Convert an `HH:MM` style string to total minutes.
///
/// The groups are parsed loosely and not range-checked, so "125:340" gives
/// 125 * 60 + 340 = 7840. Shape validation belongs to
/// [`RecipeForm::time_valid`], not here.
pub fn time_to_minutes(time: &str) -> Option<i64> {
    let (hours, minutes) = time.split_once(':')?;
    Some(parse_int_loose(hours)? * 60 + parse_int_loose(minutes)?)
}

/// Local view-model for the recipe creation form.
///
/// Owns all field state; validity is derived, never stored.
#[derive(Debug, Clone)]
pub struct RecipeForm {
    title: String,
    description: String,
    rating: i32,
    time: String,
    cost: String,
    ingredients: Vec<String>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            rating: 5,
            time: "00:00".to_string(),
            cost: "1".to_string(),
            ingredients: Vec::new(),
        }
    }
}

impl RecipeForm {
    /// A fresh form with field defaults: rating 5, time "00:00", cost "1",
    /// everything else empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Set the star rating, clamped to the 1-5 range the star row allows.
    pub fn set_rating(&mut self, rating: i32) {
        self.rating = rating.clamp(1, 5);
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn set_cost(&mut self, cost: impl Into<String>) {
        self.cost = cost.into();
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Add an ingredient to the *front* of the list, most recent first.
    ///
    /// The raw string is checked for emptiness without trimming, so
    /// whitespace-only input is added and only `""` is ignored. There is
    /// no remove operation; the list grows until the form is dropped.
    pub fn add_ingredient(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.ingredients.insert(0, text);
    }

    pub fn time_valid(&self) -> bool {
        TIME_REGEX.is_match(&self.time)
    }

    pub fn cost_valid(&self) -> bool {
        parse_int_loose(&self.cost).is_some()
    }

    pub fn title_valid(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn desc_valid(&self) -> bool {
        !self.description.is_empty()
    }

    /// The submit-enabled signal: every field predicate must hold.
    pub fn form_valid(&self) -> bool {
        self.title_valid() && self.desc_valid() && self.cost_valid() && self.time_valid()
    }

    /// Build the wire payload, re-checking each predicate so an invalid
    /// form can never reach the network.
    pub fn to_request(&self, image_blob: Option<String>) -> Result<CreateRecipeRequest, FormError> {
        if !self.title_valid() {
            return Err(FormError::EmptyTitle);
        }
        if !self.desc_valid() {
            return Err(FormError::EmptyDescription);
        }
        if !self.time_valid() {
            return Err(FormError::InvalidTime(self.time.clone()));
        }
        let time = time_to_minutes(&self.time)
            .ok_or_else(|| FormError::InvalidTime(self.time.clone()))?;
        let cost = parse_int_loose(&self.cost)
            .ok_or_else(|| FormError::InvalidCost(self.cost.clone()))?;
        Ok(CreateRecipeRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            rating: self.rating,
            time,
            cost,
            ingredients: self.ingredients.clone(),
            image_blob,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> RecipeForm {
        let mut form = RecipeForm::new();
        form.set_title("Lasagna");
        form.set_description("Baked noodles");
        form
    }

    #[test]
    fn fresh_form_has_field_defaults() {
        let form = RecipeForm::new();
        assert!(form.time_valid());
        assert!(form.cost_valid());
        assert!(!form.title_valid());
        assert!(!form.desc_valid());
        assert!(!form.form_valid());
    }

    #[test]
    fn time_must_match_two_digit_groups() {
        let mut form = filled_form();
        for good in ["00:00", "12:34", "99:99"] {
            form.set_time(good);
            assert!(form.time_valid(), "{good} should be valid");
        }
        for bad in ["1:23", "123:45", "12:3", "ab:cd", "12-34", "12:34 ", "", ":"] {
            form.set_time(bad);
            assert!(!form.time_valid(), "{bad} should be invalid");
        }
    }

    #[test]
    fn cost_uses_loose_integer_parsing() {
        let mut form = filled_form();
        for good in ["1", "0", "12abc", " 42 ", "-3"] {
            form.set_cost(good);
            assert!(form.cost_valid(), "{good} should be valid");
        }
        for bad in ["", "abc", "€3", "-"] {
            form.set_cost(bad);
            assert!(!form.cost_valid(), "{bad} should be invalid");
        }
    }

    #[test]
    fn parse_int_loose_keeps_leading_digits() {
        assert_eq!(parse_int_loose("12abc"), Some(12));
        assert_eq!(parse_int_loose("12"), Some(12));
        assert_eq!(parse_int_loose("-3"), Some(-3));
        assert_eq!(parse_int_loose("+7"), Some(7));
        assert_eq!(parse_int_loose("abc12"), None);
        assert_eq!(parse_int_loose(""), None);
    }

    #[test]
    fn title_and_description_checks_are_independent() {
        let mut form = RecipeForm::new();
        form.set_title("Lasagna");
        assert!(form.title_valid());
        assert!(!form.desc_valid());

        let mut form = RecipeForm::new();
        form.set_description("Baked noodles");
        assert!(!form.title_valid());
        assert!(form.desc_valid());
    }

    #[test]
    fn flipping_any_predicate_flips_the_aggregate() {
        let form = filled_form();
        assert!(form.form_valid());

        let mut broken = form.clone();
        broken.set_title("");
        assert!(!broken.form_valid());

        let mut broken = form.clone();
        broken.set_description("");
        assert!(!broken.form_valid());

        let mut broken = form.clone();
        broken.set_time("1:23");
        assert!(!broken.form_valid());

        let mut broken = form.clone();
        broken.set_cost("abc");
        assert!(!broken.form_valid());
    }

    #[test]
    fn ingredients_are_prepended() {
        let mut form = RecipeForm::new();
        form.add_ingredient("Salt");
        form.add_ingredient("Pepper");
        assert_eq!(form.ingredients(), ["Pepper", "Salt"]);
    }

    #[test]
    fn empty_ingredient_is_ignored_but_whitespace_is_not() {
        let mut form = RecipeForm::new();
        form.add_ingredient("");
        assert!(form.ingredients().is_empty());
        form.add_ingredient("   ");
        assert_eq!(form.ingredients(), ["   "]);
    }

    #[test]
    fn rating_is_clamped_to_star_range() {
        let mut form = RecipeForm::new();
        form.set_rating(9);
        let request = filled_with_rating(form).to_request(None).unwrap();
        assert_eq!(request.rating, 5);

        let mut form = RecipeForm::new();
        form.set_rating(0);
        let request = filled_with_rating(form).to_request(None).unwrap();
        assert_eq!(request.rating, 1);
    }

    fn filled_with_rating(mut form: RecipeForm) -> RecipeForm {
        form.set_title("Lasagna");
        form.set_description("Baked noodles");
        form
    }

    #[test]
    fn time_conversion_is_not_range_checked() {
        assert_eq!(time_to_minutes("02:05"), Some(125));
        assert_eq!(time_to_minutes("00:00"), Some(0));
        assert_eq!(time_to_minutes("125:340"), Some(7840));
        assert_eq!(time_to_minutes("nope"), None);
        assert_eq!(time_to_minutes(":30"), None);
    }

    #[test]
    fn to_request_builds_the_payload() {
        let mut form = filled_form();
        form.set_rating(4);
        form.set_time("01:30");
        form.set_cost("12abc");
        form.add_ingredient("3 tomatoes");
        form.add_ingredient("3 noodles");

        let request = form.to_request(Some("aGVsbG8=".to_string())).unwrap();
        assert_eq!(request.title, "Lasagna");
        assert_eq!(request.description, "Baked noodles");
        assert_eq!(request.rating, 4);
        assert_eq!(request.time, 90);
        assert_eq!(request.cost, 12);
        assert_eq!(request.ingredients, ["3 noodles", "3 tomatoes"]);
        assert_eq!(request.image_blob.as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn to_request_rejects_invalid_fields() {
        let mut form = RecipeForm::new();
        assert_eq!(form.to_request(None), Err(FormError::EmptyTitle));

        form.set_title("Lasagna");
        assert_eq!(form.to_request(None), Err(FormError::EmptyDescription));

        form.set_description("Baked noodles");
        form.set_time("1:23");
        assert_eq!(
            form.to_request(None),
            Err(FormError::InvalidTime("1:23".to_string()))
        );

        form.set_time("01:23");
        form.set_cost("abc");
        assert_eq!(
            form.to_request(None),
            Err(FormError::InvalidCost("abc".to_string()))
        );
    }
}
