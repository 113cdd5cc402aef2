use serde::{Deserialize, Serialize};

/// Core recipe fields, one row per raw recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub index: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Instructions")]
    pub instructions: String,
}

/// One row per recipe, `ingredients` still holding the serialized list
/// literal exactly as ingested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientsRaw {
    pub index: i64,
    pub recipes_index: i64,
    pub ingredients: String,
}

/// Image reference for a recipe. The splitter produces these with an
/// extension-less `image_name`; the image name normaliser rewrites the
/// name in place, so the same row type covers both tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeImage {
    pub index: i64,
    pub recipes_index: i64,
    #[serde(rename = "Image_Name")]
    pub image_name: String,
}

/// One exploded (recipe, ingredient) pair: a single trimmed ingredient
/// string with the owning recipe's index replicated alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub index: i64,
    pub recipes_index: i64,
    pub ingredients: String,
}
