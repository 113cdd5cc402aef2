pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod pipelines;
pub mod table;

pub use builder::{RecipeNormaliser, RecipeNormaliserBuilder};
pub use config::{NormaliseConfig, ParserMode};
pub use error::NormaliseError;
pub use model::{Recipe, RecipeImage, RecipeIngredient, RecipeIngredientsRaw};
pub use pipelines::image::normalise_image_names;
pub use pipelines::ingredients::{normalise_ingredients, parse_ingredient_list};
pub use pipelines::split::split_raw_recipes;
pub use pipelines::{NodeSpec, NormalisedTables, NODES};
pub use table::RawRow;

/// Normalise a raw recipe table with default settings.
pub fn normalise_recipes(rows: &[RawRow]) -> Result<NormalisedTables, NormaliseError> {
    pipelines::run(rows, &NormaliseConfig::default())
}

/// Normalise a raw recipe table with explicit configuration.
pub fn normalise_recipes_with_config(
    rows: &[RawRow],
    config: &NormaliseConfig,
) -> Result<NormalisedTables, NormaliseError> {
    pipelines::run(rows, config)
}
