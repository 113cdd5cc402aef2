pub mod image;
pub mod ingredients;
pub mod split;

use log::info;

use crate::config::NormaliseConfig;
use crate::error::NormaliseError;
use crate::model::{Recipe, RecipeImage, RecipeIngredient};
use crate::table::RawRow;

/// The three normalised tables handed to the persistence collaborator.
#[derive(Debug, Clone, Default)]
pub struct NormalisedTables {
    pub recipe: Vec<Recipe>,
    pub recipe_ingredients: Vec<RecipeIngredient>,
    pub recipe_image: Vec<RecipeImage>,
}

/// One step of the transformation graph, named by the datasets it consumes
/// and produces. The registry is declarative: an external scheduler can use
/// it to sequence calls (the split step feeds both normalisers; the two
/// normalisers are independent of each other and can run in any order).
#[derive(Debug, Clone, Copy)]
pub struct NodeSpec {
    pub name: &'static str,
    pub inputs: &'static [&'static str],
    pub outputs: &'static [&'static str],
}

/// Dataset names used by the node registry.
pub mod datasets {
    pub const RAW_RECIPES_SOURCE: &str = "raw_recipes_source";
    pub const RECIPE: &str = "recipe";
    pub const RAW_RECIPE_INGREDIENTS: &str = "raw_recipe_ingredients";
    pub const RAW_RECIPE_IMAGE: &str = "raw_recipe_image";
    pub const RECIPE_INGREDIENTS: &str = "recipe_ingredients";
    pub const RECIPE_IMAGE: &str = "recipe_image";
}

/// The transformation graph, in a valid execution order.
pub const NODES: &[NodeSpec] = &[
    NodeSpec {
        name: "split_raw_recipes",
        inputs: &[datasets::RAW_RECIPES_SOURCE],
        outputs: &[
            datasets::RECIPE,
            datasets::RAW_RECIPE_INGREDIENTS,
            datasets::RAW_RECIPE_IMAGE,
        ],
    },
    NodeSpec {
        name: "normalise_image_names",
        inputs: &[datasets::RAW_RECIPE_IMAGE],
        outputs: &[datasets::RECIPE_IMAGE],
    },
    NodeSpec {
        name: "normalise_ingredients",
        inputs: &[datasets::RAW_RECIPE_INGREDIENTS],
        outputs: &[datasets::RECIPE_INGREDIENTS],
    },
];

/// Run the whole graph over a fully materialized raw table.
///
/// Single-threaded reference execution: split first, then the two
/// independent normalisers. Each step consumes its input table whole and
/// either runs to completion or fails outright, so an error leaves no
/// partial output behind.
pub fn run(rows: &[RawRow], config: &NormaliseConfig) -> Result<NormalisedTables, NormaliseError> {
    let (recipe, raw_ingredients, raw_images) = split::split_raw_recipes(rows)?;
    let recipe_image = image::normalise_image_names(raw_images, &config.image_extension);
    let recipe_ingredients = ingredients::normalise_ingredients(&raw_ingredients, config.parser);

    info!(
        "normalised {} recipes into {} ingredient rows and {} image rows",
        recipe.len(),
        recipe_ingredients.len(),
        recipe_image.len()
    );
    Ok(NormalisedTables {
        recipe,
        recipe_ingredients,
        recipe_image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_wires_split_outputs_to_normaliser_inputs() {
        let split = &NODES[0];
        let outputs: HashSet<_> = split.outputs.iter().collect();
        for node in &NODES[1..] {
            for input in node.inputs {
                assert!(outputs.contains(input), "{input} is not produced upstream");
            }
        }
    }

    #[test]
    fn test_normalisers_are_independent() {
        let image = &NODES[1];
        let ingredients = &NODES[2];
        assert!(image.inputs.iter().all(|i| !ingredients.outputs.contains(i)));
        assert!(ingredients.inputs.iter().all(|i| !image.outputs.contains(i)));
    }
}
