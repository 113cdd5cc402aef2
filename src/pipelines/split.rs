use log::debug;

use crate::error::NormaliseError;
use crate::model::{Recipe, RecipeImage, RecipeIngredientsRaw};
use crate::table::{columns, require_i64, require_str, RawRow};

/// Project the raw wide table into three narrower tables: core recipe
/// fields, raw ingredient list strings and raw image names.
///
/// Pure projection and rename: same row count and order as the input,
/// values untouched. `recipes_index` in the two side tables carries the raw
/// `index`, while their own `index` column is a fresh contiguous 0-based
/// row number. Fails on the first missing column or mistyped cell without
/// producing any output.
pub fn split_raw_recipes(
    rows: &[RawRow],
) -> Result<(Vec<Recipe>, Vec<RecipeIngredientsRaw>, Vec<RecipeImage>), NormaliseError> {
    let mut recipes = Vec::with_capacity(rows.len());
    let mut ingredients = Vec::with_capacity(rows.len());
    let mut images = Vec::with_capacity(rows.len());

    for (row_idx, row) in rows.iter().enumerate() {
        let index = require_i64(row, columns::INDEX, row_idx)?;

        recipes.push(Recipe {
            index,
            title: require_str(row, columns::TITLE, row_idx)?.to_string(),
            instructions: require_str(row, columns::INSTRUCTIONS, row_idx)?.to_string(),
        });
        ingredients.push(RecipeIngredientsRaw {
            index: row_idx as i64,
            recipes_index: index,
            ingredients: require_str(row, columns::CLEANED_INGREDIENTS, row_idx)?.to_string(),
        });
        images.push(RecipeImage {
            index: row_idx as i64,
            recipes_index: index,
            image_name: require_str(row, columns::IMAGE_NAME, row_idx)?.to_string(),
        });
    }

    debug!("split {} raw rows into three tables", rows.len());
    Ok((recipes, ingredients, images))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn raw_row(index: i64, title: &str) -> RawRow {
        let Value::Object(map) = json!({
            "index": index,
            "Title": title,
            "Instructions": format!("Cook the {title}."),
            "Cleaned_Ingredients": "['salt', 'pepper']",
            "Image_Name": title.to_lowercase(),
        }) else {
            unreachable!()
        };
        map
    }

    #[test]
    fn test_splits_into_three_tables() {
        let rows = vec![raw_row(10, "Pizza"), raw_row(11, "Pasta")];
        let (recipes, ingredients, images) = split_raw_recipes(&rows).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].index, 10);
        assert_eq!(recipes[0].title, "Pizza");
        assert_eq!(recipes[1].instructions, "Cook the Pasta.");

        assert_eq!(ingredients[0].index, 0);
        assert_eq!(ingredients[0].recipes_index, 10);
        assert_eq!(ingredients[0].ingredients, "['salt', 'pepper']");
        assert_eq!(ingredients[1].index, 1);
        assert_eq!(ingredients[1].recipes_index, 11);

        assert_eq!(images[0].index, 0);
        assert_eq!(images[0].recipes_index, 10);
        assert_eq!(images[0].image_name, "pizza");
        assert_eq!(images[1].image_name, "pasta");
    }

    #[test]
    fn test_missing_title_column_fails() {
        let mut row = raw_row(0, "Pizza");
        row.remove("Title");
        let err = split_raw_recipes(&[row]).unwrap_err();
        assert!(matches!(err, NormaliseError::MissingColumn("Title")));
    }

    #[test]
    fn test_mistyped_cell_fails() {
        let mut row = raw_row(0, "Pizza");
        row.insert("Image_Name".to_string(), json!(42));
        let err = split_raw_recipes(&[row]).unwrap_err();
        assert!(matches!(
            err,
            NormaliseError::TypeMismatch {
                column: "Image_Name",
                ..
            }
        ));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let mut row = raw_row(7, "Soup");
        row.insert("Unnamed: 0".to_string(), json!("noise"));
        let (recipes, _, _) = split_raw_recipes(&[row]).unwrap();
        assert_eq!(recipes[0].index, 7);
    }

    #[test]
    fn test_empty_input_yields_empty_tables() {
        let (recipes, ingredients, images) = split_raw_recipes(&[]).unwrap();
        assert!(recipes.is_empty());
        assert!(ingredients.is_empty());
        assert!(images.is_empty());
    }
}
