use log::debug;

use crate::model::RecipeImage;

/// Append a file extension to every image name.
///
/// The concatenation is unconditional: there is no check for a pre-existing
/// extension, so re-running on already-suffixed names double-suffixes
/// ("pizza.jpg" becomes "pizza.jpg.jpg"). Row count, order and the other
/// columns are untouched.
pub fn normalise_image_names(mut images: Vec<RecipeImage>, extension: &str) -> Vec<RecipeImage> {
    for image in &mut images {
        image.image_name = format!("{}.{}", image.image_name, extension);
    }
    debug!(
        "appended .{} to {} image names",
        extension,
        images.len()
    );
    images
}
