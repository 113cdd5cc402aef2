use crate::config::{NormaliseConfig, ParserMode};
use crate::error::NormaliseError;
use crate::pipelines::{self, NormalisedTables};
use crate::table::RawRow;

/// Builder for configuring a recipe normaliser
#[derive(Debug, Default)]
pub struct RecipeNormaliserBuilder {
    config: NormaliseConfig,
}

impl RecipeNormaliserBuilder {
    /// Set the file extension appended to image names (without the dot)
    ///
    /// # Example
    /// ```
    /// use recipe_normalise::RecipeNormaliser;
    ///
    /// let normaliser = RecipeNormaliser::builder()
    ///     .image_extension("jpeg")
    ///     .build();
    /// ```
    pub fn image_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.image_extension = extension.into();
        self
    }

    /// Select the ingredient list parser
    ///
    /// `ParserMode::Legacy` reproduces the crude tokenizer the dataset was
    /// originally processed with, for compatibility with existing
    /// downstream data.
    ///
    /// # Example
    /// ```
    /// use recipe_normalise::{ParserMode, RecipeNormaliser};
    ///
    /// let normaliser = RecipeNormaliser::builder()
    ///     .parser(ParserMode::Legacy)
    ///     .build();
    /// ```
    pub fn parser(mut self, mode: ParserMode) -> Self {
        self.config.parser = mode;
        self
    }

    /// Replace the builder's settings with configuration loaded from
    /// `normalise.toml` and NORMALISE__-prefixed environment variables
    pub fn from_config(mut self) -> Result<Self, NormaliseError> {
        self.config = NormaliseConfig::load()?;
        Ok(self)
    }

    /// Finalize the builder into a normaliser
    pub fn build(self) -> RecipeNormaliser {
        RecipeNormaliser {
            config: self.config,
        }
    }
}

/// Runs the full normalisation graph with a fixed configuration
#[derive(Debug, Default)]
pub struct RecipeNormaliser {
    config: NormaliseConfig,
}

impl RecipeNormaliser {
    /// Create a builder for configuring the normaliser
    pub fn builder() -> RecipeNormaliserBuilder {
        RecipeNormaliserBuilder::default()
    }

    /// Create a normaliser with default settings (`.jpg` extension,
    /// structured parser)
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalise a raw recipe table into the three output tables
    pub fn normalise(&self, rows: &[RawRow]) -> Result<NormalisedTables, NormaliseError> {
        pipelines::run(rows, &self.config)
    }
}
