use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Strategy used to parse the serialized ingredient list literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParserMode {
    /// Quote-aware scanner: items are delimited by quoted boundaries, so
    /// ingredient text containing a literal comma or an escaped quote
    /// survives intact
    #[default]
    Structured,
    /// Bit-for-bit port of the original crude tokenizer: strip every
    /// bracket character, split on backslash + single-quote. Kept for
    /// compatibility with data already produced downstream
    Legacy,
}

/// Main normalisation configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct NormaliseConfig {
    /// File extension appended to every image name (without the dot)
    #[serde(default = "default_image_extension")]
    pub image_extension: String,
    /// Ingredient list parser to use
    #[serde(default)]
    pub parser: ParserMode,
}

impl Default for NormaliseConfig {
    fn default() -> Self {
        Self {
            image_extension: default_image_extension(),
            parser: ParserMode::default(),
        }
    }
}

// Default value functions
fn default_image_extension() -> String {
    "jpg".to_string()
}

impl NormaliseConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with NORMALISE__ prefix
    /// 2. normalise.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: NORMALISE__IMAGE_EXTENSION
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("normalise").required(false))
            .add_source(
                Environment::with_prefix("NORMALISE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
