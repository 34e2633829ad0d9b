use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

pub const ENV_PREFIX: &str = "TLU_MASK";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: OutputFormat,

    // Exit with a failure status when the trigger configuration is rejected
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Reads `TLU_MASK__FORMAT` and `TLU_MASK__STRICT`.
    pub fn from_env() -> eyre::Result<Self> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load(env: config::Environment) -> eyre::Result<Self> {
        let settings = config::Config::builder()
            .add_source(env.separator("__").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize::<Config>()?)
    }
}
