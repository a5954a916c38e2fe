use super::LogLevel;
use clap::Args;

/// Options shared by the console command and the interactive viewer.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Config file (default: <config dir>/pokedex/config.toml)"
    )]
    pub config: Option<String>,

    #[arg(long, value_name = "URL", help = "Override the catalog API base URL")]
    pub api_base: Option<String>,

    #[arg(long, default_value = "warn", help = "Log verbosity")]
    pub log_level: LogLevel,
}

impl CommonArgs {
    pub fn load_config(&self) -> pokedex_client::Result<pokedex_client::Config> {
        let config = pokedex_client::Config::load(self.config.as_deref())?;
        let config = match &self.api_base {
            Some(base) => config.with_api_base(base.clone()),
            None => config,
        };
        config.validate()?;
        Ok(config)
    }
}
