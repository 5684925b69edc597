use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub banner: BannerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub fetch_post_id: u64,
    pub xhr_post_id: u64,
    pub user_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerConfig {
    pub hide_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            banner: BannerConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            fetch_post_id: 1,
            xhr_post_id: 2,
            user_id: 1,
        }
    }
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: 6000,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        // key segments contain underscores, so nesting uses a double
        // underscore: APP_API__BASE_URL -> api.base_url
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.is_empty() {
            return Err(ConfigError::Message(
                "API base URL cannot be empty".to_string(),
            ));
        }

        if Url::parse(&self.api.base_url).is_err() {
            return Err(ConfigError::Message(
                "API base URL is not a valid URL".to_string(),
            ));
        }

        if self.banner.hide_delay_ms == 0 {
            return Err(ConfigError::Message(
                "Banner hide delay must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
