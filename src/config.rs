use std::{path::PathBuf, time::Duration};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub log_level: String,
    pub api: ApiSettings,
    pub storage: StorageSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    /// When false, the client talks to the service without any credentials.
    pub require_auth: bool,
    pub timeout_milliseconds: Option<u64>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct StorageSettings {
    pub directory: PathBuf,
    pub slot: String,
}

impl StorageSettings {
    pub fn slot_path(&self) -> PathBuf {
        self.directory.join(&self.slot)
    }
}

/// The possible runtime environment for the client.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::File::from(
                configuration_directory.join(format!("{}.yaml", environment.as_str())),
            )
            .required(false),
        )
        // E.g. `APP_API__BASE_URL=http://localhost:8000` sets `Settings.api.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .try_parsing(true)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
