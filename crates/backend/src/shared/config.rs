use serde::Deserialize;

/// Sentinel the original deployment scripts put into `OPENAI_API_KEY` to mean
/// "no key"; treated the same as an absent key.
pub const DUMMY_API_KEY: &str = "dummy-key-for-simulation";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог со статикой фронтенда
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitConfig {
    pub min_interval_ms: u64,
    pub per_minute: u32,
    /// DEV_MODE: лимиты отключены
    #[serde(default)]
    pub disabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 1000,
            per_minute: 30,
            disabled: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    pub max_tokens: u32,
    pub temperature: f32,
    /// Кастомный endpoint для совместимых API
    #[serde(default)]
    pub api_base: Option<String>,
    /// Only ever taken from the environment
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            max_tokens: 200,
            temperature: 0.7,
            api_base: None,
            api_key: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 5000
static_dir = "dist"

[rate_limit]
min_interval_ms = 1000
per_minute = 30

[llm]
max_tokens = 200
temperature = 0.7
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment overrides (`OPENAI_API_KEY`, `DEV_MODE`) are applied on top.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_overrides<F>(config: &mut Config, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    config.llm.api_key = env("OPENAI_API_KEY")
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty() && key != DUMMY_API_KEY);

    if let Some(dev_mode) = env("DEV_MODE") {
        if dev_mode.trim().eq_ignore_ascii_case("true") {
            config.rate_limit.disabled = true;
        }
    }
}
