use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub templates: TemplateSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSettings {
    pub dir: String,
}

impl ServerSettings {
    /// `host:port`, with IPv6 hosts bracketed (`[::]:8080`)
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Defaults, then `config/app.*` if present, then `DASH_*` environment variables
/// (`DASH_SERVER__PORT=9000` sets `server.port`).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/app", None)
}

/// `env` replaces the process environment as the source of `DASH_*` variables when set.
pub fn load_app_config_from(
    path: &str,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("templates.dir", "templates")?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("DASH")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
