use serde::Deserialize;

use super::telemetry::TelemetryConfig;

const ENV_PREFIX: &str = "ARMDESK";
const ENV_SEPARATOR: &str = "__";

#[derive(Default, Deserialize, Clone, Debug)]
pub struct AppConfig {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub db: DatabaseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
    #[serde(default)]
    pub helpdesk: HelpdeskConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct HostConfig {
    #[serde(default = "HostConfig::default_address")]
    pub bind_address: String,
    #[serde(default = "HostConfig::default_port")]
    pub bind_port: u16,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_address: Self::default_address(),
            bind_port: Self::default_port(),
        }
    }
}

impl HostConfig {
    fn default_address() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        3001
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseConfig {
    /// `sqlite://…`, `sqlite::memory:` or `postgres://…`.
    #[serde(default = "DatabaseConfig::default_url")]
    pub url: String,
    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    fn default_url() -> String {
        "sqlite://armdesk.db?mode=rwc".to_string()
    }

    fn default_max_connections() -> u32 {
        10
    }

    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            max_connections: Self::default_max_connections(),
        }
    }
}

/// Account created when the store has no users yet.
#[derive(Deserialize, Clone, Debug)]
pub struct BootstrapConfig {
    #[serde(default = "BootstrapConfig::default_admin_username")]
    pub admin_username: String,
    #[serde(default = "BootstrapConfig::default_admin_password")]
    pub admin_password: String,
    #[serde(default = "BootstrapConfig::default_admin_full_name")]
    pub admin_full_name: String,
    #[serde(default = "BootstrapConfig::default_department")]
    pub department: String,
}

impl BootstrapConfig {
    fn default_admin_username() -> String {
        "admin".to_string()
    }
    fn default_admin_password() -> String {
        "admin123".to_string()
    }
    fn default_admin_full_name() -> String {
        "Administrator".to_string()
    }
    fn default_department() -> String {
        "IT".to_string()
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            admin_username: Self::default_admin_username(),
            admin_password: Self::default_admin_password(),
            admin_full_name: Self::default_admin_full_name(),
            department: Self::default_department(),
        }
    }
}

#[derive(Default, Deserialize, Clone, Debug)]
pub struct HelpdeskConfig {
    /// Enforce the ticket and repair status transition tables. Off means any
    /// status may follow any other.
    #[serde(default)]
    pub strict_status_transitions: bool,
}

/// `config.yaml` in the working directory, then every `*.yaml`/`*.yml` given
/// on the command line, then `ARMDESK__SECTION__KEY` environment variables.
pub fn build_config() -> anyhow::Result<config::Config> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = config::Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in args {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            config = config.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(false),
            );
        }
    }
    config = config.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .separator(ENV_SEPARATOR)
            .try_parsing(true),
    );
    Ok(config.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_yields_defaults() {
        let config: AppConfig = config::Config::builder().build().unwrap().try_deserialize().unwrap();
        assert_eq!(config.host.bind_port, 3001);
        assert_eq!(config.bootstrap.admin_username, "admin");
        assert!(!config.helpdesk.strict_status_transitions);
    }

    #[test]
    fn yaml_overrides_single_fields() {
        let yaml = "db:\n  url: 'sqlite::memory:'\nhelpdesk:\n  strict_status_transitions: true\n";
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.db.url, "sqlite::memory:");
        assert_eq!(config.db.max_connections, 10);
        assert!(config.helpdesk.strict_status_transitions);
    }
}
