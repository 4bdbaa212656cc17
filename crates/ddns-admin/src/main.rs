// # ddns-admin - Dynamic DNS Admin Client
//
// This binary is a THIN integration layer over ddns-admin-core. It:
// 1. Reads configuration from environment variables
// 2. Initializes tracing and the runtime
// 3. Builds the action table, backend and clipboard
// 4. Dispatches one action and executes its effect
//
// ## Usage
//
// ```bash
// ddns-admin <action> [key=value ...]
// ddns-admin actions
// ```
//
// `id`, `field`, `scheme` and `path` fill the action context; every other
// `key=value` pair is a form value. `hostname`, `domain`, `username` and
// `password` together also describe the host row for `copyUrlToClipboard`.
//
// ## Configuration
//
// - `DDNS_ADMIN_BASE_URL`: Admin backend URL (default: http://localhost:8080)
// - `DDNS_ADMIN_ROUTES`: Mount point of the admin pages (admin, root)
// - `DDNS_ADMIN_USERNAME` / `DDNS_ADMIN_PASSWORD`: HTTP Basic credentials
// - `DDNS_ADMIN_SECRET_PROFILE`: Secret generator (symbols32, alphanumeric16)
// - `DDNS_ADMIN_URL_ENCODING`: Credential encoding in update URLs (verbatim, percent)
// - `DDNS_ADMIN_CLIPBOARD`: Clipboard backend (command, memory)
// - `DDNS_ADMIN_CLIPBOARD_PROGRAM`: Explicit clipboard program (overrides detection)
// - `DDNS_ADMIN_HTTP_TIMEOUT_SECS`: Backend request timeout
// - `DDNS_ADMIN_LOG_LEVEL`: trace, debug, info, warn, error
//
// ## Example
//
// ```bash
// export DDNS_ADMIN_BASE_URL=https://ddns.example.com
// export DDNS_ADMIN_USERNAME=admin
// export DDNS_ADMIN_PASSWORD=your_password
//
// ddns-admin generateHash field=password
// ddns-admin deleteHost id=3
// ddns-admin copyUrlToClipboard scheme=https hostname=myhost domain=example.com \
//     username=alice password=secret
// ```

use anyhow::Result;
use ddns_admin_core::actions::{ActionContext, ActionTable, Field, RoutePrefix};
use ddns_admin_core::backend::HttpAdminBackend;
use ddns_admin_core::config::{AdminConfig, AdminCredentials, ClipboardConfig};
use ddns_admin_core::runner::{ActionRunner, Outcome};
use ddns_admin_core::{CredentialEncoding, HostRecord, SecretProfile, create_clipboard};
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Action completed
/// - 1: Configuration or usage error
/// - 2: Runtime error (backend rejection, clipboard failure)
#[derive(Debug, Clone, Copy)]
enum AdminExitCode {
    /// Action completed
    Success = 0,
    /// Configuration or usage error
    ConfigError = 1,
    /// Runtime error
    RuntimeError = 2,
}

impl From<AdminExitCode> for ExitCode {
    fn from(code: AdminExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Settings read from the environment
struct Config {
    base_url: String,
    routes: String,
    username: Option<String>,
    password: Option<String>,
    secret_profile: String,
    url_encoding: String,
    clipboard: String,
    clipboard_program: Option<String>,
    http_timeout_secs: Option<u64>,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let http_timeout_secs = match env::var("DDNS_ADMIN_HTTP_TIMEOUT_SECS") {
            Ok(s) => Some(s.parse().map_err(|_| {
                anyhow::anyhow!(
                    "DDNS_ADMIN_HTTP_TIMEOUT_SECS must be a number of seconds. Got: {}",
                    s
                )
            })?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: env::var("DDNS_ADMIN_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            routes: env::var("DDNS_ADMIN_ROUTES").unwrap_or_else(|_| "admin".to_string()),
            username: env::var("DDNS_ADMIN_USERNAME").ok(),
            password: env::var("DDNS_ADMIN_PASSWORD").ok(),
            secret_profile: env::var("DDNS_ADMIN_SECRET_PROFILE")
                .unwrap_or_else(|_| "symbols32".to_string()),
            url_encoding: env::var("DDNS_ADMIN_URL_ENCODING")
                .unwrap_or_else(|_| "verbatim".to_string()),
            clipboard: env::var("DDNS_ADMIN_CLIPBOARD").unwrap_or_else(|_| "command".to_string()),
            clipboard_program: env::var("DDNS_ADMIN_CLIPBOARD_PROGRAM").ok(),
            http_timeout_secs,
            log_level: env::var("DDNS_ADMIN_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        })
    }

    /// Validate the environment and build the library configuration
    fn into_admin_config(self) -> Result<AdminConfig> {
        let route_prefix = RoutePrefix::from_name(&self.routes).ok_or_else(|| {
            anyhow::anyhow!(
                "DDNS_ADMIN_ROUTES '{}' is not supported. Supported: admin, root",
                self.routes
            )
        })?;

        let secret_profile = SecretProfile::from_name(&self.secret_profile).ok_or_else(|| {
            anyhow::anyhow!(
                "DDNS_ADMIN_SECRET_PROFILE '{}' is not supported. \
                Supported: symbols32, alphanumeric16",
                self.secret_profile
            )
        })?;

        let credential_encoding =
            CredentialEncoding::from_name(&self.url_encoding).ok_or_else(|| {
                anyhow::anyhow!(
                    "DDNS_ADMIN_URL_ENCODING '{}' is not supported. Supported: verbatim, percent",
                    self.url_encoding
                )
            })?;

        let clipboard = match (self.clipboard.as_str(), self.clipboard_program) {
            (_, Some(program)) => ClipboardConfig::Program {
                program,
                args: Vec::new(),
            },
            ("command", None) => ClipboardConfig::Command,
            ("memory", None) => ClipboardConfig::Memory,
            (other, None) => anyhow::bail!(
                "DDNS_ADMIN_CLIPBOARD '{}' is not supported. Supported: command, memory",
                other
            ),
        };

        let credentials = match (self.username, self.password) {
            (Some(username), password) => {
                Some(AdminCredentials::new(username, password.unwrap_or_default()))
            }
            (None, Some(_)) => anyhow::bail!(
                "DDNS_ADMIN_PASSWORD is set without DDNS_ADMIN_USERNAME"
            ),
            (None, None) => None,
        };

        let mut config = AdminConfig {
            base_url: self.base_url,
            route_prefix,
            credentials,
            secret_profile,
            credential_encoding,
            clipboard,
            ..AdminConfig::default()
        };
        if let Some(timeout) = self.http_timeout_secs {
            if !(1..=300).contains(&timeout) {
                anyhow::bail!(
                    "DDNS_ADMIN_HTTP_TIMEOUT_SECS must be between 1 and 300 seconds. Got: {}",
                    timeout
                );
            }
            config.http_timeout_secs = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    fn log_level(&self) -> Result<Level> {
        Ok(match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => anyhow::bail!(
                "DDNS_ADMIN_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        })
    }
}

/// A parsed command line
struct Invocation {
    action: String,
    context: ActionContext,
}

/// Parse `<action> [key=value ...]`
fn parse_args(args: &[String]) -> Result<Invocation> {
    let (action, pairs) = args
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("usage: ddns-admin <action> [key=value ...]"))?;

    let mut context = ActionContext::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected key=value, got '{}'", pair))?;

        context = match key {
            "id" => context.with_id(value),
            "field" => {
                let field = Field::from_name(value).ok_or_else(|| {
                    anyhow::anyhow!("field must be username or password, got '{}'", value)
                })?;
                context.with_field(field)
            }
            "scheme" => context.with_scheme(value),
            "path" => context.with_current_path(value),
            _ => context.with_form_value(key, value),
        };
    }

    if let (Some(hostname), Some(domain), Some(username), Some(password)) = (
        context.form_value("hostname"),
        context.form_value("domain"),
        context.form_value("username"),
        context.form_value("password"),
    ) {
        let host = HostRecord::new(hostname, domain, username, password);
        context = context.with_host(host);
    }

    Ok(Invocation {
        action: action.clone(),
        context,
    })
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return AdminExitCode::ConfigError.into();
        }
    };

    let log_level = match config.log_level() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Configuration validation error: {}", e);
            return AdminExitCode::ConfigError.into();
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return AdminExitCode::ConfigError.into();
    }

    let admin_config = match config.into_admin_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration validation error: {}", e);
            return AdminExitCode::ConfigError.into();
        }
    };

    let table = ActionTable::standard(&admin_config);

    if args.first().map(String::as_str) == Some("actions") {
        for id in table.identifiers() {
            println!("{}", id);
        }
        return AdminExitCode::Success.into();
    }

    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{}", e);
            return AdminExitCode::ConfigError.into();
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return AdminExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(run(&admin_config, &table, invocation));
    match result {
        Ok(()) => AdminExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {}", e);
            AdminExitCode::RuntimeError.into()
        }
    }
}

/// Dispatch one action and execute its effect
async fn run(config: &AdminConfig, table: &ActionTable, invocation: Invocation) -> Result<()> {
    let effect = table.dispatch(&invocation.action, &invocation.context)?;
    info!("Action {} planned", invocation.action);

    let backend = HttpAdminBackend::from_config(config)?;
    let clipboard = create_clipboard(&config.clipboard)?;
    let runner = ActionRunner::new(&backend, clipboard.as_ref(), config.admin_host()?);

    match runner.run(effect, &invocation.context.form).await? {
        Outcome::Navigate(target) if target.contains("://") => println!("{}", target),
        Outcome::Navigate(path) => println!("{}", backend.url(&path)),
        Outcome::FieldSet { field, value } => println!("{}={}", field.name(), value),
        Outcome::Copied(_) => println!("Copied to clipboard"),
        Outcome::LoggedOut => println!("Logged out"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_context_keys() {
        let invocation = parse_args(&args(&[
            "generateHash",
            "field=password",
            "id=3",
            "scheme=https",
            "ttl=60",
        ]))
        .unwrap();

        assert_eq!(invocation.action, "generateHash");
        assert_eq!(invocation.context.field, Some(Field::Password));
        assert_eq!(invocation.context.id.as_deref(), Some("3"));
        assert_eq!(invocation.context.scheme.as_deref(), Some("https"));
        assert_eq!(invocation.context.form_value("ttl"), Some("60"));
        assert!(invocation.context.host.is_none());
    }

    #[test]
    fn test_parse_host_row() {
        let invocation = parse_args(&args(&[
            "copyUrlToClipboard",
            "hostname=myhost",
            "domain=example.com",
            "username=alice",
            "password=a=b",
        ]))
        .unwrap();

        let host = invocation.context.host.unwrap();
        assert_eq!(host.hostname, "myhost");
        assert_eq!(host.password, "a=b");
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args(&["deleteHost", "3"])).is_err());
        assert!(parse_args(&args(&["generateHash", "field=email"])).is_err());
    }

    fn env_config() -> Config {
        Config {
            base_url: "https://ddns.example.com".to_string(),
            routes: "admin".to_string(),
            username: Some("admin".to_string()),
            password: Some("pw".to_string()),
            secret_profile: "symbols32".to_string(),
            url_encoding: "verbatim".to_string(),
            clipboard: "memory".to_string(),
            clipboard_program: None,
            http_timeout_secs: None,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_env_config_conversion() {
        let config = env_config().into_admin_config().unwrap();
        assert_eq!(config.route_prefix, RoutePrefix::Admin);
        assert_eq!(config.clipboard, ClipboardConfig::Memory);
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn test_env_config_rejects_unknown_values() {
        let mut config = env_config();
        config.routes = "api".to_string();
        assert!(config.into_admin_config().is_err());

        let mut config = env_config();
        config.url_encoding = "base64".to_string();
        assert!(config.into_admin_config().is_err());

        let mut config = env_config();
        config.http_timeout_secs = Some(0);
        assert!(config.into_admin_config().is_err());

        let mut config = env_config();
        config.username = None;
        assert!(config.into_admin_config().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = env_config();
        assert_eq!(config.log_level().unwrap(), Level::INFO);
        config.log_level = "loud".to_string();
        assert!(config.log_level().is_err());
    }
}
