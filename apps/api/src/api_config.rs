use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use arena_application::UnlistedRoutePolicy;
use arena_core::AppError;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Where denied browser requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTargets {
    pub login_path: String,
    pub access_denied_path: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self {
            login_path: "/login".to_owned(),
            access_denied_path: "/access-denied".to_owned(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub redirects: RedirectTargets,
    pub unlisted_route_policy: UnlistedRoutePolicy,
    pub dev_seed: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        Url::parse(&frontend_url)
            .map_err(|error| AppError::Validation(format!("invalid FRONTEND_URL: {error}")))?;

        let defaults = RedirectTargets::default();
        let redirects = RedirectTargets {
            login_path: path_env("LOGIN_PATH", defaults.login_path)?,
            access_denied_path: path_env("ACCESS_DENIED_PATH", defaults.access_denied_path)?,
        };

        let unlisted_route_policy = match env::var("UNLISTED_ROUTE_POLICY")
            .unwrap_or_else(|_| "allow".to_owned())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "allow" => UnlistedRoutePolicy::Allow,
            "deny" => UnlistedRoutePolicy::Deny,
            other => {
                return Err(AppError::Validation(format!(
                    "UNLISTED_ROUTE_POLICY must be either 'allow' or 'deny', got '{other}'"
                )));
            }
        };

        let dev_seed = env::var("DEV_SEED")
            .unwrap_or_else(|_| "false".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            redirects,
            unlisted_route_policy,
            dev_seed,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn path_env(name: &str, default: String) -> Result<String, AppError> {
    let value = env::var(name).unwrap_or(default);
    if !value.starts_with('/') {
        return Err(AppError::Validation(format!(
            "{name} must be an absolute path, got '{value}'"
        )));
    }

    Ok(value)
}
