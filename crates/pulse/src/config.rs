use dotenv::var;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_USER_AGENT: &str = concat!("marketpulse/", env!("CARGO_PKG_VERSION"));

/// Where the API lives and how we introduce ourselves to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub user_agent: String,
}

impl Config {
    /// `PULSE_API_URL` and `USER_AGENT` from the environment (or `.env`), with
    /// the `--api-url` flag taking precedence.
    pub fn from_env(api_url_flag: Option<&str>) -> Self {
        Self::resolve(
            api_url_flag,
            var("PULSE_API_URL").ok(),
            var("USER_AGENT").ok(),
        )
    }

    fn resolve(flag: Option<&str>, env_url: Option<String>, env_agent: Option<String>) -> Self {
        let non_blank = |v: &String| !v.trim().is_empty();
        let api_url = flag
            .map(str::to_string)
            .or(env_url)
            .filter(non_blank)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let user_agent = env_agent
            .filter(non_blank)
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        Self {
            api_url,
            user_agent,
        }
    }
}
