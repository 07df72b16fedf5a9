use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_ip_api_base")]
    pub ip_api_base: String,

    #[serde(default = "default_greencheck_base")]
    pub greencheck_base: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_api_port() -> u16 { 8720 }
fn default_fetch_timeout() -> u64 { 8 }
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36".to_string()
}
fn default_ip_api_base() -> String { "http://ip-api.com/json".to_string() }
fn default_greencheck_base() -> String {
    "https://api.thegreenwebfoundation.org/v2/greencheck".to_string()
}
fn default_max_body_bytes() -> usize { 16 * 1024 }

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_api_port),
            fetch_timeout: std::env::var("FETCH_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_fetch_timeout),
            user_agent: std::env::var("USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
            ip_api_base: std::env::var("IP_API_BASE")
                .unwrap_or_else(|_| default_ip_api_base()),
            greencheck_base: std::env::var("GREENCHECK_BASE")
                .unwrap_or_else(|_| default_greencheck_base()),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_body_bytes),
        };

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_port: default_api_port(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
            ip_api_base: default_ip_api_base(),
            greencheck_base: default_greencheck_base(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}
