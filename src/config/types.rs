use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const MODEL: &str = "llama-3.3-70b-versatile";
pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 2048;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Origins the browser frontend is served from.
pub const ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_base: DEFAULT_API_BASE.to_string(),
            model: MODEL.to_string(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            request_timeout: REQUEST_TIMEOUT,
            allowed_origins: ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// An empty key is treated the same as an unset one.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            ..Self::default()
        }
    }

    pub fn with_listen(mut self, host: &str, port: u16) -> Self {
        self.host = host.to_string();
        self.port = port;
        self
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Append origins to the allow-list, skipping duplicates.
    pub fn with_extra_origins(mut self, origins: &[String]) -> Self {
        for origin in origins {
            let origin = origin.trim_end_matches('/');
            if !origin.is_empty() && !self.allowed_origins.iter().any(|o| o == origin) {
                self.allowed_origins.push(origin.to_string());
            }
        }
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
