//! Where the SlideChat server and the student-facing app live.

const DEFAULT_SERVER_URL: &str = "http://localhost:10000";
const DEFAULT_APP_URL: &str = "http://localhost:8080";

const SERVER_URL_VAR: &str = "SLIDECHAT_SERVER_URL";
const APP_URL_VAR: &str = "SLIDECHAT_APP_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base of every `/api/...` request.
    pub server_url: String,
    /// Base of shareable slide links (`{app_url}/{slide_id}`).
    pub app_url: String,
}

impl ApiConfig {
    pub fn new(server_url: impl Into<String>, app_url: impl Into<String>) -> Self {
        Self {
            server_url: trim_base(server_url.into()),
            app_url: trim_base(app_url.into()),
        }
    }

    /// Resolve from the environment, falling back to local development defaults.
    ///
    /// Native builds read the process environment; wasm builds only see what
    /// was set at compile time.
    pub fn from_env() -> Self {
        Self::new(
            lookup(SERVER_URL_VAR, option_env!("SLIDECHAT_SERVER_URL"))
                .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string()),
            lookup(APP_URL_VAR, option_env!("SLIDECHAT_APP_URL"))
                .unwrap_or_else(|| DEFAULT_APP_URL.to_string()),
        )
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn slide_link(&self, slide_id: &str) -> String {
        format!("{}/{}", self.app_url, slide_id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL, DEFAULT_APP_URL)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup(var: &str, compiled: Option<&'static str>) -> Option<String> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| compiled.map(str::to_string))
}

#[cfg(target_arch = "wasm32")]
fn lookup(_var: &str, compiled: Option<&'static str>) -> Option<String> {
    compiled.map(str::to_string)
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
