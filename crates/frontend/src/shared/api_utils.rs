//! Endpoint registry for the remote REST API.
//!
//! The base URL is fixed at build time through the `API_URL` environment
//! variable and falls back to the local development server.

use once_cell::sync::Lazy;

/// Base URL used when `API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

/// Precomputed absolute URLs, built once from [`api_base`].
pub static ENDPOINTS: Lazy<Endpoints> = Lazy::new(|| Endpoints::from_base(api_base()));

/// Absolute URLs of the authentication actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub login: String,
    pub register: String,
    pub logout: String,
}

/// Absolute URLs of every resource collection the UI talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base: String,
    pub auth: AuthEndpoints,
    pub products: String,
    pub categories: String,
    pub stock: String,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Self {
        let base = normalize_base(base);
        let url = |path: &str| format!("{}/{}", base, path);

        Self {
            auth: AuthEndpoints {
                login: url("auth/login"),
                register: url("auth/register"),
                logout: url("auth/logout"),
            },
            products: url("products"),
            categories: url("categories"),
            stock: url("stock"),
            base,
        }
    }

    /// URL of a single product: `<products>/<id>`
    pub fn product(&self, id: &str) -> String {
        format!("{}/{}", self.products, urlencoding::encode(id))
    }
}

/// Get the base URL for API requests
///
/// # Returns
/// - The build-time `API_URL` value without trailing slashes
/// - [`DEFAULT_API_URL`] if the variable was unset or blank
pub fn api_base() -> &'static str {
    resolve_base(option_env!("API_URL"))
}

fn resolve_base(configured: Option<&'static str>) -> &'static str {
    configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
