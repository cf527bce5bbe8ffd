//! API base URL resolution and storage keys.

use url::Url;

/// Local storage key overriding the API base URL.
pub const API_URL_KEY: &str = "empleados.api_url";

/// Local storage key for the chosen locale.
pub const LOCALE_KEY: &str = "empleados.locale";

/// API base URL baked in at build time, if any.
pub const BUILD_API_URL: Option<&str> = option_env!("EMPLEADOS_API_URL");

const DEV_SERVER_PORT: u16 = 8080;
const API_PORT: u16 = 4000;
const FALLBACK_API_URL: &str = "http://localhost:4000";

/// Pick the API base URL: stored override, then build-time value, then the page origin.
///
/// When the page is served by the dev server on 8080 the API is assumed on 4000
/// of the same host. Trailing slashes are stripped so paths can be appended.
#[must_use]
pub fn resolve_api_base_url(
    stored: Option<&str>,
    build: Option<&str>,
    page_href: Option<&str>,
) -> String {
    if let Some(explicit) = [stored, build]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
    {
        return explicit.trim_end_matches('/').to_string();
    }
    page_href
        .and_then(origin_for_api)
        .unwrap_or_else(|| FALLBACK_API_URL.to_string())
}

fn origin_for_api(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    let host = url.host_str()?;
    let mut base = format!("{}://{host}", url.scheme());
    match url.port() {
        Some(DEV_SERVER_PORT) => base.push_str(&format!(":{API_PORT}")),
        Some(port) => base.push_str(&format!(":{port}")),
        None => {}
    }
    Some(base)
}
