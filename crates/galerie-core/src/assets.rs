//! Asset URL resolution against the configured base URL
//!
//! The API returns image paths either relative to the backend (`media/a.jpg`)
//! or as absolute URLs. Local assets are served over plain http, so absolute
//! `https://` URLs are rewritten to `http://`.

use serde_json::Value;

/// Default backend origin used to resolve relative asset paths
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

/// Placeholder shown when an entity has no image at all
pub const PLACEHOLDER_IMAGE: &str = "/img/placeholder.svg";

/// Placeholder for artists without a portrait
pub const PLACEHOLDER_PORTRAIT: &str = "/img/portrait-placeholder.svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    base_url: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl AssetResolver {
    /// Create a resolver; a trailing slash is added to `base_url` when missing
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path or URL returned by the API into a displayable URL
    pub fn resolve(&self, raw: &str) -> String {
        let raw = raw.trim();
        if let Some(rest) = raw.strip_prefix("https://") {
            return format!("http://{}", rest);
        }
        if raw.starts_with("http://") || raw.starts_with("data:") || raw.starts_with("blob:") {
            return raw.to_string();
        }
        if let Some(rest) = raw.strip_prefix("//") {
            return format!("http://{}", rest);
        }
        format!("{}{}", self.base_url, raw.trim_start_matches('/'))
    }

    /// Resolve an optional path, falling back to `placeholder` when absent or blank
    pub fn resolve_or(&self, raw: Option<&str>, placeholder: &str) -> String {
        raw.map(str::trim)
            .filter(|path| !path.is_empty())
            .map(|path| self.resolve(path))
            .unwrap_or_else(|| placeholder.to_string())
    }
}

/// Split the delimited `images_secondaires` field into individual paths
///
/// Accepts a JSON array string (`["a.jpg","b.jpg"]`) or a list separated by
/// commas, semicolons, pipes or newlines. Blank entries are dropped.
pub fn split_image_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
            return items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
        }
        tracing::debug!("images_secondaires looked like JSON but did not parse, splitting as text");
    }

    trimmed
        .split([',', ';', '|', '\n'])
        .map(|item| item.trim().trim_matches(|c| c == '"' || c == '\'' || c == '[' || c == ']'))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_uses_base_url() {
        let resolver = AssetResolver::new("http://localhost:8000/");
        assert_eq!(resolver.resolve("foo.jpg"), "http://localhost:8000/foo.jpg");
        assert_eq!(resolver.resolve("/media/foo.jpg"), "http://localhost:8000/media/foo.jpg");
    }

    #[test]
    fn test_https_rewritten_to_http() {
        let resolver = AssetResolver::default();
        assert_eq!(resolver.resolve("https://host/img.png"), "http://host/img.png");
        assert_eq!(resolver.resolve("http://host/img.png"), "http://host/img.png");
        assert_eq!(resolver.resolve("//cdn/img.png"), "http://cdn/img.png");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let resolver = AssetResolver::new("http://api.local");
        assert_eq!(resolver.base_url(), "http://api.local/");
        assert_eq!(resolver.resolve("a.png"), "http://api.local/a.png");
    }

    #[test]
    fn test_resolve_or_placeholder() {
        let resolver = AssetResolver::default();
        assert_eq!(resolver.resolve_or(None, PLACEHOLDER_IMAGE), PLACEHOLDER_IMAGE);
        assert_eq!(resolver.resolve_or(Some(" "), PLACEHOLDER_IMAGE), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_split_image_list_delimiters() {
        assert_eq!(split_image_list("a.jpg, b.jpg;c.jpg|d.jpg"), vec!["a.jpg", "b.jpg", "c.jpg", "d.jpg"]);
        assert_eq!(split_image_list(r#"["x.png", " y.png "]"#), vec!["x.png", "y.png"]);
        assert!(split_image_list("  ,, ").is_empty());
    }
}
