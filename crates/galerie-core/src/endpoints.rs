//! REST API paths used by the site, and the matcher for proxied API routes

use once_cell::sync::Lazy;
use regex::Regex;

/// `/{resource}(/admin)?/api(/...)?`, with an optional query string
static API_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/[A-Za-z0-9_-]+(?:/admin)?/api(?:/[^?#]*)?(?:\?.*)?$")
        .expect("API path pattern is valid")
});

/// Whether a request path must be forwarded to the backend API
pub fn is_api_path(path: &str) -> bool {
    API_PATH.is_match(path)
}

/// Detail resources addressable by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Artiste,
    Evenement,
    Exposition,
    Oeuvre,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Artiste,
        Resource::Evenement,
        Resource::Exposition,
        Resource::Oeuvre,
    ];

    /// Path segment of the resource, also used as CLI argument
    pub fn segment(self) -> &'static str {
        match self {
            Resource::Artiste => "artistes",
            Resource::Evenement => "evenements",
            Resource::Exposition => "expositions",
            Resource::Oeuvre => "oeuvres",
        }
    }

    pub fn from_segment(raw: &str) -> Option<Self> {
        let raw = raw.trim().trim_end_matches('s').to_lowercase();
        Resource::ALL
            .into_iter()
            .find(|resource| resource.segment().trim_end_matches('s') == raw)
    }

    /// Collection endpoint, e.g. `/artistes/api`
    pub fn list_path(self) -> String {
        format!("/{}/api", self.segment())
    }

    /// Detail endpoint, e.g. `/artistes/api/5`
    pub fn detail_path(self, id: u64) -> String {
        format!("/{}/api/{}", self.segment(), id)
    }

    /// Public page of one entity
    pub fn page_path(self, id: u64) -> String {
        format!("/{}/{}", self.segment(), id)
    }

    /// Public listing page the "not found" branch links back to
    ///
    /// Artworks have no listing of their own; their pages link to the artists.
    pub fn listing_page(self) -> &'static str {
        match self {
            Resource::Artiste | Resource::Oeuvre => "/artistes",
            Resource::Evenement => "/evenements",
            Resource::Exposition => "/expositions",
        }
    }
}

/// News feed page, 1-based
pub fn actualites_path(page: u32) -> String {
    format!("/actualites/api?page={}", page.max(1))
}

pub const MEDIAS_PATH: &str = "/medias/api";
pub const CURRENT_USER_PATH: &str = "/auth/api/me";
pub const LOGOUT_PATH: &str = "/auth/api/logout";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_path_matcher() {
        for path in [
            "/artistes/api",
            "/artistes/api/5",
            "/expositions/admin/api",
            "/expositions/admin/api/3/images",
            "/actualites/api?page=2",
            "/auth/api/me",
        ] {
            assert!(is_api_path(path), "{} should be proxied", path);
        }

        for path in ["/", "/artistes", "/artistes/5", "/api", "/artistes/apix", "/a/b/api"] {
            assert!(!is_api_path(path), "{} should not be proxied", path);
        }
    }

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::Artiste.detail_path(5), "/artistes/api/5");
        assert_eq!(Resource::Evenement.list_path(), "/evenements/api");
        assert_eq!(Resource::Oeuvre.page_path(2), "/oeuvres/2");
        assert_eq!(Resource::Oeuvre.listing_page(), "/artistes");
        assert_eq!(actualites_path(0), "/actualites/api?page=1");
    }

    #[test]
    fn test_listing_pages() {
        assert_eq!(Resource::Artiste.listing_page(), "/artistes");
        assert_eq!(Resource::Evenement.listing_page(), "/evenements");
        assert_eq!(Resource::Exposition.listing_page(), "/expositions");
        assert_eq!(Resource::Oeuvre.listing_page(), "/artistes");

        // Every listing is a public page, never an API route
        for resource in Resource::ALL {
            let page = resource.listing_page();
            assert!(!is_api_path(page), "{} should not be proxied", page);
            assert!(page.starts_with('/'));
        }
    }

    #[test]
    fn test_resource_from_segment() {
        assert_eq!(Resource::from_segment("artiste"), Some(Resource::Artiste));
        assert_eq!(Resource::from_segment("Oeuvres"), Some(Resource::Oeuvre));
        assert_eq!(Resource::from_segment("users"), None);
    }
}
