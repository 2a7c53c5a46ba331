//! The `trunk serve` proxy table must cover every API path the client calls

use galerie_core::endpoints::{actualites_path, Resource, CURRENT_USER_PATH, LOGOUT_PATH, MEDIAS_PATH};
use serde::Deserialize;

#[derive(Deserialize)]
struct TrunkConfig {
    proxy: Vec<ProxyEntry>,
}

#[derive(Deserialize)]
struct ProxyEntry {
    rewrite: String,
    backend: String,
}

fn proxies() -> Vec<ProxyEntry> {
    let raw = include_str!("../Trunk.toml");
    toml::from_str::<TrunkConfig>(raw).unwrap().proxy
}

#[test]
fn test_proxy_prefixes_have_no_trailing_slash() {
    for entry in proxies() {
        assert!(!entry.rewrite.ends_with('/'), "{} ends with a slash", entry.rewrite);
        assert!(
            entry.backend.ends_with(&entry.rewrite),
            "{} does not forward to {}",
            entry.rewrite,
            entry.backend
        );
    }
}

#[test]
fn test_client_paths_are_proxied() {
    let proxies = proxies();
    let mut paths = vec![
        actualites_path(2),
        MEDIAS_PATH.to_string(),
        CURRENT_USER_PATH.to_string(),
        LOGOUT_PATH.to_string(),
    ];
    for resource in Resource::ALL {
        paths.push(resource.list_path());
        paths.push(resource.detail_path(5));
    }

    for path in paths {
        assert!(
            proxies.iter().any(|entry| path.starts_with(&entry.rewrite)),
            "{} is not proxied by trunk serve",
            path
        );
    }
}
