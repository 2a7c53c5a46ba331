//! Actualité (news item) shown in the homepage feed

use serde::{Deserialize, Serialize};

use super::payload::deserialize_id;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actualite {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: u64,
    #[serde(default, alias = "title")]
    pub titre: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "url")]
    pub link: Option<String>,
}

impl Actualite {
    /// External link, only when it looks like an absolute http(s) URL
    pub fn external_link(&self) -> Option<&str> {
        self.link
            .as_deref()
            .map(str::trim)
            .filter(|link| link.starts_with("http://") || link.starts_with("https://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_alias() {
        let item: Actualite =
            serde_json::from_str(r#"{"id": 1, "title": "Vernissage", "link": "https://x.org"}"#)
                .unwrap();
        assert_eq!(item.titre, "Vernissage");
        assert_eq!(item.external_link(), Some("https://x.org"));
    }

    #[test]
    fn test_relative_link_is_not_external() {
        let item = Actualite {
            link: Some("/evenements/3".into()),
            ..Default::default()
        };
        assert_eq!(item.external_link(), None);
    }
}
