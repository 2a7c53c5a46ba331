//! Artiste entity and the merged exposition list shown on the artist page

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::exposition::Exposition;
use super::media::Media;
use super::oeuvre::Oeuvre;
use super::payload::{deserialize_id, null_as_default, OneOrMany};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artiste {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: u64,
    #[serde(default, alias = "name")]
    pub nom: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub date_naissance: Option<String>,
    #[serde(default)]
    pub date_deces: Option<String>,
    #[serde(default)]
    pub pays: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medias: Vec<Media>,
    #[serde(default)]
    pub exposition_principale: OneOrMany<Exposition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expositions: Vec<Exposition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub oeuvres: Vec<Oeuvre>,
}

/// One line of the merged exposition list
#[derive(Debug, Clone, PartialEq)]
pub struct ExpositionEntry {
    pub exposition: Exposition,
    pub principal: bool,
}

impl Artiste {
    /// Principal expositions first (flagged), then the remaining expositions
    ///
    /// Every id appears at most once; an exposition listed both as principal
    /// and in `expositions` keeps its principal flag.
    pub fn combined_expositions(&self) -> Vec<ExpositionEntry> {
        let mut seen = HashSet::new();
        let principal = self
            .exposition_principale
            .as_slice()
            .iter()
            .map(|expo| (expo, true));
        let others = self.expositions.iter().map(|expo| (expo, false));

        principal
            .chain(others)
            .filter(|(expo, _)| seen.insert(expo.id))
            .map(|(expo, principal)| ExpositionEntry {
                exposition: expo.clone(),
                principal,
            })
            .collect()
    }

    pub fn bio_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.bio
            .as_deref()
            .map(str::trim)
            .filter(|bio| !bio.is_empty())
            .unwrap_or(fallback)
    }

    pub fn is_deceased(&self) -> bool {
        self.date_deces
            .as_deref()
            .is_some_and(|date| !date.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expo(id: u64) -> Exposition {
        Exposition {
            id,
            titre: format!("Expo {}", id),
            ..Default::default()
        }
    }

    #[test]
    fn test_combined_expositions_deduplicates_principal() {
        let artiste = Artiste {
            exposition_principale: OneOrMany::One(expo(5)),
            expositions: vec![expo(5), expo(7)],
            ..Default::default()
        };

        let combined = artiste.combined_expositions();
        let ids: Vec<u64> = combined.iter().map(|e| e.exposition.id).collect();
        assert_eq!(ids, vec![5, 7]);
        assert!(combined[0].principal);
        assert!(!combined[1].principal);
    }

    #[test]
    fn test_combined_expositions_principal_as_list() {
        let artiste = Artiste {
            exposition_principale: OneOrMany::Many(vec![expo(2), expo(3)]),
            expositions: vec![expo(1), expo(3), expo(1)],
            ..Default::default()
        };

        let combined = artiste.combined_expositions();
        let flags: Vec<(u64, bool)> = combined
            .iter()
            .map(|e| (e.exposition.id, e.principal))
            .collect();
        assert_eq!(flags, vec![(2, true), (3, true), (1, false)]);
    }

    #[test]
    fn test_no_principal() {
        let artiste: Artiste = serde_json::from_str(
            r#"{"id": 1, "nom": "A", "exposition_principale": null, "expositions": [{"id": 8}]}"#,
        )
        .unwrap();
        let combined = artiste.combined_expositions();
        assert_eq!(combined.len(), 1);
        assert!(!combined[0].principal);
    }

    #[test]
    fn test_bio_fallback() {
        let artiste = Artiste {
            bio: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(artiste.bio_or("Aucune biographie disponible."), "Aucune biographie disponible.");
    }
}
