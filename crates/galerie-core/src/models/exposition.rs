//! Exposition (exhibition) entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::payload::{deserialize_id, null_as_default, Reference};
use crate::dates::parse_date;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Exposition {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: u64,
    #[serde(default, alias = "title")]
    pub titre: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub date_debut: Option<String>,
    #[serde(default)]
    pub date_fin: Option<String>,
    #[serde(default)]
    pub artiste_principal: Option<Reference>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artistes: Vec<Reference>,
    #[serde(default)]
    pub visite_virtuelle_url: Option<String>,
}

/// Where an exposition sits relative to a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpositionStatus {
    Current,
    Upcoming,
    Past,
}

impl ExpositionStatus {
    pub fn i18n_key(self) -> &'static str {
        match self {
            ExpositionStatus::Current => "expositions.current",
            ExpositionStatus::Upcoming => "expositions.upcoming",
            ExpositionStatus::Past => "expositions.past",
        }
    }
}

impl Exposition {
    pub fn start(&self) -> Option<NaiveDate> {
        self.date_debut.as_deref().and_then(parse_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.date_fin.as_deref().and_then(parse_date)
    }

    /// Classify against `today`
    ///
    /// Missing start dates count as already open; missing end dates as still
    /// running.
    pub fn status(&self, today: NaiveDate) -> ExpositionStatus {
        match (self.start(), self.end()) {
            (Some(start), _) if start > today => ExpositionStatus::Upcoming,
            (_, Some(end)) if end < today => ExpositionStatus::Past,
            _ => ExpositionStatus::Current,
        }
    }

    /// Virtual tour URL, if a non-blank one is set
    pub fn virtual_tour(&self) -> Option<&str> {
        self.visite_virtuelle_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Keep only the expositions matching `status`, preserving API order
pub fn filter_by_status(
    expositions: &[Exposition],
    status: ExpositionStatus,
    today: NaiveDate,
) -> Vec<Exposition> {
    expositions
        .iter()
        .filter(|expo| expo.status(today) == status)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expo(debut: &str, fin: &str) -> Exposition {
        Exposition {
            date_debut: Some(debut.to_string()),
            date_fin: Some(fin.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_status_classification() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(expo("2024-05-01", "2024-07-01").status(today), ExpositionStatus::Current);
        assert_eq!(expo("2024-06-02", "2024-07-01").status(today), ExpositionStatus::Upcoming);
        assert_eq!(expo("2024-01-01", "2024-05-31").status(today), ExpositionStatus::Past);
        assert_eq!(Exposition::default().status(today), ExpositionStatus::Current);
    }

    #[test]
    fn test_decode_with_nested_artist() {
        let json = r#"{
            "id": 5,
            "titre": "Lumières du Nord",
            "artiste_principal": {"id": 2, "nom": "Inès Moreau"},
            "artistes": [3, {"id": 4, "nom": "Jon Berg"}],
            "visite_virtuelle_url": "  "
        }"#;
        let expo: Exposition = serde_json::from_str(json).unwrap();
        assert_eq!(expo.artiste_principal.as_ref().unwrap().id, 2);
        assert_eq!(expo.artistes.len(), 2);
        assert_eq!(expo.virtual_tour(), None);
    }

    #[test]
    fn test_null_artistes_list() {
        let expo: Exposition = serde_json::from_str(r#"{"id": 1, "artistes": null}"#).unwrap();
        assert!(expo.artistes.is_empty());
    }
}
