//! Événement entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::media::Media;
use super::oeuvre::Oeuvre;
use super::payload::{deserialize_id, null_as_default, Reference};
use crate::dates::parse_date;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evenement {
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
    pub lieu: Option<String>,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artistes: Vec<Reference>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub oeuvres: Vec<Oeuvre>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medias: Vec<Media>,
}

impl Evenement {
    /// An event is past once its last day (end, else start) is before `today`
    pub fn is_past(&self, today: NaiveDate) -> bool {
        let last_day = self
            .date_fin
            .as_deref()
            .and_then(parse_date)
            .or_else(|| self.date_debut.as_deref().and_then(parse_date));
        last_day.is_some_and(|day| day < today)
    }
}

/// Split events into (upcoming, past); upcoming sorted soonest first, past most recent first
pub fn partition_by_date(
    evenements: &[Evenement],
    today: NaiveDate,
) -> (Vec<Evenement>, Vec<Evenement>) {
    let (mut upcoming, mut past): (Vec<_>, Vec<_>) = evenements
        .iter()
        .cloned()
        .partition(|event| !event.is_past(today));

    let start = |event: &Evenement| event.date_debut.as_deref().and_then(parse_date);
    upcoming.sort_by_key(|event| start(event));
    past.sort_by_key(|event| std::cmp::Reverse(start(event)));

    (upcoming, past)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: u64, debut: &str, fin: Option<&str>) -> Evenement {
        Evenement {
            id,
            date_debut: Some(debut.to_string()),
            date_fin: fin.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_partition_by_date() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let events = vec![
            event(1, "2024-01-01", None),
            event(2, "2024-04-01", None),
            event(3, "2024-03-01", Some("2024-03-20")),
            event(4, "2024-02-01", None),
        ];

        let (upcoming, past) = partition_by_date(&events, today);
        let upcoming_ids: Vec<u64> = upcoming.iter().map(|e| e.id).collect();
        let past_ids: Vec<u64> = past.iter().map(|e| e.id).collect();
        assert_eq!(upcoming_ids, vec![3, 2]);
        assert_eq!(past_ids, vec![4, 1]);
    }

    #[test]
    fn test_undated_event_is_upcoming() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert!(!Evenement::default().is_past(today));
    }
}
