//! Integration tests decoding realistic gallery API payloads

use chrono::NaiveDate;
use galerie_core::admin::{sidebar_links, AdminTab};
use galerie_core::models::{
    decode_detail, partition_by_date, Artiste, AuthUser, Evenement, ListPayload, Oeuvre, Role,
};
use galerie_core::{AssetResolver, DetailState};

const ARTISTE_DETAIL: &str = r#"[
  {
    "id": "12",
    "nom": "Inès Moreau",
    "bio": "Peintre et graveuse installée à Lyon.",
    "photo": "media/artistes/moreau.jpg",
    "date_naissance": "1971-04-02",
    "date_deces": null,
    "pays": "France",
    "exposition_principale": {"id": 3, "titre": "Lumières du Nord", "date_debut": "2024-03-01"},
    "expositions": [
      {"id": 3, "titre": "Lumières du Nord"},
      {"id": 7, "titre": "Matières premières"},
      {"id": 7, "titre": "Matières premières"}
    ],
    "oeuvres": [
      {"id": 1, "titre": "Fjord", "stock": 2, "artiste": 12},
      {"id": 2, "titre": "Nuit claire", "stock": 0, "artiste": {"id": 12, "nom": "Inès Moreau"}}
    ],
    "medias": null
  }
]"#;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_artist_detail_wrapped_in_array() {
    let artiste: Artiste = decode_detail(ARTISTE_DETAIL).unwrap().unwrap();
    assert_eq!(artiste.id, 12);
    assert_eq!(artiste.oeuvres.len(), 2);
    assert!(artiste.medias.is_empty());
    assert!(!artiste.is_deceased());

    let combined = artiste.combined_expositions();
    let ids: Vec<u64> = combined.iter().map(|entry| entry.exposition.id).collect();
    assert_eq!(ids, vec![3, 7]);
    assert!(combined[0].principal);
    assert!(!combined[1].principal);
}

#[test]
fn test_empty_detail_bodies_render_not_found() {
    for body in ["", "null", "[]", "{}"] {
        let state = DetailState::from_fetch(decode_detail::<Oeuvre>(body), "oeuvre");
        assert_eq!(state, DetailState::NotFound, "body {:?}", body);
    }
}

#[test]
fn test_artwork_thumbnails_from_payload() {
    let body = r#"{
        "id": 4,
        "titre": "Fjord",
        "stock": "1",
        "image_principale": "/media/oeuvres/fjord.jpg",
        "images_secondaires": "media/oeuvres/fjord-2.jpg; https://cdn.example/fjord-3.jpg;/media/oeuvres/fjord.jpg"
    }"#;
    let oeuvre: Oeuvre = decode_detail(body).unwrap().unwrap();
    let resolver = AssetResolver::new("http://localhost:8000");

    assert_eq!(
        oeuvre.thumbnails(&resolver),
        vec![
            "http://localhost:8000/media/oeuvres/fjord.jpg".to_string(),
            "http://localhost:8000/media/oeuvres/fjord-2.jpg".to_string(),
            "http://cdn.example/fjord-3.jpg".to_string(),
        ]
    );
}

#[test]
fn test_event_listing_envelope() {
    let body = r#"{"results": [
        {"id": 1, "titre": "Vernissage", "date_debut": "2024-03-01"},
        {"id": 2, "titre": "Nocturne", "date_debut": "2024-06-20", "date_fin": "2024-06-21"},
        {"id": 3, "titre": "Atelier", "date_debut": "2024-05-10"}
    ]}"#;
    let events = serde_json::from_str::<ListPayload<Evenement>>(body)
        .unwrap()
        .into_inner();

    let (upcoming, past) = partition_by_date(&events, day(2024, 4, 1));
    let upcoming_ids: Vec<u64> = upcoming.iter().map(|e| e.id).collect();
    let past_ids: Vec<u64> = past.iter().map(|e| e.id).collect();
    assert_eq!(upcoming_ids, vec![3, 2]);
    assert_eq!(past_ids, vec![1]);
}

#[test]
fn test_session_role_drives_sidebar() {
    for body in [
        r#"{"id": 1, "email": "claire@galerie.example", "role": "SUPER_ADMIN"}"#,
        r#"{"id": 1, "email": "claire@galerie.example", "roles": ["ADMIN", "SUPER_ADMIN"]}"#,
    ] {
        let user: AuthUser = serde_json::from_str(body).unwrap();
        assert_eq!(user.role, Role::SuperAdmin);
        let tabs: Vec<AdminTab> = sidebar_links(user.role).iter().map(|l| l.tab).collect();
        assert_eq!(tabs.last(), Some(&AdminTab::Users));
    }

    let admin: AuthUser = serde_json::from_str(r#"{"id": 2, "role": ["ADMIN"]}"#).unwrap();
    assert!(sidebar_links(admin.role)
        .iter()
        .all(|link| link.tab != AdminTab::Users));
}
