//! CLI commands: entity lookup through the API and translation coverage

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use galerie_core::dates::{format_lifespan, format_range};
use galerie_core::endpoints::Resource;
use galerie_core::i18n::{key_count, missing_keys, orphan_keys, translate, Lang};
use galerie_core::models::{decode_detail, Artiste, Availability, Evenement, Exposition, Oeuvre, Reference};
use galerie_core::{AssetResolver, GalerieConfig};
use serde::Serialize;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    NotFound { kind: Resource, id: u64 },
    Http { url: String, status: u16 },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::NotFound { kind, id } => {
                write!(f, "No entry {} in {}", id, kind.segment())
            }
            CliError::Http { url, status } => write!(f, "GET {} answered {}", url, status),
        }
    }
}

impl std::error::Error for CliError {}

// ============================================================================
// Arguments
// ============================================================================

/// Accepts the path segment in singular or plural form
pub fn parse_kind(raw: &str) -> Result<Resource, String> {
    Resource::from_segment(raw).ok_or_else(|| {
        let known: Vec<&str> = Resource::ALL.iter().map(|r| r.segment()).collect();
        format!("unknown kind '{}' (expected one of: {})", raw, known.join(", "))
    })
}

// ============================================================================
// show
// ============================================================================

pub async fn run_show(config: &GalerieConfig, kind: Resource, id: u64, json: bool) -> Result<String> {
    let url = format!("{}{}", config.api_origin_trimmed(), kind.detail_path(id));
    tracing::debug!(url = %url, "fetching entity");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;
    let response = client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(CliError::NotFound { kind, id }.into());
    }
    if !status.is_success() {
        return Err(CliError::Http {
            url,
            status: status.as_u16(),
        }
        .into());
    }

    let body = response.text().await.context("Failed to read response body")?;
    let resolver = AssetResolver::new(config.asset_base_url.clone());
    render_detail(kind, id, &body, json, config.default_language, &resolver)
}

/// Decode a detail body and format it; empty bodies count as not found
pub fn render_detail(
    kind: Resource,
    id: u64,
    body: &str,
    json: bool,
    lang: Lang,
    resolver: &AssetResolver,
) -> Result<String> {
    let not_found = || anyhow::Error::from(CliError::NotFound { kind, id });

    match kind {
        Resource::Artiste => {
            let artiste: Artiste = decode_detail(body)?.ok_or_else(not_found)?;
            Ok(output(&artiste, json, || artiste_rows(&artiste)))
        }
        Resource::Evenement => {
            let evenement: Evenement = decode_detail(body)?.ok_or_else(not_found)?;
            Ok(output(&evenement, json, || evenement_rows(&evenement, lang)))
        }
        Resource::Exposition => {
            let exposition: Exposition = decode_detail(body)?.ok_or_else(not_found)?;
            Ok(output(&exposition, json, || exposition_rows(&exposition, lang)))
        }
        Resource::Oeuvre => {
            let oeuvre: Oeuvre = decode_detail(body)?.ok_or_else(not_found)?;
            Ok(output(&oeuvre, json, || oeuvre_rows(&oeuvre, resolver)))
        }
    }
}

fn output<T: Serialize>(entity: &T, json: bool, rows: impl FnOnce() -> Vec<(&'static str, String)>) -> String {
    if json {
        return serde_json::to_string_pretty(entity).unwrap_or_else(|_| "{}".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for (field, value) in rows() {
        table.add_row(Row::from(vec![Cell::new(field).fg(Color::Cyan), Cell::new(value)]));
    }
    table.to_string()
}

fn artiste_rows(artiste: &Artiste) -> Vec<(&'static str, String)> {
    vec![
        ("ID", artiste.id.to_string()),
        ("Name", or_dash(Some(&artiste.nom))),
        ("Country", or_dash(artiste.pays.as_deref())),
        (
            "Lifespan",
            or_dash(format_lifespan(artiste.date_naissance.as_deref(), artiste.date_deces.as_deref()).as_deref()),
        ),
        ("Exhibitions", artiste.combined_expositions().len().to_string()),
        ("Artworks", artiste.oeuvres.len().to_string()),
        ("Media", artiste.medias.len().to_string()),
        ("Bio", truncate(artiste.bio_or("-"), 80)),
    ]
}

fn evenement_rows(evenement: &Evenement, lang: Lang) -> Vec<(&'static str, String)> {
    vec![
        ("ID", evenement.id.to_string()),
        ("Title", or_dash(Some(&evenement.titre))),
        (
            "Dates",
            or_dash(format_range(evenement.date_debut.as_deref(), evenement.date_fin.as_deref(), lang).as_deref()),
        ),
        ("Venue", or_dash(evenement.lieu.as_deref())),
        ("Website", or_dash(evenement.site_url.as_deref())),
        ("Artists", references(&evenement.artistes)),
        ("Artworks", evenement.oeuvres.len().to_string()),
    ]
}

fn exposition_rows(exposition: &Exposition, lang: Lang) -> Vec<(&'static str, String)> {
    let today = Local::now().date_naive();
    vec![
        ("ID", exposition.id.to_string()),
        ("Title", or_dash(Some(&exposition.titre))),
        (
            "Dates",
            or_dash(format_range(exposition.date_debut.as_deref(), exposition.date_fin.as_deref(), lang).as_deref()),
        ),
        ("Status", translate(lang, exposition.status(today).i18n_key()).to_string()),
        (
            "Lead artist",
            exposition
                .artiste_principal
                .as_ref()
                .map(reference)
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Artists", references(&exposition.artistes)),
        ("Virtual tour", or_dash(exposition.virtual_tour())),
    ]
}

fn oeuvre_rows(oeuvre: &Oeuvre, resolver: &AssetResolver) -> Vec<(&'static str, String)> {
    let availability = match oeuvre.availability() {
        Availability::Available(stock) => format!("available ({})", stock),
        Availability::SoldOut => "sold out".to_string(),
    };
    vec![
        ("ID", oeuvre.id.to_string()),
        ("Title", or_dash(Some(&oeuvre.titre))),
        ("Technique", or_dash(oeuvre.technique.as_deref())),
        ("Dimensions", or_dash(oeuvre.dimensions.as_deref())),
        ("Availability", availability),
        ("Artist", oeuvre.artiste.as_ref().map(reference).unwrap_or_else(|| "-".to_string())),
        (
            "Exhibition",
            oeuvre.exposition.as_ref().map(reference).unwrap_or_else(|| "-".to_string()),
        ),
        ("Images", oeuvre.thumbnails(resolver).len().to_string()),
    ]
}

// ============================================================================
// i18n
// ============================================================================

/// Coverage of every language against the French table
pub fn format_i18n_report(list_missing: bool) -> String {
    let total = key_count();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Language").fg(Color::Cyan),
        Cell::new("Code").fg(Color::Cyan),
        Cell::new("Translated").fg(Color::Cyan),
        Cell::new("Missing").fg(Color::Cyan),
        Cell::new("Orphans").fg(Color::Cyan),
    ]);

    let mut details = Vec::new();
    for lang in Lang::ALL {
        let missing = missing_keys(lang);
        let orphans = orphan_keys(lang);
        let translated = total - missing.len();

        table.add_row(Row::from(vec![
            lang.label().to_string(),
            lang.code().to_string(),
            format!("{}/{} ({:.0}%)", translated, total, coverage(translated, total)),
            missing.len().to_string(),
            orphans.len().to_string(),
        ]));

        if list_missing && !missing.is_empty() {
            details.push(format!("\n{} missing:\n  {}", lang.code(), missing.join("\n  ")));
        }
    }

    let mut out = table.to_string();
    for block in details {
        out.push_str(&block);
    }
    out
}

// ============================================================================
// Utilities
// ============================================================================

fn coverage(translated: usize, total: usize) -> f64 {
    if total == 0 {
        100.0
    } else {
        translated as f64 * 100.0 / total as f64
    }
}

fn reference(reference: &Reference) -> String {
    match reference.label.as_deref() {
        Some(label) if !label.trim().is_empty() => format!("{} (#{})", label, reference.id),
        _ => format!("#{}", reference.id),
    }
}

fn references(list: &[Reference]) -> String {
    if list.is_empty() {
        return "-".to_string();
    }
    list.iter().map(reference).collect::<Vec<_>>().join(", ")
}

fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max {
        s.to_string()
    } else {
        s.chars().take(max - 1).collect::<String>() + "…"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AssetResolver {
        AssetResolver::new("http://localhost:8000/")
    }

    #[test]
    fn test_parse_kind_accepts_singular_and_plural() {
        assert_eq!(parse_kind("artistes").unwrap(), Resource::Artiste);
        assert_eq!(parse_kind("oeuvre").unwrap(), Resource::Oeuvre);
        assert!(parse_kind("sculptures").unwrap_err().contains("expositions"));
    }

    #[test]
    fn test_render_artiste_from_array_body() {
        let body = r#"[{"id": 5, "nom": "Inès Moreau", "pays": "France", "oeuvres": [{"id": 1}, {"id": 2}]}]"#;
        let out = render_detail(Resource::Artiste, 5, body, false, Lang::Fr, &resolver()).unwrap();

        assert!(out.contains("Inès Moreau"));
        assert!(out.contains("France"));
        assert_eq!(out.matches("Inès Moreau").count(), 1);
    }

    #[test]
    fn test_render_json_is_reparsable() {
        let body = r#"{"id": 3, "titre": "Atelier gravure", "lieu": "Atelier"}"#;
        let out = render_detail(Resource::Evenement, 3, body, true, Lang::Fr, &resolver()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["titre"], "Atelier gravure");
        assert_eq!(value["lieu"], "Atelier");
    }

    #[test]
    fn test_empty_body_is_not_found() {
        for body in ["", "null", "[]"] {
            let err = render_detail(Resource::Oeuvre, 9, body, false, Lang::Fr, &resolver()).unwrap_err();
            assert!(err.to_string().contains("No entry 9 in oeuvres"), "body {:?}", body);
        }
    }

    #[test]
    fn test_oeuvre_rows_show_availability() {
        let oeuvre = Oeuvre {
            id: 2,
            titre: "Nocturne".to_string(),
            stock: 0,
            ..Default::default()
        };
        let rows = oeuvre_rows(&oeuvre, &resolver());
        assert!(rows.contains(&("Availability", "sold out".to_string())));
        assert!(rows.contains(&("Technique", "-".to_string())));
    }

    #[test]
    fn test_i18n_report_lists_every_language() {
        let report = format_i18n_report(false);
        for lang in Lang::ALL {
            assert!(report.contains(lang.code()));
        }
        assert!(report.contains(&format!("{}/{}", key_count(), key_count())));
    }

    #[test]
    fn test_reference_formatting() {
        let named = Reference {
            id: 4,
            label: Some("Jon Berg".to_string()),
        };
        let bare = Reference { id: 7, label: None };
        assert_eq!(reference(&named), "Jon Berg (#4)");
        assert_eq!(references(&[named, bare]), "Jon Berg (#4), #7");
        assert_eq!(references(&[]), "-");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Œuvres", 10), "Œuvres");
        assert_eq!(truncate("Éléphant rose", 5), "Élép…");
    }
}
