//! View-state helpers shared by the detail pages

use crate::models::Exposition;

/// Number of artworks shown on an artist page before "show all"
pub const ARTWORK_PREVIEW_LIMIT: usize = 8;

/// The three states of a detail page
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Loading,
    NotFound,
    Loaded(T),
}

impl<T> DetailState<T> {
    /// Collapse a fetch outcome: failures and empty bodies both mean "not found"
    pub fn from_fetch<E: std::fmt::Display>(result: Result<Option<T>, E>, resource: &str) -> Self {
        match result {
            Ok(Some(entity)) => DetailState::Loaded(entity),
            Ok(None) => DetailState::NotFound,
            Err(err) => {
                tracing::warn!(resource, error = %err, "detail fetch failed");
                DetailState::NotFound
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            DetailState::Loaded(entity) => Some(entity),
            _ => None,
        }
    }
}

/// Slice of `items` visible with the "show all" toggle in the given position
pub fn visible_items<T>(items: &[T], show_all: bool, limit: usize) -> &[T] {
    if show_all {
        items
    } else {
        &items[..items.len().min(limit)]
    }
}

/// Whether the "show all / show fewer" toggle is worth rendering
pub fn needs_toggle(total: usize, limit: usize) -> bool {
    total > limit
}

/// What the virtual-tour modal shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourContent {
    /// Embed this URL in a frame
    Frame { title: String, url: String },
    /// No tour URL configured for this exposition
    Unavailable { title: String },
}

impl TourContent {
    pub fn for_exposition(exposition: &Exposition) -> Self {
        let title = exposition.titre.clone();
        match exposition.virtual_tour() {
            Some(url) => TourContent::Frame {
                title,
                url: url.to_string(),
            },
            None => TourContent::Unavailable { title },
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TourContent::Frame { title, .. } | TourContent::Unavailable { title } => title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_toggle_is_idempotent() {
        let artworks: Vec<u32> = (1..=10).collect();
        assert_eq!(visible_items(&artworks, false, ARTWORK_PREVIEW_LIMIT).len(), 8);
        assert_eq!(visible_items(&artworks, true, ARTWORK_PREVIEW_LIMIT).len(), 10);
        assert_eq!(visible_items(&artworks, false, ARTWORK_PREVIEW_LIMIT).len(), 8);
        assert!(needs_toggle(artworks.len(), ARTWORK_PREVIEW_LIMIT));
    }

    #[test]
    fn test_short_lists_are_untouched() {
        let artworks = [1, 2, 3];
        assert_eq!(visible_items(&artworks, false, ARTWORK_PREVIEW_LIMIT), &[1, 2, 3]);
        assert!(!needs_toggle(artworks.len(), ARTWORK_PREVIEW_LIMIT));
    }

    #[test]
    fn test_detail_state_from_fetch() {
        let loaded: DetailState<u32> = DetailState::from_fetch(Ok::<_, String>(Some(3)), "oeuvre");
        assert_eq!(loaded.loaded(), Some(&3));

        let empty: DetailState<u32> = DetailState::from_fetch(Ok::<_, String>(None), "oeuvre");
        assert_eq!(empty, DetailState::NotFound);

        let failed: DetailState<u32> = DetailState::from_fetch(Err("HTTP error: 500"), "oeuvre");
        assert_eq!(failed, DetailState::NotFound);
    }

    #[test]
    fn test_tour_content() {
        let mut expo = Exposition {
            titre: "Horizons".into(),
            ..Default::default()
        };
        assert_eq!(
            TourContent::for_exposition(&expo),
            TourContent::Unavailable { title: "Horizons".into() }
        );

        expo.visite_virtuelle_url = Some("https://tour.example/horizons".into());
        assert_eq!(
            TourContent::for_exposition(&expo),
            TourContent::Frame {
                title: "Horizons".into(),
                url: "https://tour.example/horizons".into()
            }
        );
    }
}
