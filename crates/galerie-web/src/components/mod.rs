//! Leptos UI components shared by the public pages and the back-office

mod actualites_feed;
mod cards;
mod empty_state;
mod footer;
mod language_toggle;
mod loading;
mod medias_grid;
mod navbar;
mod not_found_block;
mod sidebar;

pub use actualites_feed::ActualitesFeed;
pub use cards::{ArtisteCard, EvenementCard, ExpositionCard, OeuvreCard};
pub use empty_state::EmptyState;
pub use footer::Footer;
pub use language_toggle::LanguageToggle;
pub use loading::LoadingState;
pub use medias_grid::MediasGrid;
pub use navbar::Navbar;
pub use not_found_block::NotFoundBlock;
pub use sidebar::AdminSidebar;
