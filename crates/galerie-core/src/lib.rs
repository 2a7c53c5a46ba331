//! galerie-core - Core library for galerie
//!
//! Gallery data model and lenient API decoding, asset URL resolution,
//! date formatting, translations, news feed pagination and the back-office
//! mock data. Free of any runtime or HTTP client so it builds for wasm.

pub mod admin;
pub mod assets;
pub mod config;
pub mod dates;
pub mod display;
pub mod endpoints;
pub mod error;
pub mod feed;
pub mod i18n;
pub mod lifecycle;
pub mod models;
pub mod preferences;
pub mod search;

pub use assets::AssetResolver;
pub use config::GalerieConfig;
pub use display::DetailState;
pub use endpoints::Resource;
pub use error::{ApiError, ConfigError};
pub use feed::{Feed, FeedUpdate, PageRequest, ScrollThrottle};
pub use i18n::{translate, Lang};
pub use lifecycle::AbortHandle;
pub use preferences::{ColorScheme, UiPreferences};
