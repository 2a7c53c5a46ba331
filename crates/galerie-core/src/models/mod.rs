//! Gallery entities as observed from the REST API

pub mod actualite;
pub mod artiste;
pub mod evenement;
pub mod exposition;
pub mod media;
pub mod oeuvre;
pub mod payload;
pub mod user;

pub use actualite::Actualite;
pub use artiste::{Artiste, ExpositionEntry};
pub use evenement::{partition_by_date, Evenement};
pub use exposition::{filter_by_status, Exposition, ExpositionStatus};
pub use media::{Media, MediaKind};
pub use oeuvre::{Availability, Oeuvre};
pub use payload::{decode_detail, ListPayload, OneOrMany, Reference};
pub use user::{AuthUser, Role};
