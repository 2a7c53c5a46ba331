//! Translation table for the public site and the back-office
//!
//! A single key → string table per language. Lookups fall back to French,
//! then to the key itself, so a missing entry never breaks rendering.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
    Es,
}

/// Language used when a key is missing from the requested table
pub const FALLBACK_LANG: Lang = Lang::Fr;

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::Fr, Lang::En, Lang::Es];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Native language name, for the toggle tooltip
    pub fn label(self) -> &'static str {
        match self {
            Lang::Fr => "Français",
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }

    /// Parse a language code or a browser locale (`en-US`, `es_419`)
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "fr" => Some(Lang::Fr),
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    /// First supported language in a browser preference list, else the fallback
    pub fn detect<'a>(preferred: impl IntoIterator<Item = &'a str>) -> Self {
        preferred
            .into_iter()
            .find_map(Lang::from_code)
            .unwrap_or(FALLBACK_LANG)
    }

    /// Next language in the toggle cycle
    pub fn next(self) -> Self {
        match self {
            Lang::Fr => Lang::En,
            Lang::En => Lang::Es,
            Lang::Es => Lang::Fr,
        }
    }
}

const FR: &[(&str, &str)] = &[
    ("site.name", "Galerie Lumière"),
    ("site.tagline", "Art contemporain & création émergente"),
    ("nav.home", "Accueil"),
    ("nav.expositions", "Expositions"),
    ("nav.evenements", "Événements"),
    ("nav.artistes", "Artistes"),
    ("nav.contact", "Contact"),
    ("nav.menu", "Menu"),
    ("lang.toggle", "Changer de langue"),
    ("common.loading", "Chargement..."),
    ("common.back", "Retour"),
    ("common.see_details", "Voir le détail"),
    ("common.read_more", "Lire la suite"),
    ("common.no_results", "Aucun résultat."),
    ("common.error_loading", "Le contenu n'a pas pu être chargé."),
    ("home.hero_title", "Bienvenue à la galerie"),
    ("home.hero_subtitle", "Découvrez nos expositions, nos artistes et nos événements."),
    ("home.current_expositions", "Expositions en cours"),
    ("home.discover", "Découvrir"),
    ("expositions.title", "Expositions"),
    ("expositions.current", "En cours"),
    ("expositions.upcoming", "À venir"),
    ("expositions.past", "Passées"),
    ("expositions.empty", "Aucune exposition pour le moment."),
    ("expositions.virtual_tour", "Visite virtuelle"),
    ("expositions.principal", "Exposition principale"),
    ("evenements.title", "Événements"),
    ("evenements.upcoming", "À venir"),
    ("evenements.past", "Passés"),
    ("evenements.empty", "Aucun événement pour le moment."),
    ("evenements.location", "Lieu"),
    ("evenements.website", "Site de l'événement"),
    ("evenements.not_found", "Événement introuvable"),
    ("evenements.back", "Retour aux événements"),
    ("evenements.artists", "Artistes présents"),
    ("evenements.oeuvres", "Œuvres présentées"),
    ("artistes.title", "Artistes"),
    ("artistes.search", "Rechercher un artiste..."),
    ("artistes.empty", "Aucun artiste ne correspond à votre recherche."),
    ("artistes.not_found", "Artiste introuvable"),
    ("artistes.back", "Retour aux artistes"),
    ("artistes.no_bio", "Aucune biographie disponible pour cet artiste."),
    ("artistes.no_photo", "Aucune photo disponible"),
    ("artistes.expositions", "Expositions"),
    ("artistes.no_expositions", "Cet artiste n'a encore participé à aucune exposition."),
    ("artistes.oeuvres", "Œuvres"),
    ("artistes.no_oeuvres", "Aucune œuvre n'est encore référencée."),
    ("artistes.show_all", "Voir toutes les œuvres"),
    ("artistes.show_less", "Voir moins"),
    ("artistes.country", "Pays"),
    ("oeuvre.not_found", "Œuvre introuvable"),
    ("oeuvre.back", "Retour aux artistes"),
    ("oeuvre.technique", "Technique"),
    ("oeuvre.dimensions", "Dimensions"),
    ("oeuvre.remarque", "Remarque"),
    ("oeuvre.available", "Disponible"),
    ("oeuvre.sold_out", "Épuisée"),
    ("oeuvre.artist", "Artiste"),
    ("oeuvre.exposition", "Exposition"),
    ("oeuvre.no_secondary", "Aucune autre vue de cette œuvre."),
    ("oeuvre.zoom_hint", "Cliquez sur l'image pour l'agrandir"),
    ("tour.title", "Visite virtuelle"),
    ("tour.unavailable", "La visite virtuelle n'est pas disponible pour cette exposition."),
    ("common.close", "Fermer"),
    ("medias.title", "Médias"),
    ("medias.empty", "Aucun média associé."),
    ("medias.open", "Ouvrir"),
    ("news.title", "Actualités"),
    ("news.empty", "Aucune actualité pour le moment."),
    ("news.loading_more", "Chargement des actualités..."),
    ("news.end", "Vous êtes à jour."),
    ("contact.title", "Contact"),
    ("contact.intro", "Une question, une visite de groupe, un projet ? Écrivez-nous."),
    ("contact.name", "Nom"),
    ("contact.email", "Courriel"),
    ("contact.message", "Message"),
    ("contact.send", "Envoyer"),
    ("contact.sent", "Merci, votre message a bien été préparé."),
    ("contact.address", "Adresse"),
    ("contact.phone", "Téléphone"),
    ("contact.hours", "Horaires"),
    ("contact.hours_value", "Du mardi au dimanche, 10h – 19h"),
    ("footer.rights", "Tous droits réservés."),
    ("footer.follow", "Suivez-nous"),
    ("notfound.title", "Page introuvable"),
    ("notfound.message", "La page demandée n'existe pas ou a été déplacée."),
    ("notfound.home", "Retour à l'accueil"),
    ("login.title", "Connexion"),
    ("login.message", "Votre session est terminée. Connectez-vous pour accéder à l'administration."),
    ("admin.title", "Administration"),
    ("admin.dashboard", "Tableau de bord"),
    ("admin.content", "Contenu"),
    ("admin.settings", "Paramètres"),
    ("admin.users", "Utilisateurs"),
    ("admin.logout", "Déconnexion"),
    ("admin.dark_mode", "Mode sombre"),
    ("admin.light_mode", "Mode clair"),
    ("admin.loading", "Chargement des données..."),
    ("admin.visitors", "Visiteurs"),
    ("admin.page_views", "Pages vues"),
    ("admin.avg_duration", "Durée moyenne"),
    ("admin.bounce_rate", "Taux de rebond"),
    ("admin.top_pages", "Pages les plus vues"),
    ("admin.traffic_sources", "Sources de trafic"),
    ("admin.recent_activity", "Activité récente"),
    ("admin.content_type", "Type de contenu"),
    ("admin.add", "Ajouter"),
    ("admin.edit", "Modifier"),
    ("admin.delete", "Supprimer"),
    ("admin.actions", "Actions"),
    ("admin.save", "Enregistrer"),
    ("admin.site_title", "Titre du site"),
    ("admin.contact_email", "Courriel de contact"),
    ("admin.default_language", "Langue par défaut"),
    ("admin.maintenance", "Mode maintenance"),
    ("admin.back_to_site", "Retour au site"),
    ("admin.name", "Nom"),
    ("admin.email", "Courriel"),
    ("admin.role", "Rôle"),
    ("admin.last_login", "Dernière connexion"),
    ("admin.daily_visitors", "Visiteurs par jour"),
];

const EN: &[(&str, &str)] = &[
    ("site.name", "Galerie Lumière"),
    ("site.tagline", "Contemporary art & emerging creation"),
    ("nav.home", "Home"),
    ("nav.expositions", "Exhibitions"),
    ("nav.evenements", "Events"),
    ("nav.artistes", "Artists"),
    ("nav.contact", "Contact"),
    ("nav.menu", "Menu"),
    ("lang.toggle", "Change language"),
    ("common.loading", "Loading..."),
    ("common.back", "Back"),
    ("common.see_details", "See details"),
    ("common.read_more", "Read more"),
    ("common.no_results", "No results."),
    ("common.error_loading", "The content could not be loaded."),
    ("home.hero_title", "Welcome to the gallery"),
    ("home.hero_subtitle", "Discover our exhibitions, artists and events."),
    ("home.current_expositions", "Current exhibitions"),
    ("home.discover", "Discover"),
    ("expositions.title", "Exhibitions"),
    ("expositions.current", "Current"),
    ("expositions.upcoming", "Upcoming"),
    ("expositions.past", "Past"),
    ("expositions.empty", "No exhibitions yet."),
    ("expositions.virtual_tour", "Virtual tour"),
    ("expositions.principal", "Main exhibition"),
    ("evenements.title", "Events"),
    ("evenements.upcoming", "Upcoming"),
    ("evenements.past", "Past"),
    ("evenements.empty", "No events yet."),
    ("evenements.location", "Location"),
    ("evenements.website", "Event website"),
    ("evenements.not_found", "Event not found"),
    ("evenements.back", "Back to events"),
    ("evenements.artists", "Featured artists"),
    ("evenements.oeuvres", "Featured artworks"),
    ("artistes.title", "Artists"),
    ("artistes.search", "Search an artist..."),
    ("artistes.empty", "No artist matches your search."),
    ("artistes.not_found", "Artist not found"),
    ("artistes.back", "Back to artists"),
    ("artistes.no_bio", "No biography available for this artist."),
    ("artistes.no_photo", "No photo available"),
    ("artistes.expositions", "Exhibitions"),
    ("artistes.no_expositions", "This artist has not taken part in any exhibition yet."),
    ("artistes.oeuvres", "Artworks"),
    ("artistes.no_oeuvres", "No artworks listed yet."),
    ("artistes.show_all", "Show all artworks"),
    ("artistes.show_less", "Show fewer"),
    ("artistes.country", "Country"),
    ("oeuvre.not_found", "Artwork not found"),
    ("oeuvre.back", "Back to artists"),
    ("oeuvre.technique", "Technique"),
    ("oeuvre.dimensions", "Dimensions"),
    ("oeuvre.remarque", "Note"),
    ("oeuvre.available", "Available"),
    ("oeuvre.sold_out", "Sold out"),
    ("oeuvre.artist", "Artist"),
    ("oeuvre.exposition", "Exhibition"),
    ("oeuvre.no_secondary", "No other views of this artwork."),
    ("oeuvre.zoom_hint", "Click the image to enlarge it"),
    ("tour.title", "Virtual tour"),
    ("tour.unavailable", "The virtual tour is not available for this exhibition."),
    ("common.close", "Close"),
    ("medias.title", "Media"),
    ("medias.empty", "No media attached."),
    ("medias.open", "Open"),
    ("news.title", "News"),
    ("news.empty", "No news yet."),
    ("news.loading_more", "Loading news..."),
    ("news.end", "You're all caught up."),
    ("contact.title", "Contact"),
    ("contact.intro", "A question, a group visit, a project? Write to us."),
    ("contact.name", "Name"),
    ("contact.email", "Email"),
    ("contact.message", "Message"),
    ("contact.send", "Send"),
    ("contact.sent", "Thank you, your message is ready."),
    ("contact.address", "Address"),
    ("contact.phone", "Phone"),
    ("contact.hours", "Opening hours"),
    ("contact.hours_value", "Tuesday to Sunday, 10am – 7pm"),
    ("footer.rights", "All rights reserved."),
    ("footer.follow", "Follow us"),
    ("notfound.title", "Page not found"),
    ("notfound.message", "The page you requested does not exist or has moved."),
    ("notfound.home", "Back to home"),
    ("login.title", "Sign in"),
    ("login.message", "Your session has ended. Sign in to access the back-office."),
    ("admin.title", "Back-office"),
    ("admin.dashboard", "Dashboard"),
    ("admin.content", "Content"),
    ("admin.settings", "Settings"),
    ("admin.users", "Users"),
    ("admin.logout", "Log out"),
    ("admin.dark_mode", "Dark mode"),
    ("admin.light_mode", "Light mode"),
    ("admin.loading", "Loading data..."),
    ("admin.visitors", "Visitors"),
    ("admin.page_views", "Page views"),
    ("admin.avg_duration", "Average duration"),
    ("admin.bounce_rate", "Bounce rate"),
    ("admin.top_pages", "Top pages"),
    ("admin.traffic_sources", "Traffic sources"),
    ("admin.recent_activity", "Recent activity"),
    ("admin.content_type", "Content type"),
    ("admin.add", "Add"),
    ("admin.edit", "Edit"),
    ("admin.delete", "Delete"),
    ("admin.actions", "Actions"),
    ("admin.save", "Save"),
    ("admin.site_title", "Site title"),
    ("admin.contact_email", "Contact email"),
    ("admin.default_language", "Default language"),
    ("admin.maintenance", "Maintenance mode"),
    ("admin.back_to_site", "Back to site"),
    ("admin.name", "Name"),
    ("admin.email", "Email"),
    ("admin.role", "Role"),
    ("admin.last_login", "Last login"),
    ("admin.daily_visitors", "Visitors per day"),
];

// The back-office is not translated to Spanish; those keys fall back to French.
const ES: &[(&str, &str)] = &[
    ("site.name", "Galerie Lumière"),
    ("site.tagline", "Arte contemporáneo y creación emergente"),
    ("nav.home", "Inicio"),
    ("nav.expositions", "Exposiciones"),
    ("nav.evenements", "Eventos"),
    ("nav.artistes", "Artistas"),
    ("nav.contact", "Contacto"),
    ("nav.menu", "Menú"),
    ("lang.toggle", "Cambiar idioma"),
    ("common.loading", "Cargando..."),
    ("common.back", "Volver"),
    ("common.see_details", "Ver detalles"),
    ("common.read_more", "Leer más"),
    ("common.no_results", "Sin resultados."),
    ("common.error_loading", "No se pudo cargar el contenido."),
    ("home.hero_title", "Bienvenidos a la galería"),
    ("home.hero_subtitle", "Descubra nuestras exposiciones, artistas y eventos."),
    ("home.current_expositions", "Exposiciones actuales"),
    ("home.discover", "Descubrir"),
    ("expositions.title", "Exposiciones"),
    ("expositions.current", "En curso"),
    ("expositions.upcoming", "Próximas"),
    ("expositions.past", "Pasadas"),
    ("expositions.empty", "Todavía no hay exposiciones."),
    ("expositions.virtual_tour", "Visita virtual"),
    ("expositions.principal", "Exposición principal"),
    ("evenements.title", "Eventos"),
    ("evenements.upcoming", "Próximos"),
    ("evenements.past", "Pasados"),
    ("evenements.empty", "Todavía no hay eventos."),
    ("evenements.location", "Lugar"),
    ("evenements.website", "Sitio del evento"),
    ("evenements.not_found", "Evento no encontrado"),
    ("evenements.back", "Volver a los eventos"),
    ("evenements.artists", "Artistas presentes"),
    ("evenements.oeuvres", "Obras presentadas"),
    ("artistes.title", "Artistas"),
    ("artistes.search", "Buscar un artista..."),
    ("artistes.empty", "Ningún artista coincide con su búsqueda."),
    ("artistes.not_found", "Artista no encontrado"),
    ("artistes.back", "Volver a los artistas"),
    ("artistes.no_bio", "No hay biografía disponible para este artista."),
    ("artistes.no_photo", "No hay foto disponible"),
    ("artistes.expositions", "Exposiciones"),
    ("artistes.no_expositions", "Este artista aún no ha participado en ninguna exposición."),
    ("artistes.oeuvres", "Obras"),
    ("artistes.no_oeuvres", "Todavía no hay obras registradas."),
    ("artistes.show_all", "Ver todas las obras"),
    ("artistes.show_less", "Ver menos"),
    ("artistes.country", "País"),
    ("oeuvre.not_found", "Obra no encontrada"),
    ("oeuvre.back", "Volver a los artistas"),
    ("oeuvre.technique", "Técnica"),
    ("oeuvre.dimensions", "Dimensiones"),
    ("oeuvre.remarque", "Observación"),
    ("oeuvre.available", "Disponible"),
    ("oeuvre.sold_out", "Agotada"),
    ("oeuvre.artist", "Artista"),
    ("oeuvre.exposition", "Exposición"),
    ("oeuvre.no_secondary", "No hay otras vistas de esta obra."),
    ("oeuvre.zoom_hint", "Haga clic en la imagen para ampliarla"),
    ("tour.title", "Visita virtual"),
    ("tour.unavailable", "La visita virtual no está disponible para esta exposición."),
    ("common.close", "Cerrar"),
    ("medias.title", "Medios"),
    ("medias.empty", "No hay medios asociados."),
    ("medias.open", "Abrir"),
    ("news.title", "Noticias"),
    ("news.empty", "Todavía no hay noticias."),
    ("news.loading_more", "Cargando noticias..."),
    ("news.end", "Está al día."),
    ("contact.title", "Contacto"),
    ("contact.intro", "¿Una pregunta, una visita en grupo, un proyecto? Escríbanos."),
    ("contact.name", "Nombre"),
    ("contact.email", "Correo electrónico"),
    ("contact.message", "Mensaje"),
    ("contact.send", "Enviar"),
    ("contact.sent", "Gracias, su mensaje está listo."),
    ("contact.address", "Dirección"),
    ("contact.phone", "Teléfono"),
    ("contact.hours", "Horario"),
    ("contact.hours_value", "De martes a domingo, 10h – 19h"),
    ("footer.rights", "Todos los derechos reservados."),
    ("footer.follow", "Síganos"),
    ("notfound.title", "Página no encontrada"),
    ("notfound.message", "La página solicitada no existe o ha sido movida."),
    ("notfound.home", "Volver al inicio"),
];

static TABLES: Lazy<HashMap<Lang, HashMap<&'static str, &'static str>>> = Lazy::new(|| {
    [(Lang::Fr, FR), (Lang::En, EN), (Lang::Es, ES)]
        .into_iter()
        .map(|(lang, entries)| (lang, entries.iter().copied().collect()))
        .collect()
});

/// Look up `key` in `lang`, falling back to French and then to the key
pub fn translate<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup(lang, key)
        .or_else(|| lookup(FALLBACK_LANG, key))
        .unwrap_or(key)
}

fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    TABLES.get(&lang).and_then(|table| table.get(key)).copied()
}

/// Whether `lang` defines `key` itself (without fallback)
pub fn has_key(lang: Lang, key: &str) -> bool {
    lookup(lang, key).is_some()
}

/// Keys defined in the fallback table but missing from `lang`, sorted
pub fn missing_keys(lang: Lang) -> Vec<&'static str> {
    let mut missing: Vec<&'static str> = FR
        .iter()
        .map(|(key, _)| *key)
        .filter(|key| !has_key(lang, key))
        .collect();
    missing.sort_unstable();
    missing
}

/// Keys present in `lang` but unknown to the fallback table (likely typos)
pub fn orphan_keys(lang: Lang) -> Vec<&'static str> {
    let table = match lang {
        Lang::Fr => FR,
        Lang::En => EN,
        Lang::Es => ES,
    };
    let mut orphans: Vec<&'static str> = table
        .iter()
        .map(|(key, _)| *key)
        .filter(|key| !has_key(FALLBACK_LANG, key))
        .collect();
    orphans.sort_unstable();
    orphans
}

/// Number of keys in the fallback table
pub fn key_count() -> usize {
    FR.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_direct() {
        assert_eq!(translate(Lang::En, "nav.artistes"), "Artists");
        assert_eq!(translate(Lang::Es, "nav.artistes"), "Artistas");
        assert_eq!(translate(Lang::Fr, "nav.artistes"), "Artistes");
    }

    #[test]
    fn test_translate_falls_back_to_french_then_key() {
        assert_eq!(translate(Lang::Es, "admin.users"), "Utilisateurs");
        assert_eq!(translate(Lang::En, "does.not.exist"), "does.not.exist");
    }

    #[test]
    fn test_lang_codes_are_document_languages() {
        // Used as the `lang` attribute of the document root
        let codes: Vec<&str> = Lang::ALL.into_iter().map(Lang::code).collect();
        assert_eq!(codes, vec!["fr", "en", "es"]);
        for lang in Lang::ALL {
            assert_eq!(Lang::detect([lang.code()]), lang);
        }
    }

    #[test]
    fn test_browser_language_detection() {
        assert_eq!(Lang::detect(["en-US", "fr"]), Lang::En);
        assert_eq!(Lang::detect(["de-DE", "es_419"]), Lang::Es);
        assert_eq!(Lang::detect(["de-DE"]), Lang::Fr);
        assert_eq!(Lang::detect(Vec::<&str>::new()), Lang::Fr);
    }

    #[test]
    fn test_toggle_cycles_through_all_languages() {
        let mut lang = Lang::Fr;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(lang);
            lang = lang.next();
        }
        assert_eq!(lang, Lang::Fr);
        assert_eq!(seen, Lang::ALL.to_vec());
    }

    #[test]
    fn test_tables_have_no_orphans_or_duplicates() {
        for lang in Lang::ALL {
            assert!(orphan_keys(lang).is_empty(), "{:?} has orphan keys", lang);
        }
        assert_eq!(TABLES[&Lang::Fr].len(), FR.len(), "duplicate French keys");
        assert!(missing_keys(Lang::En).is_empty());
        assert!(missing_keys(Lang::Es).iter().all(|key| key.starts_with("admin.") || key.starts_with("login.")));
    }
}
