//! Back-office navigation and the placeholder datasets it displays
//!
//! Analytics and content tables are synthetic: they stand in for endpoints
//! the backend does not expose yet. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Simulated latency before mock data is shown
pub const MOCK_LATENCY_MS: u64 = 600;

/// Back-office tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Dashboard,
    Content,
    Settings,
    Users,
}

impl AdminTab {
    pub fn i18n_key(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "admin.dashboard",
            AdminTab::Content => "admin.content",
            AdminTab::Settings => "admin.settings",
            AdminTab::Users => "admin.users",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "📊",
            AdminTab::Content => "🖼️",
            AdminTab::Settings => "⚙️",
            AdminTab::Users => "👥",
        }
    }
}

/// A sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLink {
    pub tab: AdminTab,
    pub label_key: &'static str,
    pub icon: &'static str,
}

impl SidebarLink {
    fn for_tab(tab: AdminTab) -> Self {
        Self {
            tab,
            label_key: tab.i18n_key(),
            icon: tab.icon(),
        }
    }
}

/// Sidebar links visible to `role`
///
/// "Utilisateurs" is appended last, and only for super-admins.
pub fn sidebar_links(role: Role) -> Vec<SidebarLink> {
    let mut links = vec![
        SidebarLink::for_tab(AdminTab::Dashboard),
        SidebarLink::for_tab(AdminTab::Content),
        SidebarLink::for_tab(AdminTab::Settings),
    ];
    if role.is_super_admin() {
        links.push(SidebarLink::for_tab(AdminTab::Users));
    }
    links
}

/// Tab to display for a requested tab, given the role
///
/// Non-super-admins asking for the users tab land on the dashboard.
pub fn effective_tab(requested: AdminTab, role: Role) -> AdminTab {
    if requested == AdminTab::Users && !role.is_super_admin() {
        AdminTab::Dashboard
    } else {
        requested
    }
}

/// Kinds of content managed from the content tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Exhibitions,
    Artists,
    Events,
    Pages,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Exhibitions,
        ContentType::Artists,
        ContentType::Events,
        ContentType::Pages,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ContentType::Exhibitions => "exhibitions",
            ContentType::Artists => "artists",
            ContentType::Events => "events",
            ContentType::Pages => "pages",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        ContentType::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Exhibitions => "Expositions",
            ContentType::Artists => "Artistes",
            ContentType::Events => "Événements",
            ContentType::Pages => "Pages",
        }
    }

    /// Column headers of this content type's table (actions column excluded)
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ContentType::Exhibitions => &["Titre", "Artiste principal", "Début", "Fin", "Statut"],
            ContentType::Artists => &["Nom", "Pays", "Œuvres", "Expositions"],
            ContentType::Events => &["Titre", "Date", "Lieu", "Inscrits"],
            ContentType::Pages => &["Titre", "Slug", "Dernière modification", "Publiée"],
        }
    }

    /// Placeholder rows, one cell per column
    pub fn mock_rows(self) -> Vec<ContentRow> {
        let rows: Vec<(u64, Vec<&str>)> = match self {
            ContentType::Exhibitions => vec![
                (1, vec!["Lumières du Nord", "Inès Moreau", "2024-03-01", "2024-05-30", "En cours"]),
                (2, vec!["Matières premières", "Jon Berg", "2024-06-12", "2024-09-01", "À venir"]),
                (3, vec!["Le Temps suspendu", "Aiko Tanaka", "2023-10-05", "2024-01-14", "Terminée"]),
            ],
            ContentType::Artists => vec![
                (1, vec!["Inès Moreau", "France", "24", "3"]),
                (2, vec!["Jon Berg", "Norvège", "11", "1"]),
                (3, vec!["Aiko Tanaka", "Japon", "37", "5"]),
                (4, vec!["Lucía Ferrer", "Espagne", "8", "2"]),
            ],
            ContentType::Events => vec![
                (1, vec!["Vernissage printemps", "2024-03-01", "Salle principale", "120"]),
                (2, vec!["Atelier gravure", "2024-04-13", "Atelier", "18"]),
                (3, vec!["Nocturne des galeries", "2024-05-18", "Quartier des arts", "340"]),
            ],
            ContentType::Pages => vec![
                (1, vec!["Accueil", "/", "2024-02-20", "Oui"]),
                (2, vec!["La galerie", "/a-propos", "2023-11-02", "Oui"]),
                (3, vec!["Mentions légales", "/mentions-legales", "2023-06-30", "Non"]),
            ],
        };

        rows.into_iter()
            .map(|(id, cells)| ContentRow {
                id,
                cells: cells.iter().map(|cell| cell.to_string()).collect(),
            })
            .collect()
    }
}

/// One row of a content table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRow {
    pub id: u64,
    pub cells: Vec<String>,
}

/// Placeholder analytics for the dashboard tab
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub visitors: u64,
    pub page_views: u64,
    pub avg_session_secs: u64,
    pub bounce_rate: f64,
    /// Visitors per day, oldest first
    pub daily_visitors: Vec<u64>,
    pub top_pages: Vec<(String, u64)>,
    pub traffic_sources: Vec<(String, f64)>,
    pub recent_activity: Vec<String>,
}

impl DashboardStats {
    pub fn mock() -> Self {
        Self {
            visitors: 12_480,
            page_views: 48_215,
            avg_session_secs: 204,
            bounce_rate: 0.382,
            daily_visitors: vec![320, 410, 388, 502, 615, 580, 702, 655, 590, 610, 720, 810, 760, 698],
            top_pages: vec![
                ("/expositions".to_string(), 9_812),
                ("/artistes".to_string(), 7_344),
                ("/".to_string(), 6_990),
                ("/evenements".to_string(), 4_105),
                ("/contact".to_string(), 1_230),
            ],
            traffic_sources: vec![
                ("Recherche".to_string(), 0.46),
                ("Direct".to_string(), 0.27),
                ("Réseaux sociaux".to_string(), 0.19),
                ("Référents".to_string(), 0.08),
            ],
            recent_activity: vec![
                "Exposition « Lumières du Nord » mise à jour".to_string(),
                "Nouvel artiste : Lucía Ferrer".to_string(),
                "Événement « Atelier gravure » publié".to_string(),
                "Page « La galerie » modifiée".to_string(),
            ],
        }
    }

    /// Daily visitors scaled to 0..=100 for the bar chart
    pub fn normalized_daily(&self) -> Vec<u64> {
        let max = self.daily_visitors.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return vec![0; self.daily_visitors.len()];
        }
        self.daily_visitors.iter().map(|v| v * 100 / max).collect()
    }
}

/// Placeholder back-office account for the users tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub last_login: String,
}

pub fn mock_users() -> Vec<MockUser> {
    [
        (1, "Claire Dumas", "claire@galerie.example", Role::SuperAdmin, "2024-05-02"),
        (2, "Marc Lefèvre", "marc@galerie.example", Role::Admin, "2024-04-28"),
        (3, "Sofia Ruiz", "sofia@galerie.example", Role::Admin, "2024-04-11"),
        (4, "Accueil", "accueil@galerie.example", Role::User, "2024-03-30"),
    ]
    .into_iter()
    .map(|(id, name, email, role, last_login)| MockUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        last_login: last_login.to_string(),
    })
    .collect()
}

/// Format a duration in seconds as `3 min 24 s`
pub fn format_duration(secs: u64) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;
    if minutes > 0 {
        format!("{} min {} s", minutes, seconds)
    } else {
        format!("{} s", seconds)
    }
}

/// Format large numbers with thin-space thousands separators, French style
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(c);
    }
    out
}
