//! Media attachments (images, videos, documents) linked to other entities

use serde::{Deserialize, Serialize};

use super::payload::deserialize_id;

/// Kind of media, inferred from the API `type` field or the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Document,
    Link,
}

impl MediaKind {
    fn from_type_field(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "image" | "photo" | "img" => Some(MediaKind::Image),
            "video" | "vidéo" => Some(MediaKind::Video),
            "audio" | "son" => Some(MediaKind::Audio),
            "document" | "pdf" | "doc" => Some(MediaKind::Document),
            "lien" | "link" | "url" => Some(MediaKind::Link),
            _ => None,
        }
    }

    fn from_extension(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "avif" | "svg" => MediaKind::Image,
            "mp4" | "webm" | "mov" | "ogv" => MediaKind::Video,
            "mp3" | "ogg" | "wav" | "flac" => MediaKind::Audio,
            "pdf" | "doc" | "docx" | "odt" => MediaKind::Document,
            _ => MediaKind::Link,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: u64,
    #[serde(default, alias = "title", alias = "nom")]
    pub titre: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub fichier: Option<String>,
    #[serde(default, rename = "type")]
    pub type_media: Option<String>,
}

impl Media {
    /// Path or URL pointing at the media content
    pub fn source(&self) -> Option<&str> {
        self.url
            .as_deref()
            .or(self.fichier.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn kind(&self) -> MediaKind {
        self.type_media
            .as_deref()
            .and_then(MediaKind::from_type_field)
            .unwrap_or_else(|| MediaKind::from_extension(self.source().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_prefers_type_field() {
        let media: Media =
            serde_json::from_str(r#"{"id": 1, "url": "clip.jpg", "type": "video"}"#).unwrap();
        assert_eq!(media.kind(), MediaKind::Video);
    }

    #[test]
    fn test_kind_from_extension() {
        let media: Media = serde_json::from_str(r#"{"id": "2", "fichier": "media/plan.PDF"}"#).unwrap();
        assert_eq!(media.id, 2);
        assert_eq!(media.source(), Some("media/plan.PDF"));
        assert_eq!(media.kind(), MediaKind::Document);
    }

    #[test]
    fn test_blank_source_is_none() {
        let media = Media {
            url: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(media.source(), None);
        assert_eq!(media.kind(), MediaKind::Link);
    }
}
