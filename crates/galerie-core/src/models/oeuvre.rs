//! Œuvre (artwork) entity

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::media::Media;
use super::payload::{deserialize_id, null_as_default, Reference};
use crate::assets::{split_image_list, AssetResolver};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Oeuvre {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: u64,
    #[serde(default, alias = "title")]
    pub titre: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub remarque: Option<String>,
    #[serde(default, deserialize_with = "deserialize_stock")]
    pub stock: u32,
    #[serde(default)]
    pub image_principale: Option<String>,
    #[serde(default)]
    pub images_secondaires: Option<String>,
    #[serde(default)]
    pub artiste: Option<Reference>,
    #[serde(default)]
    pub exposition: Option<Reference>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medias: Vec<Media>,
}

/// Stock is clamped at zero; strings and floats are tolerated
fn deserialize_stock<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let raw = match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(raw.unwrap_or(0).clamp(0, u32::MAX as i64) as u32)
}

/// Availability derived from the stock counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available(u32),
    SoldOut,
}

impl Oeuvre {
    pub fn availability(&self) -> Availability {
        if self.stock == 0 {
            Availability::SoldOut
        } else {
            Availability::Available(self.stock)
        }
    }

    /// Resolved URL of the main image
    pub fn main_image(&self, resolver: &AssetResolver) -> Option<String> {
        self.image_principale
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(|path| resolver.resolve(path))
    }

    /// Resolved URLs of the secondary images, in declaration order
    pub fn secondary_images(&self, resolver: &AssetResolver) -> Vec<String> {
        self.images_secondaires
            .as_deref()
            .map(split_image_list)
            .unwrap_or_default()
            .iter()
            .map(|path| resolver.resolve(path))
            .collect()
    }

    /// Thumbnail strip: main image first, then secondary images without repeats
    pub fn thumbnails(&self, resolver: &AssetResolver) -> Vec<String> {
        let mut thumbs: Vec<String> = self.main_image(resolver).into_iter().collect();
        for url in self.secondary_images(resolver) {
            if !thumbs.contains(&url) {
                thumbs.push(url);
            }
        }
        thumbs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_is_lenient() {
        let negative: Oeuvre = serde_json::from_str(r#"{"id": 1, "stock": -3}"#).unwrap();
        assert_eq!(negative.stock, 0);
        assert_eq!(negative.availability(), Availability::SoldOut);

        let text: Oeuvre = serde_json::from_str(r#"{"id": 1, "stock": "4"}"#).unwrap();
        assert_eq!(text.availability(), Availability::Available(4));

        let missing: Oeuvre = serde_json::from_str(r#"{"id": 1, "stock": null}"#).unwrap();
        assert_eq!(missing.stock, 0);
    }

    #[test]
    fn test_thumbnails_deduplicate_main_image() {
        let resolver = AssetResolver::new("http://localhost:8000/");
        let oeuvre = Oeuvre {
            image_principale: Some("media/a.jpg".into()),
            images_secondaires: Some("media/a.jpg, media/b.jpg".into()),
            ..Default::default()
        };
        assert_eq!(
            oeuvre.thumbnails(&resolver),
            vec![
                "http://localhost:8000/media/a.jpg".to_string(),
                "http://localhost:8000/media/b.jpg".to_string(),
            ]
        );
    }
}
