//! Typed campaign content model.
//!
//! The `Default` impls together form the canonical default document: the
//! shape and fallback values the rest of the application was built for.
//! Stored documents are reconciled against it before they are trusted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::reconcile::reconcile;

/// Decodes array elements one by one, dropping the ones that do not
/// decode. The merge replaces arrays wholesale without validating their
/// elements, so a single malformed element must cost only itself, not
/// the fields around it.
fn lenient_elements<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect())
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One item in the mission section's gift basket list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketItem {
    pub name: String,
    /// Icon class name rendered by the frontend.
    pub icon: String,
}

/// One news post in the updates section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePost {
    pub id: i64,
    pub image: String,
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: i64,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
    pub background_image: String,
    /// `YYYY-MM-DDTHH:MM` local-datetime string the countdown targets.
    pub countdown_target_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionContent {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub basket_title: String,
    #[serde(deserialize_with = "lenient_elements")]
    pub items: Vec<BasketItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransparencyContent {
    pub title: String,
    pub subtitle: String,
    pub goal: f64,
    pub raised: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatesContent {
    pub title: String,
    pub subtitle: String,
    #[serde(deserialize_with = "lenient_elements")]
    pub posts: Vec<UpdatePost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryContent {
    pub title: String,
    pub subtitle: String,
    #[serde(deserialize_with = "lenient_elements")]
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonateContent {
    pub title: String,
    pub subtitle: String,
    pub heading: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub about: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub whatsapp_url: String,
    pub email: String,
}

/// The whole campaign page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignContent {
    pub donation_url: String,
    pub campaign_name: String,
    pub hero: HeroContent,
    pub mission: MissionContent,
    pub transparency: TransparencyContent,
    pub updates: UpdatesContent,
    pub gallery: GalleryContent,
    pub donate: DonateContent,
    pub footer: FooterContent,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            title: "Una Navidad para Todos".to_string(),
            subtitle: "Ayúdanos a llevar alegría, comida y regalos a las familias que más lo necesitan.".to_string(),
            cta: "Dona Ahora".to_string(),
            background_image: "/images/hero.jpg".to_string(),
            countdown_target_date: "2026-12-24T20:00".to_string(),
        }
    }
}

impl Default for MissionContent {
    fn default() -> Self {
        Self {
            title: "Nuestra Misión".to_string(),
            subtitle: "Cada donación cuenta".to_string(),
            description: "Reunimos fondos para entregar canastas navideñas y juguetes a familias de la comunidad. Tu aporte se convierte directamente en comida y sonrisas.".to_string(),
            basket_title: "¿Qué lleva cada canasta?".to_string(),
            items: vec![
                BasketItem { name: "Pan de pascua".to_string(), icon: "fa-bread-slice".to_string() },
                BasketItem { name: "Juguetes".to_string(), icon: "fa-gift".to_string() },
                BasketItem { name: "Alimentos no perecibles".to_string(), icon: "fa-box-open".to_string() },
            ],
        }
    }
}

impl Default for TransparencyContent {
    fn default() -> Self {
        Self {
            title: "Transparencia".to_string(),
            subtitle: "Así va la campaña".to_string(),
            goal: 5000.0,
            raised: 0.0,
        }
    }
}

impl Default for UpdatesContent {
    fn default() -> Self {
        Self {
            title: "Novedades".to_string(),
            subtitle: "Últimas noticias de la campaña".to_string(),
            posts: vec![UpdatePost {
                id: 1,
                image: "/images/updates/lanzamiento.jpg".to_string(),
                title: "¡Lanzamos la campaña!".to_string(),
                description: "Comenzamos la recolección de fondos para esta Navidad.".to_string(),
                date: "1 de diciembre".to_string(),
            }],
        }
    }
}

impl Default for GalleryContent {
    fn default() -> Self {
        Self {
            title: "Galería".to_string(),
            subtitle: "Momentos de campañas anteriores".to_string(),
            images: vec![GalleryImage {
                id: 1,
                src: "/images/gallery/entrega.jpg".to_string(),
                alt: "Entrega de canastas navideñas".to_string(),
            }],
        }
    }
}

impl Default for DonateContent {
    fn default() -> Self {
        Self {
            title: "Dona Aquí".to_string(),
            subtitle: "Tu ayuda llega directo a las familias".to_string(),
            heading: "Haz tu aporte de forma segura".to_string(),
        }
    }
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            about: "Mi Deseo de Navidad es una campaña comunitaria sin fines de lucro.".to_string(),
            facebook_url: "https://facebook.com/mideseodenavidad".to_string(),
            instagram_url: "https://instagram.com/mideseodenavidad".to_string(),
            whatsapp_url: "https://wa.me/56900000000".to_string(),
            email: "contacto@mideseodenavidad.org".to_string(),
        }
    }
}

impl Default for CampaignContent {
    fn default() -> Self {
        Self {
            donation_url: "https://example.org/donar".to_string(),
            campaign_name: "Mi Deseo de Navidad".to_string(),
            hero: HeroContent::default(),
            mission: MissionContent::default(),
            transparency: TransparencyContent::default(),
            updates: UpdatesContent::default(),
            gallery: GalleryContent::default(),
            donate: DonateContent::default(),
            footer: FooterContent::default(),
        }
    }
}

/// Serializes the canonical default document.
pub fn default_document() -> Value {
    // Serializing a plain struct tree cannot fail.
    serde_json::to_value(CampaignContent::default()).unwrap_or(Value::Null)
}

impl CampaignContent {
    /// Builds typed content from an arbitrary stored document.
    ///
    /// The document is first reconciled against the defaults, so missing,
    /// null, or wrong-kinded fields fall back field-by-field. Arrays are
    /// replaced wholesale by the merge without element validation; the
    /// decode stays equally local and drops only the elements that do
    /// not decode, so a bad gallery image never costs an unrelated
    /// field its value.
    pub fn from_stored(stored: &Value) -> Result<Self, ContentError> {
        let merged = reconcile(&default_document(), stored);
        Ok(serde_json::from_value(merged)?)
    }

    pub fn to_document(&self) -> Result<Value, ContentError> {
        Ok(serde_json::to_value(self)?)
    }
}
