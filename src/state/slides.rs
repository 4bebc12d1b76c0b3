//! The slide deck data model.
//!
//! A presentation is an ordered `Vec<Slide>`; the order is the
//! presentation order and index 0 is always shown first. Each slide is
//! one of six layouts, discriminated by the serialized `type` tag. The
//! tag strings and camelCase field names keep the JSON shape compatible
//! with decks saved by earlier versions of the app.

use serde::{Deserialize, Serialize};

/// A single slide in the deck.
///
/// Identifiers are unique within the deck and stable across edits; they
/// are the sole lookup key used by the edit controller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Slide {
    #[serde(rename = "COVER")]
    Cover(CoverSlide),
    #[serde(rename = "PHOTO_SHOWCASE")]
    PhotoShowcase(PhotoShowcaseSlide),
    #[serde(rename = "COLLAGE")]
    Collage(CollageSlide),
    #[serde(rename = "TIMELINE")]
    Timeline(TimelineSlide),
    #[serde(rename = "MULTI_PHOTO")]
    MultiPhoto(MultiPhotoSlide),
    #[serde(rename = "QUOTES")]
    Quotes(QuotesSlide),
}

impl Slide {
    /// Stable unique identifier of this slide.
    pub fn id(&self) -> &str {
        match self {
            Slide::Cover(s) => &s.id,
            Slide::PhotoShowcase(s) => &s.id,
            Slide::Collage(s) => &s.id,
            Slide::Timeline(s) => &s.id,
            Slide::MultiPhoto(s) => &s.id,
            Slide::Quotes(s) => &s.id,
        }
    }

    /// Variant name as rendered in exported source text.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Slide::Cover(_) => "Cover",
            Slide::PhotoShowcase(_) => "PhotoShowcase",
            Slide::Collage(_) => "Collage",
            Slide::Timeline(_) => "Timeline",
            Slide::MultiPhoto(_) => "MultiPhoto",
            Slide::Quotes(_) => "Quotes",
        }
    }
}

/// Opening slide: name, year range and taglines, no photos.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoverSlide {
    pub id: String,
    pub name: String,
    pub years: String,
    pub subtitle: String,
    pub tagline: String,
}

/// Full-bleed single photo with caption labels.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhotoShowcaseSlide {
    pub id: String,
    pub image: String,
    pub decade: String,
    pub year: String,
    pub location: String,
    pub description: String,
    /// Crop anchor as a two-token percentage string ("X% Y%").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Zoom percentage; 100 = fit, no zoom.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

/// One tilted photo card inside a collage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CollageImage {
    pub src: String,
    pub label: String,
    pub sublabel: String,
    /// Card tilt in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

/// A label/value pair shown in the collage footer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Scattered photo cards plus a row of stats.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CollageSlide {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub images: Vec<CollageImage>,
    pub stats: Vec<Stat>,
}

/// One dated entry on a timeline slide.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub year: String,
    pub image: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimelineSlide {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub events: Vec<TimelineEvent>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MultiPhotoImage {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

/// Dense grid of photos with a shared title.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MultiPhotoSlide {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub images: Vec<MultiPhotoImage>,
}

/// Fixed corner placements available to a quote card.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// A dedication from family or friends, pinned to one corner.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quote {
    pub author: String,
    pub relation: String,
    pub text: String,
    pub position: QuoteCorner,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A small photo bubble floating over the quotes slide.
///
/// `x`/`y` are absolute percentages of the slide area, `size` is the
/// bubble diameter in pixels. At most one bubble per slide may carry
/// the `cyclic` marker; that bubble is the one consumed by the finale
/// animation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FloatingImage {
    pub src: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cyclic: Option<bool>,
}

/// Central portrait surrounded by corner quotes and floating bubbles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuotesSlide {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub central_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    pub quotes: Vec<Quote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floating_images: Option<Vec<FloatingImage>>,
}

impl QuotesSlide {
    /// True when at most one floating bubble carries the cyclic marker.
    pub fn cyclic_marker_is_unique(&self) -> bool {
        let count = self
            .floating_images
            .iter()
            .flatten()
            .filter(|b| b.cyclic == Some(true))
            .count();
        count <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quotes_slide() -> QuotesSlide {
        QuotesSlide {
            id: "quotes-family".into(),
            title: "COM AMOR".into(),
            subtitle: "Família e Amigos".into(),
            central_image: "/img/47.jpeg".into(),
            position: None,
            scale: None,
            quotes: vec![Quote {
                author: "O Filho".into(),
                relation: "FAMÍLIA".into(),
                text: "Te amamos!".into(),
                position: QuoteCorner::TopLeft,
                image: None,
            }],
            floating_images: Some(vec![
                FloatingImage {
                    src: "/img/30.jpg".into(),
                    x: 22.8,
                    y: 39.1,
                    size: 100.0,
                    cyclic: Some(true),
                },
                FloatingImage {
                    src: "/img/8.jpeg".into(),
                    x: 20.0,
                    y: 70.0,
                    size: 120.0,
                    cyclic: None,
                },
            ]),
        }
    }

    #[test]
    fn tag_strings_match_the_original_deck_format() {
        let slide = Slide::Cover(CoverSlide {
            id: "intro".into(),
            name: "Maura Magalhães".into(),
            years: "1936 — 2026".into(),
            subtitle: "90 Anos".into(),
            tagline: "Uma jornada de amor.".into(),
        });
        let json = serde_json::to_value(&slide).unwrap();
        assert_eq!(json["type"], "COVER");
        assert_eq!(json["id"], "intro");
    }

    #[test]
    fn quotes_slide_round_trips_with_camel_case_fields() {
        let slide = Slide::Quotes(sample_quotes_slide());
        let json = serde_json::to_string(&slide).unwrap();
        assert!(json.contains("\"centralImage\""));
        assert!(json.contains("\"floatingImages\""));
        assert!(json.contains("\"top-left\""));

        let restored: Slide = serde_json::from_str(&json).unwrap();
        assert_eq!(slide, restored);
    }

    #[test]
    fn absent_optionals_are_omitted_from_json() {
        let slide = Slide::PhotoShowcase(PhotoShowcaseSlide {
            id: "showcase-0".into(),
            image: "/img/30.jpg".into(),
            decade: "Maura".into(),
            year: "90 anos".into(),
            location: String::new(),
            description: String::new(),
            position: None,
            scale: None,
        });
        let json = serde_json::to_string(&slide).unwrap();
        assert!(!json.contains("position"));
        assert!(!json.contains("scale"));
    }

    #[test]
    fn deck_saved_by_the_web_version_still_parses() {
        let json = r#"{
            "id": "showcase-0",
            "type": "PHOTO_SHOWCASE",
            "decade": "Maura",
            "year": "90 anos",
            "location": "Celebrando a Vida",
            "image": "/img/30.jpg",
            "description": "Cada imagem conta uma história.",
            "position": "70% 100%",
            "scale": 160
        }"#;
        let slide: Slide = serde_json::from_str(json).unwrap();
        match slide {
            Slide::PhotoShowcase(s) => {
                assert_eq!(s.position.as_deref(), Some("70% 100%"));
                assert_eq!(s.scale, Some(160.0));
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn cyclic_marker_uniqueness_check() {
        let mut slide = sample_quotes_slide();
        assert!(slide.cyclic_marker_is_unique());

        if let Some(bubbles) = slide.floating_images.as_mut() {
            bubbles[1].cyclic = Some(true);
        }
        assert!(!slide.cyclic_marker_is_unique());
    }
}
