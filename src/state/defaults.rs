//! The built-in deck the app seeds from when no saved deck exists.
//!
//! Image sources are paths under the asset image directory, exactly as
//! the picker and the exporter produce them.

use super::slides::*;

/// Ordered default deck covering every layout.
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::Cover(CoverSlide {
            id: "intro".into(),
            name: "Maura Magalhães".into(),
            years: "1936 — 2026".into(),
            subtitle: "90 Anos".into(),
            tagline: "Uma jornada de amor, luta e sabedoria.".into(),
        }),
        Slide::PhotoShowcase(PhotoShowcaseSlide {
            id: "showcase-0".into(),
            image: "/img/30.jpg".into(),
            decade: "Maura".into(),
            year: "90 anos".into(),
            location: "Celebrando a Vida".into(),
            description: "Cada imagem conta uma história de alegria e superação.".into(),
            position: Some("70% 100%".into()),
            scale: Some(160.0),
        }),
        Slide::Collage(CollageSlide {
            id: "collage-2".into(),
            title: "Fragmentos de Felicidade".into(),
            subtitle: "Sorrisos que iluminam".into(),
            images: vec![
                CollageImage {
                    src: "/img/4.jpeg".into(),
                    label: "Momento Especial".into(),
                    sublabel: "Inesquecível".into(),
                    rotation: Some(-2.0),
                    highlight: None,
                    position: Some("30% 30%".into()),
                    scale: Some(210.0),
                },
                CollageImage {
                    src: "/img/1.jpeg".into(),
                    label: "Alegria".into(),
                    sublabel: "Eterna".into(),
                    rotation: Some(2.0),
                    highlight: Some(true),
                    position: Some("50% 5%".into()),
                    scale: Some(110.0),
                },
                CollageImage {
                    src: "/img/39.jpg".into(),
                    label: "Amor".into(),
                    sublabel: "Família".into(),
                    rotation: Some(-1.0),
                    highlight: None,
                    position: None,
                    scale: None,
                },
            ],
            stats: vec![
                Stat { label: "Capítulo".into(), value: "3".into() },
                Stat { label: "Ano".into(), value: "2026".into() },
            ],
        }),
        Slide::Timeline(TimelineSlide {
            id: "timeline-decadas".into(),
            title: "Linha do Tempo".into(),
            subtitle: "Nove décadas de história".into(),
            events: vec![
                TimelineEvent {
                    year: "1936".into(),
                    image: "/img/8.jpeg".into(),
                    description: "O começo de tudo, em Goiânia.".into(),
                    position: Some("40% 50%".into()),
                    scale: None,
                },
                TimelineEvent {
                    year: "1960".into(),
                    image: "/img/2.jpeg".into(),
                    description: "Mãe Etelvina e as queridas irmãs.".into(),
                    position: Some("55% 30%".into()),
                    scale: Some(180.0),
                },
                TimelineEvent {
                    year: "2026".into(),
                    image: "/img/20.jpeg".into(),
                    description: "Filho e bisneta, quatro gerações.".into(),
                    position: None,
                    scale: None,
                },
            ],
        }),
        Slide::MultiPhoto(MultiPhotoSlide {
            id: "multi-34".into(),
            title: "MAIS MOMENTOS FELIZES".into(),
            subtitle: "Celebrando cada sorriso.".into(),
            images: vec![
                MultiPhotoImage { src: "/img/30.jpg".into(), position: None, scale: None },
                MultiPhotoImage { src: "/img/8.jpeg".into(), position: None, scale: None },
                MultiPhotoImage { src: "/img/4.jpeg".into(), position: None, scale: None },
                MultiPhotoImage { src: "/img/1.jpeg".into(), position: None, scale: None },
                MultiPhotoImage { src: "/img/7.jpeg".into(), position: None, scale: None },
                MultiPhotoImage { src: "/img/2.jpeg".into(), position: None, scale: None },
                MultiPhotoImage { src: "/img/20.jpeg".into(), position: None, scale: None },
                MultiPhotoImage { src: "/img/33.jpeg".into(), position: None, scale: None },
            ],
        }),
        Slide::Quotes(QuotesSlide {
            id: "quotes-family".into(),
            title: "COM AMOR".into(),
            subtitle: "Família e Amigos".into(),
            central_image: "/img/47.jpeg".into(),
            position: None,
            scale: None,
            quotes: vec![
                Quote {
                    author: "O Filho, Netos e Bisnetos".into(),
                    relation: "FAMÍLIA".into(),
                    text: "Sua vida é nossa maior inspiração. Te amamos!".into(),
                    position: QuoteCorner::TopLeft,
                    image: None,
                },
                Quote {
                    author: "Amigos Queridos".into(),
                    relation: "AMIGOS".into(),
                    text: "90 anos de uma vida extraordinária! Com todo o nosso amor e admiração.".into(),
                    position: QuoteCorner::BottomRight,
                    image: None,
                },
            ],
            floating_images: Some(vec![
                FloatingImage { src: "/img/30.jpg".into(), x: 22.8, y: 39.1, size: 100.0, cyclic: Some(true) },
                FloatingImage { src: "/img/8.jpeg".into(), x: 20.0, y: 70.0, size: 120.0, cyclic: None },
                FloatingImage { src: "/img/4.jpeg".into(), x: 91.8, y: 15.9, size: 90.0, cyclic: None },
                FloatingImage { src: "/img/16.jpeg".into(), x: 66.8, y: 0.0, size: 130.0, cyclic: None },
                FloatingImage { src: "/img/17.jpeg".into(), x: 40.0, y: 85.0, size: 95.0, cyclic: None },
            ]),
        }),
        Slide::PhotoShowcase(PhotoShowcaseSlide {
            id: "timeline-29".into(),
            image: "/img/28.jpeg".into(),
            decade: "Feliz".into(),
            year: String::new(),
            location: "Obrigada".into(),
            description: String::new(),
            position: Some("60% 90%".into()),
            scale: Some(150.0),
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let deck = default_slides();
        for (i, a) in deck.iter().enumerate() {
            for b in deck.iter().skip(i + 1) {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn every_layout_is_represented() {
        let deck = default_slides();
        for name in ["Cover", "PhotoShowcase", "Collage", "Timeline", "MultiPhoto", "Quotes"] {
            assert!(
                deck.iter().any(|s| s.variant_name() == name),
                "missing layout {name}"
            );
        }
    }

    #[test]
    fn cyclic_markers_are_unique_per_slide() {
        for slide in default_slides() {
            if let Slide::Quotes(q) = slide {
                assert!(q.cyclic_marker_is_unique());
            }
        }
    }
}
