//! Turns the current deck back into loadable Rust source text.
//!
//! The output is a drop-in replacement for `src/state/defaults.rs`:
//! named imports, the gallery-scan note, and one `default_slides`
//! function with every slide written as a literal, variant tags
//! rendered symbolically. The app never writes the file itself; the
//! text is shown in a modal for manual copy-and-paste, which keeps the
//! source of truth a deliberate human step beyond the auto-save.

use std::fmt::Write as _;

use crate::state::slides::*;

const HEADER: &str = "\
//! The built-in deck the app seeds from when no saved deck exists.
//!
//! Generated by the in-app editor. Paste this over
//! `src/state/defaults.rs` to make the edited deck the shipped one.
//! Image sources are `/img/<file>` paths; the gallery itself is
//! re-derived at startup by `assets::AssetLibrary::scan`, which walks
//! the image directory and keeps png/jpg/jpeg/svg files, so a new
//! photo only needs to be dropped into that directory.

use super::slides::*;

/// Ordered default deck covering every layout.
pub fn default_slides() -> Vec<Slide> {
    vec![
";

const FOOTER: &str = "    ]
}
";

/// Render the whole deck as a Rust module.
pub fn generate(slides: &[Slide]) -> String {
    let mut out = String::from(HEADER);
    for slide in slides {
        write_slide(&mut out, slide);
    }
    out.push_str(FOOTER);
    out
}

fn write_slide(out: &mut String, slide: &Slide) {
    match slide {
        Slide::Cover(s) => {
            line(out, 2, "Slide::Cover(CoverSlide {");
            str_field(out, 3, "id", &s.id);
            str_field(out, 3, "name", &s.name);
            str_field(out, 3, "years", &s.years);
            str_field(out, 3, "subtitle", &s.subtitle);
            str_field(out, 3, "tagline", &s.tagline);
            line(out, 2, "}),");
        }
        Slide::PhotoShowcase(s) => {
            line(out, 2, "Slide::PhotoShowcase(PhotoShowcaseSlide {");
            str_field(out, 3, "id", &s.id);
            str_field(out, 3, "image", &s.image);
            str_field(out, 3, "decade", &s.decade);
            str_field(out, 3, "year", &s.year);
            str_field(out, 3, "location", &s.location);
            str_field(out, 3, "description", &s.description);
            anchor_fields(out, 3, &s.position, &s.scale);
            line(out, 2, "}),");
        }
        Slide::Collage(s) => {
            line(out, 2, "Slide::Collage(CollageSlide {");
            str_field(out, 3, "id", &s.id);
            str_field(out, 3, "title", &s.title);
            str_field(out, 3, "subtitle", &s.subtitle);
            line(out, 3, "images: vec![");
            for image in &s.images {
                line(out, 4, "CollageImage {");
                str_field(out, 5, "src", &image.src);
                str_field(out, 5, "label", &image.label);
                str_field(out, 5, "sublabel", &image.sublabel);
                opt_f32_field(out, 5, "rotation", &image.rotation);
                opt_bool_field(out, 5, "highlight", &image.highlight);
                anchor_fields(out, 5, &image.position, &image.scale);
                line(out, 4, "},");
            }
            line(out, 3, "],");
            line(out, 3, "stats: vec![");
            for stat in &s.stats {
                line(
                    out,
                    4,
                    &format!(
                        "Stat {{ label: {:?}.into(), value: {:?}.into() }},",
                        stat.label, stat.value
                    ),
                );
            }
            line(out, 3, "],");
            line(out, 2, "}),");
        }
        Slide::Timeline(s) => {
            line(out, 2, "Slide::Timeline(TimelineSlide {");
            str_field(out, 3, "id", &s.id);
            str_field(out, 3, "title", &s.title);
            str_field(out, 3, "subtitle", &s.subtitle);
            line(out, 3, "events: vec![");
            for event in &s.events {
                line(out, 4, "TimelineEvent {");
                str_field(out, 5, "year", &event.year);
                str_field(out, 5, "image", &event.image);
                str_field(out, 5, "description", &event.description);
                anchor_fields(out, 5, &event.position, &event.scale);
                line(out, 4, "},");
            }
            line(out, 3, "],");
            line(out, 2, "}),");
        }
        Slide::MultiPhoto(s) => {
            line(out, 2, "Slide::MultiPhoto(MultiPhotoSlide {");
            str_field(out, 3, "id", &s.id);
            str_field(out, 3, "title", &s.title);
            str_field(out, 3, "subtitle", &s.subtitle);
            line(out, 3, "images: vec![");
            for image in &s.images {
                line(out, 4, "MultiPhotoImage {");
                str_field(out, 5, "src", &image.src);
                anchor_fields(out, 5, &image.position, &image.scale);
                line(out, 4, "},");
            }
            line(out, 3, "],");
            line(out, 2, "}),");
        }
        Slide::Quotes(s) => {
            line(out, 2, "Slide::Quotes(QuotesSlide {");
            str_field(out, 3, "id", &s.id);
            str_field(out, 3, "title", &s.title);
            str_field(out, 3, "subtitle", &s.subtitle);
            str_field(out, 3, "central_image", &s.central_image);
            anchor_fields(out, 3, &s.position, &s.scale);
            line(out, 3, "quotes: vec![");
            for quote in &s.quotes {
                line(out, 4, "Quote {");
                str_field(out, 5, "author", &quote.author);
                str_field(out, 5, "relation", &quote.relation);
                str_field(out, 5, "text", &quote.text);
                line(
                    out,
                    5,
                    &format!("position: QuoteCorner::{},", corner_name(quote.position)),
                );
                opt_str_field(out, 5, "image", &quote.image);
                line(out, 4, "},");
            }
            line(out, 3, "],");
            match &s.floating_images {
                Some(bubbles) => {
                    line(out, 3, "floating_images: Some(vec![");
                    for bubble in bubbles {
                        let cyclic = match bubble.cyclic {
                            Some(flag) => format!("Some({flag})"),
                            None => "None".to_string(),
                        };
                        line(
                            out,
                            4,
                            &format!(
                                "FloatingImage {{ src: {:?}.into(), x: {:?}, y: {:?}, size: {:?}, cyclic: {} }},",
                                bubble.src, bubble.x, bubble.y, bubble.size, cyclic
                            ),
                        );
                    }
                    line(out, 3, "]),");
                }
                None => line(out, 3, "floating_images: None,"),
            }
            line(out, 2, "}),");
        }
    }
}

fn corner_name(corner: QuoteCorner) -> &'static str {
    match corner {
        QuoteCorner::TopLeft => "TopLeft",
        QuoteCorner::TopRight => "TopRight",
        QuoteCorner::BottomLeft => "BottomLeft",
        QuoteCorner::BottomRight => "BottomRight",
    }
}

fn line(out: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        out.push_str("    ");
    }
    out.push_str(text);
    out.push('\n');
}

fn str_field(out: &mut String, indent: usize, name: &str, value: &str) {
    let mut text = String::new();
    let _ = write!(text, "{name}: {value:?}.into(),");
    line(out, indent, &text);
}

fn opt_str_field(out: &mut String, indent: usize, name: &str, value: &Option<String>) {
    let text = match value {
        Some(v) => format!("{name}: Some({v:?}.into()),"),
        None => format!("{name}: None,"),
    };
    line(out, indent, &text);
}

fn opt_f32_field(out: &mut String, indent: usize, name: &str, value: &Option<f32>) {
    let text = match value {
        Some(v) => format!("{name}: Some({v:?}),"),
        None => format!("{name}: None,"),
    };
    line(out, indent, &text);
}

fn opt_bool_field(out: &mut String, indent: usize, name: &str, value: &Option<bool>) {
    let text = match value {
        Some(v) => format!("{name}: Some({v}),"),
        None => format!("{name}: None,"),
    };
    line(out, indent, &text);
}

fn anchor_fields(out: &mut String, indent: usize, position: &Option<String>, scale: &Option<f32>) {
    opt_str_field(out, indent, "position", position);
    opt_f32_field(out, indent, "scale", scale);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::deck::{Deck, ImageAddress};
    use crate::state::defaults::default_slides;

    #[test]
    fn variant_tags_are_rendered_symbolically() {
        let code = generate(&default_slides());
        for tag in [
            "Slide::Cover(",
            "Slide::PhotoShowcase(",
            "Slide::Collage(",
            "Slide::Timeline(",
            "Slide::MultiPhoto(",
            "Slide::Quotes(",
        ] {
            assert!(code.contains(tag), "missing {tag}");
        }
        // Raw discriminant strings never leak into the export.
        assert!(!code.contains("PHOTO_SHOWCASE"));
        assert!(!code.contains("\"type\""));
    }

    #[test]
    fn export_carries_imports_and_the_asset_helper_note() {
        let code = generate(&default_slides());
        assert!(code.starts_with("//!"));
        assert!(code.contains("use super::slides::*;"));
        assert!(code.contains("AssetLibrary::scan"));
        assert!(code.contains("pub fn default_slides() -> Vec<Slide> {"));
    }

    #[test]
    fn corner_placements_and_bubbles_survive_the_round_trip_textually() {
        let code = generate(&default_slides());
        assert!(code.contains("QuoteCorner::TopLeft"));
        assert!(code.contains("QuoteCorner::BottomRight"));
        assert!(code.contains("cyclic: Some(true)"));
    }

    #[test]
    fn editing_one_collage_entry_changes_exactly_one_exported_line() {
        let baseline = generate(&default_slides());

        let mut deck = Deck::in_memory(default_slides());
        assert!(deck.replace_image("collage-2", ImageAddress::Entry(1), "/img/new-photo.jpg"));
        let edited = generate(deck.slides());

        let old_lines: Vec<&str> = baseline.lines().collect();
        let new_lines: Vec<&str> = edited.lines().collect();
        assert_eq!(old_lines.len(), new_lines.len());

        let diffs: Vec<(usize, &str, &str)> = old_lines
            .iter()
            .zip(&new_lines)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, (a, b))| (i, *a, *b))
            .collect();

        assert_eq!(diffs.len(), 1, "expected exactly one changed line");
        let (_, old_line, new_line) = diffs[0];
        assert!(old_line.contains("/img/1.jpeg"));
        assert!(new_line.contains("/img/new-photo.jpg"));
        assert!(new_line.trim_start().starts_with("src:"));
    }
}
