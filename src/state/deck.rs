//! The edit controller: single owner of the slide collection.
//!
//! All mutations flow through [`Deck`]. Addressing that cannot be
//! resolved (unknown slide id, out-of-range index, wrong layout for the
//! address kind) is silently dropped: a stale edit reference must never
//! take down a running presentation. Every successful mutation writes
//! the whole deck back through the store.

use tracing::{debug, warn};

use super::placement;
use super::slides::Slide;
use super::store::SlideStore;

/// Offset the web version used to pack floating-bubble indices into the
/// same numeric space as quote indices.
pub const LEGACY_BUBBLE_BASE: u32 = 1000;

/// Which image inside a slide an edit targets.
///
/// Single-image slides (photo showcase, the quotes central portrait)
/// use `Whole`. List-valued slides use `Entry`; on a quotes slide an
/// `Entry` is a quote index. Floating bubbles get their own variant
/// instead of the old 1000-offset packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAddress {
    Whole,
    Entry(usize),
    Bubble(usize),
}

impl ImageAddress {
    /// Decode the numeric convention of decks exported by the web
    /// version: absent means the whole image, anything at or above
    /// [`LEGACY_BUBBLE_BASE`] is a bubble, the rest are entry indices.
    pub fn from_legacy(index: Option<u32>) -> Self {
        match index {
            None => ImageAddress::Whole,
            Some(n) if n >= LEGACY_BUBBLE_BASE => {
                ImageAddress::Bubble((n - LEGACY_BUBBLE_BASE) as usize)
            }
            Some(n) => ImageAddress::Entry(n as usize),
        }
    }
}

/// Partial placement change; absent fields leave the current value
/// untouched, never reset it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementUpdate {
    pub position: Option<String>,
    pub scale: Option<f32>,
    /// Absolute bubble coordinates, percentages of the slide area.
    pub x: Option<f32>,
    pub y: Option<f32>,
}

/// The image currently being edited, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct EditTarget {
    pub slide_id: String,
    pub address: ImageAddress,
}

/// Current placement of an addressed image, with editing defaults
/// filled in for absent fields.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// Crop anchor + zoom, for every layout except floating bubbles.
    Anchored { position: String, scale: f32 },
    /// Absolute coordinates + pixel diameter of a floating bubble.
    Bubble { x: f32, y: f32, size: f32 },
}

pub struct Deck {
    slides: Vec<Slide>,
    store: Option<SlideStore>,
    editing: Option<EditTarget>,
}

impl Deck {
    /// Deck seeded from the store if a current-version save exists,
    /// else from the built-in default.
    pub fn load_or_default(store: SlideStore) -> Self {
        let slides = store
            .load()
            .unwrap_or_else(super::defaults::default_slides);
        Self {
            slides,
            store: Some(store),
            editing: None,
        }
    }

    /// In-memory deck with no persistence. Used by tests and the
    /// autoplay entry point, which never mutates.
    pub fn in_memory(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            store: None,
            editing: None,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    fn position_of(&self, slide_id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id() == slide_id)
    }

    fn persist(&self) {
        if let Some(store) = &self.store {
            if let Err(err) = store.save(&self.slides) {
                // Losing the auto-save must not interrupt the show.
                warn!(%err, "deck auto-save failed");
            }
        }
    }

    // ----- picking session -------------------------------------------------

    pub fn editing(&self) -> Option<&EditTarget> {
        self.editing.as_ref()
    }

    /// Open a picking session for the addressed image. An already-open
    /// session is cancelled without applying anything.
    pub fn start_picking(&mut self, slide_id: &str, address: ImageAddress) {
        if let Some(prior) = self.editing.take() {
            debug!(slide = prior.slide_id, "picking session replaced");
        }
        self.editing = Some(EditTarget {
            slide_id: slide_id.to_string(),
            address,
        });
    }

    pub fn cancel_picking(&mut self) {
        self.editing = None;
    }

    /// Apply the picked source to the session target, then end the
    /// session. Returns whether the deck changed.
    pub fn commit_pick(&mut self, new_src: &str) -> bool {
        let Some(target) = self.editing.take() else {
            return false;
        };
        self.replace_image(&target.slide_id, target.address, new_src)
    }

    // ----- mutations -------------------------------------------------------

    /// Swap the addressed image source. No-op (returning `false`) when
    /// the address does not resolve.
    pub fn replace_image(&mut self, slide_id: &str, address: ImageAddress, new_src: &str) -> bool {
        let Some(index) = self.position_of(slide_id) else {
            return false;
        };

        // The slide is rebuilt and written back wholesale so consumers
        // comparing slide values see a single atomic change.
        let mut slide = self.slides[index].clone();
        let changed = match (&mut slide, address) {
            (Slide::PhotoShowcase(s), ImageAddress::Whole) => {
                s.image = new_src.to_string();
                true
            }
            (Slide::Timeline(s), ImageAddress::Entry(i)) => match s.events.get_mut(i) {
                Some(event) => {
                    event.image = new_src.to_string();
                    true
                }
                None => false,
            },
            (Slide::Collage(s), ImageAddress::Entry(i)) => match s.images.get_mut(i) {
                Some(entry) => {
                    entry.src = new_src.to_string();
                    true
                }
                None => false,
            },
            (Slide::MultiPhoto(s), ImageAddress::Entry(i)) => match s.images.get_mut(i) {
                Some(entry) => {
                    entry.src = new_src.to_string();
                    true
                }
                None => false,
            },
            (Slide::Quotes(s), ImageAddress::Whole) => {
                s.central_image = new_src.to_string();
                true
            }
            (Slide::Quotes(s), ImageAddress::Entry(i)) => match s.quotes.get_mut(i) {
                Some(quote) => {
                    quote.image = Some(new_src.to_string());
                    true
                }
                None => false,
            },
            (Slide::Quotes(s), ImageAddress::Bubble(i)) => {
                match s.floating_images.as_mut().and_then(|b| b.get_mut(i)) {
                    Some(bubble) => {
                        bubble.src = new_src.to_string();
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        };

        if changed {
            self.slides[index] = slide;
            self.persist();
        }
        changed
    }

    /// Merge a partial placement change into the addressed image.
    ///
    /// For floating bubbles, `x`/`y` set absolute coordinates and
    /// `scale` is reinterpreted as the pixel diameter. On a quotes
    /// slide every non-bubble address adjusts the central portrait,
    /// matching how the web version behaved.
    pub fn update_placement(
        &mut self,
        slide_id: &str,
        address: ImageAddress,
        update: PlacementUpdate,
    ) -> bool {
        let Some(index) = self.position_of(slide_id) else {
            return false;
        };

        let mut slide = self.slides[index].clone();
        let changed = match (&mut slide, address) {
            (Slide::PhotoShowcase(s), ImageAddress::Whole) => {
                merge_anchor(&mut s.position, &mut s.scale, &update)
            }
            (Slide::Timeline(s), ImageAddress::Entry(i)) => match s.events.get_mut(i) {
                Some(event) => merge_anchor(&mut event.position, &mut event.scale, &update),
                None => false,
            },
            (Slide::Collage(s), ImageAddress::Entry(i)) => match s.images.get_mut(i) {
                Some(entry) => merge_anchor(&mut entry.position, &mut entry.scale, &update),
                None => false,
            },
            (Slide::MultiPhoto(s), ImageAddress::Entry(i)) => match s.images.get_mut(i) {
                Some(entry) => merge_anchor(&mut entry.position, &mut entry.scale, &update),
                None => false,
            },
            (Slide::Quotes(s), ImageAddress::Bubble(i)) => {
                match s.floating_images.as_mut().and_then(|b| b.get_mut(i)) {
                    Some(bubble) => {
                        let mut touched = false;
                        if let Some(x) = update.x {
                            bubble.x = x;
                            touched = true;
                        }
                        if let Some(y) = update.y {
                            bubble.y = y;
                            touched = true;
                        }
                        if let Some(size) = update.scale {
                            bubble.size = size;
                            touched = true;
                        }
                        touched
                    }
                    None => false,
                }
            }
            (Slide::Quotes(s), ImageAddress::Whole | ImageAddress::Entry(_)) => {
                merge_anchor(&mut s.position, &mut s.scale, &update)
            }
            _ => false,
        };

        if changed {
            self.slides[index] = slide;
            self.persist();
        }
        changed
    }

    // ----- overlay conveniences --------------------------------------------

    /// Current placement of the addressed image, with editing defaults
    /// (centered, unzoomed) for fields that were never set.
    pub fn current_placement(&self, slide_id: &str, address: ImageAddress) -> Option<Placement> {
        let slide = self.slides.iter().find(|s| s.id() == slide_id)?;

        let anchored = |position: &Option<String>, scale: &Option<f32>| Placement::Anchored {
            position: position.clone().unwrap_or_else(|| "50% 50%".to_string()),
            scale: scale.unwrap_or(placement::MIN_SCALE),
        };

        match (slide, address) {
            (Slide::PhotoShowcase(s), ImageAddress::Whole) => Some(anchored(&s.position, &s.scale)),
            (Slide::Timeline(s), ImageAddress::Entry(i)) => {
                s.events.get(i).map(|e| anchored(&e.position, &e.scale))
            }
            (Slide::Collage(s), ImageAddress::Entry(i)) => {
                s.images.get(i).map(|e| anchored(&e.position, &e.scale))
            }
            (Slide::MultiPhoto(s), ImageAddress::Entry(i)) => {
                s.images.get(i).map(|e| anchored(&e.position, &e.scale))
            }
            (Slide::Quotes(s), ImageAddress::Bubble(i)) => s
                .floating_images
                .as_ref()
                .and_then(|b| b.get(i))
                .map(|b| Placement::Bubble {
                    x: b.x,
                    y: b.y,
                    size: b.size,
                }),
            (Slide::Quotes(s), ImageAddress::Whole | ImageAddress::Entry(_)) => {
                Some(anchored(&s.position, &s.scale))
            }
            _ => None,
        }
    }

    /// Overlay pan: one clamped step of the addressed image.
    pub fn pan_image(&mut self, slide_id: &str, address: ImageAddress, dx: f32, dy: f32) -> bool {
        match self.current_placement(slide_id, address) {
            Some(Placement::Anchored { position, .. }) => {
                let moved = placement::pan(&position, dx, dy);
                self.update_placement(
                    slide_id,
                    address,
                    PlacementUpdate {
                        position: Some(moved),
                        ..Default::default()
                    },
                )
            }
            Some(Placement::Bubble { x, y, .. }) => {
                let (nx, ny) = placement::pan_bubble(x, y, dx, dy);
                self.update_placement(
                    slide_id,
                    address,
                    PlacementUpdate {
                        x: Some(nx),
                        y: Some(ny),
                        ..Default::default()
                    },
                )
            }
            None => false,
        }
    }

    /// Overlay zoom: one clamped step. Resizes the bubble diameter when
    /// the address is a floating bubble.
    pub fn zoom_image(&mut self, slide_id: &str, address: ImageAddress, delta: f32) -> bool {
        match self.current_placement(slide_id, address) {
            Some(Placement::Anchored { scale, .. }) => self.update_placement(
                slide_id,
                address,
                PlacementUpdate {
                    scale: Some(placement::zoom(scale, delta)),
                    ..Default::default()
                },
            ),
            Some(Placement::Bubble { size, .. }) => self.update_placement(
                slide_id,
                address,
                PlacementUpdate {
                    scale: Some(placement::resize_bubble(size, delta)),
                    ..Default::default()
                },
            ),
            None => false,
        }
    }
}

fn merge_anchor(
    position: &mut Option<String>,
    scale: &mut Option<f32>,
    update: &PlacementUpdate,
) -> bool {
    let mut touched = false;
    if let Some(pos) = &update.position {
        *position = Some(pos.clone());
        touched = true;
    }
    if let Some(s) = update.scale {
        *scale = Some(s);
        touched = true;
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::defaults::default_slides;
    use crate::state::slides::*;

    fn deck() -> Deck {
        Deck::in_memory(default_slides())
    }

    fn collage(deck: &Deck) -> &CollageSlide {
        deck.slides()
            .iter()
            .find_map(|s| match s {
                Slide::Collage(c) if c.id == "collage-2" => Some(c),
                _ => None,
            })
            .expect("default deck has collage-2")
    }

    fn quotes(deck: &Deck) -> &QuotesSlide {
        deck.slides()
            .iter()
            .find_map(|s| match s {
                Slide::Quotes(q) => Some(q),
                _ => None,
            })
            .expect("default deck has a quotes slide")
    }

    #[test]
    fn replace_showcase_image_touches_only_that_field() {
        let mut d = deck();
        let before = d.slides().to_vec();

        assert!(d.replace_image("showcase-0", ImageAddress::Whole, "/img/99.jpg"));

        for (old, new) in before.iter().zip(d.slides()) {
            match (old, new) {
                (Slide::PhotoShowcase(a), Slide::PhotoShowcase(b)) if a.id == "showcase-0" => {
                    assert_eq!(b.image, "/img/99.jpg");
                    let mut reverted = b.clone();
                    reverted.image = a.image.clone();
                    assert_eq!(&reverted, a, "unrelated fields changed");
                }
                _ => assert_eq!(old, new, "sibling slide changed"),
            }
        }
    }

    #[test]
    fn replace_collage_entry_leaves_siblings_untouched() {
        let mut d = deck();
        let before = collage(&d).clone();

        assert!(d.replace_image("collage-2", ImageAddress::Entry(1), "/img/99.jpg"));

        let after = collage(&d);
        assert_eq!(after.images[1].src, "/img/99.jpg");
        assert_eq!(after.images[0], before.images[0]);
        assert_eq!(after.images[2], before.images[2]);
        assert_eq!(after.stats, before.stats);
        // Entry 1 keeps everything but its source.
        assert_eq!(after.images[1].label, before.images[1].label);
        assert_eq!(after.images[1].position, before.images[1].position);
    }

    #[test]
    fn replace_timeline_event_image() {
        let mut d = deck();
        assert!(d.replace_image("timeline-decadas", ImageAddress::Entry(2), "/img/99.jpg"));
        let Slide::Timeline(t) = &d.slides()[3] else {
            panic!("expected timeline at index 3");
        };
        assert_eq!(t.events[2].image, "/img/99.jpg");
    }

    #[test]
    fn quotes_addressing_dispatches_on_the_address_kind() {
        let mut d = deck();

        assert!(d.replace_image("quotes-family", ImageAddress::Whole, "/img/a.jpg"));
        assert!(d.replace_image("quotes-family", ImageAddress::Entry(0), "/img/b.jpg"));
        assert!(d.replace_image("quotes-family", ImageAddress::Bubble(1), "/img/c.jpg"));

        let q = quotes(&d);
        assert_eq!(q.central_image, "/img/a.jpg");
        assert_eq!(q.quotes[0].image.as_deref(), Some("/img/b.jpg"));
        assert_eq!(q.floating_images.as_ref().unwrap()[1].src, "/img/c.jpg");
        // Quote 0's bubble-sibling at the same index is untouched.
        assert_eq!(q.floating_images.as_ref().unwrap()[0].src, "/img/30.jpg");
    }

    #[test]
    fn legacy_indices_split_at_the_bubble_base() {
        assert_eq!(ImageAddress::from_legacy(None), ImageAddress::Whole);
        for k in 0..4_u32 {
            assert_eq!(ImageAddress::from_legacy(Some(k)), ImageAddress::Entry(k as usize));
            assert_eq!(
                ImageAddress::from_legacy(Some(LEGACY_BUBBLE_BASE + k)),
                ImageAddress::Bubble(k as usize)
            );
        }
        assert_eq!(ImageAddress::from_legacy(Some(999)), ImageAddress::Entry(999));
        assert_eq!(ImageAddress::from_legacy(Some(1000)), ImageAddress::Bubble(0));
    }

    #[test]
    fn invalid_addresses_are_deep_noops() {
        let mut d = deck();
        let before = d.slides().to_vec();

        assert!(!d.replace_image("no-such-slide", ImageAddress::Whole, "/img/x.jpg"));
        assert!(!d.replace_image("collage-2", ImageAddress::Entry(99), "/img/x.jpg"));
        assert!(!d.replace_image("collage-2", ImageAddress::Whole, "/img/x.jpg"));
        assert!(!d.replace_image("intro", ImageAddress::Whole, "/img/x.jpg"));
        assert!(!d.replace_image("quotes-family", ImageAddress::Bubble(99), "/img/x.jpg"));
        assert!(!d.update_placement(
            "no-such-slide",
            ImageAddress::Whole,
            PlacementUpdate {
                scale: Some(120.0),
                ..Default::default()
            }
        ));
        assert!(!d.update_placement(
            "timeline-decadas",
            ImageAddress::Entry(99),
            PlacementUpdate {
                scale: Some(120.0),
                ..Default::default()
            }
        ));

        assert_eq!(before, d.slides());
    }

    #[test]
    fn placement_merge_is_partial() {
        let mut d = deck();

        // Only scale provided: position must survive.
        assert!(d.update_placement(
            "showcase-0",
            ImageAddress::Whole,
            PlacementUpdate {
                scale: Some(130.0),
                ..Default::default()
            }
        ));
        let Slide::PhotoShowcase(s) = &d.slides()[1] else {
            panic!("expected showcase at index 1");
        };
        assert_eq!(s.position.as_deref(), Some("70% 100%"));
        assert_eq!(s.scale, Some(130.0));

        // Empty update is a no-op.
        let before = d.slides().to_vec();
        assert!(!d.update_placement("showcase-0", ImageAddress::Whole, PlacementUpdate::default()));
        assert_eq!(before, d.slides());
    }

    #[test]
    fn bubble_placement_uses_absolute_coordinates_and_size() {
        let mut d = deck();
        assert!(d.update_placement(
            "quotes-family",
            ImageAddress::Bubble(0),
            PlacementUpdate {
                x: Some(10.0),
                scale: Some(140.0),
                ..Default::default()
            }
        ));
        let q = quotes(&d);
        let bubble = &q.floating_images.as_ref().unwrap()[0];
        assert_eq!(bubble.x, 10.0);
        assert_eq!(bubble.y, 39.1, "absent y left untouched");
        assert_eq!(bubble.size, 140.0, "scale reinterpreted as diameter");
    }

    #[test]
    fn quote_entry_placement_adjusts_the_central_portrait() {
        let mut d = deck();
        assert!(d.update_placement(
            "quotes-family",
            ImageAddress::Entry(0),
            PlacementUpdate {
                position: Some("10% 20%".into()),
                ..Default::default()
            }
        ));
        assert_eq!(quotes(&d).position.as_deref(), Some("10% 20%"));
    }

    #[test]
    fn overlay_pan_and_zoom_are_clamped_steps() {
        let mut d = deck();

        for _ in 0..40 {
            d.pan_image("showcase-0", ImageAddress::Whole, crate::state::placement::PAN_STEP, 0.0);
        }
        let Some(Placement::Anchored { position, .. }) =
            d.current_placement("showcase-0", ImageAddress::Whole)
        else {
            panic!("showcase placement missing");
        };
        assert_eq!(crate::state::placement::parse_position(&position), (100.0, 100.0));

        for _ in 0..40 {
            d.zoom_image("showcase-0", ImageAddress::Whole, crate::state::placement::ZOOM_STEP);
        }
        let Some(Placement::Anchored { scale, .. }) =
            d.current_placement("showcase-0", ImageAddress::Whole)
        else {
            panic!("showcase placement missing");
        };
        assert_eq!(scale, crate::state::placement::MAX_SCALE);
    }

    #[test]
    fn picking_session_state_machine() {
        let mut d = deck();
        assert!(d.editing().is_none());

        d.start_picking("showcase-0", ImageAddress::Whole);
        assert_eq!(d.editing().unwrap().slide_id, "showcase-0");

        // Opening a second target implicitly drops the first, without
        // applying anything to it.
        let before = d.slides().to_vec();
        d.start_picking("collage-2", ImageAddress::Entry(0));
        assert_eq!(d.editing().unwrap().slide_id, "collage-2");
        assert_eq!(before, d.slides());

        assert!(d.commit_pick("/img/99.jpg"));
        assert!(d.editing().is_none());
        assert_eq!(collage(&d).images[0].src, "/img/99.jpg");

        // Commit without a session does nothing.
        assert!(!d.commit_pick("/img/98.jpg"));

        d.start_picking("showcase-0", ImageAddress::Whole);
        d.cancel_picking();
        assert!(d.editing().is_none());
    }
}
