//! Polymorphic slide rendering: one layout builder per deck variant.
//!
//! Layouts are pure presentation over the schema. In edit mode each
//! image grows the overlay control strip for its own address; the
//! addresses used here are the same ones the edit controller resolves.

use iced::widget::{column, container, image, row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::overlay;
use crate::assets::AssetLibrary;
use crate::state::deck::{Deck, ImageAddress};
use crate::state::slides::*;
use crate::Message;

pub struct SlideContext<'a> {
    pub deck: &'a Deck,
    pub assets: &'a AssetLibrary,
    pub edit_mode: bool,
}

/// Dispatch a slide to its layout.
pub fn view<'a>(slide: &'a Slide, ctx: &SlideContext<'a>) -> Element<'a, Message> {
    let content = match slide {
        Slide::Cover(s) => cover(s),
        Slide::PhotoShowcase(s) => photo_showcase(s, ctx),
        Slide::Collage(s) => collage(s, ctx),
        Slide::Timeline(s) => timeline(s, ctx),
        Slide::MultiPhoto(s) => multi_photo(s, ctx),
        Slide::Quotes(s) => quotes(s, ctx),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(30)
        .into()
}

fn cover(s: &CoverSlide) -> Element<'_, Message> {
    column![
        text(&s.name).size(72),
        text(&s.years).size(28),
        text(&s.subtitle).size(40),
        text(&s.tagline).size(20),
    ]
    .spacing(18)
    .align_x(Alignment::Center)
    .into()
}

fn photo_showcase<'a>(s: &'a PhotoShowcaseSlide, ctx: &SlideContext<'a>) -> Element<'a, Message> {
    let caption = column![
        text(&s.decade).size(34),
        text(&s.year).size(20),
        text(&s.location).size(18),
        text(&s.description).size(16),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    column![
        editable_photo(ctx, &s.id, ImageAddress::Whole, &s.image, 620.0),
        caption,
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

fn collage<'a>(s: &'a CollageSlide, ctx: &SlideContext<'a>) -> Element<'a, Message> {
    let cards = s.images.iter().enumerate().map(|(i, card)| {
        column![
            editable_photo(ctx, &s.id, ImageAddress::Entry(i), &card.src, 240.0),
            text(&card.label).size(16),
            text(&card.sublabel).size(12),
        ]
        .spacing(4)
        .align_x(Alignment::Center)
        .into()
    });

    let stats = s.stats.iter().map(|stat| {
        column![text(&stat.value).size(26), text(&stat.label).size(12)]
            .align_x(Alignment::Center)
            .into()
    });

    column![
        text(&s.title).size(40),
        text(&s.subtitle).size(18),
        row(cards).spacing(24),
        row(stats).spacing(40),
    ]
    .spacing(22)
    .align_x(Alignment::Center)
    .into()
}

fn timeline<'a>(s: &'a TimelineSlide, ctx: &SlideContext<'a>) -> Element<'a, Message> {
    let events = s.events.iter().enumerate().map(|(i, event)| {
        column![
            text(&event.year).size(24),
            editable_photo(ctx, &s.id, ImageAddress::Entry(i), &event.image, 220.0),
            text(&event.description).size(13),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .width(Length::Fixed(260.0))
        .into()
    });

    column![
        text(&s.title).size(40),
        text(&s.subtitle).size(18),
        row(events).spacing(20),
    ]
    .spacing(24)
    .align_x(Alignment::Center)
    .into()
}

fn multi_photo<'a>(s: &'a MultiPhotoSlide, ctx: &SlideContext<'a>) -> Element<'a, Message> {
    let photos: Vec<Element<'a, Message>> = s
        .images
        .iter()
        .enumerate()
        .map(|(i, entry)| editable_photo(ctx, &s.id, ImageAddress::Entry(i), &entry.src, 170.0))
        .collect();

    column![
        text(&s.title).size(40),
        text(&s.subtitle).size(18),
        Wrap::with_elements(photos).spacing(10.0).line_spacing(10.0),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

fn quotes<'a>(s: &'a QuotesSlide, ctx: &SlideContext<'a>) -> Element<'a, Message> {
    let quote_cards = s.quotes.iter().enumerate().map(|(i, quote)| {
        let mut card = column![
            text(&quote.relation).size(12),
            text(&quote.text).size(15),
            text(&quote.author).size(13),
        ]
        .spacing(4)
        .width(Length::Fixed(280.0));

        if let Some(src) = &quote.image {
            card = card.push(editable_photo(ctx, &s.id, ImageAddress::Entry(i), src, 120.0));
        }
        container(card).padding(10).style(container::rounded_box).into()
    });

    // Bubble coordinates are meaningful to the finale animation; here
    // they render as a strip scaled by their configured diameter.
    let bubbles: Vec<Element<'a, Message>> = s
        .floating_images
        .iter()
        .flatten()
        .enumerate()
        .map(|(i, bubble)| {
            editable_photo(
                ctx,
                &s.id,
                ImageAddress::Bubble(i),
                &bubble.src,
                bubble.size.clamp(60.0, 200.0),
            )
        })
        .collect();

    column![
        text(&s.title).size(40),
        text(&s.subtitle).size(18),
        row![
            editable_photo(ctx, &s.id, ImageAddress::Whole, &s.central_image, 340.0),
            column(quote_cards).spacing(14),
        ]
        .spacing(30)
        .align_y(Alignment::Center),
        Wrap::with_elements(bubbles).spacing(8.0),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

/// An image plus, in edit mode, the overlay controls for its address.
fn editable_photo<'a>(
    ctx: &SlideContext<'a>,
    slide_id: &str,
    address: ImageAddress,
    src: &str,
    width: f32,
) -> Element<'a, Message> {
    let photo = image(ctx.assets.resolve(src)).width(Length::Fixed(width));

    if !ctx.edit_mode {
        return photo.into();
    }

    match ctx.deck.current_placement(slide_id, address) {
        Some(placement) => column![photo, overlay::controls(slide_id, address, &placement)]
            .spacing(4)
            .align_x(Alignment::Center)
            .into(),
        None => photo.into(),
    }
}
