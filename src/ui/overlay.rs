//! Per-image edit controls, shown under each image while edit mode is
//! active: four pan arrows, zoom out/in around the current percentage,
//! and the affordance that opens the photo picker for this address.
//!
//! The controls only emit messages; the clamping and the placement
//! merge live in the edit controller.

use iced::widget::{button, column, row, text};
use iced::{Alignment, Element};

use crate::state::deck::{ImageAddress, Placement};
use crate::state::placement::{PAN_STEP, ZOOM_STEP};
use crate::Message;

/// Build the control strip for one addressed image.
pub fn controls(slide_id: &str, address: ImageAddress, placement: &Placement) -> Element<'static, Message> {
    let pan = |dx: f32, dy: f32| Message::PanImage {
        slide_id: slide_id.to_string(),
        address,
        dx,
        dy,
    };
    let zoom = |delta: f32| Message::ZoomImage {
        slide_id: slide_id.to_string(),
        address,
        delta,
    };

    let zoom_label = match placement {
        Placement::Anchored { scale, .. } => format!("{}%", scale.round()),
        Placement::Bubble { size, .. } => format!("{}px", size.round()),
    };

    let pan_row = row![
        button(text("◀").size(12)).on_press(pan(-PAN_STEP, 0.0)).padding(4),
        button(text("▲").size(12)).on_press(pan(0.0, -PAN_STEP)).padding(4),
        button(text("▼").size(12)).on_press(pan(0.0, PAN_STEP)).padding(4),
        button(text("▶").size(12)).on_press(pan(PAN_STEP, 0.0)).padding(4),
    ]
    .spacing(2);

    let zoom_row = row![
        button(text("−").size(12)).on_press(zoom(-ZOOM_STEP)).padding(4),
        text(zoom_label).size(12),
        button(text("+").size(12)).on_press(zoom(ZOOM_STEP)).padding(4),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let pick = button(text("Trocar foto").size(12))
        .on_press(Message::OpenPicker {
            slide_id: slide_id.to_string(),
            address,
        })
        .padding(4);

    column![row![pan_row, zoom_row].spacing(10), pick]
        .spacing(4)
        .align_x(Alignment::Center)
        .into()
}
