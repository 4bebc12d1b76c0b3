//! The photo picker modal: a flat gallery of every scanned image.
//! Selecting one commits the active picking session; closing cancels
//! it. No filtering, no pagination: the galleries this app serves are
//! a few dozen photos.

use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::assets::AssetLibrary;
use crate::Message;

const THUMBNAIL_WIDTH: f32 = 140.0;

pub fn view(assets: &AssetLibrary) -> Element<'static, Message> {
    let thumbnails: Vec<Element<'static, Message>> = assets
        .images()
        .iter()
        .map(|src| {
            button(
                image(assets.resolve(src)).width(Length::Fixed(THUMBNAIL_WIDTH)),
            )
            .on_press(Message::PickerImageChosen(src.clone()))
            .padding(2)
            .into()
        })
        .collect();

    let gallery: Element<'static, Message> = if thumbnails.is_empty() {
        text("Nenhuma foto encontrada no diretório de imagens.")
            .size(16)
            .into()
    } else {
        Wrap::with_elements(thumbnails).spacing(8.0).line_spacing(8.0).into()
    };

    let header = row![
        text("Escolha uma Foto").size(24),
        button(text("Fechar").size(14))
            .on_press(Message::PickerClosed)
            .padding(6),
    ]
    .spacing(20)
    .align_y(Alignment::Center);

    let panel = column![header, scrollable(gallery).height(Length::Fixed(420.0))]
        .spacing(16)
        .padding(20)
        .width(Length::Fixed(780.0));

    container(container(panel).style(container::rounded_box))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
