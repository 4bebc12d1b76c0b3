//! Export modal: shows the generated source module for manual
//! copy-and-paste. The app never writes the file itself.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Font, Length};

use crate::Message;

pub fn view(code: &str, copied: bool) -> Element<'static, Message> {
    let copy_label = if copied { "Copiado!" } else { "Copiar código" };

    let header = row![
        text("Exportar Deck").size(24),
        button(text(copy_label).size(14))
            .on_press(Message::CopyExport)
            .padding(6),
        button(text("Fechar").size(14))
            .on_press(Message::CloseExport)
            .padding(6),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let hint = text("Cole o conteúdo em src/state/defaults.rs para tornar o deck editado permanente.")
        .size(13);

    let listing = scrollable(
        text(code.to_string())
            .font(Font::MONOSPACE)
            .size(12),
    )
    .height(Length::Fixed(440.0));

    let panel = column![header, hint, listing]
        .spacing(12)
        .padding(20)
        .width(Length::Fixed(820.0));

    container(container(panel).style(container::rounded_box))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
