// Alert widget for the GUI error region
use iced::widget::{Container, Text};
use iced::{Color, Element, Length};

use crate::client::models::messages::Message;

const ALERT_BG: Color = Color::from_rgb(0.32, 0.10, 0.13);
const ALERT_TEXT: Color = Color::from_rgb(1.0, 0.78, 0.78);

fn alert_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ALERT_BG)),
        text_color: Some(ALERT_TEXT),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.6, 0.2, 0.25),
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(msg: &str) -> Element<'_, Message> {
    Container::new(Text::new(msg).size(14).style(ALERT_TEXT))
        .width(Length::Fill)
        .padding(12)
        .style(iced::theme::Container::Custom(Box::new(alert_appearance)))
        .into()
}
