use iced::widget::{Button, Column, Container, Image, Row, Space, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::widgets::alert;
use crate::client::models::app_state::{ClassifyAppState, ViewState};
use crate::client::models::messages::Message;

// Color palette shared across the app
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36); // Muted indigo for the card body
const PREVIEW_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const ACCENT_COLOR: Color = Color::from_rgb(0.35, 0.65, 1.0); // Blue accent for results
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 0.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 0.0,
            color: Color::TRANSPARENT,
            radius: 16.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 12.0,
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        },
    }
}

fn preview_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(PREVIEW_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.3, 0.3, 0.4),
            radius: 8.0.into(),
        },
        shadow: iced::Shadow {
            offset: iced::Vector::new(0.0, 0.0),
            blur_radius: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

pub fn view(state: &ClassifyAppState) -> Element<Message> {
    let loading = state.loading;
    let submit_enabled = state.selected_image.is_some() && !loading;

    let title = Text::new("Fashion Classification Lab")
        .size(32)
        .font(BOLD_FONT)
        .style(TEXT_PRIMARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let subtitle = Text::new("Upload a clothing photo and let the model guess")
        .size(15)
        .style(TEXT_SECONDARY)
        .horizontal_alignment(iced::alignment::Horizontal::Center);

    let pick_button = Button::new(
        Text::new("Select Image")
            .size(16)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .on_press(Message::PickImage)
    .style(iced::theme::Button::Primary)
    .padding([12, 24]);

    // Preview section, only present while a file is selected
    let preview: Element<Message> = match &state.selected_image {
        Some(image) => Container::new(
            Column::new()
                .spacing(8)
                .align_items(Alignment::Center)
                .push(
                    Container::new(
                        Image::new(image.preview.clone())
                            .width(Length::Fixed(200.0))
                            .height(Length::Fixed(200.0)),
                    )
                    .padding(8)
                    .style(iced::theme::Container::Custom(Box::new(preview_appearance))),
                )
                .push(Text::new(image.file_name.as_str()).size(13).style(TEXT_SECONDARY)),
        )
        .width(Length::Fill)
        .center_x()
        .into(),
        None => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let submit_label = if loading { "Classifying..." } else { "Classify Image" };
    let mut submit_button = Button::new(
        Text::new(submit_label)
            .size(16)
            .font(BOLD_FONT)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .style(iced::theme::Button::Positive)
    .padding([14, 32]);
    if submit_enabled {
        submit_button = submit_button.on_press(Message::Submit);
    }

    // Bottom panel: alert on failure, prediction on success, nothing otherwise
    let outcome: Element<Message> = match (state.view_state(), &state.prediction, &state.error_message)
    {
        (ViewState::Failed, _, Some(message)) => Container::new(alert::view(message))
            .width(Length::Fill)
            .padding([16, 0, 0, 0])
            .into(),
        (ViewState::Success, Some(prediction), _) => {
            Container::new(
                Column::new()
                    .spacing(8)
                    .align_items(Alignment::Center)
                    .push(
                        Text::new("Classification Result")
                            .size(20)
                            .font(BOLD_FONT)
                            .style(TEXT_PRIMARY),
                    )
                    .push(
                        Row::new()
                            .spacing(6)
                            .push(Text::new("Prediction:").size(16).style(TEXT_SECONDARY))
                            .push(
                                Text::new(prediction.predicted_class.as_str())
                                    .size(16)
                                    .font(BOLD_FONT)
                                    .style(ACCENT_COLOR),
                            ),
                    )
                    .push(
                        Row::new()
                            .spacing(6)
                            .push(Text::new("Confidence:").size(16).style(TEXT_SECONDARY))
                            .push(
                                Text::new(prediction.confidence_percent())
                                    .size(16)
                                    .font(BOLD_FONT)
                                    .style(ACCENT_COLOR),
                            ),
                    ),
            )
            .width(Length::Fill)
            .padding([16, 0, 0, 0])
            .center_x()
            .into()
        }
        _ => Space::new(Length::Fill, Length::Fixed(0.0)).into(),
    };

    let card = Container::new(
        Column::new()
            .spacing(20)
            .align_items(Alignment::Center)
            .push(title)
            .push(subtitle)
            .push(pick_button)
            .push(preview)
            .push(submit_button)
            .push(outcome),
    )
    .width(Length::Fixed(440.0))
    .padding(32)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
