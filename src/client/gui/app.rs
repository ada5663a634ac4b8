use iced::{Application, Command, Element, Theme};
use log::info;

use crate::client::config::ClientConfig;
use crate::client::gui::views;
use crate::client::models::app_state::ClassifyAppState;
use crate::client::models::messages::Message;
use crate::client::services::predict_service::PredictService;

pub struct ClassifyApp {
    pub state: ClassifyAppState,
    pub predict_service: PredictService,
    pub config: ClientConfig,
}

impl Application for ClassifyApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = ClientConfig::from_env();
        info!("classification endpoint: {}", config.predict_url());
        (
            ClassifyApp {
                state: ClassifyAppState::default(),
                predict_service: PredictService::new(),
                config,
            },
            Command::none(),
        )
    }

    fn title(&self) -> String {
        "Fashion Classification Lab".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        // All interaction logic lives on the state; async work comes back as messages.
        self.state.update(message, &self.predict_service, &self.config)
    }

    fn view(&self) -> Element<Message> {
        views::classify::view(&self.state)
    }
}
