use iced::widget::image;
use iced::Command;
use log::{debug, info, warn};

use crate::client::config::ClientConfig;
use crate::client::models::messages::{Message, PickedImage};
use crate::client::services::predict_service::PredictService;
use crate::common::models::PredictionResult;

/// Shown when submit is pressed with nothing selected.
pub const NO_IMAGE_SELECTED: &str = "Please select an image to classify.";

/// Currently selected image: raw bytes for the upload plus the preview
/// handle derived from them. Replacing the whole struct on a new selection
/// drops the old handle, so the preview resource lives exactly as long as
/// the selection it belongs to.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub preview: image::Handle,
}

impl SelectedImage {
    pub fn from_picked(picked: PickedImage) -> Self {
        let preview = image::Handle::from_memory(picked.bytes.clone());
        SelectedImage {
            file_name: picked.file_name,
            bytes: picked.bytes,
            preview,
        }
    }
}

/// Which panel the view should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Ready,
    Submitting,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct ClassifyAppState {
    pub selected_image: Option<SelectedImage>,
    pub prediction: Option<PredictionResult>,
    pub loading: bool,
    pub error_message: Option<String>,
    /// Counts submissions. A completion is applied only if it carries the
    /// current value, so a slow superseded request can never overwrite the
    /// outcome of a newer one.
    pub generation: u64,
}

impl ClassifyAppState {
    pub fn view_state(&self) -> ViewState {
        if self.loading {
            ViewState::Submitting
        } else if self.error_message.is_some() {
            ViewState::Failed
        } else if self.prediction.is_some() {
            ViewState::Success
        } else if self.selected_image.is_some() {
            ViewState::Ready
        } else {
            ViewState::Idle
        }
    }

    pub fn update(
        &mut self,
        message: Message,
        predict_service: &PredictService,
        config: &ClientConfig,
    ) -> Command<Message> {
        match message {
            Message::PickImage => {
                return Command::perform(
                    async {
                        let picked = rfd::AsyncFileDialog::new()
                            .set_title("Select an image")
                            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif", "webp"])
                            .pick_file()
                            .await;
                        match picked {
                            Some(file) => {
                                let bytes = file.read().await;
                                Some(PickedImage {
                                    file_name: file.file_name(),
                                    bytes,
                                })
                            }
                            None => None,
                        }
                    },
                    Message::ImageSelected,
                );
            }
            Message::ImageSelected(Some(picked)) => {
                info!(
                    "selected '{}' ({} bytes)",
                    picked.file_name,
                    picked.bytes.len()
                );
                self.selected_image = Some(SelectedImage::from_picked(picked));
                self.prediction = None;
                self.error_message = None;
            }
            Message::ImageSelected(None) => {
                debug!("file dialog cancelled, clearing selection");
                self.selected_image = None;
                self.prediction = None;
                self.error_message = None;
            }
            Message::Submit => {
                let Some(image) = self.selected_image.clone() else {
                    self.error_message = Some(NO_IMAGE_SELECTED.to_string());
                    self.prediction = None;
                    return Command::none();
                };

                self.generation += 1;
                let generation = self.generation;
                self.loading = true;
                self.error_message = None;
                self.prediction = None;

                let url = config.predict_url();
                info!(
                    "submitting '{}' to {} (generation {})",
                    image.file_name, url, generation
                );
                let service = predict_service.clone();
                return Command::perform(
                    async move {
                        let result = service.classify(&url, image.file_name, image.bytes).await;
                        Message::ClassifyResult { generation, result }
                    },
                    |message| message,
                );
            }
            Message::ClassifyResult { generation, result } => {
                if generation != self.generation {
                    warn!(
                        "discarding stale classification result (generation {}, current {})",
                        generation, self.generation
                    );
                    return Command::none();
                }

                self.loading = false;
                match result {
                    Ok(prediction) => {
                        info!(
                            "classified as '{}' ({})",
                            prediction.predicted_class,
                            prediction.confidence_percent()
                        );
                        self.prediction = Some(prediction);
                        self.error_message = None;
                    }
                    Err(e) => {
                        warn!("classification failed: {}", e);
                        self.error_message = Some(e.to_string());
                        self.prediction = None;
                    }
                }
            }
        }
        Command::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::services::predict_service::PredictError;

    fn picked(name: &str) -> PickedImage {
        PickedImage {
            file_name: name.to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    fn prediction(class: &str, confidence: f32) -> PredictionResult {
        PredictionResult {
            predicted_class: class.to_string(),
            confidence,
            probabilities: vec![0.1; 10],
        }
    }

    fn apply(state: &mut ClassifyAppState, message: Message) {
        let service = PredictService::new();
        let config = ClientConfig {
            predict_host: "127.0.0.1".to_string(),
            predict_port: 5000,
        };
        let _ = state.update(message, &service, &config);
    }

    #[test]
    fn fresh_state_is_idle() {
        let state = ClassifyAppState::default();
        assert_eq!(state.view_state(), ViewState::Idle);
        assert!(state.selected_image.is_none());
    }

    #[test]
    fn selecting_a_file_stores_preview_and_clears_outcome() {
        let mut state = ClassifyAppState {
            prediction: Some(prediction("Coat", 0.4)),
            error_message: Some("old failure".to_string()),
            ..Default::default()
        };

        apply(&mut state, Message::ImageSelected(Some(picked("coat.png"))));

        let image = state.selected_image.as_ref().unwrap();
        assert_eq!(image.file_name, "coat.png");
        assert!(state.prediction.is_none());
        assert!(state.error_message.is_none());
        assert_eq!(state.view_state(), ViewState::Ready);
    }

    #[test]
    fn new_selection_supersedes_the_previous_one() {
        let mut state = ClassifyAppState::default();
        apply(&mut state, Message::ImageSelected(Some(picked("first.png"))));
        apply(&mut state, Message::ImageSelected(Some(picked("second.png"))));

        assert_eq!(state.selected_image.as_ref().unwrap().file_name, "second.png");
    }

    #[test]
    fn cancelled_selection_returns_to_idle_from_any_state() {
        let mut state = ClassifyAppState {
            prediction: Some(prediction("Sandal", 0.8)),
            ..Default::default()
        };
        apply(&mut state, Message::ImageSelected(Some(picked("sandal.png"))));
        apply(&mut state, Message::ImageSelected(None));

        assert!(state.selected_image.is_none());
        assert!(state.prediction.is_none());
        assert!(state.error_message.is_none());
        assert_eq!(state.view_state(), ViewState::Idle);
    }

    #[test]
    fn submit_without_image_sets_precondition_error_and_skips_the_request() {
        let mut state = ClassifyAppState::default();

        apply(&mut state, Message::Submit);

        assert_eq!(state.error_message.as_deref(), Some(NO_IMAGE_SELECTED));
        assert!(!state.loading);
        // No submission was started.
        assert_eq!(state.generation, 0);
        assert_eq!(state.view_state(), ViewState::Failed);
    }

    #[test]
    fn submit_sets_loading_synchronously_and_clears_previous_outcome() {
        let mut state = ClassifyAppState {
            error_message: Some("old failure".to_string()),
            ..Default::default()
        };
        apply(&mut state, Message::ImageSelected(Some(picked("shirt.png"))));
        apply(&mut state, Message::Submit);

        assert!(state.loading);
        assert!(state.error_message.is_none());
        assert!(state.prediction.is_none());
        assert_eq!(state.generation, 1);
        assert_eq!(state.view_state(), ViewState::Submitting);
    }

    #[test]
    fn successful_completion_stores_the_prediction_and_stops_loading() {
        let mut state = ClassifyAppState::default();
        apply(&mut state, Message::ImageSelected(Some(picked("shoe.png"))));
        apply(&mut state, Message::Submit);

        apply(
            &mut state,
            Message::ClassifyResult {
                generation: 1,
                result: Ok(prediction("Sneaker", 0.9342)),
            },
        );

        assert!(!state.loading);
        let stored = state.prediction.as_ref().unwrap();
        assert_eq!(stored.predicted_class, "Sneaker");
        assert_eq!(stored.confidence_percent(), "93.42%");
        assert!(state.error_message.is_none());
        assert_eq!(state.view_state(), ViewState::Success);
    }

    #[test]
    fn failed_completion_surfaces_the_server_message() {
        let mut state = ClassifyAppState::default();
        apply(&mut state, Message::ImageSelected(Some(picked("noise.png"))));
        apply(&mut state, Message::Submit);

        apply(
            &mut state,
            Message::ClassifyResult {
                generation: 1,
                result: Err(PredictError::Server("invalid image".to_string())),
            },
        );

        assert!(!state.loading);
        assert_eq!(state.error_message.as_deref(), Some("invalid image"));
        assert!(state.prediction.is_none());
        assert_eq!(state.view_state(), ViewState::Failed);
    }

    #[test]
    fn connection_failure_keeps_prefix_and_detail() {
        let mut state = ClassifyAppState::default();
        apply(&mut state, Message::ImageSelected(Some(picked("shoe.png"))));
        apply(&mut state, Message::Submit);

        apply(
            &mut state,
            Message::ClassifyResult {
                generation: 1,
                result: Err(PredictError::Connection("connection refused".to_string())),
            },
        );

        let message = state.error_message.unwrap();
        assert!(message.starts_with("Failed to connect to the classification server:"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn stale_completion_is_discarded_and_newer_one_wins() {
        let mut state = ClassifyAppState::default();
        apply(&mut state, Message::ImageSelected(Some(picked("shoe.png"))));
        apply(&mut state, Message::Submit);
        apply(&mut state, Message::Submit);
        assert_eq!(state.generation, 2);

        // The slow first request finishes after the second one started.
        apply(
            &mut state,
            Message::ClassifyResult {
                generation: 1,
                result: Ok(prediction("Bag", 0.51)),
            },
        );
        assert!(state.loading, "stale completion must not end the newer submission");
        assert!(state.prediction.is_none());

        apply(
            &mut state,
            Message::ClassifyResult {
                generation: 2,
                result: Ok(prediction("Sneaker", 0.97)),
            },
        );
        assert!(!state.loading);
        assert_eq!(
            state.prediction.as_ref().unwrap().predicted_class,
            "Sneaker"
        );
    }

    #[test]
    fn new_selection_after_failure_is_ready_to_resubmit() {
        let mut state = ClassifyAppState::default();
        apply(&mut state, Message::ImageSelected(Some(picked("bad.png"))));
        apply(&mut state, Message::Submit);
        apply(
            &mut state,
            Message::ClassifyResult {
                generation: 1,
                result: Err(PredictError::Server("invalid image".to_string())),
            },
        );

        apply(&mut state, Message::ImageSelected(Some(picked("good.png"))));
        assert_eq!(state.view_state(), ViewState::Ready);
        assert!(state.error_message.is_none());
    }
}
