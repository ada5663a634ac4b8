use crate::client::services::predict_service::PredictError;
use crate::common::models::PredictionResult;

/// File contents handed back by the picker, before a preview handle exists.
#[derive(Debug, Clone)]
pub struct PickedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Open the native file dialog.
    PickImage,
    /// Dialog closed; `None` means the user cancelled.
    ImageSelected(Option<PickedImage>),
    /// Send the selected image to the classification endpoint.
    Submit,
    /// A classification round trip finished. `generation` identifies which
    /// submission this completion belongs to.
    ClassifyResult {
        generation: u64,
        result: Result<PredictionResult, PredictError>,
    },
}
