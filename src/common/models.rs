// Wire types shared with the classification endpoint
use serde::{Serialize, Deserialize};

/// Successful response body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub predicted_class: String,
    /// Expected in [0, 1].
    pub confidence: f32,
    /// Per-class scores in the server's own class order. The class list is
    /// owned by the server, so the ordering is opaque on this side.
    pub probabilities: Vec<f32>,
}

impl PredictionResult {
    /// Confidence rendered for display, e.g. `93.42%`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence * 100.0)
    }
}
