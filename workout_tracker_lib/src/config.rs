use std::time::Duration;

use crate::constants::{DEFAULT_ZOOM, FORM_REVEAL_DELAY_MS, PAN_DURATION_MS, STORAGE_KEY};

/// Session-wide settings for the [`App`](crate::App) controller.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Zoom used both when the map first loads and when panning to a workout.
    pub default_zoom: f64,
    /// Key the whole workout list is stored under.
    pub storage_key: String,
    pub pan_duration: Duration,
    /// How long the entry form stays collapsed after a submission.
    pub form_reveal_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_zoom: DEFAULT_ZOOM,
            storage_key: STORAGE_KEY.to_owned(),
            pan_duration: Duration::from_millis(PAN_DURATION_MS),
            form_reveal_delay: Duration::from_millis(FORM_REVEAL_DELAY_MS),
        }
    }
}
