pub const STORAGE_KEY: &str = "workouts";
pub const DEFAULT_ZOOM: f64 = 13.0;

pub const PAN_DURATION_MS: u64 = 1000;
pub const FORM_REVEAL_DELAY_MS: u64 = 1000;

pub const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const POPUP_MAX_WIDTH: f64 = 250.;
pub const POPUP_MIN_WIDTH: f64 = 100.;

pub const LOCATION_UNAVAILABLE: &str = "Location not available";
