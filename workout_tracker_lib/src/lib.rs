pub mod app;
pub mod capabilities;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod error;
pub mod form;
pub mod render;
pub mod storage;
pub mod workout;

pub use app::App;
pub use config::AppConfig;
pub use coordinates::Coordinates;
pub use workout::{Workout, WorkoutDetails, WorkoutId, WorkoutKind};
