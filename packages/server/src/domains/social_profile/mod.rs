pub mod activities;
pub mod models;

pub use activities::track_location;
pub use models::{ExtractionRequest, ExtractionResult, TrackLocationInput, ValidationError};
