// HTTP routes
pub mod health;
pub mod track_location;

pub use health::*;
pub use track_location::*;
