pub mod track_location;

pub use track_location::track_location;
