//! Reusable UI components

mod loading;
mod result_card;
mod url_field;

pub use loading::*;
pub use result_card::*;
pub use url_field::*;
