mod engine;
mod frequency;
pub mod handlers;

use thiserror::Error;

use crate::error::StoreError;
use crate::window::WindowError;

pub use engine::{SuggestionEngine, SuggestionSettings};

#[derive(Error, Debug)]
pub enum SuggestionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Window(#[from] WindowError),
}
