pub mod content;
pub mod ingredients;
pub mod reactions;
