pub mod effect;
pub mod event;
pub mod field;
pub mod reducer;
pub mod state;
pub mod validation;
pub mod validators;
