pub mod celebration;
pub mod counter;
pub mod spinner;
