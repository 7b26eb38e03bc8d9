pub mod badge;
pub mod input;
