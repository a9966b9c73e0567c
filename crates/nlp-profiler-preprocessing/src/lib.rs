pub mod input;
pub mod pre_processor;

pub use input::{InputText, NOT_APPLICABLE};
