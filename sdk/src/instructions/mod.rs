/// Instruction builders for the burn program
pub mod builder;
pub mod burn;

pub use builder::*;
pub use burn::*;
