//! Classification of assets and assembly of the burn transaction
pub mod assembler;
pub mod classifier;
pub mod metas;
pub mod request;

pub use assembler::*;
pub use classifier::*;
pub use metas::*;
