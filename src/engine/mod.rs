//! The engine-independent facade: shared state, setup descriptor and the
//! adapter contract.

pub mod base;
pub mod interface;
pub mod setup;

pub use base::{layout_context, ViewEngineBase};
pub use interface::ViewEngine;
pub use setup::ViewEngineSetup;
