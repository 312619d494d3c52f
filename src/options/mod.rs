//! View engine options: defaults, overrides and path resolution

pub mod loader;
pub mod resolver;
pub mod types;

pub use resolver::{
    resolve_ext_name, resolve_layout, resolve_layout_path, resolve_partial_path,
    resolve_view_path,
};
pub use types::{PartialViewEngineOptions, ViewEngineOptions};
