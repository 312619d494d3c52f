//! One contract over interchangeable template engines.
//!
//! A host constructs an adapter such as [`MiniJinjaViewEngine`], calls
//! [`ViewEngine::install`] once, then renders with [`ViewEngine::view`] and
//! [`ViewEngine::partial`]. Templates are located from
//! [`ViewEngineOptions`] and retrieved through a pluggable [`fetch::Fetch`].
//!
//! ```no_run
//! use serde_json::json;
//! use view_engine::{MiniJinjaViewEngine, PartialViewEngineOptions, ViewEngine, ViewEngineSetup};
//!
//! # async fn run() -> view_engine::error::Result<()> {
//! let options = PartialViewEngineOptions::default().ext_name(".j2");
//! let engine = MiniJinjaViewEngine::new(Some(&options));
//! engine.install(ViewEngineSetup::new().partial("nav")).await?;
//! let html = engine.view("home", &json!({ "title": "Home" }), None).await?;
//! # let _ = html;
//! # Ok(())
//! # }
//! ```

/// Constants and default option values.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Options, overrides and path resolution.
pub mod options;

/// Pluggable template retrieval.
pub mod fetch;

/// The engine-independent facade and adapter contract.
pub mod engine;

/// Concrete adapters for MiniJinja and Handlebars.
pub mod renderer;

pub use engine::{ViewEngine, ViewEngineBase, ViewEngineSetup};
pub use options::{PartialViewEngineOptions, ViewEngineOptions};
#[cfg(feature = "handlebars")]
pub use renderer::{HandlebarsHelper, HandlebarsViewEngine};
pub use renderer::{MiniJinjaHelper, MiniJinjaViewEngine};
