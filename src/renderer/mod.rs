//! Concrete view engine adapters.
//!
//! | Engine       | Adapter                  | Partials            | Feature      |
//! |--------------|--------------------------|---------------------|--------------|
//! | MiniJinja    | [`MiniJinjaViewEngine`]  | `{% include "x" %}` | always       |
//! | Handlebars   | `HandlebarsViewEngine`   | `{{> x}}`           | `handlebars` |

pub mod filters;
#[cfg(feature = "handlebars")]
pub mod handlebars;
pub mod minijinja;

#[cfg(feature = "handlebars")]
pub use self::handlebars::{HandlebarsHelper, HandlebarsViewEngine};
pub use self::minijinja::{default_environment, MiniJinjaHelper, MiniJinjaViewEngine};
