use crate::engine::{layout_context, ViewEngine, ViewEngineBase};
use crate::error::{Error, Result};
use crate::options::PartialViewEngineOptions;
use async_trait::async_trait;
use handlebars::{HelperDef, Handlebars};
use log::debug;
use std::sync::RwLock;

/// A Handlebars helper, e.g. one built with `handlebars_helper!`.
pub type HandlebarsHelper = Box<dyn HelperDef + Send + Sync + 'static>;

/// Handlebars-based view engine.
///
/// Partials are used with `{{> name}}`. Layouts receive the rendered view
/// as `body`; use the triple-stash `{{{body}}}` to keep its markup.
pub struct HandlebarsViewEngine {
    base: ViewEngineBase<RwLock<Handlebars<'static>>>,
}

impl HandlebarsViewEngine {
    pub fn new(options: Option<&PartialViewEngineOptions>) -> Self {
        Self::with_registry(Handlebars::new(), options)
    }

    /// Creates a view engine over a caller-configured registry (strict mode, escaping, ...).
    pub fn with_registry(
        registry: Handlebars<'static>,
        options: Option<&PartialViewEngineOptions>,
    ) -> Self {
        Self { base: ViewEngineBase::new(RwLock::new(registry), options) }
    }

    pub fn from_base(base: ViewEngineBase<RwLock<Handlebars<'static>>>) -> Self {
        Self { base }
    }

    fn render_source(&self, source: &str, data: &serde_json::Value) -> Result<String> {
        let registry = self.base.engine().read()?;
        Ok(registry.render_template(source, data)?)
    }
}

impl Default for HandlebarsViewEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

fn ensure_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::RegistrationError {
            name: String::new(),
            reason: "name must not be empty".to_string(),
        });
    }
    Ok(())
}

#[async_trait]
impl ViewEngine for HandlebarsViewEngine {
    type Engine = RwLock<Handlebars<'static>>;
    type Helper = HandlebarsHelper;

    fn base(&self) -> &ViewEngineBase<Self::Engine> {
        &self.base
    }

    async fn register_partial(&self, partial: &str) -> Result<()> {
        ensure_name(partial)?;
        let source = self.base.retrieve_partial_template(partial, None).await?;
        debug!("Registering partial '{partial}'.");
        let mut registry = self.base.engine().write()?;
        registry.register_partial(partial, source).map_err(|e| Error::RegistrationError {
            name: partial.to_string(),
            reason: e.to_string(),
        })
    }

    fn register_helper(&self, name: &str, helper: Self::Helper) -> Result<()> {
        ensure_name(name)?;
        debug!("Registering helper '{name}'.");
        self.base.engine().write()?.register_helper(name, helper);
        Ok(())
    }

    async fn view(
        &self,
        template: &str,
        data: &serde_json::Value,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String> {
        let source = self.base.retrieve_view_template(template, options).await?;
        let body = self.render_source(&source, data)?;
        match self.base.retrieve_active_layout(options).await? {
            Some((_, layout)) => self.render_source(&layout, &layout_context(data, body)),
            None => Ok(body),
        }
    }

    async fn partial(
        &self,
        template: &str,
        data: &serde_json::Value,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String> {
        let source = self.base.retrieve_partial_template(template, options).await?;
        self.render_source(&source, data)
    }
}
