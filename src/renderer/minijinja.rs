use super::filters::register_filters;
use crate::engine::{ViewEngine, ViewEngineBase};
use crate::error::{Error, Result};
use crate::options::PartialViewEngineOptions;
use async_trait::async_trait;
use log::debug;
use minijinja::{context, value::Rest, Environment, Value};
use std::sync::{Arc, RwLock};

/// A helper exposed to templates as a global function.
///
/// Receives the call's positional arguments; arity and types are checked by
/// the helper itself.
pub type MiniJinjaHelper =
    Arc<dyn Fn(&[Value]) -> std::result::Result<Value, minijinja::Error> + Send + Sync>;

/// MiniJinja-based view engine.
///
/// Partials are registered as named templates and pulled in with
/// `{% include "name" %}`. Layouts receive the rendered view as `body`,
/// already marked safe so auto-escaping leaves it alone.
pub struct MiniJinjaViewEngine {
    base: ViewEngineBase<RwLock<Environment<'static>>>,
}

impl MiniJinjaViewEngine {
    /// Creates a view engine over an environment with the default filters.
    pub fn new(options: Option<&PartialViewEngineOptions>) -> Self {
        Self::with_environment(default_environment(), options)
    }

    /// Creates a view engine over a caller-configured environment.
    pub fn with_environment(
        env: Environment<'static>,
        options: Option<&PartialViewEngineOptions>,
    ) -> Self {
        Self { base: ViewEngineBase::new(RwLock::new(env), options) }
    }

    /// Wraps an already constructed base, e.g. one built from loaded options.
    pub fn from_base(base: ViewEngineBase<RwLock<Environment<'static>>>) -> Self {
        Self { base }
    }

    /// Renders `source` under `name`; registered partials are visible to it.
    fn render_source(&self, name: &str, source: &str, ctx: Value) -> Result<String> {
        let env = self.base.engine().read()?;
        Ok(env.render_named_str(name, source, ctx)?)
    }

    async fn render_with_layout(
        &self,
        body: String,
        data: &serde_json::Value,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String> {
        match self.base.retrieve_active_layout(options).await? {
            Some((layout, source)) => {
                let ctx = context! {
                    body => Value::from_safe_string(body),
                    ..Value::from_serialize(data)
                };
                self.render_source(&self.base.template_file_name(&layout, options), &source, ctx)
            }
            None => Ok(body),
        }
    }
}

impl Default for MiniJinjaViewEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Environment with the string-case and regex filters registered.
pub fn default_environment() -> Environment<'static> {
    let mut env = Environment::new();
    register_filters(&mut env);
    env
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
impl ViewEngine for MiniJinjaViewEngine {
    type Engine = RwLock<Environment<'static>>;
    type Helper = MiniJinjaHelper;

    fn base(&self) -> &ViewEngineBase<Self::Engine> {
        &self.base
    }

    async fn register_partial(&self, partial: &str) -> Result<()> {
        ensure_name(partial)?;
        let source = self.base.retrieve_partial_template(partial, None).await?;
        debug!("Registering partial '{partial}'.");
        let mut env = self.base.engine().write()?;
        env.add_template_owned(partial.to_string(), source).map_err(|e| {
            Error::RegistrationError { name: partial.to_string(), reason: e.to_string() }
        })
    }

    fn register_helper(&self, name: &str, helper: Self::Helper) -> Result<()> {
        ensure_name(name)?;
        debug!("Registering helper '{name}'.");
        let mut env = self.base.engine().write()?;
        env.add_function(name.to_string(), move |args: Rest<Value>| helper(&args.0));
        Ok(())
    }

    async fn view(
        &self,
        template: &str,
        data: &serde_json::Value,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String> {
        let source = self.base.retrieve_view_template(template, options).await?;
        let name = self.base.template_file_name(template, options);
        let body = self.render_source(&name, &source, Value::from_serialize(data))?;
        self.render_with_layout(body, data, options).await
    }

    async fn partial(
        &self,
        template: &str,
        data: &serde_json::Value,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String> {
        let source = self.base.retrieve_partial_template(template, options).await?;
        let name = self.base.template_file_name(template, options);
        self.render_source(&name, &source, Value::from_serialize(data))
    }
}
