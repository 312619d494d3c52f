use crate::constants::LAYOUT_BODY_KEY;
use crate::error::{Error, Result};
use crate::fetch::{DefaultFetch, Fetch};
use crate::options::{
    resolve_ext_name, resolve_layout, resolve_layout_path, resolve_partial_path,
    resolve_view_path, PartialViewEngineOptions, ViewEngineOptions,
};
use log::debug;
use std::fmt;
use std::sync::{Arc, RwLock};

/// State shared by every view engine adapter.
///
/// Owns the engine handle, the resolved base options and, once installed,
/// the fetch used to retrieve templates. Adapters embed one of these and
/// use its retrieval methods to obtain raw template text.
pub struct ViewEngineBase<E> {
    /// Engine handle; never replaced after construction.
    engine: E,
    options: ViewEngineOptions,
    /// Bound by `install`; each later `install` replaces it.
    fetch: RwLock<Option<Arc<dyn Fetch>>>,
}

impl<E> ViewEngineBase<E> {
    /// Creates an uninstalled base with `options` merged over the defaults.
    pub fn new(engine: E, options: Option<&PartialViewEngineOptions>) -> Self {
        Self::from_options(engine, ViewEngineOptions::with_defaults(options))
    }

    /// Creates an uninstalled base from already resolved options.
    ///
    /// This is the only way to set a field to an empty value, e.g. an empty
    /// `layout` to render views without a layout.
    pub fn from_options(engine: E, options: ViewEngineOptions) -> Self {
        Self { engine, options, fetch: RwLock::new(None) }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn options(&self) -> &ViewEngineOptions {
        &self.options
    }

    pub fn view_path(&self) -> String {
        resolve_view_path(&self.options, None)
    }

    pub fn partial_path(&self) -> String {
        resolve_partial_path(&self.options, None)
    }

    pub fn layout_path(&self) -> String {
        resolve_layout_path(&self.options, None)
    }

    pub fn is_installed(&self) -> bool {
        self.fetch.read().map(|fetch| fetch.is_some()).unwrap_or(false)
    }

    /// Binds `fetch`, or [`DefaultFetch`] when `None`, replacing any fetch
    /// bound by an earlier install.
    pub(crate) fn bind_fetch(&self, fetch: Option<Arc<dyn Fetch>>) -> Result<()> {
        let custom = fetch.is_some();
        let fetch = fetch.unwrap_or_else(|| Arc::new(DefaultFetch::new()) as Arc<dyn Fetch>);
        let previous = self.fetch.write()?.replace(fetch);
        debug!(
            "{} {} fetch.",
            if previous.is_some() { "Rebound" } else { "Bound" },
            if custom { "custom" } else { "default" }
        );
        Ok(())
    }

    /// The bound fetch, cloned out so no lock is held while it runs.
    fn fetcher(&self) -> Result<Arc<dyn Fetch>> {
        self.fetch.read()?.clone().ok_or(Error::NotInstalledError)
    }

    /// Fetches `{base_path}/{template_name}{ext}` and returns its body verbatim.
    ///
    /// # Arguments
    /// * `base_path` - Directory (or URL prefix) holding the template
    /// * `template_name` - Template name without extension
    /// * `options` - Per-call override; only `ext_name` is consulted
    ///
    /// # Returns
    /// * `Result<String>` - Raw template text
    pub async fn retrieve_template(
        &self,
        base_path: &str,
        template_name: &str,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String> {
        let fetch = self.fetcher()?;
        let ext_name = resolve_ext_name(&self.options, options);
        let url = format!("{base_path}/{template_name}{ext_name}");
        debug!("Retrieving template '{url}'.");
        fetch.fetch(&url, None).await?.text()
    }

    pub async fn retrieve_view_template(
        &self,
        template_name: &str,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String> {
        let base_path = resolve_view_path(&self.options, options);
        self.retrieve_template(&base_path, template_name, options).await
    }

    pub async fn retrieve_partial_template(
        &self,
        template_name: &str,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String> {
        let base_path = resolve_partial_path(&self.options, options);
        self.retrieve_template(&base_path, template_name, options).await
    }

    pub async fn retrieve_layout_template(
        &self,
        template_name: &str,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String> {
        let base_path = resolve_layout_path(&self.options, options);
        self.retrieve_template(&base_path, template_name, options).await
    }

    /// Retrieves the layout a view should be wrapped in, if any.
    ///
    /// # Returns
    /// * `Result<Option<(String, String)>>` - Layout name and raw text, or
    ///   `None` when the effective layout name is empty
    pub async fn retrieve_active_layout(
        &self,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<Option<(String, String)>> {
        let layout = resolve_layout(&self.options, options);
        if layout.is_empty() {
            return Ok(None);
        }
        let source = self.retrieve_layout_template(&layout, options).await?;
        Ok(Some((layout, source)))
    }

    /// File name a template is fetched under, used to name it inside the engine.
    pub fn template_file_name(
        &self,
        template_name: &str,
        options: Option<&PartialViewEngineOptions>,
    ) -> String {
        format!("{template_name}{}", resolve_ext_name(&self.options, options))
    }
}

impl<E> fmt::Debug for ViewEngineBase<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewEngineBase")
            .field("options", &self.options)
            .field("installed", &self.is_installed())
            .finish_non_exhaustive()
    }
}

/// Data handed to a layout: the view's data plus the rendered view under `body`.
///
/// Non-object data is dropped; the layout then only sees `body`.
pub fn layout_context(data: &serde_json::Value, body: String) -> serde_json::Value {
    let mut context = match data {
        serde_json::Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };
    context.insert(LAYOUT_BODY_KEY.to_string(), serde_json::Value::String(body));
    serde_json::Value::Object(context)
}
