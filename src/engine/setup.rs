use crate::fetch::Fetch;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Everything `install` needs: an optional fetch plus the partials and
/// helpers to register up front.
///
/// `H` is the adapter's helper type. The setup is consumed by `install`.
pub struct ViewEngineSetup<H> {
    /// Custom fetch; the default fetch is bound when `None`.
    pub fetch: Option<Arc<dyn Fetch>>,
    /// Partial names, resolved against the partial directory.
    pub partials: Vec<String>,
    pub helpers: IndexMap<String, H>,
}

impl<H> Default for ViewEngineSetup<H> {
    fn default() -> Self {
        Self { fetch: None, partials: Vec::new(), helpers: IndexMap::new() }
    }
}

impl<H> ViewEngineSetup<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch(mut self, fetch: impl Fetch + 'static) -> Self {
        self.fetch = Some(Arc::new(fetch));
        self
    }

    pub fn shared_fetch(mut self, fetch: Arc<dyn Fetch>) -> Self {
        self.fetch = Some(fetch);
        self
    }

    pub fn partial(mut self, name: impl Into<String>) -> Self {
        self.partials.push(name.into());
        self
    }

    pub fn partials<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partials.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds a helper. A later helper with the same name replaces the earlier one.
    pub fn helper(mut self, name: impl Into<String>, helper: H) -> Self {
        self.helpers.insert(name.into(), helper);
        self
    }
}

impl<H> fmt::Debug for ViewEngineSetup<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewEngineSetup")
            .field("custom_fetch", &self.fetch.is_some())
            .field("partials", &self.partials)
            .field("helpers", &self.helpers.keys().collect::<Vec<_>>())
            .finish()
    }
}
