use crate::engine::{base::ViewEngineBase, setup::ViewEngineSetup};
use crate::error::Result;
use crate::options::PartialViewEngineOptions;
use async_trait::async_trait;
use futures::future::{try_join_all, BoxFuture};
use log::debug;

/// Contract every concrete template engine adapter fulfils.
///
/// Adapters embed a [`ViewEngineBase`] and must obtain template text through
/// its retrieval methods rather than building paths themselves. Render
/// methods take `&self` and may run concurrently; an adapter wrapping a
/// stateful engine synchronizes access itself.
#[async_trait]
pub trait ViewEngine: Send + Sync {
    /// The underlying engine handle.
    type Engine: Send + Sync;
    /// What the engine accepts as a helper.
    type Helper: Send + 'static;

    fn base(&self) -> &ViewEngineBase<Self::Engine>;

    /// Retrieves the partial `partial` and registers it with the engine under that name.
    async fn register_partial(&self, partial: &str) -> Result<()>;

    /// Registers a helper with the engine.
    fn register_helper(&self, name: &str, helper: Self::Helper) -> Result<()>;

    /// Renders the view `template`, wrapped in the effective layout.
    async fn view(
        &self,
        template: &str,
        data: &serde_json::Value,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String>;

    /// Renders the partial `template` on its own.
    async fn partial(
        &self,
        template: &str,
        data: &serde_json::Value,
        options: Option<&PartialViewEngineOptions>,
    ) -> Result<String>;

    /// Binds the fetch and registers every partial and helper of `setup`.
    ///
    /// All registrations are issued together and awaited as one; the first
    /// failure is returned. Registrations that already succeeded are not
    /// undone, so an engine whose install failed should be discarded.
    async fn install(&self, setup: ViewEngineSetup<Self::Helper>) -> Result<()> {
        let ViewEngineSetup { fetch, partials, helpers } = setup;
        self.base().bind_fetch(fetch)?;

        debug!(
            "Installing view engine with {} partial(s) and {} helper(s).",
            partials.len(),
            helpers.len()
        );

        let mut registrations: Vec<BoxFuture<'_, Result<()>>> =
            Vec::with_capacity(partials.len() + helpers.len());
        for partial in &partials {
            registrations.push(self.register_partial(partial));
        }
        for (name, helper) in helpers {
            registrations.push(Box::pin(async move { self.register_helper(&name, helper) }));
        }

        try_join_all(registrations).await?;
        Ok(())
    }

    fn is_installed(&self) -> bool {
        self.base().is_installed()
    }
}
