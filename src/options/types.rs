//! Option records and their field-wise merge

use crate::constants::defaults;
use serde::Deserialize;

/// Fully resolved view engine options. Every field holds a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEngineOptions {
    /// Root directory (or URL prefix) all other paths hang off.
    pub root_path: String,
    /// Directory holding views, relative to `root_path`.
    pub view_path: String,
    /// Directory holding partials, relative to the view directory.
    pub partial_path: String,
    /// Directory holding layouts, relative to the view directory.
    pub layout_path: String,
    /// Extension appended to every template name, including the dot.
    pub ext_name: String,
    /// Layout views are wrapped in. Empty disables layouts.
    pub layout: String,
}

/// A subset of [`ViewEngineOptions`], used both for construction and per-call overrides.
///
/// A field overrides only when it is present and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialViewEngineOptions {
    #[serde(default)]
    pub root_path: Option<String>,
    #[serde(default)]
    pub view_path: Option<String>,
    #[serde(default)]
    pub partial_path: Option<String>,
    #[serde(default)]
    pub layout_path: Option<String>,
    #[serde(default)]
    pub ext_name: Option<String>,
    #[serde(default)]
    pub layout: Option<String>,
}

impl Default for ViewEngineOptions {
    fn default() -> Self {
        Self {
            root_path: defaults::ROOT_PATH.to_string(),
            view_path: defaults::VIEW_PATH.to_string(),
            partial_path: defaults::PARTIAL_PATH.to_string(),
            layout_path: defaults::LAYOUT_PATH.to_string(),
            ext_name: defaults::EXT_NAME.to_string(),
            layout: defaults::LAYOUT.to_string(),
        }
    }
}

impl ViewEngineOptions {
    /// Builds options from the defaults with `options` merged on top.
    pub fn with_defaults(options: Option<&PartialViewEngineOptions>) -> Self {
        Self::default().merge(options)
    }

    /// Produces a new options value where each field set in `overrides` replaces ours.
    ///
    /// `self` is never modified.
    pub fn merge(&self, overrides: Option<&PartialViewEngineOptions>) -> Self {
        let Some(overrides) = overrides else {
            return self.clone();
        };
        Self {
            root_path: pick(&overrides.root_path, &self.root_path),
            view_path: pick(&overrides.view_path, &self.view_path),
            partial_path: pick(&overrides.partial_path, &self.partial_path),
            layout_path: pick(&overrides.layout_path, &self.layout_path),
            ext_name: pick(&overrides.ext_name, &self.ext_name),
            layout: pick(&overrides.layout, &self.layout),
        }
    }
}

impl PartialViewEngineOptions {
    pub fn root_path(mut self, value: impl Into<String>) -> Self {
        self.root_path = Some(value.into());
        self
    }

    pub fn view_path(mut self, value: impl Into<String>) -> Self {
        self.view_path = Some(value.into());
        self
    }

    pub fn partial_path(mut self, value: impl Into<String>) -> Self {
        self.partial_path = Some(value.into());
        self
    }

    pub fn layout_path(mut self, value: impl Into<String>) -> Self {
        self.layout_path = Some(value.into());
        self
    }

    pub fn ext_name(mut self, value: impl Into<String>) -> Self {
        self.ext_name = Some(value.into());
        self
    }

    pub fn layout(mut self, value: impl Into<String>) -> Self {
        self.layout = Some(value.into());
        self
    }
}

/// Returns the override when it is present and non-empty, otherwise the base value.
pub(crate) fn pick(overridden: &Option<String>, base: &str) -> String {
    match overridden.as_deref() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = ViewEngineOptions::default();
        assert_eq!(options.root_path, ".");
        assert_eq!(options.view_path, "views");
        assert_eq!(options.partial_path, "partials");
        assert_eq!(options.layout_path, "layouts");
        assert_eq!(options.ext_name, ".hbs");
        assert_eq!(options.layout, "main");
    }

    #[test]
    fn merge_without_overrides_is_a_copy() {
        let base = ViewEngineOptions::default();
        assert_eq!(base.merge(None), base);
    }

    #[test]
    fn merge_replaces_only_set_fields() {
        let base = ViewEngineOptions::default();
        let overrides = PartialViewEngineOptions::default().ext_name(".j2").layout("admin");
        let merged = base.merge(Some(&overrides));

        assert_eq!(merged.ext_name, ".j2");
        assert_eq!(merged.layout, "admin");
        assert_eq!(merged.root_path, base.root_path);
        assert_eq!(merged.view_path, base.view_path);
        assert_eq!(merged.partial_path, base.partial_path);
        assert_eq!(merged.layout_path, base.layout_path);
    }

    #[test]
    fn empty_override_falls_back_to_base() {
        let base = ViewEngineOptions::default();
        let overrides = PartialViewEngineOptions::default().root_path("").layout("");
        let merged = base.merge(Some(&overrides));
        assert_eq!(merged, base);
    }

    #[test]
    fn with_defaults_applies_construction_options() {
        let options = ViewEngineOptions::with_defaults(Some(
            &PartialViewEngineOptions::default().root_path("/srv/app"),
        ));
        assert_eq!(options.root_path, "/srv/app");
        assert_eq!(options.view_path, "views");
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{"rootPath": "site", "extName": ".html"}"#;
        let options: PartialViewEngineOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.root_path.as_deref(), Some("site"));
        assert_eq!(options.ext_name.as_deref(), Some(".html"));
        assert_eq!(options.view_path, None);
    }
}
