//! Turns options into concrete template locations.
//!
//! Every function takes the base options plus an optional override and is
//! pure: identical inputs always give identical output. Paths are joined
//! with `/` and never validated; a malformed path only shows up when the
//! fetch for it fails.

use super::types::{pick, PartialViewEngineOptions, ViewEngineOptions};
use crate::constants::PATH_SEPARATOR;
use log::trace;

/// Returns `{root_path}/{view_path}`.
pub fn resolve_view_path(
    base: &ViewEngineOptions,
    overrides: Option<&PartialViewEngineOptions>,
) -> String {
    let (root, view) = match overrides {
        Some(o) => (pick(&o.root_path, &base.root_path), pick(&o.view_path, &base.view_path)),
        None => (base.root_path.clone(), base.view_path.clone()),
    };
    let path = join(&root, &view);
    trace!("Resolved view path '{path}'");
    path
}

/// Returns the view path followed by `/{partial_path}`.
pub fn resolve_partial_path(
    base: &ViewEngineOptions,
    overrides: Option<&PartialViewEngineOptions>,
) -> String {
    let partial = overrides
        .map(|o| pick(&o.partial_path, &base.partial_path))
        .unwrap_or_else(|| base.partial_path.clone());
    join(&resolve_view_path(base, overrides), &partial)
}

/// Returns the view path followed by `/{layout_path}`.
pub fn resolve_layout_path(
    base: &ViewEngineOptions,
    overrides: Option<&PartialViewEngineOptions>,
) -> String {
    let layout = overrides
        .map(|o| pick(&o.layout_path, &base.layout_path))
        .unwrap_or_else(|| base.layout_path.clone());
    join(&resolve_view_path(base, overrides), &layout)
}

pub fn resolve_ext_name(
    base: &ViewEngineOptions,
    overrides: Option<&PartialViewEngineOptions>,
) -> String {
    overrides
        .map(|o| pick(&o.ext_name, &base.ext_name))
        .unwrap_or_else(|| base.ext_name.clone())
}

/// Name of the layout a view should be wrapped in. Empty means no layout.
pub fn resolve_layout(
    base: &ViewEngineOptions,
    overrides: Option<&PartialViewEngineOptions>,
) -> String {
    overrides
        .map(|o| pick(&o.layout, &base.layout))
        .unwrap_or_else(|| base.layout.clone())
}

fn join(head: &str, tail: &str) -> String {
    format!("{head}{PATH_SEPARATOR}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ViewEngineOptions {
        ViewEngineOptions {
            root_path: "base-root".to_string(),
            view_path: "base-views".to_string(),
            partial_path: "base-partials".to_string(),
            layout_path: "base-layouts".to_string(),
            ext_name: ".base".to_string(),
            layout: "base-layout".to_string(),
        }
    }

    fn field(value: Option<&str>) -> Option<String> {
        value.map(str::to_string)
    }

    #[test]
    fn view_path_presence_matrix() {
        // Each field: absent, empty, or set on the override.
        let variants = [None, Some(""), Some("over")];
        for root in variants {
            for view in variants {
                let overrides = PartialViewEngineOptions {
                    root_path: field(root),
                    view_path: field(view),
                    ..Default::default()
                };
                let expected_root = match root {
                    Some(v) if !v.is_empty() => v,
                    _ => "base-root",
                };
                let expected_view = match view {
                    Some(v) if !v.is_empty() => v,
                    _ => "base-views",
                };
                assert_eq!(
                    resolve_view_path(&base(), Some(&overrides)),
                    format!("{expected_root}/{expected_view}"),
                    "root={root:?} view={view:?}"
                );
            }
        }
    }

    #[test]
    fn view_path_without_override_uses_base() {
        assert_eq!(resolve_view_path(&base(), None), "base-root/base-views");
    }

    #[test]
    fn defaults_resolve_to_conventional_layout() {
        let options = ViewEngineOptions::default();
        assert_eq!(resolve_view_path(&options, None), "./views");
        assert_eq!(resolve_partial_path(&options, None), "./views/partials");
        assert_eq!(resolve_layout_path(&options, None), "./views/layouts");
    }

    #[test]
    fn partial_path_extends_view_path() {
        let cases = [
            PartialViewEngineOptions::default(),
            PartialViewEngineOptions::default().partial_path("shared"),
            PartialViewEngineOptions::default().root_path("r").partial_path(""),
            PartialViewEngineOptions::default().view_path("v").partial_path("p"),
        ];
        for overrides in cases {
            let partial = match overrides.partial_path.as_deref() {
                Some(p) if !p.is_empty() => p.to_string(),
                _ => base().partial_path,
            };
            assert_eq!(
                resolve_partial_path(&base(), Some(&overrides)),
                format!("{}/{}", resolve_view_path(&base(), Some(&overrides)), partial)
            );
        }
    }

    #[test]
    fn layout_path_extends_view_path() {
        let overrides = PartialViewEngineOptions::default().root_path("site").layout_path("frames");
        assert_eq!(
            resolve_layout_path(&base(), Some(&overrides)),
            "site/base-views/frames"
        );
    }

    #[test]
    fn resolution_is_idempotent() {
        let overrides = PartialViewEngineOptions::default().view_path("pages");
        let first = resolve_view_path(&base(), Some(&overrides));
        let second = resolve_view_path(&base(), Some(&overrides));
        assert_eq!(first, second);
    }

    #[test]
    fn ext_name_and_layout_follow_override_precedence() {
        let overrides = PartialViewEngineOptions::default().ext_name(".j2").layout("");
        assert_eq!(resolve_ext_name(&base(), Some(&overrides)), ".j2");
        assert_eq!(resolve_layout(&base(), Some(&overrides)), "base-layout");
        assert_eq!(resolve_ext_name(&base(), None), ".base");
    }
}
