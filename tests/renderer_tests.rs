#[cfg(test)]
mod tests {
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use test_log::test;
    use view_engine::{
        MiniJinjaViewEngine, PartialViewEngineOptions, ViewEngine, ViewEngineOptions,
        ViewEngineSetup,
    };

    /// Writes `files` (relative path → content) under `root`.
    fn write_tree(root: &Path, files: &[(&str, &str)]) {
        for (relative, content) in files {
            let path = root.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
    }

    fn site(files: &[(&str, &str)]) -> (tempfile::TempDir, PartialViewEngineOptions) {
        let dir = tempfile::tempdir().unwrap();
        write_tree(dir.path(), files);
        let options = PartialViewEngineOptions::default()
            .root_path(dir.path().to_str().unwrap())
            .ext_name(".j2");
        (dir, options)
    }

    async fn render_view(template: &str, data: serde_json::Value) -> String {
        let (_dir, options) = site(&[
            ("views/page.j2", template),
            ("views/layouts/main.j2", "{{ body }}"),
        ]);
        let engine = MiniJinjaViewEngine::new(Some(&options));
        engine.install(ViewEngineSetup::new()).await.unwrap();
        engine.view("page", &data, None).await.unwrap()
    }

    #[test(tokio::test)]
    async fn test_case_filters_in_views() {
        assert_eq!(render_view("{{ 'hello world' | camel_case }}", json!({})).await, "helloWorld");
        assert_eq!(render_view("{{ 'hello world' | snake_case }}", json!({})).await, "hello_world");
        assert_eq!(render_view("{{ 'Hello World' | table_case }}", json!({})).await, "hello_worlds");
        assert_eq!(render_view("{{ 'cars' | singular }}", json!({})).await, "car");
    }

    #[test(tokio::test)]
    async fn test_regex_filter_in_views() {
        let template = "{% if name | regex(pattern) %}match{% else %}miss{% endif %}";
        assert_eq!(render_view(template, json!({"name": "Ada", "pattern": "^Ada"})).await, "match");
        assert_eq!(render_view(template, json!({"name": "Ada", "pattern": "^Bob"})).await, "miss");
    }

    #[test(tokio::test)]
    async fn test_invalid_regex_fails_the_view() {
        let (_dir, options) = site(&[
            ("views/page.j2", "{{ 'x' | regex('[') }}"),
            ("views/layouts/main.j2", "{{ body }}"),
        ]);
        let engine = MiniJinjaViewEngine::new(Some(&options));
        engine.install(ViewEngineSetup::new()).await.unwrap();

        let err = engine.view("page", &json!({}), None).await.unwrap_err();
        assert!(matches!(err, view_engine::error::Error::MinijinjaError(_)));
    }

    #[test(tokio::test)]
    async fn test_default_fetch_reads_views_layouts_and_partials_from_disk() {
        let (_dir, options) = site(&[
            ("views/home.j2", "{% include 'nav' %}<p>{{ greeting }}</p>"),
            ("views/partials/nav.j2", "<nav>{{ user }}</nav>"),
            ("views/layouts/main.j2", "<html>{{ body }}</html>"),
        ]);
        let engine = MiniJinjaViewEngine::new(Some(&options));
        engine.install(ViewEngineSetup::new().partial("nav")).await.unwrap();

        let html = engine
            .view("home", &json!({"greeting": "hi", "user": "ada"}), None)
            .await
            .unwrap();
        assert_eq!(html, "<html><nav>ada</nav><p>hi</p></html>");
    }

    #[test(tokio::test)]
    async fn test_missing_partial_fails_install() {
        let (_dir, options) = site(&[("views/home.j2", "home")]);
        let engine = MiniJinjaViewEngine::new(Some(&options));
        let err = engine.install(ViewEngineSetup::new().partial("absent")).await.unwrap_err();
        assert!(matches!(err, view_engine::error::Error::RetrievalError { .. }));
    }

    #[test(tokio::test)]
    async fn test_options_loaded_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        write_tree(
            dir.path(),
            &[
                ("site/pages/index.j2", "index of {{ section }}"),
                ("site/pages/frames/main.j2", "[{{ body }}]"),
            ],
        );
        let config = format!(
            r#"{{"rootPath": "{}", "viewPath": "pages", "layoutPath": "frames", "extName": ".j2"}}"#,
            dir.path().join("site").to_str().unwrap().replace('\\', "\\\\")
        );
        fs::write(dir.path().join("view-engine.json"), config).unwrap();

        let options = ViewEngineOptions::load_config(dir.path()).unwrap();
        let engine = MiniJinjaViewEngine::from_base(view_engine::ViewEngineBase::from_options(
            std::sync::RwLock::new(view_engine::renderer::default_environment()),
            options,
        ));
        engine.install(ViewEngineSetup::new()).await.unwrap();

        let html = engine.view("index", &json!({"section": "docs"}), None).await.unwrap();
        assert_eq!(html, "[index of docs]");
    }

    #[cfg(feature = "handlebars")]
    #[test(tokio::test)]
    async fn test_handlebars_reads_templates_from_disk() {
        use view_engine::HandlebarsViewEngine;

        let dir = tempfile::tempdir().unwrap();
        write_tree(
            dir.path(),
            &[
                ("views/home.hbs", "{{> nav}}{{title}}"),
                ("views/partials/nav.hbs", "<nav/>"),
                ("views/layouts/main.hbs", "<div>{{{body}}}</div>"),
            ],
        );
        let options = PartialViewEngineOptions::default().root_path(dir.path().to_str().unwrap());
        let engine = HandlebarsViewEngine::new(Some(&options));
        engine.install(ViewEngineSetup::new().partial("nav")).await.unwrap();

        let html = engine.view("home", &json!({"title": "Home"}), None).await.unwrap();
        assert_eq!(html, "<div><nav/>Home</div>");
    }
}
