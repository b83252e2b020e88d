//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/api/pages", get(handlers::pages::get_site_map))
        .route("/api/pages/{page}", get(handlers::pages::get_page))
        .route(
            "/api/pages/{page}/sections/{section}",
            get(handlers::pages::get_section),
        );

    // Rendered pages
    let page_routes = Router::new()
        .route("/", get(handlers::html::get_index))
        .route("/{page}", get(handlers::html::get_page));

    Router::new()
        .route("/healthz", get(handlers::health::get_health))
        .merge(api_routes)
        .merge(page_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer())
                .layer(security::referrer_policy_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use pretty_assertions::assert_eq;
    use rowsite_renderer::PageLayout;
    use rowsite_site::ContentCache;
    use tower::ServiceExt;

    use super::*;

    const HEADER: &str = "business,page,section,title,subtitle,content,image,display,order,content_type";

    const ROWS: &str = "\
default,index,info,Hours,,Open daily,,yes,2,text
default,index,hero,Welcome,Since 1998,,hero.jpg,yes,1,hero
default,menu,mains,Mains,,Adobo,,,1,card
default,secret,teaser,Soon,,,,no,1,text
";

    fn write_source(path: &Path, rows: &str, modified: SystemTime) {
        fs::write(path, format!("{HEADER}\n{rows}")).unwrap();
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(modified).unwrap();
    }

    fn base_time() -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(1_700_000_000)
    }

    fn create_app(rows: &str) -> (tempfile::TempDir, std::path::PathBuf, Router) {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("content.csv");
        write_source(&path, rows, base_time());
        let state = Arc::new(AppState {
            cache: ContentCache::new(path.clone()),
            layout: PageLayout::default(),
            version: "test".to_owned(),
        });
        (temp_dir, path, create_router(state))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (_temp, _path, app) = create_app(ROWS);

        let response = get(app, "/healthz").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_health_without_source() {
        let state = Arc::new(AppState {
            cache: ContentCache::new("/nonexistent/content.csv".into()),
            layout: PageLayout::default(),
            version: "test".to_owned(),
        });

        let response = get(create_router(state), "/healthz").await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_site_map() {
        let (_temp, _path, app) = create_app(ROWS);

        let response = get(app, "/api/pages").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        let pages = body["pages"].as_array().unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0]["filename"], "index.html");
        assert_eq!(pages[1]["filename"], "menu.html");
    }

    #[tokio::test]
    async fn test_page_sections_in_order() {
        let (_temp, _path, app) = create_app(ROWS);

        let response = get(app, "/api/pages/index").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert_eq!(body["filename"], "index.html");
        assert_eq!(body["sections"][0]["section"], "hero");
        assert_eq!(body["sections"][0]["content_type"], "hero");
        assert_eq!(body["sections"][1]["section"], "info");
        assert_eq!(body["sections"][1]["content_type"], "text");
    }

    #[tokio::test]
    async fn test_page_with_extension() {
        let (_temp, _path, app) = create_app(ROWS);

        let response = get(app, "/api/pages/menu.html").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["sections"][0]["content"], "Adobo");
    }

    #[tokio::test]
    async fn test_hidden_page_not_found() {
        let (_temp, _path, app) = create_app(ROWS);

        let response = get(app, "/api/pages/secret").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json(response).await;
        assert_eq!(body["error"], "Page not found");
        assert_eq!(body["path"], "secret.html");
    }

    #[tokio::test]
    async fn test_section() {
        let (_temp, _path, app) = create_app(ROWS);

        let response = get(app.clone(), "/api/pages/index/sections/hero").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert_eq!(body["title"], "Welcome");
        assert_eq!(body["subtitle"], "Since 1998");

        let response = get(app, "/api/pages/index/sections/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_source_is_server_error() {
        let (_temp, path, app) = create_app(ROWS);
        fs::remove_file(&path).unwrap();

        let response = get(app, "/api/pages").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_rendered_index() {
        let (_temp, _path, app) = create_app(ROWS);

        let response = get(app, "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
        assert!(response.headers().contains_key(header::LAST_MODIFIED));
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        let html = text(response).await;
        assert!(html.contains("<title>Kabalen Toronto – Home</title>"));
        let hero = html.find("<section class=\"hero\">").unwrap();
        let info = html.find("<section class=\"text-block\">").unwrap();
        assert!(hero < info);
    }

    #[tokio::test]
    async fn test_rendered_page_not_modified() {
        let (_temp, _path, app) = create_app(ROWS);

        let response = get(app.clone(), "/menu").await;
        let etag = response.headers()[header::ETAG].clone();

        let response = app
            .oneshot(
                Request::get("/menu.html")
                    .header(header::IF_NONE_MATCH, etag)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_edit_visible_on_next_request() {
        let (_temp, path, app) = create_app(ROWS);

        let response = get(app.clone(), "/api/pages/index/sections/hero").await;
        assert_eq!(json(response).await["title"], "Welcome");

        write_source(
            &path,
            "default,index,hero,Mabuhay,,,,yes,1,hero\n",
            base_time() + Duration::from_secs(10),
        );

        let response = get(app, "/api/pages/index/sections/hero").await;
        assert_eq!(json(response).await["title"], "Mabuhay");
    }
}
