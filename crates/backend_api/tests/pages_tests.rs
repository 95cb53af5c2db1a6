use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use backend_api::config::CookiePolicy;
use backend_api::{create_router, AppState, Locale, ServerConfig, Translations};
use models::Settings;
use tower::ServiceExt;

fn german_router() -> Router {
    let translations = Translations::default().with_catalog(
        Locale::De,
        Translations::parse_catalog("About|Über uns\nHome|Startseite\nPage Not Found|Seite nicht gefunden"),
    );
    let state = AppState::new(Settings::default(), translations, CookiePolicy::default());
    create_router(state, &ServerConfig::default())
}

async fn get(app: Router, request: Request<Body>) -> (Response, String) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    (
        Response::from_parts(parts, Body::empty()),
        String::from_utf8(bytes.to_vec()).unwrap(),
    )
}

fn request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn every_page_renders() {
    let app = create_router(AppState::default(), &ServerConfig::default());
    let pages = [
        "/",
        "/debt-brake",
        "/cost-analysis",
        "/debt-equity",
        "/debt-snowball",
        "/funding-guidance",
        "/covenant-tracking",
        "/about",
        "/donation",
    ];

    for page in pages {
        let (response, body) = get(app.clone(), request(page)).await;
        assert_eq!(response.status(), StatusCode::OK, "page {}", page);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert!(body.contains(r#"<html lang="en">"#), "page {}", page);
    }
}

#[tokio::test]
async fn calculator_page_posts_to_its_endpoint() {
    let app = create_router(AppState::default(), &ServerConfig::default());
    let (_, body) = get(app, request("/debt-snowball")).await;

    assert!(body.contains(r#"data-endpoint="/api/debt-snowball""#));
    assert!(body.contains(r#"data-kind="debt-list""#));
}

#[tokio::test]
async fn lang_query_selects_german() {
    let (_, body) = get(german_router(), request("/about?lang=de")).await;

    assert!(body.contains(r#"<html lang="de">"#));
    assert!(body.contains("<h1>Über uns</h1>"));
}

#[tokio::test]
async fn lang_cookie_selects_german() {
    let request = Request::builder()
        .uri("/")
        .header(header::COOKIE, "lang=de")
        .body(Body::empty())
        .unwrap();
    let (_, body) = get(german_router(), request).await;

    assert!(body.contains(r#"<a href="/">Startseite</a>"#));
}

#[tokio::test]
async fn set_language_redirects_back_with_cookie() {
    let request = Request::builder()
        .uri("/set_language/de")
        .header(header::REFERER, "/cost-analysis")
        .body(Body::empty())
        .unwrap();
    let (response, _) = get(german_router(), request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/cost-analysis");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("lang=de;"));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn set_language_does_not_redirect_off_site() {
    let request = Request::builder()
        .uri("/set_language/de")
        .header(header::HOST, "localhost:5000")
        .header(header::REFERER, "https://evil.example/login")
        .body(Body::empty())
        .unwrap();
    let (response, _) = get(german_router(), request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .starts_with("lang=de;"));
}

#[tokio::test]
async fn set_language_ignores_unsupported_code() {
    let (response, _) = get(german_router(), request("/set_language/fr")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn set_language_honours_secure_cookie_policy() {
    let config = ServerConfig::from_lookup(|key| match key {
        "COOKIE_SECURE" => Some("true".to_string()),
        _ => None,
    });
    let state = AppState::new(Settings::default(), Translations::default(), config.cookie);
    let app = create_router(state, &config);

    let (response, _) = get(app, request("/set_language/en")).await;
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.ends_with("; Secure"));
}

#[tokio::test]
async fn unknown_page_renders_html_404() {
    let (response, body) = get(german_router(), request("/no-such-page?lang=de")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body.contains("<h1>404</h1>"));
    assert!(body.contains("Seite nicht gefunden"));
}

#[tokio::test]
async fn static_files_are_served_from_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();
    let config = ServerConfig {
        static_dir: dir.path().to_path_buf(),
        ..ServerConfig::default()
    };
    let app = create_router(AppState::default(), &config);

    let (response, body) = get(app, request("/static/style.css")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body, "body { margin: 0; }");
}
