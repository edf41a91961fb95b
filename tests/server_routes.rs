//! End-to-end tests for the routed views and their session gates.
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`; each
//! test builds a fresh application state, so session identity never leaks
//! between tests.

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use lawgorithm::config::Settings;
use lawgorithm::server::{create_router, AppState};

fn test_app() -> (Router, AppState) {
    let settings = Settings {
        analysis_delay_ms: 10,
        ..Settings::default()
    };
    let state = AppState::new(&settings);
    (create_router(state.clone()), state)
}

async fn get(router: &Router, path: &str) -> Response<axum::body::Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router is infallible")
}

async fn post_form(router: &Router, path: &str, body: &str) -> Response<axum::body::Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router is infallible")
}

async fn body_text(response: Response<axum::body::Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("responses are UTF-8")
}

fn location(response: &Response<axum::body::Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("redirect carries a Location header")
}

async fn sign_in(router: &Router, email: &str, password: &str) {
    let response = post_form(
        router,
        "/login",
        &format!("email={}&password={}", email, password),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER, "login should redirect");
}

// ============================================================================
// Public routes
// ============================================================================

#[tokio::test]
async fn public_routes_render_for_visitors() {
    let (router, _) = test_app();
    for path in ["/", "/login", "/register", "/lawyer-connect", "/ipc-simplifier", "/case-hierarchy"] {
        let response = get(&router, path).await;
        assert_eq!(response.status(), StatusCode::OK, "GET {} should render", path);
    }
}

#[tokio::test]
async fn landing_page_shows_the_platform_pitch() {
    let (router, _) = test_app();
    let page = body_text(get(&router, "/").await).await;
    assert!(page.contains("Legal Help, Simplified"));
    assert!(page.contains("Lawgorithm"));
}

// ============================================================================
// Session gating
// ============================================================================

#[tokio::test]
async fn protected_routes_redirect_visitors_to_login() {
    let (router, _) = test_app();
    for path in ["/dashboard", "/document-simplifier", "/profile"] {
        let response = get(&router, path).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {} should redirect", path);
        assert_eq!(location(&response), "/login");
    }
}

#[tokio::test]
async fn admin_route_redirects_non_admins_to_dashboard() {
    let (router, _) = test_app();

    let response = get(&router, "/admin").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    sign_in(&router, "john@example.com", "password123").await;
    let response = get(&router, "/admin").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn admin_sees_the_management_tables() {
    let (router, _) = test_app();
    sign_in(&router, "admin@lawgorithm.in", "admin123").await;

    let page = body_text(get(&router, "/admin").await).await;
    assert!(page.contains("Manage Lawyers"));
    assert!(page.contains("Manage IPC Sections"));
    assert!(page.contains("Manage Users"));
    assert!(page.contains("Manage Documents"));
    assert!(page.contains("Adv. Priya Sharma"));
}

#[tokio::test]
async fn logout_is_caught_on_the_next_request() {
    let (router, _) = test_app();
    sign_in(&router, "john@example.com", "password123").await;

    let response = get(&router, "/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_form(&router, "/logout", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    // The identity is gone, so the very next evaluation redirects.
    let response = get(&router, "/dashboard").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

// ============================================================================
// Authentication forms
// ============================================================================

#[tokio::test]
async fn successful_login_lands_on_the_dashboard() {
    let (router, _) = test_app();
    sign_in(&router, "john@example.com", "password123").await;

    let page = body_text(get(&router, "/dashboard").await).await;
    assert!(page.contains("Welcome back, John Doe!"));
}

#[tokio::test]
async fn failed_login_rerenders_with_the_error() {
    let (router, _) = test_app();
    let response = post_form(&router, "/login", "email=john%40example.com&password=wrong").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("invalid email or password"));
    // The submitted email is kept in the form.
    assert!(page.contains("john@example.com"));
}

#[tokio::test]
async fn registration_signs_the_new_account_in() {
    let (router, _) = test_app();
    let response = post_form(
        &router,
        "/register",
        "name=Asha%20Rao&email=asha%40example.com&password=pw",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let page = body_text(get(&router, "/dashboard").await).await;
    assert!(page.contains("Welcome back, Asha Rao!"));
}

#[tokio::test]
async fn duplicate_registration_rerenders_with_the_error() {
    let (router, _) = test_app();
    let response = post_form(
        &router,
        "/register",
        "name=Dup&email=john%40example.com&password=pw",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = body_text(response).await;
    assert!(page.contains("already exists"));
}

// ============================================================================
// Directory views
// ============================================================================

#[tokio::test]
async fn lawyer_directory_applies_combined_filters() {
    let (router, _) = test_app();

    let page = body_text(get(&router, "/lawyer-connect?category=Family%20Law").await).await;
    assert!(page.contains("Adv. Meera Patel"));
    assert!(!page.contains("Adv. Rajesh Kumar"));
    assert!(page.contains("Found 1 lawyer matching your criteria"));

    let page = body_text(get(&router, "/lawyer-connect?location=MUMBAI").await).await;
    assert!(page.contains("Adv. Priya Sharma"));
    assert!(!page.contains("Adv. Meera Patel"));
}

#[tokio::test]
async fn lawyer_directory_renders_the_no_results_state() {
    let (router, _) = test_app();
    let page = body_text(get(&router, "/lawyer-connect?q=maritime").await).await;
    assert!(page.contains("No lawyers found"));
    assert!(page.contains("Found 0 lawyers matching your criteria"));
}

#[tokio::test]
async fn ipc_browser_filters_and_shows_the_detail_panel() {
    let (router, _) = test_app();

    let page = body_text(get(&router, "/ipc-simplifier?q=420").await).await;
    assert!(page.contains("Found 1 section"));
    assert!(page.contains("Cheating and dishonestly inducing delivery of property"));
    assert!(page.contains("Select an IPC Section"));

    let page = body_text(get(&router, "/ipc-simplifier?selected=302").await).await;
    assert!(page.contains("Original Text"));
    assert!(page.contains("Whoever commits murder"));
}

#[tokio::test]
async fn ipc_selection_outlives_a_filter_change() {
    let (router, _) = test_app();

    // Section 302 stays in the detail panel even though the query filtered
    // it out of the visible list.
    let page = body_text(get(&router, "/ipc-simplifier?q=420&selected=302").await).await;
    assert!(page.contains("Found 1 section"));
    assert!(page.contains("Whoever commits murder"));
}

#[tokio::test]
async fn ipc_category_pills_encode_toggle_links() {
    let (router, _) = test_app();
    let page = body_text(get(&router, "/ipc-simplifier?category=Against%20Person").await).await;

    // Three sections match, and the active pill links back to no category.
    assert!(page.contains("Found 3 sections"));
    assert!(page.contains(r#"class="pill active" href="/ipc-simplifier""#));
}

#[tokio::test]
async fn case_guide_switches_tracks() {
    let (router, _) = test_app();

    let page = body_text(get(&router, "/case-hierarchy").await).await;
    assert!(page.contains("FIR Registration"));

    let page = body_text(get(&router, "/case-hierarchy?track=civil").await).await;
    assert!(page.contains("Filing Civil Suit"));
    assert!(!page.contains("FIR Registration"));
}

// ============================================================================
// Document simplifier
// ============================================================================

#[tokio::test]
async fn analysis_completes_and_renders_the_report() {
    let (router, _) = test_app();
    sign_in(&router, "john@example.com", "password123").await;

    let response = post_form(
        &router,
        "/document-simplifier",
        "document_text=This%20agreement%20is%20made%20between%20the%20parties",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("Document Summary"));
    assert!(page.contains("Potential Risk Areas"));
    assert!(page.contains("high priority"));
}

#[tokio::test]
async fn empty_submission_is_rejected_at_the_boundary() {
    let (router, _) = test_app();
    sign_in(&router, "john@example.com", "password123").await;

    let response = post_form(&router, "/document-simplifier", "document_text=%20%20").await;
    let page = body_text(response).await;
    assert!(page.contains("document is empty"));
}

#[tokio::test]
async fn unsupported_file_names_are_rejected_at_the_boundary() {
    let (router, _) = test_app();
    sign_in(&router, "john@example.com", "password123").await;

    let response = post_form(&router, "/document-simplifier", "file_name=payload.exe").await;
    let page = body_text(response).await;
    assert!(page.contains("unsupported file type"));
}

#[tokio::test]
async fn concurrent_submission_reflects_the_pending_task() {
    // A delay long enough that the first task is still pending when the
    // second submission arrives.
    let settings = Settings {
        analysis_delay_ms: 500,
        ..Settings::default()
    };
    let state = AppState::new(&settings);
    let router = create_router(state.clone());
    sign_in(&router, "john@example.com", "password123").await;

    // Occupy the pending slot directly, as an in-flight request would.
    let analyzer = state.analyzer.clone();
    let in_flight = tokio::spawn(async move {
        analyzer
            .analyze(lawgorithm::analysis::DocumentInput::text("first submission"))
            .await
    });
    tokio::task::yield_now().await;
    assert!(state.analyzer.is_pending());

    let response = post_form(&router, "/document-simplifier", "document_text=second").await;
    let page = body_text(response).await;
    assert!(page.contains("Analyzing your document with AI"));

    in_flight
        .await
        .expect("task panicked")
        .expect("first submission should resolve");
}
