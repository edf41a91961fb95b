//! Request handlers for the nine screens.
//!
//! Every handler re-evaluates its view's access policy against the current
//! session identity on every request, so an identity change is caught at the
//! next navigation rather than only when a page first loads.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::analysis::{AnalysisError, DocumentInput};
use crate::directory::{filter_entries, DirectoryView, FilterCriteria};
use crate::models::{CaseTrack, User};
use crate::session::gate::AccessPolicy;

use super::templates::{self, SimplifierState};
use super::AppState;

/// Wrapper turning internal failures into a 500 response.
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!("request failed: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

/// Evaluate a view's access policy; on failure the caller returns the
/// redirect to the policy's fallback route.
fn gate(state: &AppState, policy: AccessPolicy) -> Result<Option<User>, Redirect> {
    let user = state.session.current_user();
    match policy.check(user.as_ref()) {
        Ok(()) => Ok(user),
        Err(fallback) => {
            debug!("gate redirect to {}", fallback);
            Err(Redirect::to(fallback))
        }
    }
}

/// Like [`gate`], for views that render the signed-in user.
fn gate_user(state: &AppState, policy: AccessPolicy) -> Result<User, Redirect> {
    match gate(state, policy)? {
        Some(user) => Ok(user),
        // Authenticated/Admin gates always carry a user; treat a bare pass
        // as unauthenticated rather than panic.
        None => Err(Redirect::to("/login")),
    }
}

pub async fn landing(State(state): State<AppState>) -> Html<String> {
    let user = state.session.current_user();
    Html(templates::landing_page(user.as_ref()))
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login_form(State(state): State<AppState>) -> Html<String> {
    let user = state.session.current_user();
    Html(templates::login_page(user.as_ref(), None, ""))
}

pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.session.login(&form.email, &form.password) {
        Ok(_) => Redirect::to("/dashboard").into_response(),
        Err(err) => {
            let user = state.session.current_user();
            Html(templates::login_page(
                user.as_ref(),
                Some(&err.to_string()),
                &form.email,
            ))
            .into_response()
        }
    }
}

pub async fn register_form(State(state): State<AppState>) -> Html<String> {
    let user = state.session.current_user();
    Html(templates::register_page(user.as_ref(), None, "", ""))
}

pub async fn register_submit(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Response {
    match state.session.register(&form.name, &form.email, &form.password) {
        Ok(_) => Redirect::to("/dashboard").into_response(),
        Err(err) => {
            let user = state.session.current_user();
            Html(templates::register_page(
                user.as_ref(),
                Some(&err.to_string()),
                &form.name,
                &form.email,
            ))
            .into_response()
        }
    }
}

pub async fn logout(State(state): State<AppState>) -> Redirect {
    state.session.logout();
    Redirect::to("/")
}

// ---------------------------------------------------------------------------
// Signed-in views
// ---------------------------------------------------------------------------

pub async fn dashboard(State(state): State<AppState>) -> Response {
    match gate_user(&state, AccessPolicy::Authenticated) {
        Ok(user) => Html(templates::dashboard(&user)).into_response(),
        Err(redirect) => redirect.into_response(),
    }
}

pub async fn profile(State(state): State<AppState>) -> Response {
    match gate_user(&state, AccessPolicy::Authenticated) {
        Ok(user) => Html(templates::profile_page(&user)).into_response(),
        Err(redirect) => redirect.into_response(),
    }
}

pub async fn admin_panel(State(state): State<AppState>) -> Result<Response, AppError> {
    let user = match gate_user(&state, AccessPolicy::Admin) {
        Ok(user) => user,
        Err(redirect) => return Ok(redirect.into_response()),
    };

    let lawyers = state.lawyers.list().await?;
    let sections = state.ipc.list().await?;
    let page = templates::admin_panel(
        &user,
        state.content.stats(),
        &lawyers,
        &sections,
        state.content.users(),
        state.content.documents(),
    );
    Ok(Html(page).into_response())
}

// ---------------------------------------------------------------------------
// Directory views
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct DirectoryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub selected: Option<String>,
}

impl DirectoryParams {
    /// Rebuild filter criteria from the request. Total per request: filter
    /// state lives in the URL, so every navigation is a full recomputation.
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        if let Some(q) = &self.q {
            criteria.set_query(q.clone());
        }
        criteria.category = self.category.clone().filter(|c| !c.is_empty());
        if let Some(location) = &self.location {
            criteria.set_location(location.clone());
        }
        criteria
    }
}

pub async fn lawyer_connect(
    State(state): State<AppState>,
    Query(params): Query<DirectoryParams>,
) -> Result<Response, AppError> {
    let user = state.session.current_user();
    let lawyers = state.lawyers.list().await?;

    let criteria = params.criteria();
    let visible = filter_entries(&lawyers, &criteria);
    debug!("lawyer directory: {} of {} visible", visible.len(), lawyers.len());

    let page = templates::lawyer_directory(
        user.as_ref(),
        &criteria,
        state.lawyers.categories(),
        &visible,
    );
    Ok(Html(page).into_response())
}

pub async fn ipc_simplifier(
    State(state): State<AppState>,
    Query(params): Query<DirectoryParams>,
) -> Result<Response, AppError> {
    let user = state.session.current_user();
    let sections = state.ipc.list().await?;

    let mut view = DirectoryView::new();
    view.criteria = params.criteria();
    if let Some(selected) = &params.selected {
        view.select(selected.clone());
    }

    let visible = view.visible(&sections);
    let selected = view.selected_entry(&sections);

    let page = templates::ipc_browser(
        user.as_ref(),
        &view.criteria,
        state.ipc.categories(),
        &visible,
        selected,
    );
    Ok(Html(page).into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct CaseParams {
    #[serde(default)]
    pub track: Option<String>,
}

pub async fn case_hierarchy(
    State(state): State<AppState>,
    Query(params): Query<CaseParams>,
) -> Html<String> {
    let user = state.session.current_user();
    let track = CaseTrack::from_query(params.track.as_deref().unwrap_or(""));
    let guide = &state.content.case_guide;
    Html(templates::case_guide(
        user.as_ref(),
        track,
        guide.track(track),
        guide.tips(),
    ))
}

// ---------------------------------------------------------------------------
// Document simplifier
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub document_text: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

impl AnalyzeForm {
    /// A named file wins over pasted text, mirroring the two input panels
    /// feeding one task. There is no upload transport, so a file arrives as
    /// a bare name.
    fn input(&self) -> DocumentInput {
        match self.file_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => DocumentInput::file(name, Vec::new()),
            _ => DocumentInput::text(self.document_text.clone().unwrap_or_default()),
        }
    }
}

pub async fn document_simplifier(State(state): State<AppState>) -> Response {
    let user = match gate_user(&state, AccessPolicy::Authenticated) {
        Ok(user) => user,
        Err(redirect) => return redirect.into_response(),
    };

    let page_state = if state.analyzer.is_pending() {
        SimplifierState::Pending
    } else {
        SimplifierState::Idle
    };
    Html(templates::document_simplifier(&user, &page_state)).into_response()
}

pub async fn analyze_document(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let user = match gate_user(&state, AccessPolicy::Authenticated) {
        Ok(user) => user,
        Err(redirect) => return redirect.into_response(),
    };

    let page_state = match state.analyzer.analyze(form.input()).await {
        Ok(report) => {
            return Html(templates::document_simplifier(
                &user,
                &SimplifierState::Completed(&report),
            ))
            .into_response();
        }
        // The pending slot is taken: the submission is a no-op, the view
        // just reflects the task already in flight.
        Err(AnalysisError::Busy) => SimplifierState::Pending,
        Err(err) => {
            let reason = err.to_string();
            return Html(templates::document_simplifier(
                &user,
                &SimplifierState::Rejected(&reason),
            ))
            .into_response();
        }
    };
    Html(templates::document_simplifier(&user, &page_state)).into_response()
}
