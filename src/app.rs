use crate::generator::SELECT_TEAM;
use crate::state::app_state::AppState;
use crate::state::messages::{GenerateForm, Reply};
use crate::ui::home::render_home;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::debug;
use nba_api::DIVISIONS;

const REDDIT_HOST: &str = "reddit.com";
const STREAM_HOST: &str = "reddit-stream.com";
const NO_REFERRER: &str =
    "Bookmark this page and open it from a reddit thread to follow its comments live on reddit-stream.";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/generate/", post(generate))
        .route("/reddit-stream/", get(reddit_stream))
        .with_state(state)
}

async fn home() -> Html<String> {
    Html(render_home(&DIVISIONS))
}

/// A body that is not a readable form gets the same reply as an unpicked team.
async fn generate(
    State(state): State<AppState>,
    form: Result<Form<GenerateForm>, FormRejection>,
) -> Json<Reply> {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            debug!("unreadable generate form: {rejection}");
            return Json(Reply::error(SELECT_TEAM));
        }
    };
    debug!("generate away={:?} home={:?}", form.away, form.home);
    Json(state.generator.generate(&form.away, &form.home).await)
}

async fn reddit_stream(headers: HeaderMap) -> Response {
    match headers.get(header::REFERER).and_then(|v| v.to_str().ok()) {
        Some(referrer) => Redirect::to(&stream_url(referrer)).into_response(),
        None => (StatusCode::OK, NO_REFERRER).into_response(),
    }
}

/// The same thread on the live comment viewer.
fn stream_url(referrer: &str) -> String {
    referrer.replacen(REDDIT_HOST, STREAM_HOST, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::fakes::{FakeSource, RecordingReporter};
    use crate::generator::Generator;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderValue, Method, Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> (AppState, Arc<FakeSource>) {
        let source = Arc::new(FakeSource::scheduled());
        let generator = Generator::new(source.clone(), Arc::new(RecordingReporter::default()));
        (AppState::new(generator), source)
    }

    #[test]
    fn stream_url_swaps_the_host() {
        assert_eq!(
            stream_url("http://www.reddit.com/r/nba/comments/abc123/game_thread/"),
            "http://www.reddit-stream.com/r/nba/comments/abc123/game_thread/"
        );
        assert_eq!(stream_url("http://example.com/"), "http://example.com/");
    }

    #[tokio::test]
    async fn reddit_stream_redirects_to_the_referrer_thread() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::REFERER,
            HeaderValue::from_static("https://www.reddit.com/r/nba/comments/xyz/"),
        );

        let response = reddit_stream(headers).await;

        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://www.reddit-stream.com/r/nba/comments/xyz/"
        );
    }

    #[tokio::test]
    async fn reddit_stream_without_referrer_explains_itself() {
        let response = reddit_stream(HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::LOCATION).is_none());
    }

    #[tokio::test]
    async fn unknown_team_is_a_json_error_without_fetching() {
        let (state, source) = state();
        let form = GenerateForm { away: "???".into(), home: "BOS".into() };

        let Json(reply) = generate(State(state), Ok(Form(form))).await;

        assert_eq!(reply, Reply::error(SELECT_TEAM));
        assert!(source.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_ask_for_a_team() {
        let (state, _) = state();
        let Json(reply) = generate(State(state), Ok(Form(GenerateForm::default()))).await;
        assert_eq!(reply, Reply::error(SELECT_TEAM));
    }

    #[tokio::test]
    async fn valid_matchup_returns_title_and_body() {
        let (state, _) = state();
        let form = GenerateForm { away: "BOS".into(), home: "NYK".into() };

        let Json(reply) = generate(State(state), Ok(Form(form))).await;

        let Reply::Thread(thread) = reply else {
            panic!("expected a thread");
        };
        assert!(thread.title.starts_with("GAME THREAD: Boston Celtics (41-9) @ New York Knicks (20-30)"));
        assert!(thread.body.contains("Example Arena"));
    }

    #[tokio::test]
    async fn home_lists_the_teams() {
        let Html(page) = home().await;
        assert!(page.contains("Portland Trail Blazers"));
    }

    async fn post_generate(content_type: Option<&str>, body: &'static str) -> (StatusCode, serde_json::Value) {
        let (state, _) = state();
        let mut request = Request::builder().method(Method::POST).uri("/generate/");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }

        let response = router(state)
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn bodiless_post_is_a_json_error() {
        let (status, json) = post_generate(None, "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "error": SELECT_TEAM }));
    }

    #[tokio::test]
    async fn non_form_post_is_a_json_error() {
        let (status, json) = post_generate(Some("application/json"), r#"{"away":"BOS"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "error": SELECT_TEAM }));
    }

    #[tokio::test]
    async fn form_post_through_the_router_returns_a_thread() {
        let (status, json) =
            post_generate(Some("application/x-www-form-urlencoded"), "away=BOS&home=NYK").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["title"].as_str().unwrap().starts_with("GAME THREAD: Boston Celtics"));
        assert!(json.get("error").is_none());
    }
}
