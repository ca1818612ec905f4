//! End-to-end tests: the real router and reqwest client against a fake upstream.

use axum::body::Body;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tcgsearch_api::{create_router, AppState};
use tcgsearch_client::{JustTcgClient, API_KEY_HEADER};
use tcgsearch_config::UpstreamConfig;
use tower::ServiceExt;

const API_KEY: &str = "test-secret-key";

#[derive(Clone, Default)]
struct Recorded {
    games_hits: Arc<Mutex<usize>>,
    card_queries: Arc<Mutex<Vec<Option<String>>>>,
    api_keys: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct Upstream {
    recorded: Recorded,
    cards_status: StatusCode,
}

fn record_key(recorded: &Recorded, headers: &HeaderMap) {
    let key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    recorded.api_keys.lock().unwrap().push(key);
}

async fn fake_games(State(upstream): State<Upstream>, headers: HeaderMap) -> Json<serde_json::Value> {
    record_key(&upstream.recorded, &headers);
    *upstream.recorded.games_hits.lock().unwrap() += 1;
    Json(json!({ "data": [{ "id": 1, "name": "Pokemon", "slug": "pokemon" }] }))
}

async fn fake_cards(
    State(upstream): State<Upstream>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    record_key(&upstream.recorded, &headers);
    upstream.recorded.card_queries.lock().unwrap().push(query);

    if upstream.cards_status != StatusCode::OK {
        return (upstream.cards_status, "upstream exploded").into_response();
    }
    Json(json!({
        "data": [{
            "id": "pikachu-base",
            "name": "Pikachu",
            "game": "Pokemon",
            "set": "Base Set",
            "number": "58/102",
            "rarity": "Common",
            "tcgplayerId": "42382",
            "variants": [
                { "id": "a", "printing": "1st Edition", "language": "English", "price": 80.0 },
                {
                    "id": "b",
                    "printing": "Unlimited",
                    "language": "English",
                    "price": 2.5,
                    "priceChange24hr": 5,
                    "priceChange7d": -3.2,
                    "priceChange30d": 0,
                    "priceHistory": [{ "p": 2.0, "t": 1 }, { "p": 2.5, "t": 2 }]
                }
            ]
        }]
    }))
    .into_response()
}

async fn spawn_upstream(cards_status: StatusCode) -> (String, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/v1/games", get(fake_games))
        .route("/v1/cards", get(fake_cards))
        .with_state(Upstream {
            recorded: recorded.clone(),
            cards_status,
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), recorded)
}

fn app(base_url: String) -> Router {
    let client = JustTcgClient::new(&UpstreamConfig {
        base_url,
        api_key: API_KEY.to_string(),
        ..UpstreamConfig::default()
    })
    .unwrap();
    create_router(AppState::new(Arc::new(client)))
}

async fn get_page(router: &Router, uri: &str, htmx: bool) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri);
    if htmx {
        request = request.header("HX-Request", "true");
    }
    let response = router
        .clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn upstream_failure_renders_empty_state() {
    let (base_url, recorded) = spawn_upstream(StatusCode::INTERNAL_SERVER_ERROR).await;
    let router = app(base_url);

    let (status, body) = get_page(&router, "/?q=Pikachu", false).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Search for cards"));
    assert!(!body.contains("<article"));
    // games list still rendered
    assert!(body.contains("<option value='pokemon'>Pokemon</option>"));

    let queries = recorded.card_queries.lock().unwrap().clone();
    assert_eq!(queries, vec![Some("q=Pikachu".to_string())]);
}

#[tokio::test]
async fn search_with_game_filter_renders_cards() {
    let (base_url, recorded) = spawn_upstream(StatusCode::OK).await;
    let router = app(base_url);

    let (status, body) = get_page(&router, "/?q=Pikachu&game=pokemon", false).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<article"));
    assert!(body.contains("$2.50"));
    assert!(body.contains("Unlimited • English"));
    assert!(body.contains("+5.00%"));
    assert!(body.contains("-3.20%"));
    assert!(body.contains("0.00%"));
    assert!(body.contains("<option value='pokemon' selected>Pokemon</option>"));

    let queries = recorded.card_queries.lock().unwrap().clone();
    assert_eq!(queries, vec![Some("q=Pikachu&game=pokemon".to_string())]);
}

#[tokio::test]
async fn api_key_is_sent_but_never_rendered() {
    let (base_url, recorded) = spawn_upstream(StatusCode::OK).await;
    let router = app(base_url);

    let (_, body) = get_page(&router, "/?q=Pikachu", false).await;
    assert!(!body.contains(API_KEY));

    let keys = recorded.api_keys.lock().unwrap().clone();
    assert!(!keys.is_empty());
    assert!(keys.iter().all(|k| k == API_KEY));
}

#[tokio::test]
async fn empty_query_does_not_search() {
    let (base_url, recorded) = spawn_upstream(StatusCode::OK).await;
    let router = app(base_url);

    let (status, body) = get_page(&router, "/", false).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Search for cards"));
    assert!(recorded.card_queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn games_list_is_cached_between_requests() {
    let (base_url, recorded) = spawn_upstream(StatusCode::OK).await;
    let router = app(base_url);

    get_page(&router, "/", false).await;
    get_page(&router, "/?q=Pikachu", false).await;

    assert_eq!(*recorded.games_hits.lock().unwrap(), 1);
    assert_eq!(recorded.card_queries.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn htmx_request_gets_results_fragment() {
    let (base_url, _) = spawn_upstream(StatusCode::OK).await;
    let router = app(base_url);

    let (status, body) = get_page(&router, "/?q=Pikachu", true).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<form"));
    assert!(body.contains("<article"));
}

#[tokio::test]
async fn json_search_endpoint() {
    let (base_url, _) = spawn_upstream(StatusCode::OK).await;
    let router = app(base_url);

    let (status, body) = get_page(&router, "/api/search", false).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Missing required query parameter: q"));

    let (status, body) = get_page(&router, "/api/search?q=Pikachu", false).await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["data"][0]["price"], "$2.50");
    assert_eq!(value["data"][0]["changes"][0]["class"], "positive");

    let (status, body) = get_page(&router, "/api/games", false).await;
    assert_eq!(status, StatusCode::OK);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["data"][0]["slug"], "pokemon");

    let (status, body) = get_page(&router, "/api/health", false).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn page_responses_vary_on_htmx_header() {
    let (base_url, _) = spawn_upstream(StatusCode::OK).await;
    let router = app(base_url);

    for htmx in [false, true] {
        let mut request = Request::builder().uri("/?q=Pikachu");
        if htmx {
            request = request.header("HX-Request", "true");
        }
        let response = router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(axum::http::header::VARY).unwrap(),
            "HX-Request"
        );
    }
}

#[tokio::test]
async fn full_page_resyncs_on_history_navigation() {
    let (base_url, _) = spawn_upstream(StatusCode::OK).await;
    let router = app(base_url);

    let (_, body) = get_page(&router, "/?q=Pikachu", false).await;
    assert!(body.contains("addEventListener('popstate'"));
    assert!(body.contains("id='game'"));

    let (_, fragment) = get_page(&router, "/?q=Pikachu", true).await;
    assert!(!fragment.contains("popstate"));
}
