use std::sync::Arc;

use axum::{Json, Router, extract::State, response::Html, routing::get};
use tower_http::trace::TraceLayer;

use crate::observability::metrics;
use crate::snapshot::{Quote, SnapshotStore};
use crate::types::symbol::Symbol;

pub struct ApiState {
    pub store: Arc<SnapshotStore>,
}

pub fn create_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(summary_page))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_text))
        .route("/api/gold-spot", get(gold_spot))
        .route("/api/gold-futures", get(gold_futures))
        .route("/api/dxy", get(dxy))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics_text() -> String {
    metrics::gather()
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteResponse {
    price: Option<f64>,
    last_updated: Option<String>,
    last_success: Option<String>,
}

impl From<&Quote> for QuoteResponse {
    fn from(quote: &Quote) -> Self {
        QuoteResponse {
            price: quote.price,
            last_updated: quote.last_updated.map(|t| t.to_rfc3339()),
            last_success: quote.last_success.map(|t| t.to_rfc3339()),
        }
    }
}

async fn quote_response(state: &ApiState, symbol: Symbol) -> Json<QuoteResponse> {
    let snapshot = state.store.read().await;
    Json(QuoteResponse::from(snapshot.quote(symbol)))
}

async fn gold_spot(State(state): State<Arc<ApiState>>) -> Json<QuoteResponse> {
    quote_response(&state, Symbol::GoldSpot).await
}

async fn gold_futures(State(state): State<Arc<ApiState>>) -> Json<QuoteResponse> {
    quote_response(&state, Symbol::GoldFutures).await
}

async fn dxy(State(state): State<Arc<ApiState>>) -> Json<QuoteResponse> {
    quote_response(&state, Symbol::DollarIndex).await
}

async fn summary_page(State(state): State<Arc<ApiState>>) -> Html<String> {
    let snapshot = state.store.read().await;
    let mut body = String::from("<h1>Gold Tracker API</h1>\n");
    for symbol in Symbol::ALL {
        let prefix = match symbol {
            Symbol::DollarIndex => "",
            _ => "$",
        };
        body.push_str(&format!(
            "<p>{}: {}{}</p>\n",
            symbol.label(),
            prefix,
            render_price(snapshot.quote(symbol))
        ));
    }
    Html(body)
}

fn render_price(quote: &Quote) -> String {
    match quote.price {
        Some(price) => price.to_string(),
        None => "Loading...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Snapshot;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router(store: Arc<SnapshotStore>) -> Router {
        create_router(Arc::new(ApiState { store }))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn quote_endpoints_report_null_before_the_first_cycle() {
        let store = Arc::new(SnapshotStore::new());
        for uri in ["/api/gold-spot", "/api/gold-futures", "/api/dxy"] {
            let (status, body) = get_json(router(store.clone()), uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["price"], Value::Null);
            assert_eq!(body["lastUpdated"], Value::Null);
            assert_eq!(body["lastSuccess"], Value::Null);
        }
    }

    #[tokio::test]
    async fn quote_endpoint_reports_the_committed_quote() {
        let store = Arc::new(SnapshotStore::new());
        let now = Utc::now();
        let results = vec![
            (Symbol::GoldSpot, Some(1987.45)),
            (Symbol::GoldFutures, Some(2003.4)),
            (Symbol::DollarIndex, None),
        ];
        store
            .commit(Snapshot::next_cycle(&Snapshot::default(), &results, now))
            .await;

        let (status, body) = get_json(router(store.clone()), "/api/gold-spot").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price"], serde_json::json!(1987.45));
        assert_eq!(body["lastUpdated"], Value::String(now.to_rfc3339()));
        assert_eq!(body["lastSuccess"], Value::String(now.to_rfc3339()));

        // the failed symbol reads null, not an error
        let (status, body) = get_json(router(store), "/api/dxy").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price"], Value::Null);
        assert_eq!(body["lastUpdated"], Value::String(now.to_rfc3339()));
        assert_eq!(body["lastSuccess"], Value::Null);
    }

    #[tokio::test]
    async fn summary_page_renders_loading_placeholders() {
        let store = Arc::new(SnapshotStore::new());
        let response = router(store)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("Gold Tracker API"));
        assert!(page.contains("Gold Spot: $Loading..."));
        assert!(page.contains("DXY Index: Loading..."));
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let store = Arc::new(SnapshotStore::new());
        let response = router(store)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
