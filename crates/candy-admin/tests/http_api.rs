use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::Query,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use candy_admin::prelude::*;
use candy_data::FetchError;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn catalog_json() -> Value {
    json!({
        "products": [
            { "id": 1, "name": "Brigadeiro", "category": "Doce", "flavor": "Chocolate", "price": 5.5, "stock": 3 },
            { "id": 2, "name": "Torta de Limão", "category": "Torta", "flavor": "Limão", "price": "40.00", "stock": 12 },
            { "id": 3, "name": null, "category": "Doce", "price": 2 }
        ]
    })
}

fn backend() -> Router {
    Router::new()
        .route("/api/products", get(|| async { Json(catalog_json()) }))
        .route(
            "/api/products/lowstock",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let threshold: i64 = params
                    .get("threshold")
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(-1);
                Json(json!({ "count": if threshold == 10 { 2 } else { 0 } }))
            }),
        )
}

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

#[tokio::test]
async fn test_list_products_decodes_loose_records() {
    let api = HttpStorefrontApi::new(serve(backend()).await);
    let products = api.list_products().await.unwrap();

    assert_eq!(products.len(), 3);
    assert_eq!(products[1].price.as_f64(), Some(40.0));
    assert_eq!(products[2].name, "");
    assert_eq!(products[2].stock, 0);
}

#[tokio::test]
async fn test_low_stock_sends_threshold() {
    let api = HttpStorefrontApi::new(serve(backend()).await);
    assert_eq!(api.low_stock_count(10).await.unwrap(), 2);
    assert_eq!(api.low_stock_count(3).await.unwrap(), 0);
}

#[tokio::test]
async fn test_missing_envelope_fields_default() {
    let app = Router::new()
        .route("/api/products", get(|| async { Json(json!({})) }))
        .route("/api/products/lowstock", get(|| async { Json(json!({})) }));
    let api = HttpStorefrontApi::new(serve(app).await);

    assert!(api.list_products().await.unwrap().is_empty());
    assert_eq!(api.low_stock_count(10).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_order_posts_body_and_reads_total() {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let recorder = seen.clone();
    let app = Router::new().route(
        "/api/orders",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                *recorder.lock().unwrap() = Some(body);
                (StatusCode::CREATED, Json(json!({ "order": { "id": 77, "total": 11.0 } })))
            }
        }),
    );
    let api = HttpStorefrontApi::new(serve(app).await);

    let result = api
        .create_order(&OrderRequest::single(ProductId(1), 2, DEFAULT_CUSTOMER_NAME))
        .await
        .unwrap();

    assert_eq!(result.total, Some(Price::Amount(11.0)));
    assert_eq!(result.total_display(), "11.00");
    assert_eq!(
        seen.lock().unwrap().clone().unwrap(),
        json!({
            "items": [{ "product_id": 1, "quantity": 2 }],
            "customer": { "name": "Store Admin" }
        })
    );
}

#[tokio::test]
async fn test_create_order_without_total() {
    let app = Router::new().route("/api/orders", post(|| async { Json(json!({ "order": {} })) }));
    let api = HttpStorefrontApi::new(serve(app).await);

    let result = api
        .create_order(&OrderRequest::single(ProductId(1), 1, DEFAULT_CUSTOMER_NAME))
        .await
        .unwrap();
    assert_eq!(result.total_display(), "—");
}

#[tokio::test]
async fn test_create_order_string_total() {
    let app = Router::new().route(
        "/api/orders",
        post(|| async {
            (
                StatusCode::CREATED,
                Json(json!({ "order": { "id": 78, "total": "11.00", "status": "pending" } })),
            )
        }),
    );
    let api = HttpStorefrontApi::new(serve(app).await);

    let result = api
        .create_order(&OrderRequest::single(ProductId(1), 2, DEFAULT_CUSTOMER_NAME))
        .await
        .unwrap();
    assert_eq!(result.total, Some(Price::Text("11.00".into())));
    assert_eq!(result.total_display(), "11.00");
}

#[tokio::test]
async fn test_rejected_order_carries_server_text() {
    let app = Router::new().route(
        "/api/orders",
        post(|| async { (StatusCode::BAD_REQUEST, "Insufficient stock for Brigadeiro") }),
    );
    let api = HttpStorefrontApi::new(serve(app).await);

    let err = api
        .create_order(&OrderRequest::single(ProductId(1), 99, DEFAULT_CUSTOMER_NAME))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Http);
    assert_eq!(err.user_message(), "Insufficient stock for Brigadeiro");
}

#[tokio::test]
async fn test_rejected_order_with_empty_body_gets_fallback() {
    let app = Router::new().route("/api/orders", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
    let api = HttpStorefrontApi::new(serve(app).await);

    let err = api
        .create_order(&OrderRequest::single(ProductId(1), 1, DEFAULT_CUSTOMER_NAME))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Failed to create order");
}

#[tokio::test]
async fn test_invalid_order_never_reaches_server() {
    let api = HttpStorefrontApi::new("http://127.0.0.1:9");
    let err = api
        .create_order(&OrderRequest::single(ProductId(1), 1, "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Order(CommerceError::MissingCustomer)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let app = Router::new().route(
        "/api/products",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(catalog_json())
        }),
    );
    let api = HttpStorefrontApi::with_timeout(serve(app).await, Duration::from_millis(100));

    let err = api.list_products().await.unwrap_err();
    assert!(matches!(err, ApiError::Fetch(FetchError::Timeout)));
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn test_controller_renders_page_from_backend() {
    let api = HttpStorefrontApi::new(serve(backend()).await);
    let mut controller = ViewController::new(HtmlSurface::default(), clock());

    dispatch(&mut controller, &api, ViewEvent::Activate).await;
    dispatch(&mut controller, &api, ViewEvent::SelectTab(CategoryFilter::LowStock)).await;

    let html = controller.surface().render_page();
    assert!(html.contains("Brigadeiro"));
    assert!(!html.contains("Torta de Limão"));
    assert!(html.contains("01/06/2025 12:00"));
    assert!(html.contains(r#"id="lowstock-count" class="stat-value">2<"#));
}

#[tokio::test]
async fn test_controller_shows_error_when_backend_down() {
    let app = Router::new().route(
        "/api/products",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db offline") }),
    );
    let api = HttpStorefrontApi::new(serve(app).await);
    let mut controller = ViewController::new(HtmlSurface::default(), clock());

    dispatch(&mut controller, &api, ViewEvent::Activate).await;

    assert_eq!(controller.state().load, LoadState::LoadFailed);
    let html = controller.surface().render_page();
    assert!(html.contains("Unable to load the store&#39;s products"));
    assert!(html.contains("again to retry"));
}
