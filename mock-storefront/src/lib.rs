//! In-process stand-in for the storefront gateway.
//!
//! Serves the five read-only endpoints the load test exercises, with
//! response bodies shaped like the real services' DTO collections. Every
//! request URI is recorded so tests can assert exactly which paths were
//! hit.

use axum::{debug_handler, http::Uri, routing::get, Json, Router};
use lazy_static::lazy_static;
use metrics::counter;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Duration;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub async fn run(addr: SocketAddr) {
    let app = Router::new()
        .route("/user-service/api/users/", get(list_users))
        .route("/shipping-service/api/favourites/", get(list_favourites))
        .route("/payment-service/api/payments/", get(list_payments))
        .route("/order-service/api/orders/", get(list_orders))
        .route("/product-service/api/products/", get(list_products))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/** Request recording **/

lazy_static! {
    static ref RECORDED: RwLock<Vec<String>> = RwLock::new(Vec::new());
}

static RPS_MEASURE: AtomicU64 = AtomicU64::new(0);

fn record(uri: &Uri) {
    counter!("mock-storefront.requests").increment(1);
    RPS_MEASURE.fetch_add(1, Ordering::Relaxed);
    RECORDED.write().unwrap().push(uri.to_string());
    debug!(%uri, "request");
}

/// Every request URI seen so far, in arrival order.
pub fn recorded_requests() -> Vec<String> {
    RECORDED.read().unwrap().clone()
}

pub fn clear_recorded() {
    RECORDED.write().unwrap().clear();
}

/// Prints the request rate once per second.
pub async fn rps_measure_task() {
    loop {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        let requests = RPS_MEASURE.fetch_min(0, Ordering::Relaxed);
        println!("{requests} RPS");
    }
}

/** Handlers **/

#[debug_handler]
async fn list_users(uri: Uri) -> Json<DtoCollection<UserDto>> {
    record(&uri);
    Json(DtoCollection {
        collection: vec![
            UserDto {
                user_id: 1,
                first_name: "Amelia".into(),
                last_name: "Fournier".into(),
                email: "amelia.fournier@example.com".into(),
                phone: "3001112233".into(),
                image_url: "http://images.example.com/amelia.jpg".into(),
            },
            UserDto {
                user_id: 2,
                first_name: "Tomas".into(),
                last_name: "Vidal".into(),
                email: "tomas.vidal@example.com".into(),
                phone: "3004445566".into(),
                image_url: "http://images.example.com/tomas.jpg".into(),
            },
        ],
    })
}

#[debug_handler]
async fn list_favourites(uri: Uri) -> Json<DtoCollection<FavouriteDto>> {
    record(&uri);
    Json(DtoCollection {
        collection: vec![
            FavouriteDto {
                user_id: 1,
                product_id: 3,
                like_date: "2024-02-12T09:15:00".into(),
            },
            FavouriteDto {
                user_id: 2,
                product_id: 1,
                like_date: "2024-03-01T18:42:00".into(),
            },
        ],
    })
}

#[debug_handler]
async fn list_payments(uri: Uri) -> Json<DtoCollection<PaymentDto>> {
    record(&uri);
    Json(DtoCollection {
        collection: vec![
            PaymentDto {
                payment_id: 11,
                order_id: 7,
                is_payed: true,
                payment_status: "COMPLETED".into(),
            },
            PaymentDto {
                payment_id: 12,
                order_id: 8,
                is_payed: false,
                payment_status: "IN_PROGRESS".into(),
            },
        ],
    })
}

#[debug_handler]
async fn list_orders(uri: Uri) -> Json<DtoCollection<OrderDto>> {
    record(&uri);
    Json(DtoCollection {
        collection: vec![
            OrderDto {
                order_id: 7,
                order_date: "2024-02-12T10:00:00".into(),
                order_desc: "two paperbacks".into(),
                order_fee: 23.80,
            },
            OrderDto {
                order_id: 8,
                order_date: "2024-03-02T16:30:00".into(),
                order_desc: "kitchen scale".into(),
                order_fee: 41.50,
            },
        ],
    })
}

#[debug_handler]
async fn list_products(uri: Uri) -> Json<DtoCollection<ProductDto>> {
    record(&uri);
    Json(DtoCollection {
        collection: vec![
            ProductDto {
                product_id: 1,
                product_title: "Espresso Grinder".into(),
                image_url: "http://images.example.com/grinder.jpg".into(),
                sku: "SKU-GRD-001".into(),
                price_unit: 129.99,
                quantity: 40,
            },
            ProductDto {
                product_id: 3,
                product_title: "Field Notebook".into(),
                image_url: "http://images.example.com/notebook.jpg".into(),
                sku: "SKU-NBK-003".into(),
                price_unit: 7.25,
                quantity: 350,
            },
        ],
    })
}

/** DTOs, shaped like the upstream services' responses **/

#[derive(Serialize)]
pub struct DtoCollection<T> {
    pub collection: Vec<T>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: u32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub image_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteDto {
    pub user_id: u32,
    pub product_id: u32,
    pub like_date: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub payment_id: u32,
    pub order_id: u32,
    pub is_payed: bool,
    pub payment_status: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_id: u32,
    pub order_date: String,
    pub order_desc: String,
    pub order_fee: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub product_id: u32,
    pub product_title: String,
    pub image_url: String,
    pub sku: String,
    pub price_unit: f64,
    pub quantity: u32,
}
