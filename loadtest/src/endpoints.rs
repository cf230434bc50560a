//! The storefront endpoints exercised by the load test.

use std::sync::OnceLock;

/// Gateway address targeted when no override is given.
pub const DEFAULT_HOST: &str = "http://localhost:8080";

static BASE_URL: OnceLock<String> = OnceLock::new();

/// Override the gateway address for the whole process. The first call
/// wins; later calls are ignored so a running scenario never observes a
/// host change mid-flight.
pub fn set_base_url(host: &str) {
    let _ = BASE_URL.set(normalize_host(host).to_string());
}

pub fn base_url() -> &'static str {
    BASE_URL.get().map(String::as_str).unwrap_or(DEFAULT_HOST)
}

/// Endpoint paths already start with `/`, so a trailing slash on the host
/// would produce `//` in the request path.
fn normalize_host(host: &str) -> &str {
    host.trim_end_matches('/')
}

/// One GET task against a storefront service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub path: &'static str,
}

impl Endpoint {
    pub fn url(&self) -> String {
        self.url_for(base_url())
    }

    pub fn url_for(&self, host: &str) -> String {
        format!("{}{}", host, self.path)
    }
}

pub const USERS: Endpoint = Endpoint {
    name: "users",
    path: "/user-service/api/users/",
};

pub const SHIPPINGS: Endpoint = Endpoint {
    name: "shippings",
    path: "/shipping-service/api/favourites/",
};

pub const PAYMENTS: Endpoint = Endpoint {
    name: "payments",
    path: "/payment-service/api/payments/",
};

pub const ORDERS: Endpoint = Endpoint {
    name: "orders",
    path: "/order-service/api/orders/",
};

pub const PRODUCTS: Endpoint = Endpoint {
    name: "products",
    path: "/product-service/api/products/",
};

/// Every task a simulated user picks from, with equal probability.
pub const ALL: [Endpoint; 5] = [USERS, SHIPPINGS, PAYMENTS, ORDERS, PRODUCTS];
