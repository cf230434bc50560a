//! The simulated storefront user.
//!
//! One scenario iteration is one user action: run a randomly chosen task,
//! then pause for a human-scale think time. Balter repeats the iteration
//! across concurrent users to produce the requested load.

use crate::endpoints::{self, Endpoint};
use balter::prelude::*;
use rand::Rng;
use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Think-time bounds between successive tasks of a single user.
const WAIT_MIN_SECS: f64 = 1.0;
const WAIT_MAX_SECS: f64 = 5.0;

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(Client::new)
}

/// A full user iteration: one random task, then idle.
#[scenario]
pub async fn storefront_user() {
    let _ = run_random_task().await;
    think().await;
}

/// Pick one of the five tasks with equal probability and run it once.
pub async fn run_random_task() -> Result<(), reqwest::Error> {
    let pick = { rand::thread_rng().gen_range(0..endpoints::ALL.len()) };
    debug!(task = endpoints::ALL[pick].name, "running task");
    match pick {
        0 => get_users().await,
        1 => get_shippings().await,
        2 => get_payments().await,
        3 => get_orders().await,
        _ => get_products().await,
    }
}

#[transaction]
pub async fn get_users() -> Result<(), reqwest::Error> {
    fetch(endpoints::USERS).await
}

#[transaction]
pub async fn get_shippings() -> Result<(), reqwest::Error> {
    fetch(endpoints::SHIPPINGS).await
}

#[transaction]
pub async fn get_payments() -> Result<(), reqwest::Error> {
    fetch(endpoints::PAYMENTS).await
}

#[transaction]
pub async fn get_orders() -> Result<(), reqwest::Error> {
    fetch(endpoints::ORDERS).await
}

#[transaction]
pub async fn get_products() -> Result<(), reqwest::Error> {
    fetch(endpoints::PRODUCTS).await
}

/// One GET, no query parameters, no body. Non-2xx statuses surface as
/// errors so the engine counts them as failed transactions.
async fn fetch(endpoint: Endpoint) -> Result<(), reqwest::Error> {
    client()
        .get(endpoint.url())
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// Uniform random think time in `[WAIT_MIN_SECS, WAIT_MAX_SECS]`.
pub fn wait_time(rng: &mut impl Rng) -> Duration {
    Duration::from_secs_f64(rng.gen_range(WAIT_MIN_SECS..=WAIT_MAX_SECS))
}

async fn think() {
    let wait = wait_time(&mut rand::thread_rng());
    sleep(wait).await;
}
