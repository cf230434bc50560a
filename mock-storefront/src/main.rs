use std::net::SocketAddr;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    FmtSubscriber::builder()
        .with_env_filter("mock_storefront=debug,tower_http=debug")
        .init();

    tokio::task::spawn(async { mock_storefront::rps_measure_task().await });

    let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
    mock_storefront::run(addr).await;
}
