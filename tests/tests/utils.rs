use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

/// The mock gateway listens where the scenario's default host points.
pub const MOCK_ADDR: &str = "127.0.0.1:8080";

#[allow(unused)]
pub async fn init() {
    static ONCE_LOCK: OnceLock<()> = OnceLock::new();

    let wait = ONCE_LOCK.get().is_none();

    ONCE_LOCK.get_or_init(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            default_panic(info);
            error!("Panic occurred: {info:?}");
            std::process::exit(1);
        }));

        FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_env_filter("storefront_loadtest=debug,mock_storefront=debug,balter=info")
            .init();

        // The mock must outlive any single test's runtime, so it gets its
        // own thread and runtime rather than a tokio::spawn.
        std::thread::spawn(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            let addr: SocketAddr = MOCK_ADDR.parse().unwrap();
            rt.block_on(mock_storefront::run(addr));
        });
    });

    if wait {
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
}

/// Tests assert against a process-global request recorder, so they take
/// this guard to avoid interleaving.
#[allow(unused)]
pub async fn serial() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().await
}
