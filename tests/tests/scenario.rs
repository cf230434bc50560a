mod utils;
#[allow(unused)]
use utils::*;

use storefront_loadtest::endpoints;
use storefront_loadtest::session::{
    get_orders, get_payments, get_products, get_shippings, get_users, run_random_task,
};

#[tokio::test]
async fn each_task_issues_one_get_to_its_fixed_path() -> anyhow::Result<()> {
    init().await;
    let _guard = serial().await;

    mock_storefront::clear_recorded();
    get_users().await?;
    assert_eq!(
        mock_storefront::recorded_requests(),
        ["/user-service/api/users/"]
    );

    mock_storefront::clear_recorded();
    get_shippings().await?;
    assert_eq!(
        mock_storefront::recorded_requests(),
        ["/shipping-service/api/favourites/"]
    );

    mock_storefront::clear_recorded();
    get_payments().await?;
    assert_eq!(
        mock_storefront::recorded_requests(),
        ["/payment-service/api/payments/"]
    );

    mock_storefront::clear_recorded();
    get_orders().await?;
    assert_eq!(
        mock_storefront::recorded_requests(),
        ["/order-service/api/orders/"]
    );

    mock_storefront::clear_recorded();
    get_products().await?;
    assert_eq!(
        mock_storefront::recorded_requests(),
        ["/product-service/api/products/"]
    );

    Ok(())
}

#[tokio::test]
async fn random_task_issues_exactly_one_request_per_invocation() -> anyhow::Result<()> {
    init().await;
    let _guard = serial().await;

    mock_storefront::clear_recorded();
    for _ in 0..100 {
        run_random_task().await?;
    }

    let recorded = mock_storefront::recorded_requests();
    assert_eq!(recorded.len(), 100);

    let known: Vec<&str> = endpoints::ALL.iter().map(|e| e.path).collect();
    for path in &recorded {
        assert!(
            known.contains(&path.as_str()),
            "unexpected request path: {path}"
        );
    }

    // 100 uniform draws over 5 tasks; a missing task at this point means
    // selection is broken, not bad luck.
    for path in &known {
        assert!(
            recorded.iter().any(|r| r == path),
            "task never selected: {path}"
        );
    }

    Ok(())
}

#[cfg(feature = "integration")]
mod full_run {
    use super::*;

    use balter::prelude::*;
    use std::num::NonZeroU32;
    use std::time::Duration;
    use storefront_loadtest::storefront_user;

    #[tokio::test]
    async fn user_session_under_load_touches_only_known_paths() {
        init().await;
        let _guard = serial().await;

        mock_storefront::clear_recorded();
        let _stats = storefront_user()
            .tps(NonZeroU32::new(10).unwrap())
            .duration(Duration::from_secs(15))
            .await;

        let recorded = mock_storefront::recorded_requests();
        assert!(!recorded.is_empty());

        let known: Vec<&str> = endpoints::ALL.iter().map(|e| e.path).collect();
        for path in &recorded {
            assert!(
                known.contains(&path.as_str()),
                "unexpected request path: {path}"
            );
        }
    }
}
