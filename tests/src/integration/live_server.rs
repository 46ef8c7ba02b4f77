//! # Live Server Tests
//!
//! Round trips over real sockets: the console bound to an ephemeral loopback
//! port, a real HTTP client on the other end, and the transport-reported peer
//! address driving the filter decision.

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use console_runtime::{ConsoleConfig, ConsoleService};
    use gangway_filter::FilterPolicy;

    /// Bind the console router on an ephemeral port and serve it in the
    /// background. Connection info flows exactly as it does in production.
    async fn serve(config: ConsoleConfig) -> SocketAddr {
        let service = ConsoleService::new(config).expect("config must validate");
        let router = service.router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("ephemeral bind");
        let addr = listener.local_addr().expect("bound socket has an address");

        tokio::spawn(async move {
            axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("server task");
        });

        addr
    }

    fn config_with(policy: FilterPolicy) -> ConsoleConfig {
        let mut config = ConsoleConfig::default();
        config.filter = policy;
        config
    }

    #[tokio::test]
    async fn loopback_client_is_rejected_by_a_remote_only_policy() {
        let addr = serve(config_with(FilterPolicy {
            allow_networks: vec!["10.0.0.0/8".to_string()],
            ..FilterPolicy::default()
        }))
        .await;

        let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::FORBIDDEN);
        assert!(response.bytes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn loopback_client_is_admitted_by_a_loopback_policy() {
        let addr = serve(config_with(FilterPolicy {
            allow_networks: vec!["127.0.0.0/8".to_string()],
            ..FilterPolicy::default()
        }))
        .await;

        let index = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(index.status(), reqwest::StatusCode::OK);
        assert_eq!(index.text().await.unwrap(), "gangway device console\n");

        let health: serde_json::Value = reqwest::get(format!("http://{addr}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["service"], "console-runtime");
    }

    #[tokio::test]
    async fn default_policy_admits_the_local_client() {
        let addr = serve(ConsoleConfig::default()).await;

        let response = reqwest::get(format!("http://{addr}/health"))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }

    #[tokio::test]
    async fn disabled_filter_serves_everyone() {
        let addr = serve(config_with(FilterPolicy {
            disable_filter: true,
            ..FilterPolicy::default()
        }))
        .await;

        let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
    }
}
