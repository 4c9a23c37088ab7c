pub mod graphql;
pub mod usecases;

#[cfg(test)]
pub(crate) fn test_state(
    gateway: crate::shared::wms::mock::MockGateway,
) -> (
    crate::shared::state::AppState,
    std::sync::Arc<crate::shared::wms::mock::MockGateway>,
) {
    use crate::shared::config::{AuthConfig, Config, ServerConfig, WmsConfig};
    use crate::system::auth::jwt::testing;

    let gateway = std::sync::Arc::new(gateway);
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 3000,
            static_dir: "dist".into(),
        },
        wms: WmsConfig {
            graphql_url: "http://wms.test/graphql".into(),
            timeout_secs: 5,
        },
        auth: AuthConfig {
            jwt_secret: testing::SECRET.into(),
        },
    };
    (
        crate::shared::state::AppState::new(config, gateway.clone()),
        gateway,
    )
}
