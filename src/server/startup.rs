use std::{net::SocketAddr, time::Duration};

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware, Router,
};
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
};

use crate::server::{
    config::Config,
    controller::system::route_not_found,
    error::{config::ConfigError, AppError},
    middleware::{logging::log_request, panic::panic_handler},
    router::router,
    state::AppState,
};

const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the cross-origin policy from the configured origin allow-list.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing the configured origins with credentials
/// - `Err(AppError::ConfigErr)` - An origin is not a valid header value
pub fn build_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "CORS_ORIGINS".to_string(),
                value: origin.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true))
}

/// Assembles the full application: routes, fallbacks and middleware stack.
///
/// Layers from outermost to innermost: panic catcher, request logging, CORS.
///
/// # Arguments
/// - `config` - Application configuration (CORS origins, environment mode)
/// - `state` - Shared application state
///
/// # Returns
/// - `Ok(Router)` - Application ready to be served
/// - `Err(AppError::ConfigErr)` - Invalid CORS configuration
pub fn build_app(config: &Config, state: AppState) -> Result<Router, AppError> {
    let app = router()
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(build_cors(config)?)
        .layer(middleware::from_fn(log_request))
        .layer(CatchPanicLayer::custom(panic_handler(config.environment)))
        .with_state(state);

    Ok(app)
}

/// Loads the TLS certificate and key when both files are present.
///
/// # Returns
/// - `Ok(Some(RustlsConfig))` - TLS material loaded
/// - `Ok(None)` - Either file is missing, HTTPS is not started
/// - `Err(AppError::IoErr)` - Files exist but cannot be read or parsed
pub async fn load_tls_config(config: &Config) -> Result<Option<RustlsConfig>, AppError> {
    if !config.tls_material_present() {
        tracing::warn!("SSL certificates not found. HTTPS not started.");
        return Ok(None);
    }

    // Err only means a provider is already installed
    let _ = rustls::crypto::ring::default_provider().install_default();

    let tls = RustlsConfig::from_pem_file(&config.tls_cert_path, &config.tls_key_path).await?;

    Ok(Some(tls))
}

/// Serves the application over HTTP and, when TLS material exists, HTTPS.
///
/// Both listeners stop gracefully on Ctrl+C or SIGTERM.
pub async fn serve(config: &Config, app: Router) -> Result<(), AppError> {
    let tls = load_tls_config(config).await?;

    let http_handle = Handle::new();
    let https_handle = Handle::new();
    tokio::spawn(shutdown_signal(vec![
        http_handle.clone(),
        https_handle.clone(),
    ]));

    let http_addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let http = axum_server::bind(http_addr)
        .handle(http_handle)
        .serve(app.clone().into_make_service());
    tracing::info!("HTTP server running at http://{}", http_addr);

    match tls {
        Some(tls) => {
            let https_addr = SocketAddr::from(([0, 0, 0, 0], config.https_port));
            let https = axum_server::bind_rustls(https_addr, tls)
                .handle(https_handle)
                .serve(app.into_make_service());
            tracing::info!("HTTPS server running at https://{}", https_addr);

            tokio::try_join!(http, https)?;
        }
        None => http.await?,
    }

    Ok(())
}

/// Serves until shutdown, then closes the database connection.
///
/// The connection is closed even when a listener fails, the serve error takes
/// precedence over a close error.
pub async fn serve_and_close(
    config: &Config,
    app: Router,
    db: sea_orm::DatabaseConnection,
) -> Result<(), AppError> {
    let served = serve(config, app).await;

    tracing::info!("Closing database connection");
    let closed = db.close().await;

    served?;
    closed?;

    Ok(())
}

async fn shutdown_signal(handles: Vec<Handle>) {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    for handle in handles {
        handle.graceful_shutdown(Some(SHUTDOWN_GRACE_PERIOD));
    }
}
