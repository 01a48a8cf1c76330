use std::fmt;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use players::{ConfigError, ServerConfig};

#[derive(Debug)]
pub enum ServerError {
    InvalidConfig(ConfigError),
    InvalidAddress(std::net::AddrParseError),
    TcpBind(std::io::Error),
    Run(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::InvalidConfig(e) => write!(f, "invalid configuration: {e}"),
            ServerError::InvalidAddress(e) => write!(f, "invalid bind address: {e}"),
            ServerError::TcpBind(e) => write!(f, "failed to bind listener: {e}"),
            ServerError::Run(e) => write!(f, "server error: {e}"),
        }
    }
}

impl std::error::Error for ServerError {}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().map_err(|e| {
        error!("{}", e);
        ServerError::InvalidConfig(e)
    })?;

    let app = players::create_root_app();

    let tcp_listener = get_tcp_listener(&config).await?;
    let server = axum::serve(tcp_listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal());
    info!("server starting");

    if let Err(e) = server.await {
        error!("server error: {:?}", e);
        return Err(ServerError::Run(e));
    }

    info!("server stopped");
    Ok(())
}

async fn get_tcp_listener(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr().map_err(ServerError::InvalidAddress)?;
    info!("binding to {}", addr);

    TcpListener::bind(addr).await.map_err(|e| {
        error!("failed to bind {}: {}", addr, e);
        ServerError::TcpBind(e)
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {}", e);
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
    info!("shutdown signal received");
}
