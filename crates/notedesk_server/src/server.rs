//! Server run loop.
//!
//! # Responsibility
//! - Open the configured database and bind the listener.
//! - Serve until Ctrl+C / SIGTERM, then drain in-flight requests.

use crate::config::ServerConfig;
use crate::http::router;
use crate::state::AppState;
use log::{error, info};
use notedesk_core::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;

#[derive(Debug)]
pub enum ServerError {
    Db(DbError),
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    Io(std::io::Error),
}

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "database startup failed [{}]: {err}", err.code()),
            Self::Bind { addr, source } => write!(f, "failed to bind {addr}: {source}"),
            Self::Io(err) => write!(f, "server i/o failure: {err}"),
        }
    }
}

impl Error for ServerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Bind { source, .. } => Some(source),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<DbError> for ServerError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<std::io::Error> for ServerError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Opens storage, binds `config.bind_addr` and serves until a shutdown
/// signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let conn = config.database.open()?;
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    info!(
        "event=server_config module=server status=ok database={} log_level={}",
        config.database, config.log_level
    );
    serve(listener, AppState::new(conn), shutdown_signal()).await
}

/// Serves the router on an already-bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let local_addr = listener.local_addr()?;
    info!("event=server_start module=server status=ok addr={local_addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("event=server_stop module=server status=ok addr={local_addr}");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("event=shutdown_signal module=server status=ok signal=ctrl_c"),
            Err(err) => {
                error!("event=shutdown_signal module=server status=error signal=ctrl_c error={err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("event=shutdown_signal module=server status=ok signal=terminate");
            }
            Err(err) => {
                error!(
                    "event=shutdown_signal module=server status=error signal=terminate error={err}"
                );
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
}
