//! Development shortening endpoint speaking the same protocol as the real
//! backend, backed by memory only.

pub mod handlers;
pub mod routes;

use tokio::net::TcpListener;

use crate::state::AppState;

pub use routes::router;

pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    tracing::info!(
        addr = %listener.local_addr()?,
        base_url = %state.base_url,
        "Development shortening endpoint listening"
    );
    axum::serve(listener, router(state)).await
}
