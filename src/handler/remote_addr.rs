use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use std::convert::Infallible;
use std::net::SocketAddr;

/// Placeholder used when the router is served without connection info.
pub const UNKNOWN_REMOTE_ADDR: &str = "unknown";

/// Peer address of the accepted connection, formatted as `ip:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAddr(pub String);

impl<S> FromRequestParts<S> for RemoteAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_else(|| UNKNOWN_REMOTE_ADDR.to_string());
        Ok(RemoteAddr(addr))
    }
}
