use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{request::Parts, StatusCode};
use std::{fmt, net::SocketAddr};

/// Best-effort client address for request logs: proxy headers first, then
/// the socket peer address.
pub struct ClientIp(String);

impl ClientIp {
    pub fn new(ip: String) -> Self {
        ClientIp(ip)
    }
}

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = ["x-forwarded-for", "x-real-ip"].iter().find_map(|name| {
            let value = parts.headers.get(*name)?.to_str().ok()?;
            // X-Forwarded-For may carry a chain; the first hop is the client
            Some(value.split(',').next().unwrap_or(value).trim().to_string())
        });
        if let Some(ip) = forwarded {
            return Ok(ClientIp(ip));
        }

        let ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "-".to_string());
        Ok(ClientIp(ip))
    }
}

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
