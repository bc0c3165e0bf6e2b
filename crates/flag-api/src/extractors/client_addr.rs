//! Origin address extractor
//!
//! Resolves the address used as the submission rate-limit key.

use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::{
    async_trait,
    extract::{ConnectInfo, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use flag_core::normalize_address;

use crate::state::AppState;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Origin address of the request: the first `X-Forwarded-For` entry when
/// forwarded headers are trusted and it is an IP, else the TCP peer, else
/// `"unknown"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub String);

#[async_trait]
impl FromRequestParts<AppState> for ClientAddr {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let forwarded = if state.config().submission.trust_forwarded_for {
            first_forwarded_ip(&parts.headers)
        } else {
            None
        };

        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(Self(resolve(forwarded, peer)))
    }
}

fn first_forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get(FORWARDED_FOR)?
        .to_str()
        .ok()?
        .split(',')
        .next()?
        .trim()
        .parse()
        .ok()
}

fn resolve(forwarded: Option<IpAddr>, peer: Option<IpAddr>) -> String {
    let ip = forwarded.or(peer).map(|ip| ip.to_string());
    normalize_address(ip.as_deref())
}
