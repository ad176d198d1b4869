use axum::{extract::State, Json};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use crate::AppState;

use super::{local_timestamp, AppError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub instance_id: String,
    pub hostname: String,
    pub ip_address: String,
    /// String-typed so existing balancer scripts keep parsing it unchanged.
    pub port: String,
    pub timestamp: NaiveDateTime,
}

// ─── GET /api/instance ───────────────────────────────────────────

pub async fn instance_info(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InstanceInfo>, AppError> {
    let hostname = local_hostname()?;
    let ip_address = resolve_host_address(&hostname).await;

    tracing::info!(instance_id = %state.instance_id, "instance info requested");

    Ok(Json(InstanceInfo {
        instance_id: state.instance_id.clone(),
        hostname,
        ip_address: ip_address.to_string(),
        port: state.port.to_string(),
        timestamp: local_timestamp(),
    }))
}

// ─── Host metadata ───────────────────────────────────────────────

#[cfg(unix)]
fn local_hostname() -> Result<String, AppError> {
    let mut buf = [0u8; 256];

    // SAFETY: `buf` is valid for writes of `buf.len()` bytes for the
    // duration of the call.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr().cast(), buf.len()) };
    if rc != 0 {
        return Err(AppError::Internal(format!(
            "gethostname failed: {}",
            std::io::Error::last_os_error()
        )));
    }

    // May be unterminated if truncated
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
}

#[cfg(not(unix))]
fn local_hostname() -> Result<String, AppError> {
    std::env::var("COMPUTERNAME")
        .map_err(|e| AppError::Internal(format!("hostname unavailable: {e}")))
}

/// First address the hostname resolves to, IPv4 preferred; loopback when
/// resolution fails.
async fn resolve_host_address(hostname: &str) -> IpAddr {
    let loopback = IpAddr::V4(Ipv4Addr::LOCALHOST);

    match tokio::net::lookup_host((hostname, 0)).await {
        Ok(addrs) => {
            let addrs: Vec<IpAddr> = addrs.map(|a| a.ip()).collect();
            addrs
                .iter()
                .find(|ip| ip.is_ipv4())
                .or_else(|| addrs.first())
                .copied()
                .unwrap_or(loopback)
        }
        Err(e) => {
            tracing::warn!(%hostname, error = %e, "could not resolve host address, using loopback");
            loopback
        }
    }
}
