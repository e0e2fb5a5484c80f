use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::core::Prober;
use crate::utils::error::{CheckError, Result};

/// Reachability check backed by the system `ping` binary.
///
/// The original scripts invoked `ping` with no arguments beyond the domain,
/// which on Linux never terminates; a packet count is pinned here so every
/// probe completes. Timeout stays whatever the local `ping` defaults to.
#[derive(Clone, Debug)]
pub struct PingProber {
    ping_path: PathBuf,
    count: u32,
}

impl PingProber {
    pub fn new(count: u32) -> Self {
        Self::with_ping_path("ping", count)
    }

    pub fn with_ping_path<T: AsRef<Path>>(ping_path: T, count: u32) -> Self {
        PingProber {
            ping_path: ping_path.as_ref().into(),
            count,
        }
    }

    #[cfg(windows)]
    fn count_flag() -> &'static str {
        "-n"
    }

    #[cfg(not(windows))]
    fn count_flag() -> &'static str {
        "-c"
    }
}

impl Prober for PingProber {
    async fn is_reachable(&self, domain: &str) -> Result<bool> {
        let out = Command::new(&self.ping_path)
            .arg(Self::count_flag())
            .arg(self.count.to_string())
            .arg(domain)
            .output()
            .await
            .map_err(|e| CheckError::ProbeError {
                domain: domain.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("ping {} exited with {:?}", domain, out.status.code());

        Ok(out.status.success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Stub binaries stand in for ping so the exit-code mapping is tested
    // without network access.

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_is_reachable() {
        let prober = PingProber::with_ping_path("/bin/true", 1);
        let result = prober.is_reachable("example.com").await;
        assert!(matches!(result, Ok(true)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_unreachable() {
        let prober = PingProber::with_ping_path("/bin/false", 1);
        let result = prober.is_reachable("example.com").await;
        assert!(matches!(result, Ok(false)));
    }

    #[tokio::test]
    async fn test_missing_binary_is_probe_error() {
        let prober = PingProber::with_ping_path("/nonexistent/ping", 1);
        let result = prober.is_reachable("example.com").await;
        assert!(matches!(result, Err(CheckError::ProbeError { .. })));
    }
}
