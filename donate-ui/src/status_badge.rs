//! Backend liveness indicator.
//!
//! The probe runs once in the background and only ever updates this
//! badge; nothing in the donation flow waits on it.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use anyhow::Result;
use donate_core::{LivenessStatus, PaymentGateway};
use tracing::info;

/// Version label shown when the backend does not report a commit.
const FALLBACK_VERSION: &str = "v1.0";

#[derive(Debug, Default)]
struct BadgeState {
    status: LivenessStatus,
    version: Option<String>,
}

/// Shared handle to the liveness status; clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct StatusBadge {
    inner: Arc<Mutex<BadgeState>>,
}

impl StatusBadge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LivenessStatus {
        self.lock().status
    }

    pub fn version(&self) -> Option<String> {
        self.lock().version.clone()
    }

    pub fn set_alive(
        &self,
        version: Option<String>,
    ) {
        let mut state = self.lock();
        state.status = LivenessStatus::Alive;
        state.version = version;
    }

    pub fn set_error(&self) {
        let mut state = self.lock();
        state.status = LivenessStatus::Error;
        state.version = None;
    }

    fn lock(&self) -> MutexGuard<'_, BadgeState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        match state.status {
            LivenessStatus::Checking => write!(f, "System: Connecting..."),
            LivenessStatus::Alive => write!(
                f,
                "System: Online ({})",
                state.version.as_deref().unwrap_or(FALLBACK_VERSION)
            ),
            LivenessStatus::Error => write!(f, "System: Offline"),
        }
    }
}

/// Probes the backend once and records the result on `badge`.
///
/// The badge is always updated; the returned error only carries the
/// reason the backend was marked offline, for logging.
pub async fn probe_backend(
    gateway: &dyn PaymentGateway,
    badge: &StatusBadge,
) -> Result<()> {
    match gateway.health().await {
        Ok(health) if health.alive => {
            let version = health.version_fragment();
            info!(version = ?version, "backend is alive");
            badge.set_alive(version);
            Ok(())
        }
        Ok(_) => {
            badge.set_error();
            anyhow::bail!("backend reported itself as not alive")
        }
        Err(error) => {
            badge.set_error();
            Err(error.into())
        }
    }
}
