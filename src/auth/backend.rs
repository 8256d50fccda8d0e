use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Request/response contract behind the login flow.
///
/// Every call is a single request that either completes or fails; a future
/// dropped before completion has no further effect.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, phone: &str, password: &str) -> Result<()>;

    /// Send a one-time code to `phone`
    async fn request_otp(&self, phone: &str) -> Result<()>;

    async fn verify_otp(&self, phone: &str, code: &str) -> Result<()>;

    async fn reset_password(&self, phone: &str, new_password: &str) -> Result<()>;

    /// Name of the backend, for logs
    fn backend_name(&self) -> &'static str;
}

/// Accepts every request after a fixed delay standing in for network latency
#[derive(Debug, Clone)]
pub struct SimulatedAuthBackend {
    delay: Duration,
}

impl SimulatedAuthBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn wait(&self, what: &str, phone: &str) {
        debug!("Simulating {} for {} ({:?})", what, phone, self.delay);
        tokio::time::sleep(self.delay).await;
    }
}

impl Default for SimulatedAuthBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(1200))
    }
}

#[async_trait]
impl AuthBackend for SimulatedAuthBackend {
    async fn login(&self, phone: &str, _password: &str) -> Result<()> {
        self.wait("login", phone).await;
        Ok(())
    }

    async fn request_otp(&self, phone: &str) -> Result<()> {
        self.wait("OTP request", phone).await;
        Ok(())
    }

    async fn verify_otp(&self, phone: &str, _code: &str) -> Result<()> {
        self.wait("OTP verification", phone).await;
        Ok(())
    }

    async fn reset_password(&self, phone: &str, _new_password: &str) -> Result<()> {
        self.wait("password reset", phone).await;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "simulated"
    }
}
