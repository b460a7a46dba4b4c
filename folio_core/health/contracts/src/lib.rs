use std::future::Future;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HealthService: Send + Sync + 'static {
    fn get_status(&self) -> impl Future<Output = HealthStatus> + Send;
}

/// Connectivity of the notification channels. `None` means the channel is
/// not configured and therefore not part of the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub telegram: Option<bool>,
    pub email: Option<bool>,
}

impl HealthStatus {
    pub fn ok(&self) -> bool {
        self.telegram.unwrap_or(true) && self.email.unwrap_or(true)
    }
}

#[cfg(feature = "mock")]
impl MockHealthService {
    pub fn with_get_status(mut self, status: HealthStatus) -> Self {
        self.expect_get_status()
            .once()
            .return_once(move || Box::pin(std::future::ready(status)));
        self
    }
}
