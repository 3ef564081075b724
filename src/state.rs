use crate::config::CalendarConfig;
use crate::models::ContributionData;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared host state. The snapshot slot is replaced wholesale on refresh;
/// readers clone the `Arc` and never observe a half-built grid.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<CalendarConfig>,
    pub snapshot: Arc<RwLock<Option<Arc<ContributionData>>>>,
}

impl AppState {
    pub fn new(config: CalendarConfig) -> Self {
        Self {
            config: Arc::new(config),
            snapshot: Arc::new(RwLock::new(None)),
        }
    }

    pub async fn current(&self) -> Option<Arc<ContributionData>> {
        self.snapshot.read().await.clone()
    }

    /// Swaps in a fully built snapshot, returning the one it replaced.
    pub async fn replace(&self, data: ContributionData) -> Option<Arc<ContributionData>> {
        let data = Arc::new(data);
        self.snapshot.write().await.replace(data)
    }

    pub async fn clear(&self) -> Option<Arc<ContributionData>> {
        self.snapshot.write().await.take()
    }
}
