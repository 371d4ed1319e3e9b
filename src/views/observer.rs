use std::sync::Arc;

use tracing::info;

use crate::views::Dashboard;

/// Receives the recomputed dashboard after the collection is loaded and after every save.
pub trait Observer: Send + Sync {
    fn refresh(&self, dashboard: &Dashboard);
}

impl<T: Observer + ?Sized> Observer for Arc<T> {
    fn refresh(&self, dashboard: &Dashboard) {
        (**self).refresh(dashboard)
    }
}

/// Reports every refresh through the log.
pub struct LogObserver;

impl Observer for LogObserver {
    fn refresh(&self, dashboard: &Dashboard) {
        let summary = &dashboard.summary;

        info!(
            "Balance [{}] income [{}] expense [{}] with [{}] recent transactions",
            summary.balance,
            summary.income_total,
            summary.expense_total,
            dashboard.recent.len()
        );
    }
}
