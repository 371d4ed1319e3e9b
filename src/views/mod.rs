mod aggregate;
mod dashboard;
mod observer;
mod projection;

pub use aggregate::{aggregate, Summary};
pub use dashboard::{ChartSlice, Dashboard, DEFAULT_RECENT_COUNT};
pub use observer::{LogObserver, Observer};
pub use projection::{full, recent, search};
