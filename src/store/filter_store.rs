use tracing::{debug, instrument};

use super::{Observable, Subscription};

/// Sole owner of the committed filter text. Starts empty.
#[derive(Clone)]
pub struct FilterStore {
    filter: Observable<String>,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStore {
    pub fn new() -> Self {
        Self {
            filter: Observable::new(String::new()),
        }
    }

    /// Replace the filter. Subscribers are notified even if the value is unchanged.
    #[instrument(skip(self, value))]
    pub fn set_filter(&self, value: impl Into<String>) {
        let value = value.into();
        debug!(filter = %value, "Filter committed");
        self.filter.update(|filter| *filter = value);
    }

    pub fn filter(&self) -> String {
        self.filter.get()
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.filter.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.filter.listener_count()
    }
}
