use tracing::instrument;

use crate::store::FilterStore;

/// Filter entry form.
///
/// The buffer is separate from the committed filter: what is typed only
/// takes effect on submit, and stays in the field afterwards.
pub struct FilterForm {
    filter: FilterStore,
    buffer: String,
}

impl FilterForm {
    pub fn new(filter: FilterStore) -> Self {
        Self {
            filter,
            buffer: String::new(),
        }
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Commit the buffer verbatim. Empty is valid and matches everyone.
    #[instrument(skip(self))]
    pub fn submit(&mut self) {
        self.filter.set_filter(self.buffer.clone());
    }
}
