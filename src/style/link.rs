//! Hyperlinks carried by styles.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::trace;

static NEXT_LINK_ID: AtomicU64 = AtomicU64::new(1);

/// A hyperlink target plus the id that ties its begin and end sequences together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    url: Arc<str>,
    id: u64,
}

impl Link {
    /// Create a link with a fresh process-unique id.
    pub fn new(url: impl Into<Arc<str>>) -> Self {
        let id = NEXT_LINK_ID.fetch_add(1, Ordering::Relaxed);
        let url = url.into();
        trace!(id, url = %url, "Allocated link id");
        Self { url, id }
    }

    /// Create a link with an explicit id.
    pub fn with_id(url: impl Into<Arc<str>>, id: u64) -> Self {
        Self {
            url: url.into(),
            id,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Same id, different target.
    pub(crate) fn retarget(&self, url: &str) -> Self {
        Self {
            url: url.into(),
            id: self.id,
        }
    }
}
