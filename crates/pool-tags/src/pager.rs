use crate::error::Error;
use crate::fetcher::{PairSource, PAGE_SIZE};
use crate::types::PoolPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagerState {
    Fetching,
    Done,
}

/// Cursor-paginated sweep over a pair source.
///
/// The cursor is the timestamp of the last raw pair of the previous page,
/// starting at 0. Pairs later dropped by validation still advance it.
pub struct Pager<'a, S: PairSource + ?Sized> {
    source: &'a S,
    cursor: u64,
    state: PagerState,
}

impl<'a, S: PairSource + ?Sized> Pager<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            cursor: 0,
            state: PagerState::Fetching,
        }
    }

    /// Fetch the next raw page, or `None` once the sweep is complete.
    ///
    /// Only a full page (exactly `PAGE_SIZE` pairs) continues the sweep. A
    /// shorter page usually means end-of-data, but a transient partial
    /// response is indistinguishable at this layer; the terminal page size
    /// is logged so early termination can be audited.
    pub async fn next_page(&mut self) -> Result<Option<Vec<PoolPair>>, Error> {
        if self.state == PagerState::Done {
            return Ok(None);
        }

        let page = self.source.fetch_page(self.cursor).await?;

        // Siblings sharing the last pair's timestamp across a page boundary
        // are skipped by the timestamp_gt cursor.
        if let Some(last) = page.last() {
            self.cursor = last.timestamp;
        }
        if page.len() < PAGE_SIZE {
            tracing::debug!(pairs = page.len(), "page below limit, ending sweep");
            self.state = PagerState::Done;
        }
        Ok(Some(page))
    }
}
