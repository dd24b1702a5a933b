//! Fetch-side contracts: row sources and stale-response supersession.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::debug;

use crate::prelude::*;

/// Supplies rows for a screen given its validated filter parameters.
///
/// Implementations resolve with the full row collection or reject with a
/// classified error. They do not retry and own no loading flag; both
/// belong to the caller.
#[async_trait]
pub trait RowSource: Sync {
    type Filters: Send + Sync;
    type Row: Send;

    async fn fetch_rows(&self, filters: &Self::Filters) -> Result<Vec<Self::Row>>;
}

/// Ticket identifying one submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotone request counter guarding against stale responses.
///
/// Each submission takes a ticket; when a response resolves it is applied
/// only if its ticket is still the most recent one, so a slow response can
/// never overwrite the result of a later submission.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new request, superseding all earlier ones.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether the ticket still identifies the most recent request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Fetch through `source` and hand back the rows only if no newer request
/// was stamped while this one was in flight.
///
/// A superseded response resolves to `Ok(None)` whether it succeeded or
/// failed; its outcome belongs to a submission the user has already
/// abandoned.
pub async fn fetch_latest<S: RowSource>(
    source: &S,
    filters: &S::Filters,
    requests: &RequestSequence,
) -> Result<Option<Vec<S::Row>>> {
    let ticket = requests.begin();
    match source.fetch_rows(filters).await {
        Ok(rows) if requests.is_current(ticket) => Ok(Some(rows)),
        Err(err) if requests.is_current(ticket) => Err(err),
        outcome => {
            debug!(
                superseded = true,
                failed = outcome.is_err(),
                "discarding stale fetch result"
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    struct StaticSource(Vec<u32>);

    #[async_trait]
    impl RowSource for StaticSource {
        type Filters = ();
        type Row = u32;

        async fn fetch_rows(&self, _filters: &()) -> Result<Vec<u32>> {
            Ok(self.0.clone())
        }
    }

    /// Stamps a competing request while its own fetch is in flight.
    struct RacingSource<'a> {
        requests: &'a RequestSequence,
    }

    #[async_trait]
    impl RowSource for RacingSource<'_> {
        type Filters = ();
        type Row = u32;

        async fn fetch_rows(&self, _filters: &()) -> Result<Vec<u32>> {
            self.requests.begin();
            Ok(vec![1, 2, 3])
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RowSource for FailingSource {
        type Filters = ();
        type Row = u32;

        async fn fetch_rows(&self, _filters: &()) -> Result<Vec<u32>> {
            Err(Error::network("connection reset"))
        }
    }

    #[test]
    fn test_tickets_are_monotone() {
        let requests = RequestSequence::new();
        let first = requests.begin();
        let second = requests.begin();
        assert!(!requests.is_current(first));
        assert!(requests.is_current(second));
    }

    #[tokio::test]
    async fn test_current_fetch_returns_rows() {
        let requests = RequestSequence::new();
        let source = StaticSource(vec![7, 8]);
        let rows = fetch_latest(&source, &(), &requests).await.unwrap();
        assert_eq!(rows, Some(vec![7, 8]));
    }

    #[tokio::test]
    async fn test_superseded_fetch_is_discarded() {
        let requests = RequestSequence::new();
        let source = RacingSource {
            requests: &requests,
        };
        let rows = fetch_latest(&source, &(), &requests).await.unwrap();
        assert_eq!(rows, None);
    }

    #[tokio::test]
    async fn test_current_failure_propagates() {
        let requests = RequestSequence::new();
        let result = fetch_latest(&FailingSource, &(), &requests).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_superseded_failure_is_swallowed() {
        struct RacingFailure<'a> {
            requests: &'a RequestSequence,
        }

        #[async_trait]
        impl RowSource for RacingFailure<'_> {
            type Filters = ();
            type Row = u32;

            async fn fetch_rows(&self, _filters: &()) -> Result<Vec<u32>> {
                self.requests.begin();
                Err(Error::network("slow request lost the race"))
            }
        }

        let requests = RequestSequence::new();
        let source = RacingFailure {
            requests: &requests,
        };
        let rows = fetch_latest(&source, &(), &requests).await.unwrap();
        assert_eq!(rows, None);
    }
}
