use std::future::Future;
use std::pin::Pin;

use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use shared::{BackendDescriptor, BackendId, BackendStatus};

/// How long a single probe may run before its backend counts as offline.
pub const PROBE_TIMEOUT_MS: u32 = 10_000;

/// Boxed future returned by an injected health probe.
pub type ProbeFuture = Pin<Box<dyn Future<Output = Result<bool, String>>>>;

/// Poll every catalog entry concurrently and return the settled catalog.
///
/// Each entry gets its own result slot: a probe that resolves false or fails
/// marks that entry `Offline` without touching the others, and the join
/// itself never errors.
pub(crate) async fn poll_catalog<F>(
    entries: Vec<BackendDescriptor>,
    probe: F,
) -> Vec<BackendDescriptor>
where
    F: Fn(BackendId) -> ProbeFuture,
{
    let polls = entries.into_iter().map(|mut entry| {
        let result = probe(entry.id);
        async move {
            entry.status = BackendStatus::from_probe(result.await);
            entry
        }
    });
    future::join_all(polls).await
}

/// Race a probe against a bounded wait. A hung probe would otherwise leave
/// its entry stuck at `Checking` until the next poll.
pub(crate) async fn probe_with_timeout(result: ProbeFuture) -> Result<bool, String> {
    let timeout = Box::pin(TimeoutFuture::new(PROBE_TIMEOUT_MS));
    match future::select(result, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(format!("probe timed out after {PROBE_TIMEOUT_MS}ms")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::task::{Context, Poll};

    fn probe_fixture(
        google: Result<bool, String>,
        supabase: Result<bool, String>,
    ) -> impl Fn(BackendId) -> ProbeFuture {
        move |id| {
            let outcome = match id {
                BackendId::Google => google.clone(),
                BackendId::Supabase => supabase.clone(),
            };
            Box::pin(ready(outcome)) as ProbeFuture
        }
    }

    /// Returns `Poll::Pending` once before resolving, so the other slot is
    /// guaranteed to settle first.
    struct YieldOnce {
        yielded: bool,
        outcome: Option<Result<bool, String>>,
    }

    impl YieldOnce {
        fn new(outcome: Result<bool, String>) -> Self {
            Self {
                yielded: false,
                outcome: Some(outcome),
            }
        }
    }

    impl Future for YieldOnce {
        type Output = Result<bool, String>;

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
            if !self.yielded {
                self.yielded = true;
                cx.waker().wake_by_ref();
                return Poll::Pending;
            }
            Poll::Ready(self.outcome.take().expect("polled after completion"))
        }
    }

    #[test]
    fn statuses_settle_from_probe_results() {
        let polled = block_on(poll_catalog(
            BackendDescriptor::catalog(),
            probe_fixture(Ok(true), Ok(false)),
        ));
        assert_eq!(polled[0].id, BackendId::Google);
        assert_eq!(polled[0].status, BackendStatus::Online);
        assert_eq!(polled[1].id, BackendId::Supabase);
        assert_eq!(polled[1].status, BackendStatus::Offline);
        assert!(polled
            .iter()
            .all(|entry| entry.status != BackendStatus::Checking));
    }

    #[test]
    fn failing_probe_marks_only_its_own_entry_offline() {
        let polled = block_on(poll_catalog(
            BackendDescriptor::catalog(),
            probe_fixture(Err("connection refused".to_string()), Ok(true)),
        ));
        assert_eq!(polled[0].status, BackendStatus::Offline);
        assert_eq!(polled[1].status, BackendStatus::Online);
    }

    #[test]
    fn instant_failure_does_not_cancel_a_pending_slot() {
        let polled = block_on(poll_catalog(BackendDescriptor::catalog(), |id| match id {
            BackendId::Google => Box::pin(YieldOnce::new(Ok(true))) as ProbeFuture,
            BackendId::Supabase => {
                Box::pin(ready(Err("boom".to_string()))) as ProbeFuture
            }
        }));
        assert_eq!(polled[0].status, BackendStatus::Online);
        assert_eq!(polled[1].status, BackendStatus::Offline);
    }
}
