use std::future::{poll_fn, Future};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;

use super::outcome::Outcome;
use crate::data::DataError;

type Fetch<T> = Pin<Box<dyn Future<Output = Result<T, DataError>> + Send>>;

/// Lazy stream that yields exactly one [`Outcome`] and then ends.
///
/// The wrapped fetch starts on the first poll. Dropping the stream
/// before it yields cancels the fetch.
pub struct OutcomeStream<T> {
    fetch: Option<Fetch<T>>,
}

impl<T> OutcomeStream<T> {
    pub fn new<F>(fetch: F) -> Self
    where
        F: Future<Output = Result<T, DataError>> + Send + 'static,
    {
        Self {
            fetch: Some(Box::pin(fetch)),
        }
    }

    /// Whether the single outcome has already been yielded.
    pub fn is_terminated(&self) -> bool {
        self.fetch.is_none()
    }

    /// Await the next item.
    pub async fn next_outcome(&mut self) -> Option<Outcome<T>> {
        poll_fn(|cx| Pin::new(&mut *self).poll_next(cx)).await
    }
}

impl<T> Stream for OutcomeStream<T> {
    type Item = Outcome<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let Some(fetch) = self.fetch.as_mut() else {
            return Poll::Ready(None);
        };

        match fetch.as_mut().poll(cx) {
            Poll::Ready(result) => {
                self.fetch = None;
                if let Err(err) = &result {
                    tracing::debug!(error = %err, "Fetch failed");
                }
                Poll::Ready(Some(result.into()))
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.fetch.is_some());
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn yields_one_outcome_then_ends() {
        let mut stream = OutcomeStream::new(async { Ok::<_, DataError>(7u32) });
        assert_eq!(stream.size_hint(), (1, Some(1)));
        assert_eq!(stream.next_outcome().await, Some(Outcome::Success(7)));
        assert!(stream.is_terminated());
        assert_eq!(stream.next_outcome().await, None);
        assert_eq!(stream.size_hint(), (0, Some(0)));
    }

    #[tokio::test]
    async fn error_becomes_failure() {
        let mut stream =
            OutcomeStream::new(async { Err::<u32, _>(DataError::unavailable("down")) });
        assert_eq!(
            stream.next_outcome().await,
            Some(Outcome::Failure(DataError::unavailable("down")))
        );
        assert_eq!(stream.next_outcome().await, None);
    }

    #[tokio::test]
    async fn fetch_does_not_run_until_polled() {
        let started = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&started);
        let mut stream = OutcomeStream::new(async move {
            flag.store(true, Ordering::SeqCst);
            Ok::<_, DataError>(())
        });
        tokio::task::yield_now().await;
        assert!(!started.load(Ordering::SeqCst));

        stream.next_outcome().await;
        assert!(started.load(Ordering::SeqCst));
    }
}
