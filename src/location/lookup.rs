use std::sync::Arc;

use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use crate::app::{Result, ShopError};
use crate::domain::{GeocodingResult, LocationCoordinate};
use crate::geocoding::AddressResolver;

#[derive(Debug)]
pub struct LookupOutcome {
    pub coordinate: LocationCoordinate,
    pub result: Result<Vec<GeocodingResult>>,
}

/// An address resolution running on a background task.
///
/// The task belongs to whoever holds the handle: dropping the handle aborts
/// the lookup if it has not finished.
pub struct AddressLookup {
    coordinate: LocationCoordinate,
    handle: JoinHandle<()>,
    rx: oneshot::Receiver<Result<Vec<GeocodingResult>>>,
}

impl AddressLookup {
    pub fn spawn(
        resolver: Arc<dyn AddressResolver + Send + Sync>,
        coordinate: LocationCoordinate,
    ) -> Self {
        let (tx, rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let result = resolver.resolve_address(coordinate).await;
            // Receiver gone means the session ended; nothing to report to.
            let _ = tx.send(result);
        });

        Self {
            coordinate,
            handle,
            rx,
        }
    }

    pub fn coordinate(&self) -> LocationCoordinate {
        self.coordinate
    }

    /// Non-blocking check, for use from a UI tick.
    pub fn poll_outcome(&mut self) -> Option<LookupOutcome> {
        match self.rx.try_recv() {
            Ok(result) => Some(self.outcome(result)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(self.outcome(Err(cancelled()))),
        }
    }

    pub async fn wait(&mut self) -> LookupOutcome {
        let result = match (&mut self.rx).await {
            Ok(result) => result,
            Err(_) => Err(cancelled()),
        };
        self.outcome(result)
    }

    fn outcome(&self, result: Result<Vec<GeocodingResult>>) -> LookupOutcome {
        LookupOutcome {
            coordinate: self.coordinate,
            result,
        }
    }
}

impl Drop for AddressLookup {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!("Cancelling address lookup for {}", self.coordinate);
            self.handle.abort();
        }
    }
}

fn cancelled() -> ShopError {
    ShopError::Other("address lookup was cancelled".to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;

    struct SlowResolver {
        completed: Arc<AtomicBool>,
    }

    #[async_trait]
    impl AddressResolver for SlowResolver {
        async fn resolve_address(
            &self,
            _coordinate: LocationCoordinate,
        ) -> Result<Vec<GeocodingResult>> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            self.completed.store(true, Ordering::SeqCst);
            Ok(vec![GeocodingResult::new("too late")])
        }
    }

    struct InstantResolver;

    #[async_trait]
    impl AddressResolver for InstantResolver {
        async fn resolve_address(
            &self,
            _coordinate: LocationCoordinate,
        ) -> Result<Vec<GeocodingResult>> {
            Ok(vec![GeocodingResult::new("10 Downing St")])
        }
    }

    #[tokio::test]
    async fn test_wait_delivers_result() {
        let coordinate = LocationCoordinate::new(51.5034, -0.1276);
        let mut lookup = AddressLookup::spawn(Arc::new(InstantResolver), coordinate);

        let outcome = lookup.wait().await;
        assert_eq!(outcome.coordinate, coordinate);
        assert_eq!(outcome.result.unwrap()[0].formatted_address, "10 Downing St");
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_is_empty_until_done() {
        let completed = Arc::new(AtomicBool::new(false));
        let resolver = Arc::new(SlowResolver {
            completed: completed.clone(),
        });
        let mut lookup = AddressLookup::spawn(resolver, LocationCoordinate::new(0.0, 0.0));

        tokio::task::yield_now().await;
        assert!(lookup.poll_outcome().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_task() {
        let completed = Arc::new(AtomicBool::new(false));
        let resolver = Arc::new(SlowResolver {
            completed: completed.clone(),
        });

        let lookup = AddressLookup::spawn(resolver, LocationCoordinate::new(0.0, 0.0));
        tokio::task::yield_now().await;
        drop(lookup);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(!completed.load(Ordering::SeqCst));
    }
}
