//! Background expiration sweeper
//!
//! Runs [`MemoryCache::scan_expired`] on a fixed interval in a dedicated
//! thread so stale entries are evicted even when the cache sees no writes.
//! The sweeper stops on [`ExpirationSweeper::shutdown`] or when dropped.

use std::hash::Hash;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::{Condvar, Mutex};

use super::core::MemoryCache;
use crate::error::{CommonError, CommonResult};
use crate::testing::time::Clock;

#[derive(Debug, Default)]
struct StopSignal {
    stopped: Mutex<bool>,
    wake: Condvar,
}

impl StopSignal {
    /// Wait up to `timeout`; returns true once a stop was requested
    fn wait(&self, timeout: Duration) -> bool {
        let mut stopped = self.stopped.lock();
        if !*stopped {
            let _ = self.wake.wait_for(&mut stopped, timeout);
        }
        *stopped
    }

    fn request_stop(&self) {
        *self.stopped.lock() = true;
        self.wake.notify_all();
    }
}

/// Handle to a running expiration sweeper thread
#[derive(Debug)]
pub struct ExpirationSweeper {
    name: String,
    signal: Arc<StopSignal>,
    handle: Option<JoinHandle<()>>,
}

impl ExpirationSweeper {
    /// Spawn a sweeper using the cache's configured scan frequency
    ///
    /// # Errors
    /// Returns [`CommonError::Worker`] if the thread cannot be spawned.
    pub fn spawn<K, V, C>(cache: MemoryCache<K, V, C>) -> CommonResult<Self>
    where
        K: Eq + Hash + Clone + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
        C: Clock + Clone,
    {
        let interval = cache.config().expiration_scan_frequency;
        Self::spawn_with_interval(cache, interval)
    }

    /// Spawn a sweeper with an explicit interval
    ///
    /// # Errors
    /// Returns [`CommonError::Worker`] if the interval is zero or the thread
    /// cannot be spawned.
    pub fn spawn_with_interval<K, V, C>(
        cache: MemoryCache<K, V, C>,
        interval: Duration,
    ) -> CommonResult<Self>
    where
        K: Eq + Hash + Clone + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
        C: Clock + Clone,
    {
        let name = format!("cache-sweeper-{}", cache.config().name);
        if interval.is_zero() {
            return Err(CommonError::worker(name, "scan interval must be non-zero"));
        }

        let signal = Arc::new(StopSignal::default());
        let thread_signal = Arc::clone(&signal);

        let handle = thread::Builder::new()
            .name(name.clone())
            .spawn(move || {
                while !thread_signal.wait(interval) {
                    let _ = cache.scan_expired();
                }
            })
            .map_err(|e| CommonError::worker(name.clone(), e.to_string()))?;

        tracing::info!(
            sweeper = %name,
            interval_ms = interval.as_millis() as u64,
            "Cache expiration sweeper started"
        );

        Ok(Self { name, signal, handle: Some(handle) })
    }

    /// Thread name of this sweeper
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the sweeper thread is still running
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the sweeper and wait for its thread to exit
    ///
    /// # Errors
    /// Returns [`CommonError::Worker`] if the sweeper thread panicked.
    pub fn shutdown(mut self) -> CommonResult<()> {
        self.stop()
    }

    fn stop(&mut self) -> CommonResult<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };

        self.signal.request_stop();
        handle
            .join()
            .map_err(|_| CommonError::worker(self.name.clone(), "sweeper thread panicked"))?;

        tracing::info!(sweeper = %self.name, "Cache expiration sweeper stopped");
        Ok(())
    }
}

impl Drop for ExpirationSweeper {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            tracing::error!(error = %e, "Failed to stop cache expiration sweeper");
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache::sweeper.
    use std::time::Instant;

    use super::*;
    use crate::cache::{Expiration, MemoryCacheConfig};

    fn wait_until(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if condition() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        condition()
    }

    #[test]
    fn test_sweeper_evicts_expired_entries() {
        let config = MemoryCacheConfig::builder()
            .name("sweeper-test")
            .expiration_scan_frequency(Duration::from_millis(10))
            .build();
        let cache: MemoryCache<String, i32> = MemoryCache::new(config);
        cache.set_with_expiration("stale".to_string(), 1, Expiration::After(Duration::ZERO));
        cache.set("live".to_string(), 2);

        let sweeper = ExpirationSweeper::spawn(cache.clone()).unwrap();

        assert!(wait_until(Duration::from_secs(2), || cache.len() == 1));
        assert_eq!(cache.try_get(&"live".to_string()), Some(2));
        sweeper.shutdown().unwrap();
    }

    #[test]
    fn test_shutdown_stops_thread_promptly() {
        let cache: MemoryCache<String, i32> = MemoryCache::new(MemoryCacheConfig::default());
        // Hourly interval: shutdown must not wait for the next tick
        let sweeper = ExpirationSweeper::spawn(cache).unwrap();
        assert!(sweeper.is_running());
        assert_eq!(sweeper.name(), "cache-sweeper-default");

        let started = Instant::now();
        sweeper.shutdown().unwrap();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let cache: MemoryCache<String, i32> = MemoryCache::new(MemoryCacheConfig::default());
        let err = ExpirationSweeper::spawn_with_interval(cache, Duration::ZERO).unwrap_err();
        assert!(matches!(err, CommonError::Worker { .. }));
    }

    #[test]
    fn test_drop_stops_sweeper() {
        let cache: MemoryCache<String, i32> = MemoryCache::new(MemoryCacheConfig::default());
        let sweeper = ExpirationSweeper::spawn(cache).unwrap();
        drop(sweeper);
    }
}
