//! Injected time source.
//!
//! The evaluator never reads the system clock directly; callers hand it a
//! [`Clock`] so tests and replays can pin `now`.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use exposure_core::ClockError;

pub trait Clock {
    /// Current instant.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError`] when no trustworthy instant can be produced.
    fn now(&self) -> Result<DateTime<Utc>, ClockError>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(Utc::now())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(self.0)
    }
}

const NO_READING: i64 = i64::MIN;

/// Rejects readings earlier than the latest one seen.
///
/// Equal readings are accepted. Lock-free, so one instance can be shared by
/// concurrent request handlers.
#[derive(Debug)]
pub struct MonotonicClock<C> {
    inner: C,
    last_micros: AtomicI64,
}

impl<C: Clock> MonotonicClock<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            last_micros: AtomicI64::new(NO_READING),
        }
    }
}

impl<C: Clock> Clock for MonotonicClock<C> {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        let current = self.inner.now()?;
        let micros = current.timestamp_micros();
        let previous = self.last_micros.fetch_max(micros, Ordering::AcqRel);

        if previous != NO_READING && micros < previous {
            let previous = DateTime::from_timestamp_micros(previous).ok_or_else(|| {
                ClockError::Unavailable(format!("previous reading {previous}us is out of range"))
            })?;
            return Err(ClockError::WentBackwards { previous, current });
        }
        Ok(current)
    }
}
