use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Local;

use crate::time::standard::StandardTime;

/// Anything that can be asked for the current time of day.
pub trait TimeSource: Send + Sync {
    fn sample(&self) -> StandardTime;
}

impl<S: TimeSource + ?Sized> TimeSource for Arc<S> {
    fn sample(&self) -> StandardTime {
        (**self).sample()
    }
}

impl<S: TimeSource + ?Sized> TimeSource for &S {
    fn sample(&self) -> StandardTime {
        (**self).sample()
    }
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimeSource;

impl TimeSource for LocalTimeSource {
    fn sample(&self) -> StandardTime {
        StandardTime::from_timelike(&Local::now())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub StandardTime);

impl TimeSource for FixedTimeSource {
    fn sample(&self) -> StandardTime {
        self.0
    }
}

/// Replays a scripted list of samples, then keeps repeating the last one.
#[derive(Debug)]
pub struct SequenceTimeSource {
    samples: Vec<StandardTime>,
    cursor: AtomicUsize,
}

impl SequenceTimeSource {
    /// Returns `None` for an empty script.
    pub fn from_samples(samples: Vec<StandardTime>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        Some(Self {
            samples,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Number of times `sample` has been called.
    pub fn samples_taken(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl TimeSource for SequenceTimeSource {
    fn sample(&self) -> StandardTime {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        let last = self.samples.len() - 1;
        self.samples[index.min(last)]
    }
}
