//! Clock and random implementations.

use crate::infrastructure::ports::{ClockPort, RandomPort};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - uses real randomness.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_unit(&self) -> f64 {
        use rand::Rng;
        rand::thread_rng().gen::<f64>()
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Scripted random for testing.
///
/// Plays back the given unit draws in order, then returns `fallback` forever.
/// UUIDs stay unique so battle ids never collide.
#[cfg(test)]
pub struct SequenceRandom {
    draws: std::sync::Mutex<std::collections::VecDeque<f64>>,
    fallback: f64,
}

#[cfg(test)]
impl SequenceRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            draws: std::sync::Mutex::new(draws.into_iter().collect()),
            fallback,
        }
    }

    /// Never triggers a chance-based effect.
    pub fn unlucky() -> Self {
        Self::new([], 0.99)
    }
}

#[cfg(test)]
impl RandomPort for SequenceRandom {
    fn gen_unit(&self) -> f64 {
        self.draws
            .lock()
            .ok()
            .and_then(|mut draws| draws.pop_front())
            .unwrap_or(self.fallback)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}
