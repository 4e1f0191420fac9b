//! Abstracción de reloj.
//!
//! El poller y el pipeline dependen de este trait en vez de `Utc::now` y
//! `thread::sleep` directos, para que los tests avancen el tiempo sin
//! dormir de verdad.
use std::time::Duration;

use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
    /// Bloquea el hilo llamante durante `interval`. Único punto de
    /// suspensión de todo el crate.
    fn sleep(&mut self, interval: Duration);
}

/// Reloj del sistema.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}
