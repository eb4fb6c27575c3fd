use chrono::{Duration, Local, NaiveDateTime};
use std::sync::Mutex;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current wall clock time in the local timezone
    fn get_local_datetime(&self) -> NaiveDateTime;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_local_datetime(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// System whose time only changes when told to. Used by tests and demos
/// that need to step through a day deterministically.
pub struct ManualSys {
    now: Mutex<NaiveDateTime>,
}

impl ManualSys {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl ISys for ManualSys {
    fn get_local_datetime(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
