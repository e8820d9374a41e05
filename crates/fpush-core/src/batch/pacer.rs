//! Fixed pause between consecutive requests.

use std::thread;
use std::time::Duration;

/// Sleeps `delay` before every request except the first one it sees.
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
    issued: bool,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            issued: false,
        }
    }

    /// Call right before sending a request. Blocks the current thread.
    pub fn wait(&mut self) {
        if self.issued && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.issued = true;
    }
}
