#[cfg(test)]
#[path = "progress_test.rs"]
mod tests;

use std::time::Duration;

use rand::Rng;

pub const PROGRESS_TICK: Duration = Duration::from_millis(200);
/// How long the bar sits at 100% before the document shows up in the list.
pub const COMPLETION_DELAY: Duration = Duration::from_millis(500);

const PROGRESS_CAP: f64 = 90.0;
const MAX_INCREMENT: f64 = 15.0;

/// Upload progress approximation. The transport gives no transfer events, so
/// the bar creeps forward on a timer and never passes 90% until the backend
/// has actually answered.
#[derive(Default)]
pub struct ProgressSimulator {
    value: f64,
}

impl ProgressSimulator {
    pub fn advance(&mut self, increment: f64) -> u16 {
        self.value = (self.value + increment.max(0.0)).min(PROGRESS_CAP);
        return self.percent();
    }

    pub fn advance_random<R: Rng>(&mut self, rng: &mut R) -> u16 {
        let increment = rng.gen_range(0.0..MAX_INCREMENT);
        return self.advance(increment);
    }

    pub fn percent(&self) -> u16 {
        return self.value.floor() as u16;
    }
}
