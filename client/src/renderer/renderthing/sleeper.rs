use std::time::{Duration, Instant};

/// Paces the redraw loop: each call sleeps out whatever remains of the
/// configured frame interval since the previous wake-up. Pacing only,
/// never a correctness concern.
pub struct Sleeper {
    target_delta_time: Duration,
    last_wake: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_wake: None,
        }
    }

    pub fn sleep(&mut self) {
        if let Some(last_wake) = self.last_wake {
            let elapsed = Instant::now() - last_wake;

            if elapsed < self.target_delta_time {
                spin_sleep::sleep(self.target_delta_time - elapsed);
            }
        }

        self.last_wake = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_sleep_waits_out_the_interval() {
        let mut sleeper = Sleeper::new(Duration::from_millis(20));

        // First call has no reference point and returns immediately.
        sleeper.sleep();

        let before = Instant::now();
        sleeper.sleep();

        assert!(before.elapsed() >= Duration::from_millis(10));
    }
}
