use chrono::Utc;

/// Source of "now" as a Unix epoch with fractional seconds
pub trait Clock {
    fn now(&self) -> f64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1_000_000.0
    }
}

pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn now(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock() {
        let before = Utc::now().timestamp() as f64;
        let now = SystemClock.now();
        assert!(now >= before);
        assert!(now < before + 60.0);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(1700000000.5).now(), 1700000000.5);
    }
}
