use super::constants::{COUNT_UP_DURATION_SEC, COUNT_UP_SUFFIX};

/// `power1.out` easing: fast start, gentle landing.
#[inline]
pub fn ease_power1_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Count-up animation for a stat heading such as `150+`.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    pub target: u32,
    pub suffix: String,
    pub duration_sec: f64,
}

impl CountUp {
    /// Parse the heading text: leading integer is the target, a `+` anywhere
    /// is kept as the suffix. Returns `None` when there is no leading number.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim_start();
        let digits: &str = {
            let end = trimmed
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(trimmed.len());
            &trimmed[..end]
        };
        let target = digits.parse::<u32>().ok()?;
        let suffix = if text.contains(COUNT_UP_SUFFIX) {
            COUNT_UP_SUFFIX.to_string()
        } else {
            String::new()
        };
        Some(Self {
            target,
            suffix,
            duration_sec: COUNT_UP_DURATION_SEC,
        })
    }

    pub fn value_at(&self, elapsed_sec: f64) -> u32 {
        if self.is_finished(elapsed_sec) {
            return self.target;
        }
        let t = elapsed_sec / self.duration_sec;
        (self.target as f64 * ease_power1_out(t)).floor() as u32
    }

    pub fn label_at(&self, elapsed_sec: f64) -> String {
        format!("{}{}", self.value_at(elapsed_sec), self.suffix)
    }

    #[inline]
    pub fn is_finished(&self, elapsed_sec: f64) -> bool {
        self.duration_sec <= 0.0 || elapsed_sec >= self.duration_sec
    }
}
