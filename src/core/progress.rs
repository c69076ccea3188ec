use super::playback::PlaybackSnapshot;

/// Format seconds as `M:SS`. Non-finite or negative input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

/// A duration usable for progress and seeking: finite and positive.
#[inline]
pub fn known_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

#[inline]
pub fn progress_percent(current_time: f64, duration: f64) -> Option<f64> {
    let duration = known_duration(duration)?;
    if !current_time.is_finite() {
        return Some(0.0);
    }
    Some((current_time / duration * 100.0).clamp(0.0, 100.0))
}

/// Values written to the progress bar on one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressFrame {
    pub percent: f64,
    pub current_label: String,
}

impl ProgressFrame {
    pub fn from_snapshot(snapshot: &PlaybackSnapshot) -> Option<Self> {
        let percent = progress_percent(snapshot.current_time, snapshot.duration)?;
        Some(Self {
            percent,
            current_label: format_time(snapshot.current_time),
        })
    }

    /// CSS length for the fill width and the handle offset.
    pub fn css_percent(&self) -> String {
        format!("{}%", self.percent)
    }
}
