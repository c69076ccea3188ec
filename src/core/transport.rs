use super::progress::known_duration;

/// Icon the play/pause button should show for a given paused flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

impl PlayIcon {
    #[inline]
    pub fn for_paused(paused: bool) -> Self {
        if paused {
            PlayIcon::Play
        } else {
            PlayIcon::Pause
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VolumeIcon {
    High,
    Muted,
}

impl VolumeIcon {
    #[inline]
    pub fn for_muted(muted: bool) -> Self {
        if muted {
            VolumeIcon::Muted
        } else {
            VolumeIcon::High
        }
    }
}

/// Horizontal click position inside the progress track as a fraction in [0, 1].
///
/// A degenerate (zero or non-finite width) track maps to 0.
#[inline]
pub fn seek_fraction(client_x: f64, track_left: f64, track_width: f64) -> f64 {
    if !(track_width.is_finite() && track_width > 0.0) {
        return 0.0;
    }
    let f = (client_x - track_left) / track_width;
    if f.is_finite() {
        f.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Playback position for a seek fraction, or `None` while duration is unknown.
#[inline]
pub fn seek_target(fraction: f64, duration: f64) -> Option<f64> {
    known_duration(duration).map(|d| fraction.clamp(0.0, 1.0) * d)
}

/// Fullscreen entry points in probe order; the first one present wins.
pub const FULLSCREEN_ENTRY_POINTS: [&str; 4] = [
    "requestFullscreen",
    "webkitRequestFullscreen",
    "mozRequestFullScreen",
    "msRequestFullscreen",
];

pub fn pick_fullscreen_entry(is_supported: impl Fn(&str) -> bool) -> Option<&'static str> {
    FULLSCREEN_ENTRY_POINTS
        .iter()
        .copied()
        .find(|name| is_supported(name))
}
