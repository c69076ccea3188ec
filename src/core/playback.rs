/// Point-in-time view of the media element, read on demand and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackSnapshot {
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub muted: bool,
}

/// The single reusable media element the modal drives.
///
/// Methods take `&self` because the browser element is a shared handle; test
/// doubles use interior mutability.
pub trait PlaybackSurface {
    fn source(&self) -> String;
    fn set_source(&self, url: &str);
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    /// NaN until metadata has loaded.
    fn duration(&self) -> f64;
    fn paused(&self) -> bool;
    fn muted(&self) -> bool;
    fn set_muted(&self, muted: bool);
    fn play(&self);
    fn pause(&self);

    fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_time: self.current_time(),
            duration: self.duration(),
            paused: self.paused(),
            muted: self.muted(),
        }
    }
}
