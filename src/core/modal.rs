use super::catalog::{resolve, Resolved, SelectionRequest};
use super::constants::CANCEL_KEY;
use super::playback::PlaybackSurface;
use super::progress::ProgressFrame;
use super::transport::{seek_target, PlayIcon, VolumeIcon};

/// Content and visibility of the video preview modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub visible: bool,
    pub source_url: String,
    pub title: String,
    pub description: String,
}

impl ModalState {
    fn assign(&mut self, resolved: Resolved) {
        self.source_url = resolved.source_url;
        self.title = resolved.title;
        self.description = resolved.description;
    }
}

/// Two-state (Closed/Open) controller for the preview modal.
///
/// Owns the modal state and the playback surface. Transport commands are
/// ignored while closed. Deferred work (the `active` class and the final
/// hide) is not cancelled on state changes; instead the caller asks
/// [`activate_due`](Self::activate_due) / [`hide_due`](Self::hide_due) when
/// the timer fires and acts only if the answer is still yes.
pub struct ModalController<S> {
    surface: S,
    state: ModalState,
}

impl<S: PlaybackSurface> ModalController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: ModalState::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.visible
    }

    /// Show `request`, replacing whatever is on screen, and restart playback from zero.
    pub fn open(&mut self, request: &SelectionRequest) -> &ModalState {
        self.state.assign(resolve(request));
        self.surface.set_source(&self.state.source_url);
        self.surface.set_current_time(0.0);
        self.surface.play();
        self.state.visible = true;
        &self.state
    }

    /// Halt playback and mark the modal closed. Returns `false` if it was not open.
    pub fn close(&mut self) -> bool {
        if !self.state.visible {
            return false;
        }
        self.surface.pause();
        self.state.visible = false;
        true
    }

    /// Whether the delayed `active` class should still be applied.
    #[inline]
    pub fn activate_due(&self) -> bool {
        self.state.visible
    }

    /// Whether the delayed hide should still run; false if re-opened meanwhile.
    #[inline]
    pub fn hide_due(&self) -> bool {
        !self.state.visible
    }

    pub fn play(&self) {
        if self.state.visible && self.surface.paused() {
            self.surface.play();
        }
    }

    pub fn toggle_play(&self) -> Option<PlayIcon> {
        if !self.state.visible {
            return None;
        }
        if self.surface.paused() {
            self.surface.play();
        } else {
            self.surface.pause();
        }
        Some(PlayIcon::for_paused(self.surface.paused()))
    }

    pub fn toggle_mute(&self) -> Option<VolumeIcon> {
        if !self.state.visible {
            return None;
        }
        let muted = !self.surface.muted();
        self.surface.set_muted(muted);
        Some(VolumeIcon::for_muted(muted))
    }

    /// Seek to `fraction` of the duration. Returns the new position, or `None`
    /// when closed or before metadata has loaded.
    pub fn seek_to_fraction(&self, fraction: f64) -> Option<f64> {
        if !self.state.visible {
            return None;
        }
        let target = seek_target(fraction, self.surface.duration())?;
        self.surface.set_current_time(target);
        Some(target)
    }

    pub fn progress(&self) -> Option<ProgressFrame> {
        ProgressFrame::from_snapshot(&self.surface.snapshot())
    }
}

/// Whether a keydown with `key` should dismiss the modal.
#[inline]
pub fn closes_on_key(key: &str, modal_open: bool) -> bool {
    modal_open && key == CANCEL_KEY
}
