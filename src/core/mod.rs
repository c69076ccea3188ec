pub mod catalog;
pub mod constants;
pub mod counter;
pub mod follower;
pub mod frame_gate;
pub mod modal;
pub mod page;
pub mod playback;
pub mod progress;
pub mod reveal;
pub mod transport;

pub use catalog::SelectionRequest;
pub use frame_gate::FrameGate;
pub use modal::ModalController;
pub use playback::PlaybackSurface;
