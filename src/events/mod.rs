pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_escape;
pub use pointer::{wire_follower_hover, wire_hover_feedback};
