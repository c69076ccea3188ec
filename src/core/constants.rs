// Shared timing and tuning constants for the platform-free page logic.

// Video modal
pub const MODAL_ACTIVATE_DELAY_MS: i32 = 10; // display change -> `active` class
pub const MODAL_HIDE_DELAY_MS: i32 = 300; // matches the closing CSS transition
pub const CANCEL_KEY: &str = "Escape";

// Cursor follower (per-frame easing toward the pointer)
pub const FOLLOWER_HEAD_EASE: f32 = 0.12;
pub const FOLLOWER_TRAIL_EASE: f32 = 0.08;
pub const FOLLOWER_HEAD_HALF_PX: f32 = 20.0; // half of the 40px ring
pub const FOLLOWER_TRAIL_HALF_PX: f32 = 15.0;
pub const FOLLOWER_ROTATION_STEP_DEG: f32 = 2.0;

// Stat count-up
pub const COUNT_UP_DURATION_SEC: f64 = 2.0;
pub const COUNT_UP_SUFFIX: char = '+';

// Navigation
pub const NAVBAR_HEIGHT_PX: f64 = 80.0;
pub const NAVBAR_SHADOW_THRESHOLD_PX: f64 = 100.0;
pub const NAVBAR_SHADOW_SCROLLED: &str = "0 4px 6px rgba(0, 0, 0, 0.1)";
pub const NAVBAR_SHADOW_TOP: &str = "0 4px 6px rgba(0, 0, 0, 0.07)";

// Layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Portfolio filter
pub const FILTER_ALL: &str = "all";
pub const FILTER_DIMMED_OPACITY: f64 = 0.3;
