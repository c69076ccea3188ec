/// Element ids and selectors the page markup provides.
///
/// Kept in one place so a markup rename is a one-line change; lookups fail
/// at startup with the offending id/selector in the error.
// Video modal
pub const ID_VIDEO_MODAL: &str = "videoModal";
pub const ID_CLOSE_VIDEO_MODAL: &str = "closeVideoModal";
pub const ID_PORTFOLIO_VIDEO: &str = "portfolioVideo";
pub const ID_PLAY_PAUSE_BTN: &str = "playPauseBtn";
pub const ID_MUTE_BTN: &str = "muteBtn";
pub const ID_FULLSCREEN_BTN: &str = "fullscreenBtn";
pub const ID_VIDEO_TITLE: &str = "videoTitle";
pub const ID_VIDEO_DESCRIPTION: &str = "videoDescription";
pub const SEL_PLAY_ICON: &str = ".play-icon";
pub const SEL_PAUSE_ICON: &str = ".pause-icon";
pub const SEL_VOLUME_HIGH: &str = ".volume-high";
pub const SEL_VOLUME_MUTE: &str = ".volume-mute";
pub const SEL_PROGRESS_BAR: &str = ".video-progress-bar";
pub const SEL_PROGRESS_FILL: &str = ".video-progress-fill";
pub const SEL_PROGRESS_HANDLE: &str = ".video-progress-handle";
pub const SEL_CURRENT_TIME: &str = ".current-time";
pub const SEL_DURATION_TIME: &str = ".duration-time";
pub const SEL_PLAYER_CONTAINER: &str = ".video-player-container";
pub const CLASS_ACTIVE: &str = "active";

// Portfolio tiles
pub const SEL_PORTFOLIO_ITEM: &str = ".portfolio-item";
pub const SEL_PORTFOLIO_OVERLAY: &str = ".portfolio-overlay";
pub const SEL_PORTFOLIO_TITLE: &str = ".portfolio-info h3";
pub const SEL_PORTFOLIO_DESC: &str = ".portfolio-info p";
pub const ATTR_VIDEO: &str = "data-video";
pub const ATTR_CATEGORY: &str = "data-category";
pub const SEL_FILTER_BTN: &str = ".filter-btn";
pub const ATTR_FILTER: &str = "data-filter";
pub const FILTER_TWEEN_SEC: f64 = 0.4;

// Navigation
pub const ID_HAMBURGER: &str = "hamburger";
pub const ID_NAV_MENU: &str = "navMenu";
pub const SEL_NAV_LINK: &str = ".nav-link";
pub const CLASS_NAV_LINK: &str = "nav-link";
pub const SEL_NAVBAR: &str = ".navbar";
pub const SEL_FRAGMENT_LINKS: &str = "a[href^=\"#\"]";
pub const ANCHOR_SCROLL_SEC: f64 = 0.8;

// Hero and decorations
pub const SEL_CIRCLE: &str = ".circle-animation";
pub const SEL_HERO: &str = ".hero";
pub const CIRCLE_SPIN_SEC: f64 = 3.0;
pub const CIRCLE_PARALLAX_Y: f64 = -100.0;
pub const SEL_FLOATING_CARD: &str = ".floating-card";
pub const BODY_FADE_SEC: f64 = 0.5;

// Hover feedback
pub const SEL_LIFT_CARDS: &str = ".service-card, .blog-card";
pub const SEL_HOVER_BUTTONS: &str = ".btn, .filter-btn, .social-link";
pub const SEL_FOLLOWER_TARGETS: &str =
    ".btn, .nav-link, .filter-btn, .social-link, a, button, .portfolio-item, .service-card, .blog-card";
pub const CARD_LIFT_Y: f64 = -10.0;
pub const CARD_SHADOW_LIFTED: &str = "0 20px 50px rgba(0, 0, 0, 0.15)";
pub const CARD_SHADOW_REST: &str = "0 10px 25px rgba(0, 0, 0, 0.1)";
pub const HOVER_TWEEN_SEC: f64 = 0.3;
pub const BUTTON_HOVER_SCALE: f64 = 1.05;
pub const BUTTON_HOVER_SEC: f64 = 0.2;

// Text reveal
pub const SEL_TEXT_REVEAL: &str = ".about-text p, .service-card p, .blog-content p";
pub const CLASS_WORD: &str = "word";
pub const WORD_REST_OPACITY: &str = "0.7";

// Stats
pub const SEL_STAT_CARD: &str = ".stat-card";
pub const SEL_STAT_NUMBER: &str = "h3";
pub const ATTR_ANIMATED: &str = "data-animated";

// Cursor follower
pub const CLASS_FOLLOWER: &str = "mouse-follower";
pub const CLASS_FOLLOWER_PLAY: &str = "mouse-follower-play";
pub const CLASS_FOLLOWER_FILM: &str = "mouse-follower-film";
pub const FOLLOWER_HOVER_SCALE: f64 = 1.4;
pub const FOLLOWER_PLAY_HOVER_SCALE: f64 = 0.7;
pub const FOLLOWER_FILM_HOVER_SCALE: f64 = 1.3;
pub const FOLLOWER_FILM_REST_OPACITY: f64 = 0.7;
pub const FOLLOWER_PLAY_HOVER_BG: &str = "#ec4899";
pub const FOLLOWER_PLAY_REST_BG: &str = "#ffffff";
pub const FOLLOWER_PLAY_HOVER_GLOW: &str = "0 0 20px rgba(236, 72, 153, 0.8)";
pub const FOLLOWER_PLAY_REST_GLOW: &str = "0 0 10px rgba(99, 102, 241, 0.4)";

// Contact form
pub const ID_CONTACT_FORM: &str = "contactForm";
pub const SEL_SUBMIT_BTN: &str = ".btn-primary";
pub const SUBMIT_PRESS_SCALE: f64 = 0.95;
pub const SUBMIT_PRESS_MS: i32 = 300;
pub const SUBMIT_CONFIRM_MS: i32 = 3000;
pub const SUBMIT_CONFIRM_TEXT: &str = "✓ Message Sent!";
pub const SUBMIT_CONFIRM_BG: &str = "#10b981";

// Media queries
pub const MQ_FINE_POINTER: &str = "(pointer:fine)";
pub const MQ_REDUCED_MOTION: &str = "(prefers-reduced-motion: reduce)";
pub const REDUCED_MOTION_TIME_SCALE: f64 = 0.5;
