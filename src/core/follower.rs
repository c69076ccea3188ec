use super::constants::{
    FOLLOWER_HEAD_EASE, FOLLOWER_HEAD_HALF_PX, FOLLOWER_ROTATION_STEP_DEG, FOLLOWER_TRAIL_EASE,
    FOLLOWER_TRAIL_HALF_PX,
};
use glam::Vec2;

/// Decorative cursor follower: a ring that trails the pointer and a film
/// strip that trails it further behind while spinning.
#[derive(Clone, Copy, Debug, Default)]
pub struct Follower {
    pub pointer: Vec2,
    pub head: Vec2,
    pub trail: Vec2,
    pub rotation_deg: f32,
}

impl Follower {
    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        self.head += (self.pointer - self.head) * FOLLOWER_HEAD_EASE;
        self.trail += (self.pointer - self.trail) * FOLLOWER_TRAIL_EASE;
        self.rotation_deg = (self.rotation_deg + FOLLOWER_ROTATION_STEP_DEG) % 360.0;
    }

    /// Translation that centers the ring on `head`.
    #[inline]
    pub fn head_translate(&self) -> Vec2 {
        self.head - Vec2::splat(FOLLOWER_HEAD_HALF_PX)
    }

    #[inline]
    pub fn trail_translate(&self) -> Vec2 {
        self.trail - Vec2::splat(FOLLOWER_TRAIL_HALF_PX)
    }
}
