//! Mover Interface
//!
//! The controllers never resolve collisions. They hand one displacement per
//! tick to a [`Mover`], which sweeps the body through the world and reports
//! whether it ended the move standing on something.
//!
//! [`FlatGroundMover`] is the simplest possible mover: an infinite horizontal
//! floor and nothing else. It backs the sandbox, the jump probe and the tests.

use glam::Vec3;

/// Collision-aware displacement applier for one actor.
pub trait Mover {
    /// Ground contact as of the end of the last applied move.
    fn is_grounded(&self) -> bool;

    /// Sweep the body by `displacement` and update ground contact.
    fn apply_displacement(&mut self, displacement: Vec3);
}

/// Distance above the floor still counted as standing on it, in meters.
pub const GROUND_CONTACT_SKIN: f32 = 0.001;

/// Mover over an infinite floor at a fixed height.
///
/// `position` is the actor's feet. Moves that would take the feet below the
/// floor end on the floor instead.
#[derive(Debug, Clone)]
pub struct FlatGroundMover {
    position: Vec3,
    ground_height: f32,
    grounded: bool,
}

impl Default for FlatGroundMover {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 0.0)
    }
}

impl FlatGroundMover {
    /// Create a mover with feet at `position` over a floor at `ground_height`.
    ///
    /// A start position below the floor is lifted onto it.
    pub fn new(position: Vec3, ground_height: f32) -> Self {
        let mut mover = Self {
            position,
            ground_height,
            grounded: false,
        };
        mover.resolve_ground();
        mover
    }

    /// Feet position in world space.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Teleport the feet. Ground contact is recomputed.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.resolve_ground();
    }

    #[inline]
    pub fn ground_height(&self) -> f32 {
        self.ground_height
    }

    /// Height of the feet above the floor.
    #[inline]
    pub fn height_above_ground(&self) -> f32 {
        self.position.y - self.ground_height
    }

    fn resolve_ground(&mut self) {
        if self.position.y <= self.ground_height + GROUND_CONTACT_SKIN {
            self.position.y = self.position.y.max(self.ground_height);
            self.grounded = true;
        } else {
            self.grounded = false;
        }
    }
}

impl Mover for FlatGroundMover {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn apply_displacement(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.resolve_ground();
    }
}
