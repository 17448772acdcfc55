//! Minimal 3D vector math used by positions and directions.
//!
//! The ground plane is X/Z; Y is height. "North" is `+Z`.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point or direction in world space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const NORTH: Self = Self::new(0.0, 0.0, 1.0);

    /// Vectors shorter than this normalize to zero.
    pub const NORMALIZE_EPSILON: f32 = 1e-5;

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Point on the ground plane (`y = 0`).
    pub const fn ground(x: f32, z: f32) -> Self {
        Self::new(x, 0.0, z)
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or zero for (near) zero vectors.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length < Self::NORMALIZE_EPSILON {
            Self::ZERO
        } else {
            self * (1.0 / length)
        }
    }

    pub fn is_zero(self) -> bool {
        self.length() < Self::NORMALIZE_EPSILON
    }

    /// Distance in the ground plane, ignoring height.
    pub fn ground_distance(self, other: Self) -> f32 {
        self.with_y(0.0).distance(other.with_y(0.0))
    }

    /// Same vector with its height replaced.
    pub fn with_y(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// Heading of this direction in the ground plane, in radians.
    ///
    /// `0` faces north (`+Z`), positive angles turn toward `+X`.
    pub fn yaw(self) -> f32 {
        self.x.atan2(self.z)
    }

    /// Unit ground-plane direction for a heading produced by [`Vec3::yaw`].
    pub fn from_yaw(yaw: f32) -> Self {
        Self::new(yaw.sin(), 0.0, yaw.cos())
    }

    /// Moves from `self` toward `target` by at most `max_step`.
    pub fn move_towards(self, target: Self, max_step: f32) -> Self {
        let delta = target - self;
        let distance = delta.length();
        if distance <= max_step || distance < Self::NORMALIZE_EPSILON {
            target
        } else {
            self + delta * (max_step / distance)
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Signed smallest difference `to - from` between two headings, in `(-PI, PI]`.
pub fn angle_delta(from: f32, to: f32) -> f32 {
    use std::f32::consts::{PI, TAU};

    let mut delta = (to - from) % TAU;
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }
    delta
}
