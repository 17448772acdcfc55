//! Static arena geometry and spawn placement.

use crate::math::Vec3;

/// A disc in the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Vec3,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.center.ground_distance(point) <= self.radius
    }

    /// Distance along the ground-plane segment `from -> to` at which it first
    /// enters this disc, if it does.
    pub fn segment_entry(&self, from: Vec3, to: Vec3) -> Option<f32> {
        let from = from.with_y(0.0);
        let direction = to.with_y(0.0) - from;
        let length = direction.length();
        if length < Vec3::NORMALIZE_EPSILON {
            return self.contains(from).then_some(0.0);
        }

        let unit = direction * (1.0 / length);
        let offset = from - self.center.with_y(0.0);
        let b = offset.dot(unit);
        let c = offset.length_squared() - self.radius * self.radius;
        if c <= 0.0 {
            return Some(0.0);
        }
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let entry = -b - discriminant.sqrt();
        (0.0..=length).contains(&entry).then_some(entry)
    }
}

/// Axis-aligned navigable rectangle in the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_x: f32,
    pub min_z: f32,
    pub max_x: f32,
    pub max_z: f32,
}

impl Bounds {
    pub const fn new(min_x: f32, min_z: f32, max_x: f32, max_z: f32) -> Self {
        Self {
            min_x,
            min_z,
            max_x,
            max_z,
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_z..=self.max_z).contains(&point.z)
    }
}

/// A named unit template placed at a fixed position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spawn {
    pub unit: String,
    pub position: Vec3,
}

/// Everything static about an arena: where units may stand and where they
/// start.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaLayout {
    pub bounds: Bounds,
    #[cfg_attr(feature = "serde", serde(default))]
    pub obstacles: Vec<Circle>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub finish_area: Option<Circle>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub players: Vec<Spawn>,
    /// Positions handed out to wave units in order, cycling when a wave has
    /// more units than positions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemy_spawns: Vec<Vec3>,
}

impl ArenaLayout {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            obstacles: Vec::new(),
            finish_area: None,
            players: Vec::new(),
            enemy_spawns: Vec::new(),
        }
    }

    pub fn with_obstacle(mut self, obstacle: Circle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    pub fn with_finish_area(mut self, finish_area: Circle) -> Self {
        self.finish_area = Some(finish_area);
        self
    }

    /// A point is reachable when it lies inside the bounds and outside every
    /// obstacle.
    pub fn is_reachable(&self, point: Vec3) -> bool {
        self.bounds.contains(point) && !self.obstacles.iter().any(|o| o.contains(point))
    }

    pub fn enemy_spawn(&self, index: usize) -> Option<Vec3> {
        if self.enemy_spawns.is_empty() {
            return None;
        }
        self.enemy_spawns.get(index % self.enemy_spawns.len()).copied()
    }
}
