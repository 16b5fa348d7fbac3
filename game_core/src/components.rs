use glam::{IVec2, Vec2};

/// Axis-aligned bounding box over integer pixel coordinates
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: IVec2,
    pub max: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Strict overlap test: a non-empty intersection is required, so
    /// rectangles that merely touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// A positioned rectangle with a velocity - used for both paddles and the ball
#[derive(Debug, Clone, Copy)]
pub struct Entity {
    /// Top-left corner in pixel coordinates
    pub pos: IVec2,
    /// Width/height; fixed per entity kind, never mutated after creation
    pub size: IVec2,
    /// Pixels per frame
    pub vel: Vec2,
}

impl Entity {
    pub fn new(pos: IVec2, size: IVec2, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }
}
