use crate::domain::error::PhysicsError;

use super::vec2::Vec2;

/// Identifier handed out by the owning world (0 = not yet added)
pub type BodyId = u32;

/// Default bounciness of a freshly created body
pub const DEFAULT_RESTITUTION: f64 = 0.5;
/// Default per-step velocity retention (air friction)
pub const DEFAULT_DAMPING: f64 = 0.98;

/// Rigid Body - an axis-aligned box that moves as a unit
#[derive(Clone, Debug)]
pub struct RigidBody {
    // === Physics State ===
    /// Top-left corner (not the center)
    pub pos: Vec2,
    /// Velocity vector (units per second)
    pub velocity: Vec2,
    /// Rotation for rendering only; the simulation never integrates it
    pub angle: f64,
    /// Unique ID assigned by the world
    pub id: BodyId,

    // === Shape / mass, fixed at creation ===
    size: Vec2,
    mass: f64,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    restitution: f64,
    /// Velocity kept after each step (1.0 = no air friction)
    damping: f64,
}

impl RigidBody {
    /// Create a box with its top-left corner at (x, y).
    ///
    /// Rejects non-finite or non-positive size and mass.
    pub fn new(x: f64, y: f64, width: f64, height: f64, mass: f64) -> Result<Self, PhysicsError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PhysicsError::InvalidSize { width, height });
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(PhysicsError::InvalidMass(mass));
        }

        Ok(Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            angle: 0.0,
            id: 0,
            size: Vec2::new(width, height),
            mass,
            restitution: DEFAULT_RESTITUTION,
            damping: DEFAULT_DAMPING,
        })
    }

    /// Add `force / mass` to the velocity.
    ///
    /// NOTE: there is no time factor here. The value passed in acts as a
    /// velocity change scaled by 1/mass, so continuous forces must be
    /// pre-multiplied by `dt` by the caller (world gravity does this).
    /// Changing it would alter every simulated trajectory.
    pub fn apply_force(&mut self, fx: f64, fy: f64) {
        self.velocity.x += fx / self.mass;
        self.velocity.y += fy / self.mass;
    }

    /// Semi-implicit Euler: advance position with the current velocity,
    /// then apply damping. Call after all forces for the step.
    pub fn update(&mut self, dt: f64) {
        debug_assert!(self.pos.is_finite() && self.velocity.is_finite());

        self.pos.x += self.velocity.x * dt;
        self.pos.y += self.velocity.y * dt;

        self.velocity.x *= self.damping;
        self.velocity.y *= self.damping;
    }

    /// True when the two boxes share a non-zero area.
    /// Boxes that only touch along an edge or corner do not overlap.
    pub fn overlaps(&self, other: &RigidBody) -> bool {
        !(self.right() <= other.left()
            || self.left() >= other.right()
            || self.bottom() <= other.top()
            || self.top() >= other.bottom())
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f64) {
        self.restitution = r.clamp(0.0, 1.0);
    }

    /// Set linear damping (fraction of velocity kept per step)
    pub fn set_damping(&mut self, d: f64) {
        self.damping = d.clamp(0.0, 1.0);
    }

    pub fn with_restitution(mut self, r: f64) -> Self {
        self.set_restitution(r);
        self
    }

    pub fn with_damping(mut self, d: f64) -> Self {
        self.set_damping(d);
        self
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = Vec2::new(vx, vy);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> RigidBody {
        RigidBody::new(x, y, w, h, 1.0).unwrap()
    }

    #[test]
    fn rejects_non_positive_mass_and_size() {
        assert!(matches!(
            RigidBody::new(0.0, 0.0, 10.0, 10.0, 0.0),
            Err(PhysicsError::InvalidMass(_))
        ));
        assert!(matches!(
            RigidBody::new(0.0, 0.0, 10.0, 10.0, -2.0),
            Err(PhysicsError::InvalidMass(_))
        ));
        assert!(matches!(
            RigidBody::new(0.0, 0.0, 10.0, 10.0, f64::NAN),
            Err(PhysicsError::InvalidMass(_))
        ));
        assert!(matches!(
            RigidBody::new(0.0, 0.0, 0.0, 10.0, 1.0),
            Err(PhysicsError::InvalidSize { .. })
        ));
        assert!(matches!(
            RigidBody::new(0.0, 0.0, 10.0, -1.0, 1.0),
            Err(PhysicsError::InvalidSize { .. })
        ));
    }

    #[test]
    fn new_body_has_material_defaults() {
        let b = rect(1.0, 2.0, 3.0, 4.0);
        assert_eq!(b.restitution(), DEFAULT_RESTITUTION);
        assert_eq!(b.damping(), DEFAULT_DAMPING);
        assert_eq!(b.velocity, Vec2::zero());
        assert_eq!(b.angle, 0.0);
        assert_eq!(b.id, 0);
    }

    #[test]
    fn apply_force_divides_by_mass_without_time_factor() {
        let mut b = RigidBody::new(0.0, 0.0, 10.0, 10.0, 4.0).unwrap();
        b.apply_force(8.0, -2.0);
        assert_eq!(b.velocity, Vec2::new(2.0, -0.5));
    }

    #[test]
    fn update_moves_then_damps() {
        let mut b = rect(0.0, 0.0, 10.0, 10.0).with_velocity(10.0, -20.0).with_damping(0.5);
        b.update(0.1);
        assert_eq!(b.pos, Vec2::new(1.0, -2.0));
        assert_eq!(b.velocity, Vec2::new(5.0, -10.0));
    }

    #[test]
    fn center_is_position_plus_half_size() {
        let b = rect(10.0, 20.0, 40.0, 60.0);
        assert_eq!(b.center_x(), 30.0);
        assert_eq!(b.center_y(), 50.0);
    }

    #[test]
    fn overlap_requires_shared_area() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let inside = rect(5.0, 5.0, 10.0, 10.0);
        let edge = rect(10.0, 0.0, 10.0, 10.0);
        let corner = rect(10.0, 10.0, 5.0, 5.0);
        let apart = rect(30.0, 30.0, 5.0, 5.0);

        assert!(a.overlaps(&inside));
        assert!(!a.overlaps(&edge));
        assert!(!a.overlaps(&corner));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn overlap_is_commutative() {
        let boxes = [
            rect(0.0, 0.0, 10.0, 10.0),
            rect(9.0, 9.0, 2.0, 2.0),
            rect(10.0, 0.0, 10.0, 10.0),
            rect(-5.0, 3.0, 30.0, 1.0),
            rect(2.0, 2.0, 1.0, 1.0),
        ];
        for a in boxes.iter() {
            for b in boxes.iter() {
                assert_eq!(a.overlaps(b), b.overlaps(a));
            }
        }
    }

    #[test]
    fn material_setters_clamp() {
        let mut b = rect(0.0, 0.0, 1.0, 1.0);
        b.set_restitution(1.7);
        b.set_damping(-0.2);
        assert_eq!(b.restitution(), 1.0);
        assert_eq!(b.damping(), 0.0);
    }
}
