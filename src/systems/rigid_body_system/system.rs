use crate::domain::error::PhysicsError;
use crate::rigid_body::{BodyId, RigidBody, Vec2};

use super::boundary::contain;
use super::collision::resolve_all;

/// Default downward acceleration (units per second squared)
pub const DEFAULT_GRAVITY: f64 = 500.0;

/// Counters gathered during one `step`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub removals_flushed: u32,
    pub boundary_contacts: u32,
    pub resting_contacts: u32,
    pub pairs_tested: u32,
    pub collisions_resolved: u32,
}

/// Owns all boxes plus the global bounds and gravity
pub struct PhysicsWorld {
    bounds: Vec2,
    gravity: f64,
    bodies: Vec<RigidBody>,
    next_id: BodyId,
    pending_removals: Vec<BodyId>,
}

impl PhysicsWorld {
    /// Create an empty world whose containment box spans `(0,0)..(width,height)`.
    pub fn new(width: f64, height: f64, gravity: f64) -> Result<Self, PhysicsError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PhysicsError::InvalidBounds { width, height });
        }

        Ok(Self {
            bounds: Vec2::new(width, height),
            gravity,
            bodies: Vec::new(),
            next_id: 1,
            pending_removals: Vec::new(),
        })
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Any finite value; negative pulls toward the top.
    pub fn set_gravity(&mut self, gravity: f64) {
        self.gravity = gravity;
    }

    /// Add a body and return its new ID.
    pub fn add_body(&mut self, mut body: RigidBody) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;

        log::debug!(
            "body {} added at ({}, {}) size {}x{}",
            id,
            body.pos.x,
            body.pos.y,
            body.width(),
            body.height()
        );

        self.bodies.push(body);
        id
    }

    /// Remove a body right away, keeping the order of the rest.
    pub fn remove_body(&mut self, id: BodyId) -> Option<RigidBody> {
        let idx = self.index_of(id)?;
        log::debug!("body {} removed", id);
        Some(self.bodies.remove(idx))
    }

    /// Remove a body at the start of the next `step`.
    pub fn queue_removal(&mut self, id: BodyId) {
        if !self.pending_removals.contains(&id) {
            self.pending_removals.push(id);
        }
    }

    pub fn pending_removal_count(&self) -> usize {
        self.pending_removals.len()
    }

    /// Drop all bodies and pending removals. IDs keep counting up.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.pending_removals.clear();
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Bodies in insertion order (also the collision pair order)
    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Like `body_mut`, but an unknown ID is an error.
    pub fn try_body_mut(&mut self, id: BodyId) -> Result<&mut RigidBody, PhysicsError> {
        self.body_mut(id).ok_or(PhysicsError::UnknownBody(id))
    }

    fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt` must be positive and finite; the caller is expected to clamp it.
    pub fn step(&mut self, dt: f64) -> StepStats {
        let mut stats = StepStats::default();
        stats.removals_flushed = self.flush_removals();
        self.apply_gravity(dt);
        self.integrate(dt);
        self.contain_bodies(&mut stats);
        self.resolve_collisions(&mut stats);
        stats
    }

    // === Passes, in step order ===

    pub(crate) fn flush_removals(&mut self) -> u32 {
        if self.pending_removals.is_empty() {
            return 0;
        }
        let mut removed = 0u32;
        let pending = std::mem::take(&mut self.pending_removals);
        for id in pending {
            if self.remove_body(id).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Gravity goes through `apply_force` pre-scaled by mass and dt, so it
    /// ends up as `gravity * dt` of velocity regardless of mass.
    pub(crate) fn apply_gravity(&mut self, dt: f64) {
        debug_assert!(dt.is_finite(), "step dt must be finite");
        let gravity = self.gravity;
        for body in self.bodies.iter_mut() {
            let fy = gravity * body.mass() * dt;
            body.apply_force(0.0, fy);
        }
    }

    pub(crate) fn integrate(&mut self, dt: f64) {
        for body in self.bodies.iter_mut() {
            body.update(dt);
        }
    }

    pub(crate) fn contain_bodies(&mut self, stats: &mut StepStats) {
        let bounds = self.bounds;
        for body in self.bodies.iter_mut() {
            let contact = contain(body, bounds);
            stats.boundary_contacts += contact.walls;
            if contact.resting {
                stats.resting_contacts += 1;
            }
        }
    }

    pub(crate) fn resolve_collisions(&mut self, stats: &mut StepStats) {
        let (tested, resolved) = resolve_all(&mut self.bodies);
        stats.pairs_tested = tested;
        stats.collisions_resolved = resolved;
    }
}
