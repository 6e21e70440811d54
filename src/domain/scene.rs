//! Scene bundles - JSON description of a world and its starting boxes.

use serde::{Deserialize, Serialize};

use crate::domain::error::PhysicsError;
use crate::rigid_body::{RigidBody, DEFAULT_DAMPING, DEFAULT_RESTITUTION};
use crate::rigid_body_system::{PhysicsWorld, DEFAULT_GRAVITY};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSettings {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_gravity")]
    pub gravity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDesc {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_mass")]
    pub mass: f64,
    #[serde(default = "default_restitution")]
    pub restitution: f64,
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default)]
    pub velocity_x: f64,
    #[serde(default)]
    pub velocity_y: f64,
    #[serde(default)]
    pub angle: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneBundle {
    pub world: WorldSettings,
    #[serde(default)]
    pub bodies: Vec<BodyDesc>,
}

fn default_gravity() -> f64 {
    DEFAULT_GRAVITY
}

fn default_mass() -> f64 {
    1.0
}

fn default_restitution() -> f64 {
    DEFAULT_RESTITUTION
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

impl BodyDesc {
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            mass: default_mass(),
            restitution: DEFAULT_RESTITUTION,
            damping: DEFAULT_DAMPING,
            velocity_x: 0.0,
            velocity_y: 0.0,
            angle: 0.0,
        }
    }

    pub fn build(&self) -> Result<RigidBody, PhysicsError> {
        let mut body = RigidBody::new(self.x, self.y, self.width, self.height, self.mass)?
            .with_restitution(self.restitution)
            .with_damping(self.damping)
            .with_velocity(self.velocity_x, self.velocity_y);
        body.angle = self.angle;
        Ok(body)
    }
}

impl SceneBundle {
    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serializing cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// The playground's starting layout: three boxes in an 800x600 room.
    pub fn demo() -> Self {
        Self {
            world: WorldSettings {
                width: 800.0,
                height: 600.0,
                gravity: DEFAULT_GRAVITY,
            },
            bodies: vec![
                BodyDesc::rect(200.0, 100.0, 80.0, 80.0),
                BodyDesc::rect(400.0, 150.0, 100.0, 60.0),
                BodyDesc::rect(300.0, 50.0, 60.0, 60.0),
            ],
        }
    }

    /// Build the world. Every body is validated before any is added, so a
    /// bad entry leaves nothing half-built.
    pub fn build(&self) -> Result<PhysicsWorld, PhysicsError> {
        let mut world = PhysicsWorld::new(self.world.width, self.world.height, self.world.gravity)?;
        let bodies = self
            .bodies
            .iter()
            .map(BodyDesc::build)
            .collect::<Result<Vec<_>, _>>()?;
        for body in bodies {
            world.add_body(body);
        }
        Ok(world)
    }
}
