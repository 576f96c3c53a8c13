// transform.rs
//
// Scene-node transform value types with single-axis setters.
// Games own these alongside their entities; this module never walks a
// hierarchy — world/local fields are whatever the owner last wrote.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Position and scale of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world space.
    pub position: Vec3,
    /// Position relative to the parent.
    pub local_position: Vec3,
    /// Scale relative to the parent.
    pub local_scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            local_position: Vec3::ZERO,
            local_scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_local_position(mut self, local_position: Vec3) -> Self {
        self.local_position = local_position;
        self
    }

    pub fn with_local_scale(mut self, local_scale: Vec3) -> Self {
        self.local_scale = local_scale;
        self
    }

    // -- Single-axis setters --
    //
    // Each overwrites exactly one component and returns `&mut Self` so calls
    // chain: `t.set_pos_x(1.0).set_scale_y(2.0);`

    pub fn set_pos_x(&mut self, x: f32) -> &mut Self {
        self.position.x = x;
        self
    }

    pub fn set_pos_y(&mut self, y: f32) -> &mut Self {
        self.position.y = y;
        self
    }

    pub fn set_pos_z(&mut self, z: f32) -> &mut Self {
        self.position.z = z;
        self
    }

    pub fn set_local_pos_x(&mut self, x: f32) -> &mut Self {
        self.local_position.x = x;
        self
    }

    pub fn set_local_pos_y(&mut self, y: f32) -> &mut Self {
        self.local_position.y = y;
        self
    }

    pub fn set_local_pos_z(&mut self, z: f32) -> &mut Self {
        self.local_position.z = z;
        self
    }

    pub fn set_scale_x(&mut self, x: f32) -> &mut Self {
        self.local_scale.x = x;
        self
    }

    pub fn set_scale_y(&mut self, y: f32) -> &mut Self {
        self.local_scale.y = y;
        self
    }

    pub fn set_scale_z(&mut self, z: f32) -> &mut Self {
        self.local_scale.z = z;
        self
    }
}

/// Transform of a UI rectangle, positioned relative to its anchors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectTransform {
    /// Position relative to the anchor point.
    pub anchored_position: Vec2,
}

impl RectTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchored_position(mut self, anchored_position: Vec2) -> Self {
        self.anchored_position = anchored_position;
        self
    }

    pub fn set_anchored_pos_x(&mut self, x: f32) -> &mut Self {
        self.anchored_position.x = x;
        self
    }

    pub fn set_anchored_pos_y(&mut self, y: f32) -> &mut Self {
        self.anchored_position.y = y;
        self
    }
}
