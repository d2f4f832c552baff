//! Scene node table
//!
//! The renderer owns meshes and drawing; the game only needs the mutable
//! poses of a few named nodes and the camera's aspect ratio. Nodes are
//! addressed through [`NodeHandle`]s resolved once by name. Nodes are never
//! removed, so a handle stays valid for the lifetime of the scene it came
//! from.

use std::ops::{Index, IndexMut};

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Index of a transform in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named pose in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub name: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// Scale, then rotate, then translate
    pub fn local_to_parent(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Local +Y axis expressed in the parent frame (the direction it faces)
    pub fn forward(&self) -> Vec3 {
        self.local_to_parent().y_axis.truncate()
    }
}

/// Perspective camera; only the aspect ratio is driven by the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Vertical field of view (radians)
    pub fovy: f32,
    /// Width / height of the drawable
    pub aspect: f32,
    pub near: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fovy: std::f32::consts::FRAC_PI_3,
            aspect: 1.0,
            near: 0.01,
        }
    }
}

/// Transforms and cameras of a loaded level
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    transforms: Vec<Transform>,
    pub cameras: Vec<Camera>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform and return its handle
    pub fn add_transform(&mut self, transform: Transform) -> NodeHandle {
        self.transforms.push(transform);
        NodeHandle(self.transforms.len() - 1)
    }

    /// First transform with the given name
    pub fn find(&self, name: &str) -> Option<NodeHandle> {
        self.transforms
            .iter()
            .position(|t| t.name == name)
            .map(NodeHandle)
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&Transform> {
        self.transforms.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Transform> {
        self.transforms.get_mut(handle.0)
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

/// Handles are only minted by [`Scene::add_transform`]/[`Scene::find`];
/// indexing with a handle from a different scene may panic.
impl Index<NodeHandle> for Scene {
    type Output = Transform;

    fn index(&self, handle: NodeHandle) -> &Transform {
        &self.transforms[handle.0]
    }
}

impl IndexMut<NodeHandle> for Scene {
    fn index_mut(&mut self, handle: NodeHandle) -> &mut Transform {
        &mut self.transforms[handle.0]
    }
}
