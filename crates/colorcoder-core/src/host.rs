//! Host bindings that write palette colors onto scene objects.
//!
//! The tool never resolves objects by name. A host hands out [`ObjectId`]
//! handles and owns the lookup table behind them.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::color::Rgb;

/// Handle to an object or shape in a host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(Uuid);

impl ObjectId {
    /// Create a fresh, unique handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Unknown object: {0}")]
    UnknownObject(ObjectId),
}

/// Something that can color (and un-color) the host's selected objects.
///
/// Rule every implementation follows: an object without child shapes gets the
/// scene color itself; an object with shapes gets it on every shape and its own
/// scene color is left alone. The outliner color always goes on the object.
pub trait ColorApplier {
    /// The host's current selection.
    fn selection(&self) -> Vec<ObjectId>;

    /// Color `targets`.
    fn apply(&mut self, scene: Rgb, outliner: Rgb, targets: &[ObjectId]) -> Result<(), HostError>;

    /// Turn off the color override and outliner color on `targets`.
    fn clear(&mut self, targets: &[ObjectId]) -> Result<(), HostError>;
}

/// Drawing-override attributes carried by objects and shapes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverrideColor {
    pub enabled: bool,
    pub rgb_colors: bool,
    pub color: Rgb,
}

impl OverrideColor {
    fn set(&mut self, color: Rgb) {
        self.enabled = true;
        self.rgb_colors = true;
        self.color = color;
    }
}

/// A top-level scene object.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub override_color: OverrideColor,
    pub use_outliner_color: bool,
    pub outliner_color: Rgb,
    pub shapes: Vec<ObjectId>,
}

/// A shape node parented under a scene object.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeNode {
    pub id: ObjectId,
    pub name: String,
    pub parent: ObjectId,
    pub override_color: OverrideColor,
}

/// In-memory scene used by the desktop shell and by tests.
#[derive(Debug, Clone, Default)]
pub struct SceneHost {
    objects: HashMap<ObjectId, SceneObject>,
    shapes: HashMap<ObjectId, ShapeNode>,
    /// Object creation order, for stable listings.
    order: Vec<ObjectId>,
    selection: Vec<ObjectId>,
}

impl SceneHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level object with no shapes.
    pub fn add_object(&mut self, name: impl Into<String>) -> ObjectId {
        let id = ObjectId::new();
        self.objects.insert(
            id,
            SceneObject {
                id,
                name: name.into(),
                override_color: OverrideColor::default(),
                use_outliner_color: false,
                outliner_color: Rgb::BLACK,
                shapes: Vec::new(),
            },
        );
        self.order.push(id);
        id
    }

    /// Add a shape under `parent`.
    pub fn add_shape(&mut self, parent: ObjectId, name: impl Into<String>) -> Result<ObjectId, HostError> {
        let object = self
            .objects
            .get_mut(&parent)
            .ok_or(HostError::UnknownObject(parent))?;
        let id = ObjectId::new();
        object.shapes.push(id);
        self.shapes.insert(
            id,
            ShapeNode {
                id,
                name: name.into(),
                parent,
                override_color: OverrideColor::default(),
            },
        );
        Ok(id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn shape(&self, id: ObjectId) -> Option<&ShapeNode> {
        self.shapes.get(&id)
    }

    /// Objects in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Replace the selection. Unknown handles are ignored.
    pub fn select(&mut self, ids: impl IntoIterator<Item = ObjectId>) {
        self.selection = ids
            .into_iter()
            .filter(|id| self.objects.contains_key(id))
            .collect();
    }

    /// Add or remove one object from the selection.
    pub fn toggle_selected(&mut self, id: ObjectId) {
        if let Some(pos) = self.selection.iter().position(|s| *s == id) {
            self.selection.remove(pos);
        } else if self.objects.contains_key(&id) {
            self.selection.push(id);
        }
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selection.contains(&id)
    }

    fn check_targets(&self, targets: &[ObjectId]) -> Result<(), HostError> {
        match targets.iter().find(|id| !self.objects.contains_key(id)) {
            Some(id) => Err(HostError::UnknownObject(*id)),
            None => Ok(()),
        }
    }

    /// Override attributes the scene color goes to: the shapes if there are
    /// any, the object otherwise.
    fn override_targets(&mut self, id: ObjectId) -> Vec<&mut OverrideColor> {
        let Some(object) = self.objects.get_mut(&id) else {
            return Vec::new();
        };
        if object.shapes.is_empty() {
            return vec![&mut object.override_color];
        }
        let shape_ids = &object.shapes;
        self.shapes
            .values_mut()
            .filter(|shape| shape_ids.contains(&shape.id))
            .map(|shape| &mut shape.override_color)
            .collect()
    }
}

impl ColorApplier for SceneHost {
    fn selection(&self) -> Vec<ObjectId> {
        self.selection.clone()
    }

    fn apply(&mut self, scene: Rgb, outliner: Rgb, targets: &[ObjectId]) -> Result<(), HostError> {
        self.check_targets(targets)?;
        for &id in targets {
            if let Some(object) = self.objects.get_mut(&id) {
                object.use_outliner_color = true;
                object.outliner_color = outliner;
            }
            for attrs in self.override_targets(id) {
                attrs.set(scene);
            }
        }
        log::info!("Applied color to {} object(s)", targets.len());
        Ok(())
    }

    fn clear(&mut self, targets: &[ObjectId]) -> Result<(), HostError> {
        self.check_targets(targets)?;
        for &id in targets {
            if let Some(object) = self.objects.get_mut(&id) {
                object.use_outliner_color = false;
            }
            for attrs in self.override_targets(id) {
                attrs.enabled = false;
            }
        }
        log::info!("Cleared color on {} object(s)", targets.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    const DARK_RED: Rgb = Rgb::new(0.5, 0.0, 0.0);

    #[test]
    fn test_apply_to_object_without_shapes() {
        let mut scene = SceneHost::new();
        let joint = scene.add_object("joint1");

        scene.apply(RED, DARK_RED, &[joint]).unwrap();

        let object = scene.object(joint).unwrap();
        assert!(object.override_color.enabled);
        assert!(object.override_color.rgb_colors);
        assert_eq!(object.override_color.color, RED);
        assert!(object.use_outliner_color);
        assert_eq!(object.outliner_color, DARK_RED);
    }

    #[test]
    fn test_apply_to_object_with_shapes() {
        let mut scene = SceneHost::new();
        let ctrl = scene.add_object("arm_ctrl");
        let a = scene.add_shape(ctrl, "arm_ctrlShape").unwrap();
        let b = scene.add_shape(ctrl, "arm_ctrlShape1").unwrap();

        scene.apply(RED, DARK_RED, &[ctrl]).unwrap();

        let object = scene.object(ctrl).unwrap();
        assert_eq!(object.override_color, OverrideColor::default());
        assert_eq!(object.outliner_color, DARK_RED);
        for shape in [a, b] {
            let attrs = scene.shape(shape).unwrap().override_color;
            assert!(attrs.enabled);
            assert_eq!(attrs.color, RED);
        }
    }

    #[test]
    fn test_clear_disables_overrides() {
        let mut scene = SceneHost::new();
        let joint = scene.add_object("joint1");
        let ctrl = scene.add_object("ctrl");
        let shape = scene.add_shape(ctrl, "ctrlShape").unwrap();
        scene.apply(RED, RED, &[joint, ctrl]).unwrap();

        scene.clear(&[joint, ctrl]).unwrap();

        assert!(!scene.object(joint).unwrap().override_color.enabled);
        assert!(!scene.object(joint).unwrap().use_outliner_color);
        assert!(!scene.object(ctrl).unwrap().use_outliner_color);
        assert!(!scene.shape(shape).unwrap().override_color.enabled);
    }

    #[test]
    fn test_unknown_target_changes_nothing() {
        let mut scene = SceneHost::new();
        let joint = scene.add_object("joint1");
        let stale = ObjectId::new();

        let err = scene.apply(RED, RED, &[joint, stale]).unwrap_err();
        assert_eq!(err, HostError::UnknownObject(stale));
        assert!(!scene.object(joint).unwrap().use_outliner_color);
    }

    #[test]
    fn test_selection() {
        let mut scene = SceneHost::new();
        let a = scene.add_object("a");
        let b = scene.add_object("b");
        scene.select([a, ObjectId::new()]);
        assert_eq!(scene.selection(), vec![a]);
        scene.toggle_selected(b);
        scene.toggle_selected(a);
        assert_eq!(scene.selection(), vec![b]);
        assert!(scene.is_selected(b));
    }
}
