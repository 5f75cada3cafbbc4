//! Grouping entities: groups, objects and smoothing groups

use super::element::FaceId;

/// Name given to the group and object created implicitly for faces that
/// appear before any `g` or `o` line
pub const DEFAULT_NAME: &str = "Default";

/// A named group of faces (`g name`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    /// Group name
    pub name: String,
    /// Member faces, in file order
    pub faces: Vec<FaceId>,
}

impl Group {
    /// Create a new empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
        }
    }
}

/// A named object (`o name`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    /// Object name
    pub name: String,
    /// Member faces, in file order
    pub faces: Vec<FaceId>,
    /// Snapshots of the groups this object's faces were defined in
    ///
    /// Each snapshot is taken when the first face of that group is linked to
    /// the object; faces the group gains afterwards do not appear here.
    pub groups: Vec<Group>,
}

impl Object {
    /// Create a new empty object
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Whether a group snapshot with this name is already linked
    pub fn has_group(&self, name: &str) -> bool {
        self.groups.iter().any(|g| g.name == name)
    }
}

/// A smoothing group (`s N` / `s off`)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Smoothing {
    /// Smoothing level; 0 means smoothing is off
    pub smoothness: u32,
    /// Member faces, in file order
    pub faces: Vec<FaceId>,
}

impl Smoothing {
    /// Create a new empty smoothing group
    pub fn new(smoothness: u32) -> Self {
        Self {
            smoothness,
            faces: Vec::new(),
        }
    }

    /// Whether this group turns smoothing off
    pub fn is_off(&self) -> bool {
        self.smoothness == 0
    }
}
