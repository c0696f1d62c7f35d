//! # Scene Nodes
//!
//! Scene fragments produced by connectors and containers.
//!
//! These nodes mirror the OpenSCAD modules a part definition needs: a few
//! primitives, placement wrappers and boolean composition. Turning them into
//! meshes or source text is left to downstream crates.

use serde::{Deserialize, Serialize};

// =============================================================================
// SCENE NODE
// =============================================================================

/// A node in a generated scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneNode {
    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Cube primitive.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([x, y, z], center=true);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: [f64; 3],
        /// Whether centered at origin.
        center: bool,
    },

    /// Sphere primitive.
    Sphere {
        /// Radius.
        radius: f64,
        /// Number of fragments ($fn).
        fn_: u32,
    },

    /// Cylinder or cone primitive, extruded along +Z.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h=10, r1=5, r2=0, $fn=12);
    /// ```
    Cylinder {
        /// Height.
        height: f64,
        /// Bottom radius.
        radius1: f64,
        /// Top radius.
        radius2: f64,
        /// Whether centered.
        center: bool,
        /// Number of fragments.
        fn_: u32,
    },

    // =========================================================================
    // PLACEMENT
    // =========================================================================

    /// Translation transform.
    Translate {
        /// Translation vector [x, y, z].
        offset: [f64; 3],
        /// Child geometry.
        child: Box<SceneNode>,
    },

    /// General matrix transform.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// multmatrix(m=[[1,0,0,5],[0,1,0,0],[0,0,1,0],[0,0,0,1]]) child();
    /// ```
    Multmatrix {
        /// Row-major 4x4 transformation matrix.
        matrix: [[f64; 4]; 4],
        /// Child geometry.
        child: Box<SceneNode>,
    },

    /// Color modifier.
    Color {
        /// RGBA color.
        rgba: [f64; 4],
        /// Child geometry.
        child: Box<SceneNode>,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Union of children.
    Union {
        /// Child geometries.
        children: Vec<SceneNode>,
    },

    /// Difference (first child minus rest).
    Difference {
        /// Child geometries.
        children: Vec<SceneNode>,
    },

    /// Empty geometry.
    Empty,
}

impl SceneNode {
    /// Union of the given fragments.
    pub fn union(children: Vec<SceneNode>) -> Self {
        Self::Union { children }
    }

    /// Difference of the given fragments: the first minus the rest.
    pub fn difference(children: Vec<SceneNode>) -> Self {
        Self::Difference { children }
    }

    /// Wraps `child` with a row-major homogeneous transform.
    pub fn multmatrix(matrix: [[f64; 4]; 4], child: SceneNode) -> Self {
        Self::Multmatrix {
            matrix,
            child: Box::new(child),
        }
    }

    /// Wraps `child` with a color.
    pub fn color(rgba: [f64; 4], child: SceneNode) -> Self {
        Self::Color {
            rgba,
            child: Box::new(child),
        }
    }

    /// Wraps `child` with a translation.
    pub fn translate(offset: [f64; 3], child: SceneNode) -> Self {
        Self::Translate {
            offset,
            child: Box::new(child),
        }
    }

    /// Adds `child` to this fragment.
    ///
    /// Unions grow in place; any other node becomes a union of itself and
    /// the new child. Adding to `Empty` yields the child alone.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use openscad_connectors::SceneNode;
    ///
    /// let mut node = SceneNode::union(Vec::new());
    /// node.add(SceneNode::Empty);
    /// assert_eq!(node.children().len(), 1);
    /// ```
    pub fn add(&mut self, child: SceneNode) {
        match self {
            Self::Union { children } => children.push(child),
            Self::Empty => *self = child,
            _ => {
                let previous = std::mem::replace(self, Self::Empty);
                *self = Self::union(vec![previous, child]);
            }
        }
    }

    /// Direct children of this node.
    pub fn children(&self) -> Vec<&SceneNode> {
        match self {
            Self::Translate { child, .. }
            | Self::Multmatrix { child, .. }
            | Self::Color { child, .. } => vec![child.as_ref()],
            Self::Union { children } | Self::Difference { children } => children.iter().collect(),
            _ => Vec::new(),
        }
    }

    /// Check if this is an empty node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

// =============================================================================
// SCENE OBJECT
// =============================================================================

/// Anything that can materialize itself as a scene fragment.
pub trait SceneObject {
    /// Type tag of the object (`connector`, `container`, ...).
    fn tag(&self) -> &'static str;

    /// Builds this object's fragment.
    fn generate(&self) -> SceneNode;

    /// Materializes the object for downstream rendering.
    ///
    /// Objects that cache their geometry override this; the default builds
    /// it on demand.
    fn render(&self) -> SceneNode {
        self.generate()
    }
}

// =============================================================================
// TESTS
// =============================================================================
