//! # Connectors
//!
//! A connector is an attachment pose: a position, a unit direction, an
//! optional up vector fixing the roll around that direction, and an opaque
//! metadata payload carried along untouched.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use config::constants::{ConnectorStyle, GREEN, ORIGIN_DIRECTION, ORIGIN_POSITION, ORIGIN_UP, RED};
use glam::{DMat4, DVec3};

use crate::draw::draw_segment;
use crate::scene::{SceneNode, SceneObject};

// =============================================================================
// META
// =============================================================================

/// Opaque metadata attached to a connector.
///
/// Cloning shares the payload, so a transformed connector carries the very
/// same metadata as its source.
///
/// ## Example
///
/// ```rust
/// use openscad_connectors::Meta;
///
/// let meta = Meta::new("m3 screw");
/// assert_eq!(meta.downcast_ref::<&str>(), Some(&"m3 screw"));
/// assert!(meta.ptr_eq(&meta.clone()));
/// ```
#[derive(Clone)]
pub struct Meta(Arc<dyn Any + Send + Sync>);

impl Meta {
    /// Wraps an arbitrary payload.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrows the payload if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Whether both handles share the same payload.
    pub fn ptr_eq(&self, other: &Meta) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Meta({:p})", Arc::as_ptr(&self.0))
    }
}

// =============================================================================
// CONNECTOR
// =============================================================================

/// A named attachment pose.
///
/// `direction` is normalized on construction. `up` is stored as given and
/// must already be unit length.
#[derive(Debug, Clone)]
pub struct Connector {
    /// Attachment point.
    pub position: DVec3,
    /// Unit direction the attachment faces.
    pub direction: DVec3,
    /// Unit roll reference, if any.
    pub up: Option<DVec3>,
    /// Opaque payload, never transformed.
    pub meta: Option<Meta>,
}

impl Connector {
    /// Creates a connector without up vector or metadata.
    ///
    /// A zero `direction` normalizes to NaN components.
    pub fn new(position: DVec3, direction: DVec3) -> Self {
        Self {
            position,
            direction: direction.normalize(),
            up: None,
            meta: None,
        }
    }

    /// Sets the up vector. The caller guarantees it is unit length.
    pub fn with_up(mut self, up: DVec3) -> Self {
        self.up = Some(up);
        self
    }

    /// Attaches metadata.
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// The canonical origin pose: at zero, facing +Y, up +Z.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use openscad_connectors::Connector;
    ///
    /// let origin = Connector::canonical_origin();
    /// assert_eq!(origin.direction, DVec3::Y);
    /// assert_eq!(origin.up, Some(DVec3::Z));
    /// ```
    pub fn canonical_origin() -> Self {
        Self::new(
            DVec3::from_array(ORIGIN_POSITION),
            DVec3::from_array(ORIGIN_DIRECTION),
        )
        .with_up(DVec3::from_array(ORIGIN_UP))
    }

    /// Returns this connector carried into the frame of `matrix`.
    ///
    /// The position moves as a point, direction and up as vectors (the
    /// translation is ignored). Vectors are not renormalized, so a rigid
    /// `matrix` keeps them unit length and the identity returns them
    /// bit-for-bit. Metadata is shared, not copied.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::{DMat4, DVec3};
    /// use openscad_connectors::Connector;
    ///
    /// let c = Connector::new(DVec3::ZERO, DVec3::Y);
    /// let moved = c.transform(&DMat4::from_translation(DVec3::new(0.0, 0.0, 4.0)));
    /// assert_eq!(moved.position, DVec3::new(0.0, 0.0, 4.0));
    /// assert_eq!(moved.direction, DVec3::Y);
    /// ```
    pub fn transform(&self, matrix: &DMat4) -> Connector {
        Connector {
            position: matrix.transform_point3(self.position),
            direction: matrix.transform_vector3(self.direction),
            up: self.up.map(|up| matrix.transform_vector3(up)),
            meta: self.meta.clone(),
        }
    }

    /// Draws the connector with explicit arrow parameters.
    ///
    /// The direction arrow runs from `position` along `-direction`; the up
    /// arrow, when there is one, along `-up`.
    pub fn generate_with(&self, style: &ConnectorStyle) -> SceneNode {
        let mut out = SceneNode::union(vec![draw_segment(
            self.position,
            -self.direction * style.direction_length,
            RED,
            style.direction_radius,
            style.segments,
        )]);

        if let Some(up) = self.up {
            out.add(draw_segment(
                self.position,
                -up * style.up_length,
                GREEN,
                style.up_radius,
                style.segments,
            ));
        }

        out
    }
}

impl PartialEq for Connector {
    /// Poses compare component-wise, metadata by identity.
    fn eq(&self, other: &Self) -> bool {
        let meta_eq = match (&self.meta, &other.meta) {
            (None, None) => true,
            (Some(a), Some(b)) => a.ptr_eq(b),
            _ => false,
        };
        self.position == other.position
            && self.direction == other.direction
            && self.up == other.up
            && meta_eq
    }
}

impl SceneObject for Connector {
    fn tag(&self) -> &'static str {
        "connector"
    }

    fn generate(&self) -> SceneNode {
        self.generate_with(&ConnectorStyle::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
