//! # Containers
//!
//! A container is a placed instance of a [`Part`]. The part describes its
//! geometry and attachment points in a canonical origin frame; the container
//! works out where that frame lands in the world and carries everything
//! across.
//!
//! ## Construction
//!
//! ```text
//! input → adjust_to_input → position
//!                              ↓
//!         origin, position → transform_matrix
//!                              ↓
//!         generate_at_origin → multmatrix → geometry
//!         origin_output_connectors → recursive_transform → output_connectors
//! ```

use glam::DMat4;
use log::{debug, trace};

use crate::connector::Connector;
use crate::error::ConnectorResult;
use crate::frame::{generate_transform_matrix, scad_matrix};
use crate::scene::{SceneNode, SceneObject};
use crate::transformable::Transformable;
use crate::value::Value;

// =============================================================================
// PART
// =============================================================================

/// A part type: canonical geometry plus the hooks used to place it.
///
/// `origin` and `origin_output_connectors` are type-level: every instance
/// of a part shares them.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use openscad_connectors::{Connector, Container, Part, SceneNode, Transformable};
///
/// struct Rod;
///
/// impl Part for Rod {
///     fn origin_output_connectors() -> Transformable {
///         Transformable::mapping([(
///             "end",
///             Transformable::from(Connector::new(DVec3::new(0.0, 10.0, 0.0), DVec3::Y).with_up(DVec3::Z)),
///         )])
///     }
///
///     fn generate_at_origin(&self) -> SceneNode {
///         SceneNode::Cube { size: [1.0, 10.0, 1.0], center: false }
///     }
/// }
///
/// let rod = Container::new(Rod, None).unwrap();
/// let end = rod.output("end").and_then(Transformable::as_connector).unwrap();
/// assert_eq!(end.position, DVec3::new(0.0, 10.0, 0.0));
/// ```
pub trait Part {
    /// Canonical pose of the part's input attachment.
    fn origin() -> Connector {
        Connector::canonical_origin()
    }

    /// Attachment points offered to children, in the origin frame.
    fn origin_output_connectors() -> Transformable {
        Transformable::empty_mapping()
    }

    /// Resolves the world pose this instance is attached at.
    ///
    /// `input` is whatever the caller handed to [`Container::new`], usually
    /// a connector or a subtree of a parent's output connectors. The default
    /// ignores it and stays at the origin.
    fn adjust_to_input(&self, input: Option<&Transformable>) -> ConnectorResult<Connector> {
        let _ = input;
        Ok(Self::origin())
    }

    /// The part's geometry in the origin frame.
    fn generate_at_origin(&self) -> SceneNode {
        SceneNode::union(Vec::new())
    }
}

// =============================================================================
// CONTAINER
// =============================================================================

/// A part placed in world space.
#[derive(Debug, Clone)]
pub struct Container<P: Part> {
    part: P,
    position: Connector,
    transform_matrix: DMat4,
    geometry: SceneNode,
    output_connectors: Transformable,
}

impl<P: Part> Container<P> {
    /// Places `part` according to `input`.
    ///
    /// Resolves the pose, computes the transform, generates the world
    /// geometry and then the world output connectors, in that order.
    ///
    /// # Errors
    ///
    /// Whatever [`Part::adjust_to_input`] rejects, and
    /// [`ConnectorError::MissingUp`](crate::ConnectorError::MissingUp) when the
    /// origin or the resolved pose has no up vector.
    pub fn new(part: P, input: Option<&Transformable>) -> ConnectorResult<Self> {
        let position = part.adjust_to_input(input)?;
        let transform_matrix = generate_transform_matrix(&P::origin(), &position)?;
        debug!(
            "placing {} at {:?} facing {:?}",
            std::any::type_name::<P>(),
            position.position,
            position.direction
        );
        trace!("transform matrix: {:?}", transform_matrix);

        let geometry = SceneNode::multmatrix(scad_matrix(transform_matrix), part.generate_at_origin());
        let output_connectors = P::origin_output_connectors().transformed(&transform_matrix);
        trace!("propagated {} output connectors", output_connectors.connectors().len());

        Ok(Self {
            part,
            position,
            transform_matrix,
            geometry,
            output_connectors,
        })
    }

    /// The placed part.
    pub fn part(&self) -> &P {
        &self.part
    }

    /// World pose the part was attached at.
    pub fn position(&self) -> &Connector {
        &self.position
    }

    /// Transform from the origin frame to the world frame.
    pub fn transform_matrix(&self) -> DMat4 {
        self.transform_matrix
    }

    /// World geometry, computed at construction.
    pub fn geometry(&self) -> &SceneNode {
        &self.geometry
    }

    /// World output connectors, shaped like the part's declaration.
    pub fn output_connectors(&self) -> &Transformable {
        &self.output_connectors
    }

    /// Looks up a top-level output connector entry.
    pub fn output(&self, key: &str) -> Option<&Transformable> {
        self.output_connectors.get(key)
    }

    /// Recomputes the transform from the part's origin and this instance's
    /// position.
    pub fn generate_transform_matrix(&self) -> ConnectorResult<DMat4> {
        generate_transform_matrix(&P::origin(), &self.position)
    }

    /// Carries an origin-frame structure into this container's world frame.
    pub fn recursive_transform(&self, value: &Transformable) -> Transformable {
        value.transformed(&self.transform_matrix)
    }

    /// Like [`recursive_transform`](Self::recursive_transform) for loosely
    /// typed values.
    ///
    /// # Errors
    ///
    /// [`ConnectorError::UnsupportedType`](crate::ConnectorError::UnsupportedType)
    /// when `value` holds a boolean, number or string anywhere; nothing is
    /// transformed in that case.
    pub fn recursive_transform_value(&self, value: &Value) -> ConnectorResult<Transformable> {
        let declared = Transformable::try_from(value)?;
        Ok(self.recursive_transform(&declared))
    }
}

impl<P: Part> SceneObject for Container<P> {
    fn tag(&self) -> &'static str {
        "container"
    }

    fn generate(&self) -> SceneNode {
        SceneNode::multmatrix(scad_matrix(self.transform_matrix), self.part.generate_at_origin())
    }

    fn render(&self) -> SceneNode {
        self.geometry.clone()
    }
}

// =============================================================================
// TESTS
// =============================================================================
