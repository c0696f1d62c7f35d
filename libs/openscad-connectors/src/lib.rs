//! # OpenSCAD Connectors
//!
//! Rigid composition of 3D-printable parts through connectors.
//!
//! A [`Part`] is authored once in a canonical origin frame: its geometry and
//! the connectors where children may attach. A [`Container`] places a part by
//! mapping that origin frame onto an input connector and carries the
//! geometry and output connectors into world space.
//!
//! ## Architecture
//!
//! ```text
//! Connector (pose) → frame::generate_transform_matrix → DMat4
//!                                                         ↓
//! Part::origin_output_connectors → Transformable::transformed → world outputs
//! Part::generate_at_origin       → SceneNode::Multmatrix      → world geometry
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use openscad_connectors::{Connector, Container, Part, Transformable};
//!
//! struct Peg;
//! impl Part for Peg {}
//!
//! let target = Connector::new(DVec3::new(5.0, 0.0, 0.0), DVec3::X).with_up(DVec3::Z);
//! let m = openscad_connectors::frame::generate_transform_matrix(&Peg::origin(), &target).unwrap();
//! assert!(m.transform_point3(DVec3::ZERO).abs_diff_eq(DVec3::new(5.0, 0.0, 0.0), 1e-10));
//!
//! let peg = Container::new(Peg, Some(&Transformable::from(target))).unwrap();
//! assert_eq!(peg.position(), &Connector::canonical_origin());
//! ```

pub mod connector;
pub mod container;
pub mod draw;
pub mod error;
pub mod frame;
pub mod scene;
pub mod transformable;
pub mod value;

// Re-export public API
pub use connector::{Connector, Meta};
pub use container::{Container, Part};
pub use error::{ConnectorError, ConnectorResult};
pub use scene::{SceneNode, SceneObject};
pub use transformable::Transformable;
pub use value::Value;
