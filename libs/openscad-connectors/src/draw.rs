//! Arrow drawing for debug visualization.

use config::constants::{ARROW_HEAD_LENGTH_FACTOR, ARROW_HEAD_RADIUS_FACTOR};
use glam::{DMat4, DQuat, DVec3};

use crate::frame::scad_matrix;
use crate::scene::SceneNode;

/// Draws `vector` as a colored arrow starting at `start`.
///
/// The arrow is built along +Z (a shaft cylinder topped by a cone), rotated
/// onto `vector` and moved to `start`. The head is `1.5 * arrow_radius` wide
/// and `3 * arrow_radius` long; a vector shorter than the head gets no shaft.
/// A zero vector draws nothing.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use openscad_connectors::{draw::draw_segment, SceneNode};
///
/// let arrow = draw_segment(DVec3::ZERO, DVec3::new(0.0, 0.0, 20.0), [1.0, 0.0, 0.0, 1.0], 2.0, 12);
/// assert!(matches!(arrow, SceneNode::Color { .. }));
/// ```
pub fn draw_segment(
    start: DVec3,
    vector: DVec3,
    color: [f64; 4],
    arrow_radius: f64,
    segments: u32,
) -> SceneNode {
    let Some(normal) = vector.try_normalize() else {
        return SceneNode::Empty;
    };

    let head_radius = arrow_radius * ARROW_HEAD_RADIUS_FACTOR;
    let head_length = arrow_radius * ARROW_HEAD_LENGTH_FACTOR;
    let shaft_length = (vector.length() - head_length).max(0.0);

    let arrow = SceneNode::union(vec![
        SceneNode::Cylinder {
            height: shaft_length,
            radius1: arrow_radius,
            radius2: arrow_radius,
            center: false,
            fn_: segments,
        },
        SceneNode::translate(
            [0.0, 0.0, shaft_length],
            SceneNode::Cylinder {
                height: head_length,
                radius1: head_radius,
                radius2: 0.0,
                center: false,
                fn_: segments,
            },
        ),
    ]);

    let placement = DMat4::from_rotation_translation(DQuat::from_rotation_arc(DVec3::Z, normal), start);
    SceneNode::color(color, SceneNode::multmatrix(scad_matrix(placement), arrow))
}
