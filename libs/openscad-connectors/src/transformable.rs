//! # Transformable Structures
//!
//! Parts expose their attachment points as arbitrarily nested mappings and
//! sequences of connectors, points and vectors. [`Transformable`] is that
//! structure; carrying it into another frame rebuilds the same shape with
//! every leaf transformed.

use std::collections::BTreeMap;

use glam::{DMat4, DVec3};

use crate::connector::Connector;

/// A nested declaration of attachment points.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Transformable {
    /// Absent value; passes through unchanged.
    #[default]
    None,
    /// An attachment pose.
    Connector(Connector),
    /// A location, moved by the full transform.
    Point(DVec3),
    /// A direction, rotated but never translated.
    Vector(DVec3),
    /// Named entries.
    Mapping(BTreeMap<String, Transformable>),
    /// Ordered entries.
    Sequence(Vec<Transformable>),
}

impl Transformable {
    /// An empty mapping, the default set of output connectors.
    pub fn empty_mapping() -> Self {
        Self::Mapping(BTreeMap::new())
    }

    /// Builds a mapping from `(name, value)` pairs.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use openscad_connectors::Transformable;
    ///
    /// let outputs = Transformable::mapping([
    ///     ("tip", Transformable::Point(DVec3::Y)),
    ///     ("axis", Transformable::Vector(DVec3::Z)),
    /// ]);
    /// assert!(outputs.get("tip").is_some());
    /// ```
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Transformable)>,
    {
        Self::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Rebuilds this structure with every leaf carried through `matrix`.
    ///
    /// Connectors use [`Connector::transform`], points gain the translation,
    /// vectors do not. Keys and element order are kept.
    pub fn transformed(&self, matrix: &DMat4) -> Transformable {
        match self {
            Self::None => Self::None,
            Self::Connector(connector) => Self::Connector(connector.transform(matrix)),
            Self::Point(point) => Self::Point(matrix.transform_point3(*point)),
            Self::Vector(vector) => Self::Vector(matrix.transform_vector3(*vector)),
            Self::Mapping(entries) => Self::Mapping(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.transformed(matrix)))
                    .collect(),
            ),
            Self::Sequence(items) => {
                Self::Sequence(items.iter().map(|item| item.transformed(matrix)).collect())
            }
        }
    }

    /// Looks up `key` in a mapping.
    pub fn get(&self, key: &str) -> Option<&Transformable> {
        match self {
            Self::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Looks up `index` in a sequence.
    pub fn at(&self, index: usize) -> Option<&Transformable> {
        match self {
            Self::Sequence(items) => items.get(index),
            _ => None,
        }
    }

    /// The connector held by this value, if it is one.
    pub fn as_connector(&self) -> Option<&Connector> {
        match self {
            Self::Connector(connector) => Some(connector),
            _ => None,
        }
    }

    /// Whether this is [`Transformable::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// All connectors in the structure, depth first.
    ///
    /// Mapping entries are visited in key order.
    pub fn connectors(&self) -> Vec<&Connector> {
        let mut out = Vec::new();
        self.collect_connectors(&mut out);
        out
    }

    fn collect_connectors<'a>(&'a self, out: &mut Vec<&'a Connector>) {
        match self {
            Self::Connector(connector) => out.push(connector),
            Self::Mapping(entries) => entries.values().for_each(|v| v.collect_connectors(out)),
            Self::Sequence(items) => items.iter().for_each(|v| v.collect_connectors(out)),
            _ => {}
        }
    }
}

impl From<Connector> for Transformable {
    fn from(connector: Connector) -> Self {
        Self::Connector(connector)
    }
}

impl From<Vec<Transformable>> for Transformable {
    fn from(items: Vec<Transformable>) -> Self {
        Self::Sequence(items)
    }
}

impl From<BTreeMap<String, Transformable>> for Transformable {
    fn from(entries: BTreeMap<String, Transformable>) -> Self {
        Self::Mapping(entries)
    }
}

impl<T: Into<Transformable>> From<Option<T>> for Transformable {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

// =============================================================================
// TESTS
// =============================================================================
