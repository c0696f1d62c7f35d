use std::collections::BTreeMap;
use std::fmt;

use glam::DVec3;

use crate::connector::Connector;
use crate::error::ConnectorError;
use crate::transformable::Transformable;

/// A loosely typed declaration value.
///
/// Part catalogs built at runtime describe their outputs with these. Only
/// the geometric variants and containers of them can be transformed; see
/// [`Transformable::try_from`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undef,
    Boolean(bool),
    Number(f64),
    String(String),
    Point(DVec3),
    Vector(DVec3),
    Connector(Connector),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Name of the variant, as reported in errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undef => "undef",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Point(_) => "point",
            Value::Vector(_) => "vector",
            Value::Connector(_) => "connector",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    fn to_transformable(&self, path: &str) -> Result<Transformable, ConnectorError> {
        match self {
            Value::Undef => Ok(Transformable::None),
            Value::Point(p) => Ok(Transformable::Point(*p)),
            Value::Vector(v) => Ok(Transformable::Vector(*v)),
            Value::Connector(c) => Ok(Transformable::Connector(c.clone())),
            Value::List(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| item.to_transformable(&format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Transformable::Sequence),
            Value::Map(entries) => entries
                .iter()
                .map(|(key, item)| {
                    let child = if path.is_empty() { key.clone() } else { format!("{path}.{key}") };
                    item.to_transformable(&child).map(|t| (key.clone(), t))
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Transformable::Mapping),
            Value::Boolean(_) | Value::Number(_) | Value::String(_) => {
                Err(ConnectorError::unsupported(self.type_name(), path))
            }
        }
    }
}

impl TryFrom<&Value> for Transformable {
    type Error = ConnectorError;

    /// Converts the whole value or nothing: the first scalar leaf aborts
    /// the conversion with [`ConnectorError::UnsupportedType`].
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.to_transformable("")
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Connector> for Value {
    fn from(c: Connector) -> Self {
        Value::Connector(c)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Point(p) => write!(f, "point({}, {}, {})", p.x, p.y, p.z),
            Value::Vector(v) => write!(f, "vector({}, {}, {})", v.x, v.y, v.z),
            Value::Connector(c) => write!(
                f,
                "connector({}, {}, {} -> {}, {}, {})",
                c.position.x, c.position.y, c.position.z, c.direction.x, c.direction.y, c.direction.z
            ),
            Value::List(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (key, item)) in m.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}: {}", key, item)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: Vec<(&str, Value)>) -> Value {
        Value::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }

    #[test]
    fn test_geometric_values_convert() {
        let c = Connector::new(DVec3::ZERO, DVec3::Y);
        let value = map(vec![
            ("c", c.clone().into()),
            ("p", Value::Point(DVec3::ONE)),
            ("v", Value::Vector(DVec3::Z)),
            ("u", Value::Undef),
            ("l", vec![Value::Undef].into()),
        ]);
        let t = Transformable::try_from(&value).unwrap();
        assert_eq!(t.get("c").and_then(Transformable::as_connector), Some(&c));
        assert_eq!(t.get("p"), Some(&Transformable::Point(DVec3::ONE)));
        assert_eq!(t.get("v"), Some(&Transformable::Vector(DVec3::Z)));
        assert!(t.get("u").unwrap().is_none());
        assert_eq!(t.get("l"), Some(&Transformable::Sequence(vec![Transformable::None])));
    }

    #[test]
    fn test_scalar_leaf_is_unsupported() {
        let value = map(vec![(
            "slots",
            vec![Value::Undef, Value::Undef, map(vec![("tip", 3.0.into())])].into(),
        )]);
        assert_eq!(
            Transformable::try_from(&value),
            Err(ConnectorError::unsupported("number", "slots[2].tip"))
        );
    }

    #[test]
    fn test_top_level_scalar_is_unsupported() {
        let err = Transformable::try_from(&Value::from("tip")).unwrap_err();
        assert_eq!(err, ConnectorError::unsupported("string", ""));
        let err = Transformable::try_from(&Value::from(true)).unwrap_err();
        assert_eq!(err, ConnectorError::unsupported("boolean", ""));
    }

    #[test]
    fn test_display() {
        let value = map(vec![("a", vec![Value::from(1.0), Value::from("x")].into())]);
        assert_eq!(value.to_string(), "{a: [1, \"x\"]}");
    }
}
