//! Scala type mapper implementation.

use std::fmt;

use wrapgen_codegen::{RegistryEntry, TypeMapper, mapping::CollectionShape};
use wrapgen_ir::Scalar;

use crate::naming::{SCALA_NAMING, escape_path, host_reference};

/// A Scala type expression, kept structured so conversions can recurse on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalaType {
    /// `boxed` marks a Java wrapper type (`java.lang.Integer`) on the host side.
    Scalar { scalar: Scalar, boxed: bool },
    /// A generated enum wrapper; `name` is how it is referenced.
    Enum { name: String, qualified: String },
    /// A generated class wrapper.
    Wrapper { name: String, qualified: String },
    /// A configured external type, passed through unchanged.
    External(String),
    List(Box<ScalaType>),
    Set(Box<ScalaType>),
    Map(Box<ScalaType>, Box<ScalaType>),
    Option(Box<ScalaType>),
}

impl ScalaType {
    /// Whether this type or any type argument is a map.
    pub fn contains_map(&self) -> bool {
        match self {
            Self::Map(..) => true,
            Self::List(inner) | Self::Set(inner) | Self::Option(inner) => inner.contains_map(),
            _ => false,
        }
    }

    /// Whether this type or any type argument is a collection.
    pub fn contains_collection(&self) -> bool {
        match self {
            Self::List(_) | Self::Set(_) | Self::Map(..) => true,
            Self::Option(inner) => inner.contains_collection(),
            _ => false,
        }
    }
}

pub(crate) fn scalar_name(scalar: Scalar) -> &'static str {
    match scalar {
        Scalar::Boolean => "Boolean",
        Scalar::Byte => "Byte",
        Scalar::Short => "Short",
        Scalar::Int => "Int",
        Scalar::Long => "Long",
        Scalar::Float => "Float",
        Scalar::Double => "Double",
        Scalar::Char => "Char",
        Scalar::String => "String",
    }
}

impl fmt::Display for ScalaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar { scalar, .. } => f.write_str(scalar_name(*scalar)),
            Self::Enum { name, .. } | Self::Wrapper { name, .. } => f.write_str(name),
            Self::External(expr) => f.write_str(expr),
            Self::List(inner) => write!(f, "List[{}]", inner),
            Self::Set(inner) => write!(f, "Set[{}]", inner),
            Self::Map(key, value) => write!(f, "Map[{}, {}]", key, value),
            Self::Option(inner) => write!(f, "Option[{}]", inner),
        }
    }
}

/// Scala type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalaTypeMapper;

impl ScalaTypeMapper {
    /// Reference a wrapper by simple name from its own package, else from `_root_`.
    fn reference(entry: &RegistryEntry, from_package: &str) -> String {
        let name = SCALA_NAMING
            .safe_name(&entry.wrapper_name)
            .unwrap_or_else(|| entry.wrapper_name.clone());
        if entry.wrapper_package == from_package {
            name
        } else {
            format!("_root_.{}.{}", escape_path(&entry.wrapper_package), name)
        }
    }
}

impl TypeMapper for ScalaTypeMapper {
    type Target = ScalaType;

    fn language(&self) -> &'static str {
        "scala"
    }

    fn map_scalar(&self, scalar: Scalar, boxed: bool) -> ScalaType {
        ScalaType::Scalar { scalar, boxed }
    }

    fn map_enum(&self, entry: &RegistryEntry, from_package: &str) -> ScalaType {
        ScalaType::Enum {
            name: Self::reference(entry, from_package),
            qualified: entry.wrapper_qualified_name(),
        }
    }

    fn map_class(&self, entry: &RegistryEntry, from_package: &str) -> ScalaType {
        ScalaType::Wrapper {
            name: Self::reference(entry, from_package),
            qualified: entry.wrapper_qualified_name(),
        }
    }

    fn map_external(&self, _host: &str, target: &str) -> ScalaType {
        ScalaType::External(target.to_string())
    }

    fn map_collection(&self, shape: CollectionShape, args: Vec<ScalaType>) -> ScalaType {
        let mut args = args.into_iter().map(Box::new);
        // map_type only builds collections with the shape's arity
        let mut next = || {
            args.next()
                .unwrap_or_else(|| Box::new(ScalaType::External("Any".into())))
        };
        match shape {
            CollectionShape::List => ScalaType::List(next()),
            CollectionShape::Set => ScalaType::Set(next()),
            CollectionShape::Map => {
                let key = next();
                ScalaType::Map(key, next())
            }
        }
    }

    fn map_optional(&self, inner: ScalaType) -> ScalaType {
        ScalaType::Option(Box::new(inner))
    }

    fn erasure(&self, target: &ScalaType) -> String {
        match target {
            ScalaType::Scalar { scalar: Scalar::String, .. } => "java.lang.String".to_string(),
            // Scala value types erase to JVM primitives, boxed or not
            ScalaType::Scalar { scalar, .. } => scalar.primitive_name().to_string(),
            ScalaType::Enum { qualified, .. } | ScalaType::Wrapper { qualified, .. } => {
                qualified.clone()
            }
            ScalaType::External(expr) => {
                let raw = expr.split('[').next().unwrap_or(expr);
                raw.trim_start_matches("_root_.").to_string()
            }
            ScalaType::List(_) => "scala.collection.immutable.List".to_string(),
            ScalaType::Set(_) => "scala.collection.immutable.Set".to_string(),
            ScalaType::Map(..) => "scala.collection.immutable.Map".to_string(),
            ScalaType::Option(_) => "scala.Option".to_string(),
        }
    }

    fn host_erasure(&self, qualified: &str) -> String {
        host_reference(qualified).trim_start_matches("_root_.").replace('`', "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(qualified: &str, package: &str, name: &str, is_enum: bool) -> RegistryEntry {
        RegistryEntry {
            qualified_name: qualified.to_string(),
            wrapper_package: package.to_string(),
            wrapper_name: name.to_string(),
            is_enum,
        }
    }

    fn int(boxed: bool) -> ScalaType {
        ScalaType::Scalar {
            scalar: Scalar::Int,
            boxed,
        }
    }

    #[test]
    fn test_scalars() {
        let mapper = ScalaTypeMapper;
        assert_eq!(mapper.map_scalar(Scalar::Int, true).to_string(), "Int");
        assert_eq!(mapper.map_scalar(Scalar::String, false).to_string(), "String");
        assert_eq!(mapper.map_scalar(Scalar::Char, false).to_string(), "Char");
    }

    #[test]
    fn test_nested_collections() {
        let mapper = ScalaTypeMapper;
        let inner = mapper.map_collection(CollectionShape::List, vec![int(true)]);
        let outer = mapper.map_collection(CollectionShape::List, vec![inner]);
        assert_eq!(outer.to_string(), "List[List[Int]]");

        let map = mapper.map_collection(
            CollectionShape::Map,
            vec![mapper.map_scalar(Scalar::String, false), int(true)],
        );
        assert_eq!(map.to_string(), "Map[String, Int]");
        assert!(map.contains_map());
        assert_eq!(mapper.map_optional(map).to_string(), "Option[Map[String, Int]]");
    }

    #[test]
    fn test_wrapper_references() {
        let mapper = ScalaTypeMapper;
        let customer = entry("example.Customer", "example.wrappers", "Customer", false);
        assert_eq!(
            mapper.map_class(&customer, "example.wrappers").to_string(),
            "Customer"
        );
        assert_eq!(
            mapper.map_class(&customer, "other.wrappers").to_string(),
            "_root_.example.wrappers.Customer"
        );
        let kind = entry("example.Kind", "example.wrappers", "Kind", true);
        assert!(matches!(
            mapper.map_enum(&kind, "example.wrappers"),
            ScalaType::Enum { .. }
        ));
    }

    #[test]
    fn test_erasure() {
        let mapper = ScalaTypeMapper;
        assert_eq!(mapper.erasure(&int(true)), mapper.erasure(&int(false)));
        assert_eq!(
            mapper.erasure(&ScalaType::List(Box::new(int(true)))),
            mapper.erasure(&ScalaType::List(Box::new(ScalaType::External("java.util.UUID".into()))))
        );
        assert_eq!(
            mapper.erasure(&ScalaType::External("_root_.java.util.UUID".into())),
            "java.util.UUID"
        );
        assert_eq!(mapper.host_erasure("example.Outer$Inner"), "example.Outer.Inner");
    }
}
