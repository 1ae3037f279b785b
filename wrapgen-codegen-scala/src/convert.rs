//! Conversion expressions between host values and Scala values.
//!
//! Both directions recurse over the [`ScalaType`] structure, so nested
//! collections of any depth convert element by element. Lambda parameters are
//! numbered by depth (`e0`, `e1`, ...) so nested lambdas never shadow.

use crate::{ScalaType, type_mapper::scalar_name};

/// Convert a host-typed expression into a value of `ty`.
pub fn from_java(ty: &ScalaType, expr: &str) -> String {
    from_java_at(ty, expr, 0)
}

/// Convert a value of `ty` into the host representation.
pub fn to_java(ty: &ScalaType, expr: &str) -> String {
    to_java_at(ty, expr, 0)
}

fn from_java_at(ty: &ScalaType, expr: &str, depth: usize) -> String {
    if let Some(value) = boxed_value(ty) {
        return format!("{}.{}Value", expr, value.to_lowercase());
    }
    match ty {
        ScalaType::Scalar { .. } | ScalaType::External(_) => expr.to_string(),
        ScalaType::Enum { name, .. } => format!("{}.fromJava({})", name, expr),
        ScalaType::Wrapper { name, .. } => format!("new {}({})", name, expr),
        ScalaType::List(inner) => {
            let elements = map_elements(&format!("{}.asScala", expr), inner, depth, from_java_at);
            format!("{}.toList", elements)
        }
        ScalaType::Set(inner) => {
            let elements = map_elements(&format!("{}.asScala", expr), inner, depth, from_java_at);
            format!("{}.toSet", elements)
        }
        ScalaType::Map(key, value) => {
            let entries = format!("{}.asScala", expr);
            format!("ListMap.from({})", map_entries(&entries, key, value, depth, from_java_at))
        }
        ScalaType::Option(inner) => {
            map_elements(&format!("Option({})", expr), inner, depth, from_java_at)
        }
    }
}

fn to_java_at(ty: &ScalaType, expr: &str, depth: usize) -> String {
    if let Some(value) = boxed_value(ty) {
        return format!("{}.box({})", value, expr);
    }
    match ty {
        ScalaType::Scalar { .. } | ScalaType::External(_) => expr.to_string(),
        ScalaType::Enum { .. } => format!("{}.toJava", expr),
        ScalaType::Wrapper { .. } => format!("{}.underlying", expr),
        ScalaType::List(inner) | ScalaType::Set(inner) => {
            format!("{}.asJava", map_elements(expr, inner, depth, to_java_at))
        }
        ScalaType::Map(key, value) => {
            format!("{}.asJava", map_entries(expr, key, value, depth, to_java_at))
        }
        ScalaType::Option(inner) => {
            format!("{}.orNull", map_elements(expr, inner, depth, to_java_at))
        }
    }
}

type Convert = fn(&ScalaType, &str, usize) -> String;

/// `source.map(eN => ...)`, or `source` when elements need no conversion.
fn map_elements(source: &str, element: &ScalaType, depth: usize, convert: Convert) -> String {
    let param = format!("e{}", depth);
    let body = convert(element, &param, depth + 1);
    if body == param {
        return source.to_string();
    }
    format!("{}.map({} => {})", traversal(source), param, body)
}

/// `source.map { case (kN, vN) => (..., ...) }`, or `source` when unchanged.
fn map_entries(
    source: &str,
    key: &ScalaType,
    value: &ScalaType,
    depth: usize,
    convert: Convert,
) -> String {
    let (k, v) = (format!("k{}", depth), format!("v{}", depth));
    let key_body = convert(key, &k, depth + 1);
    let value_body = convert(value, &v, depth + 1);
    if key_body == k && value_body == v {
        return source.to_string();
    }
    format!(
        "{}.map {{ case ({}, {}) => ({}, {}) }}",
        traversal(source),
        k,
        v,
        key_body,
        value_body
    )
}

/// Host collections are walked through an iterator so one pass builds the result.
fn traversal(source: &str) -> String {
    if source.ends_with(".asScala") {
        format!("{}.iterator", source)
    } else {
        source.to_string()
    }
}

/// The Scala value type behind a boxed host scalar (`java.lang.Integer` -> `Int`).
fn boxed_value(ty: &ScalaType) -> Option<&'static str> {
    match ty {
        ScalaType::Scalar {
            scalar,
            boxed: true,
        } if scalar.is_jvm_primitive() => Some(scalar_name(*scalar)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use wrapgen_ir::Scalar;

    use super::*;

    fn int() -> ScalaType {
        ScalaType::Scalar {
            scalar: Scalar::Int,
            boxed: true,
        }
    }

    fn string() -> ScalaType {
        ScalaType::Scalar {
            scalar: Scalar::String,
            boxed: false,
        }
    }

    fn list(inner: ScalaType) -> ScalaType {
        ScalaType::List(Box::new(inner))
    }

    fn option(inner: ScalaType) -> ScalaType {
        ScalaType::Option(Box::new(inner))
    }

    fn customer() -> ScalaType {
        ScalaType::Wrapper {
            name: "Customer".to_string(),
            qualified: "example.wrappers.Customer".to_string(),
        }
    }

    #[test]
    fn test_scalars() {
        assert_eq!(from_java(&string(), "x"), "x");
        assert_eq!(from_java(&int(), "x"), "x.intValue");
        assert_eq!(to_java(&int(), "x"), "Int.box(x)");
        let primitive = ScalaType::Scalar {
            scalar: Scalar::Long,
            boxed: false,
        };
        assert_eq!(from_java(&primitive, "x"), "x");
        assert_eq!(to_java(&primitive, "x"), "x");
    }

    #[test]
    fn test_optional() {
        assert_eq!(from_java(&option(string()), "x"), "Option(x)");
        assert_eq!(to_java(&option(string()), "x"), "x.orNull");
        assert_eq!(from_java(&option(customer()), "x"), "Option(x).map(e0 => new Customer(e0))");
        assert_eq!(to_java(&option(customer()), "x"), "x.map(e0 => e0.underlying).orNull");
    }

    #[test]
    fn test_nested_lists() {
        let matrix = list(list(int()));
        assert_eq!(
            from_java(&matrix, "m"),
            "m.asScala.iterator.map(e0 => e0.asScala.iterator.map(e1 => e1.intValue).toList).toList"
        );
        assert_eq!(
            to_java(&matrix, "m"),
            "m.map(e0 => e0.map(e1 => Int.box(e1)).asJava).asJava"
        );

        let strings = list(list(list(string())));
        assert_eq!(
            from_java(&strings, "m"),
            "m.asScala.iterator.map(e0 => e0.asScala.iterator.map(e1 => e1.asScala.toList).toList).toList"
        );
        assert_eq!(to_java(&strings, "m"), "m.map(e0 => e0.map(e1 => e1.asJava).asJava).asJava");
    }

    #[test]
    fn test_maps() {
        let lines = ScalaType::Map(Box::new(string()), Box::new(int()));
        assert_eq!(
            from_java(&lines, "m"),
            "ListMap.from(m.asScala.iterator.map { case (k0, v0) => (k0, v0.intValue) })"
        );
        assert_eq!(
            to_java(&lines, "m"),
            "m.map { case (k0, v0) => (k0, Int.box(v0)) }.asJava"
        );

        let plain = ScalaType::Map(Box::new(string()), Box::new(string()));
        assert_eq!(from_java(&plain, "m"), "ListMap.from(m.asScala)");
        assert_eq!(to_java(&plain, "m"), "m.asJava");
    }

    #[test]
    fn test_sets_and_enums() {
        let kinds = ScalaType::Set(Box::new(ScalaType::Enum {
            name: "Kind".to_string(),
            qualified: "example.wrappers.Kind".to_string(),
        }));
        assert_eq!(
            from_java(&kinds, "s"),
            "s.asScala.iterator.map(e0 => Kind.fromJava(e0)).toSet"
        );
        assert_eq!(to_java(&kinds, "s"), "s.map(e0 => e0.toJava).asJava");
    }
}
