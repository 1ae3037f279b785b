//! Identifier and host-name helpers.

/// Uppercase the first character (e.g., "lastName" -> "LastName")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character, following JavaBeans rules.
///
/// A name whose first two characters are uppercase is kept as-is
/// (e.g., "URL" stays "URL", "FirstName" becomes "firstName").
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            s.to_string()
        }
        (Some(first), _) => first.to_lowercase().chain(s.chars().skip(1)).collect(),
        (None, _) => String::new(),
    }
}

/// Convert to PascalCase, treating `_`, `-` and `$` as word breaks
/// (e.g., "Outer$Inner" -> "OuterInner", "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', '$']).map(capitalize).collect()
}

/// The package of a qualified host name (empty for the default package).
pub fn host_package(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map(|(package, _)| package)
        .unwrap_or("")
}

/// The simple name of a qualified host name, nested classes keeping their `$`.
pub fn host_simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once('.')
        .map(|(_, name)| name)
        .unwrap_or(qualified)
}

/// The name as written in host source code (`a.Outer$Inner` -> `a.Outer.Inner`).
pub fn host_source_name(qualified: &str) -> String {
    qualified.replace('$', ".")
}

/// Directory path for a package (`com.example` -> `com/example`).
pub fn package_path(package: &str) -> String {
    package.replace('.', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("lastName"), "LastName");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("FirstName"), "firstName");
        assert_eq!(decapitalize("URL"), "URL");
        assert_eq!(decapitalize("X"), "x");
        assert_eq!(decapitalize("already"), "already");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("Customer"), "Customer");
        assert_eq!(to_pascal_case("Outer$Inner"), "OuterInner");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_host_names() {
        assert_eq!(host_package("example.Customer"), "example");
        assert_eq!(host_package("Customer"), "");
        assert_eq!(host_simple_name("a.b.Outer$Inner"), "Outer$Inner");
        assert_eq!(host_source_name("a.b.Outer$Inner"), "a.b.Outer.Inner");
        assert_eq!(package_path("com.example.wrappers"), "com/example/wrappers");
    }
}
