//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how host names become target identifiers and how reserved words
/// are handled.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a host simple class name to a type name (e.g., "Outer$Inner" -> "OuterInner")
    pub class_to_type: fn(&str) -> String,
    /// Transform a type name to a file stem
    pub class_to_file: fn(&str) -> String,
    /// Transform a host member name to a target member name
    pub member_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Members every generated class defines or inherits (e.g., "toString")
    pub reserved_members: &'static [&'static str],
    /// Standard types generated code refers to by simple name (e.g., "Option")
    pub reserved_types: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "`type`" in Scala)
    pub escape_reserved: fn(&str) -> String,
    /// Whether a name is a legal plain identifier
    pub is_identifier: fn(&str) -> bool,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Whether a wrapper with this type name would shadow a standard type.
    pub fn shadows_type(&self, name: &str) -> bool {
        self.reserved_types.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    ///
    /// Returns `None` when the name can be neither used nor escaped.
    pub fn safe_name(&self, name: &str) -> Option<String> {
        if self.is_reserved(name) {
            Some((self.escape_reserved)(name))
        } else if (self.is_identifier)(name) {
            Some(name.to_string())
        } else {
            None
        }
    }

    /// Transform a host class name into a type name, unescaped.
    pub fn type_name(&self, name: &str) -> String {
        (self.class_to_type)(name)
    }

    /// Transform a type name into a file stem.
    pub fn file_name(&self, name: &str) -> String {
        // File names don't need escaping
        (self.class_to_file)(name)
    }

    /// Transform a host member name into a target member name, unescaped.
    pub fn member_name(&self, name: &str) -> String {
        (self.member_to_name)(name)
    }
}
