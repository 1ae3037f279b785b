//! Generic type signature parsing.
//!
//! Accepts host-source spellings such as
//! `java.util.Map<String, java.util.List<? extends Number>>`. Nesting is
//! handled by recursion up to [`MAX_TYPE_DEPTH`] levels of type arguments.

/// Deepest type-argument nesting accepted.
///
/// Every later stage recurses over the parsed structure, so this also bounds
/// their stack use.
pub const MAX_TYPE_DEPTH: usize = 64;

/// A parsed signature: a raw type name plus its type arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Type name as written; array suffixes stay attached (`byte[]`).
    pub name: String,
    pub args: Vec<Signature>,
}

/// Parse a type signature. Returns a human-readable reason on failure.
pub fn parse_signature(src: &str) -> Result<Signature, String> {
    let mut parser = Parser { src, pos: 0 };
    let signature = parser.parse_type(false, 0)?;
    parser.skip_whitespace();
    if parser.pos < src.len() {
        return Err(format!(
            "unexpected `{}` in type `{}`",
            &src[parser.pos..],
            src
        ));
    }
    Ok(signature)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn rest(&self) -> &str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `keyword` when followed by whitespace.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.skip_whitespace();
        let matched = self
            .rest()
            .strip_prefix(keyword)
            .is_some_and(|after| after.starts_with(char::is_whitespace));
        if matched {
            self.pos += keyword.len();
        }
        matched
    }

    fn parse_type(&mut self, in_arguments: bool, depth: usize) -> Result<Signature, String> {
        if depth > MAX_TYPE_DEPTH {
            return Err(format!(
                "type arguments nested deeper than {} levels in `{}`",
                MAX_TYPE_DEPTH, self.src
            ));
        }
        self.skip_whitespace();
        if self.peek() == Some('?') {
            if !in_arguments {
                return Err(format!(
                    "wildcard is only allowed as a type argument in `{}`",
                    self.src
                ));
            }
            return self.parse_wildcard(depth);
        }

        let mut name = self.parse_name()?;
        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.parse_type(true, depth + 1)?);
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(format!("expected `,` or `>` in type `{}`", self.src));
            }
        }

        loop {
            self.skip_whitespace();
            if self.rest().starts_with("[]") {
                self.pos += 2;
                name.push_str("[]");
            } else {
                break;
            }
        }

        Ok(Signature { name, args })
    }

    /// `? extends T` reads as `T`; other wildcards have no target representation.
    fn parse_wildcard(&mut self, depth: usize) -> Result<Signature, String> {
        self.pos += 1;
        if self.eat_keyword("extends") {
            return self.parse_type(false, depth);
        }
        if self.eat_keyword("super") {
            return Err(format!(
                "lower-bounded wildcard `? super` is not supported in `{}`",
                self.src
            ));
        }
        Err(format!(
            "unbounded wildcard `?` is not supported in `{}`",
            self.src
        ))
    }

    fn parse_name(&mut self) -> Result<String, String> {
        self.skip_whitespace();
        let len = self
            .rest()
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '.')))
            .unwrap_or(self.rest().len());
        let name = self.rest()[..len].to_string();

        if name.is_empty() {
            return Err(format!(
                "expected a type name at offset {} in `{}`",
                self.pos, self.src
            ));
        }
        if name.split('.').any(|segment| {
            segment.is_empty() || segment.starts_with(|c: char| c.is_ascii_digit())
        }) {
            return Err(format!("malformed type name `{}`", name));
        }

        self.pos += len;
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(name: &str, args: Vec<Signature>) -> Signature {
        Signature {
            name: name.to_string(),
            args,
        }
    }

    #[test]
    fn test_simple_names() {
        assert_eq!(parse_signature("int").unwrap(), sig("int", vec![]));
        assert_eq!(
            parse_signature("  example.Customer ").unwrap(),
            sig("example.Customer", vec![])
        );
        assert_eq!(
            parse_signature("a.Outer$Inner").unwrap(),
            sig("a.Outer$Inner", vec![])
        );
    }

    #[test]
    fn test_nested_arguments() {
        let parsed = parse_signature("java.util.Map<String, java.util.List<Integer>>").unwrap();
        assert_eq!(
            parsed,
            sig(
                "java.util.Map",
                vec![
                    sig("String", vec![]),
                    sig("java.util.List", vec![sig("Integer", vec![])])
                ]
            )
        );
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 40;
        let src = format!("{}Integer{}", "List<".repeat(depth), ">".repeat(depth));
        let mut parsed = parse_signature(&src).unwrap();
        for _ in 0..depth {
            assert_eq!(parsed.name, "List");
            parsed = parsed.args.remove(0);
        }
        assert_eq!(parsed, sig("Integer", vec![]));
    }

    #[test]
    fn test_nesting_limit() {
        let nested =
            |depth: usize| format!("{}Integer{}", "List<".repeat(depth), ">".repeat(depth));
        assert!(parse_signature(&nested(MAX_TYPE_DEPTH)).is_ok());
        let err = parse_signature(&nested(MAX_TYPE_DEPTH + 1)).unwrap_err();
        assert!(err.contains("nested deeper than 64 levels"), "{}", err);

        // far past the limit still fails cleanly
        assert!(parse_signature(&nested(100_000)).is_err());
    }

    #[test]
    fn test_upper_bounded_wildcard() {
        assert_eq!(
            parse_signature("List<? extends Number>").unwrap(),
            sig("List", vec![sig("Number", vec![])])
        );
    }

    #[test]
    fn test_rejected_wildcards() {
        assert!(parse_signature("List<?>").unwrap_err().contains("unbounded"));
        assert!(
            parse_signature("List<? super Integer>")
                .unwrap_err()
                .contains("? super")
        );
        assert!(parse_signature("? extends Number").is_err());
    }

    #[test]
    fn test_arrays_keep_suffix() {
        assert_eq!(parse_signature("byte[]").unwrap(), sig("byte[]", vec![]));
        assert_eq!(
            parse_signature("String [] []").unwrap(),
            sig("String[][]", vec![])
        );
    }

    #[test]
    fn test_malformed() {
        for src in ["", "List<", "List<Integer", "List<>", "Map<A,,B>", "a..B", "List>", "1abc"] {
            assert!(parse_signature(src).is_err(), "accepted {:?}", src);
        }
    }
}
