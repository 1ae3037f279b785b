//! Per-file identifier allocation.

use std::collections::HashSet;

use crate::{NamingCollisionError, NamingConvention};

/// Highest ordinal tried before giving up on a name.
const MAX_ORDINAL: usize = 99;

/// Hands out unique, legal identifiers within one scope.
///
/// The first claim of a name keeps it unchanged; later claims get an ordinal
/// suffix (`name2`, `name3`, ...). Claims are resolved in call order, so the
/// same sequence of claims always yields the same names.
#[derive(Debug)]
pub struct NameScope<'n> {
    naming: &'n NamingConvention,
    taken: HashSet<String>,
}

impl<'n> NameScope<'n> {
    /// An empty scope, e.g. for one parameter list.
    pub fn plain(naming: &'n NamingConvention) -> Self {
        Self {
            naming,
            taken: HashSet::new(),
        }
    }

    /// A member scope: names every generated class defines are already taken.
    pub fn members(naming: &'n NamingConvention) -> Self {
        let mut scope = Self::plain(naming);
        scope.reserve(naming.reserved_members);
        scope
    }

    /// Mark names as taken without claiming them.
    pub fn reserve(&mut self, names: &[&str]) {
        self.taken.extend(names.iter().map(|name| name.to_string()));
    }

    /// Claim `base`, or the first free ordinal variant of it.
    ///
    /// Returns the identifier ready for output (escaped if reserved).
    pub fn claim(&mut self, base: &str) -> Result<String, NamingCollisionError> {
        if self.naming.safe_name(base).is_none() {
            return Err(NamingCollisionError::new(base, "not a legal identifier"));
        }

        let candidates = std::iter::once(base.to_string())
            .chain((2..=MAX_ORDINAL).map(|n| format!("{}{}", base, n)));
        for candidate in candidates {
            if self.taken.contains(&candidate) {
                continue;
            }
            let Some(safe) = self.naming.safe_name(&candidate) else {
                continue;
            };
            self.taken.insert(candidate);
            return Ok(safe);
        }

        Err(NamingCollisionError::new(
            base,
            format!("no free name up to `{}{}`", base, MAX_ORDINAL),
        ))
    }
}
