//! Interned node identifiers.
//!
//! Nodes are referenced by [`Id`], a `Copy` handle into a global string
//! interner. Edges and cluster memberships store these handles instead of
//! owned strings, so comparing endpoints is a symbol comparison.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Interned identifier for a diagram node.
///
/// Two `Id`s created from the same string are equal:
///
/// ```
/// use topograph::identifier::Id;
///
/// let a = Id::new("mailer");
/// let b = Id::new("mailer");
/// assert_eq!(a, b);
/// assert_eq!(a, "mailer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("interner lock poisoned");
        Self(interner.get_or_intern(name))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("interner lock poisoned");
        let name = interner
            .resolve(self.0)
            .expect("symbol should exist in interner");
        write!(f, "{name}")
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "mailer"`.
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("interner lock poisoned");
        let name = interner
            .resolve(self.0)
            .expect("symbol should exist in interner");
        name == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_string_interns_to_same_id() {
        let a = Id::new("smtp");
        let b = Id::new("smtp");
        let c = Id::new("amqp");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, "smtp");
    }

    #[test]
    fn display_round_trips() {
        let id = Id::new("mjml-api");
        assert_eq!(id.to_string(), "mjml-api");
    }

    #[test]
    fn usable_as_map_key() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(Id::new("http"), 1);
        map.insert(Id::new("amqp"), 2);

        assert_eq!(map.get(&Id::new("http")), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
