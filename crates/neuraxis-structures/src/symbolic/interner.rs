use ahash::AHashMap;

use crate::symbolic::Name;
use crate::NeuraxisDataError;

/// Process-wide identity service for symbolic names.
///
/// Maps equal spellings to a single canonical [`Name`] token. The interner is
/// constructed by the subsystem that owns symbol identity (typically once
/// during kernel initialization) and handed to consumers by reference; there
/// is no global instance.
///
/// Tokens are issued densely from zero and remain valid for the lifetime of
/// the interner. Interning the same spelling twice returns the same token.
///
/// # Examples
/// ```
/// use neuraxis_structures::symbolic::NameInterner;
///
/// let mut interner = NameInterner::new();
/// let integer = interner.intern("integertype");
/// let double = interner.intern("doubletype");
///
/// assert_ne!(integer, double);
/// assert_eq!(interner.intern("integertype"), integer);
/// assert_eq!(interner.resolve(integer).unwrap(), "integertype");
/// ```
#[derive(Debug, Default)]
pub struct NameInterner {
    lookup: AHashMap<String, u32>,
    spellings: Vec<String>,
}

impl NameInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the interner for roughly `capacity` distinct spellings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lookup: AHashMap::with_capacity(capacity),
            spellings: Vec::with_capacity(capacity),
        }
    }

    /// Returns the canonical token for `text`, creating it on first sight.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&index) = self.lookup.get(text) {
            return Name { index };
        }
        let index = self.spellings.len() as u32;
        self.spellings.push(text.to_string());
        self.lookup.insert(text.to_string(), index);
        Name { index }
    }

    /// Returns the token for `text` without creating a new identity.
    pub fn get(&self, text: &str) -> Option<Name> {
        self.lookup.get(text).map(|&index| Name { index })
    }

    /// Returns the spelling behind `name`.
    ///
    /// Fails with `UnknownName` when the token was issued by a different
    /// interner. Mixing tokens across interners is a caller bug and surfaces
    /// immediately rather than aliasing to an unrelated spelling.
    pub fn resolve(&self, name: Name) -> Result<&str, NeuraxisDataError> {
        self.spellings
            .get(name.index as usize)
            .map(String::as_str)
            .ok_or_else(|| {
                NeuraxisDataError::UnknownName(format!(
                    "token #{} was not issued by this interner ({} names known)",
                    name.index,
                    self.spellings.len()
                ))
            })
    }

    /// Number of distinct spellings interned so far.
    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }
}
