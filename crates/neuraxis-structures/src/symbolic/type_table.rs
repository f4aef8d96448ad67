use crate::symbolic::Name;
use crate::NeuraxisDataError;

/// Ordered, duplicate-tolerant table of [`Name`] tokens.
///
/// The table is the building block for type signatures and symbol lists in
/// the interpreter layer: position encodes meaning (an argument slot, a
/// dispatch priority), so insertion order is preserved exactly and duplicates
/// are legal. Lookups by value resolve to the first occurrence.
///
/// The table holds tokens by value and never owns their identity; clearing or
/// dropping it leaves previously returned tokens valid. It is exclusively
/// owned by the subsystem that builds it and does no internal locking; build
/// it on one thread, then share read-only views if needed.
///
/// # Examples
/// ```
/// use neuraxis_structures::symbolic::{NameInterner, NamedTypeTable};
///
/// let mut interner = NameInterner::new();
/// let mut signature = NamedTypeTable::new();
/// signature.append(interner.intern("doubletype"));
/// signature.append(interner.intern("integertype"));
///
/// assert_eq!(signature.size(), 2);
/// assert_eq!(signature.at(0).unwrap(), interner.intern("doubletype"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedTypeTable {
    entries: Vec<Name>,
}

impl NamedTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the table for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends `name` at the end. Existing positions are unaffected.
    pub fn append(&mut self, name: Name) {
        self.entries.push(name);
    }

    /// Returns the token at `index`.
    ///
    /// Fails with `OutOfRange` when `index` is at or beyond [`size`](Self::size).
    /// Masking a bad index would corrupt symbol lookups downstream, so the
    /// violation surfaces immediately instead of clamping or returning a
    /// sentinel token.
    pub fn at(&self, index: usize) -> Result<Name, NeuraxisDataError> {
        self.entries.get(index).copied().ok_or_else(|| {
            NeuraxisDataError::OutOfRange(format!(
                "index {} beyond type table cardinality {}",
                index,
                self.entries.len()
            ))
        })
    }

    /// Current cardinality. O(1).
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` appears anywhere in the table. Linear scan.
    pub fn contains(&self, name: Name) -> bool {
        self.entries.contains(&name)
    }

    /// Position of the first occurrence of `name`, if any. Linear scan.
    ///
    /// With duplicates present the lowest index wins, matching the
    /// insertion-order semantics of the table.
    pub fn index_of(&self, name: Name) -> Option<usize> {
        self.entries.iter().position(|&entry| entry == name)
    }

    /// Resets cardinality to zero. Tokens handed out earlier stay valid.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Name>> {
        self.entries.iter().copied()
    }

    pub fn as_slice(&self) -> &[Name] {
        &self.entries
    }
}

impl From<Vec<Name>> for NamedTypeTable {
    fn from(entries: Vec<Name>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a NamedTypeTable {
    type Item = Name;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Name>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Name> for NamedTypeTable {
    fn extend<T: IntoIterator<Item = Name>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbolic::NameInterner;

    fn abc(interner: &mut NameInterner) -> (Name, Name, Name) {
        (
            interner.intern("anytype"),
            interner.intern("booltype"),
            interner.intern("calltype"),
        )
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let mut interner = NameInterner::new();
        let (a, b, c) = abc(&mut interner);

        let mut table = NamedTypeTable::new();
        for name in [a, b, a, c] {
            table.append(name);
        }

        assert_eq!(table.size(), 4);
        assert_eq!(table.at(0).unwrap(), a);
        assert_eq!(table.at(1).unwrap(), b);
        assert_eq!(table.at(2).unwrap(), a);
        assert_eq!(table.at(3).unwrap(), c);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let mut interner = NameInterner::new();
        let (a, b, c) = abc(&mut interner);

        let table = NamedTypeTable::from(vec![a, b, a, c]);
        assert_eq!(table.index_of(a), Some(0));
        assert_eq!(table.index_of(c), Some(3));
    }

    #[test]
    fn test_contains() {
        let mut interner = NameInterner::new();
        let (a, b, c) = abc(&mut interner);
        let d = interner.intern("doubletype");

        let table = NamedTypeTable::from(vec![a, b, a, c]);
        assert!(table.contains(c));
        assert!(!table.contains(d));
    }

    #[test]
    fn test_at_out_of_range() {
        let mut interner = NameInterner::new();
        let (a, b, c) = abc(&mut interner);

        let table = NamedTypeTable::from(vec![a, b, a, c]);
        for index in 0..4 {
            assert!(table.at(index).is_ok());
        }
        assert!(matches!(
            table.at(4),
            Err(NeuraxisDataError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = NamedTypeTable::new();
        assert_eq!(table.size(), 0);
        assert!(table.is_empty());
        assert!(table.at(0).is_err());

        let mut interner = NameInterner::new();
        let a = interner.intern("anytype");
        assert!(!table.contains(a));
        assert_eq!(table.index_of(a), None);
    }

    #[test]
    fn test_clear_invalidates_positions_not_tokens() {
        let mut interner = NameInterner::new();
        let (a, b, _) = abc(&mut interner);

        let mut table = NamedTypeTable::from(vec![a, b]);
        table.clear();

        assert_eq!(table.size(), 0);
        for index in 0..2 {
            assert!(matches!(
                table.at(index),
                Err(NeuraxisDataError::OutOfRange(_))
            ));
        }
        // The interner, not the table, owns identity.
        assert_eq!(interner.resolve(a).unwrap(), "anytype");
    }

    #[test]
    fn test_query_interleaved_with_append() {
        let mut interner = NameInterner::new();
        let (a, b, _) = abc(&mut interner);

        let mut table = NamedTypeTable::new();
        table.append(a);
        assert_eq!(table.index_of(a), Some(0));
        table.append(b);
        assert_eq!(table.at(1).unwrap(), b);
        assert_eq!(table.index_of(a), Some(0));
    }
}
