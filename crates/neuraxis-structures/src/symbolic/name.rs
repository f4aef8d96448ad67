/// Interned token for a symbolic identifier.
///
/// Two `Name` values are equal if and only if they were issued by the same
/// [`NameInterner`](crate::symbolic::NameInterner) for the same spelling.
/// The token itself carries no text; resolving it back to its spelling goes
/// through the interner that issued it.
///
/// `Name` is `Copy`, so tables and signatures hold tokens by value and a
/// token stays valid after the container that stored it is cleared or
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name {
    pub(crate) index: u32,
}

impl Name {
    /// Position of this token in the issuing interner.
    ///
    /// Only meaningful relative to that interner; not stable across processes.
    pub fn index(&self) -> u32 {
        self.index
    }
}
