//! Tests for the symbolic module
//!
//! Covers the interner/table contract as the interpreter layer uses it:
//! building type signatures out of interned tokens and reading them back
//! during argument checking.

use neuraxis_structures::symbolic::{NameInterner, NamedTypeTable};
use neuraxis_structures::NeuraxisDataError;

#[test]
fn test_signature_round_trip() {
    let mut interner = NameInterner::new();
    let spellings = [
        "integertype",
        "doubletype",
        "integertype",
        "arraytype",
        "literaltype",
    ];

    let mut signature = NamedTypeTable::with_capacity(spellings.len());
    for spelling in spellings {
        signature.append(interner.intern(spelling));
    }

    assert_eq!(signature.size(), spellings.len());
    for (slot, spelling) in spellings.iter().enumerate() {
        let token = signature.at(slot).unwrap();
        assert_eq!(interner.resolve(token).unwrap(), *spelling);
    }
}

#[test]
fn test_duplicate_slots_share_identity() {
    let mut interner = NameInterner::new();
    let mut signature = NamedTypeTable::new();
    signature.append(interner.intern("doubletype"));
    signature.append(interner.intern("doubletype"));

    // Both slots hold the one canonical token, found first at slot 0.
    assert_eq!(signature.at(0).unwrap(), signature.at(1).unwrap());
    assert_eq!(signature.index_of(signature.at(1).unwrap()), Some(0));
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_argument_check_against_signature() {
    let mut interner = NameInterner::new();
    let mut signature = NamedTypeTable::new();
    signature.append(interner.intern("connectiontype"));
    signature.append(interner.intern("integertype"));

    // Dispatch-side check: is the observed argument type part of the signature?
    let observed = interner.intern("integertype");
    assert!(signature.contains(observed));
    assert_eq!(signature.index_of(observed), Some(1));

    let unexpected = interner.intern("stringtype");
    assert!(!signature.contains(unexpected));
}

#[test]
fn test_out_of_range_reports_cardinality() {
    let mut interner = NameInterner::new();
    let table = NamedTypeTable::from(vec![interner.intern("anytype")]);

    match table.at(7) {
        Err(NeuraxisDataError::OutOfRange(msg)) => {
            assert!(msg.contains('7'));
            assert!(msg.contains('1'));
        }
        other => panic!("expected OutOfRange, got {:?}", other),
    }
}

#[test]
fn test_iteration_matches_positional_access() {
    let mut interner = NameInterner::new();
    let tokens: Vec<_> = ["a", "b", "c", "b"]
        .iter()
        .map(|spelling| interner.intern(spelling))
        .collect();

    let mut table = NamedTypeTable::new();
    table.extend(tokens.iter().copied());

    let iterated: Vec<_> = table.iter().collect();
    assert_eq!(iterated, tokens);
    assert_eq!(table.as_slice(), tokens.as_slice());
}
