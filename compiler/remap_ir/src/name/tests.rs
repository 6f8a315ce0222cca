use super::*;

#[test]
fn test_name_raw_roundtrip() {
    let name = Name::from_raw(42);
    assert_eq!(name.raw(), 42);
    assert_eq!(name.index(), 42);
}

#[test]
fn test_name_default_is_empty() {
    assert_eq!(Name::default(), Name::EMPTY);
}

#[test]
fn test_name_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Name::from_raw(7));
    set.insert(Name::from_raw(7)); // duplicate
    set.insert(Name::from_raw(8));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_name_debug() {
    assert_eq!(format!("{:?}", Name::from_raw(3)), "Name(3)");
}
