use crate::LibraryTable;

#[test]
fn iter_keeps_insertion_order() {
    let table: LibraryTable = [("b.nss", "b"), ("a.nss", "a"), ("c.nss", "c")]
        .into_iter()
        .collect();

    let names: Vec<_> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["b.nss", "a.nss", "c.nss"]);
}

#[test]
fn sorted_orders_by_name() {
    let table: LibraryTable = [
        ("k_inc_utility.nss", "u"),
        ("K_INC.nss", "K"),
        ("k_inc_debug.nss", "d"),
    ]
    .into_iter()
    .collect();

    let names: Vec<_> = table.sorted().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["K_INC.nss", "k_inc_debug.nss", "k_inc_utility.nss"]);
}

#[test]
fn insert_replaces_existing() {
    let mut table = LibraryTable::new();
    assert!(table.insert("a.nss", "old").is_none());
    assert_eq!(table.insert("a.nss", "new"), Some(b"old".to_vec()));
    assert_eq!(table.len(), 1);
    assert_eq!(table.iter().collect::<Vec<_>>(), [("a.nss", &b"new"[..])]);
}

#[test]
fn empty_table() {
    let table = LibraryTable::new();
    assert!(table.is_empty());
    assert!(table.sorted().is_empty());
}
