//! Unit tests for lexical environments.

use super::env::EnvTable;

#[test]
fn test_lookup_in_root() {
    let mut table = EnvTable::new();
    let root = table.root();
    let ada = table.add_env(root);
    table.add(root, "Ada", Some(ada));

    let found = table.lookup(root, "Ada");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ada");
    assert_eq!(found[0].opened_env, Some(ada));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let mut table = EnvTable::new();
    let root = table.root();
    table.add(root, "Text_IO", None);

    assert_eq!(table.lookup(root, "TEXT_IO").len(), 1);
    assert_eq!(table.lookup(root, "text_io").len(), 1);
}

#[test]
fn test_lookup_walks_parents_nearest_first() {
    let mut table = EnvTable::new();
    let root = table.root();
    let outer = table.add_env(root);
    let inner = table.add_env(outer);
    let outer_x = table.add_env(root);
    let inner_x = table.add_env(root);

    table.add(outer, "X", Some(outer_x));
    table.add(inner, "X", Some(inner_x));

    let found = table.lookup(inner, "X");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].opened_env, Some(inner_x));
    assert_eq!(found[1].opened_env, Some(outer_x));

    // Lookups never descend into nested environments
    assert_eq!(table.lookup(outer, "X").len(), 1);
    assert!(table.lookup(root, "X").is_empty());
}

#[test]
fn test_overloads_keep_declaration_order() {
    let mut table = EnvTable::new();
    let root = table.root();
    let first = table.add_env(root);
    let second = table.add_env(root);

    table.add(root, "Put", Some(first));
    table.add(root, "Put", Some(second));

    let found = table.lookup(root, "put");
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].opened_env, Some(first));
    assert_eq!(found[1].opened_env, Some(second));
}

#[test]
fn test_parent_links() {
    let mut table = EnvTable::new();
    let root = table.root();
    let child = table.add_env(root);

    assert_eq!(table.get_parent(root), None);
    assert_eq!(table.get_parent(child), Some(root));
    assert!(table.get_env(child).unwrap().get_elements("x").is_empty());
}

#[test]
fn test_foreign_env_resolves_nothing() {
    let mut other = EnvTable::new();
    let other_root = other.root();
    other.add_env(other_root);
    let foreign = other.add_env(other_root);

    let mut table = EnvTable::new();
    let root = table.root();
    table.add(root, "X", None);

    assert!(table.get_env(foreign).is_none());
    assert_eq!(table.get_parent(foreign), None);
    assert!(table.lookup(foreign, "X").is_empty());
}
