use mixed_collection::{Collection, Key};

/// Snapshot of a collection's entries, in order.
pub fn entries<V: Clone>(c: &Collection<V>) -> Vec<(Key, V)> {
    c.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

pub fn k<K: Into<Key>>(key: K) -> Key {
    key.into()
}

/// `['item1', 'item2', 'foo' => 'bar', 'item3']`
pub fn mixed() -> Collection<&'static str> {
    let mut c = Collection::from(vec!["item1", "item2"]);
    c.set("foo", "bar");
    c.add("item3");
    c
}
