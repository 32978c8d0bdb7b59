//! Black-box behaviour of the cart store: scenarios and properties.

use std::sync::Arc;

use proptest::prelude::*;

use pyroshop_cart::{
    CART_STORAGE_KEY, CartActionKind, CartChanged, CartLine, CartStorage, CartStore,
    FileStorage, MemoryStorage, NoopNotifier, snapshot,
};
use pyroshop_catalog::Product;
use pyroshop_core::{Entity, Money, ProductId};
use pyroshop_events::Subscription;

fn product(id: &str, price: u64) -> Product {
    Product::new(ProductId::new(id).unwrap(), format!("Product {id}"), Money::new(price))
        .unwrap()
        .with_description("test product")
        .with_category("sparklers")
        .with_stock(50)
}

fn id(raw: &str) -> ProductId {
    ProductId::new(raw).unwrap()
}

fn open(storage: MemoryStorage) -> CartStore<MemoryStorage> {
    CartStore::open(storage, Arc::new(NoopNotifier))
}

fn expected_subtotal(store: &CartStore<MemoryStorage>) -> Money {
    let total: u64 = store
        .lines()
        .iter()
        .map(|l| l.price().amount() * u64::from(l.quantity()))
        .sum();
    Money::new(total)
}

fn summary(store: &CartStore<MemoryStorage>) -> Vec<(String, u32)> {
    store
        .lines()
        .iter()
        .map(|l| (l.id().to_string(), l.quantity()))
        .collect()
}

#[test]
fn add_add_readd_scenario() {
    let mut store = open(MemoryStorage::new());
    let p1 = product("P1", 299);
    let p2 = product("P2", 599);

    store.add_item(&p1);
    store.add_item(&p2);
    store.add_item(&p1);

    assert_eq!(
        summary(&store),
        vec![("P1".to_string(), 2), ("P2".to_string(), 1)]
    );
    assert_eq!(store.subtotal(), Money::new(1197));
    assert_eq!(store.item_count(), 3);

    store.set_quantity(&id("P2"), 0);

    assert_eq!(summary(&store), vec![("P1".to_string(), 2)]);
    assert_eq!(store.subtotal(), Money::new(598));
    assert_eq!(store.item_count(), 2);
}

#[test]
fn corrupt_snapshot_hydrates_to_empty() {
    for corrupt in ["{{{", "null", "[1,2,3]", r#"{"version":1}"#, "\u{0}garbage"] {
        let storage = MemoryStorage::new().with_entry(CART_STORAGE_KEY, corrupt);
        let store = open(storage);

        assert!(store.is_empty(), "corrupt snapshot {corrupt:?} was accepted");
        assert_eq!(store.subtotal(), Money::ZERO);
        assert_eq!(store.item_count(), 0);
    }
}

#[test]
fn cart_survives_a_new_session() {
    let storage = MemoryStorage::new();
    {
        let mut first = open(storage.clone());
        first.add_item(&product("1", 299));
        first.add_item(&product("1", 299));
        first.add_item(&product("2", 599));
    }

    let second = open(storage);
    assert_eq!(
        summary(&second),
        vec![("1".to_string(), 2), ("2".to_string(), 1)]
    );
    assert_eq!(second.subtotal(), Money::new(1197));
}

#[test]
fn last_writer_wins_between_sessions() {
    let storage = MemoryStorage::new();
    let mut tab_a = open(storage.clone());
    let mut tab_b = open(storage.clone());

    tab_a.add_item(&product("A", 10));
    tab_b.add_item(&product("B", 20));

    let reopened = open(storage);
    assert_eq!(summary(&reopened), vec![("B".to_string(), 1)]);
}

#[test]
fn file_backed_store_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = CartStore::open(FileStorage::new(dir.path()), Arc::new(NoopNotifier));
        store.add_item(&product("1", 299));
        store.set_quantity(&id("1"), 4);
    }

    let store = CartStore::open(FileStorage::new(dir.path()), Arc::new(NoopNotifier));
    assert_eq!(store.item_count(), 4);
    assert_eq!(store.subtotal(), Money::new(1196));
}

#[test]
fn legacy_snapshot_is_upgraded_on_open() {
    let legacy = r#"[{"id":"1","name":"Golden Sparklers","price":299,"image":"",
        "description":"d","category":"sparklers","stock":50,"quantity":2}]"#;
    let storage = MemoryStorage::new().with_entry(CART_STORAGE_KEY, legacy);
    let store = open(storage.clone());

    assert_eq!(store.item_count(), 2);
    let rewritten: serde_json::Value =
        serde_json::from_str(&storage.get(CART_STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(rewritten["version"], snapshot::SNAPSHOT_VERSION);
}

/// Exactly one change was published since the last call, and the snapshot in
/// storage mirrors the store again.
fn single_change(
    store: &CartStore<MemoryStorage>,
    storage: &MemoryStorage,
    sub: &Subscription<CartChanged>,
) -> CartActionKind {
    let published = sub.drain();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].state.lines(), store.lines());

    let saved = snapshot::decode(&storage.get(CART_STORAGE_KEY).unwrap()).unwrap();
    assert_eq!(saved.as_slice(), store.lines());
    published[0].action
}

#[test]
fn no_op_mutations_still_publish_and_persist() {
    let storage = MemoryStorage::new();
    let mut store = open(storage.clone());
    store.add_item(&product("1", 299));
    let sub = store.subscribe();

    storage.save(CART_STORAGE_KEY, "stale").unwrap();
    store.remove_item(&id("absent"));
    assert_eq!(single_change(&store, &storage, &sub), CartActionKind::ItemRemoved);

    storage.save(CART_STORAGE_KEY, "stale").unwrap();
    store.set_quantity(&id("absent"), 3);
    assert_eq!(single_change(&store, &storage, &sub), CartActionKind::QuantitySet);

    storage.save(CART_STORAGE_KEY, "stale").unwrap();
    store.set_quantity(&id("absent"), 0);
    assert_eq!(single_change(&store, &storage, &sub), CartActionKind::ItemRemoved);

    assert_eq!(summary(&store), vec![("1".to_string(), 1)]);
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
    Set(usize, i64),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..6).prop_map(Op::Add),
        1 => (0usize..6).prop_map(Op::Remove),
        2 => ((0usize..6), -3i64..20).prop_map(|(i, q)| Op::Set(i, q)),
        1 => Just(Op::Clear),
    ]
}

fn catalog() -> Vec<Product> {
    [(299, "1"), (599, "2"), (449, "3"), (199, "4"), (349, "5"), (899, "6")]
        .into_iter()
        .map(|(price, raw)| product(raw, price))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: adding distinct products yields one line per id and one unit per call.
    #[test]
    fn distinct_adds_count_calls(count in 0usize..30) {
        let mut store = open(MemoryStorage::new());
        for i in 0..count {
            store.add_item(&product(&format!("p{i}"), 100));
        }
        prop_assert_eq!(store.item_count(), count as u64);
        prop_assert_eq!(store.lines().len(), count);
    }

    /// Property: re-adding a present id bumps only that line by one.
    #[test]
    fn readd_increments_by_exactly_one(
        setup in prop::collection::vec(0usize..6, 1..15),
        pick in 0usize..15
    ) {
        let products = catalog();
        let mut store = open(MemoryStorage::new());
        for i in &setup {
            store.add_item(&products[*i]);
        }

        let target = &products[setup[pick % setup.len()]];
        let before_lines = store.lines().len();
        let before_qty = store.state().line(target.id()).map(CartLine::quantity).unwrap();

        store.add_item(target);

        prop_assert_eq!(store.lines().len(), before_lines);
        prop_assert_eq!(
            store.state().line(target.id()).map(CartLine::quantity),
            Some(before_qty + 1)
        );
    }

    /// Property: derived totals equal Σ price × quantity after every single mutation.
    #[test]
    fn totals_hold_after_every_mutation(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let products = catalog();
        let mut store = open(MemoryStorage::new());

        for op in ops {
            match op {
                Op::Add(i) => store.add_item(&products[i]),
                Op::Remove(i) => store.remove_item(products[i].id()),
                Op::Set(i, q) => store.set_quantity(products[i].id(), q),
                Op::Clear => store.clear_cart(),
            }

            prop_assert_eq!(store.subtotal(), expected_subtotal(&store));
            let count: u64 = store.lines().iter().map(|l| u64::from(l.quantity())).sum();
            prop_assert_eq!(store.item_count(), count);
            prop_assert!(store.lines().iter().all(|l| l.quantity() >= 1));
        }
    }

    /// Property: SetQuantity(id, 0) and RemoveItem(id) agree.
    #[test]
    fn set_zero_equals_remove(setup in prop::collection::vec(0usize..6, 1..12), pick in 0usize..12) {
        let products = catalog();
        let target = products[setup[pick % setup.len()]].id().clone();

        let mut via_set = open(MemoryStorage::new());
        let mut via_remove = open(MemoryStorage::new());
        for i in &setup {
            via_set.add_item(&products[*i]);
            via_remove.add_item(&products[*i]);
        }

        via_set.set_quantity(&target, 0);
        via_remove.remove_item(&target);

        prop_assert_eq!(via_set.state(), via_remove.state());
    }

    /// Property: clearing twice is the same as clearing once, from any state.
    #[test]
    fn clear_is_idempotent(setup in prop::collection::vec(0usize..6, 0..12)) {
        let products = catalog();
        let mut store = open(MemoryStorage::new());
        for i in &setup {
            store.add_item(&products[*i]);
        }

        store.clear_cart();
        let once = store.state().clone();
        store.clear_cart();

        prop_assert!(once.is_empty());
        prop_assert_eq!(once.subtotal(), Money::ZERO);
        prop_assert_eq!(store.state(), &once);
    }

    /// Property: hydrating well-formed lines persists exactly those lines.
    #[test]
    fn hydrate_then_persist_round_trips(
        quantities in prop::collection::vec(1u32..40, 0..6)
    ) {
        let products = catalog();
        let lines: Vec<CartLine> = quantities
            .iter()
            .enumerate()
            .map(|(i, q)| CartLine::new(products[i].clone(), *q).unwrap())
            .collect();

        let storage = MemoryStorage::new();
        let mut store = open(storage.clone());
        store.hydrate(lines.clone());

        let persisted = snapshot::decode(&storage.get(CART_STORAGE_KEY).unwrap()).unwrap();
        prop_assert_eq!(persisted, lines);
    }
}
