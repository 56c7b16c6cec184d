//! Composite shapes and pagination limits

use opkit::condition::{and, equal, gt, or, AND, OR};
use opkit::sorter::{order_asc, order_desc, orders, ORDERS};
use opkit::updater::{batch, dec, inc, set, BATCH};
use opkit::{get_limit, key, paginate, Kind, Oper, PageSize, Paginator, Payload};

#[test]
fn test_composites_store_typed_children() {
    let cond = and([equal("a", 1), or([gt("b", 2), gt("c", 3)])]);
    assert_eq!(cond.op(), AND);
    assert_eq!(cond.key(), "");
    assert_eq!(cond.kind(), Some(Kind::Condition));

    let children = cond.value().as_conditions().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[1].op(), OR);
    // Children stay typed all the way down
    for grandchild in children[1].value().as_conditions().unwrap() {
        assert_eq!(grandchild.kind(), Some(Kind::Condition));
    }
}

#[test]
fn test_singleton_collapse_is_uniform() {
    assert_eq!(and([equal("a", 1)]), equal("a", 1));
    assert_eq!(or([equal("a", 1)]), equal("a", 1));
    assert_eq!(orders([order_asc("a")]), order_asc("a"));
    assert_eq!(batch([inc("a")]), Some(inc("a")));
}

#[test]
fn test_empty_inputs() {
    assert_eq!(and(Vec::new()).value(), &Payload::Conditions(vec![]));
    assert_eq!(or(Vec::new()).op(), OR);
    assert_eq!(orders(Vec::new()).op(), ORDERS);
    // Batch is the one composite whose empty form is absent
    assert!(batch(Vec::new()).is_none());
}

#[test]
fn test_batch_children_in_order() {
    let (u1, u2) = (set("name", "x"), dec("stock"));
    let up = batch(vec![u1.clone(), u2.clone()]).unwrap();
    assert_eq!(up.op(), BATCH);
    assert_eq!(up.kind(), Some(Kind::Update));
    assert_eq!(up.value().as_updaters().unwrap(), &[u1, u2]);
}

#[test]
fn test_orders_priority() {
    let sorter = orders([order_desc("score"), order_asc("id")]);
    let keys: Vec<&str> = sorter
        .value()
        .as_sorters()
        .unwrap()
        .iter()
        .map(|s| s.key())
        .collect();
    assert_eq!(keys, vec!["score", "id"]);
}

#[test]
fn test_get_limit() {
    assert_eq!(get_limit(Some(&paginate(1, 20))), 20);
    assert_eq!(get_limit(None), 0);
}

#[test]
fn test_get_limit_soft_fallback() {
    // A paginator whose payload cannot produce a limit reads as "no limit"
    let odd: Paginator = key("").with_op("Page").paginator();
    assert_eq!(get_limit(Some(&odd)), 0);
}

#[test]
fn test_page_offsets() {
    assert_eq!(paginate(1, 20).page_size(), Some(&PageSize::new(1, 20)));
    assert_eq!(PageSize::new(4, 25).offset(), 75);
}
