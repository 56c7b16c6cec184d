//! Shared registry under concurrent use

use crate::common::*;
use opkit::condition::{and, equal, not_equal, EQUAL};
use opkit::{ConverterRegistry, Oper};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;
const ITERATIONS: usize = 500;

#[test]
fn test_concurrent_conversion_of_shared_trees() {
    let registry = sql_registry();
    let tree = Arc::new(and([equal("id", 123), not_equal("deleted", false)]));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let tree = Arc::clone(&tree);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ITERATIONS {
                    let sql = to_sql(&registry, tree.as_ref()).unwrap();
                    assert_eq!(sql, "`id`=123 AND `deleted`!=false");
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn test_override_while_converting() {
    let registry: Arc<ConverterRegistry<u8>> = Arc::new(ConverterRegistry::new());
    registry.register("kv", EQUAL, |_, _| 1);
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let cond = equal("k", 0);
                while !done.load(Ordering::Acquire) {
                    // Either the old or the new converter, never a missing one
                    let out = registry.convert("kv", &cond).unwrap();
                    assert!(out == 1 || out == 2);
                }
            })
        })
        .collect();

    for _ in 0..ITERATIONS {
        registry.register("kv", EQUAL, |_, _| 2);
        registry.register("kv", EQUAL, |_, _| 1);
    }
    registry.register("kv", EQUAL, |_, _| 2);
    done.store(true, Ordering::Release);

    for r in readers {
        r.join().unwrap();
    }
    assert_eq!(registry.convert("kv", &equal("k", 0)).unwrap(), 2);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_operations_cross_threads() {
    // Operations are plain owned values: build on one thread, convert on another
    let cond = and([equal("a", 1), equal("b", "x")]);
    let handle = thread::spawn(move || {
        let registry = sql_registry();
        to_sql(&registry, &cond).unwrap()
    });
    assert_eq!(handle.join().unwrap(), "`a`=1 AND `b`='x'");
}

#[test]
fn test_registration_from_many_threads() {
    let registry: Arc<ConverterRegistry<String>> = Arc::new(ConverterRegistry::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let backend = format!("backend{}", i);
                registry.register(&backend, EQUAL, move |_, oper| {
                    format!("{}:{}", i, oper.key())
                });
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(registry.backends().len(), THREADS);
    for i in 0..THREADS {
        let out = registry.convert(&format!("backend{}", i), &equal("k", 0)).unwrap();
        assert_eq!(out, format!("{}:k", i));
    }
}
