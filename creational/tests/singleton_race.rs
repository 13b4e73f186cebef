//! Runs in its own process so the instance is still uninitialized when the
//! threads below reach it.

use std::sync::Barrier;
use std::thread;

use creational::{instance, Singleton};

fn addr(s: &'static dyn Singleton) -> usize {
    s as *const dyn Singleton as *const () as usize
}

#[test]
fn racing_first_accesses_observe_one_instance() {
    const THREADS: usize = 64;

    let barrier = Barrier::new(THREADS);
    let addrs: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    let handle = instance();
                    handle.do_work();
                    addr(handle)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect()
    });

    assert_eq!(addrs.len(), THREADS);
    let first = addrs[0];
    assert!(addrs.iter().all(|a| *a == first), "instances differ: {addrs:?}");
    assert_eq!(addr(instance()), first);
}
