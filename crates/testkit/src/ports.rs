//! Worker-indexed ports so parallel test workers never bind the same port.

use crate::fixtures::fatal;
use std::collections::BTreeSet;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Set by cargo-nextest for every test process, 0-based.
const NEXTEST_SLOT_ENV: &str = "NEXTEST_TEST_GLOBAL_SLOT";

static WORKERS: Mutex<WorkerPool> = Mutex::new(WorkerPool::new());

thread_local! {
    static THREAD_WORKER: WorkerSlot = WorkerSlot::acquire();
}

/// Hands out the lowest free worker index, starting at 1.
#[derive(Debug)]
struct WorkerPool {
    released: BTreeSet<u16>,
    next: u16,
}

impl WorkerPool {
    const fn new() -> Self {
        Self {
            released: BTreeSet::new(),
            next: 1,
        }
    }

    fn acquire(&mut self) -> u16 {
        if let Some(worker) = self.released.pop_first() {
            return worker;
        }

        let worker = self.next;
        self.next = worker.checked_add(1).unwrap_or_else(|| {
            fatal(
                "allocate worker index",
                format!("all {} worker indices are in use", u16::MAX - 1),
            )
        });
        worker
    }

    fn release(&mut self, worker: u16) {
        self.released.insert(worker);
    }
}

/// A worker index held by one thread, returned to the pool when the thread exits.
struct WorkerSlot(u16);

impl WorkerSlot {
    fn acquire() -> Self {
        let worker = WORKERS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .acquire();
        WorkerSlot(worker)
    }
}

impl Drop for WorkerSlot {
    fn drop(&mut self) {
        WORKERS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .release(self.0);
    }
}

/// Index of the current test worker, starting at 1.
///
/// Under nextest every test runs in its own process and the global slot
/// identifies it. Under libtest tests share a process and run on separate
/// threads, so each thread holds the lowest index not taken by another live
/// thread. Indices stay within the number of concurrently running tests.
pub fn parallel_process() -> u16 {
    nextest_slot().unwrap_or_else(thread_worker)
}

fn nextest_slot() -> Option<u16> {
    let raw = std::env::var(NEXTEST_SLOT_ENV).ok()?;
    Some(worker_from_slot(&raw))
}

/// Worker index for a nextest slot. A malformed slot is a runner misconfiguration.
fn worker_from_slot(raw: &str) -> u16 {
    let worker = raw
        .trim()
        .parse::<u16>()
        .ok()
        .and_then(|slot| slot.checked_add(1))
        .unwrap_or_else(|| {
            fatal(
                "read worker slot",
                format!("{}={:?} is not a slot below {}", NEXTEST_SLOT_ENV, raw, u16::MAX),
            )
        });

    debug!(slot = raw, worker, "Using nextest worker slot");
    worker
}

fn thread_worker() -> u16 {
    THREAD_WORKER.with(|slot| slot.0)
}

/// `base + worker`, failing the test if the result leaves the port range.
pub fn port_for_worker(base: u16, worker: u16) -> u16 {
    base.checked_add(worker).unwrap_or_else(|| {
        fatal(
            "derive port",
            format!("base port {} + worker {} exceeds {}", base, worker, u16::MAX),
        )
    })
}

/// Port for the current worker: `base + parallel_process()`.
pub fn get_int_port(base: u16) -> u16 {
    port_for_worker(base, parallel_process())
}

pub fn get_string_port(base: u16) -> String {
    get_int_port(base).to_string()
}

/// `host:port` for the current worker. IPv6 literals are bracketed.
pub fn get_host_port(host: &str, base: u16) -> String {
    join_host_port(host, get_int_port(base))
}

pub fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::net::SocketAddr;
    use std::sync::{Arc, Barrier};

    #[test]
    fn test_port_for_worker_offsets_base() {
        assert_eq!(port_for_worker(55000, 1), 55001);
        assert_eq!(port_for_worker(55000, 7), 55007);
    }

    #[test]
    fn test_port_for_worker_is_injective() {
        let ports: HashSet<u16> = (1..=64).map(|w| port_for_worker(40000, w)).collect();
        assert_eq!(ports.len(), 64);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_port_for_worker_overflow_is_fatal() {
        port_for_worker(u16::MAX, 1);
    }

    #[test]
    fn test_parallel_process_is_stable_and_positive() {
        let first = parallel_process();
        assert!(first >= 1);
        assert_eq!(parallel_process(), first);
    }

    #[test]
    fn test_concurrent_threads_get_distinct_workers() {
        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    let worker = thread_worker();
                    barrier.wait();
                    worker
                })
            })
            .collect();
        let workers: HashSet<u16> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(workers.len(), 8);
        assert!(workers.iter().all(|w| *w >= 1));
    }

    #[test]
    fn test_pool_hands_out_lowest_free_index() {
        let mut pool = WorkerPool::new();
        assert_eq!(pool.acquire(), 1);
        assert_eq!(pool.acquire(), 2);
        assert_eq!(pool.acquire(), 3);

        pool.release(2);
        pool.release(1);
        assert_eq!(pool.acquire(), 1);
        assert_eq!(pool.acquire(), 2);
        assert_eq!(pool.acquire(), 4);
    }

    #[test]
    fn test_pool_never_hands_out_zero() {
        let mut pool = WorkerPool::new();
        for _ in 0..1000 {
            let worker = pool.acquire();
            assert_ne!(worker, 0);
            pool.release(worker);
        }
        assert_eq!(pool.acquire(), 1);
    }

    #[test]
    #[should_panic(expected = "worker indices are in use")]
    fn test_pool_exhaustion_is_fatal() {
        let mut pool = WorkerPool::new();
        for _ in 0..u16::MAX {
            pool.acquire();
        }
    }

    #[test]
    fn test_sequential_threads_reuse_indices() {
        let workers: Vec<u16> = (0..2000)
            .map(|_| std::thread::spawn(thread_worker).join().unwrap())
            .collect();

        assert!(workers.iter().all(|w| *w >= 1));
        // Bounded by the tests running concurrently, not by the threads spawned.
        assert!(workers.iter().all(|w| *w < 500), "{:?}", workers.iter().max());
    }

    #[test]
    fn test_worker_from_slot() {
        assert_eq!(worker_from_slot("0"), 1);
        assert_eq!(worker_from_slot("41"), 42);
        assert_eq!(worker_from_slot("7\n"), 8);
    }

    #[test]
    #[should_panic(expected = "NEXTEST_TEST_GLOBAL_SLOT")]
    fn test_worker_from_unparsable_slot_is_fatal() {
        worker_from_slot("first");
    }

    #[test]
    #[should_panic(expected = "is not a slot below")]
    fn test_worker_from_last_slot_is_fatal() {
        worker_from_slot("65535");
    }

    #[test]
    fn test_string_port_matches_int_port() {
        assert_eq!(get_string_port(50000), get_int_port(50000).to_string());
    }

    #[test]
    fn test_host_port_ipv4() {
        let addr = get_host_port("127.0.0.1", 50000);
        let parsed: SocketAddr = addr.parse().unwrap();
        assert!(parsed.is_ipv4());
        assert_eq!(parsed.port(), get_int_port(50000));
    }

    #[test]
    fn test_host_port_brackets_ipv6() {
        assert_eq!(join_host_port("::1", 5353), "[::1]:5353");

        let parsed: SocketAddr = get_host_port("::1", 50000).parse().unwrap();
        assert!(parsed.is_ipv6());
    }

    #[test]
    fn test_host_port_hostname() {
        assert_eq!(join_host_port("localhost", 8080), "localhost:8080");
    }
}
