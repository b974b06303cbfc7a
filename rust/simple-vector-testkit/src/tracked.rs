//! An element type that reports its own lifecycle.
//!
//! Counters are thread-local, so tests running in parallel on the default
//! harness do not observe each other. Call [`reset`] at the start of a test.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

thread_local! {
    static CREATED: Cell<usize> = const { Cell::new(0) };
    static DROPPED: Cell<usize> = const { Cell::new(0) };
    static CLONED: Cell<usize> = const { Cell::new(0) };
    static DEFAULTED: Cell<usize> = const { Cell::new(0) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<usize>>) {
    counter.with(|c| c.set(c.get() + 1));
}

fn read(counter: &'static std::thread::LocalKey<Cell<usize>>) -> usize {
    counter.with(Cell::get)
}

/// Lifecycle counts for the current thread since the last [`reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackedStats {
    /// Instances constructed by any means (new, default or clone).
    pub created: usize,
    /// Instances dropped.
    pub dropped: usize,
    /// Instances constructed by `Clone`.
    pub cloned: usize,
    /// Instances constructed by `Default`.
    pub defaulted: usize,
}

impl TrackedStats {
    /// Instances currently alive.
    pub fn live(&self) -> usize {
        self.created - self.dropped
    }
}

/// Zeroes all counters for the current thread.
pub fn reset() {
    for counter in [&CREATED, &DROPPED, &CLONED, &DEFAULTED] {
        counter.with(|c| c.set(0));
    }
}

pub fn stats() -> TrackedStats {
    TrackedStats {
        created: read(&CREATED),
        dropped: read(&DROPPED),
        cloned: read(&CLONED),
        defaulted: read(&DEFAULTED),
    }
}

/// An `i64` payload whose constructions and drops are counted.
pub struct Tracked {
    value: i64,
}

impl Tracked {
    pub fn new(value: i64) -> Tracked {
        bump(&CREATED);
        Tracked { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Default for Tracked {
    fn default() -> Self {
        bump(&DEFAULTED);
        Tracked::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        bump(&CLONED);
        Tracked::new(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        bump(&DROPPED);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for Tracked {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state)
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

impl From<i64> for Tracked {
    fn from(value: i64) -> Self {
        Tracked::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        reset();
        {
            let a = Tracked::new(5);
            let b = a.clone();
            let c = Tracked::default();
            assert_eq!(b.value(), 5);
            assert_eq!(c.value(), 0);
            let s = stats();
            assert_eq!(s.created, 3);
            assert_eq!(s.cloned, 1);
            assert_eq!(s.defaulted, 1);
            assert_eq!(s.live(), 3);
        }
        assert_eq!(stats().live(), 0);
    }
}
