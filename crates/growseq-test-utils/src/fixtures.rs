//! Reusable element fixtures and growth-law oracles.

use std::cell::Cell;
use std::rc::Rc;

/// Shared tally of [`Tracked`] drops.
///
/// Hand out elements with [`track`](DropCounter::track), move them into the
/// container under test, then compare [`drops`](DropCounter::drops) against
/// the number of elements that should have been released.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element tagged with `id` that bumps this counter on drop.
    pub fn track(&self, id: usize) -> Tracked {
        Tracked {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Total drops recorded so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// Non-`Copy`, non-`Clone` element that records its own drop.
#[derive(Debug)]
pub struct Tracked {
    pub id: usize,
    drops: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Capacities a doubling container should report while `appends` elements
/// are appended one at a time, starting from `initial`.
///
/// Entry 0 is the capacity before any append; entry `k` is the capacity
/// after the `k`-th append.
pub fn reference_capacities(initial: usize, appends: usize) -> Vec<usize> {
    let mut caps = Vec::with_capacity(appends + 1);
    let mut cap = initial;
    caps.push(cap);
    for len in 0..appends {
        if len == cap {
            cap = if cap == 0 { 1 } else { cap * 2 };
        }
        caps.push(cap);
    }
    caps
}
