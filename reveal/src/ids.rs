//! Identifiers for animation registrations.

use serde::{Deserialize, Serialize};

/// Opaque handle to one animation registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RegId(pub u32);

/// Monotonic allocator for registration ids.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc(&mut self) -> RegId {
        let id = RegId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc(), RegId(0));
        assert_eq!(alloc.alloc(), RegId(1));
        assert_eq!(alloc.alloc(), RegId(2));
    }
}
