use std::cell::Cell;

use bumpalo::Bump;
use cli_common::ArenaError;

/// Bump allocator with a hard byte budget. Individual allocations are never
/// freed; everything goes at once on `reset` or drop.
pub struct Arena {
    bump: Bump,
    capacity: usize,
    used: Cell<usize>,
}

impl Arena {
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            bump: Bump::with_capacity(capacity),
            capacity,
            used: Cell::new(0),
        }
    }

    /// Lexemes are disjoint substrings of the input, so the input length is
    /// always enough.
    pub fn for_input(input: &str) -> Self {
        Arena::with_capacity(input.len())
    }

    /// Allocate exactly `n` zeroed bytes.
    pub fn alloc(&self, n: usize) -> Result<&mut [u8], ArenaError> {
        self.reserve(n)?;
        Ok(self.bump.alloc_slice_fill_copy(n, 0u8))
    }

    pub fn alloc_str(&self, s: &str) -> Result<&str, ArenaError> {
        self.reserve(s.len())?;
        Ok(self.bump.alloc_str(s))
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn allocated(&self) -> usize {
        self.used.get()
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.used.get()
    }

    /// Release every allocation. Requires `&mut`, so no lexeme can still be
    /// borrowed from this arena.
    pub fn reset(&mut self) {
        self.bump.reset();
        self.used.set(0);
    }

    fn reserve(&self, n: usize) -> Result<(), ArenaError> {
        let used = self.used.get();

        match used.checked_add(n) {
            Some(total) if total <= self.capacity => {
                self.used.set(total);
                Ok(())
            }
            _ => Err(ArenaError::Exhausted {
                requested: n,
                remaining: self.remaining(),
            }),
        }
    }
}
