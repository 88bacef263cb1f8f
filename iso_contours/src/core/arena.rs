//! Handle-indexed slot arena with a reusable free list.
//!
//! Values are addressed by [Handle] rather than by reference, so two owners (e.g. the start and
//! end endpoint maps of the stitcher) can point at the same value without aliasing. Every slot
//! carries a generation that is bumped when the slot is vacated, which makes a handle to a removed
//! value stale: lookups through it return `None` instead of reaching whatever value reused the
//! slot.

/// Handle to a value stored in a [SlotArena].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone)]
enum Slot<V> {
    Occupied { generation: u32, value: V },
    Vacant { generation: u32, next_free: Option<u32> },
}

/// Slot arena with a LIFO free list and generation-tagged handles.
///
/// Handle allocation is a pure function of the sequence of inserts/removes since the last
/// [SlotArena::clear], so identical operation sequences always produce identical handles.
#[derive(Debug, Clone)]
pub struct SlotArena<V> {
    slots: Vec<Slot<V>>,
    free_head: Option<u32>,
    len: usize,
}

impl<V> Default for SlotArena<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SlotArena<V> {
    /// Create a new empty arena.
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Number of live values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value`, reusing the most recently vacated slot if there is one.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` slots are required.
    pub fn insert(&mut self, value: V) -> Handle {
        self.len += 1;
        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            let (generation, next_free) = match *slot {
                Slot::Vacant {
                    generation,
                    next_free,
                } => (generation, next_free),
                Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
            };
            *slot = Slot::Occupied { generation, value };
            self.free_head = next_free;
            return Handle { index, generation };
        }

        let index = u32::try_from(self.slots.len()).expect("slot arena index overflow");
        self.slots.push(Slot::Occupied {
            generation: 0,
            value,
        });
        Handle {
            index,
            generation: 0,
        }
    }

    /// Remove and return the value for `handle`, or `None` if the handle is stale.
    pub fn remove(&mut self, handle: Handle) -> Option<V> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        match slot {
            Slot::Occupied { generation, .. } if *generation == handle.generation => {}
            _ => return None,
        }

        let vacant = Slot::Vacant {
            generation: handle.generation.wrapping_add(1),
            next_free: self.free_head,
        };
        let Slot::Occupied { value, .. } = std::mem::replace(slot, vacant) else {
            unreachable!("slot checked as occupied above");
        };
        self.free_head = Some(handle.index);
        self.len -= 1;
        Some(value)
    }

    /// Get a mutable reference to the value for `handle`, or `None` if the handle is stale.
    #[inline]
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut V> {
        match self.slots.get_mut(handle.index as usize)? {
            Slot::Occupied { generation, value } if *generation == handle.generation => Some(value),
            _ => None,
        }
    }

    /// Remove all values, keeping the allocated capacity for reuse.
    ///
    /// Generations restart, so handles issued before the clear must not be used afterwards.
    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}
