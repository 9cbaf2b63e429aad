use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

/// Typed reference to a value stored in an [`Arena`].
///
/// The id is split into two parts:
/// - `index`: slot in the arena
/// - `generation`: bumped every time the slot is freed, so a handle that
///   outlived its value never resolves to a later allocation
pub struct Handle<T> {
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    #[inline]
    const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation, _marker: PhantomData }
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

// Manual impls: derives would put bounds on `T`.
impl<T> Clone for Handle<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}v{})", self.index, self.generation)
    }
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generation-checked slot storage.
///
/// Freed slots are recycled through a free list; each free bumps the slot's
/// generation so old handles are rejected by [`get`](Self::get).
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<u32>,
    len: usize,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new(), free_list: Vec::new(), len: 0 }
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

    /// Stores `value` and returns its handle.
    pub fn insert(&mut self, value: T) -> Handle<T> {
        self.len += 1;

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.value.is_none());
            slot.value = Some(value);
            return Handle::new(index, slot.generation);
        }

        let index = u32::try_from(self.slots.len())
            .unwrap_or_else(|_| panic!("arena exhausted: more than u32::MAX slots"));
        self.slots.push(Slot { generation: 0, value: Some(value) });
        Handle::new(index, 0)
    }

    /// Removes the value behind `handle`. Returns `None` for stale handles.
    pub fn remove(&mut self, handle: Handle<T>) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }

        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(handle.index);
        self.len -= 1;
        Some(value)
    }

    #[inline]
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()
    }

    #[inline]
    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_mut()
    }

    #[inline]
    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.get(handle).is_some()
    }

    /// Iterates live values with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value
                .as_ref()
                .map(|v| (Handle::new(index as u32, slot.generation), v))
        })
    }

    /// Resolves a handle that the caller guarantees is live.
    ///
    /// # Panics
    /// Panics when the handle is stale or belongs to another arena.
    #[track_caller]
    pub(crate) fn expect(&self, handle: Handle<T>, kind: &str) -> &T {
        match self.get(handle) {
            Some(v) => v,
            None => panic!("stale or invalid {kind} handle {handle:?}"),
        }
    }

    #[track_caller]
    pub(crate) fn expect_mut(&mut self, handle: Handle<T>, kind: &str) -> &mut T {
        match self.get_mut(handle) {
            Some(v) => v,
            None => panic!("stale or invalid {kind} handle {handle:?}"),
        }
    }

    #[track_caller]
    pub(crate) fn expect_remove(&mut self, handle: Handle<T>, kind: &str) -> T {
        match self.remove(handle) {
            Some(v) => v,
            None => panic!("stale or invalid {kind} handle {handle:?}"),
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── insert / get ──────────────────────────────────────────────────────

    #[test]
    fn insert_then_get() {
        let mut arena = Arena::new();
        let h = arena.insert(42u32);
        assert_eq!(arena.get(h), Some(&42));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = Arena::new();
        let h = arena.insert(1u32);
        *arena.get_mut(h).unwrap() = 7;
        assert_eq!(arena.get(h), Some(&7));
    }

    // ── remove / reuse ────────────────────────────────────────────────────

    #[test]
    fn remove_returns_value_once() {
        let mut arena = Arena::new();
        let h = arena.insert("a");
        assert_eq!(arena.remove(h), Some("a"));
        assert_eq!(arena.remove(h), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn stale_handle_does_not_alias_reused_slot() {
        let mut arena = Arena::new();
        let old = arena.insert(1u32);
        arena.remove(old);

        let new = arena.insert(2u32);
        assert_eq!(old.index(), new.index()); // slot recycled
        assert_ne!(old.generation(), new.generation());
        assert_eq!(arena.get(old), None);
        assert_eq!(arena.get(new), Some(&2));
    }

    #[test]
    fn iter_skips_free_slots() {
        let mut arena = Arena::new();
        let a = arena.insert(1u32);
        let _b = arena.insert(2u32);
        arena.remove(a);
        let live: Vec<u32> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(live, vec![2]);
    }

    #[test]
    #[should_panic(expected = "stale or invalid texture handle")]
    fn expect_panics_on_stale_handle() {
        let mut arena = Arena::new();
        let h = arena.insert(0u8);
        arena.remove(h);
        arena.expect(h, "texture");
    }
}
