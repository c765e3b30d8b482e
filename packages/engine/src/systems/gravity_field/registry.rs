use crate::domain::{BodyHandle, BodyState};

/// One registry slot. Removal empties the slot and bumps its generation;
/// slots are never compacted, so indices stay stable for the lifetime of
/// their occupant.
pub(super) struct Slot {
    pub(super) generation: u32,
    pub(super) body: Option<BodyState>,
}

/// Generational slot arena holding every registered body
pub(super) struct BodyRegistry {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl BodyRegistry {
    pub(super) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub(super) fn insert(&mut self, mut body: BodyState) -> BodyHandle {
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                let handle = BodyHandle::new(index, slot.generation);
                body.handle = Some(handle);
                slot.body = Some(body);
                handle
            }
            None => {
                let handle = BodyHandle::new(self.slots.len() as u32, 0);
                body.handle = Some(handle);
                self.slots.push(Slot {
                    generation: 0,
                    body: Some(body),
                });
                handle
            }
        };
        self.len += 1;
        handle
    }

    /// Remove exactly the referenced body. Stale or unknown handles are ignored.
    pub(super) fn remove(&mut self, handle: BodyHandle) -> Option<BodyState> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        let body = slot.body.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index());
        self.len -= 1;
        Some(body)
    }

    pub(super) fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.body.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
            }
        }
        self.len = 0;
    }

    pub(super) fn get(&self, handle: BodyHandle) -> Option<&BodyState> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.body.as_ref()
    }

    pub(super) fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut BodyState> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.body.as_mut()
    }

    pub(super) fn len(&self) -> usize {
        self.len
    }

    pub(super) fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub(super) fn slots_mut(&mut self) -> &mut [Slot] {
        &mut self.slots
    }

    /// Occupied slots in stable index order
    pub(super) fn iter(&self) -> impl Iterator<Item = &BodyState> {
        self.slots.iter().filter_map(|s| s.body.as_ref())
    }

    pub(super) fn iter_mut(&mut self) -> impl Iterator<Item = &mut BodyState> {
        self.slots.iter_mut().filter_map(|s| s.body.as_mut())
    }
}
