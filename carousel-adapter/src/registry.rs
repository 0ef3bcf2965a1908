#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::HashMap;

use carousel::{Carousel, Host};

#[cfg(feature = "std")]
type Slots<T> = HashMap<InstanceId, T>;
#[cfg(not(feature = "std"))]
type Slots<T> = BTreeMap<InstanceId, T>;

/// Handle for a registered instance. Ids are never reused by the registry that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(pub u64);

/// Something that must release its timers and callbacks before it is dropped.
pub trait Teardown {
    fn teardown(&mut self);
}

impl<H: Host<K>, K> Teardown for Carousel<H, K> {
    fn teardown(&mut self) {
        self.destroy();
    }
}

/// The instances a page created, owned by the bootstrap layer.
///
/// The engine never registers itself; whoever builds a carousel decides whether and where to
/// keep it.
#[derive(Debug)]
pub struct Registry<T> {
    slots: Slots<T>,
    next_id: u64,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            slots: Slots::default(),
            next_id: 0,
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, instance: T) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id += 1;
        self.slots.insert(id, instance);
        id
    }

    pub fn get(&self, id: InstanceId) -> Option<&T> {
        self.slots.get(&id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut T> {
        self.slots.get_mut(&id)
    }

    /// Removes an instance without tearing it down.
    pub fn remove(&mut self, id: InstanceId) -> Option<T> {
        self.slots.remove(&id)
    }

    pub fn contains(&self, id: InstanceId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Registered ids in creation order.
    pub fn ids(&self) -> Vec<InstanceId> {
        let mut ids: Vec<InstanceId> = self.slots.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl<T: Teardown> Registry<T> {
    /// Tears down and removes one instance. Unknown ids are a no-op.
    pub fn destroy(&mut self, id: InstanceId) -> Option<T> {
        let mut instance = self.slots.remove(&id)?;
        instance.teardown();
        Some(instance)
    }

    /// Tears down every instance (page unload). Returns them in creation order.
    pub fn destroy_all(&mut self) -> Vec<T> {
        let mut drained: Vec<(InstanceId, T)> =
            core::mem::take(&mut self.slots).into_iter().collect();
        drained.sort_unstable_by_key(|(id, _)| *id);
        drained
            .into_iter()
            .map(|(_, mut instance)| {
                instance.teardown();
                instance
            })
            .collect()
    }
}
