use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::ItemKey;

/// Display order of the carousel items.
///
/// Rotation is the only mutation; it moves one item between head and tail, so identities are
/// never lost or duplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSequence<K = ItemKey> {
    items: VecDeque<K>,
}

impl<K> ItemSequence<K> {
    pub fn new(items: impl IntoIterator<Item = K>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&K> {
        self.items.front()
    }

    /// Moves the head item to the tail and returns it.
    pub fn rotate_forward(&mut self) -> Option<&K> {
        let head = self.items.pop_front()?;
        self.items.push_back(head);
        self.items.back()
    }

    /// Moves the tail item to the head and returns it.
    pub fn rotate_backward(&mut self) -> Option<&K> {
        let tail = self.items.pop_back()?;
        self.items.push_front(tail);
        self.items.front()
    }

    pub fn to_vec(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.items.iter().cloned().collect()
    }
}
