use alloc::vec::Vec;

use crate::Surface;

/// Visual state of one indicator (dot).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorState {
    pub active: bool,
    /// Disabled indicators reject activation.
    pub disabled: bool,
}

/// Keeps a row of indicators in step with the committed position.
///
/// Each indicator maps to one logical position. With `disable_current` (multi-item views) the
/// indicator sitting exactly on the current position is also disabled.
#[derive(Clone, Debug, Default)]
pub struct IndicatorSet {
    positions: Vec<usize>,
    states: Vec<IndicatorState>,
    disable_current: bool,
}

impl IndicatorSet {
    pub fn new(positions: Vec<usize>, disable_current: bool) -> Self {
        let states = alloc::vec![IndicatorState::default(); positions.len()];
        Self {
            positions,
            states,
            disable_current,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn position(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied()
    }

    pub fn is_disabled(&self, index: usize) -> bool {
        self.states.get(index).is_some_and(|s| s.disabled)
    }

    pub fn active(&self) -> Option<usize> {
        self.states.iter().position(|s| s.active)
    }

    /// The indicator representing `position`: an exact match, else the one with the greatest
    /// position below it, else the first.
    pub fn covering(&self, position: usize) -> Option<usize> {
        if self.positions.is_empty() {
            return None;
        }
        if let Some(exact) = self.positions.iter().position(|&p| p == position) {
            return Some(exact);
        }
        self.positions
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p <= position)
            .max_by_key(|&(_, &p)| p)
            .map(|(i, _)| i)
            .or(Some(0))
    }

    /// Marks exactly one indicator active for `position` and pushes changed states.
    pub fn sync_to<K>(&mut self, surface: &mut (impl Surface<K> + ?Sized), position: usize) {
        self.apply(surface, position, false);
    }

    /// Like [`IndicatorSet::sync_to`], but pushes every state (initial render).
    pub fn reset<K>(&mut self, surface: &mut (impl Surface<K> + ?Sized), position: usize) {
        self.apply(surface, position, true);
    }

    fn apply<K>(&mut self, surface: &mut (impl Surface<K> + ?Sized), position: usize, force: bool) {
        let Some(active) = self.covering(position) else {
            return;
        };
        for (i, state) in self.states.iter_mut().enumerate() {
            let next = IndicatorState {
                active: i == active,
                disabled: self.disable_current && self.positions[i] == position,
            };
            if force || *state != next {
                *state = next;
                surface.set_indicator(i, next);
            }
        }
        ctrace!(position, active, "IndicatorSet: synced");
    }
}
