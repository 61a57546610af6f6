//! Gesture Table
//!
//! Swipe state for every row of one list, keyed by record id.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;
use leptos_swipe::{SwipeConfig, SwipeMachine, SwipeStore};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureTable {
    config: SwipeConfig,
    machines: HashMap<u32, SwipeMachine>,
}

impl GestureTable {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            machines: HashMap::new(),
        }
    }

    /// Machine for a row; rows never touched are closed
    pub fn machine(&self, id: u32) -> SwipeMachine {
        self.machines
            .get(&id)
            .copied()
            .unwrap_or_else(|| SwipeMachine::new(self.config))
    }

    pub fn machine_mut(&mut self, id: u32) -> &mut SwipeMachine {
        let config = self.config;
        self.machines.entry(id).or_insert_with(|| SwipeMachine::new(config))
    }

    /// Forget rows whose ids left the sequence, so a returning id starts closed
    pub fn retain_ids(&mut self, ids: impl IntoIterator<Item = u32>) {
        let live: HashSet<u32> = ids.into_iter().collect();
        self.machines.retain(|id, _| live.contains(id));
    }

    pub fn open_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .machines
            .iter()
            .filter(|(_, m)| m.is_open())
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn tracked(&self) -> usize {
        self.machines.len()
    }
}

/// One row's view into a shared table
#[derive(Clone, Copy)]
pub struct GestureSlot {
    pub table: RwSignal<GestureTable>,
    pub id: u32,
}

impl SwipeStore for GestureSlot {
    fn swipe(&self) -> SwipeMachine {
        self.table.with(|t| t.machine(self.id))
    }

    fn swipe_untracked(&self) -> SwipeMachine {
        self.table.with_untracked(|t| t.machine(self.id))
    }

    fn update_swipe<R>(&self, f: impl FnOnce(&mut SwipeMachine) -> R) -> Option<R> {
        let id = self.id;
        self.table.try_update(|t| f(t.machine_mut(id)))
    }
}
