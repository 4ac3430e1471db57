use std::collections::HashSet;
use std::hash::Hash;

/// Identifies one screen visit. Results carry the visit they were issued
/// from so a response for a screen that has since been left is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Single in-flight operation flag (login submit, save, delete, place order).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskState {
    running: bool,
}

impl TaskState {
    pub fn is_running(self) -> bool {
        self.running
    }

    /// Marks the operation as started. Returns false if it already was.
    pub fn try_start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn finish(&mut self) {
        self.running = false;
    }
}

/// Per-entity busy flags. An action on a key that is already busy is a no-op.
#[derive(Debug, Clone)]
pub struct BusySet<K> {
    keys: HashSet<K>,
}

impl<K> Default for BusySet<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> BusySet<K> {
    /// Marks `key` busy. Returns false if it already was.
    pub fn try_start(&mut self, key: &K) -> bool {
        self.keys.insert(key.clone())
    }

    pub fn finish(&mut self, key: &K) {
        self.keys.remove(key);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
