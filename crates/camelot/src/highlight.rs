//! Shared "highlighted key" state.
//!
//! A `HighlightCoordinator` owns one slot holding the highlighted key (or
//! none). Views never own the slot; they get a `HighlightReader` and a
//! `HighlightWriter` that share it. Every effective write bumps a version
//! number and notifies observers. Writing the value already held changes
//! nothing.
//!
//! Rendering is done against a `HighlightSnapshot`, taken once per frame
//! and handed to every view, so two views can never paint different values
//! of the slot in the same frame.
//!
//! ```rust
//! use camelot::{HighlightCoordinator, Key};
//!
//! let coordinator = HighlightCoordinator::new();
//! let writer = coordinator.writer();
//! let reader = coordinator.reader();
//!
//! let key: Key = "8A".parse().unwrap();
//! assert!(writer.set(Some(key)));
//! assert!(!writer.set(Some(key)));
//! assert_eq!(reader.read(), Some(key));
//! ```
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::key::Key;

/// Opacity of segments and rows outside the highlighted set.
pub const DIMMED_OPACITY: f32 = 0.3;

/// Duration of the opacity transition, in seconds.
pub const TRANSITION_SECS: f32 = 0.2;

type Observer = Rc<dyn Fn(Option<Key>)>;

struct Slot {
    key: Option<Key>,
    version: u64,
    observers: Vec<Observer>,
}

impl Slot {
    fn set(slot: &RefCell<Slot>, key: Option<Key>) -> bool {
        let observers = {
            let mut s = slot.borrow_mut();
            if s.key == key {
                return false;
            }
            s.key = key;
            s.version += 1;
            s.observers.clone()
        };
        // Notify outside the borrow so observers may read the slot.
        for observer in observers {
            observer(key);
        }
        true
    }

    fn snapshot(slot: &RefCell<Slot>) -> HighlightSnapshot {
        let s = slot.borrow();
        HighlightSnapshot {
            key: s.key,
            version: s.version,
        }
    }
}

/// The value of the slot at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightSnapshot {
    key: Option<Key>,
    version: u64,
}

impl HighlightSnapshot {
    /// A snapshot with nothing highlighted.
    pub const fn none() -> Self {
        Self {
            key: None,
            version: 0,
        }
    }

    pub const fn key(&self) -> Option<Key> {
        self.key
    }

    /// Number of effective changes made to the slot before this snapshot.
    pub const fn version(&self) -> u64 {
        self.version
    }

    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    /// `true` when `key` is the highlighted key.
    pub fn is(&self, key: Key) -> bool {
        self.key == Some(key)
    }
}

/// Owner of the shared highlight slot.
pub struct HighlightCoordinator {
    slot: Rc<RefCell<Slot>>,
}

impl Default for HighlightCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HighlightCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.slot.borrow();
        f.debug_struct("HighlightCoordinator")
            .field("key", &s.key)
            .field("version", &s.version)
            .field("observers", &s.observers.len())
            .finish()
    }
}

impl HighlightCoordinator {
    /// A coordinator with nothing highlighted.
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                key: None,
                version: 0,
                observers: Vec::new(),
            })),
        }
    }

    pub fn read(&self) -> Option<Key> {
        self.slot.borrow().key
    }

    /// Store `key`. Returns `true` if the slot changed.
    pub fn set(&self, key: Option<Key>) -> bool {
        Slot::set(&self.slot, key)
    }

    pub fn snapshot(&self) -> HighlightSnapshot {
        Slot::snapshot(&self.slot)
    }

    pub fn reader(&self) -> HighlightReader {
        HighlightReader {
            slot: Rc::clone(&self.slot),
        }
    }

    pub fn writer(&self) -> HighlightWriter {
        HighlightWriter {
            slot: Rc::clone(&self.slot),
        }
    }

    /// Call `observer` with the new value after every effective change.
    pub fn subscribe(&self, observer: impl Fn(Option<Key>) + 'static) {
        self.slot.borrow_mut().observers.push(Rc::new(observer));
    }
}

/// Read capability for the shared slot.
#[derive(Clone)]
pub struct HighlightReader {
    slot: Rc<RefCell<Slot>>,
}

impl HighlightReader {
    pub fn read(&self) -> Option<Key> {
        self.slot.borrow().key
    }

    pub fn snapshot(&self) -> HighlightSnapshot {
        Slot::snapshot(&self.slot)
    }
}

/// Write capability for the shared slot.
#[derive(Clone)]
pub struct HighlightWriter {
    slot: Rc<RefCell<Slot>>,
}

impl HighlightWriter {
    /// Store `key`. Returns `true` if the slot changed.
    pub fn set(&self, key: Option<Key>) -> bool {
        Slot::set(&self.slot, key)
    }

    pub fn clear(&self) -> bool {
        self.set(None)
    }
}

/// Pointer or focus transition on an element that stands for a key.
///
/// Focus maps to `Enter` and blur to `Leave`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(Key),
    Leave,
}

impl PointerEvent {
    pub fn is_enter(&self) -> bool {
        matches!(self, PointerEvent::Enter(_))
    }
}

/// Order events gathered during one frame so leaves come before enters,
/// keeping the relative order within each group.
///
/// The element being left and the element being entered may belong to
/// different views; applying the leave last would wipe the new highlight.
pub fn settle_events<T>(events: &mut [(T, PointerEvent)]) {
    events.sort_by_key(|(_, event)| event.is_enter());
}
