pub mod alert;
pub mod codec;
pub mod cookie;
pub mod model;
pub mod store;

use model::SizePreference;
use store::KeyValueStore;

pub const KEY_PREFIX: &str = "size:";

/// Storage key for the size preference of a page path.
pub fn size_key(pathname: &str) -> String {
    format!("{}{}", KEY_PREFIX, pathname)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackerState {
    Unsubscribed,
    Subscribed,
}

/// Per-process resize subscription. `Subscribed` is terminal: there is no
/// way back, and the path captured by `begin` never changes afterwards,
/// even if the page location is mutated in place without a reload.
pub struct ResizeTracker {
    state: TrackerState,
    path: Option<String>,
}

impl ResizeTracker {
    pub fn new() -> ResizeTracker {
        ResizeTracker {
            state: TrackerState::Unsubscribed,
            path: None,
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_subscribed(&self) -> bool {
        self.state == TrackerState::Subscribed
    }

    /// Transition to `Subscribed`, capturing `pathname`. Returns `true` on
    /// the first call only; callers install their resize listener exactly
    /// when this returns `true`, so re-running page-init code cannot stack
    /// handlers.
    pub fn begin(&mut self, pathname: &str) -> bool {
        if self.state == TrackerState::Subscribed {
            return false;
        }
        self.path = Some(pathname.to_string());
        self.state = TrackerState::Subscribed;
        true
    }

    /// Storage key, fixed at subscription time.
    pub fn key(&self) -> Option<String> {
        self.path.as_deref().map(size_key)
    }

    /// Persist the latest viewport size under the captured path key.
    /// Best-effort: the status exists to be ignorable. A tracker that was
    /// never subscribed writes nothing.
    pub fn record<S: KeyValueStore>(&self, store: &mut S, width: u32, height: u32) -> bool {
        let key = match self.key() {
            Some(k) => k,
            None => return false,
        };
        store.set(&key, &codec::encode(&SizePreference { height, width }))
    }
}

/// Read back the persisted size for `pathname`. Absent or malformed values
/// read as no preference.
pub fn saved_size<S: KeyValueStore>(store: &S, pathname: &str) -> Option<SizePreference> {
    codec::decode_opt(store.get(&size_key(pathname)).as_deref())
}
