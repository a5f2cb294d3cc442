//! Global listeners held while a modal or sheet is open.
//!
//! Opening acquires the escape-key listener, the outside-click listener
//! and the page scroll lock as one unit. If any of them fails, the ones
//! already taken are released before the error is returned, so a scope
//! is either fully held or not held at all.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{MapError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    EscapeKey,
    OutsideClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Where listeners are registered (the page, in a browser).
pub trait ListenerHost {
    fn add_listener(&mut self, kind: ListenerKind) -> Result<ListenerId>;
    fn remove_listener(&mut self, id: ListenerId);
    fn lock_scroll(&mut self) -> Result<()>;
    fn unlock_scroll(&mut self);
}

/// Proof that a modal's listeners are held. Released by [`ModalScope::release`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a dropped scope leaks its listeners; call release()"]
pub struct ModalScope {
    escape: ListenerId,
    outside_click: ListenerId,
}

impl ModalScope {
    pub fn acquire<H: ListenerHost + ?Sized>(host: &mut H) -> Result<Self> {
        let escape = host.add_listener(ListenerKind::EscapeKey)?;
        let outside_click = match host.add_listener(ListenerKind::OutsideClick) {
            Ok(id) => id,
            Err(e) => {
                host.remove_listener(escape);
                return Err(e);
            }
        };
        if let Err(e) = host.lock_scroll() {
            host.remove_listener(outside_click);
            host.remove_listener(escape);
            return Err(e);
        }
        debug!("modal scope acquired");
        Ok(Self {
            escape,
            outside_click,
        })
    }

    pub fn release<H: ListenerHost + ?Sized>(self, host: &mut H) {
        host.unlock_scroll();
        host.remove_listener(self.outside_click);
        host.remove_listener(self.escape);
        debug!("modal scope released");
    }
}

/// In-process listener table used by the session binary and tests.
#[derive(Debug, Default)]
pub struct EventRegistry {
    listeners: BTreeMap<ListenerId, ListenerKind>,
    next_id: u64,
    scroll_locks: u32,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.listeners.values().any(|k| *k == kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks > 0
    }
}

impl ListenerHost for EventRegistry {
    fn add_listener(&mut self, kind: ListenerKind) -> Result<ListenerId> {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, kind);
        Ok(id)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }

    fn lock_scroll(&mut self) -> Result<()> {
        self.scroll_locks = self
            .scroll_locks
            .checked_add(1)
            .ok_or_else(|| MapError::Listener("scroll lock overflow".into()))?;
        Ok(())
    }

    fn unlock_scroll(&mut self) {
        self.scroll_locks = self.scroll_locks.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Registry that refuses one kind of registration.
    struct Refusing {
        inner: EventRegistry,
        refuse_outside_click: bool,
        refuse_scroll: bool,
    }

    impl ListenerHost for Refusing {
        fn add_listener(&mut self, kind: ListenerKind) -> Result<ListenerId> {
            if self.refuse_outside_click && kind == ListenerKind::OutsideClick {
                return Err(MapError::Listener("outside click refused".into()));
            }
            self.inner.add_listener(kind)
        }
        fn remove_listener(&mut self, id: ListenerId) {
            self.inner.remove_listener(id)
        }
        fn lock_scroll(&mut self) -> Result<()> {
            if self.refuse_scroll {
                return Err(MapError::Listener("scroll lock refused".into()));
            }
            self.inner.lock_scroll()
        }
        fn unlock_scroll(&mut self) {
            self.inner.unlock_scroll()
        }
    }

    #[test]
    fn acquire_and_release_are_symmetric() {
        let mut reg = EventRegistry::new();
        let scope = ModalScope::acquire(&mut reg).unwrap();
        assert!(reg.is_listening(ListenerKind::EscapeKey));
        assert!(reg.is_listening(ListenerKind::OutsideClick));
        assert!(reg.is_scroll_locked());

        scope.release(&mut reg);
        assert_eq!(reg.listener_count(), 0);
        assert!(!reg.is_scroll_locked());
    }

    #[test]
    fn failed_registration_leaves_nothing_behind() {
        for (outside, scroll) in [(true, false), (false, true)] {
            let mut host = Refusing {
                inner: EventRegistry::new(),
                refuse_outside_click: outside,
                refuse_scroll: scroll,
            };
            assert!(ModalScope::acquire(&mut host).is_err());
            assert_eq!(host.inner.listener_count(), 0);
            assert!(!host.inner.is_scroll_locked());
        }
    }

    #[test]
    fn nested_scopes_keep_scroll_locked_until_last_release() {
        let mut reg = EventRegistry::new();
        let a = ModalScope::acquire(&mut reg).unwrap();
        let b = ModalScope::acquire(&mut reg).unwrap();
        a.release(&mut reg);
        assert!(reg.is_scroll_locked());
        assert_eq!(reg.listener_count(), 2);
        b.release(&mut reg);
        assert!(!reg.is_scroll_locked());
    }
}
