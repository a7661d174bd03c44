use std::rc::Rc;

use log::debug;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayId {
    Contact,
    Calculator,
}

impl OverlayId {
    pub fn dom_id(self) -> &'static str {
        match self {
            OverlayId::Contact => "contact-popup",
            OverlayId::Calculator => "calculator-popup",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Overlay {
    id: OverlayId,
    active: bool,
}

/// Registry of the page's overlays. At most one of them is active.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupManager {
    overlays: Vec<Overlay>,
}

impl PopupManager {
    pub fn new(ids: &[OverlayId]) -> Self {
        let mut overlays: Vec<Overlay> = Vec::with_capacity(ids.len());
        for &id in ids {
            if !overlays.iter().any(|o| o.id == id) {
                overlays.push(Overlay { id, active: false });
            }
        }
        Self { overlays }
    }

    /// Activates `id` after deactivating every overlay. Ids that were never
    /// registered are ignored.
    pub fn open(&mut self, id: OverlayId) {
        if !self.is_registered(id) {
            debug!("Ignoring open for unregistered overlay {}", id.dom_id());
            return;
        }
        self.close_active_all();
        for overlay in self.overlays.iter_mut().filter(|o| o.id == id) {
            overlay.active = true;
        }
    }

    pub fn close_active_all(&mut self) {
        for overlay in self.overlays.iter_mut() {
            overlay.active = false;
        }
    }

    pub fn is_registered(&self, id: OverlayId) -> bool {
        self.overlays.iter().any(|o| o.id == id)
    }

    pub fn is_active(&self, id: OverlayId) -> bool {
        self.overlays.iter().any(|o| o.id == id && o.active)
    }

    pub fn active(&self) -> Option<OverlayId> {
        self.overlays.iter().find(|o| o.active).map(|o| o.id)
    }

    pub fn active_count(&self) -> usize {
        self.overlays.iter().filter(|o| o.active).count()
    }

    pub fn ids(&self) -> impl Iterator<Item = OverlayId> + '_ {
        self.overlays.iter().map(|o| o.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PopupAction {
    Open(OverlayId),
    CloseAll,
}

impl Reducible for PopupManager {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PopupAction::Open(id) => next.open(id),
            PopupAction::CloseAll => next.close_active_all(),
        }
        debug_assert!(next.active_count() <= 1);
        if next == *self {
            self
        } else {
            debug!("Popup state changed: active = {:?}", next.active());
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL: [OverlayId; 2] = [OverlayId::Contact, OverlayId::Calculator];

    #[test]
    fn open_leaves_exactly_that_overlay_active() {
        for id in ALL {
            let mut manager = PopupManager::new(&ALL);
            manager.open(id);
            assert_eq!(manager.active_count(), 1);
            assert_eq!(manager.active(), Some(id));
            for other in ALL.iter().filter(|&&o| o != id) {
                assert!(!manager.is_active(*other));
            }
        }
    }

    #[test]
    fn open_supersedes_previous_overlay() {
        let mut manager = PopupManager::new(&ALL);
        manager.open(OverlayId::Contact);
        manager.open(OverlayId::Calculator);
        assert_eq!(manager.active(), Some(OverlayId::Calculator));
        assert_eq!(manager.active_count(), 1);
    }

    #[test]
    fn close_all_is_idempotent() {
        let mut manager = PopupManager::new(&ALL);
        manager.close_active_all();
        assert_eq!(manager.active(), None);

        manager.open(OverlayId::Contact);
        for _ in 0..3 {
            manager.close_active_all();
            assert_eq!(manager.active_count(), 0);
        }
    }

    #[test]
    fn unregistered_overlay_is_a_no_op() {
        let mut manager = PopupManager::new(&[OverlayId::Contact]);
        manager.open(OverlayId::Contact);
        manager.open(OverlayId::Calculator);
        assert_eq!(manager.active(), Some(OverlayId::Contact));
        assert_eq!(manager.active_count(), 1);
    }

    #[test]
    fn overlays_start_inactive() {
        let manager = PopupManager::new(&ALL);
        assert_eq!(manager.active(), None);
        assert!(ALL.iter().all(|&id| manager.is_registered(id) && !manager.is_active(id)));
    }

    #[test]
    fn duplicate_registration_is_collapsed() {
        let manager = PopupManager::new(&[OverlayId::Contact, OverlayId::Contact]);
        assert_eq!(manager.ids().count(), 1);
    }

    #[test]
    fn reducer_returns_same_state_when_nothing_changes() {
        let state = Rc::new(PopupManager::new(&ALL));
        let next = state.clone().reduce(PopupAction::CloseAll);
        assert!(Rc::ptr_eq(&state, &next));

        let opened = state.reduce(PopupAction::Open(OverlayId::Contact));
        assert_eq!(opened.active(), Some(OverlayId::Contact));
    }
}
