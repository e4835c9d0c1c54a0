//! View state owned by the controller.

use std::fmt;

use candy_commerce::catalog::Product;
use candy_commerce::search::FilterState;

/// Where the controller is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

impl LoadState {
    /// Whether filter changes may be rendered right away.
    pub fn can_render(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }
}

/// Identifies one load attempt. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LoadTicket(pub u64);

impl LoadTicket {
    pub fn next(self) -> Self {
        LoadTicket(self.0.wrapping_add(1))
    }
}

impl fmt::Display for LoadTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Everything the admin view remembers between events.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub load: LoadState,
    /// Last successfully loaded product set, replaced wholesale.
    pub products: Vec<Product>,
    pub filter: FilterState,
    /// Latest issued ticket; completions carrying any other are stale.
    pub ticket: LoadTicket,
}

impl ViewState {
    /// Issue a fresh ticket and enter `Loading`.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.ticket = self.ticket.next();
        self.load = LoadState::Loading;
        self.ticket
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.ticket == ticket
    }

    /// Products visible under the current filter.
    pub fn visible(&self) -> Vec<Product> {
        self.filter.apply(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_load_issues_increasing_tickets() {
        let mut state = ViewState::default();
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(second > first);
        assert!(state.is_current(second));
        assert!(!state.is_current(first));
        assert_eq!(state.load, LoadState::Loading);
    }

    #[test]
    fn test_only_loaded_renders() {
        assert!(LoadState::Loaded.can_render());
        assert!(!LoadState::Loading.can_render());
        assert!(!LoadState::LoadFailed.can_render());
        assert!(!LoadState::Idle.can_render());
    }
}
