// File: crates/emuchart-core/src/router.rs
// Summary: The single application-wide pointer-down listener. Charts register
// their surface and shared state; a down event outside a chart's surface
// clears that chart's pin and hover.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::Rect;
use crate::state::ChartState;

/// Handle returned by `register`; required for symmetric unregistration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    surface: Rect,
    state: Rc<RefCell<ChartState>>,
}

/// Process-wide capture-phase pointer-down dispatcher. Single-threaded by
/// design: chart state is shared via `Rc<RefCell<_>>`.
#[derive(Default)]
pub struct PointerRouter {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chart's drawing surface (in application coordinates) with
    /// its shared interaction state.
    pub fn register(&mut self, surface: Rect, state: Rc<RefCell<ChartState>>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener { id, surface, state });
        id
    }

    /// Remove a previously registered chart. Must be called when the chart
    /// instance goes away, or the router leaks stale state handles.
    pub fn unregister(&mut self, id: ListenerId) {
        self.listeners.retain(|l| l.id != id);
    }

    /// Update a chart's surface rect (e.g. after an expanded toggle).
    pub fn update_surface(&mut self, id: ListenerId, surface: Rect) {
        if let Some(l) = self.listeners.iter_mut().find(|l| l.id == id) {
            l.surface = surface;
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch a pointer-down at application coordinates: every chart whose
    /// own surface does not contain the point loses its pin and hover state.
    pub fn pointer_down(&self, x: f64, y: f64) {
        for l in &self.listeners {
            if !l.surface.contains(x, y) {
                l.state.borrow_mut().clear_all();
            }
        }
    }
}
