//! Input-surface-wide pointer routing.
//!
//! The host delivers every pointer event for the whole input surface (the
//! window, or the page) to one [`InputSurface`]. It routes presses and moves
//! to the widget under the pointer, but broadcasts every button release to
//! all registered widgets, so a drag ends even when the button is released
//! outside the widget that started it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec2;

use crate::input::{PointerButton, PointerEvent, Viewport};
use crate::interaction::{EditTarget, Editor};

/// A widget that can receive routed pointer input.
pub trait PointerTarget {
    fn viewport(&self) -> Viewport;

    /// Whether this widget holds the pointer (a drag is in progress).
    fn is_capturing(&self) -> bool;

    fn pointer_down(&mut self, button: PointerButton, surface_pos: Vec2);
    fn pointer_move(&mut self, surface_pos: Vec2);
    fn pointer_leave(&mut self);
    fn pointer_release(&mut self);
}

impl<M: EditTarget> PointerTarget for Editor<M> {
    fn viewport(&self) -> Viewport {
        Editor::viewport(self)
    }

    fn is_capturing(&self) -> bool {
        self.state().is_dragging()
    }

    fn pointer_down(&mut self, button: PointerButton, surface_pos: Vec2) {
        Editor::pointer_down(self, button, surface_pos);
    }

    fn pointer_move(&mut self, surface_pos: Vec2) {
        Editor::pointer_move(self, surface_pos);
    }

    fn pointer_leave(&mut self) {
        Editor::pointer_leave(self);
    }

    fn pointer_release(&mut self) {
        Editor::pointer_release(self);
    }
}

/// Shared handle under which widgets are registered.
pub type SharedTarget = Rc<RefCell<dyn PointerTarget>>;

/// Routes surface-wide pointer events to registered widgets.
///
/// Widgets are held weakly; dropping a widget unregisters it.
#[derive(Default)]
pub struct InputSurface {
    targets: Vec<Weak<RefCell<dyn PointerTarget>>>,
    /// Index of the widget the pointer was last over.
    under_pointer: Option<usize>,
}

impl InputSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget. Later registrations sit on top for hit-testing.
    pub fn subscribe(&mut self, target: &SharedTarget) {
        self.targets.push(Rc::downgrade(target));
    }

    /// Number of live registered widgets.
    pub fn len(&self) -> usize {
        self.targets.iter().filter(|t| t.strong_count() > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dispatch(&mut self, event: PointerEvent) {
        self.prune();
        match event {
            PointerEvent::ButtonDown { button, x, y } => {
                let pos = Vec2::new(x, y);
                let over = self.topmost_at(pos);
                self.enter(over);
                if let Some(target) = over.and_then(|i| self.target(i)) {
                    target.borrow_mut().pointer_down(button, pos);
                }
            }
            PointerEvent::Move { x, y } => self.route_move(Vec2::new(x, y)),
            PointerEvent::ButtonUp { x, y, .. } => {
                self.broadcast_release();
                // Hover resumes from wherever the button came up.
                self.route_move(Vec2::new(x, y));
            }
        }
    }

    /// Record the widget now under the pointer, telling the previous one it
    /// was left.
    fn enter(&mut self, over: Option<usize>) {
        if over == self.under_pointer {
            return;
        }
        if let Some(left) = self.under_pointer.and_then(|i| self.target(i)) {
            left.borrow_mut().pointer_leave();
        }
        self.under_pointer = over;
    }

    fn route_move(&mut self, pos: Vec2) {
        let capturing = self
            .live()
            .find(|(_, t)| t.borrow().is_capturing())
            .map(|(i, _)| i);
        if let Some(index) = capturing {
            tracing::trace!(index, "move routed to capturing widget");
            if let Some(target) = self.target(index) {
                target.borrow_mut().pointer_move(pos);
            }
            return;
        }

        let over = self.topmost_at(pos);
        self.enter(over);
        if let Some(target) = over.and_then(|i| self.target(i)) {
            target.borrow_mut().pointer_move(pos);
        }
    }

    fn broadcast_release(&mut self) {
        for (_, target) in self.live() {
            target.borrow_mut().pointer_release();
        }
    }

    fn topmost_at(&self, pos: Vec2) -> Option<usize> {
        self.live()
            .filter(|(_, t)| t.borrow().viewport().contains(pos))
            .map(|(i, _)| i)
            .last()
    }

    fn target(&self, index: usize) -> Option<SharedTarget> {
        self.targets.get(index)?.upgrade()
    }

    fn live(&self) -> impl Iterator<Item = (usize, SharedTarget)> + '_ {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(i, t)| t.upgrade().map(|t| (i, t)))
    }

    fn prune(&mut self) {
        let before = self.targets.len();
        self.targets.retain(|t| t.strong_count() > 0);
        if self.targets.len() != before {
            tracing::debug!(removed = before - self.targets.len(), "pruned dropped widgets");
            self.under_pointer = None;
        }
    }
}
