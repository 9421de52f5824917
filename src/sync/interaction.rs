//! Tracks whether a viewport change is user-initiated or something this
//! widget did on its own behalf.
//!
//! The programmatic state is acquired through an RAII scope rather than raw
//! flag toggling, so nested acquisitions and unwinding call sites can never
//! leave the widget stuck in the programmatic state.

use std::cell::Cell;
use std::rc::Rc;

/// Interaction flags consulted by the refinement scheduler.
///
/// Interior mutability keeps the tracker consultable while a programmatic
/// scope is alive; the whole subsystem runs on one event loop, so `Cell` is
/// all that is needed.
#[derive(Debug, Default)]
pub struct InteractionState {
    programmatic_depth: Rc<Cell<u32>>,
    pending_refine: Cell<bool>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True outside any programmatic scope. Viewport signals observed while
    /// this is false must be ignored for scheduling purposes.
    pub fn is_user_interaction(&self) -> bool {
        self.programmatic_depth.get() == 0
    }

    /// Enters the programmatic state until the returned scope drops.
    /// Reentrant: nested scopes stack, and the state reverts to
    /// user-initiated only when the outermost scope ends.
    #[must_use = "the programmatic state ends when the scope is dropped"]
    pub fn programmatic(&self) -> ProgrammaticScope {
        self.programmatic_depth.set(self.programmatic_depth.get() + 1);
        ProgrammaticScope {
            depth: Rc::clone(&self.programmatic_depth),
        }
    }

    /// Runs `action` inside a programmatic scope, restoring the
    /// user-interaction state on all exit paths.
    pub fn run_programmatic<T>(&self, action: impl FnOnce() -> T) -> T {
        let _scope = self.programmatic();
        action()
    }

    pub fn is_pending_refine(&self) -> bool {
        self.pending_refine.get()
    }

    pub fn set_pending_refine(&self, pending: bool) {
        self.pending_refine.set(pending);
    }
}

/// Scoped acquisition of the programmatic state. Dropping the scope (on any
/// exit path, including unwinding) releases one level of nesting.
#[derive(Debug)]
pub struct ProgrammaticScope {
    depth: Rc<Cell<u32>>,
}

impl Drop for ProgrammaticScope {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}
