//! View-scoped state cell with a single change observer.

use std::cell::RefCell;
use std::rc::Rc;

type Observer = Rc<dyn Fn()>;

/// Interior-mutable state owned by one mounted view.
///
/// Borrows never outlive a single call, so async flows can await between updates.
pub(crate) struct StateCell<T> {
    state: RefCell<T>,
    observer: RefCell<Option<Observer>>,
}

impl<T: Clone> StateCell<T> {
    pub(crate) const fn new(initial: T) -> Self {
        Self {
            state: RefCell::new(initial),
            observer: RefCell::new(None),
        }
    }

    pub(crate) fn snapshot(&self) -> T {
        self.state.borrow().clone()
    }

    pub(crate) fn read<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.state.borrow())
    }

    /// Mutate the state, then notify the observer.
    pub(crate) fn update<R>(&self, update: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut state = self.state.borrow_mut();
            update(&mut state)
        };
        self.notify();
        result
    }

    pub(crate) fn set_observer(&self, observer: Option<Observer>) {
        *self.observer.borrow_mut() = observer;
    }

    fn notify(&self) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer();
        }
    }
}
