//! Command handlers and the console adapters they hand to the controllers.

pub(crate) mod departments;
pub(crate) mod employees;

use std::cell::RefCell;
use std::rc::Rc;

use empleados_core::{Destination, Navigator, NoticeKind, Notifier};

/// Prints success notices to stderr and keeps error notices for the exit message.
#[derive(Clone, Default)]
pub(crate) struct ConsoleNotifier {
    errors: Rc<RefCell<Vec<String>>>,
}

impl ConsoleNotifier {
    pub(crate) fn last_error(&self) -> Option<String> {
        self.errors.borrow().last().cloned()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: String) {
        match kind {
            NoticeKind::Success => eprintln!("{message}"),
            NoticeKind::Error => {
                tracing::debug!(%message, "error notice");
                self.errors.borrow_mut().push(message);
            }
        }
    }
}

/// There is no view to switch to; navigation requests are only traced.
#[derive(Clone, Copy, Default)]
pub(crate) struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, destination: Destination) {
        tracing::debug!(path = %destination.path(), "navigation requested");
    }
}
