//! Yew-backed implementations of the controller ports.

use crate::models::{ToastAction, ToastQueue};
use crate::routes::Route;
use empleados_core::{Destination, Navigator, NoticeKind, Notifier};
use gloo::console;
use yew::functional::UseReducerDispatcher;
use yew_router::navigator::Navigator as RouterHandle;

/// Context handed to pages so they can raise toasts.
pub(crate) type ToastCtx = UseReducerDispatcher<ToastQueue>;

/// Pushes controller notices onto the shell's toast queue.
#[derive(Clone)]
pub(crate) struct ToastNotifier {
    dispatcher: Option<ToastCtx>,
}

impl ToastNotifier {
    pub(crate) const fn new(dispatcher: Option<ToastCtx>) -> Self {
        Self { dispatcher }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NoticeKind, message: String) {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Push(kind.into(), message)),
            None => console::warn!(message),
        }
    }
}

/// Routes controller destinations through the browser history.
#[derive(Clone)]
pub(crate) struct RouterNavigator {
    handle: Option<RouterHandle>,
}

impl RouterNavigator {
    pub(crate) const fn new(handle: Option<RouterHandle>) -> Self {
        Self { handle }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, destination: Destination) {
        match &self.handle {
            Some(handle) => handle.push(&Route::from(destination)),
            None => console::error!(format!("router unavailable for {}", destination.path())),
        }
    }
}
