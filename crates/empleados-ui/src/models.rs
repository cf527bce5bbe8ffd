//! Toast notifications shown by the app shell.

use std::collections::HashMap;
use std::rc::Rc;

use empleados_core::NoticeKind;
use yew::functional::Reducible;

/// Toasts visible at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Auto-dismiss delay for each toast.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier for the toast container.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
        }
    }
}

impl From<NoticeKind> for ToastKind {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Success => Self::Success,
            NoticeKind::Error => Self::Error,
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Bounded list of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast, evicting the oldest past [`MAX_VISIBLE_TOASTS`]. Returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Reducer messages for [`ToastQueue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    /// Show a new toast.
    Push(ToastKind, String),
    /// Hide a toast by id.
    Dismiss(u64),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.push(kind, message);
            }
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        Rc::new(next)
    }
}

/// One pending auto-dismiss timer per visible toast.
///
/// Timers of toasts that stay visible are never restarted, so each toast is
/// dismissed [`TOAST_TIMEOUT_MS`] after it first appeared.
#[derive(Debug)]
pub struct ToastTimers<H> {
    handles: HashMap<u64, H>,
}

impl<H> Default for ToastTimers<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> ToastTimers<H> {
    /// Start timers for new toasts and drop the timers of toasts that are gone.
    pub fn sync(&mut self, toasts: &[Toast], mut start: impl FnMut(u64) -> H) {
        self.handles
            .retain(|id, _| toasts.iter().any(|toast| toast.id == *id));
        for toast in toasts {
            self.handles
                .entry(toast.id)
                .or_insert_with(|| start(toast.id));
        }
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.handles.clear();
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
