//! Prop-driven building blocks shared by the pages.

pub(crate) mod bulk_action_bar;
pub(crate) mod context_menu;
pub(crate) mod empty_state;
pub(crate) mod step_indicator;
pub(crate) mod toast;
