//! Pages, each driving one core controller.

pub(crate) mod form;
pub(crate) mod listing;
