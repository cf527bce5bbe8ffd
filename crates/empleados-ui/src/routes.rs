//! Routing definitions for the empleados UI.

use empleados_core::Destination;
use yew_router::prelude::*;

/// Browser routes.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Redirects to the listing.
    #[at("/")]
    Home,
    /// Employee table.
    #[at("/empleados")]
    Listing,
    /// Blank form.
    #[at("/empleados/nuevo")]
    Create,
    /// Form primed with an existing record.
    #[at("/empleados/editar/:id")]
    Edit {
        /// Record identifier.
        id: String,
    },
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Listing => Self::Listing,
            Destination::Create => Self::Create,
            Destination::Edit { id } => Self::Edit { id },
        }
    }
}
