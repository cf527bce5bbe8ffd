//! Stepped create/edit page.

mod view;

pub(crate) use view::EmployeeFormPage;
