//! Employee table page.

mod view;

pub(crate) use view::EmployeeListPage;
