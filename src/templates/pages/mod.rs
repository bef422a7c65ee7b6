pub mod dashboard;
pub mod guarantees;
pub mod reminders;

pub use dashboard::{dashboard_page, DashboardVm};
pub use guarantees::{guarantees_page, GuaranteesVm};
pub use reminders::reminders_page;
