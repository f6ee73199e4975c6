//! UI screens and application shells.

mod app;
mod customer_detail_screen;
mod customers_screen;
mod dashboard_screen;
mod hub_app;
mod login_screen;

pub use app::WebsiteApp;
pub use customer_detail_screen::{CustomerDetailScreen, DetailAction};
pub use customers_screen::{CustomersAction, CustomersScreen};
pub use dashboard_screen::{DashboardAction, DashboardScreen};
pub use hub_app::HubApp;
pub use login_screen::{LoginAction, LoginScreen, LoginState};
