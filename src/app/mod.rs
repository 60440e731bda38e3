pub mod controller;
pub mod report;

pub use controller::AppController;
pub use report::DeviceReport;
