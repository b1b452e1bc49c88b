#[macro_use]
extern crate log;

mod client;
pub use client::{DashboardClient, Session};

mod error;
pub use error::FetchError;

mod response;
pub use response::DashboardResponse;
