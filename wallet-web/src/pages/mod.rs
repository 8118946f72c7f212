pub mod connect;
pub mod status;

pub use connect::ConnectPage;
pub use status::StatusPage;
