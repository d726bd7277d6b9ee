pub mod logging;
pub mod upload;
