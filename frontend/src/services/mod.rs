pub mod file_index;
pub mod remote_index;
pub mod theme_service;
