pub mod file_upload;
pub mod search_panel;
pub mod sections;
