pub mod json_format;
pub mod report_error;
pub mod report_writer;
