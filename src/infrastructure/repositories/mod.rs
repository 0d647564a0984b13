pub mod in_memory;
pub mod json_file;
pub mod records;
