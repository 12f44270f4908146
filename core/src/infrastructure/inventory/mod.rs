pub mod json_file_store;
