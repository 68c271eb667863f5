pub mod conditions;
pub mod trace_files;
