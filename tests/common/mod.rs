pub mod synthetic_paths;
