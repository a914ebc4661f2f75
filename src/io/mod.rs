//! I/O layer: directory scanning and decoding (`reader`) plus PNG output
//! (`writers`).
pub mod reader;
pub use reader::{DirectoryScan, iterate_image_files, read_image, scan_image_dir};

pub mod writers;
pub use writers::png::{output_path_for, write_png};
