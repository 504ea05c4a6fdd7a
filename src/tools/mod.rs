mod movie_scanner;
mod path_validator;

pub use movie_scanner::{MovieFileInfo, scan_movie_candidates};
pub use path_validator::validate_directory_exists;
