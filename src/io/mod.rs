pub mod paths;

pub use paths::LibraryPaths;
