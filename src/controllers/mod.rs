pub mod console;
pub mod snapshot;
pub mod viewer;
