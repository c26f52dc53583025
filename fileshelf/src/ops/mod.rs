//! Mutations against the tree and publishing for streamed file kinds.

pub mod mutate;
pub mod publish;

pub use mutate::sanitize_file_name;
