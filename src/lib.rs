mod config;
pub use config::*;

mod error;
pub use error::*;

mod map;
pub use map::*;

// core tree impl
pub mod tree;
pub use tree::{BinaryTree, Key, NodeStore, NodeStoreVec, Value};
