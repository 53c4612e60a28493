mod vec_backed;
pub use vec_backed::*;
