pub mod allocation;
pub mod holdings;

pub use allocation::*;
pub use holdings::*;
