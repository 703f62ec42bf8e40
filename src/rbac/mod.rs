pub mod resolver;
pub mod types;

pub use types::Permission;
