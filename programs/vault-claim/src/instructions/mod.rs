pub mod claim;
pub mod initialize_vault;
pub mod whitelist_operations;

pub use claim::*;
pub use initialize_vault::*;
pub use whitelist_operations::*;
