pub mod claim_receipt;
pub mod vault;

pub use claim_receipt::*;
pub use vault::*;
