// PDA SEEDS

/// Seed for the Vault account PDA
pub const VAULT_SEED: &[u8] = b"vault";
/// Seed for ClaimReceipt account PDAs
pub const CLAIM_RECEIPT_SEED: &[u8] = b"claim_receipt";

/// Maximum number of whitelist entries a vault can hold.
/// The whitelist lives inside the vault account, so its capacity is fixed
/// at initialization time by the allocated account space.
pub const MAX_WHITELIST_ENTRIES: usize = 64;
