use anchor_lang::prelude::*;

/// Event emitted when a vault is initialized
/// Fields:
/// - vault: The address of the new vault account
/// - payer: The vault owner
/// - amount: The initial recorded token balance
#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
}

/// Event emitted when a wallet is added to (or updated on) a vault whitelist
/// Fields:
/// - vault: The vault whose whitelist was modified
/// - wallet: The whitelisted wallet
/// - amount: The claimable amount granted to the wallet
/// - added_by: The vault owner who performed the addition
#[event]
pub struct WalletWhitelisted {
    pub vault: Pubkey,
    pub wallet: Pubkey,
    pub amount: u64,
    pub added_by: Pubkey,
}

/// Event emitted when a wallet is removed from a vault whitelist
/// Fields:
/// - vault: The vault whose whitelist was modified
/// - wallet: The removed wallet
/// - removed_by: The vault owner who performed the removal
#[event]
pub struct WalletRemoved {
    pub vault: Pubkey,
    pub wallet: Pubkey,
    pub removed_by: Pubkey,
}

/// Event emitted when a whitelisted wallet claims tokens
/// Fields:
/// - vault: The vault paid out from
/// - wallet: The claimant
/// - amount: The amount transferred by this claim
/// - vault_balance: The vault's recorded balance after the claim
#[event]
pub struct TokensClaimed {
    pub vault: Pubkey,
    pub wallet: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
