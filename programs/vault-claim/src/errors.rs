use anchor_lang::prelude::*;

#[error_code]
pub enum VaultClaimError {
    #[msg("Vault is empty")]
    VaultEmpty,
    #[msg("Wallet is not authorized to claim")]
    WalletNotWhitelisted,
    #[msg("Wallet has already claimed its full amount")]
    AlreadyClaimed,
    #[msg("Vault balance is below the remaining claimable amount")]
    InsufficientVaultBalance,
    #[msg("Only the vault owner can modify the whitelist")]
    NotVaultOwner,
    #[msg("Whitelist is at capacity")]
    WhitelistFull,
    #[msg("Math Overflow")]
    MathOverflow,
}
