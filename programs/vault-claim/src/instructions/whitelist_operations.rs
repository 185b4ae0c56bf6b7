use anchor_lang::prelude::*;

use crate::{
    errors::VaultClaimError,
    events::{WalletRemoved, WalletWhitelisted},
    state::Vault,
};

/// Add a wallet to a vault's whitelist, or update its claimable amount.
/// Only the vault owner may call this.
#[derive(Accounts)]
pub struct AddToWhitelist<'info> {
    /// The vault owner
    pub payer: Signer<'info>,

    /// The vault whose whitelist is being modified
    #[account(
        mut,
        has_one = payer @ VaultClaimError::NotVaultOwner,
    )]
    pub vault: Account<'info, Vault>,
}

impl<'info> AddToWhitelist<'info> {
    /// Upsert a whitelist entry for `wallet` with `amount`.
    /// # Arguments
    /// * `wallet` - The wallet being granted a claim
    /// * `amount` - The total claimable amount for the wallet
    /// # Returns
    /// * `Result<()>` - Ok if the entry is recorded, Err otherwise
    pub fn add_to_whitelist(&mut self, wallet: Pubkey, amount: u64) -> Result<()> {
        self.vault.upsert_entry(wallet, amount)?;

        emit!(WalletWhitelisted {
            vault: self.vault.key(),
            wallet,
            amount,
            added_by: self.payer.key(),
        });

        Ok(())
    }
}

/// Remove a wallet from a vault's whitelist.
/// Only the vault owner may call this.
#[derive(Accounts)]
pub struct RemoveFromWhitelist<'info> {
    /// The vault owner
    pub payer: Signer<'info>,

    /// The vault whose whitelist is being modified
    #[account(
        mut,
        has_one = payer @ VaultClaimError::NotVaultOwner,
    )]
    pub vault: Account<'info, Vault>,
}

impl<'info> RemoveFromWhitelist<'info> {
    /// Drop the whitelist entry for `wallet`. Removing an unlisted wallet
    /// is a no-op.
    /// # Arguments
    /// * `wallet` - The wallet being removed
    /// # Returns
    /// * `Result<()>` - Ok if the removal is recorded, Err otherwise
    pub fn remove_from_whitelist(&mut self, wallet: Pubkey) -> Result<()> {
        self.vault.remove_entry(&wallet);

        emit!(WalletRemoved {
            vault: self.vault.key(),
            wallet,
            removed_by: self.payer.key(),
        });

        Ok(())
    }
}
