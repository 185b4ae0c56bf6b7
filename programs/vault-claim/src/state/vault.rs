use anchor_lang::prelude::*;

use crate::{constants::MAX_WHITELIST_ENTRIES, errors::VaultClaimError};

/// A single whitelist grant: a wallet and the total amount it may claim.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WhitelistEntry {
    // The wallet allowed to claim
    pub address: Pubkey,

    // The total claimable amount for this wallet
    pub amount: u64,
}

/// Vault state account - holds the recorded token balance and the whitelist
/// of wallets allowed to claim from it.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    // The vault owner (the wallet that initialized the vault)
    pub payer: Pubkey,

    // The mint of the token held by the vault
    pub mint: Pubkey,

    // The token account holding the vault's funds, owned by this PDA
    pub vault_token_account: Pubkey,

    // The recorded token balance available for claims
    pub amount: u64,

    // Whitelisted wallets, at most one entry per address
    #[max_len(MAX_WHITELIST_ENTRIES)]
    pub whitelist: Vec<WhitelistEntry>,

    // The bump used to derive the PDA for this account
    pub bump: u8,
}

impl Vault {
    /// Look up the claimable amount granted to `wallet`, if any.
    pub fn whitelisted_amount(&self, wallet: &Pubkey) -> Option<u64> {
        self.whitelist
            .iter()
            .find(|entry| entry.address == *wallet)
            .map(|entry| entry.amount)
    }

    /// Add `wallet` to the whitelist with `amount`, or update its amount if
    /// it is already listed.
    pub fn upsert_entry(&mut self, wallet: Pubkey, amount: u64) -> Result<()> {
        if let Some(entry) = self
            .whitelist
            .iter_mut()
            .find(|entry| entry.address == wallet)
        {
            entry.amount = amount;
            return Ok(());
        }

        require!(
            self.whitelist.len() < MAX_WHITELIST_ENTRIES,
            VaultClaimError::WhitelistFull
        );
        self.whitelist.push(WhitelistEntry {
            address: wallet,
            amount,
        });

        Ok(())
    }

    /// Drop `wallet` from the whitelist. Removing an unlisted wallet is a
    /// no-op.
    pub fn remove_entry(&mut self, wallet: &Pubkey) {
        self.whitelist.retain(|entry| entry.address != *wallet);
    }

    /// Amount still payable to `wallet` given what it has already claimed.
    /// # Errors
    /// * `WalletNotWhitelisted` - wallet absent or granted a zero amount
    /// * `VaultEmpty` - the vault has no recorded balance
    /// * `AlreadyClaimed` - the wallet has claimed its full grant
    /// * `InsufficientVaultBalance` - the vault cannot cover the remainder
    pub fn remaining_claimable(&self, wallet: &Pubkey, already_claimed: u64) -> Result<u64> {
        let claimable = self.whitelisted_amount(wallet).unwrap_or(0);
        require!(claimable > 0, VaultClaimError::WalletNotWhitelisted);
        require!(self.amount > 0, VaultClaimError::VaultEmpty);
        require!(already_claimed < claimable, VaultClaimError::AlreadyClaimed);

        let remaining = claimable - already_claimed;
        require!(
            self.amount >= remaining,
            VaultClaimError::InsufficientVaultBalance
        );

        Ok(remaining)
    }

    /// Decrement the recorded balance by a paid-out amount.
    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(VaultClaimError::InsufficientVaultBalance)?;
        Ok(())
    }
}
