use anchor_lang::prelude::*;

use crate::errors::VaultClaimError;

/// ClaimReceipt account - tracks how much a wallet has claimed from a vault.
///
/// One receipt exists per (vault, claimant) pair; its PDA seeds bind it to
/// both, so a claimant cannot present a fresh receipt to claim twice.
#[account]
#[derive(InitSpace)]
pub struct ClaimReceipt {
    // The wallet this receipt belongs to
    pub wallet: Pubkey,

    // The cumulative amount the wallet has claimed from the vault
    pub claimed_amount: u64,

    // The bump used to derive the PDA for this account
    pub bump: u8,
}

impl ClaimReceipt {
    /// Record a paid-out amount on the receipt.
    pub fn record(&mut self, amount: u64) -> Result<()> {
        self.claimed_amount = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(VaultClaimError::MathOverflow)?;
        Ok(())
    }
}
