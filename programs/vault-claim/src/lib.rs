#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;
mod constants;
mod errors;
mod events;
mod instructions;
mod state;

use instructions::*;

declare_id!("DNjm4GTfWG7NuYPLMwnHDCeh62KURd9R3D6q3wqdnuNN");

#[program]
pub mod vault_claim {
    use super::*;

    /// Initialize a vault for the signing payer
    ///
    /// Creates the vault PDA with an empty whitelist, records the initial
    /// claimable balance, and creates the vault's token account.
    pub fn initialize(ctx: Context<InitializeVault>, amount: u64) -> Result<()> {
        ctx.accounts.initialize(amount, &ctx.bumps)
    }

    /// Add a wallet to the vault's whitelist, or update its claimable amount
    /// Signer must be the vault owner
    pub fn add_to_whitelist(ctx: Context<AddToWhitelist>, wallet: Pubkey, amount: u64) -> Result<()> {
        ctx.accounts.add_to_whitelist(wallet, amount)
    }

    /// Remove a wallet from the vault's whitelist
    /// Signer must be the vault owner
    pub fn remove_from_whitelist(ctx: Context<RemoveFromWhitelist>, wallet: Pubkey) -> Result<()> {
        ctx.accounts.remove_from_whitelist(wallet)
    }

    /// Claim the signer's remaining whitelisted amount from the vault
    ///
    /// Transfers the unclaimed remainder of the signer's whitelist grant from
    /// the vault token account to the signer's token account and decrements
    /// the vault's recorded balance.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        ctx.accounts.claim(&ctx.bumps)
    }
}
