use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{constants::VAULT_SEED, events::VaultInitialized, state::Vault};

/// Create a vault for the signing payer and record its initial balance.
#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// Pays for account creation and becomes the vault owner
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The mint of the token the vault will hold
    #[account(
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The Vault account being created
    /// # PDA Seeds
    /// - `VAULT_SEED`
    /// - The payer's address
    #[account(
        init,
        payer = payer,
        space = 8 + Vault::INIT_SPACE,
        seeds = [VAULT_SEED, payer.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    /// The token account holding the vault's funds, owned by the vault PDA
    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = vault,
        associated_token::token_program = token_program,
    )]
    pub vault_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The associated token program
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// The token program
    pub token_program: Interface<'info, TokenInterface>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeVault<'info> {
    /// Initialize the vault with an empty whitelist.
    /// # Arguments
    /// * `amount` - The initial recorded token balance available for claims
    /// * `bumps` - Bumps for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if the vault is successfully initialized, Err otherwise
    pub fn initialize(&mut self, amount: u64, bumps: &InitializeVaultBumps) -> Result<()> {
        self.vault.set_inner(Vault {
            payer: self.payer.key(),
            mint: self.mint.key(),
            vault_token_account: self.vault_token_account.key(),
            amount,
            whitelist: Vec::new(),
            bump: bumps.vault,
        });

        msg!("Vault initialized at: {}", self.vault.key());

        emit!(VaultInitialized {
            vault: self.vault.key(),
            payer: self.payer.key(),
            amount,
        });

        Ok(())
    }
}
