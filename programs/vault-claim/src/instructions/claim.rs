use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use crate::{
    constants::{CLAIM_RECEIPT_SEED, VAULT_SEED},
    events::TokensClaimed,
    state::{ClaimReceipt, Vault},
};

/// Claim the remaining whitelisted amount from a vault.
/// The claimant must sign and must hold a whitelist entry on the vault.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The wallet claiming its whitelisted amount
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// The vault being claimed from
    /// # PDA Seeds
    /// - `VAULT_SEED`
    /// - The vault owner's address
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.payer.as_ref()],
        bump = vault.bump,
        has_one = mint,
        has_one = vault_token_account,
    )]
    pub vault: Account<'info, Vault>,

    /// The mint of the token held by the vault
    #[account(
        mint::token_program = token_program,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// The source token account holding the vault's funds
    #[account(
        mut,
        token::mint = mint,
        token::authority = vault,
        token::token_program = token_program,
    )]
    pub vault_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The claimant's token account receiving the payout
    #[account(
        mut,
        token::mint = mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The receipt tracking how much the claimant has already claimed
    /// # PDA Seeds
    /// - `CLAIM_RECEIPT_SEED`
    /// - The vault's address
    /// - The claimant's address
    #[account(
        init_if_needed,
        payer = claimant,
        space = 8 + ClaimReceipt::INIT_SPACE,
        seeds = [CLAIM_RECEIPT_SEED, vault.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_receipt: Account<'info, ClaimReceipt>,

    /// The token program
    pub token_program: Interface<'info, TokenInterface>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> Claim<'info> {
    /// Pay out the claimant's remaining whitelisted amount.
    /// # Arguments
    /// * `bumps` - Bumps for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if the claim is paid out, Err otherwise
    pub fn claim(&mut self, bumps: &ClaimBumps) -> Result<()> {
        let remaining = self
            .vault
            .remaining_claimable(&self.claimant.key(), self.claim_receipt.claimed_amount)?;

        // Transfer the remaining claimable from the vault to the claimant
        let seeds = &[VAULT_SEED, self.vault.payer.as_ref(), &[self.vault.bump]];
        let signer_seeds = &[&seeds[..]];

        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.vault_token_account.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.claimant_token_account.to_account_info(),
                    authority: self.vault.to_account_info(),
                },
                signer_seeds,
            ),
            remaining,
            self.mint.decimals,
        )?;

        // Update vault and receipt state
        self.vault.debit(remaining)?;
        self.claim_receipt.wallet = self.claimant.key();
        self.claim_receipt.bump = bumps.claim_receipt;
        self.claim_receipt.record(remaining)?;

        emit!(TokensClaimed {
            vault: self.vault.key(),
            wallet: self.claimant.key(),
            amount: remaining,
            vault_balance: self.vault.amount,
        });

        Ok(())
    }
}
