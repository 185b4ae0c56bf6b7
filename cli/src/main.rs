//! Seeds a vault's whitelist with a fixed claimable amount per wallet.
//!
//! Usage: `add-whitelist <VAULT_ADDRESS> <AMOUNT> <WALLETS_FILE>`
//!
//! The wallets file lists one base58 address per line; blank lines and `#`
//! comments are skipped. The RPC endpoint comes from `ANCHOR_PROVIDER_URL`
//! and the signing keypair from `ANCHOR_WALLET`, the same environment the
//! Anchor provider reads.
//!
//! Each wallet is submitted as its own transaction. A failed submission is
//! reported and does not stop the remaining wallets; re-run with a reduced
//! list to fill in the gaps.

use std::{env, error::Error, fs, process, str::FromStr};

use anchor_lang::{InstructionData, ToAccountMetas};
use solana_commitment_config::CommitmentConfig;
use solana_instruction::Instruction;
use solana_keypair::{read_keypair_file, Keypair};
use solana_message::Message;
use solana_pubkey::Pubkey;
use solana_rpc_client::rpc_client::RpcClient;
use solana_signer::Signer;
use solana_transaction::Transaction;

const USAGE: &str = "Usage: add-whitelist <VAULT_ADDRESS> <AMOUNT> <WALLETS_FILE>

Environment:
  ANCHOR_PROVIDER_URL  RPC endpoint (default: http://127.0.0.1:8899)
  ANCHOR_WALLET        Path to the vault owner's keypair file (required)";

const DEFAULT_PROVIDER_URL: &str = "http://127.0.0.1:8899";

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let [vault, amount, wallets_file] = args.as_slice() else {
        return Err(USAGE.into());
    };

    let vault = Pubkey::from_str(vault).map_err(|e| format!("invalid vault address: {e}"))?;
    let amount: u64 = amount.parse().map_err(|e| format!("invalid amount: {e}"))?;

    let wallets = parse_wallet_list(&fs::read_to_string(wallets_file)?)?;

    let keypair_path =
        env::var("ANCHOR_WALLET").map_err(|_| "ANCHOR_WALLET is not set".to_string())?;
    let payer = read_keypair_file(&keypair_path)
        .map_err(|e| format!("failed to read keypair {keypair_path}: {e}"))?;

    let url = env::var("ANCHOR_PROVIDER_URL").unwrap_or_else(|_| DEFAULT_PROVIDER_URL.into());
    let client = RpcClient::new_with_commitment(url, CommitmentConfig::confirmed());

    let (succeeded, failed) = tally(wallets.iter().map(|wallet| {
        match add_to_whitelist(&client, &payer, &vault, *wallet, amount) {
            Ok(signature) => {
                println!("Added {wallet} to whitelist. Tx: {signature}");
                Ok(())
            }
            Err(err) => {
                eprintln!("Failed to add {wallet}: {err}");
                Err(())
            }
        }
    }));

    println!(
        "Whitelisted {} of {} wallets ({} failed)",
        succeeded,
        succeeded + failed,
        failed
    );

    Ok(())
}

/// Count successes and failures across per-wallet submission results. Every
/// result is consumed, so one failed wallet never stops the rest.
fn tally<T, E>(results: impl IntoIterator<Item = Result<T, E>>) -> (usize, usize) {
    results
        .into_iter()
        .fold((0, 0), |(succeeded, failed), result| match result {
            Ok(_) => (succeeded + 1, failed),
            Err(_) => (succeeded, failed + 1),
        })
}

/// Submit one `add_to_whitelist` transaction and wait for confirmation.
fn add_to_whitelist(
    client: &RpcClient,
    payer: &Keypair,
    vault: &Pubkey,
    wallet: Pubkey,
    amount: u64,
) -> Result<String, Box<dyn Error>> {
    let ix = Instruction {
        program_id: vault_claim::ID,
        accounts: vault_claim::accounts::AddToWhitelist {
            payer: payer.pubkey(),
            vault: *vault,
        }
        .to_account_metas(None),
        data: vault_claim::instruction::AddToWhitelist { wallet, amount }.data(),
    };

    let message = Message::new(&[ix], Some(&payer.pubkey()));
    let recent_blockhash = client.get_latest_blockhash()?;
    let transaction = Transaction::new(&[payer], message, recent_blockhash);

    let signature = client.send_and_confirm_transaction(&transaction)?;
    Ok(signature.to_string())
}

/// Parse a wallet-list file: one base58 address per line, blank lines and
/// `#` comments skipped. Any unparsable line is a fatal configuration error
/// so bad input is caught before anything is submitted.
fn parse_wallet_list(contents: &str) -> Result<Vec<Pubkey>, Box<dyn Error>> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            Pubkey::from_str(line)
                .map_err(|e| format!("invalid wallet address `{line}`: {e}").into())
        })
        .collect()
}
