//! Mnemonic utility CLI commands (validation and checksum shifting).

use clap::{Args, Subcommand};
use colored::Colorize;
use tzkey::{EllipticalCurve, Language, Mnemonic, PrivateKey};

use super::CliLanguage;

/// Mnemonic utility operations.
#[derive(Args)]
pub struct MnemonicCommand {
    #[command(subcommand)]
    command: MnemonicSubcommand,
}

#[derive(Subcommand)]
enum MnemonicSubcommand {
    /// Check word count, wordlist membership and checksum.
    Validate {
        /// Mnemonic phrase to check.
        #[arg(short, long)]
        mnemonic: String,

        /// Wordlist language.
        #[arg(short, long, default_value = "english")]
        language: CliLanguage,
    },

    /// Shift the checksum of a valid 24-word mnemonic.
    ///
    /// The result fails BIP-39 validation, so ordinary wallets refuse to
    /// import it as a seed phrase.
    Shift {
        /// 24-word mnemonic phrase.
        #[arg(short, long)]
        mnemonic: String,

        /// Wordlist language.
        #[arg(short, long, default_value = "english")]
        language: CliLanguage,
    },

    /// Restore the checksum of a shifted 24-word mnemonic.
    Unshift {
        /// Shifted 24-word mnemonic phrase.
        #[arg(short, long)]
        mnemonic: String,

        /// Wordlist language.
        #[arg(short, long, default_value = "english")]
        language: CliLanguage,
    },

    /// Encode a secp256k1 secret key (spsk...) as a shifted mnemonic.
    FromSecret {
        /// Base58Check secp256k1 secret key.
        #[arg(short, long)]
        secret_key: String,
    },
}

impl MnemonicCommand {
    /// Execute the mnemonic command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            MnemonicSubcommand::Validate { mnemonic, language } => {
                let mnemonic = Mnemonic::new(&mnemonic)?;
                print_validation(&mnemonic, language.into());
            }
            MnemonicSubcommand::Shift { mnemonic, language } => {
                let language = language.into();
                let original = Mnemonic::new(&mnemonic)?;
                let shifted = original.shift_checksum(language)?;
                print_shift_result("Shift", &original, &shifted, language);
            }
            MnemonicSubcommand::Unshift { mnemonic, language } => {
                let language = language.into();
                let shifted = Mnemonic::new(&mnemonic)?;
                let restored = shifted.unshift(language)?;
                print_shift_result("Unshift", &shifted, &restored, language);
            }
            MnemonicSubcommand::FromSecret { secret_key } => {
                if !tzkey::is_valid_secp256k1_secret_key(&secret_key) {
                    return Err("expected a 54-character spsk secret key".into());
                }
                let private_key = PrivateKey::from_base58(&secret_key, EllipticalCurve::Secp256k1)
                    .ok_or("could not decode secret key")?;
                let shifted = Mnemonic::shifted_from_secp256k1(&private_key)
                    .ok_or("secret key cannot be encoded as a shifted mnemonic")?;
                let restored = shifted.unshift(Language::English)?;
                print_from_secret(&secret_key, &shifted, &restored);
            }
        }
        Ok(())
    }
}

/// Display the validation result.
#[rustfmt::skip]
fn print_validation(mnemonic: &Mnemonic, language: Language) {
    let verdict = if mnemonic.is_valid(language) {
        "valid".green()
    } else {
        "invalid".red()
    };

    println!();
    println!("      {}        {} words", "Words".cyan().bold(), mnemonic.word_count());
    println!("      {}     {}", "Language".cyan().bold(), format!("{language:?}").dimmed());
    println!("      {}       {}", "Result".cyan().bold(), verdict);
    println!();
}

/// Display a shift or unshift result.
#[rustfmt::skip]
fn print_shift_result(mode: &str, input: &Mnemonic, output: &Mnemonic, language: Language) {
    println!();
    println!("      {}         {}", "Mode".cyan().bold(), mode);
    println!("      {}        {}", "Input".cyan().bold(), input.phrase());
    println!("      {}       {}", "Output".cyan().bold(), output.phrase().green());
    if let Some(secret_key) = output.to_secp256k1_secret_key(language) {
        println!("      {}   {}", "Secret Key".cyan().bold(), secret_key);
    }
    println!();
}

/// Display the shifted and restored mnemonics for a secret key.
#[rustfmt::skip]
fn print_from_secret(secret_key: &str, shifted: &Mnemonic, restored: &Mnemonic) {
    println!();
    println!("      {}   {}", "Secret Key".cyan().bold(), secret_key);
    println!("      {}      {}", "Shifted".cyan().bold(), shifted.phrase().green());
    println!("      {}     {}", "Restored".cyan().bold(), restored.phrase());
    println!();
}
