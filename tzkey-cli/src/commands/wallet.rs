//! Wallet generation and import commands.

use clap::Args;
use colored::Colorize;
use tzkey::{
    EllipticalCurve, HdWallet, KeyPair, Mnemonic, RegularWallet, Wallet, WordCount,
    DEFAULT_DERIVATION_PATH,
};

use super::{CliCurve, CliLanguage};

/// Options shared by `new` and `import`.
#[derive(Args)]
pub struct DerivationArgs {
    /// BIP39 passphrase (optional extra security).
    #[arg(short, long)]
    passphrase: Option<String>,

    /// Derive an HD wallet (Ed25519 only).
    #[arg(long)]
    hd: bool,

    /// Derivation path for HD wallets.
    #[arg(long, default_value = DEFAULT_DERIVATION_PATH, requires = "hd")]
    path: String,

    /// Signing curve for regular wallets.
    #[arg(short, long, default_value = "ed25519")]
    curve: CliCurve,
}

/// Generate a new wallet.
#[derive(Args)]
pub struct NewCommand {
    /// Number of mnemonic words (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,

    /// Wordlist language.
    #[arg(short, long, default_value = "english")]
    language: CliLanguage,

    #[command(flatten)]
    derivation: DerivationArgs,
}

impl NewCommand {
    /// Execute the new command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let word_count = WordCount::from_words(self.words)?;
        let mnemonic = Mnemonic::generate(word_count, self.language.into())?;
        build_and_print(mnemonic, &self.derivation)
    }
}

/// Import a wallet from a mnemonic.
#[derive(Args)]
pub struct ImportCommand {
    /// BIP39 mnemonic phrase.
    #[arg(short, long)]
    mnemonic: String,

    /// Wordlist language used to validate the phrase.
    #[arg(short, long, default_value = "english")]
    language: CliLanguage,

    #[command(flatten)]
    derivation: DerivationArgs,
}

impl ImportCommand {
    /// Execute the import command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let mnemonic = Mnemonic::new(&self.mnemonic)?;
        if !mnemonic.is_valid(self.language.into()) {
            return Err(tzkey::Error::InvalidMnemonic.into());
        }
        build_and_print(mnemonic, &self.derivation)
    }
}

/// Import a wallet from a secret key.
#[derive(Args)]
pub struct ImportKeyCommand {
    /// Secret key: edsk..., spsk..., or encrypted edesk... / spesk...
    #[arg(short, long)]
    secret_key: String,

    /// Passphrase for an encrypted secret key.
    #[arg(short, long)]
    passphrase: Option<String>,
}

impl ImportKeyCommand {
    /// Execute the import-key command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        if tzkey::is_secret_key_encrypted(&self.secret_key) && self.passphrase.is_none() {
            return Err("encrypted secret key requires --passphrase".into());
        }

        let wallet = RegularWallet::from_secret_key(&self.secret_key, self.passphrase.as_deref())
            .ok_or("could not read secret key (wrong prefix, checksum or passphrase)")?;

        print_key_pair(&wallet, wallet.key_pair(), None, None);
        Ok(())
    }
}

fn build_and_print(
    mnemonic: Mnemonic,
    args: &DerivationArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let passphrase = args.passphrase.as_deref().unwrap_or("");
    let has_passphrase = !passphrase.is_empty();

    if args.hd {
        let curve: EllipticalCurve = args.curve.into();
        if curve != EllipticalCurve::Ed25519 {
            return Err("HD wallets are Ed25519 only".into());
        }
        let wallet = HdWallet::from_mnemonic(mnemonic, passphrase, Some(args.path.as_str()))
            .ok_or("could not derive HD wallet (check the derivation path)")?;

        print_mnemonic(wallet.mnemonic(), has_passphrase);
        print_key_pair(&wallet, wallet.key_pair(), Some(wallet.derivation_path()), None);
    } else {
        let wallet = RegularWallet::from_mnemonic(mnemonic, passphrase, args.curve.into())
            .ok_or("could not derive key pair")?;

        if let Some(mnemonic) = wallet.mnemonic() {
            print_mnemonic(mnemonic, has_passphrase);
        }
        print_key_pair(&wallet, wallet.key_pair(), None, shifted_hint(wallet.key_pair()));
    }

    Ok(())
}

/// For tz2 wallets, the shifted mnemonic that encodes the raw secret key.
fn shifted_hint(key_pair: &KeyPair) -> Option<String> {
    match key_pair.private_key.curve() {
        EllipticalCurve::Ed25519 => None,
        EllipticalCurve::Secp256k1 => Mnemonic::shifted_from_secp256k1(&key_pair.private_key)
            .map(|m| m.phrase().to_owned()),
    }
}

#[rustfmt::skip]
fn print_mnemonic(mnemonic: &Mnemonic, has_passphrase: bool) {
    println!();
    println!("      {}     {}", "Mnemonic".cyan().bold(), mnemonic.phrase());
    if has_passphrase {
        println!("      {}   {}", "Passphrase".cyan().bold(), "(set)".dimmed());
    }
}

#[rustfmt::skip]
fn print_key_pair(wallet: &dyn Wallet, key_pair: &KeyPair, path: Option<&str>, shifted: Option<String>) {
    println!();
    println!("      {}         {}", "Type".cyan().bold(), wallet.wallet_type().to_string().dimmed());
    if let Some(path) = path {
        println!("      {}         {}", "Path".cyan().bold(), path);
    }
    println!("      {}        {}", "Curve".cyan().bold(), wallet.curve().to_string().dimmed());
    println!("      {}      {}", "Address".cyan().bold(), wallet.address().green());
    println!("      {}   {}", "Public Key".cyan().bold(), wallet.public_key_base58());
    println!("      {}   {}", "Secret Key".cyan().bold(), key_pair.private_key.to_base58());
    if let Some(shifted) = shifted {
        println!("      {}      {}", "Shifted".cyan().bold(), shifted.dimmed());
    }
    println!();
}
