//! CLI command definitions and handlers.

mod mnemonic;
mod wallet;

use clap::{Parser, Subcommand, ValueEnum};
pub use mnemonic::MnemonicCommand;
use tzkey::{EllipticalCurve, Language};
pub use wallet::{ImportCommand, ImportKeyCommand, NewCommand};

/// tzkey - generate, import and inspect Tezos wallet keys.
#[derive(Parser)]
#[command(name = "tzkey")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new wallet with a fresh mnemonic.
    New(NewCommand),

    /// Import a wallet from a mnemonic phrase.
    Import(ImportCommand),

    /// Import a wallet from a (possibly encrypted) secret key.
    #[command(name = "import-key")]
    ImportKey(ImportKeyCommand),

    /// Mnemonic utilities (validation and checksum shifting).
    Mnemonic(MnemonicCommand),
}

/// Signing curve.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CliCurve {
    /// Ed25519, tz1 addresses.
    #[default]
    #[value(alias = "tz1")]
    Ed25519,

    /// Secp256k1, tz2 addresses.
    #[value(alias = "tz2")]
    Secp256k1,
}

impl From<CliCurve> for EllipticalCurve {
    fn from(curve: CliCurve) -> Self {
        match curve {
            CliCurve::Ed25519 => EllipticalCurve::Ed25519,
            CliCurve::Secp256k1 => EllipticalCurve::Secp256k1,
        }
    }
}

/// Mnemonic wordlist language.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CliLanguage {
    /// English.
    #[default]
    #[value(alias = "en")]
    English,
    /// Simplified Chinese.
    #[value(alias = "zh-hans")]
    ChineseSimplified,
    /// Traditional Chinese.
    #[value(alias = "zh-hant")]
    ChineseTraditional,
    /// Czech.
    #[value(alias = "cs")]
    Czech,
    /// French.
    #[value(alias = "fr")]
    French,
    /// Italian.
    #[value(alias = "it")]
    Italian,
    /// Japanese.
    #[value(alias = "ja")]
    Japanese,
    /// Korean.
    #[value(alias = "ko")]
    Korean,
    /// Portuguese.
    #[value(alias = "pt")]
    Portuguese,
    /// Spanish.
    #[value(alias = "es")]
    Spanish,
}

impl From<CliLanguage> for Language {
    fn from(language: CliLanguage) -> Self {
        match language {
            CliLanguage::English => Language::English,
            CliLanguage::ChineseSimplified => Language::SimplifiedChinese,
            CliLanguage::ChineseTraditional => Language::TraditionalChinese,
            CliLanguage::Czech => Language::Czech,
            CliLanguage::French => Language::French,
            CliLanguage::Italian => Language::Italian,
            CliLanguage::Japanese => Language::Japanese,
            CliLanguage::Korean => Language::Korean,
            CliLanguage::Portuguese => Language::Portuguese,
            CliLanguage::Spanish => Language::Spanish,
        }
    }
}
