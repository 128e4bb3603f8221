//! BIP-39 mnemonic phrases.
//!
//! Generation, validation, entropy round-tripping and PBKDF2 seed derivation,
//! plus the checksum-shifting transform used to encode legacy secp256k1
//! secret keys as phrases that ordinary BIP-39 importers reject.
//!
//! # Example
//!
//! ```
//! use tzkey::{Language, Mnemonic};
//!
//! let mnemonic = Mnemonic::new(
//!     "remember smile trip tumble era cube worry fuel bracket eight kitten inform",
//! )?;
//! assert!(mnemonic.is_valid(Language::English));
//! let seed = mnemonic.seed("")?;
//! assert_eq!(seed.len(), 64);
//! # Ok::<(), tzkey::Error>(())
//! ```

use core::fmt;

pub use bip39::Language;
use hmac::Hmac;
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::encoding::{base58check_decode_with_prefix, base58check_encode_with_prefix};
use crate::error::{Error, Result};
use crate::curve::EllipticalCurve;
use crate::prefix;
use crate::private_key::PrivateKey;

/// PBKDF2 rounds for mnemonic seed derivation.
const SEED_ROUNDS: u32 = 2048;

/// Only 24-word phrases can be checksum-shifted.
const SHIFTABLE_WORD_COUNT: usize = 24;

/// Length of a Base58Check `spsk` secret key string.
const SPSK_LEN: usize = 54;

/// Number of words in a mnemonic, carrying its entropy strength in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordCount {
    /// 12 words, 128 bits.
    Twelve,
    /// 15 words, 160 bits.
    Fifteen,
    /// 18 words, 192 bits.
    Eighteen,
    /// 21 words, 224 bits.
    TwentyOne,
    /// 24 words, 256 bits.
    #[default]
    TwentyFour,
}

impl WordCount {
    /// Entropy strength in bits.
    pub const fn strength(self) -> usize {
        match self {
            Self::Twelve => 128,
            Self::Fifteen => 160,
            Self::Eighteen => 192,
            Self::TwentyOne => 224,
            Self::TwentyFour => 256,
        }
    }

    /// Number of words (`strength / 32 * 3`).
    pub const fn words(self) -> usize {
        self.strength() / 32 * 3
    }

    /// Entropy length in bytes.
    pub const fn entropy_len(self) -> usize {
        self.strength() / 8
    }

    /// Map a word count to its variant.
    pub const fn from_words(words: usize) -> Result<Self> {
        match words {
            12 => Ok(Self::Twelve),
            15 => Ok(Self::Fifteen),
            18 => Ok(Self::Eighteen),
            21 => Ok(Self::TwentyOne),
            24 => Ok(Self::TwentyFour),
            n => Err(Error::InvalidWordCount(n)),
        }
    }
}

/// A mnemonic phrase: space-joined words from a BIP-39 wordlist.
///
/// Construction only checks the word count; use [`Mnemonic::is_valid`] to
/// check wordlist membership and the checksum. The phrase is zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Mnemonic {
    phrase: Zeroizing<String>,
}

impl Mnemonic {
    /// Create a mnemonic from a phrase.
    ///
    /// Words are re-joined with single spaces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWordCount`] unless the phrase has 12, 15, 18, 21
    /// or 24 words.
    pub fn new(phrase: &str) -> Result<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();
        WordCount::from_words(words.len())?;
        Ok(Self {
            phrase: Zeroizing::new(words.join(" ")),
        })
    }

    /// Generate a mnemonic from OS entropy.
    #[cfg(feature = "rand")]
    pub fn generate(word_count: WordCount, language: Language) -> Result<Self> {
        let mut entropy = Zeroizing::new([0u8; 32]);
        let len = word_count.entropy_len();
        getrandom::fill(&mut entropy[..len]).map_err(|e| Error::Random(e.to_string()))?;
        Self::from_entropy(&entropy[..len], language)
    }

    /// Encode caller-supplied entropy as a mnemonic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntropyLength`] unless the entropy is 16, 20,
    /// 24, 28 or 32 bytes.
    pub fn from_entropy(entropy: &[u8], language: Language) -> Result<Self> {
        if !matches!(entropy.len(), 16 | 20 | 24 | 28 | 32) {
            return Err(Error::InvalidEntropyLength(entropy.len()));
        }
        let mnemonic = bip39::Mnemonic::from_entropy_in(language, entropy)?;
        Ok(Self {
            phrase: Zeroizing::new(mnemonic.to_string()),
        })
    }

    /// The phrase as a single space-joined string.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The individual words.
    pub fn words(&self) -> Vec<&str> {
        self.phrase.split(' ').filter(|w| !w.is_empty()).collect()
    }

    /// Number of words in the phrase.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words().len()
    }

    /// Derive the 64-byte seed: PBKDF2-HMAC-SHA512 over the phrase with salt
    /// `"mnemonic" + passphrase` and 2048 rounds.
    ///
    /// This is deliberately slow; keep it off latency-sensitive paths.
    pub fn seed(&self, passphrase: &str) -> Result<Zeroizing<[u8; 64]>> {
        let salt = Zeroizing::new(format!("mnemonic{passphrase}"));
        let mut seed = Zeroizing::new([0u8; 64]);
        pbkdf2::pbkdf2::<Hmac<Sha512>>(
            self.phrase.as_bytes(),
            salt.as_bytes(),
            SEED_ROUNDS,
            &mut seed[..],
        )
        .map_err(|_| Error::SeedDerivationFailed)?;
        Ok(seed)
    }

    /// Check word count, wordlist membership and checksum. Never fails.
    pub fn is_valid(&self, language: Language) -> bool {
        Self::is_valid_checksum(&self.words(), language)
    }

    /// Check that `words` form a legal-length phrase from the wordlist whose
    /// trailing checksum bits match the entropy bits.
    pub fn is_valid_checksum(words: &[&str], language: Language) -> bool {
        WordCount::from_words(words.len()).is_ok()
            && bip39::Mnemonic::parse_in_normalized(language, &words.join(" ")).is_ok()
    }

    /// Recover the entropy encoded by the phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] if a word is not in the wordlist, or
    /// if `ignore_checksum` is false and the checksum does not match.
    pub fn to_entropy(&self, ignore_checksum: bool, language: Language) -> Result<Zeroizing<Vec<u8>>> {
        let mnemonic = if ignore_checksum {
            bip39::Mnemonic::parse_in_normalized_without_checksum_check(language, &self.phrase)
        } else {
            bip39::Mnemonic::parse_in_normalized(language, &self.phrase)
        }?;
        Ok(Zeroizing::new(mnemonic.to_entropy()))
    }

    /// Overwrite the phrase with `'0'` characters of the same length.
    pub fn scrub(&mut self) {
        let len = self.phrase.chars().count();
        self.phrase.zeroize();
        self.phrase.push_str(&"0".repeat(len));
    }

    /// Return the word that replaces `word` when shifting a checksum.
    ///
    /// The index keeps its 256-word block and toggles the high bit of its
    /// low byte: `index - index % 256 + (index % 256 + 128) % 256`.
    pub fn shifted_word(word: &str, language: Language) -> Result<&'static str> {
        let index = usize::from(language.find_word(word).ok_or(Error::InvalidWordToShift)?);
        let low = index % 256;
        let shifted = index - low + (low + 128) % 256;
        language
            .word_list()
            .get(shifted)
            .copied()
            .ok_or(Error::InvalidWordToShift)
    }

    /// Replace the last word of a 24-word mnemonic with its shifted word.
    ///
    /// Exactly one of the original and the shifted phrase must be valid,
    /// otherwise the shift is rejected with [`Error::InvalidMnemonic`].
    pub fn shift_checksum(&self, language: Language) -> Result<Self> {
        let mut words = self.words();
        if words.len() != SHIFTABLE_WORD_COUNT {
            return Err(Error::InvalidWordCount(words.len()));
        }

        let last = words.len() - 1;
        words[last] = Self::shifted_word(words[last], language)?;
        let shifted = Self {
            phrase: Zeroizing::new(words.join(" ")),
        };

        if self.is_valid(language) == shifted.is_valid(language) {
            return Err(Error::InvalidMnemonic);
        }
        Ok(shifted)
    }

    /// Undo [`Mnemonic::shift_checksum`]. The shift is its own inverse.
    #[inline]
    pub fn unshift(&self, language: Language) -> Result<Self> {
        self.shift_checksum(language)
    }

    /// Encode a raw 32-byte secp256k1 secret as a shifted 24-word English
    /// mnemonic.
    ///
    /// Returns `None` for non-secp256k1 keys or keys of the wrong length.
    pub fn shifted_from_secp256k1(private_key: &PrivateKey) -> Option<Self> {
        match private_key.curve() {
            EllipticalCurve::Secp256k1 => {}
            EllipticalCurve::Ed25519 => return None,
        }

        let mnemonic = Self::from_entropy(private_key.scalar()?, Language::English).ok()?;
        mnemonic.shift_checksum(Language::English).ok()
    }

    /// Base58Check-encode the phrase's entropy as an `spsk` secret key,
    /// ignoring the checksum so shifted phrases decode too.
    pub fn to_secp256k1_secret_key(&self, language: Language) -> Option<String> {
        let entropy = self.to_entropy(true, language).ok()?;
        Some(base58check_encode_with_prefix(&entropy, prefix::Secp256k1::SECRET))
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mnemonic([REDACTED {} words])", self.word_count())
    }
}

impl core::str::FromStr for Mnemonic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Check that `secret_key` is a 54-character `spsk` string with a valid checksum.
pub fn is_valid_secp256k1_secret_key(secret_key: &str) -> bool {
    secret_key.len() == SPSK_LEN
        && base58check_decode_with_prefix(secret_key, prefix::Secp256k1::SECRET).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIT: &str = "kit trigger pledge excess payment sentence dutch mandate start sense seed venture";
    const REMEMBER: &str = "remember smile trip tumble era cube worry fuel bracket eight kitten inform";
    const ABANDON_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    const ABANDON_24: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";

    const SECP_SECRET: [u8; 32] = [
        125, 133, 194, 84, 250, 98, 79, 41, 174, 84, 233, 129, 41, 85, 148, 33, 44, 186, 87, 103,
        235, 213, 247, 99, 133, 29, 151, 197, 91, 106, 136, 214,
    ];
    const SHIFTED_WORDS: &str = "laugh come news visit ceiling network rich outdoor license enjoy govern drastic slight close panic kingdom wash bring electric convince fiber relief cash siren";
    const NORMAL_WORDS: &str = "laugh come news visit ceiling network rich outdoor license enjoy govern drastic slight close panic kingdom wash bring electric convince fiber relief cash sunny";
    const SPSK: &str = "spsk2Nqz6AW1zVwLJ3QgcXhzPNdT3mpRskUKA2UXza5kNRd3NLKrMy";

    mod seed_tests {
        use super::*;

        #[test]
        fn test_seed_vectors() {
            let mnemonic = Mnemonic::new(KIT).unwrap();

            let seed = mnemonic.seed("").unwrap();
            assert_eq!(
                hex::encode(seed.as_slice()),
                "7d85c254fa624f29ae54e981295594212cba5767ebd5f763851d97c55b6a88d6ebf09bf313d6d0efad8d2f30e4cba84a40aa01e20c4abd58003f9c021d0cb0e8"
            );

            let seed = mnemonic.seed("aPassword").unwrap();
            assert_eq!(
                hex::encode(seed.as_slice()),
                "e2397068b1e5de3bb09cedec6ff52a636a09931b30097e9b3663f2dbcd93acd38a967cd7dc997557f79b407aacf3bbdb038e0188498a81ae38cd660a6f44f95b"
            );
        }

        #[test]
        fn test_remember_seed() {
            let seed = Mnemonic::new(REMEMBER).unwrap().seed("").unwrap();
            assert_eq!(
                hex::encode(seed.as_slice()),
                "80d4e52897c8e14fbfad4637373de405fa2cc7f27eb9f890db975948b0e7fdb0e7540cb3d355291669353a5a261350ac8b8978d6640d388de8a293adcf020b8d"
            );
        }

        #[test]
        fn test_seed_is_deterministic() {
            let mnemonic = Mnemonic::new(ABANDON_12).unwrap();
            assert_eq!(mnemonic.seed("x").unwrap(), mnemonic.seed("x").unwrap());
            assert_ne!(mnemonic.seed("x").unwrap(), mnemonic.seed("y").unwrap());
        }
    }

    mod generation_tests {
        use super::*;

        #[cfg(feature = "rand")]
        #[test]
        fn test_generate_all_word_counts() {
            for count in [
                WordCount::Twelve,
                WordCount::Fifteen,
                WordCount::Eighteen,
                WordCount::TwentyOne,
                WordCount::TwentyFour,
            ] {
                let mnemonic = Mnemonic::generate(count, Language::English).unwrap();
                assert_eq!(mnemonic.word_count(), count.words());
                assert!(mnemonic.is_valid(Language::English));
            }
        }

        #[cfg(feature = "rand")]
        #[test]
        fn test_generate_chinese() {
            let mnemonic =
                Mnemonic::generate(WordCount::TwentyFour, Language::SimplifiedChinese).unwrap();
            let first = mnemonic.words()[0];

            assert_eq!(mnemonic.word_count(), 24);
            assert!(Language::SimplifiedChinese.find_word(first).is_some());
            assert!(Language::English.find_word(first).is_none());
            assert!(mnemonic.is_valid(Language::SimplifiedChinese));
        }

        #[test]
        fn test_from_entropy_vectors() {
            let mnemonic = Mnemonic::from_entropy(&[0u8; 16], Language::English).unwrap();
            assert_eq!(mnemonic.phrase(), ABANDON_12);

            let mnemonic = Mnemonic::from_entropy(&[0u8; 32], Language::English).unwrap();
            assert_eq!(mnemonic.phrase(), ABANDON_24);

            let mnemonic = Mnemonic::from_entropy(&[0x7f; 16], Language::English).unwrap();
            assert_eq!(
                mnemonic.phrase(),
                "legal winner thank year wave sausage worth useful legal winner thank yellow"
            );
        }

        #[test]
        fn test_from_entropy_rejects_bad_length() {
            assert_eq!(
                Mnemonic::from_entropy(&[0u8; 15], Language::English),
                Err(Error::InvalidEntropyLength(15))
            );
        }

        #[test]
        fn test_word_count_strengths() {
            assert_eq!(WordCount::Twelve.words(), 12);
            assert_eq!(WordCount::TwentyOne.words(), 21);
            assert_eq!(WordCount::TwentyFour.entropy_len(), 32);
            assert_eq!(WordCount::from_words(13), Err(Error::InvalidWordCount(13)));
        }
    }

    mod validation_tests {
        use super::*;

        #[test]
        fn test_valid_phrase() {
            assert!(Mnemonic::new(KIT).unwrap().is_valid(Language::English));
        }

        #[test]
        fn test_wrong_word_count_rejected_on_construction() {
            let result = Mnemonic::new(
                "kit trigger pledge excess payment sentence dutch mandate start sense seed",
            );
            assert_eq!(result, Err(Error::InvalidWordCount(11)));
        }

        #[test]
        fn test_invalid_phrases() {
            let invalid = [
                "kit trigger pledge asshole payment sentence dutch mandate start sense seed venture",
                "kit trigger pledge excess payment sentence dutch mandate start sense seed venture kit trigger pledge excess payment sentence dutch mandate start sense seed venture",
                "kit trigger pledge excess payment sentence dutch mandate start sense seed venture kit trigger pledge excess payment sentence dutch mandate start sense seed ventrue",
                "tell me more about your awesome but totally invalid mnemonic word1 word2",
                "kit trigger pledge excess payment sentence dutch mandate start sense seed kit",
                "Kit trigger pledge excess payment sentence dutch mandate start sense seed venture",
            ];

            for phrase in invalid {
                let mnemonic = Mnemonic::new(phrase).unwrap();
                assert!(!mnemonic.is_valid(Language::English), "{phrase}");
            }
        }

        #[test]
        fn test_wrong_language_is_invalid() {
            assert!(!Mnemonic::new(KIT).unwrap().is_valid(Language::French));
        }
    }

    mod entropy_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_to_entropy_checks_checksum() {
            let mnemonic = Mnemonic::new(SHIFTED_WORDS).unwrap();
            assert_eq!(
                mnemonic.to_entropy(false, Language::English),
                Err(Error::InvalidMnemonic)
            );
            assert_eq!(
                mnemonic.to_entropy(true, Language::English).unwrap().as_slice(),
                SECP_SECRET
            );
        }

        #[test]
        fn test_to_entropy_unknown_word() {
            let mnemonic = Mnemonic::new(
                "kit trigger pledge qwerty payment sentence dutch mandate start sense seed venture",
            )
            .unwrap();
            assert_eq!(
                mnemonic.to_entropy(true, Language::English),
                Err(Error::InvalidMnemonic)
            );
        }

        #[test]
        fn test_entropy_in_other_language() {
            let entropy = [0x7fu8; 16];
            let mnemonic = Mnemonic::from_entropy(&entropy, Language::Japanese).unwrap();

            assert!(mnemonic.is_valid(Language::Japanese));
            assert!(!mnemonic.is_valid(Language::English));
            assert_eq!(
                mnemonic.to_entropy(false, Language::Japanese).unwrap().as_slice(),
                entropy
            );
            assert_eq!(
                mnemonic.to_entropy(false, Language::English),
                Err(Error::InvalidMnemonic)
            );
        }

        #[test]
        fn test_checksum_of_word_slices() {
            let words: Vec<&str> = ABANDON_12.split(' ').collect();
            assert!(Mnemonic::is_valid_checksum(&words, Language::English));
            assert!(!Mnemonic::is_valid_checksum(&words[..11], Language::English));

            let mut wrong = words.clone();
            wrong[11] = "abandon";
            assert!(!Mnemonic::is_valid_checksum(&wrong, Language::English));
        }

        proptest! {
            #[test]
            fn entropy_roundtrip(
                len in prop::sample::select(vec![16usize, 20, 24, 28, 32]),
                seed in proptest::collection::vec(any::<u8>(), 32),
            ) {
                let entropy = &seed[..len];
                let mnemonic = Mnemonic::from_entropy(entropy, Language::English).unwrap();
                prop_assert_eq!(mnemonic.word_count(), len * 8 / 32 * 3);
                prop_assert!(mnemonic.is_valid(Language::English));
                let recovered = mnemonic.to_entropy(false, Language::English).unwrap();
                prop_assert_eq!(recovered.as_slice(), entropy);
            }
        }
    }

    mod shift_tests {
        use super::*;

        #[test]
        fn test_shift_from_secp256k1_key() {
            let private_key = PrivateKey::new(SECP_SECRET.to_vec(), EllipticalCurve::Secp256k1);

            let shifted = Mnemonic::shifted_from_secp256k1(&private_key).unwrap();
            assert_eq!(shifted.phrase(), SHIFTED_WORDS);
            assert!(!shifted.is_valid(Language::English));

            let shifted_spsk = shifted.to_secp256k1_secret_key(Language::English).unwrap();
            assert_eq!(shifted_spsk, SPSK);
            assert!(is_valid_secp256k1_secret_key(&shifted_spsk));

            let normal = shifted.unshift(Language::English).unwrap();
            assert_eq!(normal.phrase(), NORMAL_WORDS);
            assert!(normal.is_valid(Language::English));
            assert_eq!(normal.to_secp256k1_secret_key(Language::English).unwrap(), SPSK);
        }

        #[test]
        fn test_shifted_word_is_involution() {
            let shifted = Mnemonic::shifted_word("sunny", Language::English).unwrap();
            assert_eq!(shifted, "siren");
            assert_eq!(Mnemonic::shifted_word(shifted, Language::English).unwrap(), "sunny");
            assert_eq!(
                Mnemonic::shifted_word("notaword", Language::English),
                Err(Error::InvalidWordToShift)
            );
        }

        #[test]
        fn test_shift_requires_24_words() {
            let mnemonic = Mnemonic::new(KIT).unwrap();
            assert_eq!(
                mnemonic.shift_checksum(Language::English),
                Err(Error::InvalidWordCount(12))
            );
        }

        #[test]
        fn test_shift_rejected_when_neither_validates() {
            // Unknown first word: neither phrase can validate.
            let mut words: Vec<&str> = NORMAL_WORDS.split(' ').collect();
            words[0] = "qwerty";
            let mnemonic = Mnemonic::new(&words.join(" ")).unwrap();
            assert_eq!(
                mnemonic.shift_checksum(Language::English),
                Err(Error::InvalidMnemonic)
            );
        }

        #[test]
        fn test_shift_only_rejects_ed25519_keys() {
            let private_key = PrivateKey::new(SECP_SECRET.to_vec(), EllipticalCurve::Ed25519);
            assert!(Mnemonic::shifted_from_secp256k1(&private_key).is_none());
        }

        #[test]
        fn test_invalid_spsk() {
            assert!(!is_valid_secp256k1_secret_key("spsk2Nqz6AW1zVwLJ3QgcXhzPNdT3mpRskUKA2UXza5kNRd3NLKrM"));
            assert!(!is_valid_secp256k1_secret_key("edpkvCbYCa6d6g9hEcK6tvwgsY9jfB4HDzp3jZSBwfuWNSvxE5T5KR"));
        }
    }

    #[test]
    fn test_scrub() {
        let mut mnemonic = Mnemonic::new(ABANDON_12).unwrap();
        let len = mnemonic.phrase().len();
        mnemonic.scrub();
        assert_eq!(mnemonic.phrase(), "0".repeat(len));
    }

    #[test]
    fn test_debug_redacts_phrase() {
        let mnemonic = Mnemonic::new(ABANDON_12).unwrap();
        assert!(!format!("{mnemonic:?}").contains("abandon"));
    }
}
