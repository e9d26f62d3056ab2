// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use thiserror::Error;

use crate::models::{GenerationConfig, Password, StrengthLabel};

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
/// The 32 printable ASCII punctuation characters.
pub const SYMBOLS: &[u8] = br##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid configuration: no character classes selected")]
    InvalidConfiguration,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Concatenates the enabled classes in a fixed order: lowercase, uppercase, digits, symbols.
pub fn build_alphabet(config: &GenerationConfig) -> Vec<u8> {
    let mut chars = Vec::new();

    if config.include_lowercase {
        chars.extend_from_slice(LOWERCASE);
    }
    if config.include_uppercase {
        chars.extend_from_slice(UPPERCASE);
    }
    if config.include_digits {
        chars.extend_from_slice(DIGITS);
    }
    if config.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Draws `config.length` characters uniformly from the enabled alphabet using the
    /// operating system's CSPRNG. Classes are not guaranteed to all appear.
    pub fn generate(&self, config: &GenerationConfig) -> Result<Password> {
        let chars = build_alphabet(config);
        if chars.is_empty() {
            return Err(GeneratorError::InvalidConfiguration);
        }

        log::debug!(
            "Generating password: length={} alphabet_size={}",
            config.length,
            chars.len()
        );

        // Uniform rejects out-of-range samples, so there is no modulo bias.
        let dist = Uniform::from(0..chars.len());
        let mut rng = OsRng;
        let password: String = (0..config.length)
            .map(|_| chars[dist.sample(&mut rng)] as char)
            .collect();

        Ok(Password::from(password))
    }

    pub fn generate_batch(&self, config: &GenerationConfig, count: usize) -> Result<Vec<Password>> {
        if !config.has_any_class() {
            return Err(GeneratorError::InvalidConfiguration);
        }
        (0..count).map(|_| self.generate(config)).collect()
    }

    pub fn classify(&self, password: &str) -> StrengthLabel {
        super::strength::classify(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(length: usize, lower: bool, upper: bool, digits: bool, symbols: bool) -> GenerationConfig {
        GenerationConfig {
            length,
            include_lowercase: lower,
            include_uppercase: upper,
            include_digits: digits,
            include_symbols: symbols,
        }
    }

    #[test]
    fn alphabet_follows_fixed_class_order() {
        let alphabet = build_alphabet(&config(8, true, true, true, true));
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 32);
        assert_eq!(alphabet[0], b'a');
        assert_eq!(alphabet[26], b'A');
        assert_eq!(alphabet[52], b'0');
        assert_eq!(alphabet[62], b'!');
        assert_eq!(*alphabet.last().unwrap(), b'~');
    }

    #[test]
    fn symbols_are_exactly_ascii_punctuation() {
        let expected: Vec<u8> = (0x21u8..0x7f).filter(|b| b.is_ascii_punctuation()).collect();
        assert_eq!(SYMBOLS, expected.as_slice());
    }

    #[test]
    fn generates_requested_length_from_enabled_classes() {
        let generator = PasswordGenerator::new();
        for length in [4, 12, 64, 256] {
            let pwd = generator.generate(&config(length, false, true, true, false)).unwrap();
            assert_eq!(pwd.len(), length);
            assert!(pwd
                .as_str()
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn single_class_draws_only_that_class() {
        let generator = PasswordGenerator::new();
        let pwd = generator.generate(&config(200, false, false, false, true)).unwrap();
        assert!(pwd.as_str().bytes().all(|b| SYMBOLS.contains(&b)));
    }

    #[test]
    fn no_classes_is_invalid_configuration() {
        let generator = PasswordGenerator::new();
        let err = generator.generate(&config(12, false, false, false, false)).unwrap_err();
        assert_eq!(err, GeneratorError::InvalidConfiguration);
        assert!(generator
            .generate_batch(&config(12, false, false, false, false), 3)
            .is_err());
    }

    #[test]
    fn batch_produces_count_passwords() {
        let generator = PasswordGenerator::new();
        let batch = generator.generate_batch(&GenerationConfig::default(), 7).unwrap();
        assert_eq!(batch.len(), 7);
        assert!(batch.iter().all(|p| p.len() == 12));
    }

    #[test]
    fn draws_are_uniform_over_full_alphabet() {
        const DRAWS: usize = 100_000;
        let generator = PasswordGenerator::new();
        let pwd = generator.generate(&config(DRAWS, true, true, true, true)).unwrap();

        let alphabet = build_alphabet(&config(DRAWS, true, true, true, true));
        let mut counts = [0usize; 128];
        for b in pwd.as_str().bytes() {
            counts[b as usize] += 1;
        }

        // Mean is ~1064 with a standard deviation near 32. A byte-modulo sampler skews
        // symbols by roughly +/-27%, well outside this band.
        let mean = DRAWS as f64 / alphabet.len() as f64;
        for &symbol in &alphabet {
            let count = counts[symbol as usize] as f64;
            assert!(
                (count - mean).abs() < mean * 0.2,
                "{:?} drawn {} times, expected about {:.0}",
                symbol as char,
                count,
                mean
            );
        }
    }

    #[test]
    fn draws_cover_the_whole_alphabet() {
        // 10 digits over 2000 draws; missing one would be astronomically unlikely.
        let generator = PasswordGenerator::new();
        let pwd = generator.generate(&config(2000, false, false, true, false)).unwrap();
        for digit in DIGITS {
            assert!(pwd.as_str().as_bytes().contains(digit));
        }
    }
}
