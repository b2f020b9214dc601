//! # Algorithm Identifiers
//!
//! OpenPGP algorithm registries used by the encryptors. Every identifier maps
//! to and from its wire octet.

use crate::consts::AEAD_TAG_LEN;
use crate::error::PgpError;
use std::fmt;

/// Symmetric-key algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SymmetricAlgorithm {
    /// Plaintext or unencrypted data. Never valid for an encryptor.
    Null = 0,
    Idea = 1,
    TripleDes = 2,
    Cast5 = 3,
    Blowfish = 4,
    Aes128 = 7,
    Aes192 = 8,
    Aes256 = 9,
    Twofish = 10,
    Camellia128 = 11,
    Camellia192 = 12,
    Camellia256 = 13,
}

impl SymmetricAlgorithm {
    /// Wire octet.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Key length in octets.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Null => 0,
            Self::Idea | Self::Cast5 | Self::Blowfish | Self::Aes128 | Self::Camellia128 => 16,
            Self::TripleDes | Self::Aes192 | Self::Camellia192 => 24,
            Self::Aes256 | Self::Twofish | Self::Camellia256 => 32,
        }
    }

    /// Cipher block size in octets.
    #[must_use]
    pub const fn block_size(self) -> usize {
        match self {
            Self::Null => 0,
            Self::Idea | Self::TripleDes | Self::Cast5 | Self::Blowfish => 8,
            _ => 16,
        }
    }

    /// Whether the AEAD Encrypted Data packet may use this cipher.
    #[must_use]
    pub const fn supports_aead(self) -> bool {
        matches!(self, Self::Aes128 | Self::Aes192 | Self::Aes256)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Idea => "IDEA",
            Self::TripleDes => "TripleDES",
            Self::Cast5 => "CAST5",
            Self::Blowfish => "Blowfish",
            Self::Aes128 => "AES-128",
            Self::Aes192 => "AES-192",
            Self::Aes256 => "AES-256",
            Self::Twofish => "Twofish",
            Self::Camellia128 => "Camellia-128",
            Self::Camellia192 => "Camellia-192",
            Self::Camellia256 => "Camellia-256",
        }
    }
}

impl fmt::Display for SymmetricAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for SymmetricAlgorithm {
    type Error = PgpError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Ok(match id {
            0 => Self::Null,
            1 => Self::Idea,
            2 => Self::TripleDes,
            3 => Self::Cast5,
            4 => Self::Blowfish,
            7 => Self::Aes128,
            8 => Self::Aes192,
            9 => Self::Aes256,
            10 => Self::Twofish,
            11 => Self::Camellia128,
            12 => Self::Camellia192,
            13 => Self::Camellia256,
            other => {
                return Err(PgpError::UnsupportedAlgorithm(format!(
                    "symmetric algorithm id {other}"
                )))
            }
        })
    }
}

/// AEAD mode identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AeadAlgorithm {
    Eax = 1,
    Ocb = 2,
    Gcm = 3,
}

impl AeadAlgorithm {
    /// Wire octet.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Starting-nonce length in octets.
    #[must_use]
    pub const fn iv_len(self) -> usize {
        match self {
            Self::Eax => 16,
            Self::Ocb => 15,
            Self::Gcm => 12,
        }
    }

    /// Authentication tag length in octets.
    #[must_use]
    pub const fn tag_len(self) -> usize {
        AEAD_TAG_LEN
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eax => "EAX",
            Self::Ocb => "OCB",
            Self::Gcm => "GCM",
        }
    }
}

impl fmt::Display for AeadAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for AeadAlgorithm {
    type Error = PgpError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Self::Eax),
            2 => Ok(Self::Ocb),
            3 => Ok(Self::Gcm),
            other => Err(PgpError::UnsupportedAlgorithm(format!(
                "AEAD algorithm id {other}"
            ))),
        }
    }
}

/// Hash algorithm of the legacy integrity digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HashAlgorithm {
    Sha1 = 2,
}

impl HashAlgorithm {
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Digest length in octets.
    #[must_use]
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha1 => f.write_str("SHA-1"),
        }
    }
}
