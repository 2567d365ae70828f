//! Credentials and stored password digests.
//!
//! Inbound adapters turn raw form fields into [`LoginCredentials`] before any
//! port is called, so services only ever see validated input.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::{User, UserValidationError, Username};

/// Error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username missing, blank, or malformed.
    Username(UserValidationError),
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` satisfies [`Username`] validation.
/// - `password` is non-empty; whitespace is preserved.
///
/// # Examples
/// ```
/// use quill::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("Автор", "secret").unwrap();
/// assert_eq!(creds.username().as_ref(), "Автор");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw form inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = Username::new(username).map_err(LoginValidationError::Username)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

const SALT_BYTES: usize = 16;

/// Salted SHA-256 digest of a password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    salt: [u8; SALT_BYTES],
    hash: [u8; 32],
}

impl PasswordDigest {
    /// Digest `password` with a fresh random salt.
    pub fn derive(password: &str) -> Self {
        Self::with_salt(password, rand::random())
    }

    fn with_salt(password: &str, salt: [u8; SALT_BYTES]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(password.as_bytes());
        Self {
            salt,
            hash: hasher.finalize().into(),
        }
    }

    /// Whether `password` produces this digest.
    pub fn verify(&self, password: &str) -> bool {
        Self::with_salt(password, self.salt).hash == self.hash
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest")
            .field("salt", &hex::encode(self.salt))
            .finish_non_exhaustive()
    }
}

/// A user together with their password digest, as held by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub user: User,
    pub password: PasswordDigest,
}
