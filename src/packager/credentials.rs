//! Code-signing credentials.

use std::fmt;

/// Replacement text for the password in anything shown to the user.
pub const REDACTED: &str = "********";

/// Certificate path and password, held in memory for one run.
///
/// Neither value is validated here; both are handed to the signing tool
/// verbatim. `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    certificate: String,
    password: String,
}

impl Credentials {
    pub fn new(certificate: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            certificate: certificate.into(),
            password: password.into(),
        }
    }

    /// Certificate file path as typed by the user.
    pub fn certificate(&self) -> &str {
        &self.certificate
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Same certificate with the password replaced by [`REDACTED`], for
    /// rendering commands that are shown to the user.
    pub fn redacted(&self) -> Self {
        Self::new(self.certificate.clone(), REDACTED)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("certificate", &self.certificate)
            .field("password", &REDACTED)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_password() {
        let creds = Credentials::new("C:\\cert.pfx", "secret");
        let shown = format!("{creds:?}");
        assert!(shown.contains("C:\\\\cert.pfx"));
        assert!(!shown.contains("secret"));
    }

    #[test]
    fn redacted_keeps_certificate() {
        let creds = Credentials::new("C:\\cert.pfx", "secret").redacted();
        assert_eq!(creds.certificate(), "C:\\cert.pfx");
        assert_eq!(creds.password(), REDACTED);
    }
}
