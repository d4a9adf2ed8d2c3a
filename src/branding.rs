//! Branding and application identity configuration.
//!
//! This module centralizes all branding-related strings (names, paths, contacts)
//! so the dealership identity lives in one place.

use crate::services::lead::ContactInfo;

/// The human-readable display name of the application.
///
/// Used in:
/// - The title bar
/// - Help text
/// - CLI about text
pub const APP_DISPLAY_NAME: &str = "Daytona Motos";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "daytona";

/// The directory name for application data (config, preferences, logs, cache).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Daytona";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Catálogo interactivo de motos para la terminal";

/// Log file written by the terminal UI inside the config directory.
pub const LOG_FILE: &str = "daytona.log";

/// Host of the messaging deep links.
pub const MESSAGING_HOST: &str = "wa.me";

/// Dealership owner.
pub const OWNER_CONTACT: ContactInfo = ContactInfo {
    name: "Franco Giraudo (Dueño)",
    number: "5493572592411",
};

/// Business partner.
pub const PARTNER_CONTACT: ContactInfo = ContactInfo {
    name: "Francisco Salgado (Socio)",
    number: "5493572501539",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        // Ensure binary name is lowercase
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());

        // Ensure no spaces in binary name
        assert!(!APP_BINARY_NAME.contains(' '));

        // Ensure no spaces in data dir
        assert!(!APP_DATA_DIR.contains(' '));
    }

    #[test]
    fn test_contact_numbers_are_digits() {
        for contact in [OWNER_CONTACT, PARTNER_CONTACT] {
            assert!(contact.number.chars().all(|c| c.is_ascii_digit()));
        }
        assert_ne!(OWNER_CONTACT.number, PARTNER_CONTACT.number);
    }
}
