//! Device token sent with login attempts.

use std::sync::OnceLock;

static DEVICE_TOKEN: OnceLock<String> = OnceLock::new();

/// The device token for this process.
///
/// Generated on first use and reused for every later login so the API
/// sees one stable device.
pub fn device_token() -> &'static str {
    DEVICE_TOKEN.get_or_init(generate_device_token)
}

/// Generate a fresh random device token in `8-4-4-4-12` hex form.
pub fn generate_device_token() -> String {
    uuid::Builder::from_random_bytes(rand::random())
        .into_uuid()
        .to_string()
}
