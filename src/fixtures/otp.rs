//! One-time password codes.

use rand::Rng;
use serde_json::json;

use super::Fixture;

/// Smallest code handed out.
pub const MIN_CODE: u32 = 100_000;
/// Largest code handed out.
pub const MAX_CODE: u32 = 999_999;

/// Draw a six digit code in `[MIN_CODE, MAX_CODE]`.
pub fn generate_code() -> String {
    rand::thread_rng().gen_range(MIN_CODE..=MAX_CODE).to_string()
}

/// `{"response":{"otp":"<code>"}}` for a fresh code.
pub fn otp_fixture() -> Fixture {
    let code = generate_code();
    tracing::debug!(otp = %code, "Generated OTP");
    Fixture::Generated(json!({ "response": { "otp": code } }))
}
