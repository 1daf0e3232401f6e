//! Fixture handlers.
//!
//! None of these look at the request: method, body and query string are all
//! ignored and the answer is always 200.

use crate::fixtures::{self, masterdata, otp, Fixture};

pub fn generate_otp() -> Fixture {
    otp::otp_fixture()
}

pub fn record_audit() -> Fixture {
    tracing::info!("audit endpoint invoked");
    Fixture::Static(fixtures::AUDIT_SUCCESS)
}

pub fn send_sms() -> Fixture {
    tracing::info!("Mock sending OTP");
    Fixture::Static(fixtures::SMS_SUCCESS)
}

pub fn issue_token() -> Fixture {
    tracing::info!("openid-connect/token invoked");
    Fixture::Static(fixtures::ACCESS_TOKEN)
}

pub fn ui_spec() -> Fixture {
    Fixture::Static(masterdata::UI_SPEC)
}

pub fn identity_schema() -> Fixture {
    Fixture::Static(masterdata::IDENTITY_SCHEMA)
}
