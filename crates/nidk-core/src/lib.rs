#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod kinds;
pub mod masking;
pub mod verhoeff;

pub use kinds::IdKind;
pub use masking::mask_identity_number;
pub use verhoeff::{
    IDENTITY_NUMBER_LEN, PAYLOAD_LEN, VerhoeffError, check_digit, validate, verify,
    with_check_digit,
};

/// Returns the current version of the nidk-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
