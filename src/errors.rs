//! Error types for checked conversions
//!
//! The geometry operations themselves never fail. These errors only come out
//! of `try_convert` and the checked native adapters, where a coordinate has
//! to land in a narrower numeric kind.

use miette::Diagnostic;
use thiserror::Error;

/// A coordinate could not be represented in the target numeric kind.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq)]
pub enum GeomError {
    #[error("coordinate is NaN and cannot be converted to {kind}")]
    #[diagnostic(
        code(geomutil::convert::nan),
        help("NaN passes through the kernel unchanged; filter it out before converting")
    )]
    NotANumber { kind: &'static str },

    #[error("coordinate {value} is out of range for {kind}")]
    #[diagnostic(
        code(geomutil::convert::out_of_range),
        help("use `convert` instead to saturate at the bounds of the target kind")
    )]
    OutOfRange { value: f64, kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_target_kind() {
        let err = GeomError::OutOfRange {
            value: 1e12,
            kind: "i32",
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"coordinate 1000000000000 is out of range for i32"
        );

        let err = GeomError::NotANumber { kind: "i64" };
        insta::assert_snapshot!(
            err.to_string(),
            @"coordinate is NaN and cannot be converted to i64"
        );
    }

    #[test]
    fn diagnostic_codes() {
        let err = GeomError::NotANumber { kind: "i32" };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("geomutil::convert::nan"));

        let err = GeomError::OutOfRange {
            value: f64::INFINITY,
            kind: "i32",
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("geomutil::convert::out_of_range"));
    }
}
