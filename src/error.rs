use thiserror::Error;

/// Errors raised before a scan starts.
///
/// Per-sample evaluation problems (a NaN outside the function's natural
/// domain) are not errors: the scanner simply finds no crossing there.
#[derive(Debug, Error)]
pub enum Error {
    /// The scan domain is empty, reversed, non-finite, or has no positive step.
    #[error(
        "invalid domain: need finite from < to and segments > 0. \
         got from={from}, to={to}, segments={segments}"
    )]
    InvalidDomain { from: f64, to: f64, segments: f64 },

    /// The expression text failed to parse or to bind the variable `x`.
    #[error("cannot compile expression `{source_text}`: {source}")]
    Expression {
        source_text: String,
        #[source]
        source: meval::Error,
    },

    /// A command-line operand is not a number.
    #[error("invalid {name}: `{value}` is not a number")]
    InvalidArgument { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_domain_message() {
        let e = Error::InvalidDomain {
            from: 2.0,
            to: 1.0,
            segments: 10.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("from=2"), "got: {}", msg);
        assert!(msg.contains("to=1"), "got: {}", msg);
    }

    #[test]
    fn test_invalid_argument_message() {
        let e = Error::InvalidArgument {
            name: "segments",
            value: "ten".to_string(),
        };
        assert_eq!(e.to_string(), "invalid segments: `ten` is not a number");
    }
}
