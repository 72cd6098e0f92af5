//! Call records handled by the call center.

use core::fmt;

/// Longest caller name kept, in characters.
pub const MAX_NAME_LEN: usize = 29;

/// Longest call reason kept, in characters.
pub const MAX_REASON_LEN: usize = 99;

/// A single incoming call.
///
/// Text fields are bounded: input longer than [`MAX_NAME_LEN`] /
/// [`MAX_REASON_LEN`] characters is cut at a character boundary and a
/// trailing line break is stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    id:          u32,
    caller_name: String,
    reason:      String,
}

impl Call {
    /// Builds a call record, bounding both text fields.
    #[must_use]
    pub fn new(id: u32, caller_name: &str, reason: &str) -> Self {
        Self {
            id,
            caller_name: bounded_field(caller_name, MAX_NAME_LEN),
            reason: bounded_field(reason, MAX_REASON_LEN),
        }
    }

    /// Sequential call identifier.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Name of the caller.
    #[must_use]
    pub fn caller_name(&self) -> &str {
        &self.caller_name
    }

    /// Reason given for the call.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Call ID: {}", self.id)?;
        writeln!(f, "Caller\u{2019}s name: {}", self.caller_name)?;
        write!(f, "Call reason: {}", self.reason)
    }
}

fn bounded_field(raw: &str, max_chars: usize) -> String {
    raw.trim_end_matches(['\r', '\n']).chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_line_break() {
        let call = Call::new(1, "Ada\n", "Billing question\r\n");
        assert_eq!(call.caller_name(), "Ada");
        assert_eq!(call.reason(), "Billing question");
    }

    #[test]
    fn test_bounds_long_fields() {
        let name = "x".repeat(40);
        let reason = "é".repeat(150);
        let call = Call::new(7, &name, &reason);
        assert_eq!(call.caller_name().chars().count(), MAX_NAME_LEN);
        assert_eq!(call.reason().chars().count(), MAX_REASON_LEN);
    }

    #[test]
    fn test_display_lists_details() {
        let call = Call::new(3, "Grace", "Outage");
        assert_eq!(
            call.to_string(),
            "Call ID: 3\nCaller\u{2019}s name: Grace\nCall reason: Outage"
        );
    }
}
