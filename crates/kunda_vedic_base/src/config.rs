//! Input validation policies for the Lagna parser.

use serde::Deserialize;

/// How to treat a sign code that is not one of the 12 rashi codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignPolicy {
    /// Treat the unknown code as Mesha (offset 0) and flag it.
    #[default]
    Lenient,
    /// Reject the input.
    Strict,
}

/// Whether degrees/minutes/seconds are range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangePolicy {
    /// Accept any real number, carried through the math unchanged.
    #[default]
    Lenient,
    /// Require degrees in [0, 30) and minutes/seconds in [0, 60).
    Strict,
}

/// Configurable parameters for reading a Lagna descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct KundaConfig {
    /// Policy for unrecognized sign codes. Default: lenient.
    pub sign_policy: SignPolicy,
    /// Policy for out-of-range DMS components. Default: lenient.
    pub range_policy: RangePolicy,
}

impl KundaConfig {
    /// Both policies strict.
    pub fn strict() -> Self {
        Self {
            sign_policy: SignPolicy::Strict,
            range_policy: RangePolicy::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient() {
        let c = KundaConfig::default();
        assert_eq!(c.sign_policy, SignPolicy::Lenient);
        assert_eq!(c.range_policy, RangePolicy::Lenient);
    }

    #[test]
    fn strict_sets_both() {
        let c = KundaConfig::strict();
        assert_eq!(c.sign_policy, SignPolicy::Strict);
        assert_eq!(c.range_policy, RangePolicy::Strict);
    }
}
