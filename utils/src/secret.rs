use zeroize::Zeroizing;

/// A string value that must never show up in logs
/// or diagnostics, such as a registry access token.
///
/// The backing memory is zeroed on drop.
#[derive(Clone)]
pub struct SecretValue(Zeroizing<String>);

macro_rules! impl_secret_value {
    ($($type:ty),*) => {
        $(
            impl From<$type> for SecretValue {
                fn from(value: $type) -> Self {
                    Self(String::from(value.trim()).into())
                }
            }
        )*
    };
}

impl_secret_value!(String, &String, &str);

impl std::str::FromStr for SecretValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl SecretValue {
    /// Get the value of the secret.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

#[cfg(test)]
mod test {
    use super::SecretValue;

    #[test]
    fn display_and_debug_redact() {
        let secret = SecretValue::from("hunter2");

        assert_eq!(format!("{secret}"), "[REDACTED]");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.value(), "hunter2");
    }

    #[test]
    fn from_trims_whitespace() {
        let secret = SecretValue::from("  token\n");

        assert_eq!(secret.value(), "token");
    }
}
