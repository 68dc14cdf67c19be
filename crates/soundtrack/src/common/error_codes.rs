//! Error categories shared by every layer that reports failures to the CLI.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    InvalidInput,
    Unauthorized,
    External,
    Internal,
    Timeout,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::Unauthorized => "unauthorized",
            ErrorCategory::External => "external",
            ErrorCategory::Internal => "internal",
            ErrorCategory::Timeout => "timeout",
        }
    }
}

impl std::str::FromStr for ErrorCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_found" => Ok(ErrorCategory::NotFound),
            "invalid_input" => Ok(ErrorCategory::InvalidInput),
            "unauthorized" => Ok(ErrorCategory::Unauthorized),
            "external" => Ok(ErrorCategory::External),
            "internal" => Ok(ErrorCategory::Internal),
            "timeout" => Ok(ErrorCategory::Timeout),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_its_own_name() {
        assert_eq!("timeout".parse(), Ok(ErrorCategory::Timeout));
        assert_eq!(
            ErrorCategory::Unauthorized.as_str().parse(),
            Ok(ErrorCategory::Unauthorized)
        );
        assert_eq!("bogus".parse::<ErrorCategory>(), Err(()));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::NotFound.to_string(), "not_found");
    }
}
