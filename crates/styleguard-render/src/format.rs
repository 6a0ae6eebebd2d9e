use std::fmt;
use std::str::FromStr;
use styleguard_types::ConfigurationError;

/// Output surface selected with `--format`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Github,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Github => "github",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "github" | "gha" => Ok(OutputFormat::Github),
            other => Err(ConfigurationError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("markdown".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("gha".parse::<OutputFormat>(), Ok(OutputFormat::Github));
        assert_eq!("github".parse::<OutputFormat>(), Ok(OutputFormat::Github));
    }

    #[test]
    fn unknown_format_is_unsupported() {
        assert_eq!(
            "xml".parse::<OutputFormat>(),
            Err(ConfigurationError::UnsupportedFormat("xml".to_string()))
        );
        assert!("".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for format in [
            OutputFormat::Text,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Github,
        ] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }
}
