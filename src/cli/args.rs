//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Probe the prediction service and exit
    Health { url: Option<String> },
    /// Run the TUI application (default)
    Run { url: Option<String> },
    /// Arguments could not be parsed
    Invalid(String),
}

impl CliCommand {
    /// Base URL override given with `--url`, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            CliCommand::Health { url } | CliCommand::Run { url } => url.as_deref(),
            _ => None,
        }
    }
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: stroke-risk [OPTIONS]

Options:
  --url <URL>      Base URL of the prediction service
  --health         Check that the prediction service is up, then exit
  -V, --version    Print version
  -h, --help       Print this help

Environment:
  STROKE_RISK_URL            Base URL of the prediction service
  STROKE_RISK_TIMEOUT_SECS   Request timeout in seconds
  RUST_LOG                   Log filter (default: stroke_risk=info)";

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else. Unknown arguments are
/// ignored.
///
/// # Examples
///
/// ```
/// use stroke_risk::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["stroke-risk".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut url = None;
    let mut health = false;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--health" => health = true,
            "--url" => match args.next() {
                Some(value) if !value.starts_with('-') => url = Some(value),
                _ => return CliCommand::Invalid("--url requires a value".to_string()),
            },
            other => {
                if let Some(value) = other.strip_prefix("--url=") {
                    if value.is_empty() {
                        return CliCommand::Invalid("--url requires a value".to_string());
                    }
                    url = Some(value.to_string());
                }
            }
        }
    }

    if health {
        CliCommand::Health { url }
    } else {
        CliCommand::Run { url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["stroke-risk".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["--url", "http://x", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run { url: None });
    }

    #[test]
    fn test_parse_url() {
        let cmd = parse(&["--url", "http://10.0.0.2:8000"]);
        assert_eq!(cmd.url(), Some("http://10.0.0.2:8000"));

        let cmd = parse(&["--url=http://svc"]);
        assert_eq!(cmd, CliCommand::Run { url: Some("http://svc".into()) });
    }

    #[test]
    fn test_parse_url_missing_value() {
        assert!(matches!(parse(&["--url"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--url", "--health"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--url="]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_health() {
        assert_eq!(
            parse(&["--health", "--url", "http://svc"]),
            CliCommand::Health { url: Some("http://svc".into()) }
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::Run { url: None });
    }
}
