//! Command-line argument parsing.

use std::path::PathBuf;

use crate::error::CliError;
use crate::models::ItemInfo;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the panel (default)
    Run(RunOptions),
}

/// Options for running the panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// `--config`
    pub config_path: Option<PathBuf>,
    /// `--endpoint`
    pub endpoint: Option<String>,
    /// `--item`, in order given
    pub items: Vec<ItemInfo>,
    /// `--log`
    pub log_path: Option<PathBuf>,
}

/// Parse command-line arguments.
///
/// Flags taking a value accept both `--flag value` and `--flag=value`.
///
/// # Examples
///
/// ```
/// use ga4_panel::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["ga4-panel".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, CliError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        let mut value = |name: &str| -> Result<String, CliError> {
            match inline_value.clone() {
                Some(v) => Ok(v),
                None => args
                    .next()
                    .ok_or_else(|| CliError::MissingValue(name.to_string())),
            }
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--config" => options.config_path = Some(PathBuf::from(value("--config")?)),
            "--endpoint" => options.endpoint = Some(value("--endpoint")?),
            "--log" => options.log_path = Some(PathBuf::from(value("--log")?)),
            "--item" => options.items.push(parse_item(&value("--item")?)?),
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    if options.items.is_empty() {
        return Err(CliError::NoItems);
    }
    Ok(CliCommand::Run(options))
}

/// `CODENAME[=NAME]`; the name defaults to the codename.
fn parse_item(spec: &str) -> Result<ItemInfo, CliError> {
    let (codename, name) = match spec.split_once('=') {
        Some((codename, name)) if !name.trim().is_empty() => (codename.trim(), name.trim()),
        Some((codename, _)) => (codename.trim(), codename.trim()),
        None => (spec.trim(), spec.trim()),
    };
    if codename.is_empty() {
        return Err(CliError::EmptyCodename);
    }
    Ok(ItemInfo::new(name, codename))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, CliError> {
        let mut all = vec!["ga4-panel".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_wins_over_missing_items() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_full_run() {
        let cmd = parse(&[
            "--endpoint",
            "https://api.example.com/ga",
            "--item",
            "abc-123=Blog Post",
            "--item=xyz-789",
            "--config=/etc/ga4.json",
            "--log",
            "/tmp/ga4.log",
        ])
        .unwrap();

        let CliCommand::Run(options) = cmd else {
            panic!("expected Run");
        };
        assert_eq!(options.endpoint.as_deref(), Some("https://api.example.com/ga"));
        assert_eq!(
            options.items,
            vec![
                ItemInfo::new("Blog Post", "abc-123"),
                ItemInfo::new("xyz-789", "xyz-789"),
            ]
        );
        assert_eq!(options.config_path, Some(PathBuf::from("/etc/ga4.json")));
        assert_eq!(options.log_path, Some(PathBuf::from("/tmp/ga4.log")));
    }

    #[test]
    fn test_endpoint_with_equals_in_query_survives() {
        let cmd = parse(&["--endpoint=https://x.example.com/ga?key=v", "--item", "a"]).unwrap();
        let CliCommand::Run(options) = cmd else {
            panic!("expected Run");
        };
        assert_eq!(options.endpoint.as_deref(), Some("https://x.example.com/ga?key=v"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(&[]), Err(CliError::NoItems));
        assert_eq!(
            parse(&["--item"]),
            Err(CliError::MissingValue("--item".to_string()))
        );
        assert_eq!(parse(&["--item", "=Name"]), Err(CliError::EmptyCodename));
        assert_eq!(
            parse(&["--bogus"]),
            Err(CliError::UnknownArgument("--bogus".to_string()))
        );
    }

    #[test]
    fn test_item_with_empty_name_uses_codename() {
        assert_eq!(parse_item("abc=").unwrap(), ItemInfo::new("abc", "abc"));
    }
}
