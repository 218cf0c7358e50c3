//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a clean
//! interface for the main application logic. It supports the standard help,
//! version, and debug flags while gracefully handling unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Calculate a chart for the given date/time with these settings
    Calculate {
        date: String,
        time: Option<String>,
        json: bool,
        timezone: Option<String>,
        gender: Option<String>,
        no_solar_time: bool,
        debug_enabled: bool,
        config_dir: Option<String>,
    },

    /// List the twelve hour-branch windows
    HoursCommand,
    /// List the twelve solar-term months and their longitude ranges
    TermsCommand,

    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// This function processes the arguments and determines what action should
    /// be taken, including whether to show help, version info, or calculate.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    ///
    /// # Returns
    /// ParsedArgs containing the determined action
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        // Help/version flags take precedence anywhere in the argument list
        if args_vec.iter().any(|a| a == "--help" || a == "-h") {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }
        if args_vec.iter().any(|a| a == "--version" || a == "-V") {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }

        // Subcommands are a bare word in first position
        match args_vec.first().map(String::as_str) {
            Some("hours") => {
                return ParsedArgs {
                    action: CliAction::HoursCommand,
                };
            }
            Some("terms") => {
                return ParsedArgs {
                    action: CliAction::TermsCommand,
                };
            }
            Some("help") => {
                return ParsedArgs {
                    action: CliAction::ShowHelp,
                };
            }
            None => {
                return ParsedArgs {
                    action: CliAction::ShowHelp,
                };
            }
            _ => {}
        }

        let mut json = false;
        let mut timezone: Option<String> = None;
        let mut gender: Option<String> = None;
        let mut no_solar_time = false;
        let mut debug_enabled = false;
        let mut config_dir: Option<String> = None;
        let mut positional: Vec<String> = Vec::new();
        let mut unknown_arg_found = false;

        let mut idx = 0;
        while idx < args_vec.len() {
            let arg = &args_vec[idx];
            match arg.as_str() {
                "--json" | "-j" => json = true,
                "--no-solar-time" | "-S" => no_solar_time = true,
                "--debug" | "-d" => debug_enabled = true,
                "--timezone" | "-z" => {
                    idx += 1;
                    match args_vec.get(idx) {
                        Some(value) => timezone = Some(value.clone()),
                        None => unknown_arg_found = true,
                    }
                }
                "--gender" | "-g" => {
                    idx += 1;
                    match args_vec.get(idx) {
                        Some(value) => gender = Some(value.clone()),
                        None => unknown_arg_found = true,
                    }
                }
                "--config" | "-c" => {
                    idx += 1;
                    match args_vec.get(idx) {
                        Some(value) => config_dir = Some(value.clone()),
                        None => unknown_arg_found = true,
                    }
                }
                other if other.starts_with('-') => unknown_arg_found = true,
                _ => positional.push(arg.clone()),
            }
            idx += 1;
        }

        // Exactly a date, optionally followed by a time
        if unknown_arg_found || positional.is_empty() || positional.len() > 2 {
            return ParsedArgs {
                action: CliAction::ShowHelpDueToError,
            };
        }

        let mut positional = positional.into_iter();
        ParsedArgs {
            action: CliAction::Calculate {
                date: positional.next().unwrap_or_default(),
                time: positional.next(),
                json,
                timezone,
                gender,
                no_solar_time,
                debug_enabled,
                config_dir,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        let mut full = vec!["sajur"];
        full.extend(args);
        ParsedArgs::parse(full).action
    }

    #[test]
    fn bare_invocation_shows_help() {
        assert_eq!(parse(&[]), CliAction::ShowHelp);
    }

    #[test]
    fn date_only_calculates() {
        match parse(&["1990-03-15"]) {
            CliAction::Calculate {
                date,
                time,
                json,
                no_solar_time,
                ..
            } => {
                assert_eq!(date, "1990-03-15");
                assert_eq!(time, None);
                assert!(!json);
                assert!(!no_solar_time);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn date_time_and_flags() {
        match parse(&[
            "-j",
            "--timezone",
            "America/New_York",
            "1978-05-16",
            "11:00",
            "--gender",
            "male",
            "--no-solar-time",
        ]) {
            CliAction::Calculate {
                date,
                time,
                json,
                timezone,
                gender,
                no_solar_time,
                ..
            } => {
                assert_eq!(date, "1978-05-16");
                assert_eq!(time.as_deref(), Some("11:00"));
                assert!(json);
                assert_eq!(timezone.as_deref(), Some("America/New_York"));
                assert_eq!(gender.as_deref(), Some("male"));
                assert!(no_solar_time);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn subcommands_win_over_flags() {
        assert_eq!(parse(&["hours"]), CliAction::HoursCommand);
        assert_eq!(parse(&["terms"]), CliAction::TermsCommand);
        assert_eq!(parse(&["help"]), CliAction::ShowHelp);
    }

    #[test]
    fn help_and_version_take_precedence() {
        assert_eq!(parse(&["1990-03-15", "--help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["-V"]), CliAction::ShowVersion);
    }

    #[test]
    fn unknown_flags_and_extra_positionals_show_help() {
        assert_eq!(parse(&["--bogus", "1990-03-15"]), CliAction::ShowHelpDueToError);
        assert_eq!(
            parse(&["1990-03-15", "11:00", "extra"]),
            CliAction::ShowHelpDueToError
        );
        assert_eq!(parse(&["--timezone"]), CliAction::ShowHelpDueToError);
    }
}
