//! Command line arguments

use clap::Parser;
use pagebake_build::{BuildConfig, ErrorPolicy};
use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash (`-data dir`)
const SINGLE_DASH_FLAGS: &[&str] = &["data", "templ", "out", "keep-going"];

/// Long flags whose value may follow as a separate argument
const VALUE_FLAGS: &[&str] = &["data", "templ", "out"];

#[derive(Parser, Debug)]
#[command(name = "pagebake", version)]
#[command(about = "Render every JSON data file of a directory into an HTML page")]
pub struct Args {
    /// Directory containing the .json data files, also where pages are written
    #[arg(long = "data", value_name = "DIR", default_value = "./")]
    pub data: String,

    /// Directory containing the matching .html templates
    #[arg(long = "templ", value_name = "DIR", default_value = "./")]
    pub templ: String,

    /// Write pages here instead of the data directory
    #[arg(long = "out", value_name = "DIR")]
    pub out: Option<String>,

    /// Keep rendering after a page fails and exit non-zero at the end
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip data files whose name contains any of these substrings
    #[arg(value_name = "EXCLUDE")]
    pub exclude: Vec<String>,
}

impl Args {
    /// Parse the process arguments, accepting single-dash long flags
    pub fn from_env() -> Self {
        Self::parse_from(expand_single_dash_flags(std::env::args_os()))
    }

    pub fn to_config(&self) -> BuildConfig {
        let mut config = BuildConfig::new(&self.data, &self.templ)
            .with_exclude(self.exclude.clone())
            .with_error_policy(if self.keep_going {
                ErrorPolicy::KeepGoing
            } else {
                ErrorPolicy::Abort
            });
        if let Some(out) = &self.out {
            config = config.with_output_dir(out);
        }
        config
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Rewrite `-data`, `-data=x` and friends to their `--` form
///
/// The first item is the program name and is kept as is. As with Go-style
/// flag parsing, everything from the first positional argument on is
/// positional: a `--` is inserted before it and nothing after it is touched.
pub fn expand_single_dash_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut expanded: Vec<OsString> = args.next().into_iter().collect();

    let mut positional_only = false;
    let mut expects_value = false;
    for arg in args {
        if positional_only {
            expanded.push(arg);
            continue;
        }
        if expects_value {
            expects_value = false;
            expanded.push(arg);
            continue;
        }
        if arg == "--" {
            positional_only = true;
            expanded.push(arg);
            continue;
        }
        if !is_flag(&arg) {
            positional_only = true;
            expanded.push(OsString::from("--"));
            expanded.push(arg);
            continue;
        }

        let arg = expand_one(arg);
        expects_value = takes_separate_value(&arg);
        expanded.push(arg);
    }

    expanded
}

fn is_flag(arg: &OsString) -> bool {
    arg.to_str()
        .map_or(false, |text| text.len() > 1 && text.starts_with('-'))
}

/// `--data` given without `=`, so the next argument is its value
fn takes_separate_value(arg: &OsString) -> bool {
    arg.to_str()
        .and_then(|text| text.strip_prefix("--"))
        .map_or(false, |name| VALUE_FLAGS.contains(&name))
}

fn expand_one(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(flag) = text.strip_prefix('-') else {
        return arg;
    };
    if flag.starts_with('-') {
        return arg;
    }

    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    if SINGLE_DASH_FLAGS.contains(&name) {
        OsString::from(format!("-{}", text))
    } else {
        arg
    }
}
