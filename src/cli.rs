use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::Path;

pub const USAGE_HINT: &str = "Please provide an input file using the -input flag";

const VALUE_FLAGS: [&str; 1] = ["input"];

#[derive(Parser, Debug)]
#[command(
    name = "decomment",
    version,
    about = "Remove whole-line # and // comments from a file in place (keeps <file>.bak)"
)]
pub struct Cli {
    #[arg(long, value_name = "PATH", help = "Input configuration file")]
    pub input: Option<OsString>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase log verbosity on stderr (-v info, -vv debug)"
    )]
    pub verbose: u8,
    /// Operands after the flags; accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// The input path, or `None` when it was omitted or given as an empty string.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(Path::new)
    }
}

/// Rewrites Go-style flags into the form clap expects.
///
/// `-input`, `-json` become `--input`, `--json`. A value-taking flag without
/// `=` swallows the next argument as `--input=<value>`, so values starting with
/// `-` survive. Flag parsing stops at the first operand or a bare `--`; those
/// and everything after pass through untouched. Short flags (`-v`, `-vv`, `-h`)
/// are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut iter = args.into_iter();
    let mut out: Vec<OsString> = iter.next().into_iter().collect();
    while let Some(arg) = iter.next() {
        if !arg.as_encoded_bytes().starts_with(b"-") || arg == "-" || arg == "--" {
            out.push(arg);
            out.extend(iter.by_ref());
            break;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        let flag = if is_single_dash_long(s) {
            format!("-{}", s)
        } else {
            s.to_string()
        };
        let takes_value = flag
            .strip_prefix("--")
            .is_some_and(|name| VALUE_FLAGS.contains(&name));
        if takes_value {
            if let Some(value) = iter.next() {
                let mut joined = OsString::from(format!("{}=", flag));
                joined.push(value);
                out.push(joined);
                continue;
            }
        }
        out.push(OsString::from(flag));
    }
    out
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split('=').next().unwrap_or_default();
    name.len() > 1 && !name.chars().all(|c| c == 'v')
}
