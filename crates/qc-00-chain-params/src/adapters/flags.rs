//! Flag source adapters
//!
//! Command-line flags follow the classic node syntax: `-name` sets a flag,
//! `-name=0` clears it, `-noname` negates it. A double leading dash is
//! accepted too. The last occurrence wins.

use std::env;

use crate::ports::FlagSource;

/// Prefix of the environment variables read by [`EnvFlagSource`].
pub const ENV_FLAG_PREFIX: &str = "QC_";

/// Interpret a flag value. An empty value means "set".
pub fn interpret_bool(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return true;
    }
    match value.parse::<i64>() {
        Ok(n) => n != 0,
        Err(_) => matches!(
            value.to_ascii_lowercase().as_str(),
            "true" | "yes" | "on"
        ),
    }
}

/// Flags parsed from process arguments.
#[derive(Debug, Clone, Default)]
pub struct ArgsFlagSource {
    args: Vec<String>,
}

impl ArgsFlagSource {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Arguments of the running process, without the program name.
    pub fn from_env() -> Self {
        Self::new(env::args().skip(1))
    }

    fn lookup(&self, name: &str) -> Option<bool> {
        self.args.iter().rev().find_map(|arg| {
            let flag = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
            let (key, value) = match flag.split_once('=') {
                Some((key, value)) => (key, interpret_bool(value)),
                None => (flag, true),
            };
            if key == name {
                Some(value)
            } else if key.strip_prefix("no") == Some(name) {
                Some(!value)
            } else {
                None
            }
        })
    }
}

impl FlagSource for ArgsFlagSource {
    fn read_bool_flag(&self, name: &str, default: bool) -> bool {
        self.lookup(name).unwrap_or(default)
    }
}

/// Flags read from `QC_<NAME>` environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvFlagSource;

impl EnvFlagSource {
    pub fn variable_name(name: &str) -> String {
        format!("{ENV_FLAG_PREFIX}{}", name.to_ascii_uppercase().replace('-', "_"))
    }
}

impl FlagSource for EnvFlagSource {
    fn read_bool_flag(&self, name: &str, default: bool) -> bool {
        env::var(Self::variable_name(name))
            .map(|value| interpret_bool(&value))
            .unwrap_or(default)
    }
}
