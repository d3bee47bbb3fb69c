//! Command line parsing.
//!
//! `multiserv <n>` is the whole interface: exactly one token, read as an
//! integer. There are no flags, so `--help` is just another invalid number.

use std::ffi::OsString;
use std::num::ParseIntError;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "multiserv", disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Number of HTTP servers to start (0 or less starts nothing)
    #[arg(value_name = "N")]
    count: String,
}

impl Cli {
    /// Parse a full argv, program name included.
    ///
    /// Anything but exactly one argument is a usage error, `--` included.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let [program, count] = args.as_slice() else {
            return Err(UsageError::MissingCount);
        };

        // Behind `--` clap takes the token as the value even if it looks like a flag.
        Self::try_parse_from([program.clone(), OsString::from("--"), count.clone()])
            .map_err(|e| UsageError::Arguments(e.to_string().trim_end().to_string()))
    }

    /// The requested number of servers.
    pub fn server_count(&self) -> Result<ServerCount, UsageError> {
        self.count.parse()
    }
}

/// Reasons the process refuses to start any server.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("please supply the number of HTTP servers to start")]
    MissingCount,

    #[error("invalid number {input:?}: {source}")]
    InvalidCount {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{0}")]
    Arguments(String),
}

/// Number of servers requested on the command line.
///
/// Kept signed: any value `<= 0` is a valid request to do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerCount(i64);

impl ServerCount {
    pub fn new(count: i64) -> Self {
        Self(count)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// True when no server should be started.
    pub fn is_noop(self) -> bool {
        self.0 <= 0
    }

    /// Number of listeners to create.
    pub fn listeners(self) -> u64 {
        u64::try_from(self.0).unwrap_or(0)
    }
}

impl FromStr for ServerCount {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(ServerCount)
            .map_err(|source| UsageError::InvalidCount {
                input: s.to_string(),
                source,
            })
    }
}
