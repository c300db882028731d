use clap::builder::RangedU64ValueParser;
use clap::Parser;
use clap_stdin::FileOrStdin;
use tracing::Level;

use crate::{config::Config, session::Outcome};

/// Compile integer expression statements, one per line, into register
/// machine instructions.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Source file, `-` for stdin
    #[arg(default_value = "-")]
    pub input: FileOrStdin,

    /// Bytes per variable slot
    #[arg(long, default_value_t = 4, value_parser = RangedU64ValueParser::<usize>::new().range(1..=1024))]
    pub word_size: usize,

    /// Maximum number of variables, builtins included
    #[arg(long, default_value_t = 64)]
    pub table_size: usize,

    /// Declare unknown variables at 0 when they are read
    #[arg(long)]
    pub declare_on_read: bool,

    /// Exit with status 0 even when the program ends in `EXIT 1`
    #[arg(long)]
    pub zero_exit: bool,

    /// Log each statement tree in prefix form
    #[arg(long)]
    pub dump_tree: bool,

    /// More log output, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            word_size: self.word_size,
            table_capacity: self.table_size,
            declare_on_read: self.declare_on_read,
        }
    }

    pub fn log_level(&self) -> Level {
        let level = match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        // tree dumps are logged at info
        if self.dump_tree {
            level.max(Level::INFO)
        } else {
            level
        }
    }

    /// Process status for a finished session: the `EXIT` operand, or 0 with
    /// `--zero-exit`.
    pub fn exit_status(&self, outcome: &Outcome) -> u8 {
        if self.zero_exit {
            0
        } else {
            outcome.code() as u8
        }
    }
}
