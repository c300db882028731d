use clap::Parser;
use exprcc::cli::Args;
use exprcc::{compile, Config, Outcome};
use tracing::Level;

fn args(flags: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("exprcc").chain(flags.iter().copied())).unwrap()
}

fn failed() -> Outcome {
    let (_, outcome) = compile("x = 1 / 0\n", &Config::default()).unwrap();
    assert!(!outcome.is_success());
    outcome
}

#[test]
fn defaults_match_config() {
    let args = args(&[]);
    let config = args.config();
    let default = Config::default();
    assert_eq!(config.word_size, default.word_size);
    assert_eq!(config.table_capacity, default.table_capacity);
    assert!(!config.declare_on_read);
    assert_eq!(args.log_level(), Level::WARN);
}

#[test]
fn word_size_is_bounded() {
    for bad in ["0", "4096", "-4", "18446744073709551616"] {
        let parsed = Args::try_parse_from(["exprcc", "--word-size", bad]);
        assert!(parsed.is_err(), "--word-size {bad} was accepted");
    }

    assert_eq!(args(&["--word-size", "8"]).config().word_size, 8);
    assert_eq!(args(&["--word-size", "1024"]).config().word_size, 1024);
}

#[test]
fn exit_status_follows_outcome() {
    assert_eq!(args(&[]).exit_status(&Outcome::Success), 0);
    assert_eq!(args(&[]).exit_status(&failed()), 1);

    let zero = args(&["--zero-exit"]);
    assert_eq!(zero.exit_status(&failed()), 0);
    assert_eq!(zero.exit_status(&Outcome::Success), 0);
}

#[test]
fn verbosity_levels() {
    assert_eq!(args(&["-v"]).log_level(), Level::INFO);
    assert_eq!(args(&["-vv"]).log_level(), Level::DEBUG);
    assert_eq!(args(&["-vvvv"]).log_level(), Level::TRACE);
    assert_eq!(args(&["--dump-tree"]).log_level(), Level::INFO);
    assert_eq!(args(&["--dump-tree", "-vv"]).log_level(), Level::DEBUG);
}
