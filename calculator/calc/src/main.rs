use std::io::{self, Read};

use calc::{CliError, OutputMode, Session};
use calc_expr::{BracketAccounting, BuilderConfig};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "calc",
    version,
    about = "Assemble calculator keystrokes into a well-formed infix expression",
    long_about = "calc feeds calculator keystrokes (numbers, operators, brackets) to the\n\
        infix expression builder. Keystrokes that do not fit at the end of the\n\
        expression are ignored, and the finalized form closes open brackets and\n\
        drops a dangling operator.\n\n\
        EXAMPLES:\n\
        \n  calc build '(' 1 + 2               Print live and finalized expression\n\
        \n  echo '1 + ( 2 *' | calc json       Snapshot of stdin keystrokes as JSON\n\
        \n  calc repl                          Type keystrokes interactively"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Bracket counter policy (tracked, legacy)
    #[arg(
        long,
        value_name = "POLICY",
        env = "CALC_ACCOUNTING",
        default_value_t = BracketAccounting::Tracked,
        global = true
    )]
    accounting: BracketAccounting,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Feed keystrokes and print the live and finalized expression
    Build(BuildArgs),

    /// Feed keystrokes and print a JSON snapshot
    #[command(about = "Feed keystrokes and print a JSON snapshot of the builder")]
    Json(BuildArgs),

    /// Start an interactive session
    #[command(
        about = "Start an interactive keystroke session",
        long_about = "Start an interactive session. Each line is a run of keystrokes.\n\n\
            Commands:\n\
            \n  :help          Show available commands\n\
            \n  :undo          Remove the last token\n\
            \n  :clear         Start over\n\
            \n  :set <expr>    Replace the expression\n\
            \n  :show          Print the expression\n\
            \n  :quit          Exit (also :q, :exit)"
    )]
    Repl,
}

#[derive(Debug, Args, Clone)]
struct BuildArgs {
    /// Keystrokes to feed (reads whitespace separated keystrokes from stdin if none)
    #[arg(value_name = "TOKENS", allow_hyphen_values = true, trailing_var_arg = true)]
    tokens: Vec<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins over the -v count
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn read_keystrokes(args: &BuildArgs) -> Result<String, CliError> {
    if !args.tokens.is_empty() {
        return Ok(args.tokens.join(" "));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn run_build(args: &BuildArgs, config: BuilderConfig, mode: OutputMode) -> i32 {
    let input = match read_keystrokes(args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    let mut session = Session::new(config, mode);
    for note in session.feed(&input) {
        eprintln!("note: {note}");
    }
    match session.render() {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_repl(config: BuilderConfig) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: {}", CliError::Repl(e.to_string()));
            return 2;
        }
    };

    let mut session = Session::new(config, OutputMode::Text);
    loop {
        match rl.readline("calc> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => {
                for l in session.interrupt() {
                    println!("{l}");
                }
                continue;
            }
            Err(ReadlineError::Eof) => {
                return 0;
            }
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = BuilderConfig {
        accounting: cli.accounting,
    };
    log::debug!("bracket accounting: {}", config.accounting);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Build(args) => run_build(&args, config, OutputMode::Text),
        Command::Json(args) => run_build(&args, config, OutputMode::Json),
        Command::Repl => run_repl(config),
    }
}

fn main() {
    std::process::exit(run_cli());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_verbose_flag() {
        let cli = Cli::try_parse_from(["calc", "-vvv"]).unwrap();
        assert_eq!(cli.verbose, 3, "verbose count should be 3 for -vvv");
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_build_tokens_with_hyphens() {
        let cli = Cli::try_parse_from(["calc", "build", "(", "-5", "-", "2"]).unwrap();
        match cli.command {
            Some(Command::Build(args)) => {
                assert_eq!(args.tokens, vec!["(", "-5", "-", "2"]);
            }
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn cli_parses_accounting() {
        let cli = Cli::try_parse_from(["calc", "--accounting", "legacy", "json"]).unwrap();
        assert_eq!(cli.accounting, BracketAccounting::Legacy);
        assert!(matches!(cli.command, Some(Command::Json(_))));
    }

    #[test]
    fn cli_rejects_unknown_accounting() {
        let err = Cli::try_parse_from(["calc", "--accounting", "strict", "repl"]).unwrap_err();
        assert!(err.to_string().contains("strict"));
    }

    #[test]
    fn help_example_quotes_brackets_for_the_shell() {
        use clap::CommandFactory;
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("calc build '(' 1 + 2"));
        assert!(!help.contains("calc build ( "));
    }

    #[test]
    fn read_keystrokes_joins_arguments() {
        let args = BuildArgs {
            tokens: vec!["1".into(), "+".into(), "2".into()],
        };
        assert_eq!(read_keystrokes(&args).unwrap(), "1 + 2");
    }
}
