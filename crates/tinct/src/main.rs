use std::process;
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand};
use tinct_core::{infof, CallSite, Config, Level, Logger, PanicMode, Result as LogResult};
use tinct_utils::{config_from_env, init_diagnostics_from_env, parse_threshold};
use tracing::debug;

/// Leveled, colorized console logging from the command line.
#[derive(Parser, Debug)]
#[command(name = "tinct")]
#[command(version)]
#[command(about = "Leveled, colorized console logging from the command line", long_about = None)]
struct Cli
{
    #[command(flatten)]
    options: Options,
    #[command(subcommand)]
    command: Commands,
}

/// Overrides applied on top of the `LOG_*` environment variables
#[derive(Args, Debug)]
struct Options
{
    /// Threshold as a level name or integer rank (overrides LOG_LEVEL)
    #[arg(long = "level", value_name = "LEVEL", global = true, allow_hyphen_values = true, value_parser = parse_threshold)]
    threshold: Option<i32>,
    /// Print time of day only (overrides LOG_DATE)
    #[arg(long, global = true, default_value_t = false)]
    no_date: bool,
    /// Print plain level labels (overrides LOG_COLOR)
    #[arg(long, global = true, default_value_t = false)]
    no_color: bool,
    /// Leave out [file:line] (overrides LOG_FUNC)
    #[arg(long, global = true, default_value_t = false)]
    no_caller: bool,
    /// Use local time instead of UTC (overrides LOG_UTC)
    #[arg(long, global = true, default_value_t = false)]
    local_time: bool,
    /// What PANIC does after printing: unwind or exit (overrides LOG_PANIC)
    #[arg(long, global = true)]
    panic_mode: Option<PanicMode>,
}

impl Options
{
    fn apply(&self, mut config: Config) -> Config
    {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(mode) = self.panic_mode {
            config.panic_mode = mode;
        }
        config.use_date &= !self.no_date;
        config.use_color &= !self.no_color;
        config.use_caller_location &= !self.no_caller;
        config.use_utc &= !self.local_time;
        config
    }
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Print one line at the given level
    Emit
    {
        /// Level of the line (fatal and panic terminate afterwards)
        #[arg(value_name = "SEVERITY")]
        severity: Level,
        /// Message words, joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Print one line per level, most verbose first
    Demo
    {
        /// Finish with a FATAL line (exits with status 1)
        #[arg(long, default_value_t = false)]
        terminal: bool,
    },
    /// Print many lines and report the per-line latency on stderr
    Bench
    {
        /// Number of lines to print
        #[arg(short, long, default_value_t = 10_000)]
        count: u32,
    },
}

fn main()
{
    // Diagnostics go to stderr; TINCT_DIAGNOSTICS or RUST_LOG raise the level
    if let Err(e) = init_diagnostics_from_env() {
        eprintln!("Failed to initialize diagnostics: {e}");
        process::exit(1);
    }

    let cli = Cli::parse();

    let config = match config_from_env() {
        Ok(config) => cli.options.apply(config),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    debug!(?config, "logger configured");

    let logger = Logger::from_config(config);
    if let Err(e) = run_command(&logger, cli.command) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(logger: &Logger, command: Commands) -> LogResult<()>
{
    match command {
        Commands::Emit { severity, message } => {
            logger.log_at(severity, &message.join(" "), CallSite::caller())?;
            Ok(())
        }
        Commands::Demo { terminal } => demo(logger, terminal),
        Commands::Bench { count } => bench(logger, count),
    }
}

fn demo(logger: &Logger, terminal: bool) -> LogResult<()>
{
    logger.debug("Debug message")?;
    logger.trace("Trace message")?;
    logger.info("Info message")?;
    logger.warn("Warn message")?;
    logger.error("Error message")?;
    infof!(logger, "threshold is {}, {} level(s) hidden", logger.config().threshold, hidden_levels(logger))?;

    if terminal {
        logger.fatal("Fatal message");
    }
    logger.flush()
}

fn hidden_levels(logger: &Logger) -> usize
{
    Level::ALL.iter().filter(|level| !logger.enabled(**level)).count()
}

fn bench(logger: &Logger, count: u32) -> LogResult<()>
{
    let mut total = Duration::ZERO;
    let mut slowest = Duration::ZERO;

    for n in 0..count {
        let start = Instant::now();
        infof!(logger, "bench message {n}")?;
        let elapsed = start.elapsed();
        total += elapsed;
        slowest = slowest.max(elapsed);
    }
    logger.flush()?;

    if count > 0 {
        eprintln!("{count} lines: mean {:?}, slowest {:?}", total / count, slowest);
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use std::sync::Arc;

    use tinct_core::{FixedClock, MemorySink};

    use super::*;

    #[test]
    fn test_cli_parses_emit()
    {
        let cli = Cli::try_parse_from(["tinct", "--level", "debug", "emit", "warn", "disk", "almost", "full"]).unwrap();
        assert_eq!(cli.options.threshold, Some(Level::Debug.rank()));
        match cli.command {
            Commands::Emit { severity, message } => {
                assert_eq!(severity, Level::Warn);
                assert_eq!(message.join(" "), "disk almost full");
            }
            other => panic!("Expected Emit, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_level()
    {
        assert!(Cli::try_parse_from(["tinct", "emit", "loud", "x"]).is_err());
    }

    #[test]
    fn test_options_override_config()
    {
        let cli = Cli::try_parse_from(["tinct", "demo", "--no-color", "--local-time", "--panic-mode", "exit", "--level", "error"]).unwrap();
        let config = cli.options.apply(Config::default());
        assert_eq!(config.threshold, 2);
        assert!(!config.use_color);
        assert!(!config.use_utc);
        assert!(config.use_date);
        assert!(config.use_caller_location);
        assert_eq!(config.panic_mode, PanicMode::Exit);
    }

    #[test]
    fn test_flags_never_turn_switches_back_on()
    {
        let cli = Cli::try_parse_from(["tinct", "demo"]).unwrap();
        let mut env_config = Config::default();
        env_config.use_date = false;
        assert!(!cli.options.apply(env_config).use_date);
    }

    fn run(args: &[&str]) -> Vec<String>
    {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::from_config(cli.options.apply(Config::default()))
            .with_clock(FixedClock::from_millis(0).unwrap())
            .with_sink(Arc::clone(&sink));
        run_command(&logger, cli.command).unwrap();
        sink.lines()
    }

    #[test]
    fn test_level_accepts_integer_threshold()
    {
        let cli = Cli::try_parse_from(["tinct", "--level", "-1", "demo"]).unwrap();
        assert_eq!(cli.options.threshold, Some(-1));
        let cli = Cli::try_parse_from(["tinct", "demo", "--level", "6"]).unwrap();
        assert_eq!(cli.options.threshold, Some(6));
    }

    #[test]
    fn test_emit_above_threshold_writes_nothing()
    {
        let lines = run(&["tinct", "--no-date", "--no-color", "--no-caller", "--level", "error", "emit", "info", "x"]);
        assert!(lines.is_empty(), "unexpected output: {lines:?}");
    }

    #[test]
    fn test_emit_within_threshold_writes_line()
    {
        let lines = run(&["tinct", "--no-date", "--no-color", "--no-caller", "--level", "warn", "emit", "error", "disk", "full"]);
        assert_eq!(lines, vec!["00:00:00.000 ERROR disk full"]);
    }

    #[test]
    fn test_emit_respects_integer_threshold()
    {
        let lines = run(&["tinct", "--no-date", "--no-color", "--no-caller", "--level", "2", "emit", "warn", "quiet"]);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_demo_writes_enabled_levels_only()
    {
        let lines = run(&["tinct", "demo", "--no-date", "--no-color", "--no-caller", "--level", "warn"]);
        assert_eq!(
            lines,
            vec![
                "00:00:00.000 WARN Warn message",
                "00:00:00.000 ERROR Error message",
            ]
        );
    }

    #[test]
    fn test_hidden_levels()
    {
        let logger = Logger::new(4, false, false, true, false);
        assert_eq!(hidden_levels(&logger), 2);
    }
}
