//! gopher - Little Gophers for the Command Line
//!
//! Runs a command while an animated gopher keeps you company, or shows the demo tour.

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use gopher::app::{self, CommandSpec, DEFAULT_DEMO_STEP};
use gopher::{Activity, Appearance, Color, Gopher};
use std::time::Duration;

fn cli() -> Command {
    Command::new("gopher")
        .version(gopher::VERSION)
        .about("A little animated gopher for the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run a command while the gopher animates")
                .arg(
                    Arg::new("activity")
                        .long("activity")
                        .short('a')
                        .help("Waiting, Wondering, Boring or Loving")
                        .default_value("waiting")
                        .value_parser(str::parse::<Activity>),
                )
                .arg(
                    Arg::new("color")
                        .long("color")
                        .short('c')
                        .help("Black, Red, Green, Yellow, Blue, Magenta, Cyan or White")
                        .default_value("white")
                        .value_parser(str::parse::<Color>),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .help("Text shown before the gopher")
                        .default_value(""),
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .help("Text shown after the gopher")
                        .default_value(""),
                )
                .arg(
                    Arg::new("delay-ms")
                        .long("delay-ms")
                        .short('d')
                        .help("Milliseconds between frames")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("quiet")
                        .long("quiet")
                        .short('q')
                        .help("Discard the command's output")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("command")
                        .help("Command to run, followed by its arguments")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            Command::new("demo")
                .about("Show every activity and a few colors")
                .arg(
                    Arg::new("step-ms")
                        .long("step-ms")
                        .help("Milliseconds spent on each stage")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

fn appearance_from(matches: &ArgMatches) -> Appearance {
    Appearance {
        delay: Duration::from_millis(
            matches.get_one::<u64>("delay-ms").copied().unwrap_or(1000),
        ),
        prefix: matches
            .get_one::<String>("prefix")
            .cloned()
            .unwrap_or_default(),
        suffix: matches
            .get_one::<String>("suffix")
            .cloned()
            .unwrap_or_default(),
        activity: matches
            .get_one::<Activity>("activity")
            .copied()
            .unwrap_or_default(),
        color: matches.get_one::<Color>("color").copied().unwrap_or_default(),
    }
}

fn command_from(matches: &ArgMatches) -> CommandSpec {
    let mut words = matches
        .get_many::<String>("command")
        .expect("command argument is required")
        .cloned();
    let program = words.next().expect("command has at least one word");
    CommandSpec {
        program,
        args: words.collect(),
        quiet: matches.get_flag("quiet"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr, controlled by RUST_LOG
    env_logger::init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("run", sub)) => {
            let spinner = Gopher::new().with_appearance(appearance_from(sub));
            let spec = command_from(sub);
            let code = app::run_command(&spinner, &spec).await?;
            // process::exit skips destructors; join the render thread first
            drop(spinner);
            std::process::exit(code);
        }
        Some(("demo", sub)) => {
            let step = sub
                .get_one::<u64>("step-ms")
                .map(|ms| Duration::from_millis(*ms))
                .unwrap_or(DEFAULT_DEMO_STEP);
            let spinner = Gopher::new();
            app::run_demo(&spinner, step).await;
        }
        _ => unreachable!("a subcommand is required"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!gopher::VERSION.is_empty());
    }

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_run_arguments() {
        let matches = cli()
            .try_get_matches_from([
                "gopher", "run", "-a", "boring", "-c", "green", "--prefix", "build", "-d",
                "250", "--", "make", "-j4",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        let appearance = appearance_from(sub);
        assert_eq!(appearance.activity, Activity::Boring);
        assert_eq!(appearance.color, Color::Green);
        assert_eq!(appearance.prefix, "build");
        assert_eq!(appearance.delay, Duration::from_millis(250));

        let spec = command_from(sub);
        assert_eq!(spec.program, "make");
        assert_eq!(spec.args, vec!["-j4".to_string()]);
        assert!(!spec.quiet);
    }

    #[test]
    fn test_run_defaults() {
        let matches = cli()
            .try_get_matches_from(["gopher", "run", "sleep", "1"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(appearance_from(sub), Appearance::default());
    }

    #[test]
    fn test_unknown_color_rejected() {
        let result = cli().try_get_matches_from(["gopher", "run", "-c", "pink", "true"]);
        assert!(result.is_err());
    }
}
