use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use visioncalc::calculator::copy_to_clipboard;
use visioncalc::keys::render_grid;
use visioncalc::{Config, LineOutcome, Session, logging};

const DISPLAY_WIDTH: usize = 23;

#[derive(Parser, Debug)]
#[command(name = "visioncalc", version, about = "Keypad calculator with exact decimal arithmetic")]
struct Cli {
    /// Keys to press, e.g. "5+3+2=". Starts an interactive session when omitted.
    #[arg(short, long)]
    keys: Option<String>,

    /// Copy the final display to the clipboard
    #[arg(long)]
    copy: bool,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init(&config.logging, cli.verbose);

    let mut session = Session::new(&config);

    match cli.keys.as_deref() {
        Some(script) => {
            let display = session.run_script(script)?;
            println!("{display}");
        }
        None => run_interactive(&mut session)?,
    }

    if cli.copy {
        copy_to_clipboard(session.calculator().display())?;
    }

    Ok(())
}

fn run_interactive(session: &mut Session) -> anyhow::Result<()> {
    for row in render_grid(5) {
        println!("{row}");
    }
    println!("{}", session.calculator().readout().render_line(DISPLAY_WIDTH));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle_line(&line) {
            Ok(LineOutcome::Keys(readout)) => println!("{}", readout.render_line(DISPLAY_WIDTH)),
            Ok(LineOutcome::Empty) => {}
            Ok(LineOutcome::Help) => print_help(),
            Ok(LineOutcome::Quit) => break,
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Keys: 0-9  .  + - * /  (or − × ÷)  =  c (clear)  n or ± (sign)  %");
    println!("Several keys per line are fine, e.g. 12.5*4=");
    println!("q to quit");
}
