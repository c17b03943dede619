use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::style::Stylize;

use menuctl::app::{App, Outcome};
use menuctl::exec::{self, Executor, RunReport, ShellExecutor};
use menuctl::input::{CrosstermInput, InputBackend};
use menuctl::menu;
use menuctl::ui::Screen;

#[derive(Parser, Debug)]
#[command(name = "menuctl", version, about = "Keyboard-driven terminal menu launcher")]
struct Cli {
    /// Menu file to load.
    #[arg(default_value = "menu.txt")]
    menu: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let document = menu::load(&cli.menu)?;
    let mut app = App::new(document)?;
    run(&mut app, &mut CrosstermInput, &ShellExecutor)
}

fn run(app: &mut App, input: &mut impl InputBackend, executor: &impl Executor) -> Result<()> {
    let mut screen = Screen::new()?;
    loop {
        screen.draw(app.document(), app.cursor())?;
        match app.handle(input.read_event()?) {
            Outcome::Continue => {}
            Outcome::Quit => return Ok(()),
            Outcome::Activate { label, command } => {
                screen.suspend()?;
                report_selection(&label, command.as_deref(), executor);
                screen.resume()?;
                // Any key returns to the menu.
                input.read_event()?;
            }
        }
    }
}

/// Announces the choice, runs its command if it has one, and shows the
/// result. Executor failures are reported here and never end the session.
fn report_selection(label: &str, command: Option<&str>, executor: &impl Executor) {
    println!("{}\n", format!("You chose: {label}").green());
    if let Some(cmd) = command {
        println!("{}\n", format!("Running: {cmd}").yellow());
    }

    match exec::run_selection(command, executor) {
        RunReport::NothingConfigured => {
            println!("{}", "(No command configured for this item.)".red())
        }
        RunReport::Finished { code } => {
            let line = format!("\nExit code: {code}");
            if code == 0 {
                println!("{}", line.green());
            } else {
                println!("{}", line.red());
            }
        }
        RunReport::Failed { error } => println!("{}", format!("\nCommand failed: {error}").red()),
    }

    println!("\n{}", "Press any key to return to the menu...".yellow());
}
