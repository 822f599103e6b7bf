use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use stonecut::build_info;
use stonecut::core::Session;
use stonecut::input::{apply_command, map_key, Applied};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                return Ok(());
            }
            "--help" | "-h" => {
                println!("Stonecut - ability stone cutting simulator\n");
                println!("Usage: stonecut [--version | --help]\n");
                println!("Keys:");
                println!("  a / b / c  Cut the slot at the current success chance");
                println!("  1 / 2      Auto run / repeat until success, 7/7 target");
                println!("  3 / 4      Auto run / repeat until success, 16 target");
                println!("  r          Reset the stone");
                println!("  q, Esc     Quit");
                println!("\nFor headless batches see the `simulator` binary.");
                return Ok(());
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'stonecut --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut session = Session::new();
    let mut rng = rand::thread_rng();

    loop {
        terminal.draw(|frame| stonecut::ui::draw(frame, &session))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(command) = map_key(key) else {
            continue;
        };
        if apply_command(&mut session, command, &mut rng) == Applied::Quit {
            return Ok(());
        }
    }
}
