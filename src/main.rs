//! tappable - show a text definition in the terminal and dispatch clicks
//!
//! Every action named in the definition is bound to a handler that reports
//! its name on the status line.

use std::cell::RefCell;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

use tappable_text::terminal::{self, HostEvent, Terminal};
use tappable_text::{layout, Action, Result, TappableError, TappableText, TextDefinition};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--help" | "-h") => {
            print_usage();
            Ok(())
        }
        Some("--version" | "-V") => {
            println!("tappable {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some("--print" | "-p") => {
            let path = args
                .get(2)
                .ok_or_else(|| TappableError::Message("--print needs a definition file".into()))?;
            print_definition(PathBuf::from(path))
        }
        Some(path) if !path.starts_with('-') => interactive(PathBuf::from(path)),
        Some(flag) => Err(TappableError::Message(format!("Unknown option: {}", flag))),
        None => {
            print_usage();
            Err(TappableError::Message("no definition file given".into()))
        }
    }
}

/// Load a definition and bind every action name to a recorder
fn load(path: PathBuf, last: &Rc<RefCell<Option<String>>>) -> Result<TappableText> {
    let definition = TextDefinition::load(&path)?;
    definition.build(|name: &str| {
        let last = Rc::clone(last);
        let name = name.to_string();
        Some(Action::new(move || {
            *last.borrow_mut() = Some(name.clone());
        }))
    })
}

fn print_definition(path: PathBuf) -> Result<()> {
    let last = Rc::new(RefCell::new(None));
    let mut text = load(path, &last)?;
    let mut out = io::stdout();
    terminal::print_segments(&mut out, text.render())?;
    println!();
    Ok(())
}

fn interactive(path: PathBuf) -> Result<()> {
    let last = Rc::new(RefCell::new(None));
    let mut text = load(path, &last)?;
    text.render();

    let mut term = Terminal::new()?;
    let mut grid = layout(text.segments(), term.cols());

    loop {
        let status = match last.borrow().as_deref() {
            Some(name) => format!(" action: {}  (q to quit)", name),
            None => " click a keyword  (q to quit)".to_string(),
        };
        term.draw(&grid, text.segments(), &status)?;

        match term.next_event()? {
            HostEvent::Tap { row, col } => {
                if let Some(id) = grid.hit_test(row, col) {
                    text.dispatch(id);
                }
            }
            HostEvent::Resize { cols, .. } => {
                grid = layout(text.segments(), cols);
            }
            HostEvent::Quit => break,
        }
    }

    Ok(())
}

fn print_usage() {
    println!(
        "tappable {} - tappable keyword text in the terminal",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: tappable [OPTIONS] FILE.toml");
    println!();
    println!("Options:");
    println!("  -p, --print    Print the styled text once and exit");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Interactive mode:");
    println!("  Click          Dispatch the keyword or plain text under the pointer");
    println!("  q, Esc         Quit");
}
