use std::path::PathBuf;

use clap::Parser;
use miette::IntoDiagnostic;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, info, Level};

use crate::cli::Options;
use crate::shapes::{Circle, Rectangle, RightTriangle, Shape, ShapeName};

mod cli;
mod shapes;

fn main() -> miette::Result<()> {
    // Install the panic handler.
    bupropion::install(bupropion::BupropionHandlerOpts::new).into_diagnostic()?;

    // Parse the command line arguments.
    let options = Options::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if options.debug { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let input = match options.shape {
        Some(shape) => shape,
        None => match prompt()? {
            Some(line) => line,
            None => return Ok(()),
        },
    };

    let name: ShapeName = input.parse()?;
    info!(?name, "building shape");

    // Only the chosen slot is initialized; the shape borrows it.
    let circle;
    let triangle;
    let rectangle;

    let shape = match name {
        ShapeName::Circle => {
            circle = Circle { radius: 1. };
            Shape::from(&circle)
        }
        ShapeName::RightTriangle => {
            triangle = RightTriangle { base: 5., height: 12. };
            Shape::from(&triangle)
        }
        ShapeName::Rectangle => {
            rectangle = Rectangle { width: 5., height: 4. };
            Shape::from(&rectangle)
        }
    };

    debug!(tag = shape.tag(), address = ?shape.address(), "shape is tagged");

    println!("Created a {}", shape.describe());
    println!("area() returned {}", shape.area());

    let mut copy = shape;
    println!("A copy of the shape compares equal: {}", shape == copy);

    let other = RightTriangle { base: 3., height: 4. };
    copy = Shape::from(&other);
    println!(
        "After pointing the copy at a {}, it compares equal: {}",
        copy.describe(),
        shape == copy
    );

    Ok(())
}

fn get_history_path() -> Option<PathBuf> {
    let home_env = std::env::var("HOME").ok()?;
    let path = format!("{home_env}/.thintag.history");
    Some(PathBuf::from(path))
}

/// Reads one shape name from the terminal, or `None` if the user backs out.
fn prompt() -> miette::Result<Option<String>> {
    let mut rl = DefaultEditor::new().into_diagnostic()?;
    let path = get_history_path();

    if let Some(path) = path.as_ref() {
        if rl.load_history(path).is_err() {
            debug!("no previous history");
        }
    }

    let line = match rl.readline("Enter a shape (Circle, RightTriangle, or Rectangle): ") {
        Ok(line) => {
            if let Err(err) = rl.add_history_entry(line.as_str()) {
                debug!(%err, "could not record history entry");
            }
            Some(line)
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
        Err(err) => return Err(err).into_diagnostic(),
    };

    if let Some(path) = path {
        if let Err(err) = rl.append_history(&path) {
            debug!(%err, "could not save history");
        }
    }

    Ok(line)
}
