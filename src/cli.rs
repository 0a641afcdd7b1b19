use clap::Parser;

/// Builds a shape behind a tagged reference and calls into it.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Shape to build (Circle, RightTriangle or Rectangle). Prompts when absent.
    #[arg(short, long)]
    pub shape: Option<String>,

    /// Logs tags and addresses.
    #[arg(short, long)]
    pub debug: bool,
}
