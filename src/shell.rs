//! Console helpers shared by the bundled binaries.

use std::io::{self, BufRead, Write};

use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Input that ends a shell session.
pub const EXIT_COMMAND: &str = "exit";

/// Installs the tracing subscriber.
///
/// `RUST_LOG` wins over `fallback_filter`.
pub fn init_tracing(fallback_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| fallback_filter.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

/// Prints `text` in `color` without a newline.
pub fn print_colored(color: Color, text: &str) {
    let mut stdout = io::stdout();
    execute!(stdout, SetForegroundColor(color), Print(text), ResetColor).ok();
    stdout.flush().ok();
}

/// Prints `text` in `color` followed by a newline.
pub fn println_colored(color: Color, text: &str) {
    print_colored(color, text);
    println!();
}

/// Shows `prompt` and reads one line.
///
/// Returns `None` on end of input or on the exit command.
pub fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print_colored(Color::White, prompt);

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim_end_matches(['\r', '\n']).to_string();
    if line.trim() == EXIT_COMMAND {
        return Ok(None);
    }
    Ok(Some(line))
}
