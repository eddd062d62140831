//! mcpscope command-line entry point.

use std::io::IsTerminal as _;

use mcpscope::{cli, commands, logging, render::Style};

fn main() {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = match cli::parse_lenient(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return;
        }
    };

    let no_color = std::env::var_os("NO_COLOR").is_some();
    let color = std::io::stdout().is_terminal() && !no_color;
    logging::init_subscriber(args.verbose, std::io::stderr().is_terminal() && !no_color);
    let log = logging::Logger::new();

    if let Err(e) = commands::dispatch(&args, Style { color }, &log) {
        log.error(&format!("{e:#}"));
    }
}
