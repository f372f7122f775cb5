use std::process;

fn main() {
    // A subscriber can only be installed once; a second attempt is harmless.
    let _ = domino_cli::logging::init_logging();
    let mut out = std::io::stdout();
    let mut err = std::io::stderr();
    let code = domino_cli::run(std::env::args(), &mut out, &mut err);
    process::exit(code);
}
