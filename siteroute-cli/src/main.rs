//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = siteroute_cli::run() {
        eprintln!("siteroute: {err}");
        std::process::exit(1);
    }
}
