use clap::Parser;
use git_sweep::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute_command(cli) {
        eprintln!("git-sweep: {}", e);
        std::process::exit(1);
    }
}
