use clap::Parser;

use xmlsplit_cli::Command;

/// xmlsplit-table - Inspect the key to path-fragment table used to split ESF XML
#[derive(Parser, Debug)]
#[command(name = "xmlsplit-table")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let args = Args::parse();

    match xmlsplit_cli::run(&args.command) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
