use clap::Parser;

mod cli;
mod templates;

use cli::args::Cli;
use cli::commands::dispatch;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = Cli::parse();
    let code = match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            cli::commands::exit_codes::CONFIG_ERROR
        }
    };
    std::process::exit(code);
}
