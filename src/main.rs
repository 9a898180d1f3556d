use std::io::{self, ErrorKind, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use treels::cli::Cli;
use treels::fs::RealFileSystem;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::init();

    let options = cli.listing_options();
    debug!("{options:?}");

    let fs = RealFileSystem;
    if let Err(err) = treels::check_root(&fs, &options.root_path).await {
        eprintln!("treels: {err}");
        return ExitCode::from(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = treels::list(&fs, &mut out, &options).await;
    let result = result.and_then(|()| out.flush().map_err(Into::into));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("treels: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|err| err.kind() == ErrorKind::BrokenPipe)
}
