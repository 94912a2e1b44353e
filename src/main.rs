// SPDX-License-Identifier: MPL-2.0
use crop_lens::cli::{self, Args};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse_from(std::env::args_os().skip(1).collect()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", cli::HELP);
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("crop_lens: {}\n\n{}", err, cli::HELP);
            return ExitCode::from(2);
        }
    };

    match cli::run(&args) {
        Ok(Some(path)) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("crop_lens: {}", err);
            ExitCode::FAILURE
        }
    }
}
