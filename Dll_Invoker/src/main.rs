use std::process;

use clap::error::ErrorKind;
use dll_invoker::{Error, Invocation};
use log::debug;

fn warn<T: AsRef<str> + std::fmt::Display>(warning: T) {
    eprintln!("[!] {}", warning);
}

fn fail(err: Error) -> ! {
    if err.is_silent() {
        debug!("{}", err);
    } else {
        warn(err.to_string());
    }
    process::exit(err.exit_code());
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let invocation = match Invocation::from_args(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(Error::Usage(err)) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => fail(err),
    };

    // Safety: the caller names the export; its signature is taken on trust.
    match unsafe { dll_invoker::run(&invocation) } {
        Ok(result) => println!("{}", result),
        Err(err) => fail(err),
    }
}
