use std::env;

use bytelit::cli::{self, StdoutWriter};

pub fn main() {
    let exit_status = internal_main();
    std::process::exit(exit_status);
}

fn internal_main() -> i32 {
    let mut writer = StdoutWriter;

    match cli::run_command(env::args_os(), &mut writer) {
        Ok(_) => 0,
        Err(bytelit::Error::Clap(err)) => err.exit(),
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    }
}
