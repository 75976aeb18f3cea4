//! x3270-package - build, sign and package the x3270 .NET libraries.
//!
//! Rebuilds for x86 and x64, signs the binaries and compiles the signed
//! Inno Setup installer. The first failing tool ends the run with its exit
//! code.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = match x3270_packager::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
