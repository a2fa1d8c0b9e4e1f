use std::process;
use log::error;

use glcmkit::cli::build_cli;
use glcmkit::commands::{resolve_config, CommandFactory, GlcmkitCommandFactory};
use glcmkit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let config = match resolve_config(&matches) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init(matches.get_flag("verbose"), config.log_file.as_deref()) {
        eprintln!("Error initializing logger: {}", e);
        process::exit(1);
    }

    let factory = GlcmkitCommandFactory::new();

    let command_result = factory.create_command(&matches, config);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
