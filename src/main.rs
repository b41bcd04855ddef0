use std::env::args_os;
use std::process::ExitCode;

use image_gremlin::{logger, replace_color, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    logger::init(arguments.verbose());
    match replace_color(&arguments) {
        Ok(_) => {
            let options = arguments.options();
            println!("Success!");
            println!(
                "Replaced color {} with {} in {}",
                options.source_color,
                options.target_color,
                arguments.input_file().display()
            );
            println!("Output saved to: {}", arguments.output_file().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Image processing error: {}", e);
            eprintln!("Color replacement failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
