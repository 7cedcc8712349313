use std::io::Write;

use gray_ramp::cli;
use gray_ramp::config::Config;
use gray_ramp::pipeline;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match cli::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            log::debug!("Rejected arguments: {}", e);
            print!("ERROR");
            std::io::stdout().flush().ok();
            std::process::exit(-1);
        }
    };

    let paths = args.into_paths();
    match pipeline::run(&paths, &Config::default()) {
        Ok(conversion) => {
            log::info!(
                "Converted {}x{} -> {}x{}",
                conversion.source_size.0,
                conversion.source_size.1,
                conversion.output_size.0,
                conversion.output_size.1
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
