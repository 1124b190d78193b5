use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Render the greenhouse-gas emissions report to PDF")]
struct Args {
    /// Output PDF path
    #[arg(short, long, default_value = "output.pdf")]
    output: PathBuf,

    /// Directory holding the report fonts and images
    #[arg(short, long, default_value = ".")]
    assets: PathBuf,

    /// Render content from a JSON file instead of the built-in report
    #[arg(long)]
    content: Option<PathBuf>,

    /// Write the report content as JSON and exit
    #[arg(long, value_name = "FILE")]
    dump_content: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let report = match &args.content {
        Some(path) => match ghg_report::load_report(path) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Error loading {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => ghg_report::builtin_report(),
    };

    if let Some(path) = &args.dump_content {
        if let Err(e) = ghg_report::save_report(&report, path) {
            eprintln!("Error writing {}: {e}", path.display());
            process::exit(1);
        }
        println!("Report content written to {}", path.display());
        return;
    }

    match ghg_report::generate_report(&report, &args.assets, &args.output) {
        Ok(()) => println!("PDF created successfully: {}", args.output.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
