use clap::Parser;
use std::path::PathBuf;

use lookbook::Generator;

#[derive(Parser)]
#[command(name = "lookbook")]
#[command(about = "Generate placeholder image assets for the fashion app")]
struct Cli {
    /// Assets root directory
    #[arg(long, value_name = "DIR", default_value = "assets/images")]
    out: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Generating assets under {:?}\n", args.out);
    }

    let generator = Generator::new(&args.out).with_verbose(args.verbose);
    let written = generator.run()?;

    println!("All fashion placeholder images created successfully!");
    println!("{} files written to {}", written, args.out.display());

    Ok(())
}
