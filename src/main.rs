use clap::Parser;

use landing_gen::{CONFIRMATION, generate_landing};

#[derive(Parser)]
#[command(name = "landing-gen", version)]
#[command(about = "Write the solid teal landing-screen placeholder to mobile/assets/landing.png")]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    generate_landing()?;

    println!("{}", CONFIRMATION);

    Ok(())
}
