use clap::Parser;

mod args;
mod convert;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::Args::parse();
    let triangles = convert::convert_command(&args)?;

    println!(
        "Successfully converted {} to {}",
        args.input.display(),
        args.output.display()
    );
    println!("Total triangles: {}", triangles);
    Ok(())
}
