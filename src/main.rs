mod args;
mod numeric;
mod render;
mod triangle;

use anyhow::Context;
use tracing_subscriber::filter::LevelFilter;

use args::{Args, Mode};
use triangle::Pascal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "parsed arguments");

    print!("{}", run(&args)?);
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<String> {
    let depth = args.depth;

    let output = match args.mode {
        Mode::Factorial => format!("{}\n", numeric::factorial(depth)),
        Mode::Biggest => format!("{}\n", numeric::nchoosek(depth, depth / 2)),
        Mode::Choose => {
            let k = args.k.context("--choosek needs a second argument k")?;
            format!("{}\n", numeric::nchoosek(depth, k))
        }
        Mode::Triangle => {
            let depth = usize::try_from(depth)
                .with_context(|| format!("Depth {depth} is too large for this platform"))?;
            let pascal = Pascal::new(depth, args.only);
            render::render(&pascal, args.format, args.headers, args.width)
        }
    };

    Ok(output)
}
