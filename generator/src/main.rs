use {
    clap::Parser,
    indicatif::ProgressBar,
    permutations::{
        INPUT_SIZE_DEFAULT, check_size, default_file_name, generate_file, models::Result,
    },
    rand::{SeedableRng, rngs::StdRng},
    std::path::PathBuf,
};

fn validate_size(s: &str) -> std::result::Result<usize, String> {
    let val = s.parse::<usize>().map_err(|e| format!("{e}"))?;
    check_size(val).map_err(|e| format!("{e}"))?;
    Ok(val)
}

#[derive(Parser, Debug)]
#[command(about = "Writes `n` and 2n random permutations of 1..=n to `{n}.in`")]
struct Args {
    #[arg(
        value_parser = validate_size,
        default_value_t = INPUT_SIZE_DEFAULT,
        help = "Size of every permutation"
    )]
    n: usize,

    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(PathBuf),
        help = "Output file (defaults to {n}.in)"
    )]
    output_path: Option<PathBuf>,

    #[arg(short, long, help = "Seed for reproducible output")]
    seed: Option<u64>,

    #[arg(short, long)]
    quiet: bool,
}

fn run(args: Args) -> Result<PathBuf> {
    let rows = check_size(args.n)?;
    let output_path = args.output_path.unwrap_or_else(|| default_file_name(args.n));
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let pb = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(rows as u64)
    };

    let time = std::time::Instant::now();
    generate_file(&output_path, args.n, &mut rng, || pb.inc(1))?;
    pb.finish();
    let dur = time.elapsed();

    println!("output: {}", output_path.display());
    println!("calculation time: {}", dur.as_secs_f32());
    Ok(output_path)
}

fn main() -> Result<()> {
    run(Args::parse())?;
    Ok(())
}
