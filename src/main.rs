use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gfmul::trace::{render_evaluation, render_reduction};
use gfmul::{decode, encode, evaluate, GaloisField, RenderOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "gfmul", about = "Step-by-step multiplication in GF(2^n)")]
struct Cli {
    /// Log every reduction fold and multiplier iteration to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Multiply two integers in GF(2^n); missing values are prompted for.
    Multiply {
        /// First factor (decimal).
        a: Option<u128>,
        /// Second factor (decimal).
        b: Option<u128>,
        /// Irreducible polynomial, e.g. `x^3+x+1`.
        polynomial: Option<String>,
        /// Field degree n.
        degree: Option<u32>,
        /// Omit binary annotations from the report.
        #[arg(long)]
        no_binary: bool,
        /// Print only the summary line.
        #[arg(short, long)]
        quiet: bool,
        /// Append the BLAKE3 fingerprint of the trace.
        #[arg(long)]
        digest: bool,
    },
    /// Reduce an integer into GF(2^n).
    Reduce {
        /// Value to reduce (decimal).
        value: u128,
        /// Irreducible polynomial, e.g. `x^3+x+1`.
        polynomial: String,
        /// Field degree n.
        degree: u32,
    },
    /// Print the polynomial form of an integer.
    Encode {
        /// Value to encode (decimal).
        value: u128,
    },
    /// Print the integer form of a polynomial.
    Decode {
        /// Polynomial, e.g. `x^3+x+1`.
        polynomial: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Multiply {
            a,
            b,
            polynomial,
            degree,
            no_binary,
            quiet,
            digest,
        } => run_multiply(a, b, polynomial, degree, no_binary, quiet, digest)?,
        Commands::Reduce {
            value,
            polynomial,
            degree,
        } => run_reduce(value, &polynomial, degree)?,
        Commands::Encode { value } => println!("{}", encode(value)),
        Commands::Decode { polynomial } => {
            let value = decode(&polynomial)
                .with_context(|| format!("failed to decode polynomial '{polynomial}'"))?;
            println!("{value} (binary: {value:b})");
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(io::stderr)
        .init();
}

/// `--verbose` wins over `RUST_LOG`; an unset or unparsable `RUST_LOG` means `warn`.
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn run_multiply(
    a: Option<u128>,
    b: Option<u128>,
    polynomial: Option<String>,
    degree: Option<u32>,
    no_binary: bool,
    quiet: bool,
    digest: bool,
) -> Result<()> {
    let mut input = io::stdin().lock();
    let a = match a {
        Some(value) => value,
        None => prompt(&mut input, "\nA (in decimal): ")?,
    };
    let b = match b {
        Some(value) => value,
        None => prompt(&mut input, "B (in decimal): ")?,
    };
    let polynomial = match polynomial {
        Some(text) => text,
        None => prompt(&mut input, "Polynomial (e.g., x^3+x+1): ")?,
    };
    let degree = match degree {
        Some(value) => value,
        None => prompt(&mut input, "Degree (in decimal): ")?,
    };

    let evaluation = evaluate(a, b, &polynomial, degree)
        .with_context(|| format!("cannot multiply over '{polynomial}' with degree {degree}"))?;

    let options = RenderOptions::default()
        .with_binary(!no_binary)
        .with_steps(!quiet);
    println!("{}", render_evaluation(&evaluation, &options));
    if digest {
        println!("trace digest: {}", evaluation.trace.fingerprint());
    }

    Ok(())
}

fn run_reduce(value: u128, polynomial: &str, degree: u32) -> Result<()> {
    let field = GaloisField::from_polynomial(polynomial, degree)
        .with_context(|| format!("invalid field '{polynomial}' with degree {degree}"))?;
    let reduction = field.reduce(value);

    println!("{}", render_reduction(&field, &reduction.steps, &RenderOptions::default()));
    println!(
        "{value} reduced in {field}: {} -> polynomial form = {}",
        reduction.value,
        encode(reduction.value)
    );
    Ok(())
}

fn prompt<T>(input: &mut impl BufRead, label: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("unexpected end of input while reading '{}'", label.trim());
    }
    let trimmed = line.trim();
    trimmed
        .parse()
        .with_context(|| format!("invalid value '{trimmed}' for '{}'", label.trim()))
}
