use std::process;
use std::time::Instant;

use clap::Parser;
use log::info;

use rootfinder::builtin::{builtin, FORMULA};
use rootfinder::expr::Expression;
use rootfinder::scan::{scan, ScanConfig};
use rootfinder::wrap::{RealFn, RealFnEval};
use rootfinder::Error;

#[derive(Parser)]
#[command(name = "rootfinder")]
#[command(about = "Find real roots of f(x) on an interval by sampling and bisection")]
#[command(version)]
struct Cli {
    /// [EXPRESSION] FROM TO SEGMENTS; without EXPRESSION the built-in function is scanned
    #[arg(required = true, num_args = 3..=4, value_name = "ARGS", allow_negative_numbers = true)]
    operands: Vec<String>,
}

/// Operands after interpretation.
struct Invocation {
    expression: Option<String>,
    from: f64,
    to: f64,
    segments: f64,
}

impl Invocation {
    fn from_operands(operands: &[String]) -> Result<Invocation, Error> {
        let (expression, numbers) = match operands.len() {
            4 => (Some(operands[0].clone()), &operands[1..]),
            _ => (None, operands),
        };
        Ok(Invocation {
            expression,
            from: parse_number("from", &numbers[0])?,
            to: parse_number("to", &numbers[1])?,
            segments: parse_number("segments", &numbers[2])?,
        })
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, Error> {
    value.trim().parse().map_err(|_| Error::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

fn exit_code(e: &Error) -> i32 {
    match *e {
        Error::InvalidArgument { .. } => 2,
        Error::InvalidDomain { .. } => 3,
        Error::Expression { .. } => 4,
    }
}

fn print_roots<F>(f: &F, config: &ScanConfig)
where
    F: RealFnEval + ?Sized,
{
    for root in scan(f, config) {
        println!("result: {}: {:.20}", root.kind.label(), root.location);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let begin = Instant::now();

    let inv = Invocation::from_operands(&cli.operands)?;
    let config = ScanConfig::new(inv.from, inv.to, inv.segments)?;

    match inv.expression {
        Some(ref source) => {
            let f = Expression::parse(source)?;
            info!("scanning expression `{}`", f.source());
            print_roots(&f, &config);
        }
        None => {
            info!("scanning built-in function {}", FORMULA);
            let f = RealFn::new(&builtin);
            print_roots(&f, &config);
        }
    }

    println!("Time spent: {:.20}", begin.elapsed().as_secs_f64());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(exit_code(&e));
    }
}
