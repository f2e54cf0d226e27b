use std::env;
use std::error::Error;
use std::io::{self, BufRead, IsTerminal};

use colored::Colorize;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use polyarith::parser::parse_pairs;
use polyarith::printer::{PolynomialPrinter, PrintOptions};
use polyarith::{Polynomial, Term};

fn log_level() -> LevelFilter {
    match env::var("POLYARITH_LOG").as_deref() {
        Ok("error") => LevelFilter::Error,
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

fn print_options() -> PrintOptions {
    match env::var("POLYARITH_VAR") {
        Ok(v) if !v.is_empty() => PrintOptions::with_variable(&v),
        _ => PrintOptions::default(),
    }
}

fn read_polynomial(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Polynomial, Box<dyn Error>> {
    let line = lines.next().transpose()?.unwrap_or_default();
    Ok(parse_pairs(&line)?)
}

fn run() -> Result<(), Box<dyn Error>> {
    colored::control::set_override(io::stdout().is_terminal());

    let opts = print_options();
    let show = |p: &Polynomial| PolynomialPrinter::new(p, &opts).to_string();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter the terms of the first polynomial as coefficient and exponent pairs separated by spaces (e.g. 1 2 3 4 => 3x^4 + x^2):");
    let p1 = read_polynomial(&mut lines)?;
    println!("Enter the terms of the second polynomial:");
    let p2 = read_polynomial(&mut lines)?;

    println!("{} {}", "First polynomial:".bold(), show(&p1));
    println!("{} {}", "Second polynomial:".bold(), show(&p2));

    println!("{} {}", "p1 + p2:".bold(), show(&p1.add(&p2)));
    println!("{} {}", "p1 - p2:".bold(), show(&p1.subtract(&p2)));
    println!("{} {}", "p1 * p2:".bold(), show(&p1.multiply(&p2)));
    match p1.divide(&p2) {
        Ok((quot, rem)) => println!(
            "{} {} {} {}",
            "p1 / p2:".bold(),
            show(&quot),
            "remainder".bold(),
            show(&rem)
        ),
        Err(e) => println!("{} {}", "p1 / p2:".bold(), e.to_string().as_str().red()),
    }

    println!();
    let m = Term::new(2., 6);
    println!("{} {}", format!("p1 * {}:", m).as_str().bold(), show(&p1.multiply_by_term(&m)));
    println!("{} {}", format!("p1 / {}:", m).as_str().bold(), show(&p1.divide_by_term(&m)?));

    info!("Processed {} and {} terms", p1.nterms(), p2.nterms());
    Ok(())
}

/// Install the terminal logger. Returns false if a logger was already set.
fn init_logger(level: LevelFilter) -> bool {
    match TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("{} could not set up logging: {}", "warning:".yellow().bold(), e);
            false
        }
    }
}

fn main() {
    init_logger(log_level());

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
