use std::env;
use std::fmt::Display;
use std::io;
use std::time::Instant;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use factab::bound::{parse_bound, parse_key};
use factab::print::{parse_format, Format};
use factab::table::{compute_factorials, compute_factorials_checked, FactorialTable};
use factab::print;

const SAMPLE_KEYS: [u64; 3] = [1, 3, 5];

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// compute factorials from 1! up to and including this bound
    #[clap(short = 'n', long, default_value = "5", value_parser = parse_bound, allow_negative_numbers = true)]
    bound: i64,

    /// comma-separated keys to print in the 'lines' format [default: 1,3,5]
    #[clap(short = 'k', long, value_delimiter = ',', value_parser = parse_key)]
    keys: Option<Vec<u64>>,

    /// output format: lines, table or json
    #[clap(short = 'f', long, default_value = "lines", value_parser = parse_format)]
    format: Format,

    /// use fixed-width 128-bit arithmetic, failing past 34!
    #[clap(long)]
    checked: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.keys.is_some() && self.format != Format::Lines {
            bail!("--keys applies only to the 'lines' format, not '{}'", self.format);
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let start_time = Instant::now();
    let output = if args.checked {
        render(&compute_factorials_checked(args.bound)?, &args)?
    } else {
        render(&compute_factorials(args.bound), &args)?
    };
    let elapsed = start_time.elapsed();
    info!(
        "tabulated factorials up to bound {} in {}s",
        args.bound,
        elapsed.as_millis() as f64 / 1_000.
    );

    print!("{output}");
    Ok(())
}

fn render<V: Display>(table: &FactorialTable<V>, args: &Args) -> anyhow::Result<String> {
    match args.format {
        Format::Lines => {
            let keys = args.keys.as_deref().unwrap_or(&SAMPLE_KEYS);
            Ok(print::lines(table, keys)?)
        }
        Format::Table => Ok(format!(
            "{}\n",
            Console::default().render(&print::tabulate(table))
        )),
        Format::Json => Ok(format!("{}\n", print::to_json(table)?)),
    }
}
