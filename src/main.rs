use billview::prelude::*;
use billview::source;
use clap::Parser;
use std::io;

/// Sort, search, and paginate legislative bill records
#[derive(Parser, Debug)]
#[command(name = "billview")]
#[command(about = "Turn raw bill records into a sorted, searched, paginated page view")]
#[command(version)]
struct Args {
    /// JSON file holding an array of bill records
    #[arg(long)]
    input: Option<String>,

    /// Read a JSON array of bill records from stdin instead of a file
    /// Useful for stdio pipelines: curl ... | billview --stdin
    #[arg(long)]
    stdin: bool,

    /// State to pull from the built-in fixture catalogue when no input
    /// file or stdin is given
    #[arg(long, default_value = "Illinois")]
    state: String,

    /// Search term matched against bill number, title, and description
    #[arg(short, long, default_value = "")]
    search: String,

    /// Page to display (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Bills per page
    #[arg(long, default_value_t = billview::DEFAULT_PAGE_SIZE)]
    page_size: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let records = if args.stdin {
        source::read_records(io::stdin().lock())?
    } else if let Some(input) = &args.input {
        source::read_records_from_path(input)?
    } else {
        FixtureSource::new().bills_for_state(&args.state)?
    };

    if records.is_empty() {
        eprintln!("Warning: no bill records to display");
    }

    let config = ViewConfig::new(args.page_size)?;
    let result = compute_view(&records, &args.search, args.page, &config)?;

    let json = serde_json::to_string_pretty(&result)?;
    println!("{}", json);

    Ok(())
}
