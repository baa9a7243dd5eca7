use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use gstbill::application::engine::{InvoiceEngine, InvoiceSummary};
use gstbill::domain::invoice::{InvoiceHeader, InvoiceState};
use gstbill::domain::ports::InvoiceSinkBox;
use gstbill::domain::rounding::RoundingPolicy;
use gstbill::domain::words::{IndianNumbering, InternationalNumbering, NumberingSystemBox};
use gstbill::infrastructure::text_file::{DEFAULT_INVOICE_FILE, TextFileSink};
use gstbill::interfaces::csv::row_reader::RowReader;
use gstbill::interfaces::report::InvoiceReport;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input rows CSV file (description,quantity,rate)
    input: PathBuf,

    /// Save the invoice as text. Without a value, saves to invoice.txt
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_INVOICE_FILE)]
    output: Option<PathBuf>,

    /// How midpoints are rounded
    #[arg(long, value_enum, default_value_t = Rounding::HalfEven)]
    rounding: Rounding,

    /// Grouping used for the amount in words
    #[arg(long, value_enum, default_value_t = Numbering::Indian)]
    numbering: Numbering,

    /// What to print on stdout
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[arg(long)]
    buyer_name: Option<String>,

    /// Invoice date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,

    #[arg(long)]
    address: Option<String>,

    /// Buyer GSTIN
    #[arg(long)]
    gstin: Option<String>,

    #[arg(long)]
    state: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rounding {
    HalfEven,
    HalfUp,
}

impl From<Rounding> for RoundingPolicy {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::HalfEven => RoundingPolicy::HalfEven,
            Rounding::HalfUp => RoundingPolicy::HalfUp,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Numbering {
    Indian,
    International,
}

impl Numbering {
    fn system(self) -> NumberingSystemBox {
        match self {
            Numbering::Indian => Box::new(IndianNumbering),
            Numbering::International => Box::new(InternationalNumbering),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonInvoice<'a> {
    header: Option<&'a InvoiceHeader>,
    #[serde(flatten)]
    summary: &'a InvoiceSummary,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut state = InvoiceState::with_rows(Vec::new());
    state.set_header(InvoiceHeader {
        buyer_name: cli.buyer_name,
        date: cli.date,
        address: cli.address,
        gstin: cli.gstin,
        state: cli.state,
    });

    // Read rows
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RowReader::new(file);
    for row in reader.rows().into_diagnostic()? {
        match row {
            Ok(row) => state.push_row(row),
            Err(e) => warn!(error = %e, "Error reading row, skipping it"),
        }
    }

    let rounding = RoundingPolicy::from(cli.rounding);
    let engine = InvoiceEngine::new(cli.numbering.system(), rounding);
    let summary = engine.recalculate(&state).into_diagnostic()?;
    let report = InvoiceReport::new(state.header(), &summary, rounding);

    {
        let mut out = io::stdout().lock();
        match cli.format {
            Format::Text => write!(out, "{report}").into_diagnostic()?,
            Format::Json => {
                let invoice = JsonInvoice {
                    header: state.header(),
                    summary: &summary,
                };
                let json = serde_json::to_string_pretty(&invoice).into_diagnostic()?;
                writeln!(out, "{json}").into_diagnostic()?;
            }
        }
    }

    if let Some(path) = cli.output {
        let sink: InvoiceSinkBox = Box::new(TextFileSink::new(path));
        sink.save(&report.render()).await.into_diagnostic()?;
    }

    Ok(())
}
