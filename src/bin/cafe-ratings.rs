use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::Parser;
use fsa_ratings::{prompt::read_postcode, Endpoint, Establishments, StatusPolicy};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(about = "Look up food hygiene ratings for cafes near a UK postcode")]
struct Args {
    #[arg(help = "Postcode to search. Prompted for on stdin when omitted.")]
    postcode: Option<String>,

    #[arg(
        short = 'e',
        long,
        help = "Search URL format, with `$postcode` where the postcode goes. \
                Defaults to the FSA ratings API."
    )]
    endpoint: Option<String>,

    #[arg(
        short = 's',
        long,
        help = "Fail on a non-2xx response instead of decoding its body."
    )]
    strict_status: bool,

    #[arg(short = 'v', long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

async fn run<R: BufRead, W: Write>(args: Args, input: R, mut out: W) -> Result<()> {
    let endpoint = args
        .endpoint
        .map(Endpoint::try_new)
        .transpose()
        .map_err(|e| anyhow!("Invalid endpoint: {}", e))?;
    let status_policy = if args.strict_status {
        StatusPolicy::Strict
    } else {
        StatusPolicy::Permissive
    };

    let postcode = match args.postcode {
        Some(postcode) => postcode,
        None => read_postcode(input, &mut out)?,
    };

    let http = fsa_ratings::default_http_client()?;
    let establishments =
        Establishments::search_custom(&postcode, &http, endpoint.as_ref(), status_policy).await?;
    establishments.write_report(out)?;
    Ok(())
}

fn exit_code<E: Write>(result: Result<()>, mut err_out: E) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing left to report to if stderr itself is gone.
            let _ = writeln!(err_out, "{}", err);
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    let result = run(args, io::stdin().lock(), io::stdout().lock()).await;
    exit_code(result, io::stderr())
}
