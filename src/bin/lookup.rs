use anyhow::{bail, Result};
use clap::Parser;
use customer_bridge::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use customer_bridge::core::{codec, LookupRequest};
use customer_bridge::utils::logger;
use customer_bridge::{LookupAdapter, SampleTarget, Target, XmlServiceClient};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "lookup")]
#[command(about = "Run a single customer lookup and print the JSON response")]
struct Args {
    /// Customer number to look up
    #[arg(long, conflicts_with = "request")]
    cunbr: Option<String>,

    /// Full request envelope, e.g. {"customer_request":{"customer":{"cunbr":"2878037"}}}
    #[arg(long)]
    request: Option<String>,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    timeout_seconds: u64,

    /// Answer with sample accounts instead of calling the service
    #[arg(long)]
    sample: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let request = match (&args.request, &args.cunbr) {
        (Some(request), _) => request.clone(),
        (None, Some(cunbr)) => codec::encode_request(&LookupRequest::new(cunbr.as_str()))?,
        (None, None) => bail!("either --cunbr or --request is required"),
    };
    tracing::debug!("Request envelope: {}", request);

    let target: Box<dyn Target> = if args.sample {
        Box::new(SampleTarget::default())
    } else {
        let client =
            XmlServiceClient::new(args.base_url, Duration::from_secs(args.timeout_seconds))?;
        Box::new(LookupAdapter::new(client))
    };

    let response = target.request(&request).await?;
    println!("{}", response);

    Ok(())
}
