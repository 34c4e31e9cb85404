use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payflow::application::orchestrator::PaymentOrchestrator;
use payflow::domain::ports::GatewayBox;
use payflow::domain::pricing::PricingConfig;
use payflow::domain::transaction::OrchestrationRequest;
use payflow::infrastructure::logging::{LoggingAnalytics, LoggingGateway, LoggingNotifier};
use payflow::interfaces::csv::report_writer::ReportWriter;
use payflow::interfaces::csv::request_reader::RequestReader;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input requests CSV file
    input: PathBuf,

    /// Base URL of a real payment gateway (optional). If provided, payloads
    /// are POSTed over HTTP; otherwise dispatches are logged locally.
    #[arg(long)]
    gateway_url: Option<String>,

    /// Override the flat non-USD conversion rate.
    #[arg(long)]
    conversion_rate: Option<Decimal>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let gateway: GatewayBox = match cli.gateway_url {
        #[cfg(feature = "gateway-http")]
        Some(url) => Box::new(payflow::infrastructure::http::HttpGateway::new(url)),
        #[cfg(not(feature = "gateway-http"))]
        Some(_) => miette::bail!("this build has no HTTP gateway; enable the gateway-http feature"),
        None => Box::new(LoggingGateway),
    };

    let mut pricing = PricingConfig::default();
    if let Some(rate) = cli.conversion_rate {
        pricing.conversion_rate = rate;
    }

    let orchestrator = PaymentOrchestrator::with_pricing(
        gateway,
        Box::new(LoggingNotifier),
        Box::new(LoggingAnalytics),
        pricing,
    );

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());

    for request_result in reader.requests() {
        match request_result {
            Ok(OrchestrationRequest::Payment(request)) => {
                match orchestrator.process_payment(request).await {
                    Ok(transaction) => writer.write_transaction(&transaction).into_diagnostic()?,
                    Err(e) => eprintln!("Error processing payment: {}", e),
                }
            }
            Ok(OrchestrationRequest::Refund(request)) => {
                match orchestrator.refund_payment(request).await {
                    Ok(refund) => writer.write_refund(&refund).into_diagnostic()?,
                    Err(e) => eprintln!("Error processing refund: {}", e),
                }
            }
            Err(e) => {
                eprintln!("Error reading request: {}", e);
            }
        }
    }

    writer.flush().into_diagnostic()?;

    Ok(())
}
