//! phish_audit library: heuristic phishing risk analysis for URLs
//!
//! This library scores a URL against a fixed battery of lightweight checks
//! (HTTPS usage, IP-literal hosts, suspicious vocabulary, subdomain depth,
//! shorteners, TLDs and more) and returns an itemized audit report with a
//! safety verdict. No network access is needed for scoring; an optional
//! reachability probe can be run alongside it.
//!
//! # Example
//!
//! ```
//! let result = phish_audit::analyze("https://www.example.com");
//! assert!(result.is_safe);
//! assert_eq!(result.audit_report.total_checks, 10);
//! ```
//!
//! # Batch runs
//!
//! [`run_audit`] drives a list of URLs through the engine and prints a report
//! for each. It requires a Tokio runtime when reachability probing is enabled.

mod app;
pub mod config;
pub mod domain;
mod error_handling;
pub mod export;
pub mod initialization;
mod models;
pub mod reachability;
pub mod security;

// Re-export public API
pub use app::{collect_inputs, prepare_input, AuditSummary};
pub use config::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{InitializationError, ReachabilityError, UrlFormatError};
pub use export::AuditRecord;
pub use models::{AnalysisResult, AuditCategory, AuditFinding, AuditReport, RiskTier};
pub use reachability::{check_reachability, ReachabilityResult};
pub use run::{run_audit, run_audit_to};
pub use security::analyze;

// Internal run module (drives a batch of URLs through the engine)
mod run {
    use std::io::{self, Write};
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{bail, Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{debug, info, warn};

    use crate::app::{collect_inputs, print_summary, AuditSummary};
    use crate::config::Config;
    use crate::export::{write_record, AuditRecord, IgnoreBrokenPipe};
    use crate::initialization::{init_probe_client, init_semaphore};
    use crate::reachability::{check_reachability, ReachabilityResult};
    use crate::security::analyze;

    /// Runs an audit and writes reports to stdout.
    ///
    /// A closed stdout pipe (e.g. piping into `head`) is not treated as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if no inputs were given, the input file cannot be
    /// read, the probe client cannot be built or output cannot be written.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use phish_audit::{run_audit, Config};
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let config = Config {
    ///     urls: vec!["paypal-secure-login.tk".to_string()],
    ///     ..Default::default()
    /// };
    /// let summary = run_audit(config).await?;
    /// println!("{} unsafe", summary.unsafe_urls);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_audit(config: Config) -> Result<AuditSummary> {
        let stdout = io::stdout();
        let mut writer = IgnoreBrokenPipe::new(stdout.lock());
        run_audit_to(&config, &mut writer).await
    }

    /// Runs an audit, writing one report per input to `writer` in input order.
    ///
    /// # Errors
    ///
    /// Same as [`run_audit`].
    pub async fn run_audit_to<W: Write>(config: &Config, writer: &mut W) -> Result<AuditSummary> {
        let start_time = Instant::now();

        let inputs = collect_inputs(&config.urls, config.file.as_deref())
            .context("Failed to collect input URLs")?;
        if inputs.is_empty() {
            bail!("No URLs to analyze (pass URLs as arguments or use --file)");
        }
        info!("Analyzing {} URL(s)", inputs.len());

        let results: Vec<_> = inputs.iter().map(|input| analyze(input)).collect();

        let mut probes: Vec<Option<ReachabilityResult>> = vec![None; inputs.len()];
        if config.check_reachability {
            let client =
                init_probe_client(config).context("Failed to initialize HTTP client")?;
            let semaphore = init_semaphore(config.max_concurrency);
            let mut tasks = FuturesUnordered::new();

            for (index, input) in inputs.iter().enumerate() {
                let permit = match Arc::clone(&semaphore).acquire_owned().await {
                    Ok(permit) => permit,
                    Err(_) => {
                        warn!("Semaphore closed, skipping probe for: {input}");
                        continue;
                    }
                };
                let client = Arc::clone(&client);
                let url = input.clone();
                tasks.push(tokio::spawn(async move {
                    let _permit = permit;
                    (index, check_reachability(&client, &url).await)
                }));
            }

            while let Some(joined) = tasks.next().await {
                match joined {
                    Ok((index, probe)) => {
                        debug!("Probe {} finished: {}", index, probe.status_description());
                        probes[index] = Some(probe);
                    }
                    Err(e) => warn!("Reachability task failed: {e}"),
                }
            }
        }

        let mut summary = AuditSummary::default();
        for (result, probe) in results.into_iter().zip(probes) {
            let record = AuditRecord::new(result, probe);
            write_record(writer, &record, config.format, config.always_recommend)?;
            summary.record(&record);
        }
        writer.flush().context("Failed to flush output")?;

        summary.elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_summary(&summary);
        Ok(summary)
    }
}
