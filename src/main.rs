use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use tweetcluster::{kmeans_seeded, load_corpus, render_summary, write_cleaned, Cli, ClusterReport};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    // Step 1: Load and normalize tweets
    let step1_start = Instant::now();
    eprintln!("Step 1: Loading tweets from {}...", cli.input.display());
    let (corpus, stats) = load_corpus(&cli.input)
        .with_context(|| format!("Failed to load corpus from {}", cli.input.display()))?;
    eprintln!(
        "✓ Number of pre-processed tweets: {} ({} files, {} empty) [{:.2}s]\n",
        corpus.len(),
        stats.files,
        stats.empty_documents,
        step1_start.elapsed().as_secs_f64()
    );

    if let Some(path) = &cli.cleaned_output {
        write_cleaned(path, &corpus)
            .with_context(|| format!("Failed to write cleaned tweets to {}", path.display()))?;
        eprintln!("✓ Wrote cleaned tweets to {}\n", path.display());
    }

    // Step 2: Choose k
    let k = match cli.clusters {
        Some(k) => k,
        None => prompt_for_k(&mut io::stdin().lock(), &mut io::stderr())?,
    };
    eprintln!("You entered: k = {}", k);

    // Step 3: Cluster
    let step3_start = Instant::now();
    let config = cli.cluster_config(k);
    eprintln!("Step 3: Running k-medoids with k={} (seed {})...", k, cli.seed);
    let result = kmeans_seeded(&corpus, &config, cli.seed).context("Clustering failed")?;
    eprintln!(
        "✓ {} in {} iterations [{:.2}s]\n",
        if result.converged { "Converged" } else { "Stopped" },
        result.iterations,
        step3_start.elapsed().as_secs_f64()
    );

    // Step 4: Report
    let report = ClusterReport::new(&corpus, &config, cli.seed, &result);
    if cli.json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else {
        print!("{}", render_summary(&report));
    }

    eprintln!("\nTotal execution: {:.3}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Ask for k on `prompt`; main passes stderr so stdout only carries the report
fn prompt_for_k<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<usize> {
    write!(prompt, "Please enter the number of clusters (k): ").context("Failed to write prompt")?;
    prompt.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read k from stdin")?;
    if read == 0 {
        bail!("No value for k given on stdin");
    }

    line.trim()
        .parse()
        .with_context(|| format!("Invalid number of clusters: {:?}", line.trim()))
}
