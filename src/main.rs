use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mendel::report::DrugReport;
use mendel::Pipeline;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mendel", about = "Pharmacogenomic risk engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a variant file for drug-gene risk.
    Analyze {
        /// VCF-flavored variant file.
        file: PathBuf,
        /// Comma-separated drug names to assess.
        #[arg(long, value_delimiter = ',', required = true)]
        drugs: Vec<String>,
        /// Emit the full report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the supported drugs and their governing genes.
    Drugs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, drugs, json } => run_analyze(file, drugs, json)?,
        Commands::Drugs => run_drugs(),
    }

    Ok(())
}

fn run_analyze(file: PathBuf, drugs: Vec<String>, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read variant file {}", file.display()))?;

    let pipeline = Pipeline::new();
    let batch = pipeline
        .analyze(&text, &drugs)
        .context("analysis aborted")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    println!(
        "Analyzed {} rows ({} relevant variants)\n",
        batch.metrics.records_analyzed, batch.metrics.relevant_variants
    );
    for report in &batch.reports {
        print_report(report);
    }

    Ok(())
}

fn run_drugs() {
    let pipeline = Pipeline::new();
    let knowledge = pipeline.knowledge();
    for drug in knowledge.supported_drugs() {
        if let Some(table) = knowledge.drug_rule(&drug.to_lowercase()) {
            println!("{}\t{}", drug, table.gene);
        }
    }
}

fn print_report(report: &DrugReport) {
    match report {
        DrugReport::Analyzed(report) => {
            println!(
                "{}: {} ({} severity, {} urgency)",
                report.drug,
                report.risk_assessment.label,
                report.risk_assessment.severity,
                report.recommendation.urgency
            );
            println!(
                "  {} {} -> {} (activity score {:.1})",
                report.profile.gene,
                report.profile.diplotype,
                report.profile.phenotype,
                report.profile.activity_score
            );
            println!("  {}", report.recommendation.text);
            println!("  Dosage: {}", report.recommendation.dosage_advice);
            if !report.recommendation.alternatives.is_empty() {
                println!(
                    "  Alternatives: {}",
                    report.recommendation.alternatives.join(", ")
                );
            }
            println!("  Monitoring: {}", report.recommendation.monitoring_plan);
            println!(
                "  Evidence: {} (confidence tier {})\n",
                report.recommendation.evidence_level, report.explanation.evidence_level
            );
        }
        DrugReport::Unsupported { drug, risk, error } => {
            println!("{}: {} - {}\n", drug, risk, error);
        }
    }
}
