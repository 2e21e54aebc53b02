use crate::infra::{build_service, InMemoryHrmsSync};
use clap::Args;
use resume_ranker::config::RankingConfig;
use resume_ranker::error::AppError;
use resume_ranker::ranking::export::write_csv_file;
use resume_ranker::ranking::service::DEFAULT_SHORTLIST_LIMIT;
use resume_ranker::ranking::{
    DisplayRecord, FilterCriteria, RankingService, RankingSession, ScoringWeights, SyncOutcome,
    UploadedFile,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Filter, weight, and seed options shared by the demo and export commands.
#[derive(Args, Debug, Default)]
pub(crate) struct RankingArgs {
    /// Seed for simulated uploads (random when omitted)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Mask candidate names and e-mails
    #[arg(long)]
    pub(crate) anonymize: bool,
    /// Case-insensitive search over name, JD, and client
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Only show candidates for this client
    #[arg(long)]
    pub(crate) client: Option<String>,
    /// Only show candidates for this job description
    #[arg(long)]
    pub(crate) jd: Option<String>,
    /// Only show rows when anonymize is on
    #[arg(long)]
    pub(crate) anonymized_only: bool,
    /// Skills weight (0-100)
    #[arg(long, default_value_t = 40)]
    pub(crate) skills: u8,
    /// Experience weight (0-100)
    #[arg(long, default_value_t = 30)]
    pub(crate) experience: u8,
    /// Education weight (0-100)
    #[arg(long, default_value_t = 15)]
    pub(crate) education: u8,
    /// Certifications weight (0-100)
    #[arg(long, default_value_t = 15)]
    pub(crate) certifications: u8,
    /// Rescore candidates with the weights before listing
    #[arg(long)]
    pub(crate) apply_weights: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) ranking: RankingArgs,
    /// Simulate a single upload with this file name
    #[arg(long)]
    pub(crate) upload: Option<String>,
    /// Simulate a bulk upload of this many files
    #[arg(long, default_value_t = 0)]
    pub(crate) bulk: usize,
    /// Push the visible rows to the demo HRMS hook
    #[arg(long)]
    pub(crate) sync: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) ranking: RankingArgs,
    /// Destination CSV path
    #[arg(long)]
    pub(crate) output: PathBuf,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        ranking,
        upload,
        bulk,
        sync,
    } = args;

    let hrms = Arc::new(InMemoryHrmsSync::default());
    let service = prepare_service(&ranking, hrms.clone());

    if let Some(name) = upload {
        let ids = service.upload_single(Some(UploadedFile::new(name)));
        println!("Single upload admitted {} candidate(s)", ids.len());
    }
    if bulk > 0 {
        let files = (1..=bulk)
            .map(|i| UploadedFile::new(format!("bulk-{i}.pdf")))
            .collect();
        let ids = service.upload_bulk(files);
        println!("Bulk upload admitted {} candidate(s)", ids.len());
    }
    if ranking.apply_weights {
        service.apply_weights();
    }

    let session = service.snapshot();
    println!("Resume ranking demo");
    println!(
        "Theme: {} | Anonymize: {} | Weights: skills {} / experience {} / education {} / certifications {}{}",
        session.theme.label(),
        if session.anonymize { "on" } else { "off" },
        session.weights.skills,
        session.weights.experience,
        session.weights.education,
        session.weights.certifications,
        if ranking.apply_weights { " (applied)" } else { "" }
    );

    println!("\nJob descriptions");
    for jd in session.store.job_descriptions() {
        println!("- {}", jd.title);
    }
    println!("\nClients");
    for client in session.store.clients() {
        println!("- {}", client.name);
    }

    render_rows(&service.rows());

    let analytics = service.analytics();
    println!("\nAnalytics");
    if analytics.average_score == 0 {
        println!("- Avg score: n/a");
    } else {
        println!("- Avg score: {}", analytics.average_score);
    }
    println!("- Uploads this session: {}", analytics.uploads);
    if analytics.any_duplicate {
        println!("- Potential duplicates detected");
    }

    let (_, ack) = service.shortlist();
    println!("\n{}", ack.message);

    if sync {
        match service.sync_hrms() {
            SyncOutcome::Acknowledged(ack) => println!("{} ({} profiles)", ack.message, ack.synced),
            SyncOutcome::Failed { reason } => println!("HRMS sync failed: {reason}"),
        }
        for batch in hrms.batches() {
            println!(
                "  batch at {}: {} candidate(s)",
                batch.at.format("%Y-%m-%d %H:%M:%S UTC"),
                batch.candidates.len()
            );
        }
    }

    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let ExportArgs { ranking, output } = args;
    let service = prepare_service(&ranking, Arc::new(InMemoryHrmsSync::default()));
    if ranking.apply_weights {
        service.apply_weights();
    }

    let rows = service.rows();
    write_csv_file(&output, &rows)?;
    println!("Exported {} candidate(s) to {}", rows.len(), output.display());
    Ok(())
}

fn prepare_service(
    args: &RankingArgs,
    hrms: Arc<InMemoryHrmsSync>,
) -> RankingService<InMemoryHrmsSync> {
    let config = RankingConfig {
        seed: args.seed,
        shortlist_limit: DEFAULT_SHORTLIST_LIMIT,
    };
    let service = build_service(RankingSession::demo(), &config, hrms);

    service.set_weights(ScoringWeights::new(
        args.skills,
        args.experience,
        args.education,
        args.certifications,
    ));
    service.set_filter(FilterCriteria {
        query: args.query.clone().unwrap_or_default(),
        client: args.client.clone().unwrap_or_default(),
        job_description: args.jd.clone().unwrap_or_default(),
        anonymized_only: args.anonymized_only,
    });
    if args.anonymize {
        service.toggle_anonymize();
    }
    service
}

fn render_rows(rows: &[DisplayRecord]) {
    if rows.is_empty() {
        println!("\nCandidates: none match the current filters");
        return;
    }

    println!("\nCandidates (ranked by score)");
    for row in rows {
        let badge = if row.duplicate { " [Duplicate]" } else { "" };
        println!(
            "- {:>2} | {} <{}> | {} | {} | score {}{}",
            row.id.0, row.name, row.email, row.client, row.job_description, row.score, badge
        );
    }
}
