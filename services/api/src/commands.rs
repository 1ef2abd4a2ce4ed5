use crate::infra::parse_kind;
use campus_leave::error::AppError;
use campus_leave::leave::{
    export_csv, normalize_status, LeaveFilter, LeaveKind, LeavePayloadImporter, LeaveRecord,
    LeaveReport, LifecycleState, StatusClassification,
};
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Raw status text as stored by the backend
    #[arg(long, default_value = "")]
    pub(crate) status: String,
    /// Role of the last approver (e.g. HOD, Principal)
    #[arg(long, default_value = "")]
    pub(crate) role: String,
    /// Name or identifier of the last approver
    #[arg(long, default_value = "")]
    pub(crate) approved_by: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive search over id, applicant, leave type, and reason
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Month of the leave start date (1-12)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub(crate) month: Option<u32>,
    /// Year of the leave start date
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Status to match after normalization (approved, rejected, pending, ...)
    #[arg(long = "status")]
    pub(crate) status: Option<String>,
    /// Restrict to regular leave ("leave") or on-duty leave ("od")
    #[arg(long, value_parser = parse_kind)]
    pub(crate) kind: Option<LeaveKind>,
}

impl From<FilterArgs> for LeaveFilter {
    fn from(args: FilterArgs) -> Self {
        LeaveFilter {
            search: args.search,
            month: args.month,
            year: args.year,
            status: args.status,
            kind: args.kind,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// JSON payload exported from the ERP backend
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
    /// Include one line per record in the output
    #[arg(long)]
    pub(crate) list: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// JSON payload exported from the ERP backend
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
    /// Destination file (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let record = LeaveRecord::new(args.status)
        .with_role(args.role)
        .with_approver(args.approved_by);
    let classification = StatusClassification::of(&record);

    println!("Normalized status: {}", display_token(&record));
    println!("Lifecycle state: {:?}", classification.state);
    println!("Label: {}", classification.label);
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        input,
        filters,
        list,
    } = args;

    let entries = LeavePayloadImporter::from_path(&input)?;
    let filter = LeaveFilter::from(filters);
    let report = LeaveReport::build(&entries, &filter);

    render_report(&report, entries.len(), list);
    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let ExportArgs {
        input,
        filters,
        output,
    } = args;

    let entries = LeavePayloadImporter::from_path(&input)?;
    let filter = LeaveFilter::from(filters);
    let csv = export_csv(filter.apply(&entries))?;

    match output {
        Some(path) => {
            std::fs::write(&path, csv)?;
            info!(path = %path.display(), "leave export written");
        }
        None => print!("{csv}"),
    }
    Ok(())
}

fn display_token(record: &LeaveRecord) -> String {
    let normalized = normalize_status(&record.raw_status);
    if normalized.is_empty() {
        "(empty)".to_string()
    } else {
        normalized.to_string()
    }
}

fn render_report(report: &LeaveReport, loaded: usize, list: bool) {
    let summary = &report.summary;

    println!("Leave status report");
    println!("{} of {} records match the filters", summary.total, loaded);

    println!("\nSummary");
    println!("- Pending: {}", summary.pending);
    println!("- Approved: {}", summary.approved);
    println!("- Rejected: {}", summary.rejected);

    println!("\nBy lifecycle state");
    for state in LifecycleState::ordered() {
        println!("- {}: {}", state.label(), summary.count(state));
    }

    if list {
        if report.records.is_empty() {
            println!("\nRecords: none");
        } else {
            println!("\nRecords");
            for view in &report.records {
                println!(
                    "- {} | {} | {} | {} | {} | {}",
                    view.id,
                    view.kind_label,
                    view.applicant,
                    view.leave_type,
                    format_period(view.from_date, view.to_date),
                    view.status_label
                );
            }
        }
    }
}

fn format_period(from: Option<NaiveDate>, to: Option<NaiveDate>) -> String {
    match (from, to) {
        (Some(from), Some(to)) if from != to => format!("{from} -> {to}"),
        (Some(day), _) | (None, Some(day)) => day.to_string(),
        (None, None) => "undated".to_string(),
    }
}
