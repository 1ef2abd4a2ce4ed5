use super::record::LeaveEntry;
use super::status::display_label;
use chrono::NaiveDate;

pub const CONTENT_TYPE: mime::Mime = mime::TEXT_CSV_UTF_8;

const HEADER: [&str; 9] = [
    "ID",
    "Type",
    "Applicant",
    "Leave Type",
    "From",
    "To",
    "Reason",
    "Status",
    "Approved By",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV output was not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub fn export_csv<'a, I>(entries: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a LeaveEntry>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for entry in entries {
        writer.write_record([
            guard_cell(&entry.id),
            entry.kind.label().to_string(),
            guard_cell(&entry.applicant),
            guard_cell(&entry.leave_type),
            format_date(entry.from_date),
            format_date(entry.to_date),
            guard_cell(&entry.reason),
            display_label(&entry.status),
            guard_cell(&entry.status.approved_by),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

// Spreadsheet apps evaluate cells starting with these characters as formulas.
fn guard_cell(value: &str) -> String {
    if matches!(value.chars().next(), Some('=' | '+' | '-' | '@' | '\t' | '\r')) {
        format!("'{value}")
    } else {
        value.to_string()
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
