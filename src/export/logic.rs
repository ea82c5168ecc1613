use crate::db::store::ClockStore;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, RecordExport};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every clock record to `file`. Returns how many were written.
    pub fn export<S: ClockStore + ?Sized>(
        store: &S,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        if path.exists() && !force && !confirm_overwrite(&path)? {
            return Err(AppError::Export(format!(
                "'{}' exists and was not overwritten (use --force)",
                path.display()
            )));
        }

        let records = RecordExport::numbered(&store.all_events()?);
        if records.is_empty() {
            warning("No clock records to export; writing an empty file.");
        }

        let mut out = BufWriter::new(File::create(&path)?);
        write_records(format, &records, &mut out)?;
        out.flush()?;

        tracing::debug!(records = records.len(), format = format.as_str(), path = %path.display(), "export done");
        success(format!(
            "Exported {} clock record(s) as {} to {}",
            records.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(records.len())
    }
}

/// Serialize `records` into `out`.
pub fn write_records<W: Write>(
    format: ExportFormat,
    records: &[RecordExport],
    out: W,
) -> AppResult<()> {
    match format {
        ExportFormat::Json => serde_json::to_writer_pretty(out, records)
            .map_err(|e| AppError::Export(format!("JSON: {e}"))),
        ExportFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(out);
            for record in records {
                wtr.serialize(record)
                    .map_err(|e| AppError::Export(format!("CSV: {e}")))?;
            }
            wtr.flush()?;
            Ok(())
        }
    }
}

/// `[y/N]`; anything but y/yes, including closed stdin, keeps the file.
fn confirm_overwrite(path: &Path) -> AppResult<bool> {
    print!("'{}' already exists. Overwrite? [y/N] ", path.display());
    io::stdout().flush()?;

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer)? == 0 {
        println!();
        return Ok(false);
    }
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
