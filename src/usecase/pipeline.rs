use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::infrastructure::city_tiers::StaticCityRanker;
use crate::infrastructure::{csv_adapter, json_adapter};
use crate::usecase::event::{emit, AppEvent, EventSink};
use crate::usecase::sort::sort_retailers;
use crate::usecase::stats::SortStats;
use crate::usecase::verify::verify_sorted;

// The missing-input case gets its own variant so the caller can word the
// report differently; everything else is one failure class.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("source file not found: {path}")]
    SourceNotFound { path: String },

    #[error(transparent)]
    Failure(#[from] anyhow::Error),
}

/// Load the report, normalize and sort it, write the destination file.
/// With `dry_run` the write phase is skipped and `records_written` stays 0.
pub fn run_sort(
    source: &str,
    dest: &str,
    dry_run: bool,
    sink: Option<&dyn EventSink>,
) -> Result<SortStats, RunError> {
    if !Path::new(source).is_file() {
        return Err(RunError::SourceNotFound {
            path: source.to_string(),
        });
    }

    emit(
        sink,
        AppEvent::PhaseStarted {
            name: "load".into(),
        },
    );
    let records = csv_adapter::read_retailers_file(source)?;
    emit(
        sink,
        AppEvent::PhaseFinished {
            name: "load".into(),
        },
    );

    let (sorted, mut stats) = sort_retailers(records, &StaticCityRanker, sink);

    if !dry_run {
        emit(
            sink,
            AppEvent::PhaseStarted {
                name: "write".into(),
            },
        );
        json_adapter::write_retailers_file(dest, &sorted)?;
        stats.records_written = sorted.len();
        emit(
            sink,
            AppEvent::PhaseFinished {
                name: "write".into(),
            },
        );
    }

    emit(
        sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    );

    Ok(stats)
}

/// Re-read a written destination file and check its ordering invariants.
pub fn run_verify(source: &str) -> Result<usize, RunError> {
    if !Path::new(source).is_file() {
        return Err(RunError::SourceNotFound {
            path: source.to_string(),
        });
    }

    let records = json_adapter::read_retailers_file(source)?;
    let count = verify_sorted(&records, &StaticCityRanker)
        .with_context(|| format!("verification failed for {}", source))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const REPORT: &str = "\
SAP Code,Retailer Name,Location,Google Map Link,Contact Number
R3,Apex,Unknownville,https://maps.example/3,111
R1, acme ,Delhi,https://maps.example/1,222
R2,Zenith,delhi,https://maps.example/2,333
";

    #[test]
    fn run_sort_writes_tier_ordered_output() {
        let dir = tempdir().expect("tempdir");
        let source = dir.path().join("all-region.csv");
        let dest = dir.path().join("retailers.json");
        fs::write(&source, REPORT).expect("seed");

        let stats = run_sort(
            source.to_str().unwrap(),
            dest.to_str().unwrap(),
            false,
            None,
        )
        .expect("run");

        assert_eq!(stats.rows_read, 3);
        assert_eq!(stats.records_written, 3);
        assert_eq!(stats.listed_city_records, 2);
        assert_eq!(stats.default_tier_records, 1);

        let written = json_adapter::read_retailers_file(dest.to_str().unwrap()).expect("reread");
        let names: Vec<&str> = written.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ACME", "ZENITH", "APEX"]);
    }

    #[test]
    fn run_sort_dry_run_writes_nothing() {
        let dir = tempdir().expect("tempdir");
        let source = dir.path().join("all-region.csv");
        let dest = dir.path().join("retailers.json");
        fs::write(&source, REPORT).expect("seed");

        let stats = run_sort(source.to_str().unwrap(), dest.to_str().unwrap(), true, None)
            .expect("dry run");

        assert_eq!(stats.rows_read, 3);
        assert_eq!(stats.records_written, 0);
        assert!(!dest.exists());
    }

    #[test]
    fn run_sort_reports_missing_source_by_path() {
        let err = run_sort("no-such-report.csv", "out.json", false, None).unwrap_err();

        match err {
            RunError::SourceNotFound { path } => assert_eq!(path, "no-such-report.csv"),
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn run_sort_fails_when_destination_directory_is_missing() {
        let dir = tempdir().expect("tempdir");
        let source = dir.path().join("all-region.csv");
        fs::write(&source, REPORT).expect("seed");

        let missing_dir = dir.path().join("missing-subdir");
        let dest = missing_dir.join("retailers.json");

        let err = run_sort(source.to_str().unwrap(), dest.to_str().unwrap(), false, None)
            .unwrap_err();

        match &err {
            RunError::Failure(_) => {}
            other => panic!("expected Failure, got {other:?}"),
        }
        assert!(err.to_string().contains("failed to write destination file"));
        assert!(
            !missing_dir.exists(),
            "the write must not create parent directories"
        );
    }

    #[test]
    fn run_verify_accepts_sorted_output_and_counts_records() {
        let dir = tempdir().expect("tempdir");
        let source = dir.path().join("all-region.csv");
        let dest = dir.path().join("retailers.json");
        fs::write(&source, REPORT).expect("seed");

        run_sort(
            source.to_str().unwrap(),
            dest.to_str().unwrap(),
            false,
            None,
        )
        .expect("run");

        let count = run_verify(dest.to_str().unwrap()).expect("verify");
        assert_eq!(count, 3);
    }

    #[test]
    fn run_verify_rejects_shuffled_file() {
        let dir = tempdir().expect("tempdir");
        let dest = dir.path().join("retailers.json");
        fs::write(
            &dest,
            r#"[
  {"sapCode": "R1", "name": "BETA", "area": "PUNE", "city": "PUNE", "mapLink": "", "contact": ""},
  {"sapCode": "R2", "name": "ACME", "area": "DELHI", "city": "DELHI", "mapLink": "", "contact": ""}
]"#,
        )
        .expect("seed");

        let err = run_verify(dest.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("verification failed"));
    }

    #[test]
    fn run_verify_reports_missing_file_by_path() {
        let err = run_verify("no-such-output.json").unwrap_err();

        match err {
            RunError::SourceNotFound { path } => assert_eq!(path, "no-such-output.json"),
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }
}
