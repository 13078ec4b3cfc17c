use std::path::Path;
use std::process::Command;
use anyhow::{anyhow, Result};

fn run_cli(sample: &str) -> Result<std::process::Output> {
    let binary_path = env!("CARGO_BIN_EXE_trade-statement-parser");
    let sample_path = Path::new("samples").join(sample);

    Ok(Command::new(binary_path).arg(sample_path).output()?)
}

#[test]
fn test_cli_correctly_processes_sample() -> Result<()> {
    let output = run_cli("fidelity_activity.csv")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut reader = csv::Reader::from_reader(stdout.as_bytes());
    let headers = reader.headers()?.clone();

    assert_eq!(headers.len(), 17);
    assert_eq!(&headers[0], "run_date");
    assert_eq!(&headers[5], "type");

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;

    // Four trades plus the two trailing disclaimer lines, which map with defaulted fields
    assert_eq!(records.len(), 6);

    for record in &records {
        assert_eq!(record.len(), 17);
        assert_eq!(&record[5], "STOCK");
    }

    Ok(())
}

#[test]
fn test_cli_outputs_correct_field_values() -> Result<()> {
    let output = run_cli("fidelity_activity.csv")?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut reader = csv::Reader::from_reader(stdout.as_bytes());
    let records = reader.records().collect::<Result<Vec<_>, _>>()?;

    let bought = records.first().ok_or_else(|| anyhow!("first record missing from output"))?;

    assert_eq!(&bought[0], "2024-01-15");
    assert_eq!(&bought[1], "Individual - TOD X12345678");
    assert_eq!(&bought[3], "AAPL");
    assert_eq!(&bought[6], "10");
    assert_eq!(&bought[7], "185.92");
    assert_eq!(&bought[13], "0.03");
    assert_eq!(&bought[15], "-1859.23");
    assert_eq!(&bought[16], "2024-01-17");

    let sold = records.get(1).ok_or_else(|| anyhow!("second record missing from output"))?;

    assert_eq!(&sold[15], "1951.30");

    let closing = records.get(3).ok_or_else(|| anyhow!("fourth record missing from output"))?;

    assert_eq!(&closing[3], "-SPY240119P470");
    assert_eq!(&closing[7], "0");
    assert_eq!(&closing[15], "0");
    assert_eq!(&closing[16], "");

    Ok(())
}

#[test]
fn test_cli_rejects_statement_missing_required_headers() -> Result<()> {
    let output = run_cli("missing_headers.csv")?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    Ok(())
}

#[test]
fn test_cli_rejects_unsupported_statement() -> Result<()> {
    let output = run_cli("unsupported.csv")?;

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("No parser supports statement"));

    Ok(())
}
