use phonesift_core::domain::normalize_phone_text;
use phonesift_core::rules::{partition_batches, BatchSize};
use phonesift_sheets::{BatchWriter, SheetError};
use std::fs;
use tempfile::TempDir;

fn batches(raw: &[&str], size: usize) -> Vec<phonesift_core::rules::Batch> {
    let phones = raw
        .iter()
        .map(|value| normalize_phone_text(value).expect("valid phone"))
        .collect();
    partition_batches(phones, BatchSize::new(size).expect("batch size"))
}

#[test]
fn writes_numbered_files_with_bom_and_no_header() {
    let temp = TempDir::new().expect("tempdir");
    let prefix = temp.path().join("contatos_consolidados");
    let writer = BatchWriter::new(&prefix);

    let written = writer
        .write_all(&batches(
            &["5511111111111", "5522222222222", "5533333333333"],
            2,
        ))
        .expect("write batches");

    assert_eq!(written.len(), 2);
    assert_eq!(written[0].records, 2);
    assert_eq!(written[1].records, 1);
    assert_eq!(
        written[0].path,
        temp.path().join("contatos_consolidados_parte_1.csv")
    );
    assert_eq!(
        written[1].path,
        temp.path().join("contatos_consolidados_parte_2.csv")
    );

    let first = fs::read(&written[0].path).expect("read part 1");
    assert_eq!(&first[..3], b"\xEF\xBB\xBF");
    assert_eq!(&first[3..], b"5511111111111\n5522222222222\n");

    let second = fs::read_to_string(&written[1].path).expect("read part 2");
    assert_eq!(second, "\u{feff}5533333333333\n");
}

#[test]
fn creates_missing_output_directories() {
    let temp = TempDir::new().expect("tempdir");
    let prefix = temp.path().join("saida").join("lote");
    let writer = BatchWriter::new(&prefix);

    let written = writer
        .write_all(&batches(&["0800123456"], 10))
        .expect("write batches");
    assert_eq!(written.len(), 1);
    assert!(temp.path().join("saida").join("lote_parte_1.csv").exists());
}

#[test]
fn failed_batch_keeps_earlier_files() {
    let temp = TempDir::new().expect("tempdir");
    let prefix = temp.path().join("lote");
    // a directory where the second file should go makes that write fail
    fs::create_dir(temp.path().join("lote_parte_2.csv")).expect("block part 2");
    let writer = BatchWriter::new(&prefix);

    let err = writer
        .write_all(&batches(
            &["5511111111111", "5522222222222", "5533333333333"],
            1,
        ))
        .unwrap_err();

    assert!(matches!(&err, SheetError::Write { path, .. } if path.ends_with("lote_parte_2.csv")));
    assert!(temp.path().join("lote_parte_1.csv").is_file());
    assert!(!temp.path().join("lote_parte_3.csv").exists());
}
