use super::*;
use crate::state::banner::BannerKind;

#[test]
fn check_csv_file_accepts_small_csv() {
    assert!(check_csv_file("subjects.CSV", 512.0).is_ok());
}

#[test]
fn check_csv_file_rejects_wrong_type_empty_and_large() {
    assert_eq!(check_csv_file("subjects.xlsx", 10.0), Err("Choose a .csv file.".to_owned()));
    assert_eq!(check_csv_file("classes.csv", 0.0), Err("The selected file is empty.".to_owned()));
    assert!(check_csv_file("classes.csv", MAX_CSV_BYTES + 1.0).is_err());
}

#[test]
fn summarize_upload_reports_rejections() {
    let clean = CsvUploadResult { created: 1, errors: Vec::new() };
    let banner = summarize_upload(&clean);
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(banner.message, "Imported 1 row.");

    let partial = CsvUploadResult {
        created: 4,
        errors: vec![CsvRowError { row: 3, message: "code already exists".to_owned() }],
    };
    let banner = summarize_upload(&partial);
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.message, "Imported 4 rows; 1 rejected.");
}
