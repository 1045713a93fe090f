use std::fs;

use mlcq_sample_fetcher::domain::SampleId;
use mlcq_sample_fetcher::journal::DownloadLog;

#[test]
fn log_lines_have_timestamp_level_and_message() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("download_log.txt");
    let id: SampleId = "6503132".parse().unwrap();

    let mut log = DownloadLog::open(&path).unwrap();
    log.success(&id, "https://raw.githubusercontent.com/a/b/c/D.java")
        .unwrap();
    log.failure(&id, "https://raw.githubusercontent.com/a/b/c/D.java", 404)
        .unwrap();
    log.invalid_url(&id, "https://example.com/not-a-blob")
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);

    // <date> <time> <LEVEL> <message>
    for line in &lines {
        let mut parts = line.splitn(4, ' ');
        let date = parts.next().unwrap();
        let time = parts.next().unwrap();
        let level = parts.next().unwrap();
        assert_eq!(date.len(), 10);
        assert!(time.contains(':'));
        assert!(level == "INFO" || level == "ERROR");
        assert!(parts.next().is_some());
    }

    assert!(lines[0].ends_with(
        "SUCCESS\tsample_id=6503132\traw_url=https://raw.githubusercontent.com/a/b/c/D.java"
    ));
    assert!(lines[1].ends_with(
        "FAIL\tsample_id=6503132\traw_url=https://raw.githubusercontent.com/a/b/c/D.java\tstatus_code=404"
    ));
    assert!(
        lines[2].ends_with("INVALID_URL\tsample_id=6503132\turl=https://example.com/not-a-blob")
    );
}

#[test]
fn log_appends_across_opens() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("download_log.txt");
    let id: SampleId = "1".parse().unwrap();

    {
        let mut log = DownloadLog::open(&path).unwrap();
        log.success(&id, "https://raw.githubusercontent.com/a/b/c/D.java")
            .unwrap();
    }
    {
        let mut log = DownloadLog::open(&path).unwrap();
        log.invalid_url(&id, "bad").unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
}
