use std::fs;
use std::io::Write;
use std::path::PathBuf;

use org_record_sort::error::LoadError;
use org_record_sort::loader::Loader;
use org_record_sort::malformed_rows::MalformedRows;

mod common;

#[test]
fn test_load_preserves_file_order() -> Result<(), anyhow::Error> {
    let loader = Loader::new(PathBuf::from("./tests/fixtures/organizations-10.csv"));
    let records = loader.load()?;
    assert_eq!(records.len(), 10);
    assert_eq!(
        common::indexes(&records),
        vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]
    );
    let first = &records[0];
    assert_eq!(first.org_id(), "FAB0d41d5b5d22c");
    assert_eq!(first.name(), "Ferrell LLC");
    assert_eq!(first.website(), "https://price.net/");
    assert_eq!(first.country(), "Papua New Guinea");
    assert_eq!(first.description(), "Horizontal empowering knowledgebase");
    assert_eq!(first.founded(), "1990");
    assert_eq!(first.industry(), "Plastics");
    assert_eq!(first.num_employees(), "3498");
    Ok(())
}

#[test]
fn test_load_quoted_field() -> Result<(), anyhow::Error> {
    let records = Loader::new(PathBuf::from("./tests/fixtures/organizations-10.csv")).load()?;
    assert_eq!(records[1].name(), "Mckinney, Riley and Day");
    assert_eq!(records[1].website(), "http://www.hall-buchanan.info/");
    Ok(())
}

#[test]
fn test_load_keeps_fields_verbatim() -> Result<(), anyhow::Error> {
    let data = "h1,h2,h3,h4,h5,h6,h7,h8,h9\n\
                 007 , id , padded name ,,\"multi\nline\",\"say \"\"hi\"\"\",19xx,,lots\n";
    let records = Loader::new(PathBuf::from("memory")).load_from_reader(data.as_bytes())?;
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.index(), "007 ");
    assert_eq!(record.org_id(), " id ");
    assert_eq!(record.name(), " padded name ");
    assert_eq!(record.website(), "");
    assert_eq!(record.country(), "multi\nline");
    assert_eq!(record.description(), "say \"hi\"");
    assert_eq!(record.founded(), "19xx");
    assert_eq!(record.industry(), "");
    assert_eq!(record.num_employees(), "lots");
    Ok(())
}

#[test]
fn test_header_is_not_validated() -> Result<(), anyhow::Error> {
    let data = "just one header column\n1,o1,Acme,a.com,US,d,1999,Tech,10\n";
    let records = Loader::new(PathBuf::from("memory")).load_from_reader(data.as_bytes())?;
    assert_eq!(common::names(&records), vec!["Acme"]);
    Ok(())
}

#[test]
fn test_header_only() -> Result<(), anyhow::Error> {
    let records = Loader::new(PathBuf::from("./tests/fixtures/header-only.csv")).load()?;
    assert!(records.is_empty());
    Ok(())
}

#[test]
fn test_empty_file() -> Result<(), anyhow::Error> {
    let file = tempfile::NamedTempFile::new()?;
    let records = Loader::new(file.path().to_path_buf()).load()?;
    assert!(records.is_empty());
    Ok(())
}

#[test]
fn test_missing_file() {
    let path = PathBuf::from("./tests/fixtures/does-not-exist.csv");
    let result = Loader::new(path.clone()).load();
    match result {
        Err(LoadError::Open { path: error_path, .. }) => assert_eq!(error_path, path),
        other => panic!("expected an open error, got: {:?}", other),
    }
}

#[test]
fn test_malformed_truncates_by_default() -> Result<(), anyhow::Error> {
    let loader = Loader::new(PathBuf::from("./tests/fixtures/malformed.csv"));
    assert_eq!(loader.malformed_rows(), MalformedRows::Truncate);
    let records = loader.load()?;
    assert_eq!(common::names(&records), vec!["Charlie", "Alice"]);
    Ok(())
}

#[test]
fn test_malformed_skip() -> Result<(), anyhow::Error> {
    let loader = Loader::new(PathBuf::from("./tests/fixtures/malformed.csv"))
        .with_malformed_rows(MalformedRows::Skip);
    let records = loader.load()?;
    assert_eq!(common::names(&records), vec!["Charlie", "Alice", "Dave", "Eve"]);
    Ok(())
}

#[test]
fn test_malformed_fail() {
    let loader = Loader::new(PathBuf::from("./tests/fixtures/malformed.csv"))
        .with_malformed_rows(MalformedRows::Fail);
    match loader.load() {
        Err(LoadError::Malformed { line, reason }) => {
            assert_eq!(line, 4);
            assert_eq!(reason, "expected 9 fields, found 4");
        }
        other => panic!("expected a malformed row error, got: {:?}", other),
    }
}

#[test]
fn test_too_many_fields_is_malformed() -> Result<(), anyhow::Error> {
    common::setup();
    let path = common::temp_file_name("./target/results/");
    let mut file = fs::File::create(&path)?;
    writeln!(file, "{}", common::HEADER)?;
    writeln!(file, "1,o1,Bravo,b.com,US,d,1999,Tech,10")?;
    writeln!(file, "2,o2,Alpha,a.com,US,d,1999,Tech,10,extra")?;
    writeln!(file, "3,o3,Charlie,c.com,US,d,1999,Tech,10")?;
    drop(file);

    let truncated = Loader::new(path.clone()).load()?;
    assert_eq!(common::names(&truncated), vec!["Bravo"]);

    let skipped = Loader::new(path.clone())
        .with_malformed_rows(MalformedRows::Skip)
        .load()?;
    assert_eq!(common::names(&skipped), vec!["Bravo", "Charlie"]);
    fs::remove_file(path)?;
    Ok(())
}

#[test]
fn test_non_utf8_row_is_kept() -> Result<(), anyhow::Error> {
    let mut data = Vec::new();
    data.extend_from_slice(format!("{}\n", common::HEADER).as_bytes());
    data.extend_from_slice(b"1,o1,Zeta,z.com,FR,d,1990,Food,10\n");
    data.extend_from_slice(b"2,o2,Caf\xE9,c.com,FR,d,1991,Food,10\n");
    data.extend_from_slice(b"3,o3,Alpha,a.com,FR,d,1992,Food,10\n");

    let records = Loader::new(PathBuf::from("memory")).load_from_reader(data.as_slice())?;
    assert_eq!(common::names(&records), vec!["Zeta", "Caf\u{FFFD}", "Alpha"]);
    assert_eq!(records[1].country(), "FR");
    Ok(())
}

#[test]
fn test_bare_quote_is_accepted() -> Result<(), anyhow::Error> {
    let data = "h1,h2,h3,h4,h5,h6,h7,h8,h9\n\
                 1,o1,Joe \"J\" Smith,j.com,US,d,1990,Law,10\n\
                 2,o2,\"Quoted\"tail,q.com,US,d,1991,Law,10\n\
                 3,o3,Plain,p.com,US,d,1992,Law,10\n";
    let records = Loader::new(PathBuf::from("memory")).load_from_reader(data.as_bytes())?;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name(), "Joe \"J\" Smith");
    assert_eq!(records[2].name(), "Plain");
    Ok(())
}
