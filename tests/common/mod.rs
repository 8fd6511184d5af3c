use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use data_encoding::HEXLOWER;
use org_record_sort::record::Record;

#[allow(dead_code)]
pub const HEADER: &str = "idx,orgid,name,site,country,desc,founded,industry,emp";

#[allow(dead_code)]
pub fn setup() {
    let results_dir_path = PathBuf::from_str("./target/results/").unwrap();

    if !results_dir_path.exists() {
        fs::create_dir_all(&results_dir_path).unwrap_or_else(|_|
            panic!("Failed to create results directory: {:?}", results_dir_path)
        );
    }
}

#[allow(dead_code)]
pub fn temp_file_name(dir: &str) -> PathBuf {
    let mut result = PathBuf::from(dir);
    let name = HEXLOWER.encode(&rand::random::<[u8; 16]>());
    result.push(name);
    result.set_extension("csv");
    result
}

#[allow(dead_code)]
pub fn record(index: usize, name: &str) -> Record {
    Record::new(
        &index.to_string(),
        &format!("org-{index}"),
        name,
        &format!("https://{}.example.com/", name.to_lowercase().replace(' ', "-")),
        "Norway",
        &format!("description of {name}"),
        "2000",
        "Software",
        "11-50",
    )
}

#[allow(dead_code)]
pub fn random_name(alphabet: &[u8], max_len: usize) -> String {
    let len = 1 + rand::random::<usize>() % max_len;
    (0..len)
        .map(|_| alphabet[rand::random::<usize>() % alphabet.len()] as char)
        .collect()
}

#[allow(dead_code)]
pub fn write_csv(path: &PathBuf, records: &[Record]) -> Result<(), anyhow::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{HEADER}")?;
    for r in records {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            r.index(),
            r.org_id(),
            r.name(),
            r.website(),
            r.country(),
            r.description(),
            r.founded(),
            r.industry(),
            r.num_employees(),
        )?;
    }
    Ok(())
}

#[allow(dead_code)]
pub fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.name()).collect()
}

#[allow(dead_code)]
pub fn indexes(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.index()).collect()
}
