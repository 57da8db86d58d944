use rand::Rng;
use std::io::Write;
use tallybot::domain::entry::Entry;
use tempfile::NamedTempFile;

/// Writes a console transcript, one message per line.
pub fn transcript(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create transcript");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write transcript");
    }
    file.flush().expect("Failed to flush transcript");
    file
}

/// Random entries with distinct labels so order can be checked.
pub fn random_entries(count: usize) -> Vec<Entry> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let amount: i64 = rng.gen_range(0..5_000_000);
            Entry::new(format!("item {}", i), amount).expect("label is not empty")
        })
        .collect()
}
