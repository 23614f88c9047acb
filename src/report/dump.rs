use crate::error::Result;
use crate::model::RepositoryCommit;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_commits_json(commits: &[RepositoryCommit], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, commits)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
