use crate::conf::write_default_config;
use std::path::PathBuf;

pub fn init(path: PathBuf, force: bool) -> anyhow::Result<()> {
    write_default_config(&path, force)?;

    println!("✔ Wrote {}", path.display());
    println!("Next: set `input`, then run `logwatch --config {}`", path.display());

    Ok(())
}
