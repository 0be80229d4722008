pub mod consts;
pub mod fs;
pub mod name;
pub mod types;

mod renamer_impl {
    use crate::fs::rename_entry;
    use crate::name::planned_rename;
    use crate::types::Rename;
    use eyre::{Result, WrapErr};
    use std::io::Write;
    use std::path::Path;

    /// One-shot, non-recursive bulk renamer for a single directory.
    pub struct Renamer {
        pub dir: Box<Path>,
    }

    impl Renamer {
        pub fn new(dir: &Path) -> Self {
            Self {
                dir: dir.to_path_buf().into_boxed_path(),
            }
        }

        /// Rename every `.json` entry whose transformed name differs from its
        /// current one, writing a report line to `out` after each rename.
        ///
        /// The directory is listed once up front and entries are visited in the
        /// order the filesystem returned them. The first failure aborts the pass;
        /// renames already done are kept.
        pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<Rename>> {
            // The listing is fully read before the first rename.
            let names = std::fs::read_dir(&self.dir)
                .wrap_err_with(|| format!("failed to read directory {}", self.dir.display()))?
                .map(|entry| entry.map(|e| e.file_name()))
                .collect::<std::io::Result<Vec<_>>>()
                .wrap_err_with(|| format!("failed to read entry in {}", self.dir.display()))?;
            tracing::debug!(entries = names.len(), "listed target dir");

            let mut done = Vec::new();
            for name in names {
                let Some(rename) = planned_rename(&name) else {
                    tracing::trace!(file = ?name, "skipped");
                    continue;
                };

                rename_entry(&self.dir, &rename)?;
                writeln!(out, "{rename}")?;
                tracing::debug!(from = ?rename.from, to = ?rename.to, "renamed");
                done.push(rename);
            }

            tracing::debug!(count = done.len(), "rename pass finished");
            Ok(done)
        }
    }
}

pub use renamer_impl::*;
