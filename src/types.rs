use std::ffi::OsString;
use std::fmt;

/// A single rename computed for an entry of the target directory.
///
/// Both names are bare file names relative to the directory being processed,
/// never full paths. Names need not be valid UTF-8; the `Display` form, which
/// is the report line printed for every successful rename, shows them lossily.
///
/// # Examples
///
/// ```rust
/// use json_unprefix::types::Rename;
///
/// let r = Rename {
///     from: "49-Smile.json".into(),
///     to: "smile.json".into(),
/// };
/// assert_eq!(r.to_string(), "Renamed: 49-Smile.json → smile.json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    /// The entry's current file name.
    pub from: OsString,
    /// The file name the entry is moved to.
    pub to: OsString,
}

impl fmt::Display for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Renamed: {} → {}",
            self.from.to_string_lossy(),
            self.to.to_string_lossy()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_report_line() {
        let r = Rename {
            from: "007-James_Bond.json".into(),
            to: "james_bond.json".into(),
        };
        assert_eq!(
            format!("{r}"),
            "Renamed: 007-James_Bond.json → james_bond.json"
        );
    }
}
