use crate::consts::{PREFIX_RE, TARGET_SUFFIX};
use crate::types::Rename;
use bstr::{ByteSlice, ByteVec};
use std::borrow::Cow;
use std::ffi::OsStr;

/// Whether an entry name is picked up for renaming. The suffix match is exact,
/// so `FOO.JSON` is left alone.
pub fn is_target(file_name: &[u8]) -> bool {
    file_name.ends_with(TARGET_SUFFIX)
}

/// Remove a leading "digits then optional `-`/`_` run" prefix, at most once.
pub fn strip_numeric_prefix(file_name: &[u8]) -> Cow<'_, [u8]> {
    PREFIX_RE.replace(file_name, &b""[..])
}

/// Strip the numeric prefix, then lowercase what is left.
/// "49-Smile.json" -> "smile.json"
///
/// Invalid UTF-8 bytes are carried over unchanged; only the valid runs around
/// them are lowercased.
pub fn transformed_name(file_name: &[u8]) -> Vec<u8> {
    let out = strip_numeric_prefix(file_name).to_lowercase();
    tracing::trace!(original = %file_name.as_bstr(), transformed = %out.as_bstr());
    out
}

/// The rename to perform for `file_name`, or `None` when the entry is filtered
/// out or would keep its name.
pub fn planned_rename(file_name: &OsStr) -> Option<Rename> {
    // Only fails off unix, for names that are not valid UTF-16 either.
    let Some(bytes) = <[u8]>::from_os_str(file_name) else {
        tracing::trace!(file = ?file_name, "skipping name without a byte form");
        return None;
    };
    if !is_target(bytes) {
        return None;
    }
    let to = transformed_name(bytes);
    if to == bytes {
        return None;
    }
    let to = to.into_os_string().ok()?;
    Some(Rename {
        from: file_name.to_owned(),
        to,
    })
}
