//! Remote object-store locations

/// Scheme prefix of locations already hosted in the object store
pub const REMOTE_PREFIX: &str = "s3://";

/// True if `value` names a remote object rather than a local path.
///
/// Remote values are never rewritten and never loaded as nested templates.
pub fn is_remote(value: &str) -> bool {
    value.starts_with(REMOTE_PREFIX)
}
