//! Compile-time checks on registry entries, excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

/// Short labels are spliced into generated type and file names, so they
/// must be ASCII alphanumeric without a leading digit. The empty label of
/// the object target passes vacuously.
pub(crate) const fn is_identifier_fragment(label: &str) -> bool {
    let bytes = label.as_bytes();
    if !bytes.is_empty() && bytes[0].is_ascii_digit() {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_alphanumeric() {
            return false;
        }
        i += 1;
    }
    true
}
