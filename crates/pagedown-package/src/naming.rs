//! Download and archive entry names.
//!
//! Names are derived from the repository path of the source file. Dots are
//! replaced with underscores so the original extension stays visible in
//! front of the `.pdf` suffix.

/// Suffix of every rendered document.
pub const PDF_EXTENSION: &str = ".pdf";

/// Suffix of the archive's download name.
pub const ARCHIVE_SUFFIX: &str = "-documentation.zip";

/// Used when a path has no usable segment.
const UNNAMED: &str = "document";

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn pdf_name(stem: &str) -> String {
    format!("{}{}", stem.replace('.', "_"), PDF_EXTENSION)
}

/// Download name of a single document: the file name of `path`.
///
/// # Example
///
/// ```
/// use pagedown_package::single_file_name;
/// assert_eq!(single_file_name("src/lib/utils.ts"), "utils_ts.pdf");
/// ```
pub fn single_file_name(path: &str) -> String {
    let last = segments(path).last().copied().unwrap_or(UNNAMED);
    pdf_name(last)
}

/// Name of a document inside an archive.
///
/// Paths with a parent directory keep it, joined to the file name with an
/// underscore, so `src/components/App.tsx` becomes
/// `components_App_tsx.pdf`.
pub fn entry_name(path: &str) -> String {
    match segments(path).as_slice() {
        [] => pdf_name(UNNAMED),
        [file] => pdf_name(file),
        [.., parent, file] => pdf_name(&format!("{}_{}", parent, file)),
    }
}

/// Identifier for an archive built from one branch of a repository.
pub fn archive_identifier(repository: &str, branch: &str) -> String {
    format!("{}-{}", repository, branch)
}

/// Download name of an archive.
pub fn archive_file_name(identifier: &str) -> String {
    format!("{}{}", identifier, ARCHIVE_SUFFIX)
}

/// Append `_2`, `_3`, ... before the extension of `name`.
pub(crate) fn numbered(name: &str, n: usize) -> String {
    match name.strip_suffix(PDF_EXTENSION) {
        Some(stem) => format!("{}_{}{}", stem, n, PDF_EXTENSION),
        None => format!("{}_{}", name, n),
    }
}
