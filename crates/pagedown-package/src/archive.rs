//! Packaging rendered documents into the final artifact.

use crate::naming::{archive_file_name, entry_name, numbered, single_file_name};
use crate::{Artifact, ArtifactKind, PackEntry};
use log::{debug, warn};
use pagedown_core::{PagedownError, Result};
use std::collections::HashSet;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn zip_error(e: zip::result::ZipError) -> PagedownError {
    PagedownError::Package(e.to_string())
}

/// Reserve a unique entry name, numbering repeats.
fn unique_name(name: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(name.clone()) {
        return name;
    }

    let mut n = 2;
    loop {
        let candidate = numbered(&name, n);
        if taken.insert(candidate.clone()) {
            warn!("entry name {} is already used; writing {}", name, candidate);
            return candidate;
        }
        n += 1;
    }
}

/// Build the final artifact.
///
/// One entry is passed through unchanged. Several entries become a ZIP
/// archive named after `identifier`; entries whose document is missing are
/// left out with a warning, so an archive may hold fewer documents than
/// were requested.
pub fn pack(entries: &[PackEntry], identifier: &str, compression_level: u32) -> Result<Artifact> {
    match entries {
        [] => Err(PagedownError::Package("no documents to pack".into())),
        [entry] => pack_single(entry),
        _ => pack_archive(entries, identifier, compression_level),
    }
}

fn pack_single(entry: &PackEntry) -> Result<Artifact> {
    let bytes = entry.document.clone().ok_or_else(|| {
        PagedownError::Package(format!("{} has no rendered document", entry.output_name))
    })?;
    let file_name = single_file_name(&entry.output_name);

    Ok(Artifact {
        entries: vec![file_name.clone()],
        file_name,
        bytes,
        kind: ArtifactKind::Single,
    })
}

fn pack_archive(
    entries: &[PackEntry],
    identifier: &str,
    compression_level: u32,
) -> Result<Artifact> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(i64::from(compression_level.min(9))));

    let mut taken = HashSet::new();
    let mut names = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(document) = &entry.document else {
            warn!(
                "{}: no rendered document, leaving it out of the archive",
                entry.output_name
            );
            continue;
        };

        let name = unique_name(entry_name(&entry.output_name), &mut taken);
        debug!("adding {} as {} ({} bytes)", entry.output_name, name, document.len());
        zip.start_file(name.as_str(), options).map_err(zip_error)?;
        zip.write_all(document)?;
        names.push(name);
    }

    let bytes = zip.finish().map_err(zip_error)?.into_inner();
    if names.len() < entries.len() {
        warn!("archive holds {} of {} documents", names.len(), entries.len());
    }

    Ok(Artifact {
        file_name: archive_file_name(identifier),
        bytes,
        kind: ArtifactKind::Archive,
        entries: names,
    })
}
