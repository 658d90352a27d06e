use crate::page_range::{resolve_page_ranges, PageRange};
use crate::pdf::document::PDF_EXTENSION;
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct SplitOutput {
    pub output_dir: PathBuf,
    /// Files written, in range order
    pub files: Vec<PathBuf>,
}

/// Split `input` into one file per range.
///
/// Ranges are parsed and checked against the document before anything touches the disk.
pub fn split<P: AsRef<Path>>(input: P, ranges: Option<&str>) -> Result<SplitOutput> {
    let doc = PdfDocument::open(input)?;
    let ranges = resolve_page_ranges(ranges, doc.page_count())?;
    log::debug!("splitting on ranges {:?}", ranges);

    let output_dir = doc.output_dir();
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let base_name = doc.base_name();
    let mut files = Vec::with_capacity(ranges.len());
    for range in ranges {
        let output_path = output_dir.join(output_file_name(&base_name, range));

        let mut new_doc = doc.extract_range(range)?;
        PdfDocument::save(&mut new_doc, &output_path)?;
        log::info!(
            "wrote {} page(s) to {}",
            range.len(),
            output_path.display()
        );

        files.push(output_path);
    }

    Ok(SplitOutput { output_dir, files })
}

pub fn run<P: AsRef<Path>>(input: P, ranges: Option<&str>) -> Result<()> {
    let output = split(input, ranges)?;

    println!(
        "PDF successfully split into {} file(s) in {}",
        output.files.len(),
        output.output_dir.display()
    );

    Ok(())
}

/// `<base>_<pages>.pdf`, e.g. `doc_1-2.pdf` or `doc_4.pdf`
fn output_file_name(base_name: &str, range: PageRange) -> String {
    format!("{}_{}{}", base_name, range.label(), PDF_EXTENSION)
}
