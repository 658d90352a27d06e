use crate::error::SplitError;
use crate::page_range::PageRange;
use anyhow::{Context, Result};
use lopdf::{Document, ObjectId};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const PDF_EXTENSION: &str = ".pdf";

pub struct PdfDocument {
    pub doc: Document,
    pub path: PathBuf,
}

impl PdfDocument {
    /// Open a PDF after checking that the path names an existing `.pdf` file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        check_input_path(path)?;

        let doc = Document::load(path)
            .with_context(|| format!("Failed to open PDF: {}", path.display()))?;
        log::debug!(
            "loaded {} ({} pages)",
            path.display(),
            doc.get_pages().len()
        );

        Ok(PdfDocument {
            doc,
            path: path.to_path_buf(),
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    #[allow(dead_code)]
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Object ID of the page at a zero-based index
    #[allow(dead_code)]
    pub fn page_id(&self, index: u32) -> Option<ObjectId> {
        self.doc.get_pages().get(&(index + 1)).copied()
    }

    /// Input file name without its `.pdf` extension
    pub fn base_name(&self) -> String {
        base_name(&self.path)
    }

    /// `<base>-pages`, next to the input file
    pub fn output_dir(&self) -> PathBuf {
        let dir = format!("{}-pages", self.base_name());
        match self.path.parent() {
            Some(parent) => parent.join(dir),
            None => PathBuf::from(dir),
        }
    }

    /// Build a new document holding only the pages of `range`, in order.
    ///
    /// Page content streams are carried over untouched; objects only the dropped pages
    /// referenced are pruned.
    pub fn extract_range(&self, range: PageRange) -> Result<Document> {
        let pages = self.doc.get_pages();
        let total = pages.len() as u32;
        if range.start >= range.end {
            anyhow::bail!("Empty page range {}", range);
        }

        let keep = (range.start + 1..=range.end)
            .map(|num| {
                pages
                    .get(&num)
                    .copied()
                    .with_context(|| format!("Page {} is out of range (1-{})", num, total))
            })
            .collect::<Result<HashSet<ObjectId>>>()?;

        let pages_to_delete: Vec<u32> = pages
            .iter()
            .filter(|(_, id)| !keep.contains(*id))
            .map(|(num, _)| *num)
            .collect();

        let mut new_doc = self.doc.clone();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }
        new_doc.prune_objects();

        Ok(new_doc)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}

fn check_input_path(path: &Path) -> Result<(), SplitError> {
    let is_pdf = path.to_string_lossy().ends_with(PDF_EXTENSION);
    if is_pdf && path.exists() {
        Ok(())
    } else {
        Err(SplitError::InvalidInputFile(path.to_path_buf()))
    }
}

fn base_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(PDF_EXTENSION) {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}
