use crate::error::SplitError;
use std::fmt;

/// A zero-based, half-open interval of page indices.
///
/// Values handed out by [`parse_page_ranges`] and [`PageRange::each_page`] always satisfy
/// `start < end <= total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

/// A range exactly as the user typed it: one-based and inclusive.
///
/// Page numbers are kept as `u64` so that an oversized number still reaches validation
/// and is reported against the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RangeSpec {
    first: u64,
    last: u64,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Self {
        PageRange { start, end }
    }

    /// One single-page range per page, in page order.
    pub fn each_page(total_pages: u32) -> Vec<PageRange> {
        (0..total_pages).map(|i| PageRange::new(i, i + 1)).collect()
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_single_page(&self) -> bool {
        self.start + 1 == self.end
    }

    /// File name segment: "4" for a single page, "1-2" otherwise.
    pub fn label(&self) -> String {
        if self.is_single_page() {
            (self.start + 1).to_string()
        } else {
            format!("{}-{}", self.start + 1, self.end)
        }
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl RangeSpec {
    /// Parse a single token like "4" or "1 - 5"
    fn parse(token: &str) -> Result<Self, SplitError> {
        let parts: Vec<&str> = token.split('-').collect();
        if let [first, last] = parts[..] {
            Ok(RangeSpec {
                first: parse_page_number(first)?,
                last: parse_page_number(last)?,
            })
        } else {
            let page = parse_page_number(token)?;
            Ok(RangeSpec {
                first: page,
                last: page,
            })
        }
    }

    fn validate(self, total_pages: u32) -> Result<PageRange, SplitError> {
        let RangeSpec { first, last } = self;

        if first == 0 || last == 0 {
            return Err(SplitError::ZeroPage { first, last });
        }

        if first > last {
            return Err(SplitError::InvalidRange { first, last });
        }

        if last > u64::from(total_pages) {
            return Err(SplitError::OutOfBounds {
                first,
                last,
                total: total_pages,
            });
        }

        // last <= total_pages, so both fit in u32
        Ok(PageRange::new((first - 1) as u32, last as u32))
    }
}

fn parse_page_number(s: &str) -> Result<u64, SplitError> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SplitError::InvalidNumber(s.to_string()));
    }
    // All digits, so the only possible failure is overflow
    Ok(s.parse::<u64>().unwrap_or(u64::MAX))
}

/// Parse a comma-separated list like "1-2,4" and check every range against the document.
///
/// All tokens are parsed before any range is validated, so a malformed number is reported
/// ahead of a range problem earlier in the list.
pub fn parse_page_ranges(s: &str, total_pages: u32) -> Result<Vec<PageRange>, SplitError> {
    let specs = s
        .split(',')
        .map(RangeSpec::parse)
        .collect::<Result<Vec<_>, _>>()?;

    specs
        .into_iter()
        .map(|spec| spec.validate(total_pages))
        .collect()
}

/// Ranges to split on: the parsed list if one was given, otherwise every page on its own.
pub fn resolve_page_ranges(
    spec: Option<&str>,
    total_pages: u32,
) -> Result<Vec<PageRange>, SplitError> {
    match spec {
        Some(s) => parse_page_ranges(s, total_pages),
        None => Ok(PageRange::each_page(total_pages)),
    }
}
