use regex::Regex;

use crate::{parse_unsigned, Result, TscError};

lazy_static::lazy_static! {
    static ref LIST_HEADER: Regex = Regex::new(r"^\[(CE|BL)_TSC\]\s+(\d+)$").unwrap();
}

pub(crate) const EXTENDED_TAG: &str = "[BL_TSC]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatVariant {
    /// `[CE_TSC]` - code, parameter count & types, name and description only.
    Basic,
    /// `[BL_TSC]` - additionally carries the flags and explicit parameter lengths.
    Extended,
}

impl FormatVariant {
    pub fn tag(self) -> &'static str {
        match self {
            FormatVariant::Basic => "[CE_TSC]",
            FormatVariant::Extended => EXTENDED_TAG,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListHeader {
    pub variant: FormatVariant,
    /// Number of records following the header.
    pub count: u32,
}

impl ListHeader {
    /// Consumes lines until the header line is found. Anything in front of it
    /// (comments, blank lines) is skipped.
    pub fn read<'a, I: Iterator<Item = &'a str>>(lines: &mut I) -> Result<Self> {
        for (line_number, line) in lines.by_ref().enumerate() {
            let Some(captures) = LIST_HEADER.captures(line) else {
                continue;
            };
            let variant = if &captures[1] == "BL" { FormatVariant::Extended } else { FormatVariant::Basic };
            let Some(count) = parse_unsigned(&captures[2]) else {
                return Err(TscError::MalformedCount(captures[2].to_string()));
            };
            log::debug!("found {} header in line {}, {} commands", variant.tag(), line_number + 1, count);
            return Ok(Self { variant, count });
        }
        Err(TscError::HeaderNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<ListHeader> {
        ListHeader::read(&mut text.lines())
    }

    #[test]
    fn test_basic_header() {
        let header = read("[CE_TSC] 12").unwrap();
        assert_eq!(header.variant, FormatVariant::Basic);
        assert_eq!(header.count, 12);
    }

    #[test]
    fn test_extended_header_with_tab() {
        let header = read("[BL_TSC]\t3").unwrap();
        assert_eq!(header.variant, FormatVariant::Extended);
        assert_eq!(header.count, 3);
    }

    #[test]
    fn test_skips_leading_lines() {
        let mut lines = "// TSC command list\n\n[BL_TSC]  2\nnext".lines();
        let header = ListHeader::read(&mut lines).unwrap();
        assert_eq!(header.count, 2);
        assert_eq!(lines.next(), Some("next"));
    }

    #[test]
    fn test_crlf() {
        let mut lines = "[CE_TSC] 1\r\nFOO".lines();
        assert_eq!(ListHeader::read(&mut lines).unwrap().count, 1);
        assert_eq!(lines.next(), Some("FOO"));
    }

    #[test]
    fn test_no_header() {
        assert!(matches!(read(""), Err(TscError::HeaderNotFound)));
        assert!(matches!(read("[ce_tsc] 1"), Err(TscError::HeaderNotFound)));
        assert!(matches!(read("[XX_TSC] 1"), Err(TscError::HeaderNotFound)));
        assert!(matches!(read("[BL_TSC]1"), Err(TscError::HeaderNotFound)));
        assert!(matches!(read("[BL_TSC] 1 trailing"), Err(TscError::HeaderNotFound)));
        assert!(matches!(read(" [BL_TSC] 1"), Err(TscError::HeaderNotFound)));
    }

    #[test]
    fn test_malformed_count() {
        assert!(matches!(read("[BL_TSC] 99999999999"), Err(TscError::MalformedCount(c)) if c == "99999999999"));
        // \d accepts non ASCII digits, the count parser doesn't
        assert!(matches!(read("[BL_TSC] \u{0663}"), Err(TscError::MalformedCount(_))));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(read("[CE_TSC] 007").unwrap().count, 7);
    }
}
