//! Page header: breadcrumb row plus page title.

use std::fmt;

use itertools::Itertools;

use crate::domain::{BreadcrumbTrail, TrailSegment};

/// Rendered page header. Without a trail only the title is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub title: &'a str,
    pub segments: Vec<TrailSegment<'a>>,
    pub separator: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(trail: &'a BreadcrumbTrail, title: &'a str, separator: &'a str) -> Self {
        Self {
            title,
            segments: trail.segments(),
            separator,
        }
    }

    pub fn has_breadcrumb(&self) -> bool {
        !self.segments.is_empty()
    }
}

/// Header text for a trail: breadcrumb row, then the page title.
pub fn render_header(trail: &BreadcrumbTrail, title: &str, separator: &str) -> String {
    Header::new(trail, title, separator).to_string()
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_breadcrumb() {
            let row = self.segments.iter().map(|s| s.label).join(self.separator);
            writeln!(f, "{row}")?;
        }
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_trail_when_rendering_then_only_title() {
        let trail = BreadcrumbTrail::default();
        let header = Header::new(&trail, "Halaman Baru", " / ");
        assert!(!header.has_breadcrumb());
        assert_eq!(header.to_string(), "Halaman Baru");
        assert_eq!(render_header(&trail, "Halaman Baru", " / "), "Halaman Baru");
    }
}
