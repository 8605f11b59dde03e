use crate::shared::list::parse_datetime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Shown as `DD Mon YYYY`
    Date,
}

/// One table column. `sort` is set for columns the user can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<F: 'static> {
    pub key: &'static str,
    pub title: &'static str,
    pub sort: Option<F>,
    pub kind: ColumnKind,
}

impl<F: Copy> Column<F> {
    pub const fn text(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            sort: None,
            kind: ColumnKind::Text,
        }
    }

    pub const fn sortable(key: &'static str, title: &'static str, field: F) -> Self {
        Self {
            key,
            title,
            sort: Some(field),
            kind: ColumnKind::Text,
        }
    }

    pub const fn date(key: &'static str, title: &'static str, field: F) -> Self {
        Self {
            key,
            title,
            sort: Some(field),
            kind: ColumnKind::Date,
        }
    }

    pub fn display(&self, raw: &str) -> String {
        match self.kind {
            ColumnKind::Text => raw.to_string(),
            ColumnKind::Date => format_date(raw),
        }
    }
}

/// `15 Mar 2024`; unparsable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    parse_datetime(raw)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// A structured filter offered in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    /// Fixed choices; empty means free text
    pub options: &'static [&'static str],
}

impl FilterSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            options: &[],
        }
    }

    pub const fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_render_day_month_year() {
        assert_eq!(format_date("2024-03-05T14:02:26Z"), "05 Mar 2024");
        assert_eq!(format_date("2023-12-01"), "01 Dec 2023");
        assert_eq!(format_date("next week"), "next week");
        assert_eq!(format_date(""), "");
    }
}
