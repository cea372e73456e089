//! Rendering of the search-results table and the form.

use std::fmt::Write as _;

use recommend_domain::recommendation::Recommendation;

use crate::domain::field::FormFields;

/// Column header labels and HTML widths, in display order.
pub const COLUMNS: [(&str, &str); 5] = [
    ("ID", "20%"),
    ("Product ID", "30%"),
    ("Recommended ID", "30%"),
    ("Recommendation Type", "30%"),
    ("Likes", "30%"),
];

/// Cell text for one row: id, product_id, recommended_product_id,
/// recommendation_type, likes.
pub fn row_cells(record: &Recommendation) -> [String; 5] {
    [
        record.id.to_string(),
        record.product_id.to_string(),
        record.recommended_product_id.to_string(),
        record.recommendation_type.clone(),
        record.likes.to_string(),
    ]
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// The results table as HTML. No rows renders a header-only table.
pub fn results_table_html(rows: &[Recommendation]) -> String {
    let mut html = String::from(r#"<table class="table-striped"><tr>"#);
    for (label, width) in COLUMNS {
        let _ = write!(html, r#"<th style="width:{width}">{label}</th>"#);
    }
    html.push_str("</tr>");
    for record in rows {
        html.push_str("<tr>");
        for cell in row_cells(record) {
            let _ = write!(html, "<td>{}</td>", escape_html(&cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
    html
}

/// The results table as aligned plain text: header, rule, one line per row.
pub fn results_table_text(rows: &[Recommendation]) -> String {
    let cells: Vec<[String; 5]> = rows.iter().map(row_cells).collect();
    let mut widths = COLUMNS.map(|(label, _)| label.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |values: [&str; 5]| {
        let mut s = String::new();
        for (i, (value, width)) in values.iter().zip(widths).enumerate() {
            if i > 0 {
                s.push_str("  ");
            }
            let _ = write!(s, "{value:<width$}");
        }
        s.trim_end().to_owned()
    };

    let mut out = line(COLUMNS.map(|(label, _)| label));
    out.push('\n');
    out.push_str(&line(widths.map(|w| "-".repeat(w)).each_ref().map(String::as_str)));
    for row in &cells {
        out.push('\n');
        out.push_str(&line(row.each_ref().map(String::as_str)));
    }
    out
}

/// One `key: value` line per form field.
pub fn form_text(fields: &FormFields) -> String {
    fields
        .iter()
        .map(|(field, value)| format!("{}: {value}", field.key()))
        .collect::<Vec<_>>()
        .join("\n")
}
