use serde_json::{json, Value};

pub const INFO_HEADERS: [&str; 4] = ["Number", "Extension", "Location", "Type"];
pub const LEGACY_INFO_HEADERS: [&str; 3] = ["Number", "Type", "Primary"];
pub const PHONE_HEADERS: [&str; 3] = ["Model", "MAC", "Status"];
pub const QUEUE_HEADERS: [&str; 5] = ["Name", "Location", "Extension", "Joined", "Id"];

/// Lay rows out in left-aligned columns under `headers`.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut out = vec![
        line(headers, &widths),
        line(&rule.iter().map(String::as_str).collect::<Vec<_>>(), &widths),
    ];
    for row in rows {
        out.push(line(&row.iter().map(String::as_str).collect::<Vec<_>>(), &widths));
    }
    out.join("\n")
}

fn line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Rows as JSON objects keyed by header.
pub fn json_rows(headers: &[&str], rows: &[Vec<String>]) -> Value {
    rows.iter()
        .map(|row| {
            headers
                .iter()
                .zip(row)
                .map(|(header, cell)| (header.to_lowercase(), json!(cell)))
                .collect::<serde_json::Map<_, _>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns() {
        let rows = vec![
            vec!["Support".to_string(), "HQ".to_string()],
            vec!["Billing Escalations".to_string(), "Branch".to_string()],
        ];
        let rendered = table(&["Name", "Location"], &rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name                 Location");
        assert_eq!(lines[2], "Support              HQ");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn json_rows_uses_lowercase_headers() {
        let rows = vec![vec!["Cisco 8851".to_string(), "AA:BB".to_string(), "".to_string()]];
        let value = json_rows(&PHONE_HEADERS, &rows);
        assert_eq!(value, json!([{"model": "Cisco 8851", "mac": "AA:BB", "status": ""}]));
    }
}
