//! Rendering of the component state.
//!
//! [`render`] is a pure function of [`ListState`]; the resulting [`View`]
//! can be inspected directly or printed as a plain-text table.

use std::fmt;

use common::{StudentId, StudentRecord};

use crate::state::ListState;

/// Shown in place of an absent optional field.
pub const PLACEHOLDER: &str = "-";

pub const LOADING_TEXT: &str = "Loading students...";
pub const TABLE_TITLE: &str = "Daftar Siswa";
pub const COLUMN_HEADERS: [&str; 6] = [
    "Kode",
    "Nama",
    "Alamat",
    "Tanggal Lahir",
    "Jurusan",
    "Aksi",
];

const DELETE_LABEL: &str = "Hapus";
const DELETING_LABEL: &str = "Menghapus...";

/// What the component shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Error(String),
    Table(StudentTable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentTable {
    pub rows: Vec<StudentRow>,
}

/// One table row, cells already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub id: StudentId,
    pub code: String,
    pub name: String,
    pub address: String,
    pub birth_date: String,
    pub major: String,
    pub action: DeleteControl,
}

/// The delete button in a row's action cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteControl {
    pub label: &'static str,
    pub disabled: bool,
}

impl DeleteControl {
    fn for_row(deleting: bool) -> Self {
        Self {
            label: if deleting { DELETING_LABEL } else { DELETE_LABEL },
            disabled: deleting,
        }
    }
}

/// Renders the current state. Loading wins over error, error over the table.
pub fn render(state: &ListState) -> View {
    if state.loading {
        return View::Loading;
    }
    if let Some(message) = &state.error {
        return View::Error(message.clone());
    }

    let rows = state
        .students
        .iter()
        .map(|student| render_row(student, state.is_deleting(student.id)))
        .collect();

    View::Table(StudentTable { rows })
}

fn render_row(student: &StudentRecord, deleting: bool) -> StudentRow {
    StudentRow {
        id: student.id,
        code: student.code.clone(),
        name: student.name.clone(),
        address: or_placeholder(student.address.as_deref()),
        birth_date: or_placeholder(student.birth_date.as_deref()),
        major: or_placeholder(student.major.as_deref()),
        action: DeleteControl::for_row(deleting),
    }
}

// Empty strings count as absent.
fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

impl StudentRow {
    fn cells(&self) -> [String; 6] {
        [
            self.code.clone(),
            self.name.clone(),
            self.address.clone(),
            self.birth_date.clone(),
            self.major.clone(),
            format!("{} ({})", self.action.label, self.id),
        ]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Loading => f.write_str(LOADING_TEXT),
            View::Error(message) => f.write_str(message),
            View::Table(table) => write!(f, "{table}"),
        }
    }
}

impl fmt::Display for StudentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<[String; 6]> = self.rows.iter().map(StudentRow::cells).collect();

        let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(f, "{TABLE_TITLE}")?;
        write_line(f, &COLUMN_HEADERS, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(f, &rule, &widths)?;
        for row in &rows {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cells: &[S],
    widths: &[usize],
) -> fmt::Result {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let cell = cell.as_ref();
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    writeln!(f, "| {} |", line.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(students: Vec<StudentRecord>) -> ListState {
        ListState {
            students,
            loading: false,
            ..ListState::new()
        }
    }

    fn table(view: View) -> StudentTable {
        match view {
            View::Table(table) => table,
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn test_loading_takes_precedence() {
        let mut state = loaded(vec![StudentRecord::new(1, "S01", "Ana")]);
        state.loading = true;
        state.error = Some("boom".to_string());

        assert_eq!(render(&state), View::Loading);
        assert_eq!(render(&state).to_string(), LOADING_TEXT);
    }

    #[test]
    fn test_error_replaces_table() {
        let mut state = loaded(vec![StudentRecord::new(1, "S01", "Ana")]);
        state.error = Some("Failed to fetch students".to_string());

        let view = render(&state);
        assert_eq!(view, View::Error("Failed to fetch students".to_string()));
        assert_eq!(view.to_string(), "Failed to fetch students");
    }

    #[test]
    fn test_absent_optionals_render_placeholder() {
        let state = loaded(vec![StudentRecord::new(1, "S01", "Ana").with_major("IPA")]);

        let table = table(render(&state));
        assert_eq!(table.rows.len(), 1);

        let row = &table.rows[0];
        assert_eq!(row.code, "S01");
        assert_eq!(row.name, "Ana");
        assert_eq!(row.address, "-");
        assert_eq!(row.birth_date, "-");
        assert_eq!(row.major, "IPA");
        assert_eq!(
            row.action,
            DeleteControl {
                label: "Hapus",
                disabled: false
            }
        );
    }

    #[test]
    fn test_empty_optional_renders_placeholder() {
        let state = loaded(vec![
            StudentRecord::new(1, "S01", "Ana")
                .with_address("")
                .with_birth_date("2008-01-02"),
        ]);

        let rows = table(render(&state)).rows;
        let row = &rows[0];
        assert_eq!(row.address, "-");
        assert_eq!(row.birth_date, "2008-01-02");
    }

    #[test]
    fn test_rows_keep_collection_order() {
        let state = loaded(vec![
            StudentRecord::new(9, "S09", "Zaki"),
            StudentRecord::new(2, "S02", "Budi"),
            StudentRecord::new(5, "S05", "Eka"),
        ]);

        let ids: Vec<i64> = table(render(&state))
            .rows
            .iter()
            .map(|r| r.id.as_i64())
            .collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn test_only_deleting_row_is_disabled() {
        let mut state = loaded(vec![
            StudentRecord::new(1, "S01", "Ana"),
            StudentRecord::new(2, "S02", "Budi"),
        ]);
        state.deleting.insert(StudentId::new(2));

        let rows = table(render(&state)).rows;
        assert!(!rows[0].action.disabled);
        assert_eq!(rows[0].action.label, "Hapus");
        assert!(rows[1].action.disabled);
        assert_eq!(rows[1].action.label, "Menghapus...");
    }

    #[test]
    fn test_empty_collection_renders_empty_table() {
        let view = render(&loaded(Vec::new()));
        assert_eq!(table(view.clone()).rows.len(), 0);

        let text = view.to_string();
        assert!(text.starts_with(TABLE_TITLE));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_text_table_aligns_columns() {
        let state = loaded(vec![
            StudentRecord::new(1, "S01", "Ana")
                .with_address("Jl. Merdeka 1")
                .with_major("IPA"),
        ]);

        let text = render(&state).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Daftar Siswa");
        assert_eq!(
            lines[1],
            "| Kode | Nama | Alamat        | Tanggal Lahir | Jurusan | Aksi      |"
        );
        assert_eq!(
            lines[3],
            "| S01  | Ana  | Jl. Merdeka 1 | -             | IPA     | Hapus (1) |"
        );
        assert_eq!(lines[1].len(), lines[2].len());
    }
}
