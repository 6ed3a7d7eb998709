//! Plain-text and JSON drawing of a [`View`].

use crate::error::ConsoleResult;
use hcrm_core::constants::ACTIONS_COLUMN;
use hcrm_core::{
    FieldKind, FilterView, FormMode, FormView, InputView, ScreenView, TableScreenView, TableView,
    View,
};
use std::fmt::Write as _;

/// How a session prints views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render(view: &View, format: OutputFormat) -> ConsoleResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => render_json(view),
    }
}

pub fn render_json(view: &View) -> ConsoleResult<String> {
    let mut out = serde_json::to_string_pretty(view)?;
    out.push('\n');
    Ok(out)
}

pub fn render_text(view: &View) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", view.title);
    for link in &view.nav {
        let marker = if link.active { '>' } else { ' ' };
        let _ = writeln!(out, " {marker} {:<16} {}", link.label, link.path);
    }
    out.push('\n');

    match &view.screen {
        ScreenView::Welcome { heading } => {
            let _ = writeln!(out, "{heading}");
        }
        ScreenView::Table(screen) => write_table_screen(&mut out, screen),
        // Unmatched paths leave the main area blank.
        ScreenView::NotFound { .. } => {}
    }
    out
}

fn write_table_screen(out: &mut String, screen: &TableScreenView) {
    let _ = writeln!(out, "{}", screen.heading);
    out.push('\n');
    write_form(out, &screen.form);
    if let Some(filter) = &screen.filter {
        out.push('\n');
        write_filter(out, filter);
    }
    out.push('\n');
    write_table(out, &screen.table);
}

fn write_form(out: &mut String, form: &FormView) {
    match form.mode {
        FormMode::Creating => {
            let _ = writeln!(out, "{}", form.heading);
        }
        FormMode::Editing(id) => {
            let _ = writeln!(out, "{} (#{id})", form.heading);
        }
    }
    let width = form
        .inputs
        .iter()
        .map(|input| input.label.chars().count() + input.name.chars().count() + 3)
        .max()
        .unwrap_or(0);
    for input in &form.inputs {
        let label = format!("{} [{}]", input.label, input.name);
        let _ = writeln!(out, "  {label:<width$} : {}", input_text(input));
    }
    let _ = writeln!(out, "  [{}]", form.submit_label);
}

fn input_text(input: &InputView) -> String {
    match input.kind {
        FieldKind::PatientSelect => input
            .options
            .iter()
            .find(|option| option.value == input.value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| input.value.clone()),
        FieldKind::TextArea => input.value.replace('\n', " / "),
        _ => input.value.clone(),
    }
}

fn write_filter(out: &mut String, filter: &FilterView) {
    let selected = filter.selected.to_string();
    let _ = writeln!(out, "{}", filter.heading);
    for option in &filter.options {
        let marker = if option.value == selected { '*' } else { ' ' };
        let _ = writeln!(out, "  ({marker}) {:<4} {}", option.value, option.label);
    }
}

fn write_table(out: &mut String, table: &TableView) {
    let mut header: Vec<String> = vec!["#".to_owned()];
    header.extend(table.columns.iter().cloned());
    header.push(ACTIONS_COLUMN.to_owned());

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![row.id.to_string()];
            cells.extend(row.cells.iter().map(|cell| cell.replace('\n', " / ")));
            cells.push(format!("edit {0} | delete {0}", row.id));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths);
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
