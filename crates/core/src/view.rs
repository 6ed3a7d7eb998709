//! Serializable snapshots of what each screen displays.
//!
//! Views are rebuilt from state after every event and carry everything a front
//! end needs to draw the screen: headings, input values of the active buffer,
//! select options and the table rows with patient names already resolved.

use crate::constants::{FILTER_ALL, FILTER_ALL_LABEL, SELECT_PATIENT_LABEL};
use crate::entities::Patient;
use crate::filter::PatientFilter;
use crate::form::{Form, FormMode};
use crate::ledger::Ledger;
use crate::record::{parse_patient_id, Entry, FieldKind, FieldName, Fields, RecordId};
use crate::router::Route;
use crate::screens::ScreenLabels;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    pub title: String,
    pub path: String,
    pub nav: Vec<NavLink>,
    pub screen: ScreenView,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: String,
    pub path: String,
    pub active: bool,
}

impl NavLink {
    pub(crate) fn sidebar(current: Option<Route>) -> Vec<NavLink> {
        Route::NAV
            .iter()
            .map(|route| NavLink {
                label: route.label().to_owned(),
                path: route.path().to_owned(),
                active: current == Some(*route),
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScreenView {
    Welcome { heading: String },
    Table(TableScreenView),
    /// No route matched; the main area is empty.
    NotFound { path: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableScreenView {
    pub heading: String,
    pub form: FormView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterView>,
    pub table: TableView,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub heading: String,
    pub submit_label: String,
    pub mode: FormMode,
    pub inputs: Vec<InputView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputView {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterView {
    pub heading: String,
    pub selected: PatientFilter,
    pub options: Vec<SelectOption>,
}

impl FilterView {
    pub(crate) fn new(heading: &str, selected: PatientFilter, patients: &Ledger<Patient>) -> Self {
        Self {
            heading: heading.to_owned(),
            selected,
            options: patient_options(FILTER_ALL, FILTER_ALL_LABEL, patients),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableView {
    pub columns: Vec<String>,
    pub rows: Vec<RowView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowView {
    pub id: RecordId,
    pub cells: Vec<String>,
}

fn patient_options(first_value: &str, first_label: &str, patients: &Ledger<Patient>) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: first_value.to_owned(),
        label: first_label.to_owned(),
    })
    .chain(patients.iter().map(|p| SelectOption {
        value: p.id.to_string(),
        label: p.name().to_owned(),
    }))
    .collect()
}

fn fields_of<T: Entry>() -> &'static [<T::Fields as Fields>::Field] {
    <<T::Fields as Fields>::Field as FieldName>::ALL
}

pub(crate) fn form_view<T: Entry>(
    labels: &ScreenLabels,
    form: &Form<T>,
    patients: &Ledger<Patient>,
) -> FormView {
    let editing = matches!(form.mode(), FormMode::Editing(_));
    let active = form.active_fields();

    let inputs = fields_of::<T>()
        .iter()
        .map(|field| {
            let options = match field.kind() {
                FieldKind::PatientSelect => patient_options("", SELECT_PATIENT_LABEL, patients),
                _ => Vec::new(),
            };
            InputView {
                name: field.name().to_owned(),
                label: field.label().to_owned(),
                kind: field.kind(),
                value: active.get(*field),
                options,
            }
        })
        .collect();

    FormView {
        heading: labels.heading(editing).to_owned(),
        submit_label: labels.submit_label(editing).to_owned(),
        mode: form.mode(),
        inputs,
    }
}

pub(crate) fn table_view<'a, T, I>(records: I, patients: &Ledger<Patient>) -> TableView
where
    T: Entry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let fields = fields_of::<T>();
    let columns = fields.iter().map(|f| f.label().to_owned()).collect();

    let rows = records
        .into_iter()
        .map(|record| RowView {
            id: record.id(),
            cells: fields
                .iter()
                .map(|field| {
                    let value = record.fields().get(*field);
                    match field.kind() {
                        FieldKind::PatientSelect => patients.name_of(parse_patient_id(&value)).to_owned(),
                        _ => value,
                    }
                })
                .collect(),
        })
        .collect();

    TableView { columns, rows }
}
