//! Option tables for every choice-backed form field.
//!
//! Each field is described by a static table of [`SelectOption`]s. The table
//! drives both rendering (label, icon, accent) and selection (cycling, picking
//! the n-th entry), so no field needs its own selector code.

use serde::Serialize;

/// One selectable entry in an option group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectOption<T> {
    /// Text shown to the user
    pub label: &'static str,
    /// Value stored in the form when this entry is chosen
    pub value: T,
    /// Single glyph shown before the label
    pub icon: &'static str,
    /// Accent color as `#rrggbb`, used when the entry is selected
    pub accent: &'static str,
}

impl<T> SelectOption<T> {
    const fn new(label: &'static str, value: T, icon: &'static str, accent: &'static str) -> Self {
        Self {
            label,
            value,
            icon,
            accent,
        }
    }
}

/// Sex assigned at birth, as understood by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

/// Employment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WorkType {
    #[default]
    Private,
    #[serde(rename = "Self-employed")]
    SelfEmployed,
    #[serde(rename = "Govt_job")]
    GovtJob,
    #[serde(rename = "Never_worked")]
    NeverWorked,
    #[serde(rename = "children")]
    Children,
}

/// Residence category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ResidenceType {
    #[default]
    Urban,
    Rural,
    Suburban,
}

/// Smoking history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SmokingStatus {
    #[default]
    #[serde(rename = "never smoked")]
    NeverSmoked,
    #[serde(rename = "formerly smoked")]
    FormerlySmoked,
    #[serde(rename = "smokes")]
    Smokes,
    Unknown,
}

pub const GENDER_OPTIONS: [SelectOption<Gender>; 3] = [
    SelectOption::new("Male (assigned at birth)", Gender::Male, "♂", "#4e9cff"),
    SelectOption::new("Female (assigned at birth)", Gender::Female, "♀", "#f484b9"),
    SelectOption::new("Another sex / Intersex", Gender::Other, "⚥", "#b28eff"),
];

pub const HYPERTENSION_OPTIONS: [SelectOption<bool>; 2] = [
    SelectOption::new("Yes", true, "✔", "#7dd173"),
    SelectOption::new("No", false, "✘", "#ff8888"),
];

pub const HEART_DISEASE_OPTIONS: [SelectOption<bool>; 2] = [
    SelectOption::new("Yes", true, "♥", "#7dd173"),
    SelectOption::new("No", false, "♡", "#ff8888"),
];

pub const EVER_MARRIED_OPTIONS: [SelectOption<bool>; 2] = [
    SelectOption::new("Yes", true, "○", "#7dd173"),
    SelectOption::new("No", false, "○", "#ff8888"),
];

pub const WORK_TYPE_OPTIONS: [SelectOption<WorkType>; 5] = [
    SelectOption::new("Private Sector", WorkType::Private, "▣", "#4e9cff"),
    SelectOption::new("Self-employed", WorkType::SelfEmployed, "☺", "#7dd173"),
    SelectOption::new("Government Job", WorkType::GovtJob, "▥", "#faca58"),
    SelectOption::new("Never Worked", WorkType::NeverWorked, "⊖", "#cfcfcf"),
    SelectOption::new("Child (underage)", WorkType::Children, "◡", "#b28eff"),
];

pub const RESIDENCE_OPTIONS: [SelectOption<ResidenceType>; 3] = [
    SelectOption::new("Urban", ResidenceType::Urban, "▤", "#4e9cff"),
    SelectOption::new("Rural", ResidenceType::Rural, "⌂", "#7dd173"),
    SelectOption::new("Suburban", ResidenceType::Suburban, "▦", "#faca58"),
];

pub const SMOKING_OPTIONS: [SelectOption<SmokingStatus>; 4] = [
    SelectOption::new("Never smoked", SmokingStatus::NeverSmoked, "⊘", "#7dd173"),
    SelectOption::new("Formerly smoked", SmokingStatus::FormerlySmoked, "~", "#faca58"),
    SelectOption::new("Smokes", SmokingStatus::Smokes, "≈", "#ff8888"),
    SelectOption::new("Unknown", SmokingStatus::Unknown, "?", "#b2b8cf"),
];

/// How an option group lays out its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionLayout {
    /// All entries on one line
    Row,
    /// One entry per line
    Column,
}

/// Form fields whose value is chosen from an option table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Gender,
    Hypertension,
    HeartDisease,
    EverMarried,
    WorkType,
    Residence,
    Smoking,
}

impl OptionField {
    /// Question shown above the option group.
    pub fn prompt(&self) -> &'static str {
        match self {
            OptionField::Gender => "What was your sex assigned at birth?",
            OptionField::Hypertension => "Hypertension (high blood pressure):",
            OptionField::HeartDisease => "Heart Disease:",
            OptionField::EverMarried => "Ever married?",
            OptionField::WorkType => "Work Type:",
            OptionField::Residence => "Residence Type:",
            OptionField::Smoking => "Smoking Status:",
        }
    }

    /// Preferred layout on a roomy terminal.
    pub fn layout(&self) -> OptionLayout {
        match self {
            OptionField::Gender | OptionField::Residence | OptionField::Smoking => OptionLayout::Row,
            OptionField::Hypertension
            | OptionField::HeartDisease
            | OptionField::EverMarried
            | OptionField::WorkType => OptionLayout::Column,
        }
    }
}

/// Index of `current` within `options`, if present.
pub fn selected_index<T: PartialEq>(options: &[SelectOption<T>], current: &T) -> Option<usize> {
    options.iter().position(|opt| &opt.value == current)
}

/// Move the selection `step` entries forward (or backward when negative),
/// wrapping at both ends.
///
/// When `current` is not in the table, stepping forward lands on the first
/// entry and stepping backward on the last.
pub fn cycle<T: Copy + PartialEq>(options: &[SelectOption<T>], current: Option<T>, step: isize) -> T {
    let len = options.len() as isize;
    let next = match current.and_then(|value| selected_index(options, &value)) {
        Some(idx) => (idx as isize + step).rem_euclid(len),
        None if step < 0 => len - 1,
        None => 0,
    };
    options[next as usize].value
}

/// Value at position `index`, if the table has that many entries.
pub fn pick<T: Copy>(options: &[SelectOption<T>], index: usize) -> Option<T> {
    options.get(index).map(|opt| opt.value)
}
