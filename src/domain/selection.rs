//! Binds option tables to form fields.
//!
//! An option group reports a selection by producing the [`FormAction`] for
//! its field. Nothing is validated here; selection always succeeds.

use super::form::{FormAction, FormState};
use super::options::{
    cycle, pick, selected_index, OptionField, EVER_MARRIED_OPTIONS, GENDER_OPTIONS,
    HEART_DISEASE_OPTIONS, HYPERTENSION_OPTIONS, RESIDENCE_OPTIONS, SMOKING_OPTIONS,
    WORK_TYPE_OPTIONS,
};

impl OptionField {
    /// Position of the field's current value in its table.
    pub fn selected_index(&self, form: &FormState) -> Option<usize> {
        match self {
            OptionField::Gender => selected_index(&GENDER_OPTIONS, &form.gender),
            OptionField::Hypertension => selected_index(&HYPERTENSION_OPTIONS, &form.hypertension),
            OptionField::HeartDisease => {
                selected_index(&HEART_DISEASE_OPTIONS, &form.heart_disease)
            }
            OptionField::EverMarried => selected_index(&EVER_MARRIED_OPTIONS, &form.ever_married),
            OptionField::WorkType => selected_index(&WORK_TYPE_OPTIONS, &form.work_type),
            OptionField::Residence => selected_index(&RESIDENCE_OPTIONS, &form.residence_type),
            OptionField::Smoking => form
                .smoking_status
                .and_then(|status| selected_index(&SMOKING_OPTIONS, &status)),
        }
    }

    /// Action that moves this field's selection by `step` entries.
    pub fn cycle(&self, form: &FormState, step: isize) -> FormAction {
        match self {
            OptionField::Gender => {
                FormAction::SetGender(cycle(&GENDER_OPTIONS, Some(form.gender), step))
            }
            OptionField::Hypertension => FormAction::SetHypertension(cycle(
                &HYPERTENSION_OPTIONS,
                Some(form.hypertension),
                step,
            )),
            OptionField::HeartDisease => FormAction::SetHeartDisease(cycle(
                &HEART_DISEASE_OPTIONS,
                Some(form.heart_disease),
                step,
            )),
            OptionField::EverMarried => FormAction::SetEverMarried(cycle(
                &EVER_MARRIED_OPTIONS,
                Some(form.ever_married),
                step,
            )),
            OptionField::WorkType => {
                FormAction::SetWorkType(cycle(&WORK_TYPE_OPTIONS, Some(form.work_type), step))
            }
            OptionField::Residence => FormAction::SetResidence(cycle(
                &RESIDENCE_OPTIONS,
                Some(form.residence_type),
                step,
            )),
            OptionField::Smoking => FormAction::SetSmoking(Some(cycle(
                &SMOKING_OPTIONS,
                form.smoking_status,
                step,
            ))),
        }
    }

    /// Action that selects the entry at `index`, if the table has one.
    pub fn pick(&self, index: usize) -> Option<FormAction> {
        match self {
            OptionField::Gender => pick(&GENDER_OPTIONS, index).map(FormAction::SetGender),
            OptionField::Hypertension => {
                pick(&HYPERTENSION_OPTIONS, index).map(FormAction::SetHypertension)
            }
            OptionField::HeartDisease => {
                pick(&HEART_DISEASE_OPTIONS, index).map(FormAction::SetHeartDisease)
            }
            OptionField::EverMarried => {
                pick(&EVER_MARRIED_OPTIONS, index).map(FormAction::SetEverMarried)
            }
            OptionField::WorkType => pick(&WORK_TYPE_OPTIONS, index).map(FormAction::SetWorkType),
            OptionField::Residence => {
                pick(&RESIDENCE_OPTIONS, index).map(FormAction::SetResidence)
            }
            OptionField::Smoking => pick(&SMOKING_OPTIONS, index)
                .map(|status| FormAction::SetSmoking(Some(status))),
        }
    }
}
