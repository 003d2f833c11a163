//! Create/edit form state for the participant table.

use crate::{
    core::{
        error::FormError,
        lookup::{self, EDUCATION_LEVELS, MARITAL_STATUSES, OTHER_REASON, VISIT_REASONS},
        stats::{self, ChartField},
        store::{CsvRecordStore, RecordRepository},
    },
    models::{Record, Sex},
};

pub const MSG_NAME_REQUIRED: &str = "Le nom est obligatoire";
pub const MSG_ADDED: &str = "Nouvelle entrée ajoutée avec succès";
pub const MSG_UPDATED: &str = "Modification effectuée avec succès";
pub const MSG_DELETED: &str = "Suppression effectuée avec succès";
pub const MSG_EDITING: &str = "Mode édition activé";
pub const MSG_RESET: &str = "Formulaire réinitialisé";

/// Raw form values. Coded fields hold lookup codes, not labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub sex: Sex,
    pub marital_status: String,
    pub education_level: String,
    pub phone: u64,
    pub age: u32,
    pub commune: String,
    pub province: String,
    pub reason: String,
    pub other_reason: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            sex: Sex::Masculine,
            marital_status: MARITAL_STATUSES.first_code().to_string(),
            education_level: EDUCATION_LEVELS.first_code().to_string(),
            phone: 0,
            age: 0,
            commune: String::new(),
            province: String::new(),
            reason: VISIT_REASONS.first_code().to_string(),
            other_reason: String::new(),
        }
    }
}

impl FormFields {
    /// Whether the free-text reason input applies.
    pub fn wants_other_reason(&self) -> bool {
        self.reason == OTHER_REASON
    }

    /// Build the stored record, resolving codes to labels.
    pub fn to_record(&self) -> Result<Record, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Validation);
        }
        let reason = if self.wants_other_reason() {
            match self.other_reason.trim() {
                "" => lookup::label_of(&VISIT_REASONS, OTHER_REASON).to_string(),
                text => text.to_string(),
            }
        } else {
            lookup::label_of(&VISIT_REASONS, &self.reason).to_string()
        };
        Ok(Record {
            name: self.name.clone(),
            sex: self.sex,
            marital_status: lookup::label_of(&MARITAL_STATUSES, &self.marital_status).to_string(),
            education_level: lookup::label_of(&EDUCATION_LEVELS, &self.education_level)
                .to_string(),
            phone: self.phone,
            age: self.age,
            commune: self.commune.clone(),
            province: self.province.clone(),
            reason,
        })
    }

    /// Editable values for a stored record, resolving labels back to codes.
    pub fn from_record(record: &Record) -> Self {
        let reason = lookup::key_of(&VISIT_REASONS, &record.reason);
        let other_reason = if reason == OTHER_REASON {
            record.reason.clone()
        } else {
            String::new()
        };
        Self {
            name: record.name.clone(),
            sex: record.sex,
            marital_status: lookup::key_of(&MARITAL_STATUSES, &record.marital_status).to_string(),
            education_level: lookup::key_of(&EDUCATION_LEVELS, &record.education_level)
                .to_string(),
            phone: record.phone,
            age: record.age,
            commune: record.commune.clone(),
            province: record.province.clone(),
            reason: reason.to_string(),
            other_reason,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(usize),
}

/// Owns the record store together with the form being filled in.
/// Every action runs to completion before the next one is accepted.
#[derive(Debug)]
pub struct Session<R = CsvRecordStore> {
    store: R,
    fields: FormFields,
    mode: FormMode,
    status: String,
}

impl<R: RecordRepository> Session<R> {
    pub fn new(store: R) -> Self {
        Self {
            store,
            fields: FormFields::default(),
            mode: FormMode::Create,
            status: String::new(),
        }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn snapshot(&self) -> &[Record] {
        self.store.snapshot()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn set_fields(&mut self, fields: FormFields) {
        self.fields = fields;
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status_message(&self) -> &str {
        &self.status
    }

    pub fn count_by(&self, field: ChartField) -> Vec<(String, usize)> {
        stats::count_by(self.store.snapshot(), field)
    }

    /// Append (create mode) or overwrite the edited row (edit mode) with the
    /// current fields. Returns the index of the written row.
    pub fn submit(&mut self) -> Result<usize, FormError> {
        let record = match self.fields.to_record() {
            Ok(record) => record,
            Err(e) => {
                self.status = MSG_NAME_REQUIRED.to_string();
                return Err(e);
            }
        };

        let (written, message) = match self.mode {
            FormMode::Create => (self.store.append(record) - 1, MSG_ADDED),
            FormMode::Edit(index) => {
                if let Err(e) = self.store.update(index, record) {
                    self.status = format!("Erreur lors de la sauvegarde: {e}");
                    return Err(e.into());
                }
                (index, MSG_UPDATED)
            }
        };

        if let Err(e) = self.store.persist() {
            self.status = format!("Erreur lors de la sauvegarde: {e}");
            return Err(e.into());
        }

        self.reset();
        self.status = message.to_string();
        Ok(written)
    }

    /// Load row `index` into the form and switch to edit mode. Out-of-range
    /// indices leave the session untouched.
    pub fn start_edit(&mut self, index: usize) -> Result<(), FormError> {
        let Some(record) = self.store.get(index) else {
            tracing::debug!(index, "ignoring edit of missing row");
            return Err(FormError::IndexOutOfRange {
                index,
                len: self.store.len(),
            });
        };
        self.fields = FormFields::from_record(record);
        self.mode = FormMode::Edit(index);
        self.status = MSG_EDITING.to_string();
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.reset();
        self.status = MSG_RESET.to_string();
    }

    /// Remove row `index`. An edit in progress keeps pointing at the same
    /// record, or ends if that record was the one removed.
    pub fn delete_row(&mut self, index: usize) -> Result<Record, FormError> {
        if index >= self.store.len() {
            tracing::debug!(index, "ignoring delete of missing row");
            return Err(FormError::IndexOutOfRange {
                index,
                len: self.store.len(),
            });
        }
        let removed = self.store.delete(index)?;
        if let Err(e) = self.store.persist() {
            self.status = format!("Erreur lors de la suppression: {e}");
            return Err(e.into());
        }

        match self.mode {
            FormMode::Edit(editing) if editing == index => self.reset(),
            FormMode::Edit(editing) if editing > index => self.mode = FormMode::Edit(editing - 1),
            _ => {}
        }
        self.status = MSG_DELETED.to_string();
        Ok(removed)
    }

    fn reset(&mut self) {
        self.fields = FormFields::default();
        self.mode = FormMode::Create;
    }
}
