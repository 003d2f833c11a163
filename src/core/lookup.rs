//! Fixed code/label tables backing the form's select inputs.
//!
//! Forward lookups never fail: an unknown code is returned unchanged. Reverse
//! lookups return the first code (in declaration order) whose label matches,
//! or the table's fallback code.

use crate::models::Sex;

/// Code of the visit reason that switches the form to free text.
pub const OTHER_REASON: &str = "Autre";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    FirstKey,
    Code(&'static str),
}

#[derive(Debug)]
pub struct LookupTable {
    pub name: &'static str,
    entries: &'static [(&'static str, &'static str)],
    fallback: Fallback,
}

impl LookupTable {
    pub const fn new(
        name: &'static str,
        entries: &'static [(&'static str, &'static str)],
        fallback: Fallback,
    ) -> Self {
        Self {
            name,
            entries,
            fallback,
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    pub fn first_code(&self) -> &'static str {
        self.entries.first().map(|(code, _)| *code).unwrap_or("")
    }

    fn fallback_code(&self) -> &'static str {
        match self.fallback {
            Fallback::FirstKey => self.first_code(),
            Fallback::Code(code) => code,
        }
    }
}

pub static EDUCATION_LEVELS: LookupTable = LookupTable::new(
    "niveau_instruction",
    &[
        ("sans_instruction", "Sans instruction"),
        ("Primaire", "Niveau Primaire"),
        ("secondaire", "Niveau secondaire"),
        ("universitaire", "Niveau universitaire"),
    ],
    Fallback::FirstKey,
);

pub static MARITAL_STATUSES: LookupTable = LookupTable::new(
    "etat_matrimonial",
    &[
        ("Célibataire", "Célibataire"),
        ("Marié(e)", "Marié(e)"),
        ("Divorcé(e)", "Divorcé(e)"),
        ("Veuf(ve)", "Veuf(ve)"),
    ],
    Fallback::FirstKey,
);

pub static VISIT_REASONS: LookupTable = LookupTable::new(
    "motif",
    &[
        ("Études et Recherche", "Éducation"),
        ("Réseautage social", "Navigation Internet"),
        ("Accès à Internet", "Communication"),
        ("Accès Logiciels", "Accès logiciels"),
        ("Impression et Scanner", "Impression"),
        ("Travaux_numeriques", "Travaux numériques"),
        ("Jeux_en_ligne", "Jeux en ligne"),
        (OTHER_REASON, "Autre"),
    ],
    Fallback::Code(OTHER_REASON),
);

pub const SEX_CHOICES: [Sex; 2] = Sex::ALL;

/// Label for `code`, or `code` itself when the table has no such entry.
pub fn label_of<'a>(table: &LookupTable, code: &'a str) -> &'a str {
    table
        .entries
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// First code whose label equals `label`, falling back to the table default.
pub fn key_of(table: &LookupTable, label: &str) -> &'static str {
    table
        .entries
        .iter()
        .find(|(_, l)| *l == label)
        .map(|(code, _)| *code)
        .unwrap_or_else(|| table.fallback_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_of_known_and_unknown_codes() {
        assert_eq!(label_of(&EDUCATION_LEVELS, "Primaire"), "Niveau Primaire");
        assert_eq!(label_of(&VISIT_REASONS, "Jeux_en_ligne"), "Jeux en ligne");
        assert_eq!(label_of(&EDUCATION_LEVELS, "doctorat"), "doctorat");
    }

    #[test]
    fn key_of_falls_back_per_table() {
        assert_eq!(key_of(&EDUCATION_LEVELS, "Niveau secondaire"), "secondaire");
        assert_eq!(key_of(&EDUCATION_LEVELS, "???"), "sans_instruction");
        assert_eq!(key_of(&MARITAL_STATUSES, "Pacsé"), "Célibataire");
        assert_eq!(key_of(&VISIT_REASONS, "Réparation"), OTHER_REASON);
    }

    #[test]
    fn key_of_takes_first_match_on_duplicate_labels() {
        static DUPES: LookupTable = LookupTable::new(
            "dupes",
            &[("a", "same"), ("b", "same")],
            Fallback::FirstKey,
        );
        assert_eq!(key_of(&DUPES, "same"), "a");
    }

    #[test]
    fn every_label_reverses_to_its_code() {
        for table in [&EDUCATION_LEVELS, &MARITAL_STATUSES, &VISIT_REASONS] {
            for code in table.codes() {
                assert_eq!(key_of(table, label_of(table, code)), code, "{}", table.name);
            }
        }
    }
}
