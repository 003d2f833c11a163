use std::{collections::HashMap, fmt};

use crate::models::Record;

/// Record fields that have a summary chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ChartField {
    Sex,
    Education,
    Province,
    Reason,
}

impl ChartField {
    pub const ALL: [ChartField; 4] = [
        ChartField::Sex,
        ChartField::Education,
        ChartField::Province,
        ChartField::Reason,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartField::Sex => "Répartition par sexe",
            ChartField::Education => "Répartition par niveau d'instruction",
            ChartField::Province => "Répartition par province",
            ChartField::Reason => "Répartition par motif",
        }
    }

    fn value(self, record: &Record) -> &str {
        match self {
            ChartField::Sex => record.sex.label(),
            ChartField::Education => &record.education_level,
            ChartField::Province => &record.province,
            ChartField::Reason => &record.reason,
        }
    }
}

impl fmt::Display for ChartField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Occurrences of each distinct value of `field`, most frequent first.
/// Equal counts keep the order in which the values first appear.
pub fn count_by(records: &[Record], field: ChartField) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let value = field.value(record);
        match positions.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn record(sex: Sex, province: &str) -> Record {
        Record {
            name: "x".to_string(),
            sex,
            marital_status: "Célibataire".to_string(),
            education_level: "Sans instruction".to_string(),
            phone: 0,
            age: 0,
            commune: String::new(),
            province: province.to_string(),
            reason: "Éducation".to_string(),
        }
    }

    #[test]
    fn counts_sorted_descending_with_stable_ties() {
        let records = vec![
            record(Sex::Masculine, "Kongo Central"),
            record(Sex::Feminine, "Kinshasa"),
            record(Sex::Feminine, "Kinshasa"),
            record(Sex::Masculine, "Kasaï"),
        ];
        assert_eq!(
            count_by(&records, ChartField::Province),
            vec![
                ("Kinshasa".to_string(), 2),
                ("Kongo Central".to_string(), 1),
                ("Kasaï".to_string(), 1),
            ]
        );
        assert_eq!(
            count_by(&records, ChartField::Sex),
            vec![("Masculin".to_string(), 2), ("Feminin".to_string(), 2)]
        );
    }

    #[test]
    fn empty_snapshot_has_no_counts() {
        assert!(count_by(&[], ChartField::Reason).is_empty());
    }
}
