use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    #[default]
    #[serde(rename = "Masculin")]
    Masculine,
    #[serde(rename = "Feminin")]
    Feminine,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Masculine, Sex::Feminine];

    pub fn label(self) -> &'static str {
        match self {
            Sex::Masculine => "Masculin",
            Sex::Feminine => "Feminin",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One participant row as it is stored in the data file.
///
/// Coded fields (`marital_status`, `education_level`, `reason`) hold the
/// display label, not the form code. A row's identity is its position in the
/// store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Sexe")]
    pub sex: Sex,
    #[serde(rename = "État matrimonial")]
    pub marital_status: String,
    #[serde(rename = "Niveau d'instruction")]
    pub education_level: String,
    #[serde(rename = "Numéro de téléphone", deserialize_with = "number_or_zero")]
    pub phone: u64,
    #[serde(rename = "Âge", deserialize_with = "number_or_zero")]
    pub age: u32,
    #[serde(rename = "Commune", default)]
    pub commune: String,
    #[serde(rename = "Province", default)]
    pub province: String,
    #[serde(rename = "Motif", default)]
    pub reason: String,
}

/// Column headers of the data file, in order.
pub const COLUMNS: [&str; 9] = [
    "Nom",
    "Sexe",
    "État matrimonial",
    "Niveau d'instruction",
    "Numéro de téléphone",
    "Âge",
    "Commune",
    "Province",
    "Motif",
];

/// Accepts plain integers, empty cells (0) and non-negative decimals, which
/// are truncated toward zero (`25.5` reads as 25).
fn number_or_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64> + Default,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    let value = match raw.parse::<u64>() {
        Ok(v) => v,
        Err(_) => {
            let float: f64 = raw
                .parse()
                .map_err(|_| serde::de::Error::custom(format!("not a number: {raw:?}")))?;
            if !float.is_finite() || float < 0.0 {
                return Err(serde::de::Error::custom(format!(
                    "not a non-negative number: {raw:?}"
                )));
            }
            // 2^64 is the first f64 above u64::MAX
            if float >= u64::MAX as f64 {
                return Err(serde::de::Error::custom(format!("out of range: {raw:?}")));
            }
            float.trunc() as u64
        }
    };
    T::try_from(value).map_err(|_| serde::de::Error::custom(format!("out of range: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> csv::Result<Vec<Record>> {
        csv::Reader::from_reader(data.as_bytes())
            .deserialize()
            .collect()
    }

    const HEADER: &str = "Nom,Sexe,État matrimonial,Niveau d'instruction,Numéro de téléphone,Âge,Commune,Province,Motif\n";

    #[test]
    fn reads_float_rendered_and_empty_numbers() {
        let rows = parse(&format!(
            "{HEADER}Alice,Feminin,Célibataire,Sans instruction,812345678.0,,Gombe,Kinshasa,Éducation\n"
        ))
        .unwrap();
        assert_eq!(rows[0].phone, 812345678);
        assert_eq!(rows[0].age, 0);
        assert_eq!(rows[0].sex, Sex::Feminine);
    }

    #[test]
    fn truncates_fractional_age() {
        let rows = parse(&format!(
            "{HEADER}Bob,Masculin,Marié(e),Niveau Primaire,0,12.5,Lemba,Kinshasa,Impression\n"
        ))
        .unwrap();
        assert_eq!(rows[0].age, 12);
    }

    #[test]
    fn rejects_out_of_range_and_negative_numbers() {
        for phone in ["1e30", "-3", "abc"] {
            let result = parse(&format!(
                "{HEADER}Bob,Masculin,Marié(e),Niveau Primaire,{phone},20,Lemba,Kinshasa,Impression\n"
            ));
            assert!(result.is_err(), "{phone} should not load");
        }
        let age = parse(&format!(
            "{HEADER}Bob,Masculin,Marié(e),Niveau Primaire,0,5000000000,Lemba,Kinshasa,Impression\n"
        ));
        assert!(age.is_err(), "age beyond u32 should not load");
    }

    #[test]
    fn sex_labels_match_file_literals() {
        assert_eq!(Sex::Masculine.to_string(), "Masculin");
        assert_eq!(Sex::Feminine.label(), "Feminin");
    }
}
