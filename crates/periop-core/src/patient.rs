//! Patient input model.
//!
//! A [`PatientRecord`] is the validated shape of everything the risk engine
//! reads. It is decoded from camelCase JSON (the wire format of the intake
//! form) and checked by [`PatientRecord::validate`] before scoring.
//!
//! The enumerated vocabularies (gender, comorbidity, surgery type, surgery
//! complexity) are closed: any term outside them is rejected at decode time.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Generates a closed vocabulary enum with its wire names, `ALL`, `as_str`,
/// `Display`, and a `FromStr` that reports [`ValidationError::UnknownTerm`].
macro_rules! vocabulary {
    (
        $(#[doc = $doc:literal])*
        $name:ident as $vocab:literal {
            $(
                $(#[doc = $vdoc:literal])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[doc = $vdoc])*
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl $name {
            /// Every term, in vocabulary order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Wire name of this term.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($wire => Ok($name::$variant),)*
                    _ => Err(ValidationError::UnknownTerm {
                        vocabulary: $vocab,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Administrative gender as captured on the intake form.
    Gender as "gender" {
        /// Male.
        Male => "Male",
        /// Female.
        Female => "Female",
        /// Other / not specified.
        Other => "Other",
    }
}

vocabulary! {
    /// Pre-existing condition relevant to surgical risk.
    Comorbidity as "comorbidity" {
        /// Diabetes mellitus.
        Diabetes => "Diabetes",
        /// Hypertension.
        Hypertension => "Hypertension",
        /// Heart disease.
        HeartDisease => "Heart Disease",
        /// Chronic obstructive pulmonary disease.
        Copd => "COPD",
        /// Chronic kidney disease.
        KidneyDisease => "Kidney Disease",
        /// Obesity (diagnosed, independent of the recorded BMI).
        Obesity => "Obesity",
    }
}

vocabulary! {
    /// Surgical specialty of the planned procedure.
    SurgeryType as "surgery type" {
        /// Orthopedic surgery.
        Orthopedic => "Orthopedic",
        /// Cardiac surgery.
        Cardiac => "Cardiac",
        /// General surgery.
        General => "General",
        /// Neurological surgery.
        Neurological => "Neurological",
        /// Vascular surgery.
        Vascular => "Vascular",
    }
}

vocabulary! {
    /// Procedural complexity of the planned surgery.
    SurgeryComplexity as "surgery complexity" {
        /// Low complexity.
        Low => "Low",
        /// Moderate complexity.
        Moderate => "Moderate",
        /// High complexity.
        High => "High",
    }
}

/// Demographic fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    /// Age in whole years.
    pub age: u32,
    /// Administrative gender.
    pub gender: Gender,
    /// Body mass index (kg/m²). Must be positive.
    #[serde(alias = "bodyMassIndex")]
    pub bmi: f64,
}

/// Pre-operative vital signs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    /// Systolic blood pressure (mmHg).
    #[serde(rename = "systolicBP")]
    pub systolic_bp: u32,
    /// Diastolic blood pressure (mmHg).
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: u32,
    /// Heart rate (bpm).
    pub heart_rate: u32,
    /// Body temperature.
    pub temperature: f64,
    /// Peripheral oxygen saturation (percent, 0–100).
    pub oxygen_saturation: u8,
}

/// Pre-operative laboratory values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Labs {
    /// Hemoglobin (g/dL).
    pub hemoglobin: f64,
    /// White blood cells (×10³/µL).
    pub white_blood_cells: f64,
    /// Platelets (×10³/µL).
    pub platelets: u32,
    /// Creatinine (mg/dL).
    pub creatinine: f64,
    /// Glucose (mg/dL).
    pub glucose: u32,
}

/// Everything the risk engine knows about one patient and their planned surgery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Age, gender, BMI.
    pub demographics: Demographics,
    /// Vital signs.
    pub vitals: Vitals,
    /// Laboratory values.
    pub labs: Labs,
    /// Pre-existing conditions. Duplicates collapse on decode.
    pub comorbidities: BTreeSet<Comorbidity>,
    /// Surgical specialty.
    pub surgery_type: SurgeryType,
    /// Procedural complexity.
    pub surgery_complexity: SurgeryComplexity,
}

impl PatientRecord {
    /// Decode and validate a record from its JSON wire format.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: Self = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }

    /// Decode and validate a record from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let record: Self = serde_json::from_value(value)?;
        record.validate()?;
        Ok(record)
    }

    /// Check the invariants decoding cannot express: every float finite,
    /// BMI positive, oxygen saturation a percentage.
    pub fn validate(&self) -> Result<()> {
        let bmi = self.demographics.bmi;
        require_finite("demographics.bmi", bmi)?;
        if bmi <= 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "demographics.bmi",
                value: bmi,
            });
        }

        require_finite("vitals.temperature", self.vitals.temperature)?;
        if self.vitals.oxygen_saturation > 100 {
            return Err(ValidationError::OutOfRange {
                field: "vitals.oxygenSaturation",
                value: f64::from(self.vitals.oxygen_saturation),
            });
        }

        require_finite("labs.hemoglobin", self.labs.hemoglobin)?;
        require_finite("labs.whiteBloodCells", self.labs.white_blood_cells)?;
        require_finite("labs.creatinine", self.labs.creatinine)?;
        Ok(())
    }

    /// Whether the record lists the given condition.
    pub fn has_comorbidity(&self, condition: Comorbidity) -> bool {
        self.comorbidities.contains(&condition)
    }
}

/// The intake form's initial values: a 45-year-old with controlled
/// hypertension scheduled for moderate orthopedic surgery.
impl Default for PatientRecord {
    fn default() -> Self {
        Self {
            demographics: Demographics {
                age: 45,
                gender: Gender::Female,
                bmi: 28.5,
            },
            vitals: Vitals {
                systolic_bp: 140,
                diastolic_bp: 90,
                heart_rate: 78,
                temperature: 98.6,
                oxygen_saturation: 98,
            },
            labs: Labs {
                hemoglobin: 12.5,
                white_blood_cells: 7.2,
                platelets: 250,
                creatinine: 1.1,
                glucose: 110,
            },
            comorbidities: BTreeSet::from([Comorbidity::Hypertension]),
            surgery_type: SurgeryType::Orthopedic,
            surgery_complexity: SurgeryComplexity::Moderate,
        }
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
