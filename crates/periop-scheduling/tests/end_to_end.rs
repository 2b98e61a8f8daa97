#![allow(missing_docs, unused_results)]

use periop_core::{Comorbidity, PatientRecord, RiskTier, SurgeryComplexity, reference_catalog};
use periop_risk::assess_risk;
use periop_scheduling::{
    HIGH_RISK_REASON, STANDARD_REASON, derive_required_resources, plan_schedule, recommend_slots,
};
use proptest::prelude::*;

fn all_rules_record() -> PatientRecord {
    let mut record = PatientRecord::default();
    record.demographics.age = 70;
    record.demographics.bmi = 32.0;
    record.comorbidities = [Comorbidity::Diabetes, Comorbidity::Hypertension].into();
    record.surgery_complexity = SurgeryComplexity::High;
    record.labs.hemoglobin = 8.0;
    record
}

#[test]
fn default_record_gets_standard_scheduling() {
    let record = PatientRecord::default();
    let assessment = assess_risk(&record).unwrap();

    assert_eq!(assessment.overall_risk(), RiskTier::Moderate);
    assert!(derive_required_resources(&assessment, &record).is_empty());

    let slots = recommend_slots(&assessment, &reference_catalog());
    assert_eq!(slots.len(), 4);
    assert!(slots.iter().all(|s| s.recommended && s.reason == STANDARD_REASON));
}

#[test]
fn all_rules_record_gets_high_risk_plan() {
    let record = all_rules_record();
    let assessment = assess_risk(&record).unwrap();
    assert_eq!(assessment.overall_risk(), RiskTier::High);

    // BMI 32 does not exceed 35, so no bariatric entry.
    assert_eq!(
        derive_required_resources(&assessment, &record),
        vec![
            "ICU bed reserved",
            "Blood bank notification",
            "Enhanced sterile setup"
        ]
    );

    let slots = recommend_slots(&assessment, &reference_catalog());
    let recommended: Vec<&str> = slots
        .iter()
        .filter(|s| s.recommended)
        .map(|s| s.slot.time.as_str())
        .collect();
    assert_eq!(recommended, vec!["07:30 AM"]);
    assert!(slots.iter().all(|s| s.reason == HIGH_RISK_REASON));
}

#[test]
fn bariatric_patient_plan() {
    let mut record = all_rules_record();
    record.demographics.bmi = 41.0;
    let assessment = assess_risk(&record).unwrap();
    let plan = plan_schedule(&assessment, &record, &reference_catalog());

    assert_eq!(plan.required_resources.len(), 4);
    assert_eq!(plan.required_resources[3], "Bariatric equipment");
    assert!(plan.protocol.is_some());
    assert!(plan.estimated_duration.starts_with("4-6 hours"));
}

#[test]
fn plan_from_json_record() {
    let json = serde_json::json!({
        "demographics": {"age": 72, "gender": "Male", "bodyMassIndex": 27.0},
        "vitals": {
            "systolicBP": 150, "diastolicBP": 95, "heartRate": 88,
            "temperature": 98.2, "oxygenSaturation": 95
        },
        "labs": {
            "hemoglobin": 9.1, "whiteBloodCells": 8.0, "platelets": 190,
            "creatinine": 1.4, "glucose": 160
        },
        "comorbidities": ["Diabetes", "COPD", "Diabetes"],
        "surgeryType": "Vascular",
        "surgeryComplexity": "Moderate"
    });
    let record = PatientRecord::from_value(json).unwrap();
    let assessment = assess_risk(&record).unwrap();

    let names: Vec<&str> = assessment
        .risk_factors()
        .iter()
        .map(|f| f.factor.as_str())
        .collect();
    assert_eq!(names, vec!["Advanced Age", "Diabetes", "Low Hemoglobin"]);
    // mortality 2.5 + 1.5 + 1.2, infection 8 + 2 + 4, bleeding 5.5 + 3, readmission 12 + 3
    assert!((assessment.mortality_risk() - 5.2).abs() < 1e-9);
    assert!((assessment.infection_risk() - 14.0).abs() < 1e-9);
    assert!((assessment.bleeding_risk() - 8.5).abs() < 1e-9);
    assert!((assessment.readmission_risk() - 15.0).abs() < 1e-9);
    assert_eq!(assessment.overall_risk(), RiskTier::Moderate);

    let plan = plan_schedule(&assessment, &record, &reference_catalog());
    assert_eq!(
        plan.required_resources,
        vec![
            "ICU bed reserved",
            "Blood bank notification",
            "Enhanced sterile setup"
        ]
    );
    assert_eq!(plan.recommended_slots().count(), 4);
    assert_eq!(plan.estimated_duration, "2-4 hours");
}

proptest! {
    #[test]
    fn high_tier_iff_single_recommendation(
        age in 0u32..100,
        bmi in 15.0f64..50.0,
        hemoglobin in 5.0f64..18.0,
        diabetes in any::<bool>(),
        complex in any::<bool>(),
    ) {
        let mut record = PatientRecord::default();
        record.demographics.age = age;
        record.demographics.bmi = bmi;
        record.labs.hemoglobin = hemoglobin;
        if diabetes {
            record.comorbidities.insert(Comorbidity::Diabetes);
        }
        if complex {
            record.surgery_complexity = SurgeryComplexity::High;
        }

        let assessment = assess_risk(&record).unwrap();
        let slots = recommend_slots(&assessment, &reference_catalog());
        let recommended = slots.iter().filter(|s| s.recommended).count();

        prop_assert_eq!(slots.len(), 4);
        if assessment.overall_risk() == RiskTier::High {
            prop_assert_eq!(recommended, 1);
            prop_assert!(slots[0].recommended);
        } else {
            prop_assert_eq!(recommended, 4);
        }
    }
}
