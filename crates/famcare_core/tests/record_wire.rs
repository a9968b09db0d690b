use famcare_core::seed::{sample_appointments, sample_family_members, sample_medications};
use famcare_core::{Appointment, FamilyMember, Medication};

#[test]
fn family_member_uses_camel_case_wire_fields() {
    let member = sample_family_members().remove(0);
    let json = serde_json::to_value(&member).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["healthConditions"], serde_json::json!(["Diabetes", "Hypertension"]));
    assert_eq!(json["emergencyContact"], "+1 (555) 123-4567");
    assert_eq!(json["medicationCount"], 3);

    let decoded: FamilyMember = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, member);
}

#[test]
fn medication_exposes_next_due_and_taken() {
    let medication = sample_medications().remove(1);
    let json = serde_json::to_value(&medication).unwrap();
    assert_eq!(json["nextDue"], "Today 8:00 PM");
    assert_eq!(json["taken"], false);

    let decoded: Medication = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, medication);
}

#[test]
fn appointment_serializes_type_and_lowercase_status() {
    let appointment = sample_appointments().remove(0);
    let json = serde_json::to_value(&appointment).unwrap();
    assert_eq!(json["type"], "Cardiology");
    assert_eq!(json["status"], "confirmed");
    assert!(json.get("kind").is_none());

    let decoded: Appointment = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, appointment);
}
