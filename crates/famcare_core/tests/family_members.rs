use famcare_core::seed::sample_family_members;
use famcare_core::{BadgeTone, FamilyMemberService, NotificationQueue, RecordId, Relationship};

fn seeded() -> (FamilyMemberService<NotificationQueue>, NotificationQueue) {
    let queue = NotificationQueue::new();
    let service = FamilyMemberService::with_records(sample_family_members(), queue.clone());
    (service, queue)
}

#[test]
fn add_member_applies_defaults() {
    let (mut service, queue) = seeded();
    let draft = service.draft_mut();
    draft.name = "  Grace   Johnson ".to_string();
    draft.relationship = "Parent".to_string();
    draft.age = "67".to_string();

    let member = service.add_member().expect("valid member");
    assert_eq!(member.id, RecordId::new(4));
    assert_eq!(member.name, "Grace Johnson");
    assert_eq!(member.age, 67);
    assert_eq!(member.avatar, "");
    assert!(member.health_conditions.is_empty());
    assert_eq!(member.emergency_contact, "");
    assert_eq!(member.next_appointment, "No appointments scheduled");
    assert_eq!(member.medication_count, 0);
    assert_eq!(member.initials(), "GJ");
    assert_eq!(member.relationship_kind().tone(), BadgeTone::Green);

    assert_eq!(
        queue.latest().map(|n| n.description),
        Some("Grace Johnson has been added to your family.".to_string())
    );
}

#[test]
fn emergency_contact_keeps_inner_spacing() {
    let (mut service, _queue) = seeded();
    let draft = service.draft_mut();
    draft.name = "Grace Johnson".to_string();
    draft.relationship = "Parent".to_string();
    draft.age = "67".to_string();
    draft.emergency_contact = " Tom Johnson  +1 (555)  123-4567 ".to_string();

    let member = service.add_member().expect("valid member");
    assert_eq!(member.emergency_contact, "Tom Johnson  +1 (555)  123-4567");
}

#[test]
fn missing_required_fields_leave_store_and_draft_intact() {
    let (mut service, _queue) = seeded();
    service.draft_mut().name = "Grace Johnson".to_string();

    let err = service.add_member().unwrap_err();
    assert_eq!(err.missing, vec!["relationship", "age"]);
    assert_eq!(service.members().len(), 3);
    assert_eq!(service.draft().name, "Grace Johnson");
}

#[test]
fn non_numeric_age_is_malformed() {
    let (mut service, _queue) = seeded();
    let draft = service.draft_mut();
    draft.name = "Leo Johnson".to_string();
    draft.relationship = "Son".to_string();
    draft.age = "unknown".to_string();

    let err = service.add_member().unwrap_err();
    assert!(err.missing.is_empty());
    assert_eq!(err.malformed, vec!["age"]);
    assert_eq!(err.to_string(), "family member has malformed fields: age");
    assert_eq!(service.members().len(), 3);
}

#[test]
fn free_text_relationship_is_kept_and_rendered_as_other() {
    let (mut service, _queue) = seeded();
    let draft = service.draft_mut();
    draft.name = "Ana Ruiz".to_string();
    draft.relationship = "Grandmother".to_string();
    draft.age = "81 years".to_string();

    let member = service.add_member().unwrap();
    assert_eq!(member.relationship, "Grandmother");
    assert_eq!(member.age, 81);
    assert_eq!(member.relationship_kind(), Relationship::Other);
    assert_eq!(member.relationship_kind().tone(), BadgeTone::Gray);
}

#[test]
fn summary_counts_match_filters() {
    let (service, _queue) = seeded();
    let summary = service.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(
        summary.with_conditions,
        service
            .members()
            .iter()
            .filter(|m| !m.health_conditions.is_empty())
            .count()
    );
    assert_eq!(summary.with_conditions, 2);
    assert_eq!(summary.medications, 4);
}
