use super::*;

// =============================================================
// filter_students
// =============================================================

fn ids(students: &[&Student]) -> Vec<StudentId> {
    students.iter().map(|s| s.id).collect()
}

#[test]
fn empty_query_returns_everyone_in_order() {
    let all = mock_students();
    let found = filter_students(&all, "");
    assert_eq!(ids(&found), all.iter().map(|s| s.id).collect::<Vec<_>>());
}

#[test]
fn query_matches_full_name_case_insensitively() {
    let all = mock_students();
    assert_eq!(ids(&filter_students(&all, "maria ION")), vec![2]);
}

#[test]
fn query_matches_across_first_and_last_name() {
    let all = mock_students();
    assert_eq!(ids(&filter_students(&all, "andrei pop")), vec![1]);
}

#[test]
fn query_matches_email() {
    let all = mock_students();
    assert_eq!(ids(&filter_students(&all, "radu.marinescu@")), vec![6]);
}

#[test]
fn query_matches_faculty() {
    let all = mock_students();
    assert_eq!(ids(&filter_students(&all, "informatică")), vec![1, 5]);
}

#[test]
fn query_does_not_match_phone() {
    let all = mock_students();
    assert!(filter_students(&all, "0722").is_empty());
}

#[test]
fn unmatched_query_returns_nothing() {
    let all = mock_students();
    assert!(filter_students(&all, "zzz").is_empty());
}

// =============================================================
// Student
// =============================================================

#[test]
fn full_name_and_initials() {
    let all = mock_students();
    let elena = find_student(&all, 3).unwrap();
    assert_eq!(elena.full_name(), "Elena Dumitrescu");
    assert_eq!(elena.initials(), "ED");
}

#[test]
fn find_student_misses_unknown_id() {
    assert!(find_student(&mock_students(), 999).is_none());
}

#[test]
fn mock_ids_are_unique() {
    let all = mock_students();
    let mut ids: Vec<_> = all.iter().map(|s| s.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), all.len());
}

// =============================================================
// Serde
// =============================================================

#[test]
fn student_parses_camel_case_json() {
    let raw = r#"{
        "id": 7, "firstName": "Ana", "lastName": "Pop", "email": "ana@x.ro",
        "phone": "1", "faculty": "Litere", "year": 1, "gpa": 8.0,
        "status": "graduated", "enrollmentDate": "2020-10-01",
        "birthDate": "2001-02-03", "address": "Cluj",
        "courses": ["Latină", "Greacă"]
    }"#;
    let student: Student = serde_json::from_str(raw).unwrap();
    assert_eq!(student.status, StudentStatus::Graduated);
    assert_eq!(student.courses, vec![Course("Latină".into()), Course("Greacă".into())]);
    assert!(!student.scholarship);
    assert!(student.profile_pic.is_none());
}

#[test]
fn unknown_status_parses_as_unknown() {
    let status: StudentStatus = serde_json::from_str(r#""suspended""#).unwrap();
    assert_eq!(status, StudentStatus::Unknown);
}
