use super::*;
use serde_json::json;

#[test]
fn field_label_splits_camel_case() {
    assert_eq!(field_label("mediaWorkType"), "Media work type");
    assert_eq!(field_label("city"), "City");
    assert_eq!(field_label("created_at"), "Created at");
}

#[test]
fn detail_fields_skip_ids_and_empty_values() {
    let record = json!({
        "id": 4,
        "title": "Camera operator",
        "salary": 1200,
        "remote": true,
        "skills": ["Editing", "Drone"],
        "notes": "  ",
        "deadline": null,
        "companyId": 7,
        "company": { "id": 7, "name": "Acme News" },
    });
    let fields = detail_fields(&record);
    let labels: Vec<&str> = fields.iter().map(|(l, _)| l.as_str()).collect();
    assert!(!labels.contains(&"Id"));
    assert!(!labels.contains(&"Company id"));
    assert!(!labels.contains(&"Notes"));
    assert!(!labels.contains(&"Deadline"));
    assert!(fields.contains(&("Salary".to_owned(), "1200".to_owned())));
    assert!(fields.contains(&("Remote".to_owned(), "Yes".to_owned())));
    assert!(fields.contains(&("Skills".to_owned(), "Editing, Drone".to_owned())));
    assert!(fields.contains(&("Company".to_owned(), "Acme News".to_owned())));
}

#[test]
fn detail_fields_of_non_object_is_empty() {
    assert!(detail_fields(&json!([1, 2])).is_empty());
}

#[test]
fn application_job_id_reads_leading_integer() {
    assert_eq!(application_job_id("12"), Ok(12));
    assert_eq!(application_job_id("12-reporter"), Ok(12));
    assert_eq!(application_job_id("reporter"), Err("Invalid job id"));
}
