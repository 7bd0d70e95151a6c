use chrono::{TimeZone, Utc};
use qaboard_core::{Application, SeedData};

const FIXTURE: &str = r#"{
    "tags": [
        { "id": "t1", "name": "react" },
        { "id": "t2", "name": "javascript" }
    ],
    "answers": [
        { "id": "a1", "text": "Use a key prop.", "authored_by": "hamkalo", "posted_at": "2023-11-20T03:24:42Z" },
        { "id": "a2", "text": "Memoize it.", "authored_by": "azad", "posted_at": "2023-11-23T08:24:00Z" }
    ],
    "questions": [
        {
            "id": "q1",
            "title": "Programmatically navigate using React router",
            "text": "How do I redirect after login?",
            "tag_ids": ["t1", "t2"],
            "asked_by": "JoJi John",
            "asked_at": "2022-01-20T03:00:00Z",
            "answer_ids": ["a1", "a2"],
            "views": 10
        },
        {
            "id": "q2",
            "title": "Quick question",
            "text": "No answers yet.",
            "asked_by": "saltyPeter",
            "asked_at": "2023-01-10T11:24:30Z"
        }
    ]
}"#;

#[test]
fn seed_loads_from_json_with_defaults() {
    let seed: SeedData = serde_json::from_str(FIXTURE).expect("fixture should parse");
    assert_eq!(seed.questions[1].views, 0);
    assert!(seed.questions[1].tag_ids.is_empty());

    let app = Application::new(seed);
    assert_eq!(app.question_count(), 2);
    assert_eq!(app.get_tag_count(), 2);

    let q1 = app.get_question_by_id("q1").expect("q1 seeded");
    assert_eq!(q1.view_count(), 10);
    assert_eq!(
        q1.latest_answer_at(),
        Some(Utc.with_ymd_and_hms(2023, 11, 23, 8, 24, 0).unwrap())
    );
    assert_eq!(
        app.get_question_answers(&q1)
            .iter()
            .map(|a| a.authored_by())
            .collect::<Vec<_>>(),
        ["azad", "hamkalo"]
    );

    let q2 = app.get_question_by_id("q2").expect("q2 seeded");
    assert_eq!(q2.latest_answer_at(), None);
}

#[test]
fn empty_object_is_an_empty_seed() {
    let seed: SeedData = serde_json::from_str("{}").expect("empty seed should parse");
    assert_eq!(seed, SeedData::default());
    let app = Application::new(seed);
    let page = app.get_questions_by_filter(0, None, None);
    assert!(page.items.is_empty());
    assert_eq!(page.total_count, 0);
}

#[test]
fn question_snapshot_serializes_for_rendering() {
    let seed: SeedData = serde_json::from_str(FIXTURE).expect("fixture should parse");
    let app = Application::new(seed);
    let page = app.get_questions_by_filter(0, Some("active"), None);

    let json = serde_json::to_value(&page).expect("page should serialize");
    assert_eq!(json["total_count"], 2);
    assert_eq!(json["items"][0]["id"], "q1");
    assert_eq!(json["items"][0]["answer_ids"][1], "a2");
}
