use chrono::Utc;
use qaboard_core::{
    get_instance, try_instance, with_shared_board, NewAnswerForm, NewQuestionForm, QuestionSeed,
    SeedData,
};

fn seed_with(id: &str) -> SeedData {
    SeedData {
        questions: vec![QuestionSeed {
            id: id.to_string(),
            title: format!("seeded {id}"),
            text: "body".to_string(),
            tag_ids: Vec::new(),
            asked_by: "bob".to_string(),
            asked_at: Utc::now(),
            answer_ids: Vec::new(),
            views: 0,
        }],
        ..SeedData::default()
    }
}

// Single test: the instance is process-wide, so ordering across tests would leak.
#[test]
fn first_seed_wins_and_later_calls_share_the_instance() {
    assert!(try_instance().is_none());

    let first = get_instance(seed_with("first"));
    let second = get_instance(seed_with("second"));
    assert!(std::ptr::eq(first, second));

    {
        let app = second.lock().expect("store lock");
        assert!(app.get_question_by_id("first").is_some());
        assert!(app.get_question_by_id("second").is_none());
    }

    let question_id = with_shared_board(seed_with("ignored"), |board| {
        let question_id = board.ask_question(&NewQuestionForm {
            title: "Shared".to_string(),
            text: "through the service".to_string(),
            tags: "global".to_string(),
            username: "carol".to_string(),
        })?;
        board.post_answer(
            &question_id,
            &NewAnswerForm {
                username: "dave".to_string(),
                text: "same store".to_string(),
            },
        )?;
        Ok(question_id)
    })
    .expect("shared board should accept valid forms");

    let app = first.lock().expect("store lock");
    let question = app.get_question_by_id(&question_id).expect("question stored");
    assert_eq!(question.answer_count(), 1);
    assert!(app.get_question_by_id("ignored").is_none());
    assert!(std::ptr::eq(try_instance().expect("initialized"), first));
}
