use super::ApiError;
use super::ChatAnswer;
use super::ChatRequest;

#[test]
fn it_serializes_chat_request_without_document() {
    let req = ChatRequest {
        message: "What is Section 138?".to_string(),
        document_id: None,
    };

    insta::assert_snapshot!(serde_json::to_string(&req).unwrap(), @r###"{"message":"What is Section 138?"}"###);
}

#[test]
fn it_serializes_chat_request_with_document() {
    let req = ChatRequest {
        message: "Summarise the notice".to_string(),
        document_id: Some("doc_1".to_string()),
    };

    insta::assert_snapshot!(serde_json::to_string(&req).unwrap(), @r###"{"message":"Summarise the notice","document_id":"doc_1"}"###);
}

#[test]
fn it_renders_answer_with_confidence_and_time() {
    let answer = ChatAnswer {
        response: "A cheque bounce is an offence.".to_string(),
        sources: vec![],
        confidence: Some(0.87),
        processing_time: Some(1.42),
    };

    assert_eq!(
        answer.render(),
        "A cheque bounce is an offence.\n\nConfidence: 87.0% | Time: 1.42s"
    );
}

#[test]
fn it_renders_answer_with_sources() {
    let answer = ChatAnswer {
        response: "See the statute.".to_string(),
        sources: vec![
            "Negotiable Instruments Act, 1881".to_string(),
            "notice.pdf".to_string(),
        ],
        confidence: None,
        processing_time: Some(0.5),
    };

    insta::assert_snapshot!(answer.render(), @r###"
    See the statute.

    Sources:
    - Negotiable Instruments Act, 1881
    - notice.pdf

    Time: 0.50s
    "###);
}

#[test]
fn it_renders_plain_answer() {
    let answer = ChatAnswer {
        response: "Plain answer.\n".to_string(),
        ..ChatAnswer::default()
    };

    assert_eq!(answer.render(), "Plain answer.");
}

#[test]
fn it_prefers_server_message() {
    let err = ApiError::Rejected {
        status: 400,
        message: Some("Failed to extract text from document".to_string()),
    };

    assert_eq!(
        err.user_message("generic"),
        "Failed to extract text from document"
    );
}

#[test]
fn it_falls_back_to_generic_message() {
    let rejected = ApiError::Rejected {
        status: 500,
        message: None,
    };
    let blank = ApiError::Rejected {
        status: 500,
        message: Some("  ".to_string()),
    };

    assert_eq!(rejected.user_message("generic"), "generic");
    assert_eq!(blank.user_message("generic"), "generic");
    assert_eq!(ApiError::Timeout.user_message("generic"), "generic");
    assert_eq!(
        ApiError::Transport("connection refused".to_string()).user_message("generic"),
        "generic"
    );
}
