use crate::error::ValidationError;
use crate::validate::{validate_batch, validate_question};
use shared::domain::Document;

#[test]
fn complete_batch_passes() {
    let batch = vec![
        Document::new("doc1", "Intro", "Hello world"),
        Document::new("doc2", "Details", "More text"),
    ];
    assert_eq!(validate_batch(&batch), Ok(()));
}

#[test]
fn empty_batch_fails_explicitly() {
    assert_eq!(validate_batch(&[]), Err(ValidationError::EmptyBatch));
}

#[test]
fn missing_id_rejects_the_batch() {
    let batch = vec![Document::new("", "Intro", "Hello")];
    assert_eq!(validate_batch(&batch), Err(ValidationError::IncompleteFields));
}

#[test]
fn whitespace_only_fields_count_as_empty() {
    let batch = vec![Document::new("doc1", "   ", "Hello")];
    assert_eq!(validate_batch(&batch), Err(ValidationError::IncompleteFields));
}

#[test]
fn one_incomplete_document_rejects_the_whole_batch() {
    let batch = vec![
        Document::new("doc1", "Intro", "Hello world"),
        Document::new("doc2", "Details", ""),
    ];
    assert_eq!(validate_batch(&batch), Err(ValidationError::IncompleteFields));
}

#[test]
fn question_with_text_passes() {
    assert_eq!(validate_question("What is the refund policy?"), Ok(()));
}

#[test]
fn empty_and_whitespace_questions_fail() {
    assert_eq!(validate_question(""), Err(ValidationError::EmptyQuestion));
    assert_eq!(validate_question("   "), Err(ValidationError::EmptyQuestion));
    assert_eq!(
        validate_question("\n\t "),
        Err(ValidationError::EmptyQuestion)
    );
}
