use tfidf_core::tokenizer::tokenize;

#[test]
fn it_keeps_case_and_punctuation() {
    let words = tokenize("Gettysburg gettysburg, GETTYSBURG!");
    assert_eq!(words, vec!["Gettysburg", "gettysburg,", "GETTYSBURG!"]);
}

#[test]
fn it_does_not_filter_stopwords() {
    let words = tokenize("The quick brown fox and the lazy dog");
    assert!(words.contains(&"The".to_string()));
    assert!(words.contains(&"and".to_string()));
    assert_eq!(words.len(), 8);
}
