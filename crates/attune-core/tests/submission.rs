use std::collections::HashMap;

use attune_core::models::submission::AnswerToken;

#[test]
fn answer_tokens_deserialize_from_mixed_json() {
    let json = r#"{"q1": 3, "q2": "quite a bit", "q3": null, "q4": [1, 2], "q5": "2.5"}"#;
    let answers: HashMap<String, AnswerToken> = serde_json::from_str(json).unwrap();

    assert_eq!(answers["q1"], AnswerToken::Number(3.0));
    assert_eq!(answers["q2"], AnswerToken::Text("quite a bit".to_string()));
    assert_eq!(answers["q3"], AnswerToken::Missing);
    assert!(matches!(answers["q4"], AnswerToken::Other(_)));
    // Numeric-looking strings stay text; normalization parses them later.
    assert_eq!(answers["q5"], AnswerToken::Text("2.5".to_string()));
}
