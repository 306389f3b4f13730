use pretty_assertions::assert_eq;
use propcalc::{tokenize, Error, Token, TokenKind};

#[test]
fn single_variable() {
    let tokens = tokenize("p").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token {
                kind: TokenKind::Variable,
                text: "p".to_owned(),
                position: 0,
            },
            Token {
                kind: TokenKind::End,
                text: String::new(),
                position: 1,
            },
        ]
    );
}

#[test]
fn empty_input_yields_only_the_sentinel() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::End);
    assert_eq!(tokens[0].position, 0);
}

#[test]
fn operator_aliases() {
    let test_cases = [
        ("!", TokenKind::Not),
        ("¬", TokenKind::Not),
        ("~", TokenKind::Not),
        ("not", TokenKind::Not),
        ("&&", TokenKind::And),
        ("&", TokenKind::And),
        ("∧", TokenKind::And),
        ("and", TokenKind::And),
        ("||", TokenKind::Or),
        ("∨", TokenKind::Or),
        ("or", TokenKind::Or),
        ("xor", TokenKind::Xor),
        ("⊕", TokenKind::Xor),
        ("->", TokenKind::Implies),
        ("=>", TokenKind::Implies),
        ("→", TokenKind::Implies),
        ("<->", TokenKind::Biconditional),
        ("<=>", TokenKind::Biconditional),
        ("↔", TokenKind::Biconditional),
    ];

    for (input, expected_kind) in test_cases {
        let tokens = tokenize(input).unwrap();

        assert_eq!(tokens.len(), 2, "Input: {input}");
        assert_eq!(tokens[0].kind, expected_kind, "Input: {input}");
        assert_eq!(tokens[0].text, input, "Input: {input}");
    }
}

#[test]
fn word_aliases_are_case_insensitive() {
    let test_cases = [
        ("AND", TokenKind::And),
        ("Or", TokenKind::Or),
        ("NOT", TokenKind::Not),
        ("XoR", TokenKind::Xor),
    ];

    for (input, expected_kind) in test_cases {
        let tokens = tokenize(input).unwrap();

        assert_eq!(tokens[0].kind, expected_kind, "Input: {input}");
        // Original casing is preserved in the token text.
        assert_eq!(tokens[0].text, input, "Input: {input}");
    }
}

#[test]
fn word_aliases_respect_word_boundaries() {
    let test_cases = ["android", "orb", "nothing", "xorro", "not1", "and_so"];

    for input in test_cases {
        let tokens = tokenize(input).unwrap();

        assert_eq!(tokens.len(), 2, "Input: {input}");
        assert_eq!(tokens[0].kind, TokenKind::Variable, "Input: {input}");
        assert_eq!(tokens[0].text, input, "Input: {input}");
    }
}

#[test]
fn greedy_longest_match() {
    // `<->` must win over any shorter prefix, `&&` over `&`.
    let tokens = tokenize("p<->q").unwrap();
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Variable,
            TokenKind::Biconditional,
            TokenKind::Variable,
            TokenKind::End,
        ]
    );

    let tokens = tokenize("p&&q").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::And);
    assert_eq!(tokens[1].text, "&&");
}

#[test]
fn boolean_literals() {
    let test_cases = [
        ("true", TokenKind::True),
        ("TRUE", TokenKind::True),
        ("false", TokenKind::False),
        ("False", TokenKind::False),
        ("1", TokenKind::True),
        ("0", TokenKind::False),
        ("⊤", TokenKind::True),
        ("⊥", TokenKind::False),
    ];

    for (input, expected_kind) in test_cases {
        let tokens = tokenize(input).unwrap();

        assert_eq!(tokens.len(), 2, "Input: {input}");
        assert_eq!(tokens[0].kind, expected_kind, "Input: {input}");
    }
}

#[test]
fn literal_word_boundaries() {
    // `true_flag` is an identifier, not TRUE + `_flag`.
    let tokens = tokenize("true_flag").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Variable);
    assert_eq!(tokens[0].text, "true_flag");
}

#[test]
fn parentheses() {
    let tokens = tokenize("(p || q)").unwrap();
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::Variable,
            TokenKind::Or,
            TokenKind::Variable,
            TokenKind::RParen,
            TokenKind::End,
        ]
    );
}

#[test]
fn positions_are_character_offsets() {
    let tokens = tokenize("p ∧ q").unwrap();

    assert_eq!(tokens[0].position, 0);
    assert_eq!(tokens[1].position, 2);
    assert_eq!(tokens[2].position, 4);
    assert_eq!(tokens[3].position, 5);
}

#[test]
fn unexpected_character() {
    let test_cases = [("p @ q", '@', 2), ("p - q", '-', 2), ("#", '#', 0)];

    for (input, character, position) in test_cases {
        let result = tokenize(input);

        assert_eq!(
            result,
            Err(Error::UnexpectedCharacter {
                character,
                position,
            }),
            "Input: {input}"
        );
    }
}

#[test]
fn unexpected_character_message() {
    let error = tokenize("p @ q").unwrap_err();
    assert_eq!(error.to_string(), "Unexpected character '@' at position 2");
}
