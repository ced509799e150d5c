use super::*;
use pretty_assertions::assert_eq;

const ALL: [(&str, TokenKind); 16] = [
    ("and", TokenKind::And),
    ("class", TokenKind::Class),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("for", TokenKind::For),
    ("fun", TokenKind::Fun),
    ("if", TokenKind::If),
    ("nil", TokenKind::Nil),
    ("or", TokenKind::Or),
    ("print", TokenKind::Print),
    ("return", TokenKind::Return),
    ("super", TokenKind::Super),
    ("this", TokenKind::This),
    ("true", TokenKind::True),
    ("var", TokenKind::Var),
    ("while", TokenKind::While),
];

#[test]
fn every_reserved_word_resolves() {
    for (text, kind) in ALL {
        assert_eq!(lookup(text), Some(kind), "keyword {text:?}");
        assert!(kind.is_keyword());
    }
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(lookup("If"), None);
    assert_eq!(lookup("CLASS"), None);
    assert_eq!(lookup("Nil"), None);
}

#[test]
fn prefixes_and_extensions_are_identifiers() {
    for text in ["i", "fo", "forx", "classy", "_var", "returns", "whil", "orchid"] {
        assert_eq!(lookup(text), None, "{text:?} should not be a keyword");
    }
}

#[test]
fn out_of_range_lengths_are_rejected() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("superclass"), None);
}
