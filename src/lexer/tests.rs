//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, identifiers and type names
//! - Numeric and string literals
//! - Operators and punctuation
//! - Doc comments and plain comments
//! - Error recovery

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "contract interface extends implements import from as error event state instantiate exec query migrate struct enum type let if else for in and or return emit fail none true false".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Contract);
    assert_eq!(tokens[1].kind, TokenKind::Interface);
    assert_eq!(tokens[2].kind, TokenKind::Extends);
    assert_eq!(tokens[3].kind, TokenKind::Implements);
    assert_eq!(tokens[4].kind, TokenKind::Import);
    assert_eq!(tokens[5].kind, TokenKind::From);
    assert_eq!(tokens[6].kind, TokenKind::As);
    assert_eq!(tokens[7].kind, TokenKind::Error);
    assert_eq!(tokens[8].kind, TokenKind::Event);
    assert_eq!(tokens[9].kind, TokenKind::State);
    assert_eq!(tokens[10].kind, TokenKind::Instantiate);
    assert_eq!(tokens[11].kind, TokenKind::Exec);
    assert_eq!(tokens[12].kind, TokenKind::Query);
    assert_eq!(tokens[13].kind, TokenKind::Migrate);
    assert_eq!(tokens[14].kind, TokenKind::Struct);
    assert_eq!(tokens[15].kind, TokenKind::Enum);
    assert_eq!(tokens[16].kind, TokenKind::Type);
    assert_eq!(tokens[17].kind, TokenKind::Let);
    assert_eq!(tokens[18].kind, TokenKind::If);
    assert_eq!(tokens[19].kind, TokenKind::Else);
    assert_eq!(tokens[20].kind, TokenKind::For);
    assert_eq!(tokens[21].kind, TokenKind::In);
    assert_eq!(tokens[22].kind, TokenKind::And);
    assert_eq!(tokens[23].kind, TokenKind::Or);
    assert_eq!(tokens[24].kind, TokenKind::Return);
    assert_eq!(tokens[25].kind, TokenKind::Emit);
    assert_eq!(tokens[26].kind, TokenKind::Fail);
    assert_eq!(tokens[27].kind, TokenKind::None);
    assert_eq!(tokens[28].kind, TokenKind::True);
    assert_eq!(tokens[29].kind, TokenKind::False);
    assert_eq!(tokens[30].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_builtin_types() {
    let source = "bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 byte".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    for token in &tokens[..12] {
        assert_eq!(token.kind, TokenKind::BuiltinType);
    }
    assert_eq!(tokens[12].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers_and_type_names() {
    let source = "foo bar_123 _underscore Addr CwTemplate _".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar_123");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::TypeName);
    assert_eq!(tokens[3].value, "Addr");
    assert_eq!(tokens[4].kind, TokenKind::TypeName);
    assert_eq!(tokens[4].value, "CwTemplate");
    assert_eq!(tokens[5].kind, TokenKind::Underscore);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "100.5");
}

#[test]
fn test_tokenize_strings_with_escapes() {
    let source = r#""hello" "a\nb" "quote: \"x\"""#.to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "a\nb");
    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "quote: \"x\"");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % == != < <= > >= = += -= *= /= %= ! ? :: : . , -> []".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    let expected = [
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::Greater,
        TokenKind::GreaterEquals,
        TokenKind::Assignment,
        TokenKind::PlusEquals,
        TokenKind::MinusEquals,
        TokenKind::StarEquals,
        TokenKind::SlashEquals,
        TokenKind::PercentEquals,
        TokenKind::Not,
        TokenKind::Question,
        TokenKind::ColonColon,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Arrow,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
    ];
    for (idx, kind) in expected.iter().enumerate() {
        assert_eq!(tokens[idx].kind, *kind, "operator at index {}", idx);
    }
}

#[test]
fn test_tokenize_doc_line() {
    let source = "/// transfers funds\nexec".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::DocLine);
    assert_eq!(tokens[0].value, " transfers funds");
    assert_eq!(tokens[1].kind, TokenKind::Exec);
}

#[test]
fn test_tokenize_doc_block() {
    let source = "/** a\n * b\n */ contract".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::DocBlock);
    assert_eq!(tokens[0].value, " a\n * b\n ");
    // The block's end position lands on its last line.
    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.end.line, 3);
    assert_eq!(tokens[1].kind, TokenKind::Contract);
}

#[test]
fn test_tokenize_plain_comments_are_skipped() {
    let source = "state // a comment\n/* block */ count".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::State);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "count");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_line_tracking() {
    let source = "contract\n\nFoo".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[1].span.start.line, 3);
}

#[test]
fn test_tokenize_unrecognised_character_recovers() {
    let source = "state # count".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    // One error for `#`, and lexing continued past it.
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnrecognisedCharacter");
    assert_eq!(errors[0].get_class(), "LexError");
    assert_eq!(tokens[0].kind, TokenKind::State);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "count");
}

#[test]
fn test_tokenize_unterminated_string() {
    let source = "let s = \"oops\nlet t = 1".to_string();
    let (tokens, errors) = tokenize(source, Some("test.cws".to_string()));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnterminatedString");

    // Lexing resumed on the next line.
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert!(kinds.contains(&TokenKind::Number));
}

#[test]
fn test_tokenize_empty_source() {
    let (tokens, errors) = tokenize(String::new(), Some("test.cws".to_string()));

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}
