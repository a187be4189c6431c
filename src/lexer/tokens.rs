use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("contract", TokenKind::Contract);
        map.insert("interface", TokenKind::Interface);
        map.insert("extends", TokenKind::Extends);
        map.insert("implements", TokenKind::Implements);
        map.insert("import", TokenKind::Import);
        map.insert("from", TokenKind::From);
        map.insert("as", TokenKind::As);
        map.insert("error", TokenKind::Error);
        map.insert("event", TokenKind::Event);
        map.insert("state", TokenKind::State);
        map.insert("instantiate", TokenKind::Instantiate);
        map.insert("exec", TokenKind::Exec);
        map.insert("query", TokenKind::Query);
        map.insert("migrate", TokenKind::Migrate);
        map.insert("struct", TokenKind::Struct);
        map.insert("enum", TokenKind::Enum);
        map.insert("type", TokenKind::Type);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("return", TokenKind::Return);
        map.insert("emit", TokenKind::Emit);
        map.insert("fail", TokenKind::Fail);
        map.insert("none", TokenKind::None);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("_", TokenKind::Underscore);
        map.insert("bool", TokenKind::BuiltinType);
        map.insert("i8", TokenKind::BuiltinType);
        map.insert("i16", TokenKind::BuiltinType);
        map.insert("i32", TokenKind::BuiltinType);
        map.insert("i64", TokenKind::BuiltinType);
        map.insert("i128", TokenKind::BuiltinType);
        map.insert("u8", TokenKind::BuiltinType);
        map.insert("u16", TokenKind::BuiltinType);
        map.insert("u32", TokenKind::BuiltinType);
        map.insert("u64", TokenKind::BuiltinType);
        map.insert("u128", TokenKind::BuiltinType);
        map.insert("byte", TokenKind::BuiltinType);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    TypeName,

    // Doc comments are kept in the token stream so the parser can bind
    // them to the declaration that follows.
    DocLine,
    DocBlock,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Dot,
    Colon,
    ColonColon,
    Question,
    Comma,
    Arrow,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Contract,
    Interface,
    Extends,
    Implements,
    Import,
    From,
    As,
    Error,
    Event,
    State,
    Instantiate,
    Exec,
    Query,
    Migrate,
    Struct,
    Enum,
    Type,
    Let,
    If,
    Else,
    For,
    In,
    And,
    Or,
    Return,
    Emit,
    Fail,
    None,
    True,
    False,
    Underscore,
    BuiltinType,
}

impl TokenKind {
    /// Assignment operators, valid only in statement position.
    pub fn is_assign_op(&self) -> bool {
        matches!(
            self,
            TokenKind::Assignment
                | TokenKind::PlusEquals
                | TokenKind::MinusEquals
                | TokenKind::StarEquals
                | TokenKind::SlashEquals
                | TokenKind::PercentEquals
        )
    }

    /// Token kinds accepted wherever the grammar says `ident`. Contract,
    /// variant and member names are conventionally capitalized, which the
    /// lexer tokenizes as TypeName.
    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::TypeName)
    }

    pub fn is_doc(&self) -> bool {
        matches!(self, TokenKind::DocLine | TokenKind::DocBlock)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::TypeName,
            TokenKind::Number,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
