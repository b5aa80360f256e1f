use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Floating-point number, always written with a fractional part
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// -1.0
    /// ```
    Float(f64),

    /// Integer
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -10
    /// ```
    Integer(i64),

    /// String literal enclosed in double or single quotes
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'a o''clock'
    /// ```
    String(String),

    /// Boolean values
    Boolean(bool),

    /// Null value
    Null,

    /// Any identifier-shaped word that is not a keyword.
    ///
    /// Whether it names a variable is decided by the parser against the
    /// engine's variable universe.
    Word(String),

    // Keywords
    /// Predicate negation
    Not,

    /// Logical AND (word, not symbol)
    And,

    /// Logical OR (word, not symbol)
    Or,

    /// SQL-style equality (`is`, `is not`)
    Is,

    // Comparison
    /// `=`
    Eq,

    /// `==`
    EqEq,

    /// `!=`
    NotEq,

    /// `<>`
    LtGt,

    /// Less than
    Lt,

    /// Greater than
    Gt,

    /// Less than or equal
    LtEq,

    /// Greater than or equal
    GtEq,

    // Delimiters
    /// Left parenthesis for grouping
    LParen,

    /// Right parenthesis
    RParen,

    /// Text that cannot start any token, an unterminated string, or a
    /// number that does not fit its type.
    Invalid(String),

    /// End of file
    Eof,
}

impl Token {
    /// Maps a scanned word onto its keyword token, if it is one.
    ///
    /// `None`, `True` and `False` are accepted so that generated Python
    /// parses back.
    pub fn from_word(word: String) -> Token {
        match word.as_str() {
            "and" => Token::And,
            "or" => Token::Or,
            "not" => Token::Not,
            "is" => Token::Is,
            "true" | "True" => Token::Boolean(true),
            "false" | "False" => Token::Boolean(false),
            "null" | "None" => Token::Null,
            _ => Token::Word(word),
        }
    }

    /// Human-readable description used as the `found` part of syntax errors.
    pub fn describe(&self) -> String {
        match self {
            Token::Float(n) => format!("float {}", n),
            Token::Integer(n) => format!("integer {}", n),
            Token::String(s) => format!("string {:?}", s),
            Token::Boolean(b) => format!("'{}'", b),
            Token::Null => "'null'".to_string(),
            Token::Word(w) => format!("'{}'", w),
            Token::Not => "'not'".to_string(),
            Token::And => "'and'".to_string(),
            Token::Or => "'or'".to_string(),
            Token::Is => "'is'".to_string(),
            Token::Eq => "'='".to_string(),
            Token::EqEq => "'=='".to_string(),
            Token::NotEq => "'!='".to_string(),
            Token::LtGt => "'<>'".to_string(),
            Token::Lt => "'<'".to_string(),
            Token::Gt => "'>'".to_string(),
            Token::LtEq => "'<='".to_string(),
            Token::GtEq => "'>='".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Invalid(text) => format!("unexpected '{}'", text),
            Token::Eof => "end of input".to_string(),
        }
    }
}

/// Words that never name a variable, whatever the universe says.
pub const RESERVED_WORDS: &[&str] = &[
    "and", "or", "not", "is", "true", "false", "null", "True", "False", "None",
];

/// A token together with the character offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Token categories reported in the `expected` set of a syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Identifier,
    ComparisonOp,
    BoolOp,
    Not,
    LParen,
    RParen,
    End,
}

impl TokenKind {
    /// Every kind that may stand on either side of a comparison.
    pub const LITERALS: &'static [TokenKind] = &[
        TokenKind::Null,
        TokenKind::Boolean,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Identifier,
    ];
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Null => "null",
            TokenKind::Boolean => "boolean",
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Identifier => "variable name",
            TokenKind::ComparisonOp => "comparison operator",
            TokenKind::BoolOp => "'and' or 'or'",
            TokenKind::Not => "'not'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::End => "end of input",
        };
        f.write_str(text)
    }
}
