//! Documentation content for sieve CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Literals,
    Operators,
    Translation,
    Completion,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "literals" | "literal" | "types" => Some(Self::Literals),
            "operators" | "ops" => Some(Self::Operators),
            "translation" | "sql" | "host" | "python" => Some(Self::Translation),
            "completion" | "suggest" => Some(Self::Completion),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"SIEVE DOCUMENTATION

Sieve is a predicate language: boolean comparisons over typed literals and
named variables, joined with 'and' / 'or'. Expressions can be evaluated
against variable bindings, or translated to Python and SQL.

DOCUMENTATION CATEGORIES

  syntax            Grammar, grouping, and precedence
  literals          null, booleans, numbers, strings, and variables
  operators         Comparison and boolean operators, null semantics
  translation       Python and SQL output
  completion        Variable name suggestions

QUICK REFERENCE

  age >= 18                     Comparison
  not status = 'banned'         Negated comparison
  a = 1 or a = 2 and b = 3      'and' binds tighter than 'or'
  (a = 1 or a = 2) and b = 3    Grouping

Run 'sieve doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Literals) => Ok(LITERALS_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Translation) => Ok(TRANSLATION_DOC),
        Some(DocCategory::Completion) => Ok(COMPLETION_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Grammar and Precedence

GRAMMAR
  Expression := Operand (('and' | 'or') Operand)*
  Operand    := Predicate | '(' Expression ')'
  Predicate  := ['not'] Comparison
  Comparison := Literal CompOp Literal

  Whitespace separates tokens and is otherwise ignored. The whole input
  must be consumed.

PRECEDENCE
  'and' binds tighter than 'or'; both associate to the left.

    a = 1 or a = 2 and a = 3      same as  a = 1 or (a = 2 and a = 3)

NEGATION
  'not' applies to a single comparison, which may be parenthesized:

    not a = 1
    not (a = 1)

  Negating a group is not supported: write 'not (a = 1 and b = 2)' as
  'not a = 1 or not b = 2'.

ERRORS
  A syntax error reports the character position and every kind of token
  that would have been accepted there:

    $ sieve check 'a = ' --vars a
    Parse error: syntax error at position 4: expected one of null, boolean,
    integer, float, string, variable name, found end of input
"#;

const LITERALS_DOC: &str = r#"LITERALS - Values and Variables

  null                          The null value
  true, false                   Booleans
  42, -7                        Integers (64-bit)
  3.14, -0.5                    Floats (digits on both sides of the point)
  "text", 'text'                Strings

STRINGS
  Single-quoted strings follow SQL: a quote is written doubled and every
  other character, backslashes and line breaks included, stands for
  itself.

    'a o''clock'   'C:\temp'

  Double-quoted strings take backslash escapes (\\, \", \', \n, \t, \r)
  or a doubled quote, and cannot span lines.

    "say \"hi\""   "tab\there"

VARIABLES
  Only names declared to the engine (--vars) are accepted; any other word
  is a syntax error. Reserved words are never variables:

    and  or  not  is  true  false  null  True  False  None

  The Python spellings None, True and False mean null, true and false.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Comparison and Boolean

COMPARISON OPERATORS
  =     Equal           (also: ==, is)
  !=    Not equal       (also: <>, is not)
  <     Less than
  >     Greater than
  <=    Less than or equal
  >=    Greater than or equal

EQUALITY
  Integers and floats compare numerically (1 = 1.0 is true). Values of
  different kinds are never equal. null equals only null.

ORDERING
  Both sides must be numbers, or both strings (compared by code point).
  Anything else, including null, is an evaluation error.

BOOLEAN OPERATORS
  and, or      Every operand is evaluated, then 'and' runs are collapsed
               before 'or'.
"#;

const TRANSLATION_DOC: &str = r#"TRANSLATION - Python and SQL Output

  $ sieve host 'a = null and not b = "x"' --vars a,b
  a == None and not (b == "x")

  $ sieve sql 'a = null and not b = "x"' --vars a,b
  a is null and not (b = 'x')

  | Sieve     | Python    | SQL                       |
  |-----------|-----------|---------------------------|
  | null      | None      | null                      |
  | true      | True      | true                      |
  | =         | ==        | = (is, when null is used) |
  | !=        | !=        | <> (is not, with null)    |
  | "it's"    | "it's"    | 'it''s'                   |

  Nested groups keep their parentheses; negated comparisons are wrapped
  as 'not (...)'. Both outputs parse back to the same expression.

  $ sieve ast 'a = 1' --vars a --pretty
    Prints the parsed tree as JSON.
"#;

const COMPLETION_DOC: &str = r#"COMPLETION - Variable Name Suggestions

  $ sieve suggest '1 = fo' --vars foo,fo2,bar
  fo2
  foo

  The last whitespace-separated word of the text is matched, ignoring
  case, against the start of every declared variable. Matches are printed
  in ascending order. Empty text, or text ending in whitespace, lists
  every variable. The text does not have to be a valid expression.
"#;
