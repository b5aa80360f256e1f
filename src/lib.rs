pub mod ast;
pub mod cli;
pub mod codegen;
pub mod completion;
pub mod engine;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod universe;
pub mod value;

pub use ast::{BoolOp, Combination, ComparisonOp, Expression, Literal, Node, Predicate, Token};
pub use engine::Engine;
pub use evaluator::{Bindings, EvalError, Evaluator};
pub use lexer::Lexer;
pub use parser::{Parser, SyntaxError};
pub use universe::VariableUniverse;
pub use value::{Value, ValueKind};
