use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    #[token(".")]
    Period,

    #[token(",")]
    Comma,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(":-")]
    ImpliedBy,

    /// Atom and functor names. Digit-leading names like `42` are symbols too,
    /// so numbers can be used as plain constants.
    #[regex("[a-z0-9][a-zA-Z_0-9]*")]
    Symbol,

    /// Variable names start with an upper case letter or an underscore.
    #[regex("[A-Z_][a-zA-Z_0-9]*")]
    Variable,

    // We can also use this variant to define whitespace,
    // or any other matches we wish to skip.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Whitespace,
}
