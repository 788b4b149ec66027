use super::helpers::*;
use parens::compiler::frontend;
use parens::compiler::frontend::lexer;
use parens::compiler::frontend::parser;

#[test]
fn unknown_character() {
    assert_matches!(
        compile_code("#"),
        Err(Error::FrontendError(frontend::Error::LexError(
            lexer::Error::UnexpectedCharacter('#')
        )))
    );

    assert_matches!(
        compile_code("(add 1 2.5)"),
        Err(Error::FrontendError(frontend::Error::LexError(
            lexer::Error::UnexpectedCharacter('.')
        )))
    );
}

#[test]
fn unterminated_string() {
    assert_matches!(
        compile_code("(print \"oops)"),
        Err(Error::FrontendError(frontend::Error::LexError(
            lexer::Error::UnterminatedString(_)
        )))
    );
}

#[test]
fn missing_close_paren() {
    assert_matches!(
        compile_code("(add 2 3"),
        Err(Error::FrontendError(frontend::Error::ParseError(
            parser::Error::UnexpectedEndOfInput(_)
        )))
    );
}

#[test]
fn dangling_close_paren() {
    assert_matches!(
        compile_code("(add 2 3))"),
        Err(Error::FrontendError(frontend::Error::ParseError(
            parser::Error::UnmatchedCloseParen
        )))
    );
}

#[test]
fn missing_call_name() {
    assert_matches!(
        compile_code("(1 2)"),
        Err(Error::FrontendError(frontend::Error::ParseError(
            parser::Error::MissingName(_)
        )))
    );
}

#[test]
fn lexing_fails_before_parsing() {
    // both a lex and a parse error, the lexer wins
    assert_matches!(
        compile_code("(add # 1"),
        Err(Error::FrontendError(frontend::Error::LexError(_)))
    );
}

#[test]
fn error_messages() {
    let message = compile_code("#").unwrap_err().to_string();
    assert!(message.starts_with("LexError"), "got: {}", message);
    assert!(message.contains('#'), "got: {}", message);

    let message = compile_code("(add").unwrap_err().to_string();
    assert!(message.starts_with("ParseError"), "got: {}", message);
}

#[test]
fn nesting_beyond_the_limit() {
    assert_matches!(
        compile_code(&"(f ".repeat(100_000)),
        Err(Error::FrontendError(frontend::Error::ParseError(
            parser::Error::NestingTooDeep(parser::MAX_DEPTH)
        )))
    );

    let depth = 10_000;
    let balanced = format!("{}1{}", "(f ".repeat(depth), ")".repeat(depth));
    assert_matches!(
        parens::compile(&balanced),
        Err(Error::FrontendError(frontend::Error::ParseError(
            parser::Error::NestingTooDeep(_)
        )))
    );
}
