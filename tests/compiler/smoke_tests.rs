use super::helpers::*;

#[test]
fn simple_call() {
    assert_compiles_to("(add 2 3)", "add(2, 3);");
}

#[test]
fn nested_call() {
    assert_compiles_to("(subtract 4 (add 2 2))", "subtract(4, add(2, 2));");
    assert_compiles_to("(a (b (c (d 1) 2) 3) 4)", "a(b(c(d(1), 2), 3), 4);");
}

#[test]
fn string_arguments_keep_their_quotes() {
    assert_compiles_to("(concat \"a\" \"b\")", "concat(\"a\", \"b\");");
    assert_compiles_to(
        "(print \"hello (world) 42\")",
        "print(\"hello (world) 42\");",
    );
}

#[test]
fn one_statement_per_line() {
    assert_compiles_to("(add 2 3)(subtract 4 2)", "add(2, 3);\nsubtract(4, 2);");
    assert_compiles_to(
        "\n  (add 2 3)\n\n\t(subtract 4 2)\n",
        "add(2, 3);\nsubtract(4, 2);",
    );
}

#[test]
fn calls_without_arguments() {
    assert_compiles_to("(now)", "now();");
    assert_compiles_to("(wrap (now))", "wrap(now());");
}

#[test]
fn literals_are_verbatim() {
    assert_compiles_to("(pad 007 \"\")", "pad(007, \"\");");
    assert_compiles_to(
        "(big 123456789012345678901234567890)",
        "big(123456789012345678901234567890);",
    );
}

#[test]
fn top_level_literals_are_not_statements() {
    assert_compiles_to("42", "42");
    assert_compiles_to("(add 1 2) \"done\"", "add(1, 2);\n\"done\"");
}

#[test]
fn empty_program() {
    assert_compiles_to("", "");
    assert_compiles_to("   \n ", "");
}

#[test]
fn library_functions_compose() {
    let tokens = parens::tokenize("(add 2 (sub 3 1))").unwrap();
    let ast = parens::parse(&tokens).unwrap();
    let target = parens::transform(&ast).unwrap();

    assert_eq!(parens::generate(&target), "add(2, sub(3, 1));");
    assert_eq!(
        parens::compile("(add 2 (sub 3 1))").unwrap(),
        parens::generate(&target)
    );
}

#[test]
fn compilations_are_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|n| {
            std::thread::spawn(move || {
                let code = format!("(add {} (mul {} {}))", n, n, n);
                (n, parens::compile(&code).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (n, output) = handle.join().unwrap();
        assert_eq!(output, format!("add({}, mul({}, {}));", n, n, n));
    }
}

#[test]
fn deepest_allowed_nesting() {
    let depth = parens::compiler::frontend::parser::MAX_DEPTH;
    let source = format!("{}1{}", "(f ".repeat(depth), ")".repeat(depth));
    let expected = format!("{}1{};", "f(".repeat(depth), ")".repeat(depth));

    assert_compiles_to(&source, &expected);
}

#[test]
fn leading_byte_order_mark() {
    assert_compiles_to("\u{feff}(add 2 3)", "add(2, 3);");
}
