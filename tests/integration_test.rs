// Integration tests for the header recognizer and its callers

use hdrcheck::grid::{Grid, min_positive};
use hdrcheck::is_valid_function_header;
use hdrcheck::parser::parser::Parser;
use hdrcheck::repl;

#[test]
fn test_declaration_with_terminator() {
    assert!(is_valid_function_header("int foo(int a, char b);"));
}

#[test]
fn test_definition_without_terminator() {
    assert!(is_valid_function_header("void bar(void)"));
}

#[test]
fn test_multi_keyword_type() {
    assert!(is_valid_function_header("unsigned long foo()"));
}

#[test]
fn test_empty_input() {
    assert!(!is_valid_function_header(""));
}

#[test]
fn test_stray_comma() {
    assert!(!is_valid_function_header("int foo(int a,, char b);"));
}

#[test]
fn test_pointer_marker() {
    // '*' is never tokenized; the line reads as truncated and rejects.
    assert!(!is_valid_function_header("int foo(int* a);"));
}

#[test]
fn test_trailing_tokens() {
    assert!(!is_valid_function_header("int foo(void) extra"));
}

#[test]
fn test_whitespace_insensitivity() {
    let variants = [
        "long count(const int a, bool b());",
        "long count ( const int a , bool b ( ) ) ;",
        "  long\tcount(const\nint a,\t\tbool b()) ;",
        "long count(const int a,bool b());",
    ];
    for header in variants {
        assert!(is_valid_function_header(header), "{header:?}");
    }

    let invalid_variants = [
        "int foo(int a,, char b);",
        "int foo ( int a , , char b ) ;",
        "int\nfoo(int a, ,char b);",
    ];
    for header in invalid_variants {
        assert!(!is_valid_function_header(header), "{header:?}");
    }
}

#[test]
fn test_repeated_evaluation_is_stable() {
    for header in ["int foo(int a, char b);", "int foo(int* a);"] {
        let first = is_valid_function_header(header);
        for _ in 0..5 {
            assert_eq!(is_valid_function_header(header), first, "{header:?}");
        }
    }
}

#[test]
fn test_parser_type_directly() {
    // The Parser type itself is public; one call, one verdict.
    let mut parser = Parser::new("float scale(double factor)");
    assert!(parser.parse_function_header());
}

#[test]
fn test_concurrent_validation() {
    // Each call owns its lexer and parser, so threads need no coordination.
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let header = format!("int worker_{i}(unsigned id);");
                assert!(is_valid_function_header(&header));
                assert!(!is_valid_function_header("int broken("));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_repl_session() {
    let input = "\
int foo(int a, char b);\n\
\n\
int foo(int* a);\n\
void bar(void)\n\
exit\n\
int never_reached();\n";
    let mut output = Vec::new();
    repl::run(input.as_bytes(), &mut output).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("\"int foo(int a, char b);\": valid function header"));
    assert!(output.contains("\"int foo(int* a);\": invalid function header"));
    assert!(output.contains("\"void bar(void)\": valid function header"));
    assert!(!output.contains("never_reached"));
}

#[test]
fn test_grid_scan_end_to_end() {
    let mut grid = Grid::new(3, 3).unwrap();
    let values = [[0, -2, 14], [7, 0, -1], [3, 21, 0]];
    for (r, row) in values.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            grid.set(r, c, value).unwrap();
        }
    }
    assert_eq!(min_positive(&grid), Some(3));

    grid.resize(1, 2).unwrap();
    assert_eq!(min_positive(&grid), None);
}
