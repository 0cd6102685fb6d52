use std::fs;

use linea::{interpreter::evaluator::core::Context, run_source};
use walkdir::WalkDir;

/// Runs a program with the given stdin text and returns everything it wrote.
fn run_script(source: &str, stdin: &str) -> String {
    let mut output = Vec::new();
    let mut context = Context::with_io(stdin.as_bytes(), &mut output);

    if let Err(e) = run_source(source, &mut context) {
        panic!("Script failed: {e}");
    }
    drop(context);

    String::from_utf8(output).expect("script produced invalid utf-8")
}

fn assert_output(source: &str, expected: &str) {
    assert_eq!(run_script(source, ""), expected, "for program:\n{source}");
}

#[test]
fn script_corpus_matches_expectations() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "linea")
                                     })
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        assert_eq!(run_script(&source, ""), expected, "script {path:?} output mismatch");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn numbers_render_with_six_decimals() {
    assert_output("prt 5", "5.000000\n");
    assert_output("prt 2.5", "2.500000\n");
    assert_output("prt .5", "0.500000\n");
    assert_output("prt -3", "-3.000000\n");
    assert_output("prt 2e2", "200.000000\n");
}

#[test]
fn quoted_strings_print_verbatim() {
    assert_output("prt \"hello world\"", "hello world\n");
    assert_output("prt \"  spaced  \"", "  spaced  \n");
    assert_output("prt \"\"", "\n");
}

#[test]
fn partial_numeric_parse_is_invalid_number_format() {
    assert_output("prt 12abc", "ERROR: Invalid number format: '12abc'\n");
    assert_output("prt 1.2.3", "ERROR: Invalid number format: '1.2.3'\n");
    assert_output("prt 3e", "ERROR: Invalid number format: '3e'\n");
}

#[test]
fn unknown_identifier_is_an_error_value() {
    assert_output("prt foo", "ERROR: Unknown identifier: 'foo'\n");
    assert_output("prt -abc", "ERROR: Unknown identifier: '-abc'\n");
}

#[test]
fn assignment_round_trips_through_the_store() {
    assert_output("x=5\nprt x", "5.000000\n");
    assert_output("x=5\nx=\"text\"\nprt x", "text\n");
    assert_output("greeting=\"hi\"\nprt greeting", "hi\n");
    assert_output(" y = 7 \nprt y", "7.000000\n");
}

#[test]
fn empty_value_renders_as_sentinel() {
    assert_output("x=\nprt x", "EMPTY\n");
}

#[test]
fn boolean_literals_and_rendering() {
    assert_output("prt true", "true\n");
    assert_output("prt false", "false\n");
    assert_output("prt 1 < 2", "true\n");
    assert_output("prt 2 < 1", "false\n");
}

#[test]
fn equality_is_numeric_for_numbers_and_textual_otherwise() {
    assert_output("prt 5 == 5.0", "true\n");
    assert_output("prt 5 != 6", "true\n");
    assert_output("prt \"5\" == 5", "false\n");
    assert_output("prt \"5.000000\" == 5", "true\n");
    assert_output("prt \"a\" == \"a\"", "true\n");
    assert_output("prt \"a\" != \"b\"", "true\n");
}

#[test]
fn error_values_compare_through_their_rendering() {
    assert_output("e=foo\nprt e", "ERROR: Unknown identifier: 'foo'\n");
    assert_output("e=foo\nprt e == e", "true\n");
    assert_output("e=foo\nf=bar\nprt e == f", "false\n");
}

#[test]
fn ordering_uses_zero_for_non_numeric_operands() {
    assert_output("prt \"a\" < \"b\"", "false\n");
    assert_output("prt \"a\" <= \"b\"", "true\n");
    assert_output("prt \"a\" >= \"b\"", "true\n");
    // An unresolved identifier is an error value, whose numeric field is 0.
    assert_output("prt nope < 1", "true\n");
    assert_output("prt true > 0.5", "false\n");
}

#[test]
fn comparison_detection_prefers_equality_over_ordering() {
    // `==` outranks the `<` occurrences appearing earlier in the text, so
    // both sides are themselves comparisons. Accepted nested behavior.
    assert_output("prt 1 < 2 == 3 < 4", "true\n");
    assert_output("prt 2 >= 2", "true\n");
    assert_output("prt 2 <= 1", "false\n");
}

#[test]
fn operators_inside_quotes_are_still_detected() {
    // Detection is a plain substring scan, so a quoted operand splits at
    // `==` too. The halves resolve to two different error values, whose
    // renderings compare unequal.
    assert_output("prt \"a==b\"", "false\n");
}

#[test]
fn chain_executes_exactly_one_branch() {
    let source = "if (false) {\n\
                  prt \"a\"\n\
                  }\n\
                  else if (true) {\n\
                  prt \"b\"\n\
                  }\n\
                  else {\n\
                  prt \"c\"\n\
                  }";
    assert_output(source, "b\n");
}

#[test]
fn non_boolean_conditions_never_fire_a_branch() {
    // Only an exact boolean true fires; a non-zero number does not.
    let numeric = "if (1) {\n\
                   prt \"a\"\n\
                   }\n\
                   else {\n\
                   prt \"b\"\n\
                   }";
    assert_output(numeric, "b\n");

    // Nor does the *text* "true".
    let textual = "if (\"true\") {\n\
                   prt \"a\"\n\
                   }\n\
                   else {\n\
                   prt \"b\"\n\
                   }";
    assert_output(textual, "b\n");
}

#[test]
fn chain_falls_through_to_else() {
    let source = "x=1\n\
                  if (x == 2) {\n\
                  prt \"two\"\n\
                  }\n\
                  else if (x == 3) {\n\
                  prt \"three\"\n\
                  }\n\
                  else {\n\
                  prt \"other\"\n\
                  }";
    assert_output(source, "other\n");
}

#[test]
fn later_satisfied_branches_are_skipped() {
    let source = "x=5\n\
                  if (x >= 1) {\n\
                  prt \"first\"\n\
                  }\n\
                  else if (x >= 2) {\n\
                  prt \"second\"\n\
                  }";
    assert_output(source, "first\n");
}

#[test]
fn execution_resumes_after_a_cross_line_else_block() {
    let source = "if (1 == 1)\n\
                  {\n\
                  prt \"a\"\n\
                  }\n\
                  else\n\
                  {\n\
                  prt \"b\"\n\
                  }\n\
                  prt \"after\"";
    assert_output(source, "a\nafter\n");
}

#[test]
fn false_single_line_block_produces_nothing_and_resumes() {
    let source = "x=0\n\
                  if (x > 0) { prt \"pos\" }\n\
                  prt \"done\"";
    assert_output(source, "done\n");
}

#[test]
fn true_single_line_block_executes_its_content() {
    let source = "x=3\n\
                  if (x > 0) { prt \"pos\" }\n\
                  prt \"done\"";
    assert_output(source, "pos\ndone\n");
}

#[test]
fn else_on_the_closing_brace_line_is_not_recognized() {
    // The `else` header must start its own line: `} else {` trims to text
    // starting with `}`, so the chain ends at that line and the block's
    // remaining lines execute unconditionally.
    let taken = "if (true) {\n\
                 prt \"a\"\n\
                 } else {\n\
                 prt \"b\"\n\
                 }";
    assert_output(taken, "a\nb\n");

    let untaken = "if (false) {\n\
                   prt \"a\"\n\
                   } else {\n\
                   prt \"b\"\n\
                   }";
    assert_output(untaken, "b\n");
}

#[test]
fn nested_chains_resolve_independently() {
    let source = "x=5\n\
                  if (x > 1) {\n\
                  if (x > 10) {\n\
                  prt \"big\"\n\
                  }\n\
                  else {\n\
                  prt \"small\"\n\
                  }\n\
                  }";
    assert_output(source, "small\n");
}

#[test]
fn unbalanced_braces_fall_back_to_end_of_input() {
    let source = "if (1 == 1) {\n\
                  prt \"a\"";
    assert_output(source, "a\n");
}

#[test]
fn unrecognized_lines_are_silently_ignored() {
    assert_output("\n\nwhatever this is\n{\n}\nprt \"ok\"", "ok\n");
    // `=` inside a comparison never reads as an assignment.
    assert_output("x == 5\nprt \"ok\"", "ok\n");
    // A spaced left side is not a single identifier.
    assert_output("a b = 1\nprt \"ok\"", "ok\n");
}

#[test]
fn input_stores_the_line_verbatim() {
    assert_eq!(run_script("input name\nprt name", "  Ada  \n"), "  Ada  \n");
    assert_eq!(run_script("input name\nprt name", "plain"), "plain\n");
}

#[test]
fn input_at_end_of_stream_stores_the_empty_string() {
    assert_eq!(run_script("input name\nprt name", ""), "\n");
}

#[test]
fn input_drives_conditionals() {
    let source = "input answer\n\
                  if (answer == \"yes\") {\n\
                  prt \"confirmed\"\n\
                  }\n\
                  else {\n\
                  prt \"denied\"\n\
                  }";
    assert_eq!(run_script(source, "yes\n"), "confirmed\n");
    assert_eq!(run_script(source, "no\n"), "denied\n");
}

#[test]
fn consecutive_inputs_consume_one_line_each() {
    let source = "input a\ninput b\nprt b\nprt a";
    assert_eq!(run_script(source, "first\nsecond\n"), "second\nfirst\n");
}

#[test]
fn variables_shadow_literals() {
    assert_output("true=\"yes\"\nprt true", "yes\n");
    assert_output("x=1\nprt x == 1", "true\n");
}
