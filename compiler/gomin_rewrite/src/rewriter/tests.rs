use super::*;
use crate::rewrite_to_string;
use gomin_lexer::{SourceBuffer, Tokenizer};
use pretty_assertions::assert_eq;

fn rewrite(source: &str) -> String {
    rewrite_to_string(source, RewriteOptions::default()).expect("in-memory rewrite")
}

/// Run `rewriter` over `source`, returning output and stats.
fn run(rewriter: &mut Rewriter, source: &str) -> (String, RewriteStats) {
    let buf = SourceBuffer::new(source);
    let mut out = Vec::new();
    let stats = rewriter
        .rewrite(Tokenizer::new(&buf), &mut out)
        .expect("in-memory rewrite");
    (String::from_utf8(out).expect("utf-8 output"), stats)
}

// === var declarations ===

#[test]
fn var_renames_every_later_occurrence() {
    assert_eq!(rewrite("var count int\ncount = 1"), "var c int\nc = 1");
}

#[test]
fn var_normalizes_the_following_whitespace() {
    assert_eq!(rewrite("var\tcount int\n"), "var c int\n");
}

#[test]
fn var_group_is_left_alone() {
    let source = "var (\n\tcount int\n)\ncount = 1\n";
    assert_eq!(rewrite(source), source);
}

#[test]
fn var_requires_a_single_whitespace_token() {
    let source = "var\n\tcount int\n";
    assert_eq!(rewrite(source), source);
}

#[test]
fn var_redeclaration_keeps_first_short_name() {
    assert_eq!(
        rewrite("var count int\nvar count string\n"),
        "var c int\nvar c string\n"
    );
}

#[test]
fn var_as_part_of_identifier_is_not_a_declaration() {
    let source = "variant := 1\n";
    assert_eq!(rewrite(source), "v := 1\n");
    assert_eq!(rewrite("avar x\n"), "avar x\n");
}

// === := short assignments ===

#[test]
fn short_assignment_with_space_before_colon() {
    assert_eq!(rewrite("bla := 5"), "b := 5");
}

#[test]
fn short_assignment_with_extra_space_before_colon() {
    assert_eq!(rewrite("bla  := 5"), "b := 5");
}

#[test]
fn short_assignment_without_spaces() {
    assert_eq!(rewrite("bla:=5"), "b:=5");
}

#[test]
fn short_assignment_renames_later_uses() {
    assert_eq!(
        rewrite("total := 1\ntotal = total + 2\n"),
        "t := 1\nt = t + 2\n"
    );
}

#[test]
fn plain_assignment_and_comparison_are_not_declarations() {
    let source = "total = 1\nif total == 2 {\n}\n";
    assert_eq!(rewrite(source), source);
}

#[test]
fn colon_space_equals_is_not_a_declaration() {
    let source = "total : = 1";
    assert_eq!(rewrite(source), source);
}

#[test]
fn short_assignment_needs_identifier_target() {
    let source = "\"s\" := 1\n";
    assert_eq!(rewrite(source), source);
}

#[test]
fn names_collide_on_first_letter() {
    assert_eq!(
        rewrite("count := 1\ncost := 2\nx := count + cost\n"),
        "c := 1\no := 2\nx := c + o\n"
    );
}

// === Whitespace ===

#[test]
fn double_space_collapses() {
    assert_eq!(rewrite("a  b"), "a b");
    assert_eq!(rewrite("a     b"), "a b");
}

#[test]
fn tabs_and_newlines_keep_their_count() {
    let source = "a\t\tb\n\n\nc\r\n";
    assert_eq!(rewrite(source), source);
}

#[test]
fn collapse_is_counted_in_stats() {
    let mut rewriter = Rewriter::new(RewriteOptions::default()).expect("default window");
    let (out, stats) = run(&mut rewriter, "a  b");
    assert_eq!(out, "a b");
    assert_eq!(stats.tokens_read, 4);
    assert_eq!(stats.tokens_written, 3);
}

// === Identity ===

#[test]
fn source_without_declarations_is_unchanged() {
    let source = "package main\n\nfunc main() {\n\tfmt.Println(a, b)\n}\n";
    assert_eq!(rewrite(source), source);
}

#[test]
fn empty_source() {
    assert_eq!(rewrite(""), "");
}

#[test]
fn comments_are_dropped() {
    assert_eq!(rewrite("a // note\nb /* x */ c"), "a \nb c");
}

// === Global namespace ===

#[test]
fn renaming_ignores_scope() {
    assert_eq!(
        rewrite("var count int\nx.count = 2\n"),
        "var c int\nx.c = 2\n"
    );
}

#[test]
fn renaming_skips_strings_with_the_same_text() {
    assert_eq!(
        rewrite("var count int\ns := \"count\"\n"),
        "var c int\ns := \"count\"\n"
    );
}

// === End of input ===

#[test]
fn var_at_end_of_input_is_abandoned() {
    assert_eq!(rewrite("var"), "var");
    assert_eq!(rewrite("x = 1\nvar "), "x = 1\nvar ");
}

#[test]
fn var_followed_by_name_at_end_still_renames() {
    assert_eq!(rewrite("var total"), "var t");
}

#[test]
fn colon_at_end_of_input_is_abandoned() {
    assert_eq!(rewrite("total :"), "total :");
}

// === Allocation exhaustion ===

#[test]
fn exhausted_allocator_leaves_names() {
    let source: String = (0..26).map(|i| format!("var v{i} int\n")).collect();
    let mut rewriter = Rewriter::new(RewriteOptions::default()).expect("default window");
    let (out, stats) = run(&mut rewriter, &source);

    assert_eq!(stats.renamed, 25);
    assert_eq!(stats.exhausted, 1);
    assert!(out.ends_with("var v25 int\n"));
    assert!(out.starts_with("var v int\n"));

    let mut shorts: Vec<&str> = rewriter.table().iter().map(|(_, short)| short).collect();
    shorts.sort_unstable();
    shorts.dedup();
    assert_eq!(shorts.len(), 25);
    assert!(!shorts.contains(&"w"));
}

// === Shared state ===

#[test]
fn table_carries_across_runs() {
    let mut first = Rewriter::new(RewriteOptions::default()).expect("default window");
    let (out, _) = run(&mut first, "var count int\n");
    assert_eq!(out, "var c int\n");

    let (table, names) = first.into_parts();
    let mut second =
        Rewriter::with_state(table, names, RewriteOptions::default()).expect("default window");
    let (out, stats) = run(&mut second, "count = count + 1\nvar count int\ncost := 2\n");
    assert_eq!(out, "c = c + 1\nvar c int\no := 2\n");
    assert_eq!(stats.renamed, 1);
    assert_eq!(second.table().get("count"), Some("c"));
    assert_eq!(second.table().len(), 2);
}

// === Options ===

#[test]
fn window_below_minimum_is_rejected() {
    let err = Rewriter::new(RewriteOptions { window: 3 }).expect_err("window too small");
    assert!(matches!(
        err,
        RewriteError::WindowTooSmall {
            requested: 3,
            minimum: MIN_WINDOW
        }
    ));
}

#[test]
fn larger_window_gives_same_output() {
    let source = "var count int\nbla  := count\nx  =  bla\n";
    let wide = rewrite_to_string(source, RewriteOptions { window: 16 }).expect("wide window");
    assert_eq!(wide, rewrite(source));
}

#[test]
fn default_options() {
    assert_eq!(RewriteOptions::default().window, DEFAULT_WINDOW);
}

#[allow(clippy::disallowed_types, reason = "proptest macros internally use Arc")]
mod proptest_identity {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn no_declarations_means_identity(source in "[a-z0-9 \t\n.,(){}+*=-]{0,80}") {
            prop_assume!(!source.contains("  "));
            prop_assume!(!source.contains("var"));
            prop_assert_eq!(rewrite(&source), source);
        }

        #[test]
        fn short_names_are_distinct(names in proptest::collection::vec("[a-z]{1,6}", 1..12)) {
            let source: String = names.iter().map(|n| format!("{n}_ := 1\n")).collect();
            let mut rewriter = Rewriter::new(RewriteOptions::default()).expect("default window");
            run(&mut rewriter, &source);
            let mut shorts: Vec<&str> = rewriter.table().iter().map(|(_, s)| s).collect();
            let registered = shorts.len();
            shorts.sort_unstable();
            shorts.dedup();
            prop_assert_eq!(shorts.len(), registered);
        }
    }
}
