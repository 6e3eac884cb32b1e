use super::output_path;
use pretty_assertions::assert_eq;

#[test]
fn go_file_gets_min_suffix() {
    assert_eq!(output_path("main.go", ".go", "_min"), "main_min.go");
    assert_eq!(output_path("src/pkg/util.go", ".go", "_min"), "src/pkg/util_min.go");
}

#[test]
fn custom_extension() {
    assert_eq!(output_path("foo.src", ".src", "_min"), "foo_min.src");
}

#[test]
fn missing_extension_returns_input_unchanged() {
    assert_eq!(output_path("README", ".go", "_min"), "README");
    assert_eq!(output_path("main.rs", ".go", "_min"), "main.rs");
}

#[test]
fn empty_extension_returns_input_unchanged() {
    assert_eq!(output_path("main.go", "", "_min"), "main.go");
}

#[test]
fn last_occurrence_is_used() {
    assert_eq!(output_path("a.go/b.go", ".go", "_min"), "a.go/b_min.go");
}

#[test]
fn extension_in_the_middle_still_matches() {
    assert_eq!(output_path("x.gopher", ".go", "_min"), "x_min.gopher");
}
