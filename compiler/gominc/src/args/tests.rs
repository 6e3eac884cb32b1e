use super::*;
use pretty_assertions::assert_eq;

fn minify(args: &[&str]) -> (String, MinifyConfig) {
    match parse_args(args).unwrap() {
        Command::Minify { input, config } => (input, config),
        other => panic!("expected Minify, got {other:?}"),
    }
}

// === Positional ===

#[test]
fn no_arguments_means_no_input() {
    let args: [&str; 0] = [];
    assert_eq!(parse_args(&args), Ok(Command::NoInput));
}

#[test]
fn single_path_uses_defaults() {
    let (input, config) = minify(&["main.go"]);
    assert_eq!(input, "main.go");
    assert_eq!(config, MinifyConfig::default());
}

#[test]
fn second_path_is_rejected() {
    assert_eq!(
        parse_args(&["a.go", "b.go"]),
        Err(ArgError::UnexpectedArgument("b.go".to_owned()))
    );
}

#[test]
fn flags_alone_still_mean_no_input() {
    assert_eq!(parse_args(&["--quiet"]), Ok(Command::NoInput));
}

// === Flags ===

#[test]
fn all_flags_in_any_position() {
    let (input, config) = minify(&["--ext=.src", "foo.src", "--suffix=.small", "--window=6", "-q"]);
    assert_eq!(input, "foo.src");
    assert_eq!(config.extension, ".src");
    assert_eq!(config.suffix, ".small");
    assert_eq!(config.rewrite.window, 6);
    assert!(config.quiet);
}

#[test]
fn unknown_option() {
    assert_eq!(
        parse_args(&["main.go", "--fast"]),
        Err(ArgError::UnknownOption("--fast".to_owned()))
    );
}

#[test]
fn window_must_be_a_number() {
    assert_eq!(
        parse_args(&["main.go", "--window=big"]),
        Err(ArgError::InvalidWindow("big".to_owned()))
    );
    assert_eq!(
        parse_args(&["main.go", "--window=-1"]),
        Err(ArgError::InvalidWindow("-1".to_owned()))
    );
}

#[test]
fn empty_values_are_rejected() {
    assert_eq!(
        parse_args(&["main.go", "--ext="]),
        Err(ArgError::EmptyValue("--ext"))
    );
    assert_eq!(
        parse_args(&["main.go", "--suffix="]),
        Err(ArgError::EmptyValue("--suffix"))
    );
}

#[test]
fn dash_is_a_path() {
    let (input, _) = minify(&["-"]);
    assert_eq!(input, "-");
}

// === Commands ===

#[test]
fn help_and_version() {
    for arg in ["help", "--help", "-h"] {
        assert_eq!(parse_args(&[arg]), Ok(Command::Help));
    }
    for arg in ["version", "--version", "-V"] {
        assert_eq!(parse_args(&[arg]), Ok(Command::Version));
    }
}

#[test]
fn help_only_as_first_argument() {
    assert_eq!(
        parse_args(&["main.go", "--help"]),
        Err(ArgError::UnknownOption("--help".to_owned()))
    );
}
