/// Derive the output path by inserting `suffix` before the last occurrence
/// of `extension` in `input`.
///
/// `main.go` with `.go` and `_min` becomes `main_min.go`. When `input`
/// does not contain `extension` at all, it is returned unchanged, so the
/// caller would write over its input.
pub fn output_path(input: &str, extension: &str, suffix: &str) -> String {
    if extension.is_empty() {
        return input.to_owned();
    }
    match input.rfind(extension) {
        Some(at) => {
            let mut out = String::with_capacity(input.len() + suffix.len());
            out.push_str(&input[..at]);
            out.push_str(suffix);
            out.push_str(&input[at..]);
            out
        }
        None => input.to_owned(),
    }
}

#[cfg(test)]
mod tests;
