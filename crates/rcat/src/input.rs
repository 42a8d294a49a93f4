use std::ffi::OsString;
use std::path::PathBuf;

/// A resolved positional argument, in the order it should be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// The `-` token: the process's standard input stream.
    Stdin,
    /// Any other token: a filesystem path.
    Path(PathBuf),
}

/// Classify the positional tokens into an ordered input list.
///
/// `-` always means standard input, never a flag (flag parsing has already
/// happened by the time tokens reach here). Duplicates are preserved: the
/// same path listed twice is read twice. An empty token list resolves to
/// reading standard input alone.
pub fn resolve(files: &[OsString]) -> Vec<Input> {
    let mut inputs: Vec<Input> = files
        .iter()
        .map(|arg| {
            if arg == "-" {
                Input::Stdin
            } else {
                Input::Path(PathBuf::from(arg))
            }
        })
        .collect();
    if inputs.is_empty() {
        inputs.push(Input::Stdin);
    }
    inputs
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::PathBuf;

    use super::{resolve, Input};

    fn args(tokens: &[&str]) -> Vec<OsString> {
        tokens.iter().map(OsString::from).collect()
    }

    #[test]
    fn empty_list_defaults_to_stdin() {
        assert_eq!(resolve(&[]), vec![Input::Stdin]);
    }

    #[test]
    fn dash_is_stdin_everything_else_is_a_path() {
        let inputs = resolve(&args(&["a.txt", "-", "b.txt"]));
        assert_eq!(
            inputs,
            vec![
                Input::Path(PathBuf::from("a.txt")),
                Input::Stdin,
                Input::Path(PathBuf::from("b.txt")),
            ]
        );
    }

    #[test]
    fn duplicates_are_preserved_in_order() {
        let inputs = resolve(&args(&["a.txt", "a.txt", "-", "-"]));
        assert_eq!(
            inputs,
            vec![
                Input::Path(PathBuf::from("a.txt")),
                Input::Path(PathBuf::from("a.txt")),
                Input::Stdin,
                Input::Stdin,
            ]
        );
    }

    #[test]
    fn dash_prefixed_paths_pass_through_verbatim() {
        // Tokens that look flag-shaped never reach resolve(); anything here
        // is already a positional, even if it starts with a dash byte.
        let inputs = resolve(&args(&["--"]));
        assert_eq!(inputs, vec![Input::Path(PathBuf::from("--"))]);
    }

    #[test]
    fn empty_token_is_a_path() {
        let inputs = resolve(&args(&[""]));
        assert_eq!(inputs, vec![Input::Path(PathBuf::from(""))]);
    }
}
