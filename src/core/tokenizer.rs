/// Characters that separate arguments on a command line.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

const GROWTH_STEP: usize = 64;

/// Splits `line` into arguments on runs of [`DELIMITERS`].
///
/// The returned slices borrow from `line`. Quotes, escapes and comment
/// characters have no special meaning.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = Vec::new();
    grow(&mut tokens);

    for token in line.split(DELIMITERS).filter(|t| !t.is_empty()) {
        if tokens.len() == tokens.capacity() {
            grow(&mut tokens);
        }
        tokens.push(token);
    }

    tokens
}

// Growth failure is fatal.
fn grow(tokens: &mut Vec<&str>) {
    if tokens.try_reserve_exact(GROWTH_STEP).is_err() {
        eprintln!("cool_shell: allocation error");
        std::process::exit(1);
    }
}
