//! A Soundex-style phonetic code, with one deliberate deviation from
//! classic Soundex: vowels, `h`, `w`, `y` and the apostrophe are skipped
//! without resetting the duplicate-collapse state, so a repeated consonant
//! separated only by a skipped letter still collapses to one digit.

fn digit_for(c: char) -> Option<u8> {
    match c.to_ascii_lowercase() {
        'b' | 'f' | 'p' | 'v' => Some(b'1'),
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => Some(b'2'),
        'd' | 't' => Some(b'3'),
        'l' => Some(b'4'),
        'm' | 'n' => Some(b'5'),
        'r' => Some(b'6'),
        _ => None,
    }
}

fn is_skipped(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'h' | 'w' | 'y' | '\'')
}

/// Produces a code of the form `<first-letter><up to 3 digits>`, zero-padded.
/// Non-alphabetic input yields an empty string.
pub fn phonetic_code(word: &str) -> String {
    let chars: Vec<char> = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if chars.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push(chars[0].to_ascii_uppercase());

    for &c in &chars[1..] {
        if output.len() >= 4 {
            break;
        }
        if is_skipped(c) {
            continue;
        }
        if let Some(digit) = digit_for(c) {
            if output.chars().last().map(|last| last as u8) != Some(digit) {
                output.push(digit as char);
            }
        } else {
            // Non-skipped, non-coded character (shouldn't occur for [a-z']
            // input) breaks the duplicate-collapse run, matching Soundex.
        }
    }

    while output.len() < 4 {
        output.push('0');
    }
    output
}
