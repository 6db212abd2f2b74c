//! Answer normalization and matching.

/// Normalize text for comparison: trim surrounding whitespace, then lowercase.
///
/// Every comparand goes through this same function, so submissions, canonical
/// answers, and options are always compared on equal terms.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Decide whether `submitted` is a correct answer.
///
/// A direct match against the canonical answer is accepted. With options
/// present, a submission that equals an option is accepted only when that
/// option is the canonical answer itself; picking any other option is wrong.
pub fn is_correct(submitted: &str, canonical_answer: &str, options: Option<&[String]>) -> bool {
    let submitted = normalize(submitted);
    let correct = normalize(canonical_answer);

    if submitted == correct {
        return true;
    }

    let Some(options) = options else {
        return false;
    };

    let correct_index = options.iter().position(|opt| normalize(opt) == correct);
    let chosen_index = options.iter().position(|opt| normalize(opt) == submitted);

    match (chosen_index, correct_index) {
        (Some(chosen), Some(correct)) => chosen == correct,
        _ => false,
    }
}

/// Returns `true` if `input` is one of the quit sentinels.
pub fn is_quit(input: &str, sentinels: &[String]) -> bool {
    let input = normalize(input);
    !input.is_empty() && sentinels.iter().any(|s| normalize(s) == input)
}
