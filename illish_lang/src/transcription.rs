// Pulls IPA transcriptions out of free text.
//
// Dictionary page bodies mark pronunciations as `/…/`. The scan finds
// non-overlapping slash-delimited spans with non-empty, slash-free content,
// then keeps those containing at least one character typical of English
// IPA, which weeds out paths and other slash noise in HTML or wikitext.

/// Characters whose presence marks a span as plausible English IPA.
pub const IPA_HINT_CHARS: &str = "ɪɛæʌɔəaːɡkpbtdnmlfvθðszʃʒjwŋ";

/// Every non-empty `/…/` span in order, without the slashes.
///
/// Spans do not overlap: the closing slash of one span cannot open the
/// next. An empty pair `//` is skipped one slash at a time, so `//x/`
/// yields `x`.
fn slash_spans(text: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('/') {
        let after = &rest[open + 1..];
        match after.find('/') {
            Some(0) => rest = after,
            Some(close) => {
                spans.push(&after[..close]);
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    spans
}

fn looks_like_ipa(span: &str) -> bool {
    span.chars().any(|c| IPA_HINT_CHARS.contains(c))
}

/// The first plausible IPA transcription in `text`, without its slashes.
pub fn extract_transcription(text: &str) -> Option<&str> {
    slash_spans(text).into_iter().find(|s| looks_like_ipa(s))
}

/// All plausible IPA transcriptions in `text`, in document order.
pub fn extract_all_transcriptions(text: &str) -> Vec<&str> {
    slash_spans(text)
        .into_iter()
        .filter(|s| looks_like_ipa(s))
        .collect()
}
