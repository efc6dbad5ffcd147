/// Builds the instruction prompt for one translation.
///
/// Inputs are embedded verbatim; nothing is escaped.
#[must_use]
pub fn build_prompt(text: &str, source_language: &str, target_language: &str) -> String {
    format!(
        "As an expert translator, translate the following text from {source_language} to {target_language}.\n\
         Your translation must be natural and fluent, accurately handling any idioms or cultural nuances.\n\
         Preserve the original tone and intent.\n\
         \n\
         Text to translate: \"{text}\"\n\
         \n\
         Provide ONLY the translated text in your response, with no extra explanations."
    )
}
