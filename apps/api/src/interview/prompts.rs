// All prompt constants for the Interview module.
// Templates use `{placeholder}` markers replaced before sending.

/// System prompt for question generation.
pub const QUESTION_SYSTEM: &str = "You are an interview question generator.";

/// Style fallback for question generation when the company is unknown.
pub const QUESTION_DEFAULT_STYLE: &str = "Balanced technical + behavioral.";

/// Question generation prompt template.
/// Replace: {count}, {role}, {company}, {style}
///
/// The model is asked for JSON, but the response is passed through verbatim —
/// nothing downstream parses or validates it.
pub const QUESTION_PROMPT_TEMPLATE: &str = "Generate {count} interview questions for {role} role at {company}. \
    Company style: {style}. \
    Return JSON array with fields id, question, type, hint.";

/// System prompt for answer evaluation.
pub const EVALUATION_SYSTEM: &str = "You are an interview evaluator.";

/// Style fallback for answer evaluation when the company is unknown.
/// Intentionally a different literal from the question-side default.
pub const EVALUATION_DEFAULT_STYLE: &str = "Balanced.";

/// Answer evaluation prompt template.
/// Replace: {company}, {style}, {question}, {answer}
pub const EVALUATION_PROMPT_TEMPLATE: &str = "Company: {company}, Style: {style}\n\
    Question: {question}\n\
    Answer: {answer}\n\n\
    Evaluate correctness (correct/partial/incorrect), clarity, and suggest improvement. \
    Return JSON with fields correctness, explanation, improvements.";
