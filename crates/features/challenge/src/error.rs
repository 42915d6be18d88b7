use std::borrow::Cow;

#[dialecta_derive::dialecta_error]
pub enum GenerationError {
    /// Every candidate was tried and none has a correct answer.
    #[error("No question available{}: {message}", format_context(.context))]
    NoQuestion { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
