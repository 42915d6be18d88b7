use std::borrow::Cow;

/// Fatal data-document failures; the atlas is never partially built.
#[dialecta_derive::dialecta_error]
pub enum LoadError {
    #[error("Data document could not be read{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Data document is not valid{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Data document is malformed{}: {message}", format_context(.context))]
    Malformed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two zones list the same administrative unit.
    #[error("Administrative unit claimed twice{}: {message}", format_context(.context))]
    DuplicateUnit { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A text-bank record points at a zone that does not exist.
    #[error("Unknown zone referenced{}: {message}", format_context(.context))]
    UnknownZone { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid quiz question{}: {message}", format_context(.context))]
    InvalidQuiz { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal atlas error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
