use dialecta_atlas::LoadError;
use dialecta_kernel::config::ConfigError;
use std::borrow::Cow;

#[dialecta_derive::dialecta_error]
pub enum DialectaError {
    #[error("Configuration error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Linguistic data error{}: {source}", format_context(.context))]
    Load { source: LoadError, context: Option<Cow<'static, str>> },
}
