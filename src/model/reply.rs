/// The single response a command sends back to the invoking user.
///
/// Handlers produce exactly one of these per invocation; failures are always ephemeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    Success { content: String, ephemeral: bool },
    Failure(String),
}

impl CommandReply {
    /// Success visible to everyone in the channel.
    pub fn public(content: impl Into<String>) -> Self {
        Self::Success {
            content: content.into(),
            ephemeral: false,
        }
    }

    /// Success visible only to the invoking user.
    pub fn private(content: impl Into<String>) -> Self {
        Self::Success {
            content: content.into(),
            ephemeral: true,
        }
    }

    pub fn failure(content: impl Into<String>) -> Self {
        Self::Failure(content.into())
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Success { content, .. } | Self::Failure(content) => content,
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        match self {
            Self::Success { ephemeral, .. } => *ephemeral,
            Self::Failure(_) => true,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
