//! Pipeline stages of a single `svcgen` run.
//!
//! ```text
//! Idle -> AwaitingConfig -> Materializing -> Installing -> Done
//!              |                  |              |
//!              +------------------+--------------+--> Failed
//! ```
//!
//! `Materializing -> Done` is also legal when installation is skipped.

use std::fmt;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Idle,
    AwaitingConfig,
    Materializing,
    Installing,
    Done,
    Failed,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingConfig => "awaiting-config",
            Self::Materializing => "materializing",
            Self::Installing => "installing",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Whether the pipeline may move from `self` to `next`.
    pub const fn can_advance_to(&self, next: Stage) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::AwaitingConfig)
                | (Self::AwaitingConfig, Self::Materializing)
                | (Self::AwaitingConfig, Self::Failed)
                | (Self::Materializing, Self::Installing)
                | (Self::Materializing, Self::Done)
                | (Self::Materializing, Self::Failed)
                | (Self::Installing, Self::Done)
                | (Self::Installing, Self::Failed)
        )
    }

    /// Checked transition.
    pub fn advance(self, next: Stage) -> Result<Stage, DomainError> {
        if self.can_advance_to(next) {
            Ok(next)
        } else {
            Err(DomainError::IllegalTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
