use crate::Direction;

/// Construction-time misconfiguration.
///
/// Runtime conditions (missing decorative elements, zero-size layout, out-of-range targets,
/// redundant stop/destroy calls) never produce errors; they degrade to no-ops or clamp.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel strategy does not implement the `{0}` step")]
    MissingStep(Direction),
    #[error("recycling steps cannot be combined with positional steps")]
    MixedSteps,
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption {
        name: &'static str,
        reason: &'static str,
    },
}
