//! Derived scoring models.
//!
//! Nothing here is persisted; a breakdown is recomputed from the latest snapshot
//! every time it is requested.

use crate::{model::interaction::UserInteraction, service::points};

/// Per-category points, their sum and the resulting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub message_points: i64,
    pub reaction_points: i64,
    pub voice_points: i64,
    pub attachment_points: i64,
    pub total_points: i64,
    pub level: i64,
}

impl ScoreBreakdown {
    /// Computes the breakdown for raw counters.
    ///
    /// Each category is floored on its own before summing so bonus tiers never
    /// carry across categories.
    pub fn from_counts(
        message_count: i64,
        reaction_count: i64,
        voice_minutes: i64,
        attachment_count: f64,
    ) -> Self {
        let message_points = points::message_points(message_count);
        let reaction_points = points::reaction_points(reaction_count);
        let voice_points = points::voice_points(voice_minutes);
        let attachment_points = points::attachment_points(attachment_count);
        let total_points = points::total_points(
            message_points,
            reaction_points,
            voice_points,
            attachment_points,
        );

        Self {
            message_points,
            reaction_points,
            voice_points,
            attachment_points,
            total_points,
            level: points::level(total_points),
        }
    }

    pub fn from_interaction(interaction: &UserInteraction) -> Self {
        Self::from_counts(
            interaction.message_count,
            interaction.reaction_count,
            interaction.total_time_in_voice,
            interaction.attachment_count,
        )
    }
}

/// Snapshot paired with its score, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pub interaction: UserInteraction,
    pub score: ScoreBreakdown,
}

impl Scorecard {
    pub fn new(interaction: UserInteraction) -> Self {
        let score = ScoreBreakdown::from_interaction(&interaction);
        Self { interaction, score }
    }
}
