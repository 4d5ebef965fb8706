use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Context, VoiceState};

use crate::{model::interaction::InteractionKey, service::interaction::InteractionService};

/// What a voice state update means for the user's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransition {
    Join,
    Leave,
    /// Switched channels; the session continues.
    Move,
    /// Mute, deafen or other state change within the same channel.
    Unchanged,
}

impl VoiceTransition {
    pub fn from_channels(old: Option<ChannelId>, new: Option<ChannelId>) -> Self {
        match (old, new) {
            (None, Some(_)) => Self::Join,
            (Some(_), None) => Self::Leave,
            (Some(old), Some(new)) if old != new => Self::Move,
            _ => Self::Unchanged,
        }
    }
}

/// Handle a voice state change
///
/// `old` is only available when the cache holds the previous state; without it a
/// connected user is treated as joining.
pub async fn handle_voice_state_update(
    db: &DatabaseConnection,
    _ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id.or_else(|| old.as_ref().and_then(|s| s.guild_id)) else {
        return;
    };
    if new.member.as_ref().is_some_and(|member| member.user.bot) {
        return;
    }

    let transition =
        VoiceTransition::from_channels(old.as_ref().and_then(|s| s.channel_id), new.channel_id);

    let key = InteractionKey::new(new.user_id.to_string(), guild_id.to_string());
    let service = InteractionService::new(db);

    match transition {
        VoiceTransition::Join => service.record_voice_join(&key).await,
        VoiceTransition::Leave => service.record_voice_leave(&key).await,
        VoiceTransition::Move | VoiceTransition::Unchanged => {
            tracing::trace!("Voice state change without session change for {:?}", key)
        }
    }
}
