//! Skill action categories.
//!
//! The category tells skill execution which handler consumes an event.

use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// Downstream handler kind for an event.
///
/// The numeric codes are stable and used by persisted records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillActionType {
    #[default]
    None = 0,
    /// Grey out the screen.
    GreyScreen = 1,
    /// Move the camera.
    CameraMotion = 2,
    /// Slow motion or fast forward.
    ChangeTimeScale = 3,
    /// Drive the character along an authored motion curve.
    CharacterMotion = 4,
    /// Damage reduction.
    Debuffs = 5,
    /// Damage increase.
    Buffs = 6,
    /// The character was hit.
    HitedEvent = 7,
    /// Spawn a visual effect.
    NormalEffect = 8,
    PlayAudio = 9,
    ShakeCamera = 10,
    /// Ranged attack release.
    ShootEvent = 11,
    /// The skill has ended.
    SkillEndControl = 12,
    /// Dash that carries hit detection along the way.
    SprintEvent = 13,
    /// Play a cutscene or scripted sequence.
    TriggerSequence = 14,
    /// Attach a weapon to an arbitrary mount point.
    WeaponAttach = 15,
    /// Show or hide the equipped weapon.
    WeaponShower = 16,
    /// Change animation playback speed.
    ChangeSpeed = 17,
    /// Reposition the character: teleport, knockback, launch.
    Movement = 18,
}

impl SkillActionType {
    /// All categories ordered by code.
    pub const ALL: [SkillActionType; 19] = [
        SkillActionType::None,
        SkillActionType::GreyScreen,
        SkillActionType::CameraMotion,
        SkillActionType::ChangeTimeScale,
        SkillActionType::CharacterMotion,
        SkillActionType::Debuffs,
        SkillActionType::Buffs,
        SkillActionType::HitedEvent,
        SkillActionType::NormalEffect,
        SkillActionType::PlayAudio,
        SkillActionType::ShakeCamera,
        SkillActionType::ShootEvent,
        SkillActionType::SkillEndControl,
        SkillActionType::SprintEvent,
        SkillActionType::TriggerSequence,
        SkillActionType::WeaponAttach,
        SkillActionType::WeaponShower,
        SkillActionType::ChangeSpeed,
        SkillActionType::Movement,
    ];

    /// Stable numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SkillActionType::None => "None",
            SkillActionType::GreyScreen => "GreyScreen",
            SkillActionType::CameraMotion => "CameraMotion",
            SkillActionType::ChangeTimeScale => "ChangeTimeScale",
            SkillActionType::CharacterMotion => "CharacterMotion",
            SkillActionType::Debuffs => "Debuffs",
            SkillActionType::Buffs => "Buffs",
            SkillActionType::HitedEvent => "HitedEvent",
            SkillActionType::NormalEffect => "NormalEffect",
            SkillActionType::PlayAudio => "PlayAudio",
            SkillActionType::ShakeCamera => "ShakeCamera",
            SkillActionType::ShootEvent => "ShootEvent",
            SkillActionType::SkillEndControl => "SkillEndControl",
            SkillActionType::SprintEvent => "SprintEvent",
            SkillActionType::TriggerSequence => "TriggerSequence",
            SkillActionType::WeaponAttach => "WeaponAttach",
            SkillActionType::WeaponShower => "WeaponShower",
            SkillActionType::ChangeSpeed => "ChangeSpeed",
            SkillActionType::Movement => "Movement",
        }
    }
}

impl TryFrom<u8> for SkillActionType {
    type Error = EventError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(EventError::UnknownCategory(code))
    }
}

impl std::fmt::Display for SkillActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
