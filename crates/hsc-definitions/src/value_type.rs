//! Value types produced by built-ins and expected by their parameters
//!
//! The tag strings match the engine's own type names as they appear in the
//! definition description. Conversion from a tag is total over the
//! recognized set; anything else is rejected by the table builder.

use std::fmt;

/// Runtime type of a built-in's value or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Special evaluation rules (e.g. short-circuiting control forms)
    SpecialForm,
    /// Name of a function or script, resolved before compilation
    FunctionName,
    /// Type is taken from the argument rather than fixed by the signature
    Passthrough,
    Void,
    Boolean,
    Real,
    Short,
    Long,
    String,
    Script,
    TriggerVolume,
    CutsceneFlag,
    CutsceneCameraPoint,
    CutsceneTitle,
    CutsceneRecording,
    DeviceGroup,
    Ai,
    AiCommandList,
    StartingProfile,
    Conversation,
    Navpoint,
    HudMessage,
    ObjectList,
    Sound,
    Effect,
    Damage,
    LoopingSound,
    AnimationGraph,
    ActorVariant,
    DamageEffect,
    ObjectDefinition,
    GameDifficulty,
    Team,
    AiDefaultState,
    ActorType,
    HudCorner,
    Object,
    Unit,
    Vehicle,
    Weapon,
    Device,
    Scenery,
    ObjectName,
    UnitName,
    VehicleName,
    WeaponName,
    DeviceName,
    SceneryName,
}

impl ValueType {
    /// Parse a description-file tag. Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let value_type = match tag {
            "special_form" => ValueType::SpecialForm,
            "function_name" => ValueType::FunctionName,
            "passthrough" => ValueType::Passthrough,
            "void" => ValueType::Void,
            "boolean" => ValueType::Boolean,
            "real" => ValueType::Real,
            "short" => ValueType::Short,
            "long" => ValueType::Long,
            "string" => ValueType::String,
            "script" => ValueType::Script,
            "trigger_volume" => ValueType::TriggerVolume,
            "cutscene_flag" => ValueType::CutsceneFlag,
            "cutscene_camera_point" => ValueType::CutsceneCameraPoint,
            "cutscene_title" => ValueType::CutsceneTitle,
            "cutscene_recording" => ValueType::CutsceneRecording,
            "device_group" => ValueType::DeviceGroup,
            "ai" => ValueType::Ai,
            "ai_command_list" => ValueType::AiCommandList,
            "starting_profile" => ValueType::StartingProfile,
            "conversation" => ValueType::Conversation,
            "navpoint" => ValueType::Navpoint,
            "hud_message" => ValueType::HudMessage,
            "object_list" => ValueType::ObjectList,
            "sound" => ValueType::Sound,
            "effect" => ValueType::Effect,
            "damage" => ValueType::Damage,
            "looping_sound" => ValueType::LoopingSound,
            "animation_graph" => ValueType::AnimationGraph,
            "actor_variant" => ValueType::ActorVariant,
            "damage_effect" => ValueType::DamageEffect,
            "object_definition" => ValueType::ObjectDefinition,
            "game_difficulty" => ValueType::GameDifficulty,
            "team" => ValueType::Team,
            "ai_default_state" => ValueType::AiDefaultState,
            "actor_type" => ValueType::ActorType,
            "hud_corner" => ValueType::HudCorner,
            "object" => ValueType::Object,
            "unit" => ValueType::Unit,
            "vehicle" => ValueType::Vehicle,
            "weapon" => ValueType::Weapon,
            "device" => ValueType::Device,
            "scenery" => ValueType::Scenery,
            "object_name" => ValueType::ObjectName,
            "unit_name" => ValueType::UnitName,
            "vehicle_name" => ValueType::VehicleName,
            "weapon_name" => ValueType::WeaponName,
            "device_name" => ValueType::DeviceName,
            "scenery_name" => ValueType::SceneryName,
            _ => return None,
        };
        Some(value_type)
    }

    /// The description-file tag for this type.
    pub fn as_tag(self) -> &'static str {
        match self {
            ValueType::SpecialForm => "special_form",
            ValueType::FunctionName => "function_name",
            ValueType::Passthrough => "passthrough",
            ValueType::Void => "void",
            ValueType::Boolean => "boolean",
            ValueType::Real => "real",
            ValueType::Short => "short",
            ValueType::Long => "long",
            ValueType::String => "string",
            ValueType::Script => "script",
            ValueType::TriggerVolume => "trigger_volume",
            ValueType::CutsceneFlag => "cutscene_flag",
            ValueType::CutsceneCameraPoint => "cutscene_camera_point",
            ValueType::CutsceneTitle => "cutscene_title",
            ValueType::CutsceneRecording => "cutscene_recording",
            ValueType::DeviceGroup => "device_group",
            ValueType::Ai => "ai",
            ValueType::AiCommandList => "ai_command_list",
            ValueType::StartingProfile => "starting_profile",
            ValueType::Conversation => "conversation",
            ValueType::Navpoint => "navpoint",
            ValueType::HudMessage => "hud_message",
            ValueType::ObjectList => "object_list",
            ValueType::Sound => "sound",
            ValueType::Effect => "effect",
            ValueType::Damage => "damage",
            ValueType::LoopingSound => "looping_sound",
            ValueType::AnimationGraph => "animation_graph",
            ValueType::ActorVariant => "actor_variant",
            ValueType::DamageEffect => "damage_effect",
            ValueType::ObjectDefinition => "object_definition",
            ValueType::GameDifficulty => "game_difficulty",
            ValueType::Team => "team",
            ValueType::AiDefaultState => "ai_default_state",
            ValueType::ActorType => "actor_type",
            ValueType::HudCorner => "hud_corner",
            ValueType::Object => "object",
            ValueType::Unit => "unit",
            ValueType::Vehicle => "vehicle",
            ValueType::Weapon => "weapon",
            ValueType::Device => "device",
            ValueType::Scenery => "scenery",
            ValueType::ObjectName => "object_name",
            ValueType::UnitName => "unit_name",
            ValueType::VehicleName => "vehicle_name",
            ValueType::WeaponName => "weapon_name",
            ValueType::DeviceName => "device_name",
            ValueType::SceneryName => "scenery_name",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}
