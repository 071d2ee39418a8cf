/// Named voice preset mapping a short key to a provider voice identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoicePreset {
    pub key: &'static str,
    pub voice_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Static preset table. The first entry is the default voice.
pub const PRESETS: &[VoicePreset] = &[
    VoicePreset {
        key: "default",
        voice_id: "21m00Tcm4TlvDq8ikWAM",
        name: "Rachel",
        description: "Clear and professional female voice",
    },
    VoicePreset {
        key: "male1",
        voice_id: "AZnzlk1XvdvUeBnXmlld",
        name: "Domi",
        description: "Deep male voice",
    },
    VoicePreset {
        key: "female1",
        voice_id: "EXAVITQu4vr4xnSDxMaL",
        name: "Bella",
        description: "Energetic female voice",
    },
];

pub fn default_preset() -> &'static VoicePreset {
    &PRESETS[0]
}

/// Map a short preset key to its preset. Unknown or absent keys fall back to
/// the default voice.
pub fn resolve(key: Option<&str>) -> &'static VoicePreset {
    key.and_then(|k| PRESETS.iter().find(|p| p.key == k))
        .unwrap_or_else(default_preset)
}
