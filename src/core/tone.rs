//! # Tone Recommendations
//!
//! Static reference data for the analysis panel. Every lookup here is a
//! constant mapping: no computation, no external call.
//!
//! ```text
//! InteractionType ──config()──▶ InteractionConfig
//!                                ├── label / role / description
//!                                ├── tones: [ToneDescriptor; 3]
//!                                └── message (canned rewrite)
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formality/stakes category driving the suggested tone and message.
///
/// Also used as the value of the independent "role" picker: each category
/// carries exactly one role name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionType {
    #[default]
    LowStakesFormal,
    LowStakesInformal,
    HighStakesFormal,
    HighStakesInformal,
}

/// The interaction type the (canned) analysis suggests.
pub const AI_SUGGESTED_INTERACTION: InteractionType = InteractionType::LowStakesFormal;
/// Confidence shown next to the suggestion, in percent.
pub const AI_SUGGESTED_CONFIDENCE: u8 = 72;

impl InteractionType {
    pub const ALL: [InteractionType; 4] = [
        InteractionType::LowStakesFormal,
        InteractionType::LowStakesInformal,
        InteractionType::HighStakesFormal,
        InteractionType::HighStakesInformal,
    ];

    /// Kebab-case identifier used in config files, env vars and the CLI.
    pub fn key(&self) -> &'static str {
        match self {
            InteractionType::LowStakesFormal => "low-stakes-formal",
            InteractionType::LowStakesInformal => "low-stakes-informal",
            InteractionType::HighStakesFormal => "high-stakes-formal",
            InteractionType::HighStakesInformal => "high-stakes-informal",
        }
    }

    pub fn config(&self) -> &'static InteractionConfig {
        match self {
            InteractionType::LowStakesFormal => &LOW_STAKES_FORMAL,
            InteractionType::LowStakesInformal => &LOW_STAKES_INFORMAL,
            InteractionType::HighStakesFormal => &HIGH_STAKES_FORMAL,
            InteractionType::HighStakesInformal => &HIGH_STAKES_INFORMAL,
        }
    }

    pub fn label(&self) -> &'static str {
        self.config().label
    }

    pub fn role(&self) -> &'static str {
        self.config().role
    }

    pub fn is_ai_suggested(&self) -> bool {
        *self == AI_SUGGESTED_INTERACTION
    }

    /// Next value in `ALL`, wrapping around.
    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous value in `ALL`, wrapping around.
    pub fn prev(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string is not one of the four interaction keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInteraction(pub String);

impl fmt::Display for UnknownInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown interaction type '{}' (expected one of: low-stakes-formal, low-stakes-informal, high-stakes-formal, high-stakes-informal)",
            self.0
        )
    }
}

impl std::error::Error for UnknownInteraction {}

impl FromStr for InteractionType {
    type Err = UnknownInteraction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        InteractionType::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownInteraction(s.to_string()))
    }
}

/// A short canned title/description pair recommending a communication style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneDescriptor {
    pub title: &'static str,
    pub description: &'static str,
}

/// Everything the panel shows for one interaction type.
#[derive(Debug, PartialEq, Eq)]
pub struct InteractionConfig {
    pub label: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub tones: [ToneDescriptor; 3],
    pub message: &'static str,
}

static LOW_STAKES_FORMAL: InteractionConfig = InteractionConfig {
    label: "Low-stakes, Formal",
    role: "Professional Communicator",
    description: "Professional courtesy in routine matters",
    tones: [
        ToneDescriptor {
            title: "Polite & Professional",
            description: "Maintain formal language while being approachable. Use complete sentences and avoid slang.",
        },
        ToneDescriptor {
            title: "Clear & Concise",
            description: "Get to the point quickly while maintaining professionalism. Respect their time.",
        },
        ToneDescriptor {
            title: "Friendly but Bounded",
            description: "Be warm but maintain professional distance. Avoid oversharing personal details.",
        },
    ],
    message: "Thank you for reaching out regarding the proposal. I'll review it and provide feedback by 3pm today. Please let me know if you have any specific questions.",
};

static LOW_STAKES_INFORMAL: InteractionConfig = InteractionConfig {
    label: "Low-stakes, Informal",
    role: "Friendly Colleague",
    description: "Casual and relaxed for everyday chats",
    tones: [
        ToneDescriptor {
            title: "Casual & Relaxed",
            description: "Use conversational language and friendly expressions. Feel free to be yourself.",
        },
        ToneDescriptor {
            title: "Show Personality",
            description: "Let your personality shine through with humor or emojis if it feels natural.",
        },
        ToneDescriptor {
            title: "Keep it Light",
            description: "Don't overthink responses. Brief and friendly works great for low-stakes conversations.",
        },
    ],
    message: "Hey! Thanks for the reminder 😊 I'll check out the proposal and get back to you this afternoon. Appreciate the patience!",
};

static HIGH_STAKES_FORMAL: InteractionConfig = InteractionConfig {
    label: "High-stakes, Formal",
    role: "Executive Communicator",
    description: "Precision and formality for important matters",
    tones: [
        ToneDescriptor {
            title: "Authoritative & Clear",
            description: "Be decisive and direct. Demonstrate competence through clear, structured communication.",
        },
        ToneDescriptor {
            title: "Detail-Oriented",
            description: "Provide specific timelines and commitments. Show you take this seriously with thorough responses.",
        },
        ToneDescriptor {
            title: "Respectful & Measured",
            description: "Acknowledge the importance of the matter. Use formal language and show appreciation for their time.",
        },
    ],
    message: "Thank you for your follow-up on this important proposal. I understand the time sensitivity and have prioritized my review. You can expect comprehensive feedback by 3:00 PM today, including specific recommendations on the key points you've outlined. Please don't hesitate to reach out if you need any clarification in the interim.",
};

static HIGH_STAKES_INFORMAL: InteractionConfig = InteractionConfig {
    label: "High-stakes, Informal",
    role: "Trusted Partner",
    description: "Serious but authentic connection",
    tones: [
        ToneDescriptor {
            title: "Authentic & Direct",
            description: "Be genuine while showing you understand the stakes. Skip formalities but not professionalism.",
        },
        ToneDescriptor {
            title: "Committed & Accountable",
            description: "Make clear commitments and follow through. Show ownership without corporate speak.",
        },
        ToneDescriptor {
            title: "Build Trust",
            description: "Communicate openly about constraints and priorities. Transparency builds credibility.",
        },
    ],
    message: "Really appreciate you following up, Jordan. I know this is important and I've got it on my priority list. You'll have my detailed thoughts by 3pm today — I'll make sure to cover everything you need. Hit me up if anything urgent comes up before then.",
};

// ============================================================================
// Insights (static analysis readout)
// ============================================================================

/// Strength of an observed tone trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneLevel {
    High,
    Med,
    Low,
}

impl ToneLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ToneLevel::High => "High",
            ToneLevel::Med => "Med",
            ToneLevel::Low => "Low",
        }
    }

    /// Arrow glyph shown before the label.
    pub fn glyph(&self) -> &'static str {
        match self {
            ToneLevel::High => "↑",
            ToneLevel::Med => "–",
            ToneLevel::Low => "↓",
        }
    }
}

/// One row of the "Recipient's Tone" / "Your Tone" tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneTrait {
    pub label: &'static str,
    pub level: ToneLevel,
}

pub const RECIPIENT_TONE: [ToneTrait; 3] = [
    ToneTrait { label: "Polite & Courteous", level: ToneLevel::High },
    ToneTrait { label: "Appreciative", level: ToneLevel::High },
    ToneTrait { label: "Professional", level: ToneLevel::High },
];

pub const YOUR_TONE: [ToneTrait; 3] = [
    ToneTrait { label: "Casual", level: ToneLevel::High },
    ToneTrait { label: "Brief", level: ToneLevel::High },
    ToneTrait { label: "Somewhat Dismissive", level: ToneLevel::Med },
];

pub const RELATIONSHIP_SUMMARY: &str = "This appears to be a collaborative work relationship with moderate familiarity. The other person is seeking your input and values your feedback.";

pub const YOUR_TONE_ADVISORY: &str = "Your responses may come across as less engaged than intended.";

pub const ROLE_MISMATCH_WARNING: &str = "AI recommendations may not reflect the interaction type as well now.";
