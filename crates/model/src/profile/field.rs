use std::{fmt, str::FromStr};

/// Form field identifier. Order matches the order of the fields in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Age,
    Gender,
    Email,
    Interests,
    LookingFor,
    IdealDate,
    DealBreakers,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Self::Name,
        Self::Age,
        Self::Gender,
        Self::Email,
        Self::Interests,
        Self::LookingFor,
        Self::IdealDate,
        Self::DealBreakers,
    ];

    /// Field name used in the stored record and in validation results.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Email => "email",
            Self::Interests => "interests",
            Self::LookingFor => "lookingFor",
            Self::IdealDate => "idealDate",
            Self::DealBreakers => "dealBreakers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Email => "Email",
            Self::Interests => "Your Interests",
            Self::LookingFor => "What You're Looking For",
            Self::IdealDate => "Ideal First Date",
            Self::DealBreakers => "Deal Breakers",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Age => "Your age",
            Self::Gender => "Select gender",
            Self::Email => "your.email@example.com",
            Self::Interests => "Tell us about your hobbies and interests...",
            Self::LookingFor => "Describe your ideal match...",
            Self::IdealDate => "Describe your perfect first date...",
            Self::DealBreakers => "Any absolute deal breakers?",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::IdealDate | Self::DealBreakers)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("Unknown field: {s}"))
    }
}
