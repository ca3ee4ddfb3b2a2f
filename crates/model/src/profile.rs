mod age;
mod email;
mod field;
mod gender;
mod validation;

pub use age::*;
pub use email::*;
pub use field::*;
pub use gender::*;
pub use validation::*;

use utils::non_empty_trimmed;

/// Validated profile which is inserted to the profile store.
///
/// Only [ProfileFields::validate] creates this, so required values are
/// always present and trimmed. Optional values are `None` when the input
/// was blank.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    name: String,
    age: ProfileAge,
    gender: Gender,
    email: Email,
    interests: String,
    looking_for: String,
    ideal_date: Option<String>,
    deal_breakers: Option<String>,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> ProfileAge {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }

    pub fn looking_for(&self) -> &str {
        &self.looking_for
    }

    pub fn ideal_date(&self) -> Option<&str> {
        self.ideal_date.as_deref()
    }

    pub fn deal_breakers(&self) -> Option<&str> {
        self.deal_breakers.as_deref()
    }
}

/// Raw form input. Values are kept exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub email: String,
    pub interests: String,
    pub looking_for: String,
    pub ideal_date: String,
    pub deal_breakers: String,
}

impl ProfileFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Email => &self.email,
            Field::Interests => &self.interests,
            Field::LookingFor => &self.looking_for,
            Field::IdealDate => &self.ideal_date,
            Field::DealBreakers => &self.deal_breakers,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Age => self.age = value,
            Field::Gender => self.gender = value,
            Field::Email => self.email = value,
            Field::Interests => self.interests = value,
            Field::LookingFor => self.looking_for = value,
            Field::IdealDate => self.ideal_date = value,
            Field::DealBreakers => self.deal_breakers = value,
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Build the profile or return every invalid field.
    pub fn validate(&self) -> Result<Profile, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = non_empty_trimmed(&self.name);
        if name.is_none() {
            errors.add(Field::Name, "Name is required");
        }

        let age = ProfileAge::parse_input(&self.age)
            .map_err(|e| errors.add(Field::Age, e.message()))
            .ok();

        let gender = match self.gender.trim() {
            "" => {
                errors.add(Field::Gender, "Gender is required");
                None
            }
            value => value
                .parse::<Gender>()
                .map_err(|_| errors.add(Field::Gender, "Invalid gender"))
                .ok(),
        };

        let email = match self.email.trim() {
            "" => {
                errors.add(Field::Email, "Email is required");
                None
            }
            value => Email::try_from(value.to_string())
                .map_err(|e| errors.add(Field::Email, e))
                .ok(),
        };

        let interests = non_empty_trimmed(&self.interests);
        if interests.is_none() {
            errors.add(Field::Interests, REQUIRED_FIELD_MESSAGE);
        }

        let looking_for = non_empty_trimmed(&self.looking_for);
        if looking_for.is_none() {
            errors.add(Field::LookingFor, REQUIRED_FIELD_MESSAGE);
        }

        match (name, age, gender, email, interests, looking_for) {
            (
                Some(name),
                Some(age),
                Some(gender),
                Some(email),
                Some(interests),
                Some(looking_for),
            ) if errors.is_empty() => Ok(Profile {
                name,
                age,
                gender,
                email,
                interests,
                looking_for,
                ideal_date: non_empty_trimmed(&self.ideal_date),
                deal_breakers: non_empty_trimmed(&self.deal_breakers),
            }),
            _ => Err(errors),
        }
    }
}

/// Validate fields without building the profile.
pub fn validate(fields: &ProfileFields) -> ValidationErrors {
    fields.validate().err().unwrap_or_default()
}
