use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown wherever a record arrives without a `name` object.
pub const UNNAMED: &str = "(unnamed)";

/// Fields that can be requested through the `fields` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Cca2,
    Name,
    Population,
    Subregion,
    UnMember,
}

impl Field {
    /// The field name as the API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Cca2 => "cca2",
            Field::Name => "name",
            Field::Population => "population",
            Field::Subregion => "subregion",
            Field::UnMember => "unMember",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which collection of countries to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Every country (`/all`).
    All,
    /// Countries speaking the given language (`/lang/{language}`).
    Language(String),
}

/// `name` object of a country record. Only `common` is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountryName {
    #[serde(default)]
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
}

/// One country record as returned by the API.
///
/// Every request restricts the returned fields, so each attribute defaults
/// when absent instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cca2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<CountryName>,
    /// Some mirrors serialize population as a float (`1.0e7`); accept both.
    #[serde(
        default,
        deserialize_with = "de_opt_u64_from_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub population: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub un_member: Option<bool>,
}

impl Country {
    /// Record with only a common name, mostly useful for building fixtures.
    pub fn named(common: impl Into<String>) -> Self {
        Self {
            name: Some(CountryName {
                common: common.into(),
                official: None,
            }),
            ..Self::default()
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_subregion(mut self, subregion: impl Into<String>) -> Self {
        self.subregion = Some(subregion.into());
        self
    }

    pub fn with_un_member(mut self, un_member: bool) -> Self {
        self.un_member = Some(un_member);
        self
    }

    /// Common display name, or [`UNNAMED`] when the record has none.
    pub fn common_name(&self) -> &str {
        self.name.as_ref().map_or(UNNAMED, |n| n.common.as_str())
    }

    /// `true` only when the population is known and strictly above `threshold`.
    pub fn population_above(&self, threshold: u64) -> bool {
        self.population.is_some_and(|p| p > threshold)
    }

    /// A missing or `null` flag counts as "not a member".
    pub fn is_un_member(&self) -> bool {
        self.un_member.unwrap_or(false)
    }
}

/// Serde helper: parse an optional `u64` from a JSON integer or an integral float.
fn de_opt_u64_from_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct PopulationVisitor;

    impl<'de> Visitor<'de> for PopulationVisitor {
        type Value = Option<u64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a non-negative number or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(v)
                .map(Some)
                .map_err(|_| E::custom("negative population"))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.is_finite() && v >= 0.0 && v.fract() == 0.0 {
                Ok(Some(v as u64))
            } else {
                Err(E::custom(format!("invalid population {v}")))
            }
        }
    }

    deserializer.deserialize_option(PopulationVisitor)
}
