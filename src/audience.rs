use crate::BrochureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The intended reader of the brochure. Selects both the instruction wording
/// and the example brochure interpolated into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Client,
    Investor,
    Recruit,
}

impl Audience {
    /// Lowercase key, matching the serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            Audience::Client => "client",
            Audience::Investor => "investor",
            Audience::Recruit => "recruit",
        }
    }

    /// Capitalized label used in the prompt directives.
    pub fn label(&self) -> &'static str {
        match self {
            Audience::Client => "Client",
            Audience::Investor => "Investor",
            Audience::Recruit => "Recruit",
        }
    }

    /// Hand-authored example brochure embedded verbatim in the prompt to set
    /// tone and structure for this audience.
    pub fn example(&self) -> &'static str {
        match self {
            Audience::Client => CLIENT_EXAMPLE,
            Audience::Investor => INVESTOR_EXAMPLE,
            Audience::Recruit => RECRUIT_EXAMPLE,
        }
    }

    /// Parse an external audience label. Unrecognized values fail rather
    /// than falling back to a default.
    pub fn parse(value: &str) -> Result<Self, BrochureError> {
        match value {
            "client" => Ok(Audience::Client),
            "investor" => Ok(Audience::Investor),
            "recruit" => Ok(Audience::Recruit),
            other => Err(BrochureError::UnknownAudience(other.to_string())),
        }
    }
}

impl FromStr for Audience {
    type Err = BrochureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Audience::parse(s)
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

const CLIENT_EXAMPLE: &str = r#"# Meet Hearthlight Software

**Tools your whole team opens on purpose.**

Hearthlight builds planning software for mid-size logistics companies.
Dispatchers see every route, every driver, every delay on one screen, and
changes made in the field show up at head office in seconds.

## Why customers stay

- Setup takes an afternoon, not a quarter.
- Support is answered by the engineers who built the product.
- Pricing is per depot, so growing your fleet never means renegotiating.

Come see what a calm Monday morning looks like: book a demo at
hearthlight.example/demo."#;

const INVESTOR_EXAMPLE: &str = r#"# Hearthlight Software — Investor Brief

**A sticky product in an underserved market.**

Hearthlight sells route-planning software to mid-size logistics firms, a
segment the large TMS vendors price out and spreadsheets cannot serve.

## The numbers that matter

- 140% net revenue retention over the trailing twelve months.
- Gross margin above 80%, with infrastructure costs flat as usage grows.
- Three-year contracts standard since the 2024 repricing.

The team is now expanding from dispatch into billing, roughly tripling the
contract value available in each existing account."#;

const RECRUIT_EXAMPLE: &str = r#"# Build Your Career at Hearthlight

**Small team, real problems, shipped weekly.**

Hearthlight is twenty-eight people making logistics software that
dispatchers genuinely like. Engineers here own features end to end: you will
talk to the customer, design the fix, ship it, and watch it land.

## What we offer

- Remote-first, with a week together in person each quarter.
- A learning budget that does not require a form in triplicate.
- Salaries published in every job ad, no negotiation games.

If you want your work used hard every single day, see our open roles at
hearthlight.example/careers."#;
