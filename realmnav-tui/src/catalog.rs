//! In-memory catalog standing in for the remote content service.
//!
//! Realms, their stories, subscription plans and wish packs, plus the
//! user's profile (plan tier and wish balance).

use serde::{Deserialize, Serialize};

use realmnav_core::ItemId;

/// A content collection the user can pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Realm {
    pub id: ItemId,
    pub name: String,
    pub tagline: String,
}

/// A story inside a realm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: String,
    pub realm: ItemId,
    pub title: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
}

impl PlanTier {
    pub fn label(self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Pro => "Pro",
        }
    }
}

/// A purchasable subscription plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanOffer {
    pub id: String,
    pub name: String,
    pub price: String,
    pub perks: Vec<String>,
}

/// A one-off pack of wishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishPack {
    pub id: String,
    pub wishes: u32,
    pub price: String,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub plan: PlanTier,
    pub wishes: u32,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            plan: PlanTier::Free,
            wishes: 120,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub realms: Vec<Realm>,
    pub stories: Vec<Story>,
    pub plans: Vec<PlanOffer>,
    pub packs: Vec<WishPack>,
}

impl Catalog {
    pub fn realm(&self, id: &ItemId) -> Option<&Realm> {
        self.realms.iter().find(|r| &r.id == id)
    }

    pub fn stories_for(&self, realm: &ItemId) -> Vec<Story> {
        self.stories
            .iter()
            .filter(|s| &s.realm == realm)
            .cloned()
            .collect()
    }

    pub fn sample() -> Self {
        let realms = vec![
            realm("solar-eden", "Solar Eden", "Gardens grown on a dying star"),
            realm("iron-sea", "Iron Sea", "Rust-red tides and drowned engines"),
            realm("glass-woods", "Glass Woods", "A forest that remembers every footstep"),
            realm("ember-vault", "Ember Vault", "The last library, kept warm by dragons"),
        ];

        let stories = vec![
            story("se-1", "solar-eden", "The Gardener's Oath"),
            story("se-2", "solar-eden", "Seeds of Helium"),
            story("se-3", "solar-eden", "Noon That Never Ends"),
            story("is-1", "iron-sea", "Salvage Rights"),
            story("is-2", "iron-sea", "The Lighthouse Engine"),
            story("gw-1", "glass-woods", "Echo Trail"),
            story("gw-2", "glass-woods", "Splinters"),
            story("ev-1", "ember-vault", "Overdue"),
        ];

        let plans = vec![
            PlanOffer {
                id: "pro-month".into(),
                name: "Pro Monthly".into(),
                price: "$9.99 / month".into(),
                perks: vec!["Unlimited energy".into(), "Priority generation".into()],
            },
            PlanOffer {
                id: "pro-year".into(),
                name: "Pro Yearly".into(),
                price: "$79.00 / year".into(),
                perks: vec![
                    "Unlimited energy".into(),
                    "Priority generation".into(),
                    "Two months free".into(),
                ],
            },
        ];

        let packs = [
            (85, "$8.80"),
            (210, "$18.00"),
            (540, "$38.00"),
            (1360, "$79.00"),
            (2720, "$141.00"),
            (5000, "$200.00"),
        ]
        .into_iter()
        .map(|(wishes, price)| WishPack {
            id: wishes.to_string(),
            wishes,
            price: price.to_string(),
        })
        .collect();

        Self {
            realms,
            stories,
            plans,
            packs,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

fn realm(id: &str, name: &str, tagline: &str) -> Realm {
    Realm {
        id: ItemId::from(id),
        name: name.to_string(),
        tagline: tagline.to_string(),
    }
}

fn story(id: &str, realm: &str, title: &str) -> Story {
    Story {
        id: id.to_string(),
        realm: ItemId::from(realm),
        title: title.to_string(),
    }
}
