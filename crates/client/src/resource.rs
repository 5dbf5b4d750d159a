use std::fmt;

use kindred_core::models::legacy_audio::{CreateLegacyAudio, LegacyAudio, UpdateLegacyAudio};
use kindred_core::models::recipe::{CreateRecipe, Recipe, UpdateRecipe};
use kindred_core::models::timeline_note::{CreateTimelineNote, TimelineNote, UpdateTimelineNote};
use kindred_core::types::Identified;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// One of the archive collections served under `/api`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Recipes,
    LegacyAudio,
    TimelineNotes,
}

impl Collection {
    /// Path segment under `/api`.
    pub fn path(self) -> &'static str {
        match self {
            Collection::Recipes => "recipes",
            Collection::LegacyAudio => "legacy-audio",
            Collection::TimelineNotes => "timeline-notes",
        }
    }

    /// Singular noun for user-facing messages.
    pub fn noun(self) -> &'static str {
        match self {
            Collection::Recipes => "recipe",
            Collection::LegacyAudio => "audio story",
            Collection::TimelineNotes => "timeline note",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Collection::Recipes => "recipes",
            Collection::LegacyAudio => "audio stories",
            Collection::TimelineNotes => "timeline notes",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A row type the client can fetch, together with its write shapes.
pub trait Resource: DeserializeOwned + Identified + Clone + Send + Sync + 'static {
    type Create: Serialize + Sync;
    type Update: Serialize + Sync;

    const COLLECTION: Collection;
}

impl Resource for Recipe {
    type Create = CreateRecipe;
    type Update = UpdateRecipe;

    const COLLECTION: Collection = Collection::Recipes;
}

impl Resource for LegacyAudio {
    type Create = CreateLegacyAudio;
    type Update = UpdateLegacyAudio;

    const COLLECTION: Collection = Collection::LegacyAudio;
}

impl Resource for TimelineNote {
    type Create = CreateTimelineNote;
    type Update = UpdateTimelineNote;

    const COLLECTION: Collection = Collection::TimelineNotes;
}
