//! Commit author resolution

use crate::error::{Error, Result};
use crate::event::TriggerEvent;
use crate::types::Author;

/// Email domain GitHub uses for private no-reply addresses
const NOREPLY_DOMAIN: &str = "users.noreply.github.com";

/// Author for the generated commit
///
/// Push events credit the author of the pushed head commit. Other events
/// credit the acting user with their no-reply address.
pub fn resolve_author(event: &TriggerEvent, actor: Option<&str>) -> Result<Author> {
    if event.is_push() {
        return Ok(Author {
            name: event.field(&["head_commit", "author", "name"])?,
            email: event.field(&["head_commit", "author", "email"])?,
        });
    }

    let actor = actor
        .filter(|a| !a.is_empty())
        .ok_or(Error::MissingConfig("GITHUB_ACTOR"))?;

    Ok(Author {
        name: actor.to_string(),
        email: format!("{actor}@{NOREPLY_DOMAIN}"),
    })
}
