//! Resolves user-typed item references.
//!
//! A reference is tried as a full id, then as the exact name of an item in
//! the current folder, then as a unique prefix of the id's hex form (as
//! shown in listings) of at least [`MIN_PREFIX_LEN`] characters.

use bault_core::error::AppError;
use bault_core::result::AppResult;
use bault_core::types::ItemId;
use bault_service::Dashboard;

/// Token naming the root folder.
pub const ROOT: &str = "/";

/// Shortest id prefix accepted; the width listings show.
pub const MIN_PREFIX_LEN: usize = 8;

/// Resolve a reference to an existing item.
pub fn resolve_item(dashboard: &Dashboard, token: &str) -> AppResult<ItemId> {
    if let Ok(id) = token.parse::<ItemId>() {
        return Ok(id);
    }

    let store = dashboard.store();
    let by_name: Vec<ItemId> = store
        .list_children(dashboard.current_folder())
        .into_iter()
        .filter(|item| item.name == token)
        .map(|item| item.id)
        .collect();
    match by_name.as_slice() {
        [id] => return Ok(*id),
        [] => {}
        _ => {
            return Err(AppError::validation(format!(
                "Several items are named '{token}'; use the id"
            )));
        }
    }

    let prefix = token.replace('-', "").to_lowercase();
    if prefix.len() >= MIN_PREFIX_LEN && prefix.chars().all(|c| c.is_ascii_hexdigit()) {
        let matches: Vec<ItemId> = store
            .items()
            .map(|item| item.id)
            .filter(|id| id.into_uuid().simple().to_string().starts_with(&prefix))
            .collect();
        match matches.as_slice() {
            [id] => return Ok(*id),
            [] => {}
            _ => {
                return Err(AppError::validation(format!(
                    "'{token}' matches {} items; type more of the id",
                    matches.len()
                )));
            }
        }
    }

    Err(AppError::not_found(format!("No item matches '{token}'")))
}

/// Resolve a move target; [`ROOT`] means the root.
pub fn resolve_target(dashboard: &Dashboard, token: &str) -> AppResult<Option<ItemId>> {
    if token == ROOT {
        Ok(None)
    } else {
        resolve_item(dashboard, token).map(Some)
    }
}
