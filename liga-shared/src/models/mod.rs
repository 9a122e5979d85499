/// Database models
///
/// Each entity owns its table and its CRUD operations. Wire field names
/// follow the league's existing clients (`number_ID`, `estado`,
/// `name_event`, ...), so several structs carry serde renames.
///
/// # Models
///
/// - `skater`: athlete records ("patinadores"), keyed by the
///   league-assigned `number_ID`
/// - `resolution`: competition resolutions, looked up by event name
/// - `staff`: credentialed administrative accounts (secretarios and
///   entrenadores)

pub mod resolution;
pub mod skater;
pub mod staff;

use once_cell::sync::Lazy;
use regex::Regex;

/// Date fields across the league's records use `dd/mm/yyyy` as plain text.
pub static DATE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("valid date regex"));
