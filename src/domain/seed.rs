//! Fixture users loaded into a fresh store.

use super::entities::User;

/// `(id, forename, surname, email, is_active)` for every fixture row.
const SEED_USERS: [(i64, &str, &str, &str, bool); 11] = [
    (1, "Peter", "Loew", "ploew@example.com", true),
    (2, "Benjamin Franklin", "Gates", "bfgates@example.com", true),
    (3, "Castor", "Troy", "ctroy@example.com", false),
    (4, "Memphis", "Raines", "mraines@example.com", true),
    (5, "Stanley", "Goodspeed", "sgodspeed@example.com", true),
    (6, "H.I.", "McDunnough", "himcdunnough@example.com", true),
    (7, "Cameron", "Poe", "cpoe@example.com", false),
    (8, "Edward", "Malus", "emalus@example.com", false),
    (9, "Damon", "Macready", "dmacready@example.com", false),
    (10, "Johnny", "Blaze", "jblaze@example.com", true),
    (11, "Robin", "Feld", "rfeld@example.com", true),
];

/// Returns the fixed fixture table (ids 1 to 11).
pub fn seed_users() -> Vec<User> {
    SEED_USERS
        .iter()
        .map(|&(id, forename, surname, email, is_active)| {
            User::new(forename, surname, email, is_active, None).with_id(id)
        })
        .collect()
}
