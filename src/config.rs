//! Fixed rules of the game, shared by the simulation and the local server.

/// Seats at the table; the server always reports exactly four heroes.
pub const NUM_SEATS: usize = 4;

/// Life granted at match start and restored by a respawn.
pub const FULL_LIFE: i32 = 100;

/// Damage taken when stepping into a mine that is not already yours.
pub const MINE_DAMAGE: i32 = 20;

/// Damage dealt to each hero adjacent to the mover.
pub const FIGHT_DAMAGE: i32 = 20;

/// Gold price of a tavern drink.
pub const DRINK_COST: i32 = 2;

/// Life restored by a tavern drink, clamped to `FULL_LIFE`.
pub const DRINK_LIFE: i32 = 50;
