use crate::error::{ErrorSeverity, GameError};
use crate::state::{Delta, EntityId, EntityRegistry, Map, Position};

/// Reasons a move is refused. Refusal is ordinary game logic: the mover
/// simply stays where it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is occupied by {occupant}")]
    Occupied {
        destination: Position,
        occupant: EntityId,
    },

    #[error("destination {destination} is blocked")]
    Blocked { destination: Position },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EntityNotFound(_) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EntityNotFound(_) => "MOVE_ENTITY_NOT_FOUND",
            Self::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            Self::Occupied { .. } => "MOVE_OCCUPIED",
            Self::Blocked { .. } => "MOVE_BLOCKED",
        }
    }
}

/// Checks whether `id` may stand on `destination`.
///
/// Ghosts are always accepted. Everyone else needs an in-bounds,
/// non-solid cell that no other non-ghost entity occupies.
pub fn validate_move(
    registry: &EntityRegistry,
    map: &Map,
    id: EntityId,
    destination: Position,
) -> Result<(), MoveError> {
    let mover = registry.get(id).ok_or(MoveError::EntityNotFound(id))?;
    if mover.is_ghost() {
        return Ok(());
    }

    if !map.contains(destination) {
        return Err(MoveError::OutOfBounds { destination });
    }

    let occupant = registry
        .iter()
        .find(|(other, record)| {
            *other != id && !record.is_ghost() && record.position == destination
        })
        .map(|(other, _)| other);
    if let Some(occupant) = occupant {
        return Err(MoveError::Occupied {
            destination,
            occupant,
        });
    }

    if map.is_solid(destination) {
        return Err(MoveError::Blocked { destination });
    }

    Ok(())
}

/// Moves `id` to `destination` if the move is legal.
///
/// Returns whether the entity moved; a refused move changes nothing.
pub fn try_move(
    registry: &mut EntityRegistry,
    map: &Map,
    id: EntityId,
    destination: Position,
) -> bool {
    if validate_move(registry, map, id, destination).is_err() {
        return false;
    }
    match registry.get_mut(id) {
        Some(record) => {
            record.position = destination;
            true
        }
        None => false,
    }
}

/// Moves `id` by `delta` relative to its current position.
pub fn shift(registry: &mut EntityRegistry, map: &Map, id: EntityId, delta: Delta) -> bool {
    match registry.position(id) {
        Some(origin) => try_move(registry, map, id, origin.offset(delta)),
        None => false,
    }
}
