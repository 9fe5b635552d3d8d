use crate::state::WorldGraph;

/// Static map oracle exposing the pristine world layout.
///
/// Every raid starts from a clone of the blueprint, so loot taken and enemies
/// killed in one raid never leak into the next.
pub trait MapOracle {
    fn blueprint(&self) -> &WorldGraph;
}
